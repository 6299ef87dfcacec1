use indexmap::IndexMap;

use crate::binding::{self, BindingOption};
use crate::domain::{FieldDataType, Variable};
use crate::layout::ReconciledField;

/// One selectable field in the exclusion editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChoice {
    pub label: String,
    pub value: String,
}

/// Scratch state for the excluded-fields editor. Holds the author's picks
/// until saved; dropping the draft discards them.
#[derive(Debug, Clone)]
pub struct ExclusionDraft {
    options: Vec<FieldChoice>,
    selected: Vec<String>,
}

impl ExclusionDraft {
    pub(crate) fn new(fields: &[ReconciledField], current: &[String]) -> Self {
        Self {
            options: fields
                .iter()
                .map(|field| FieldChoice {
                    label: field.descriptor.label.clone(),
                    value: field.descriptor.api_name.clone(),
                })
                .collect(),
            selected: current.to_vec(),
        }
    }

    pub fn options(&self) -> &[FieldChoice] {
        &self.options
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn set_selected(&mut self, selected: Vec<String>) {
        self.selected = selected;
    }

    pub(crate) fn into_selected(self) -> Vec<String> {
        self.selected
    }
}

/// One field row in the default-values editor.
#[derive(Debug, Clone)]
pub struct DefaultValueRow {
    pub api_name: String,
    pub label: String,
    pub data_type: FieldDataType,
    /// Current draft value: a literal, or a variable reference path.
    pub value: String,
    /// Whether `value` names a known variable rather than a literal.
    pub variable_bound: bool,
    /// Picker entries legal for this field, sentinel first.
    pub options: Vec<BindingOption>,
}

/// Scratch state for the default-values editor.
///
/// Built when the editor opens the modal; every mutation stays inside the
/// session until `EditorState::save_default_values` commits it. Each row is
/// annotated with the variables assignable to its field type and with
/// whether its current value is variable-bound.
#[derive(Debug, Clone)]
pub struct DefaultValuesSession {
    rows: Vec<DefaultValueRow>,
    variables: Vec<Variable>,
    record_variable: String,
}

impl DefaultValuesSession {
    pub(crate) fn new(
        fields: &[ReconciledField],
        current: &IndexMap<String, String>,
        variables: &[Variable],
        object_api_name: &str,
    ) -> Self {
        let rows = fields
            .iter()
            .map(|field| {
                let value = current
                    .get(&field.descriptor.api_name)
                    .cloned()
                    .unwrap_or_default();
                DefaultValueRow {
                    api_name: field.descriptor.api_name.clone(),
                    label: field.descriptor.label.clone(),
                    data_type: field.descriptor.data_type.clone(),
                    variable_bound: binding::is_known_variable_reference(&value, variables),
                    options: binding::binding_options(
                        &field.descriptor.data_type,
                        variables,
                        object_api_name,
                    ),
                    value,
                }
            })
            .collect();
        Self {
            rows,
            variables: variables.to_vec(),
            record_variable: String::new(),
        }
    }

    pub fn rows(&self) -> &[DefaultValueRow] {
        &self.rows
    }

    pub fn record_variable(&self) -> &str {
        &self.record_variable
    }

    /// Set a field's draft to a literal value; an empty value clears it.
    pub fn set_literal(&mut self, api_name: &str, value: &str) {
        if let Some(row) = self.row_mut(api_name) {
            row.value = value.to_string();
            row.variable_bound = false;
        }
    }

    /// Bind a field's draft to a variable reference; an empty reference
    /// clears it.
    pub fn set_variable(&mut self, api_name: &str, reference: &str) {
        let bound = binding::is_known_variable_reference(reference, &self.variables);
        if let Some(row) = self.row_mut(api_name) {
            row.value = reference.to_string();
            row.variable_bound = bound && !reference.is_empty();
        }
    }

    /// Fill every row from one record variable: each field's draft becomes
    /// `<variable>.<fieldApiName>`. An empty variable name clears all rows.
    pub fn apply_record_variable(&mut self, variable_name: &str) {
        self.record_variable = variable_name.to_string();
        if variable_name.is_empty() {
            for row in &mut self.rows {
                row.value.clear();
                row.variable_bound = false;
            }
            return;
        }
        for row in &mut self.rows {
            row.value = format!("{variable_name}.{}", row.api_name);
            row.variable_bound = true;
        }
    }

    /// Collapse the session into the values worth persisting.
    pub(crate) fn into_values(self) -> IndexMap<String, String> {
        self.rows
            .into_iter()
            .filter(|row| !row.value.is_empty())
            .map(|row| (row.api_name, row.value))
            .collect()
    }

    fn row_mut(&mut self, api_name: &str) -> Option<&mut DefaultValueRow> {
        self.rows.iter_mut().find(|row| row.api_name == api_name)
    }
}
