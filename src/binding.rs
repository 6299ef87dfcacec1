use crate::domain::{FieldDataType, Variable, VariableKind};

/// Label shown for the sentinel "no selection" entry that heads every
/// binding option list.
pub const NONE_OPTION_LABEL: &str = "--None--";

/// One selectable entry in a field's variable-binding picker. The sentinel
/// entry carries an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingOption {
    pub label: String,
    pub value: String,
}

impl BindingOption {
    fn none() -> Self {
        Self {
            label: NONE_OPTION_LABEL.to_string(),
            value: String::new(),
        }
    }

    fn for_variable(variable: &Variable) -> Self {
        Self {
            label: variable.name.clone(),
            value: variable.name.clone(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.value.is_empty()
    }
}

/// Whether a variable of `kind` may be bound to a field of `field_type`.
///
/// `REFERENCE` fields additionally accept record variables, but only when
/// the variable's declared record type equals the currently selected
/// object's api name exactly.
pub fn is_assignable(field_type: &FieldDataType, kind: &VariableKind, selected_object: &str) -> bool {
    match field_type {
        FieldDataType::String
        | FieldDataType::TextArea
        | FieldDataType::Phone
        | FieldDataType::Email
        | FieldDataType::Url
        | FieldDataType::Picklist
        | FieldDataType::MultiPicklist => matches!(kind, VariableKind::String),
        FieldDataType::Boolean => matches!(kind, VariableKind::Boolean),
        FieldDataType::Integer
        | FieldDataType::Double
        | FieldDataType::Percent
        | FieldDataType::Currency => matches!(kind, VariableKind::Number),
        FieldDataType::Date => matches!(kind, VariableKind::Date),
        FieldDataType::DateTime => matches!(kind, VariableKind::DateTime),
        FieldDataType::Reference => match kind {
            VariableKind::String => true,
            VariableKind::SObject { object_type } => {
                object_type.as_deref() == Some(selected_object)
            }
            _ => false,
        },
        FieldDataType::Other(_) => false,
    }
}

/// Variables assignable to a field of `field_type`, in input order.
pub fn assignable_variables<'a>(
    field_type: &FieldDataType,
    variables: &'a [Variable],
    selected_object: &str,
) -> Vec<&'a Variable> {
    variables
        .iter()
        .filter(|variable| is_assignable(field_type, &variable.kind, selected_object))
        .collect()
}

/// Binding picker entries for a field: the sentinel first, then every
/// assignable variable in input order.
pub fn binding_options(
    field_type: &FieldDataType,
    variables: &[Variable],
    selected_object: &str,
) -> Vec<BindingOption> {
    let mut options = vec![BindingOption::none()];
    options.extend(
        assignable_variables(field_type, variables, selected_object)
            .into_iter()
            .map(BindingOption::for_variable),
    );
    options
}

/// True when `value` names a known variable, either exactly or as a dotted
/// path rooted at one (`recordVar.StageName`). Used to tell a
/// variable-bound default apart from a literal.
pub fn is_known_variable_reference(value: &str, variables: &[Variable]) -> bool {
    variables.iter().any(|variable| {
        value == variable.name
            || value
                .strip_prefix(&variable.name)
                .is_some_and(|rest| rest.starts_with('.'))
    })
}
