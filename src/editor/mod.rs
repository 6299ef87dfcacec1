use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::FieldCatalog;
use crate::config::{
    ConfigChange, ConfigInput, ConfigKey, ConfigValue, GENERIC_TYPE_NAME, TypeMapping,
    ValidationIssue, validate_configuration,
};
use crate::domain::{
    FieldDescriptor, LayoutDescriptor, LayoutFieldMembership, ObjectDescriptor, Variable,
};
use crate::layout::{ReconciledField, filter_by_membership};
use crate::services::MetadataService;
use crate::{defaults, exclusion};

mod session;

pub use session::{DefaultValueRow, DefaultValuesSession, ExclusionDraft, FieldChoice};

pub const DEFAULT_SAVE_LABEL: &str = "Save";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("select a page layout before choosing fields")]
    LayoutNotSelected,
}

/// A layout presented for selection, labeled with its display label and
/// keyed by developer name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutChoice {
    pub label: String,
    pub value: String,
    pub description: String,
}

/// Token for an in-flight layout-options fetch. Captures the fetch epoch so
/// a result that arrives after a superseding object change is discarded.
#[derive(Debug, Clone)]
pub struct LayoutLoadRequest {
    epoch: u64,
    pub object_api_name: String,
}

/// Token for an in-flight field fetch (object fields + layout memberships).
#[derive(Debug, Clone)]
pub struct FieldLoadRequest {
    epoch: u64,
    pub object_api_name: String,
    pub layout_developer_name: String,
}

/// Orchestrates the configuration-editing session.
///
/// Holds the flat configuration surface the host persists, the option lists
/// fetched from the metadata collaborator, and the reconciled field list.
/// Every mutation that the host must persist is recorded as a
/// `ConfigChange` and drained with `take_changes`; fetch failures become
/// advisories and leave prior state in place.
pub struct EditorState {
    service: Arc<dyn MetadataService>,

    object_api_name: Option<String>,
    layout_developer_name: Option<String>,
    card_title: Option<String>,
    show_icon: bool,
    record_id: Option<String>,
    read_only: bool,
    save_label: String,
    cancel_label: String,
    excluded_fields: Vec<String>,
    default_values: IndexMap<String, String>,

    object_options: Vec<ObjectDescriptor>,
    layout_options: Vec<LayoutDescriptor>,
    field_options: Vec<ReconciledField>,

    // excluded/default strings restored before fields exist; applied on the
    // next successful field load
    pending_excluded: Option<String>,
    pending_defaults: Option<String>,

    epoch: u64,
    changes: Vec<ConfigChange>,
    type_mapping_changes: Vec<TypeMapping>,
    advisories: Vec<String>,
}

impl EditorState {
    pub fn new(service: Arc<dyn MetadataService>) -> Self {
        Self {
            service,
            object_api_name: None,
            layout_developer_name: None,
            card_title: None,
            show_icon: false,
            record_id: None,
            read_only: false,
            save_label: DEFAULT_SAVE_LABEL.to_string(),
            cancel_label: DEFAULT_CANCEL_LABEL.to_string(),
            excluded_fields: Vec::new(),
            default_values: IndexMap::new(),
            object_options: Vec::new(),
            layout_options: Vec::new(),
            field_options: Vec::new(),
            pending_excluded: None,
            pending_defaults: None,
            epoch: 0,
            changes: Vec::new(),
            type_mapping_changes: Vec::new(),
            advisories: Vec::new(),
        }
    }

    // ----- configuration restore -----

    /// Seed the editor from persisted configuration plus any generic type
    /// mapping, then load the dependent option lists. Restore never emits
    /// change notifications for the values it merely reads back.
    pub async fn restore(&mut self, inputs: &[ConfigInput], mappings: &[TypeMapping]) {
        self.apply_inputs(inputs, mappings);
        self.load_layouts().await;
        self.load_fields().await;
    }

    /// Seed configuration values without fetching. Excluded-fields and
    /// default-values strings are held back until fields load.
    pub fn apply_inputs(&mut self, inputs: &[ConfigInput], mappings: &[TypeMapping]) {
        let mapped_object = mappings
            .iter()
            .find(|mapping| mapping.type_name == GENERIC_TYPE_NAME)
            .map(|mapping| mapping.type_value.clone())
            .filter(|value| !value.is_empty());
        let has_mapping = mapped_object.is_some();
        if self.object_api_name.is_none() {
            self.object_api_name = mapped_object;
        }

        for input in inputs {
            let Some(key) = ConfigKey::from_wire_name(&input.name) else {
                continue;
            };
            match key {
                ConfigKey::ObjectApiName => {
                    let value = input.value.as_text().unwrap_or_default();
                    // the mapping wins over an absent explicit value
                    if !has_mapping || !value.is_empty() {
                        self.object_api_name = non_empty(value);
                    }
                }
                ConfigKey::LayoutDeveloperName => {
                    self.layout_developer_name =
                        non_empty(input.value.as_text().unwrap_or_default());
                }
                ConfigKey::CardTitle => {
                    self.card_title = non_empty(input.value.as_text().unwrap_or_default());
                }
                ConfigKey::ShowIcon => self.show_icon = input.value.as_flag(),
                ConfigKey::RecordId => {
                    self.record_id = non_empty(input.value.as_text().unwrap_or_default());
                }
                ConfigKey::ReadOnly => self.read_only = input.value.as_flag(),
                ConfigKey::ExcludedFields => {
                    self.pending_excluded =
                        non_empty(input.value.as_text().unwrap_or_default());
                }
                ConfigKey::DefaultValues => {
                    self.pending_defaults =
                        non_empty(input.value.as_text().unwrap_or_default());
                }
                ConfigKey::SaveLabel => {
                    self.save_label = non_empty(input.value.as_text().unwrap_or_default())
                        .unwrap_or_else(|| DEFAULT_SAVE_LABEL.to_string());
                }
                ConfigKey::CancelLabel => {
                    self.cancel_label = non_empty(input.value.as_text().unwrap_or_default())
                        .unwrap_or_else(|| DEFAULT_CANCEL_LABEL.to_string());
                }
            }
        }
    }

    /// Adopt a host-pushed type mapping as the selected object. Returns
    /// whether the mapping applied; the caller should reload layouts when
    /// it did.
    pub fn apply_type_mapping(&mut self, mapping: &TypeMapping) -> bool {
        if mapping.type_name != GENERIC_TYPE_NAME || mapping.type_value.is_empty() {
            return false;
        }
        self.object_api_name = Some(mapping.type_value.clone());
        self.push_change(ConfigKey::ObjectApiName, mapping.type_value.as_str());
        self.epoch += 1;
        true
    }

    // ----- selection events -----

    /// Select (or clear) the target object. Resets the layout, exclusions
    /// and default values, notifies the host, and reloads layout options.
    pub async fn set_object(&mut self, object_api_name: Option<&str>) {
        self.object_api_name = object_api_name.and_then(non_empty);
        let announced = self.object_api_name.clone().unwrap_or_default();
        self.push_change(ConfigKey::ObjectApiName, announced);

        self.layout_developer_name = None;
        self.excluded_fields.clear();
        self.default_values.clear();
        self.field_options.clear();
        self.push_change(ConfigKey::LayoutDeveloperName, "");
        self.push_change(ConfigKey::ExcludedFields, "");
        self.push_change(ConfigKey::DefaultValues, "");
        self.type_mapping_changes.push(TypeMapping {
            type_name: GENERIC_TYPE_NAME.to_string(),
            type_value: self.object_api_name.clone().unwrap_or_default(),
        });

        self.epoch += 1;
        self.load_layouts().await;
    }

    /// Select (or clear) the layout and reload the reconciled field list.
    pub async fn set_layout(&mut self, developer_name: Option<&str>) {
        self.layout_developer_name = developer_name.and_then(non_empty);
        let announced = self.layout_developer_name.clone().unwrap_or_default();
        self.push_change(ConfigKey::LayoutDeveloperName, announced);
        self.epoch += 1;
        self.load_fields().await;
    }

    pub fn set_card_title(&mut self, title: &str) {
        self.card_title = non_empty(title);
        self.push_change(ConfigKey::CardTitle, title);
    }

    pub fn set_show_icon(&mut self, show: bool) {
        self.show_icon = show;
        self.push_change(ConfigKey::ShowIcon, show);
    }

    pub fn set_record_id(&mut self, record_id: &str) {
        self.record_id = non_empty(record_id);
        self.push_change(ConfigKey::RecordId, record_id);
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
        self.push_change(ConfigKey::ReadOnly, read_only);
    }

    pub fn set_save_label(&mut self, label: &str) {
        self.save_label = non_empty(label).unwrap_or_else(|| DEFAULT_SAVE_LABEL.to_string());
        let announced = self.save_label.clone();
        self.push_change(ConfigKey::SaveLabel, announced);
    }

    pub fn set_cancel_label(&mut self, label: &str) {
        self.cancel_label = non_empty(label).unwrap_or_else(|| DEFAULT_CANCEL_LABEL.to_string());
        let announced = self.cancel_label.clone();
        self.push_change(ConfigKey::CancelLabel, announced);
    }

    // ----- metadata loads -----

    pub async fn load_object_types(&mut self) {
        match self.service.fetch_object_types().await {
            Ok(objects) => self.object_options = objects,
            Err(error) => {
                warn!(%error, "object type fetch failed");
                self.advisories.push("Unable to load objects".to_string());
            }
        }
    }

    pub fn layout_load_request(&self) -> Option<LayoutLoadRequest> {
        Some(LayoutLoadRequest {
            epoch: self.epoch,
            object_api_name: self.object_api_name.clone()?,
        })
    }

    pub async fn load_layouts(&mut self) {
        let Some(request) = self.layout_load_request() else {
            self.layout_options.clear();
            return;
        };
        debug!(object = %request.object_api_name, "loading layouts");
        let result = self
            .service
            .fetch_available_layouts(&request.object_api_name)
            .await;
        self.apply_layout_load(&request, result);
    }

    /// Apply a layout-options fetch result. Returns false when the result
    /// is stale or the fetch failed; prior options stay in place on
    /// failure.
    pub fn apply_layout_load(
        &mut self,
        request: &LayoutLoadRequest,
        result: anyhow::Result<Vec<LayoutDescriptor>>,
    ) -> bool {
        if request.epoch != self.epoch {
            debug!(object = %request.object_api_name, "discarding stale layout load");
            return false;
        }
        match result {
            Ok(layouts) => {
                self.layout_options = layouts;
                true
            }
            Err(error) => {
                warn!(%error, object = %request.object_api_name, "layout fetch failed");
                self.advisories
                    .push("Unable to load page layouts".to_string());
                false
            }
        }
    }

    pub fn field_load_request(&self) -> Option<FieldLoadRequest> {
        Some(FieldLoadRequest {
            epoch: self.epoch,
            object_api_name: self.object_api_name.clone()?,
            layout_developer_name: self.layout_developer_name.clone()?,
        })
    }

    pub async fn load_fields(&mut self) {
        let Some(request) = self.field_load_request() else {
            self.field_options.clear();
            return;
        };
        debug!(
            object = %request.object_api_name,
            layout = %request.layout_developer_name,
            "loading fields",
        );
        let result: anyhow::Result<(Vec<FieldDescriptor>, Vec<LayoutFieldMembership>)> = async {
            let fields = self
                .service
                .fetch_object_fields(&request.object_api_name)
                .await?;
            let memberships = self
                .service
                .fetch_layout_fields(&request.layout_developer_name)
                .await?;
            Ok((fields, memberships))
        }
        .await;
        self.apply_field_load(&request, result);
    }

    /// Apply a field fetch result: rebuild the reconciled field list, apply
    /// any held-back excluded/default strings, and revalidate the exclusion
    /// set. Returns false when the result is stale or the fetch failed; the
    /// previous field list is retained on failure.
    pub fn apply_field_load(
        &mut self,
        request: &FieldLoadRequest,
        result: anyhow::Result<(Vec<FieldDescriptor>, Vec<LayoutFieldMembership>)>,
    ) -> bool {
        if request.epoch != self.epoch {
            debug!(layout = %request.layout_developer_name, "discarding stale field load");
            return false;
        }
        let (fields, memberships) = match result {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, layout = %request.layout_developer_name, "field fetch failed");
                self.advisories
                    .push("Unable to load fields from the selected layout".to_string());
                return false;
            }
        };

        let catalog = FieldCatalog::from_fields(fields);
        self.field_options = filter_by_membership(&catalog, &memberships);

        if let Some(csv) = self.pending_excluded.take() {
            self.excluded_fields = csv
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(raw) = self.pending_defaults.take() {
            self.default_values = defaults::decode(&raw);
        }

        self.excluded_fields =
            exclusion::reconcile_with_fields(&self.excluded_fields, &self.field_options);
        true
    }

    // ----- modal sessions -----

    /// Open the excluded-fields editor. Rejected when no layout is
    /// selected.
    pub fn open_exclusion_editor(&self) -> Result<ExclusionDraft, EditorError> {
        if self.layout_developer_name.is_none() {
            return Err(EditorError::LayoutNotSelected);
        }
        Ok(ExclusionDraft::new(&self.field_options, &self.excluded_fields))
    }

    /// Commit an exclusion draft and notify the host with the CSV form.
    pub fn save_exclusions(&mut self, draft: ExclusionDraft) {
        self.excluded_fields = draft.into_selected();
        let csv = self.excluded_fields.join(",");
        self.push_change(ConfigKey::ExcludedFields, csv);
    }

    /// Open the default-values editor against the host's current variable
    /// list.
    pub fn open_default_values(&self, variables: &[Variable]) -> DefaultValuesSession {
        DefaultValuesSession::new(
            &self.field_options,
            &self.default_values,
            variables,
            self.object_api_name.as_deref().unwrap_or_default(),
        )
    }

    /// Commit a default-values session and notify the host with the
    /// encoded string.
    pub fn save_default_values(&mut self, session: DefaultValuesSession) {
        self.default_values = session.into_values();
        let encoded = defaults::encode(&self.default_values);
        self.push_change(ConfigKey::DefaultValues, encoded);
    }

    // ----- host surface -----

    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate_configuration(
            self.object_api_name.as_deref(),
            self.layout_developer_name.as_deref(),
            &self.default_values,
        )
    }

    pub fn take_changes(&mut self) -> Vec<ConfigChange> {
        std::mem::take(&mut self.changes)
    }

    pub fn take_type_mapping_changes(&mut self) -> Vec<TypeMapping> {
        std::mem::take(&mut self.type_mapping_changes)
    }

    pub fn advisories(&self) -> &[String] {
        &self.advisories
    }

    pub fn take_advisories(&mut self) -> Vec<String> {
        std::mem::take(&mut self.advisories)
    }

    pub fn object_api_name(&self) -> Option<&str> {
        self.object_api_name.as_deref()
    }

    pub fn layout_developer_name(&self) -> Option<&str> {
        self.layout_developer_name.as_deref()
    }

    pub fn card_title(&self) -> Option<&str> {
        self.card_title.as_deref()
    }

    pub fn show_icon(&self) -> bool {
        self.show_icon
    }

    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn save_label(&self) -> &str {
        &self.save_label
    }

    pub fn cancel_label(&self) -> &str {
        &self.cancel_label
    }

    pub fn excluded_fields(&self) -> &[String] {
        &self.excluded_fields
    }

    pub fn default_values(&self) -> &IndexMap<String, String> {
        &self.default_values
    }

    pub fn object_options(&self) -> &[ObjectDescriptor] {
        &self.object_options
    }

    pub fn field_options(&self) -> &[ReconciledField] {
        &self.field_options
    }

    pub fn layout_choices(&self) -> Vec<LayoutChoice> {
        self.layout_options
            .iter()
            .map(|layout| LayoutChoice {
                label: layout.display_label().to_string(),
                value: layout.developer_name.clone(),
                description: layout.developer_name.clone(),
            })
            .collect()
    }

    fn push_change(&mut self, key: ConfigKey, value: impl Into<ConfigValue>) {
        self.changes.push(ConfigChange::new(key, value));
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::FieldDataType;
    use crate::services::MockMetadataService;

    fn field(api_name: &str, data_type: FieldDataType) -> FieldDescriptor {
        FieldDescriptor {
            api_name: api_name.to_string(),
            label: api_name.to_string(),
            data_type,
        }
    }

    fn membership(name: &str) -> LayoutFieldMembership {
        LayoutFieldMembership {
            field_name: name.to_string(),
            section_id: "main".to_string(),
            position: 0,
        }
    }

    fn seeded_inputs() -> Vec<ConfigInput> {
        vec![
            ConfigInput::new("objectApiName", "Case"),
            ConfigInput::new("layoutDeveloperName", "Case_Page"),
        ]
    }

    #[tokio::test]
    async fn object_change_resets_dependent_configuration() {
        let mut service = MockMetadataService::new();
        service.expect_fetch_available_layouts().returning(|_| {
            Ok(vec![LayoutDescriptor {
                developer_name: "Account_Page".to_string(),
                label: String::new(),
            }])
        });
        let mut editor = EditorState::new(Arc::new(service));

        editor.set_object(Some("Account")).await;

        let changes = editor.take_changes();
        let keys: Vec<_> = changes.iter().map(|change| change.key).collect();
        assert_eq!(
            keys,
            vec![
                ConfigKey::ObjectApiName,
                ConfigKey::LayoutDeveloperName,
                ConfigKey::ExcludedFields,
                ConfigKey::DefaultValues,
            ]
        );
        assert_eq!(changes[0].value, ConfigValue::Text("Account".to_string()));
        assert_eq!(
            editor.take_type_mapping_changes(),
            vec![TypeMapping {
                type_name: "T".to_string(),
                type_value: "Account".to_string(),
            }]
        );

        let choices = editor.layout_choices();
        assert_eq!(choices.len(), 1);
        // no label on the layout, so the developer name stands in
        assert_eq!(choices[0].label, "Account_Page");
        assert_eq!(choices[0].value, "Account_Page");
    }

    #[tokio::test]
    async fn layout_change_reconciles_exclusions_and_applies_pending_strings() {
        let mut service = MockMetadataService::new();
        service.expect_fetch_object_fields().returning(|_| {
            Ok(vec![
                field("Name", FieldDataType::String),
                field("Amount", FieldDataType::Currency),
                field("Id", FieldDataType::String),
            ])
        });
        service
            .expect_fetch_layout_fields()
            .returning(|_| Ok(vec![membership("name"), membership("amount")]));
        let mut editor = EditorState::new(Arc::new(service));

        editor.apply_inputs(
            &[
                ConfigInput::new("objectApiName", "Opportunity"),
                ConfigInput::new("layoutDeveloperName", "Opp_Page"),
                ConfigInput::new("excludedFields", "Amount, Ghost__c"),
                ConfigInput::new("defaultValues", "Name:Acme,Stale__c:x"),
            ],
            &[],
        );
        editor.load_fields().await;

        let names: Vec<_> = editor
            .field_options()
            .iter()
            .map(ReconciledField::api_name)
            .collect();
        assert_eq!(names, vec!["Name", "Amount"]);
        assert_eq!(editor.excluded_fields(), ["Amount".to_string()]);
        // defaults keep entries for unknown fields; only exclusions reconcile
        assert_eq!(editor.default_values().len(), 2);
    }

    #[tokio::test]
    async fn stale_field_load_result_is_discarded() {
        let mut service = MockMetadataService::new();
        service
            .expect_fetch_object_fields()
            .returning(|_| Ok(vec![field("Subject", FieldDataType::String)]));
        service
            .expect_fetch_layout_fields()
            .returning(|_| Ok(vec![membership("Subject")]));
        let mut editor = EditorState::new(Arc::new(service));
        editor.apply_inputs(&seeded_inputs(), &[]);

        let stale = editor.field_load_request().expect("request available");
        editor.set_layout(Some("Case_Page_V2")).await;

        let applied = editor.apply_field_load(&stale, Ok((Vec::new(), Vec::new())));
        assert!(!applied);
        assert_eq!(editor.field_options().len(), 1);
    }

    #[tokio::test]
    async fn fetch_failure_keeps_previous_fields_and_records_advisory() {
        let mut service = MockMetadataService::new();
        service
            .expect_fetch_object_fields()
            .times(1)
            .returning(|_| Ok(vec![field("Subject", FieldDataType::String)]));
        service
            .expect_fetch_layout_fields()
            .times(1)
            .returning(|_| Ok(vec![membership("Subject")]));
        service
            .expect_fetch_object_fields()
            .returning(|_| Err(anyhow!("metadata backend unavailable")));
        let mut editor = EditorState::new(Arc::new(service));
        editor.apply_inputs(&seeded_inputs(), &[]);

        editor.load_fields().await;
        assert_eq!(editor.field_options().len(), 1);

        editor.load_fields().await;
        assert_eq!(editor.field_options().len(), 1);
        assert_eq!(
            editor.take_advisories(),
            vec!["Unable to load fields from the selected layout".to_string()]
        );
    }

    #[tokio::test]
    async fn exclusion_editor_requires_a_layout() {
        let service = MockMetadataService::new();
        let mut editor = EditorState::new(Arc::new(service));
        editor.apply_inputs(&[ConfigInput::new("objectApiName", "Case")], &[]);

        assert_eq!(
            editor.open_exclusion_editor().unwrap_err(),
            EditorError::LayoutNotSelected
        );
        assert!(editor.take_changes().is_empty());
    }

    #[tokio::test]
    async fn saving_exclusions_notifies_with_csv() {
        let mut service = MockMetadataService::new();
        service.expect_fetch_object_fields().returning(|_| {
            Ok(vec![
                field("Name", FieldDataType::String),
                field("Amount", FieldDataType::Currency),
            ])
        });
        service
            .expect_fetch_layout_fields()
            .returning(|_| Ok(vec![membership("Name"), membership("Amount")]));
        let mut editor = EditorState::new(Arc::new(service));
        editor.apply_inputs(&seeded_inputs(), &[]);
        editor.load_fields().await;

        let mut draft = editor.open_exclusion_editor().expect("layout selected");
        assert_eq!(draft.options().len(), 2);
        draft.set_selected(vec!["Amount".to_string(), "Name".to_string()]);
        editor.save_exclusions(draft);

        let changes = editor.take_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key, ConfigKey::ExcludedFields);
        assert_eq!(changes[0].value, ConfigValue::Text("Amount,Name".to_string()));
    }

    #[tokio::test]
    async fn saving_default_values_notifies_with_encoded_string() {
        let mut service = MockMetadataService::new();
        service
            .expect_fetch_object_fields()
            .returning(|_| Ok(vec![field("Name", FieldDataType::String)]));
        service
            .expect_fetch_layout_fields()
            .returning(|_| Ok(vec![membership("Name")]));
        let mut editor = EditorState::new(Arc::new(service));
        editor.apply_inputs(&seeded_inputs(), &[]);
        editor.load_fields().await;

        let mut session = editor.open_default_values(&[]);
        session.set_literal("Name", "Acme");
        editor.save_default_values(session);

        let changes = editor.take_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key, ConfigKey::DefaultValues);
        assert_eq!(changes[0].value, ConfigValue::Text("Name:Acme".to_string()));
        assert_eq!(editor.default_values()["Name"], "Acme");
    }

    #[tokio::test]
    async fn type_mapping_selects_the_object_and_notifies() {
        let service = MockMetadataService::new();
        let mut editor = EditorState::new(Arc::new(service));

        let applied = editor.apply_type_mapping(&TypeMapping {
            type_name: "T".to_string(),
            type_value: "Account".to_string(),
        });
        assert!(applied);
        assert_eq!(editor.object_api_name(), Some("Account"));
        let changes = editor.take_changes();
        assert_eq!(changes[0].key, ConfigKey::ObjectApiName);

        let ignored = editor.apply_type_mapping(&TypeMapping {
            type_name: "U".to_string(),
            type_value: "Case".to_string(),
        });
        assert!(!ignored);
    }

    #[tokio::test]
    async fn empty_labels_fall_back_to_defaults() {
        let service = MockMetadataService::new();
        let mut editor = EditorState::new(Arc::new(service));

        editor.set_save_label("Submit");
        assert_eq!(editor.save_label(), "Submit");
        editor.set_save_label("");
        assert_eq!(editor.save_label(), "Save");
        editor.set_cancel_label("");
        assert_eq!(editor.cancel_label(), "Cancel");
    }

    #[tokio::test]
    async fn validate_reports_missing_selections() {
        let service = MockMetadataService::new();
        let editor = EditorState::new(Arc::new(service));
        let issues = editor.validate();
        let keys: Vec<_> = issues.iter().map(|issue| issue.key).collect();
        assert_eq!(
            keys,
            vec![crate::config::OBJECT_REQUIRED, crate::config::LAYOUT_REQUIRED]
        );
    }
}
