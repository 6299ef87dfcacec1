use std::fmt;

use indexmap::IndexMap;

use crate::defaults;

/// The named configuration values the editor exposes to its host. Wire
/// names follow the persisted configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ObjectApiName,
    LayoutDeveloperName,
    CardTitle,
    ShowIcon,
    RecordId,
    ReadOnly,
    ExcludedFields,
    DefaultValues,
    SaveLabel,
    CancelLabel,
}

impl ConfigKey {
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::ObjectApiName => "objectApiName",
            Self::LayoutDeveloperName => "layoutDeveloperName",
            Self::CardTitle => "cardTitle",
            Self::ShowIcon => "showIcon",
            Self::RecordId => "recordId",
            Self::ReadOnly => "isReadOnly",
            Self::ExcludedFields => "excludedFields",
            Self::DefaultValues => "defaultValues",
            Self::SaveLabel => "saveLabel",
            Self::CancelLabel => "cancelLabel",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "objectApiName" => Some(Self::ObjectApiName),
            "layoutDeveloperName" => Some(Self::LayoutDeveloperName),
            "cardTitle" => Some(Self::CardTitle),
            "showIcon" => Some(Self::ShowIcon),
            "recordId" => Some(Self::RecordId),
            "isReadOnly" => Some(Self::ReadOnly),
            "excludedFields" => Some(Self::ExcludedFields),
            "defaultValues" => Some(Self::DefaultValues),
            "saveLabel" => Some(Self::SaveLabel),
            "cancelLabel" => Some(Self::CancelLabel),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// A configuration value with its declared wire type. The host contract
/// carries loosely typed values; the engine keeps them as a closed variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Text(String),
    Flag(bool),
}

impl ConfigValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "String",
            Self::Flag(_) => "Boolean",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }

    /// Coerce to a flag. Hosts persist booleans both natively and as the
    /// strings "true"/"false", so text is accepted too.
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => text == "true",
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for ConfigValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

/// One change notification for the host: which value changed and what it is
/// now. Drained from the editor via `take_changes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChange {
    pub key: ConfigKey,
    pub value: ConfigValue,
}

impl ConfigChange {
    pub fn new(key: ConfigKey, value: impl Into<ConfigValue>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// One persisted configuration value handed back by the host at load time.
/// Unknown names are ignored by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigInput {
    pub name: String,
    pub value: ConfigValue,
}

impl ConfigInput {
    pub fn new(name: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A host-supplied generic type mapping that pre-selects the target object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapping {
    pub type_name: String,
    pub type_value: String,
}

/// The type-parameter name the editor honors in generic type mappings.
pub const GENERIC_TYPE_NAME: &str = "T";

pub const OBJECT_REQUIRED: &str = "OBJECT_REQUIRED";
pub const LAYOUT_REQUIRED: &str = "LAYOUT_REQUIRED";
pub const INVALID_DEFAULT_VALUES: &str = "INVALID_DEFAULT_VALUES";

/// A structured validation failure, reported rather than thrown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub key: &'static str,
    pub message: String,
}

impl ValidationIssue {
    fn new(key: &'static str, message: &str) -> Self {
        Self {
            key,
            message: message.to_string(),
        }
    }
}

/// Validate the required configuration and the stored default values.
pub fn validate_configuration(
    object_api_name: Option<&str>,
    layout_developer_name: Option<&str>,
    default_values: &IndexMap<String, String>,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if object_api_name.is_none_or(str::is_empty) {
        issues.push(ValidationIssue::new(
            OBJECT_REQUIRED,
            "Please select an object",
        ));
    }

    if layout_developer_name.is_none_or(str::is_empty) {
        issues.push(ValidationIssue::new(
            LAYOUT_REQUIRED,
            "Please select a page layout",
        ));
    }

    if default_values
        .keys()
        .any(|field| defaults::field_name_conflicts_with_delimiters(field))
    {
        issues.push(ValidationIssue::new(
            INVALID_DEFAULT_VALUES,
            "Invalid default values format",
        ));
    }

    issues
}
