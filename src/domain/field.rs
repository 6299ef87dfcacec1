use std::fmt;

use serde::{Deserialize, Serialize};

/// Record-system audit fields that must never be offered for editing or
/// exclusion, regardless of layout membership. Matched case-sensitively
/// against `FieldDescriptor::api_name`.
pub const SYSTEM_FIELDS: [&str; 6] = [
    "Id",
    "CreatedDate",
    "CreatedById",
    "LastModifiedDate",
    "LastModifiedById",
    "SystemModstamp",
];

pub fn is_system_field(api_name: &str) -> bool {
    SYSTEM_FIELDS.contains(&api_name)
}

/// Declared data type of an object field, as reported by the metadata
/// collaborator. Types outside the closed set are preserved verbatim in
/// `Other` so they round-trip, but they never accept variable bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldDataType {
    String,
    TextArea,
    Phone,
    Email,
    Url,
    Picklist,
    MultiPicklist,
    Boolean,
    Integer,
    Double,
    Percent,
    Currency,
    Date,
    DateTime,
    Reference,
    Other(String),
}

impl FieldDataType {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "STRING" => Self::String,
            "TEXTAREA" => Self::TextArea,
            "PHONE" => Self::Phone,
            "EMAIL" => Self::Email,
            "URL" => Self::Url,
            "PICKLIST" => Self::Picklist,
            "MULTIPICKLIST" => Self::MultiPicklist,
            "BOOLEAN" => Self::Boolean,
            "INTEGER" => Self::Integer,
            "DOUBLE" => Self::Double,
            "PERCENT" => Self::Percent,
            "CURRENCY" => Self::Currency,
            "DATE" => Self::Date,
            "DATETIME" => Self::DateTime,
            "REFERENCE" => Self::Reference,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "STRING",
            Self::TextArea => "TEXTAREA",
            Self::Phone => "PHONE",
            Self::Email => "EMAIL",
            Self::Url => "URL",
            Self::Picklist => "PICKLIST",
            Self::MultiPicklist => "MULTIPICKLIST",
            Self::Boolean => "BOOLEAN",
            Self::Integer => "INTEGER",
            Self::Double => "DOUBLE",
            Self::Percent => "PERCENT",
            Self::Currency => "CURRENCY",
            Self::Date => "DATE",
            Self::DateTime => "DATETIME",
            Self::Reference => "REFERENCE",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for FieldDataType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<FieldDataType> for String {
    fn from(kind: FieldDataType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FieldDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata for one data field of an object. Immutable once fetched for a
/// given object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(rename = "apiName")]
    pub api_name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub data_type: FieldDataType,
}

/// One field placement on a layout. `field_name` matches
/// `FieldDescriptor::api_name` case-insensitively; `position` is only
/// meaningful within a section and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutFieldMembership {
    #[serde(rename = "fieldName")]
    pub field_name: String,
    #[serde(rename = "sectionId")]
    pub section_id: String,
    pub position: u32,
}

/// A selectable page layout for an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    #[serde(rename = "developerName")]
    pub developer_name: String,
    #[serde(default)]
    pub label: String,
}

impl LayoutDescriptor {
    /// Label shown to the author, falling back to the developer name when
    /// the layout carries no label.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.developer_name
        } else {
            &self.label
        }
    }
}

/// A selectable record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDescriptor {
    #[serde(rename = "apiName")]
    pub api_name: String,
    pub label: String,
}
