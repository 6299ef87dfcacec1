use serde::{Deserialize, Serialize};

/// Declared type of a host-provided variable. `SObject` carries the record
/// type the variable holds, when the host declares one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dataType")]
pub enum VariableKind {
    String,
    Boolean,
    Number,
    Date,
    DateTime,
    SObject {
        #[serde(rename = "objectType", default)]
        object_type: Option<String>,
    },
}

/// A typed, host-provided named value available for binding into field
/// defaults. The engine never resolves its runtime value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(flatten)]
    pub kind: VariableKind,
}

impl Variable {
    pub fn new(name: impl Into<String>, kind: VariableKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn record(name: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::SObject {
                object_type: Some(object_type.into()),
            },
        }
    }
}
