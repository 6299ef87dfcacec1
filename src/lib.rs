#![deny(rust_2018_idioms)]

pub mod binding;
pub mod catalog;
pub mod config;
pub mod defaults;
pub mod domain;
pub mod editor;
pub mod exclusion;
pub mod layout;
pub mod services;

pub use catalog::FieldCatalog;
pub use editor::{EditorError, EditorState};
pub use layout::ReconciledField;
pub use services::MetadataService;

pub mod prelude {
    pub use super::binding::{BindingOption, binding_options, is_known_variable_reference};
    pub use super::catalog::FieldCatalog;
    pub use super::config::{
        ConfigChange, ConfigInput, ConfigKey, ConfigValue, TypeMapping, ValidationIssue,
    };
    pub use super::domain::{
        FieldDataType, FieldDescriptor, LayoutDescriptor, LayoutFieldMembership, ObjectDescriptor,
        Variable, VariableKind,
    };
    pub use super::editor::{
        DefaultValuesSession, EditorError, EditorState, ExclusionDraft, LayoutChoice,
    };
    pub use super::layout::{ReconciledField, filter_by_membership};
    pub use super::services::MetadataService;
}
