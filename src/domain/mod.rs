mod field;
mod variable;

pub use field::{
    FieldDataType, FieldDescriptor, LayoutDescriptor, LayoutFieldMembership, ObjectDescriptor,
    SYSTEM_FIELDS, is_system_field,
};
pub use variable::{Variable, VariableKind};
