use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{FieldDescriptor, LayoutDescriptor, LayoutFieldMembership, ObjectDescriptor};

/// Host-provided metadata lookups the editor depends on. Calls are issued
/// one at a time and never retried or cached by the engine; a failed fetch
/// surfaces as an advisory and leaves editor state untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataService: Send + Sync {
    /// All fields of an object, including system fields.
    async fn fetch_object_fields(&self, object_api_name: &str) -> Result<Vec<FieldDescriptor>>;

    /// Field placements on a layout. An empty list means the layout carries
    /// no field information, not that the object has no fields.
    async fn fetch_layout_fields(&self, developer_name: &str)
    -> Result<Vec<LayoutFieldMembership>>;

    /// Layouts available for an object.
    async fn fetch_available_layouts(&self, object_api_name: &str)
    -> Result<Vec<LayoutDescriptor>>;

    /// Every record type the author may target.
    async fn fetch_object_types(&self) -> Result<Vec<ObjectDescriptor>>;
}
