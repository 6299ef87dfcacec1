use std::collections::HashSet;

use crate::domain::{FieldDescriptor, is_system_field};

/// Canonical, system-filtered field list for one object.
///
/// Built from the raw descriptors returned by the metadata collaborator:
/// system audit fields are removed and duplicate api names collapse to their
/// first occurrence, preserving collaborator order otherwise.
#[derive(Debug, Clone, Default)]
pub struct FieldCatalog {
    fields: Vec<FieldDescriptor>,
}

impl FieldCatalog {
    pub fn from_fields(raw: Vec<FieldDescriptor>) -> Self {
        let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
        let fields = raw
            .into_iter()
            .filter(|field| !is_system_field(&field.api_name))
            .filter(|field| seen.insert(field.api_name.clone()))
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldDataType;

    fn field(api_name: &str) -> FieldDescriptor {
        FieldDescriptor {
            api_name: api_name.to_string(),
            label: api_name.to_string(),
            data_type: FieldDataType::String,
        }
    }

    #[test]
    fn strips_system_fields_and_keeps_order() {
        let catalog = FieldCatalog::from_fields(vec![
            field("Name"),
            field("Id"),
            field("Amount"),
            field("SystemModstamp"),
            field("StageName"),
        ]);
        let names: Vec<_> = catalog.fields().iter().map(|f| f.api_name.as_str()).collect();
        assert_eq!(names, vec!["Name", "Amount", "StageName"]);
    }

    #[test]
    fn duplicate_api_names_keep_first_occurrence() {
        let catalog = FieldCatalog::from_fields(vec![
            FieldDescriptor {
                api_name: "Amount".to_string(),
                label: "Amount".to_string(),
                data_type: FieldDataType::Currency,
            },
            FieldDescriptor {
                api_name: "Amount".to_string(),
                label: "Amount (again)".to_string(),
                data_type: FieldDataType::Double,
            },
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.fields()[0].data_type, FieldDataType::Currency);
    }

    #[test]
    fn empty_input_yields_empty_catalog() {
        let catalog = FieldCatalog::from_fields(Vec::new());
        assert!(catalog.is_empty());
    }
}
