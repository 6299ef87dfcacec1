use std::collections::HashSet;

use crate::catalog::FieldCatalog;
use crate::domain::{FieldDescriptor, LayoutFieldMembership};

/// A catalog field annotated with whether the selected layout places it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledField {
    pub descriptor: FieldDescriptor,
    pub on_layout: bool,
}

impl ReconciledField {
    pub fn api_name(&self) -> &str {
        &self.descriptor.api_name
    }
}

/// Intersect the object's field catalog with the fields a layout places.
///
/// Membership names match api names case-insensitively; catalog order is
/// preserved and membership positions are ignored. An empty membership list
/// means the layout reported no field information, so the whole catalog is
/// returned unrestricted rather than an empty list.
pub fn filter_by_membership(
    catalog: &FieldCatalog,
    memberships: &[LayoutFieldMembership],
) -> Vec<ReconciledField> {
    if memberships.is_empty() {
        return catalog
            .fields()
            .iter()
            .map(|descriptor| ReconciledField {
                descriptor: descriptor.clone(),
                on_layout: false,
            })
            .collect();
    }

    let member_names: HashSet<String> = memberships
        .iter()
        .map(|membership| membership.field_name.to_lowercase())
        .collect();

    catalog
        .fields()
        .iter()
        .filter(|descriptor| member_names.contains(&descriptor.api_name.to_lowercase()))
        .map(|descriptor| ReconciledField {
            descriptor: descriptor.clone(),
            on_layout: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldDataType;

    fn catalog(names: &[&str]) -> FieldCatalog {
        FieldCatalog::from_fields(
            names
                .iter()
                .map(|name| FieldDescriptor {
                    api_name: name.to_string(),
                    label: name.to_string(),
                    data_type: FieldDataType::String,
                })
                .collect(),
        )
    }

    fn membership(name: &str) -> LayoutFieldMembership {
        LayoutFieldMembership {
            field_name: name.to_string(),
            section_id: "main".to_string(),
            position: 0,
        }
    }

    #[test]
    fn matches_membership_names_case_insensitively() {
        let catalog = catalog(&["Name", "Amount"]);
        let fields = filter_by_membership(&catalog, &[membership("name")]);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].api_name(), "Name");
        assert!(fields[0].on_layout);
    }

    #[test]
    fn empty_membership_returns_full_catalog() {
        let catalog = catalog(&["Name", "Amount", "StageName"]);
        let fields = filter_by_membership(&catalog, &[]);
        let names: Vec<_> = fields.iter().map(ReconciledField::api_name).collect();
        assert_eq!(names, vec!["Name", "Amount", "StageName"]);
        assert!(fields.iter().all(|field| !field.on_layout));
    }

    #[test]
    fn preserves_catalog_order_not_membership_order() {
        let catalog = catalog(&["Name", "Amount", "CloseDate"]);
        let fields = filter_by_membership(
            &catalog,
            &[membership("closedate"), membership("name")],
        );
        let names: Vec<_> = fields.iter().map(ReconciledField::api_name).collect();
        assert_eq!(names, vec!["Name", "CloseDate"]);
    }

    #[test]
    fn duplicate_memberships_do_not_duplicate_fields() {
        let catalog = catalog(&["Name"]);
        let fields = filter_by_membership(&catalog, &[membership("Name"), membership("NAME")]);
        assert_eq!(fields.len(), 1);
    }
}
