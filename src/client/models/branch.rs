//! Branch models

use serde::{Deserialize, Serialize};

use super::jsonapi::OneRelationship;

/// Branch resource as returned by the branch listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchResource {
    /// Branch ID
    pub id: String,

    /// Branch attributes
    #[serde(default)]
    pub attributes: BranchAttributes,

    /// Relationships; the owning project is read
    #[serde(default)]
    pub relationships: BranchRelationships,
}

/// Attributes of a branch resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchAttributes {
    /// Branch name
    #[serde(default)]
    pub name: String,
}

/// Relationships of a branch resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchRelationships {
    /// Owning project
    #[serde(default)]
    pub project: OneRelationship,
}

/// Flattened branch record as persisted in `branchesList.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// Branch ID
    pub id: String,

    /// Branch name
    pub name: String,

    /// Owning project ID; empty when the relationship is absent
    #[serde(default)]
    pub project: String,
}

impl From<BranchResource> for Branch {
    fn from(resource: BranchResource) -> Self {
        Self {
            id: resource.id,
            name: resource.attributes.name,
            project: resource
                .relationships
                .project
                .data
                .map(|link| link.id)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_from_resource() {
        let json = r#"{
            "id": "b1",
            "attributes": {"name": "main"},
            "relationships": {"project": {"data": {"id": "p1", "type": "projects"}}}
        }"#;

        let resource: BranchResource = serde_json::from_str(json).unwrap();
        let branch = Branch::from(resource);

        assert_eq!(branch.id, "b1");
        assert_eq!(branch.name, "main");
        assert_eq!(branch.project, "p1");
    }

    #[test]
    fn test_branch_without_project_relationship() {
        let json = r#"{"id": "b2", "attributes": {"name": "orphan"}}"#;

        let resource: BranchResource = serde_json::from_str(json).unwrap();
        let branch = Branch::from(resource);

        assert!(branch.project.is_empty());
    }
}
