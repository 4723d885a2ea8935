//! Project models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Project resource as returned by the project listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResource {
    /// Project ID
    pub id: String,

    /// Project attributes
    #[serde(default)]
    pub attributes: ProjectAttributes,

    /// Relationships; only the branch collection link is read
    #[serde(default)]
    pub relationships: ProjectRelationships,
}

/// Attributes of a project resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectAttributes {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Declared project type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,

    /// Property mapping; may be absent or empty on the remote project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, serde_json::Value>>,
}

/// Relationships of a project resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectRelationships {
    /// Branch collection relationship
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<BranchesRelationship>,
}

/// Branch collection relationship carrying only its related link
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchesRelationship {
    /// Relationship links
    #[serde(default)]
    pub links: RelationshipLinks,
}

/// Links of a relationship object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipLinks {
    /// URL of the related collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,
}

/// Flattened project record as persisted in `projectList.json`.
///
/// This file is edited by hand between phases and re-read by
/// `push-properties`, so it must round-trip unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Declared project type
    #[serde(rename = "type", default)]
    pub project_type: String,

    /// Property mapping. Projects with no remote properties carry the
    /// single placeholder pair `{"key": "value"}` — the source system
    /// conflates "no properties" with this placeholder, and the behavior
    /// is preserved.
    pub properties: BTreeMap<String, String>,

    /// URL of the project's branch collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches_url: Option<String>,
}

impl From<ProjectResource> for Project {
    fn from(resource: ProjectResource) -> Self {
        let properties = match resource.attributes.properties {
            Some(map) if !map.is_empty() => map
                .into_iter()
                .map(|(key, value)| (key, value_to_string(value)))
                .collect(),
            _ => placeholder_properties(),
        };

        Self {
            id: resource.id,
            name: resource.attributes.name,
            project_type: resource.attributes.project_type.unwrap_or_default(),
            properties,
            branches_url: resource
                .relationships
                .branches
                .and_then(|b| b.links.related),
        }
    }
}

/// Placeholder mapping for projects without remote properties
pub fn placeholder_properties() -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    map.insert("key".to_string(), "value".to_string());
    map
}

fn value_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_from_resource() {
        let json = r#"{
            "id": "p1",
            "attributes": {
                "name": "Alpha",
                "type": "maven",
                "properties": {"team": "core", "tier": "1"}
            },
            "relationships": {
                "branches": {"links": {"related": "https://api.test/p1/branches"}}
            }
        }"#;

        let resource: ProjectResource = serde_json::from_str(json).unwrap();
        let project = Project::from(resource);

        assert_eq!(project.id, "p1");
        assert_eq!(project.name, "Alpha");
        assert_eq!(project.project_type, "maven");
        assert_eq!(project.properties.get("team").map(String::as_str), Some("core"));
        assert_eq!(
            project.branches_url.as_deref(),
            Some("https://api.test/p1/branches")
        );
    }

    #[test]
    fn test_missing_properties_default_to_placeholder() {
        let json = r#"{"id": "p2", "attributes": {"name": "Beta"}}"#;

        let resource: ProjectResource = serde_json::from_str(json).unwrap();
        let project = Project::from(resource);

        assert_eq!(project.properties, placeholder_properties());
    }

    #[test]
    fn test_empty_properties_default_to_placeholder() {
        let json = r#"{"id": "p3", "attributes": {"name": "Gamma", "properties": {}}}"#;

        let resource: ProjectResource = serde_json::from_str(json).unwrap();
        let project = Project::from(resource);

        assert_eq!(project.properties, placeholder_properties());
    }

    #[test]
    fn test_non_string_property_values_compact() {
        let json = r#"{
            "id": "p4",
            "attributes": {"name": "Delta", "properties": {"threshold": 42}}
        }"#;

        let resource: ProjectResource = serde_json::from_str(json).unwrap();
        let project = Project::from(resource);

        assert_eq!(project.properties.get("threshold").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_project_json_round_trip() {
        let json = r#"{
            "id": "p1",
            "name": "Alpha",
            "type": "maven",
            "properties": {"team": "core"},
            "branchesUrl": "https://api.test/p1/branches"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        let out = serde_json::to_string_pretty(&project).unwrap();
        let back: Project = serde_json::from_str(&out).unwrap();

        assert_eq!(back.id, project.id);
        assert_eq!(back.properties, project.properties);
        assert!(out.contains("\"type\": \"maven\""));
    }
}
