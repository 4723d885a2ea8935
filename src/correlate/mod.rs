//! In-memory correlation of fetched collections
//!
//! Joins paginated collections by their foreign-key fields into the
//! denormalized records the export files carry. Ordering follows the
//! insertion order of the source collections; no sorting is applied.

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::client::models::{Branch, Document, IncludedResource, Project, RoleAssignment, User};

/// A project with the names of its branches, in fetch order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectBranches {
    /// Project ID
    pub id: String,

    /// Project name
    pub name: String,

    /// Branch names belonging to this project
    pub branches: Vec<String>,
}

/// A user flattened into a membership record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

/// A group with its members on one project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMembers {
    /// Group ID
    pub id: String,

    /// Group name
    pub name: String,

    /// Members assigned through this group
    pub members: Vec<Member>,
}

/// Per-project membership structure built from a role-assignment response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMembers {
    /// Project ID
    pub id: String,

    /// Project name
    pub name: String,

    /// Members assigned via a group, indexed by group in first-seen order
    pub groups: Vec<GroupMembers>,

    /// Members assigned directly, without a group
    pub individuals: Vec<Member>,
}

/// A group with its membership inverted from the user collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Group ID
    pub id: String,

    /// Group name; the ID stands in when no name is known
    pub name: String,

    /// Emails of the users belonging to this group
    pub members: Vec<String>,
}

/// Join branches onto their owning projects.
///
/// Branches referencing a project absent from `projects` are dropped; that
/// is expected when branch listings lag behind project deletions.
pub fn correlate_branches(projects: &[Project], branches: &[Branch]) -> Vec<ProjectBranches> {
    let mut records: Vec<ProjectBranches> = projects
        .iter()
        .map(|project| ProjectBranches {
            id: project.id.clone(),
            name: project.name.clone(),
            branches: Vec::new(),
        })
        .collect();

    let index: HashMap<&str, usize> = projects
        .iter()
        .enumerate()
        .map(|(i, project)| (project.id.as_str(), i))
        .collect();

    for branch in branches {
        match index.get(branch.project.as_str()) {
            Some(&i) => records[i].branches.push(branch.name.clone()),
            None => debug!(
                "branch {} references unknown project {}, dropping",
                branch.name, branch.project
            ),
        }
    }

    records
}

/// Build the per-project membership structure from one role-assignment
/// response.
///
/// The `included` sideband is partitioned by resource type; a user's group
/// comes from the first entry of its `groups` relationship. A user whose
/// group resource is missing from `included` is recorded as an individual —
/// the same information gap the platform itself exhibits — and the gap is
/// logged.
pub fn correlate_members(project: &Project, doc: &Document<RoleAssignment>) -> ProjectMembers {
    let group_names: HashMap<&str, &str> = doc
        .included
        .iter()
        .filter(|resource| resource.kind == "groups")
        .map(|resource| {
            (
                resource.id.as_str(),
                resource.attributes.name.as_deref().unwrap_or(resource.id.as_str()),
            )
        })
        .collect();

    let mut result = ProjectMembers {
        id: project.id.clone(),
        name: project.name.clone(),
        groups: Vec::new(),
        individuals: Vec::new(),
    };
    let mut group_index: HashMap<String, usize> = HashMap::new();

    for resource in doc.included.iter().filter(|r| r.kind == "users") {
        let member = Member {
            name: resource.attributes.name.clone().unwrap_or_default(),
            email: resource.attributes.email.clone().unwrap_or_default(),
        };

        let first_group = resource
            .relationships
            .groups
            .as_ref()
            .and_then(|groups| groups.data.first());

        match first_group {
            Some(link) => match group_names.get(link.id.as_str()) {
                Some(name) => {
                    let idx = *group_index.entry(link.id.clone()).or_insert_with(|| {
                        result.groups.push(GroupMembers {
                            id: link.id.clone(),
                            name: (*name).to_string(),
                            members: Vec::new(),
                        });
                        result.groups.len() - 1
                    });
                    result.groups[idx].members.push(member);
                }
                None => {
                    warn!(
                        "project {}: user {} belongs to group {} absent from the \
                         response's included set; recording as individual",
                        project.id, resource.id, link.id
                    );
                    result.individuals.push(member);
                }
            },
            None => result.individuals.push(member),
        }
    }

    result
}

/// Extract a group-id → name map from an `included` array
pub fn group_names(included: &[IncludedResource]) -> HashMap<String, String> {
    included
        .iter()
        .filter(|resource| resource.kind == "groups")
        .map(|resource| {
            (
                resource.id.clone(),
                resource
                    .attributes
                    .name
                    .clone()
                    .unwrap_or_else(|| resource.id.clone()),
            )
        })
        .collect()
}

/// Invert the user → group-id relation into group records.
///
/// Groups appear in order of first reference; members carry user emails.
pub fn invert_user_groups(users: &[User], names: &HashMap<String, String>) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for user in users {
        for group_id in &user.groups {
            let idx = match index.get(group_id.as_str()) {
                Some(&i) => i,
                None => {
                    groups.push(Group {
                        id: group_id.clone(),
                        name: names.get(group_id).cloned().unwrap_or_else(|| group_id.clone()),
                        members: Vec::new(),
                    });
                    index.insert(group_id.as_str(), groups.len() - 1);
                    groups.len() - 1
                }
            };
            groups[idx].members.push(user.email.clone());
        }
    }

    groups
}
