//! User models

use serde::{Deserialize, Serialize};

use super::jsonapi::ManyRelationship;

/// User resource as returned by the user listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResource {
    /// User ID
    pub id: String,

    /// User attributes
    #[serde(default)]
    pub attributes: UserAttributes,

    /// Relationships; group memberships are read
    #[serde(default)]
    pub relationships: UserRelationships,
}

/// Attributes of a user resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserAttributes {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Email address
    #[serde(default)]
    pub email: String,
}

/// Relationships of a user resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRelationships {
    /// Group memberships
    #[serde(default)]
    pub groups: ManyRelationship,
}

/// Flattened user record as persisted in `usersList.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// IDs of the groups this user belongs to, in response order
    #[serde(default)]
    pub groups: Vec<String>,
}

impl From<UserResource> for User {
    fn from(resource: UserResource) -> Self {
        Self {
            id: resource.id,
            name: resource.attributes.name,
            email: resource.attributes.email,
            groups: resource
                .relationships
                .groups
                .data
                .into_iter()
                .map(|link| link.id)
                .collect(),
        }
    }
}
