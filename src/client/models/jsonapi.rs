//! JSON:API envelope types
//!
//! The platform wraps every collection response in a `data` array and ships
//! related resources in a sideband `included` array.

use serde::{Deserialize, Serialize};

/// A JSON:API response document with typed primary data.
///
/// Also serves as the accumulator for exhaustive pagination: pages are
/// concatenated into one document in fetch order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document<T> {
    /// Primary resources
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    /// Sideband resources referenced by the primary data
    #[serde(default)]
    pub included: Vec<IncludedResource>,
}

impl<T> Default for Document<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            included: Vec::new(),
        }
    }
}

/// Heterogeneous resource from an `included` array.
///
/// Only the fields the correlator reads are modeled; everything else in the
/// resource object is ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncludedResource {
    /// Resource ID
    pub id: String,

    /// Resource type discriminator (`users`, `groups`, ...)
    #[serde(rename = "type")]
    pub kind: String,

    /// Common attributes across the resource types we consume
    #[serde(default)]
    pub attributes: IncludedAttributes,

    /// Relationships; only `groups` is read, and only for user resources
    #[serde(default)]
    pub relationships: IncludedRelationships,
}

/// Attributes shared by `users` and `groups` included resources
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncludedAttributes {
    /// Display name (users and groups)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Email address (users only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Relationships of an included resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncludedRelationships {
    /// Group memberships of a user resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<ManyRelationship>,
}

/// A to-many relationship
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManyRelationship {
    /// Linked resource identifiers
    #[serde(default)]
    pub data: Vec<ResourceIdentifier>,
}

/// A to-one relationship
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OneRelationship {
    /// Linked resource identifier, if any
    #[serde(default)]
    pub data: Option<ResourceIdentifier>,
}

/// Bare resource linkage: id plus type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// Linked resource ID
    pub id: String,

    /// Linked resource type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
