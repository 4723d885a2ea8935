//! API resource models
//!
//! Wire types mirror the platform's JSON:API response shapes; domain types
//! are the flattened records the export files carry.

pub mod branch;
pub mod jsonapi;
pub mod project;
pub mod role;
pub mod user;

pub use branch::{Branch, BranchResource};
pub use jsonapi::{Document, IncludedResource, ManyRelationship, OneRelationship, ResourceIdentifier};
pub use project::{Project, ProjectResource};
pub use role::RoleAssignment;
pub use user::{User, UserResource};
