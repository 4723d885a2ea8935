//! Platform API client

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::Result;

pub mod auth;
pub mod models;
pub mod pagination;
pub mod platform;

pub use auth::Credential;
pub use models::{Branch, BranchResource, Document, Project, ProjectResource, RoleAssignment, User, UserResource};
pub use pagination::{DEFAULT_PAGE_SIZE, PageQuery};
pub use platform::PlatformClient;

/// Platform API surface consumed by the run drivers.
///
/// Collection listings paginate exhaustively and degrade to partial data on
/// page errors; the per-project and mutation calls surface their errors so
/// callers can log and skip individual items.
#[async_trait]
pub trait PlatformApi: Send + Sync {
    /// Fetch every project, concatenating all pages
    async fn list_projects(&self, page_size: usize) -> Document<ProjectResource>;

    /// Fetch every branch, concatenating all pages
    async fn list_branches(&self, page_size: usize) -> Document<BranchResource>;

    /// Fetch every user, concatenating all pages (with included groups)
    async fn list_users(&self, page_size: usize) -> Document<UserResource>;

    /// Fetch one project's role assignments with included users and groups
    async fn role_assignments(&self, project_id: &str) -> Result<Document<RoleAssignment>>;

    /// Replace one project's property mapping
    async fn set_properties(
        &self,
        project_id: &str,
        properties: &BTreeMap<String, String>,
    ) -> Result<()>;
}
