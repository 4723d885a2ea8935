//! Role-assignment models
//!
//! Role assignments are never persisted as their own entity; the correlator
//! consumes the response's `included` sideband and flattens memberships
//! directly into the details export.

use serde::{Deserialize, Serialize};

/// Role-assignment resource from the per-project role-assignment endpoint.
///
/// Only identity is modeled; the interesting payload travels in `included`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Assignment ID
    pub id: String,
}
