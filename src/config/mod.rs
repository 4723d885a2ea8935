//! Configuration management for scanmate
//!
//! The configuration lives in `config.json` — the same file the original
//! platform tooling reads — so field names stay camelCase on disk.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Customer identifier, substituted into every URL template
    pub customer: String,

    /// Account email used by both authentication flows
    pub email: String,

    /// Account password (password flow)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// API access token (token flow)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accesstoken: Option<String>,

    /// Password-flow authentication endpoint
    pub auth_url: String,

    /// Token-flow authentication endpoint
    #[serde(rename = "authUrlV2")]
    pub auth_url_v2: String,

    /// Project listing endpoint, paginated via `page[limit]`/`page[offset]`
    pub projects_url: String,

    /// Property-set endpoint for re-uploading edited project properties
    pub set_property_url: String,

    /// Branch listing endpoint; contains an `{offset}` placeholder
    pub branches_url: String,

    /// User listing endpoint, paginated via `page[limit]`/`page[offset]`
    pub users_url: String,

    /// Per-project role-assignment endpoint; contains a `{project}` placeholder
    pub role_assignments_url: String,
}

impl Config {
    /// Get the default config file path.
    ///
    /// Prefers `config.json` in the current directory (the layout the
    /// original scripts used); falls back to `~/.scanmate/config.json`.
    pub fn default_path() -> Result<PathBuf> {
        let local = PathBuf::from("config.json");
        if local.exists() {
            return Ok(local);
        }

        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".scanmate").join("config.json"))
    }

    /// Resolve the config path from an optional CLI override.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, honoring an optional path override.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents + "\n")?;

        // Credentials live in this file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Skeleton configuration written by `scanmate init`
    pub fn skeleton() -> Self {
        Self {
            customer: "your-customer-id".to_string(),
            email: "you@example.com".to_string(),
            password: Some(String::new()),
            accesstoken: Some(String::new()),
            auth_url: "https://platform.example.com/api/{customer}/auth".to_string(),
            auth_url_v2: "https://platform.example.com/api/{customer}/auth/token".to_string(),
            projects_url: "https://platform.example.com/api/{customer}/projects".to_string(),
            set_property_url: "https://platform.example.com/api/{customer}/project-properties"
                .to_string(),
            branches_url:
                "https://platform.example.com/api/{customer}/branches?page[limit]=500&page[offset]={offset}"
                    .to_string(),
            users_url: "https://platform.example.com/api/{customer}/users".to_string(),
            role_assignments_url:
                "https://platform.example.com/api/{customer}/role-assignments?filter[project]={project}&include=role,user,group"
                    .to_string(),
        }
    }

    /// Account password, trimmed; `None` when absent or blank
    pub fn password(&self) -> Option<&str> {
        self.password
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Access token, trimmed; `None` when absent or blank
    pub fn accesstoken(&self) -> Option<&str> {
        self.accesstoken
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Validate that required configuration is present
    pub fn validate(&self) -> Result<()> {
        if self.customer.trim().is_empty() {
            return Err(ConfigError::Invalid("customer must not be empty".to_string()).into());
        }
        if self.email.trim().is_empty() {
            return Err(ConfigError::Invalid("email must not be empty".to_string()).into());
        }
        Ok(())
    }

    fn expand(&self, template: &str) -> String {
        template.replace("{customer}", self.customer.trim())
    }

    /// Password-flow auth endpoint with `{customer}` substituted
    pub fn auth_url(&self) -> String {
        self.expand(&self.auth_url)
    }

    /// Token-flow auth endpoint with `{customer}` substituted
    pub fn auth_url_v2(&self) -> String {
        self.expand(&self.auth_url_v2)
    }

    /// Project listing endpoint with `{customer}` substituted
    pub fn projects_url(&self) -> String {
        self.expand(&self.projects_url)
    }

    /// Property-set endpoint with `{customer}` substituted
    pub fn set_property_url(&self) -> String {
        self.expand(&self.set_property_url)
    }

    /// Branch listing endpoint with `{customer}` substituted.
    ///
    /// The `{offset}` placeholder is left in place for the paginator.
    pub fn branches_url(&self) -> String {
        self.expand(&self.branches_url)
    }

    /// User listing endpoint with `{customer}` substituted
    pub fn users_url(&self) -> String {
        self.expand(&self.users_url)
    }

    /// Role-assignment endpoint for one project
    pub fn role_assignments_url(&self, project_id: &str) -> String {
        self.expand(&self.role_assignments_url)
            .replace("{project}", project_id)
    }
}
