//! Platform API client implementation

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::PlatformApi;
use super::auth::Credential;
use super::models::{BranchResource, Document, ProjectResource, RoleAssignment, UserResource};
use super::pagination::PageQuery;
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Request timeout for every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated API client for one run.
///
/// Holds the expanded endpoint configuration and the bearer credential
/// resolved at startup; both live exactly as long as the invocation.
pub struct PlatformClient {
    http: HttpClient,
    config: Config,
    credential: Credential,
}

impl PlatformClient {
    /// Create a client from an already-resolved credential
    pub fn new(http: HttpClient, config: Config, credential: Credential) -> Self {
        Self {
            http,
            config,
            credential,
        }
    }

    /// Build the HTTP client shared by authentication and API calls
    pub fn http_client() -> Result<HttpClient> {
        HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()).into())
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// GET one JSON:API document from an absolute URL
    async fn get_document<T: DeserializeOwned>(&self, url: &str) -> Result<Document<T>> {
        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Bearer {}", self.credential.as_str()))
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        response
            .json::<Document<T>>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {e}")).into())
    }

    /// Fetch every page of a collection endpoint.
    ///
    /// Pages are requested in increasing offset order and concatenated into
    /// one document. A page shorter than `page_size` ends the loop; so does
    /// any error, which is logged and degrades to "no more data" rather
    /// than failing the run.
    pub async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        base_url: &str,
        page_size: usize,
    ) -> Document<T> {
        let mut all = Document::default();
        let mut page = PageQuery::first(page_size);

        loop {
            let url = page.apply(base_url);
            match self.get_document::<T>(&url).await {
                Ok(doc) => {
                    let count = doc.data.len();
                    all.data.extend(doc.data);
                    all.included.extend(doc.included);

                    if count < page_size {
                        break;
                    }
                    page = page.next();
                }
                Err(err) => {
                    warn!("page fetch failed at offset {}: {err}", page.offset);
                    break;
                }
            }
        }

        all
    }
}

/// Body of a property-set request
#[derive(Debug, Serialize)]
struct SetPropertiesBody<'a> {
    projects: Vec<&'a str>,
    properties: &'a BTreeMap<String, String>,
}

#[async_trait]
impl PlatformApi for PlatformClient {
    async fn list_projects(&self, page_size: usize) -> Document<ProjectResource> {
        self.fetch_all_pages(&self.config.projects_url(), page_size)
            .await
    }

    async fn list_branches(&self, page_size: usize) -> Document<BranchResource> {
        self.fetch_all_pages(&self.config.branches_url(), page_size)
            .await
    }

    async fn list_users(&self, page_size: usize) -> Document<UserResource> {
        self.fetch_all_pages(&self.config.users_url(), page_size)
            .await
    }

    async fn role_assignments(&self, project_id: &str) -> Result<Document<RoleAssignment>> {
        self.get_document(&self.config.role_assignments_url(project_id))
            .await
    }

    async fn set_properties(
        &self,
        project_id: &str,
        properties: &BTreeMap<String, String>,
    ) -> Result<()> {
        let body = SetPropertiesBody {
            projects: vec![project_id],
            properties,
        };

        let response = self
            .http
            .post(self.config.set_property_url())
            .header("Authorization", format!("Bearer {}", self.credential.as_str()))
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(())
    }
}
