//! Credential resolution
//!
//! The platform offers two mutually exclusive authentication flows: a
//! password flow and an access-token flow, both form-encoded POSTs. The
//! bearer token comes back either in a `Set-Cookie` header or as a `jwt`
//! field in the response body.

use reqwest::Client as HttpClient;
use reqwest::header::SET_COOKIE;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{ApiError, Result};

/// Opaque bearer token, valid for the remainder of one run.
///
/// Created once per invocation and never persisted.
#[derive(Debug, Clone)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token string
    pub fn new(token: String) -> Self {
        Self(token)
    }

    /// The raw token, as sent in the `Authorization` header
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Body shape of an auth response that carries the token inline
#[derive(Debug, Deserialize)]
struct AuthBody {
    jwt: Option<String>,
}

/// Resolve a bearer credential for this run.
///
/// The password flow takes priority; the token flow is used only when no
/// password is configured. With neither credential present, resolution
/// fails before any network call is made.
pub async fn resolve(http: &HttpClient, config: &Config) -> Result<Credential> {
    let (url, form) = if let Some(password) = config.password() {
        (
            config.auth_url(),
            vec![("email", config.email.clone()), ("password", password.to_string())],
        )
    } else if let Some(token) = config.accesstoken() {
        (
            config.auth_url_v2(),
            vec![("email", config.email.clone()), ("accesstoken", token.to_string())],
        )
    } else {
        return Err(ApiError::MissingCredential.into());
    };

    let response = http
        .post(&url)
        .form(&form)
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

    // Prefer the access_token cookie; fall back to the jwt body field
    if let Some(token) = token_from_cookies(&response) {
        return Ok(Credential::new(token));
    }

    let body: AuthBody = response
        .json()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse auth response: {e}")))?;

    match body.jwt {
        Some(jwt) if !jwt.is_empty() => Ok(Credential::new(jwt)),
        _ => Err(ApiError::TokenNotFound.into()),
    }
}

/// Extract the token from a `Set-Cookie` header beginning `access_token=`.
///
/// The token is the substring up to the next `;` (cookie attributes follow).
fn token_from_cookies(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| {
            let rest = cookie.strip_prefix("access_token=")?;
            let token = rest.split(';').next().unwrap_or(rest).trim();
            (!token.is_empty()).then(|| token.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn test_config(base: &str) -> Config {
        Config {
            customer: "acme".to_string(),
            email: "dev@acme.test".to_string(),
            password: None,
            accesstoken: None,
            auth_url: format!("{base}/auth"),
            auth_url_v2: format!("{base}/auth/token"),
            projects_url: format!("{base}/projects"),
            set_property_url: format!("{base}/project-properties"),
            branches_url: format!("{base}/branches?page[offset]={{offset}}"),
            users_url: format!("{base}/users"),
            role_assignments_url: format!("{base}/role-assignments?filter[project]={{project}}"),
        }
    }

    #[tokio::test]
    async fn test_password_flow_hits_only_password_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mut config = test_config(&server.url());
        config.password = Some("hunter2".to_string());
        config.accesstoken = Some("ignored-when-password-set".to_string());

        let password_mock = server
            .mock("POST", "/auth")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("email".into(), "dev@acme.test".into()),
                Matcher::UrlEncoded("password".into(), "hunter2".into()),
            ]))
            .with_status(200)
            .with_header("set-cookie", "access_token=tok123; Path=/; HttpOnly")
            .expect(1)
            .create_async().await;
        let token_mock = server.mock("POST", "/auth/token").expect(0).create_async().await;

        let http = HttpClient::new();
        let credential = resolve(&http, &config).await.unwrap();

        assert_eq!(credential.as_str(), "tok123");
        password_mock.assert_async().await;
        token_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_token_flow_used_when_password_empty() {
        let mut server = mockito::Server::new_async().await;
        let mut config = test_config(&server.url());
        config.password = Some("   ".to_string());
        config.accesstoken = Some("api-token".to_string());

        let password_mock = server.mock("POST", "/auth").expect(0).create_async().await;
        let token_mock = server
            .mock("POST", "/auth/token")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("email".into(), "dev@acme.test".into()),
                Matcher::UrlEncoded("accesstoken".into(), "api-token".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"jwt": "jwt456"}"#)
            .expect(1)
            .create_async().await;

        let http = HttpClient::new();
        let credential = resolve(&http, &config).await.unwrap();

        assert_eq!(credential.as_str(), "jwt456");
        password_mock.assert_async().await;
        token_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_without_network() {
        let mut server = mockito::Server::new_async().await;
        let config = test_config(&server.url());

        let password_mock = server.mock("POST", "/auth").expect(0).create_async().await;
        let token_mock = server.mock("POST", "/auth/token").expect(0).create_async().await;

        let http = HttpClient::new();
        let err = resolve(&http, &config).await.unwrap_err();

        assert!(err.to_string().contains("no credential provided"));
        password_mock.assert_async().await;
        token_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_cookie_takes_priority_over_body() {
        let mut server = mockito::Server::new_async().await;
        let mut config = test_config(&server.url());
        config.password = Some("hunter2".to_string());

        let _m = server
            .mock("POST", "/auth")
            .with_status(200)
            .with_header("set-cookie", "session=abc")
            .with_header("set-cookie", "access_token=from-cookie")
            .with_body(r#"{"jwt": "from-body"}"#)
            .create_async().await;

        let http = HttpClient::new();
        let credential = resolve(&http, &config).await.unwrap();

        assert_eq!(credential.as_str(), "from-cookie");
    }

    #[tokio::test]
    async fn test_token_missing_everywhere_fails() {
        let mut server = mockito::Server::new_async().await;
        let mut config = test_config(&server.url());
        config.password = Some("hunter2".to_string());

        let _m = server
            .mock("POST", "/auth")
            .with_status(200)
            .with_body(r#"{"status": "ok"}"#)
            .create_async().await;

        let http = HttpClient::new();
        let err = resolve(&http, &config).await.unwrap_err();

        assert!(err.to_string().contains("token not found in response"));
    }

    #[tokio::test]
    async fn test_non_2xx_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mut config = test_config(&server.url());
        config.password = Some("wrong".to_string());

        let _m = server
            .mock("POST", "/auth")
            .with_status(401)
            .with_body("bad credentials")
            .create_async().await;

        let http = HttpClient::new();
        let err = resolve(&http, &config).await.unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("bad credentials"));
    }
}
