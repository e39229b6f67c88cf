//! HTTP identity gateway implementation using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;
use warden_application::ports::IdentityGateway;
use warden_domain::{AuthError, AuthResult, ProfileRecord, outcome};

use crate::credential::BearerSlot;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

const TOKEN_ENDPOINT: &str = "jwt/token";
const PROFILE_ENDPOINT: &str = "users/profile";
const LOGOUT_ENDPOINT: &str = "users/logout";

/// Errors constructing the gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayBuildError {
    /// The base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Password-grant token exchange body.
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    username: &'a str,
    password: &'a str,
    scope: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Token exchange response from the identity endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProfileRequest<'a> {
    username: &'a str,
}

/// Profile fetch envelope: `code` is the status discriminator, `data`
/// the profile payload.
#[derive(Debug, Deserialize)]
struct ProfileResponse {
    code: i64,
    #[serde(default)]
    data: Option<ProfileData>,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    codename: Option<Vec<String>>,
    #[serde(default)]
    projects: Option<Vec<ProjectEntry>>,
}

#[derive(Debug, Deserialize)]
struct ProjectEntry {
    codename: String,
}

/// The reqwest-backed identity gateway.
///
/// All endpoint paths are joined onto one configured base URL. The
/// bearer credential lives in a [`BearerSlot`] that can be shared with
/// the response pipeline, so every authenticated call sends the same
/// default authorization header.
#[derive(Debug, Clone)]
pub struct HttpIdentityGateway {
    base_url: Url,
    client: Client,
    bearer: BearerSlot,
}

impl HttpIdentityGateway {
    /// Creates a gateway with its own credential slot.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayBuildError`] when the base URL is invalid or
    /// the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, GatewayBuildError> {
        Self::with_slot(base_url, BearerSlot::new())
    }

    /// Creates a gateway sharing an existing credential slot.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayBuildError`] when the base URL is invalid or
    /// the HTTP client cannot be built.
    pub fn with_slot(base_url: &str, bearer: BearerSlot) -> Result<Self, GatewayBuildError> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;

        Ok(Self {
            base_url,
            client,
            bearer,
        })
    }

    /// Returns the credential slot, for sharing with the pipeline.
    #[must_use]
    pub fn bearer_slot(&self) -> BearerSlot {
        self.bearer.clone()
    }

    fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

#[async_trait]
impl IdentityGateway for HttpIdentityGateway {
    async fn exchange_credentials(&self, username: &str, password: &str) -> AuthResult<String> {
        let url = self
            .endpoint(TOKEN_ENDPOINT)
            .map_err(|e| AuthError::credential(e.to_string()))?;

        let form = TokenRequest {
            grant_type: "password",
            username,
            password,
            scope: "",
            client_id: "",
            client_secret: "",
        };
        let body = serde_urlencoded::to_string(&form)
            .map_err(|e| AuthError::credential(format!("failed to encode form: {e}")))?;

        let response = self
            .client
            .post(url)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| AuthError::credential(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(AuthError::credential(format!("HTTP {status} - {text}")));
        }

        let payload: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::credential(format!("malformed token response: {e}")))?;

        payload
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthError::credential("response carried no access token"))
    }

    async fn fetch_profile(&self, username: &str) -> AuthResult<ProfileRecord> {
        let url = self
            .endpoint(PROFILE_ENDPOINT)
            .map_err(|e| AuthError::profile_fetch(e.to_string()))?;

        let request = self.client.post(url).json(&ProfileRequest { username });
        let response = self
            .bearer
            .apply(request)
            .await
            .send()
            .await
            .map_err(|e| AuthError::profile_fetch(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(AuthError::profile_fetch(format!("HTTP {status} - {text}")));
        }

        let payload: ProfileResponse = response
            .json()
            .await
            .map_err(|e| AuthError::profile_fetch(format!("malformed profile response: {e}")))?;

        if !outcome::is_success_code(payload.code) {
            return Err(AuthError::profile_fetch(format!(
                "rejected with status code {}",
                payload.code
            )));
        }

        let data = payload
            .data
            .ok_or_else(|| AuthError::profile_fetch("response carried no profile data"))?;

        let codenames = ProfileRecord::normalize_codenames(
            data.codename,
            data.projects
                .map(|projects| projects.into_iter().map(|p| p.codename).collect()),
        );

        Ok(ProfileRecord {
            username: data.username.unwrap_or_else(|| username.to_string()),
            role: data.role,
            email: data.email,
            codenames,
        })
    }

    async fn notify_logout(&self, username: &str) -> AuthResult<()> {
        let url = self
            .endpoint(LOGOUT_ENDPOINT)
            .map_err(|e| AuthError::Notify(e.to_string()))?;

        let request = self.client.get(url).query(&[("username", username)]);
        self.bearer
            .apply(request)
            .await
            .send()
            .await
            .map_err(|e| AuthError::Notify(e.to_string()))?;

        // Any response counts as delivered; the caller ignores the
        // body either way.
        Ok(())
    }

    async fn set_bearer_token(&self, token: Option<String>) {
        self.bearer.install(token).await;
    }
}
