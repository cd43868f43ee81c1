//! # HTTP client wrapper
//!
//! [`HttpClient`] is the one configured client for the backend. It never
//! carries credentials itself: code that needs an authenticated call asks for
//! an [`AuthedClient`] via [`HttpClient::authenticated`], which attaches
//! `Authorization: Bearer <token>` to every request it sends.
//!
//! Every response and transport error passes through [`execute`], which logs
//! it and classifies failures into [`ApiError`]. There is no retry and no
//! rewriting of the server's message.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// Shared client bound to a fixed base address.
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// A client that sends `token` as a bearer credential on every request.
    pub fn authenticated(&self, token: impl Into<String>) -> AuthedClient {
        AuthedClient {
            inner: self.clone(),
            token: token.into(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        execute(self.http.get(&url), "GET", &url).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        execute(self.http.post(&url).json(body), "POST", &url).await
    }
}

/// Capability for calls that require the current session's token.
#[derive(Clone, Debug)]
pub struct AuthedClient {
    inner: HttpClient,
    token: String,
}

impl AuthedClient {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.inner.url(path);
        let req = self.inner.http.get(&url).bearer_auth(&self.token);
        execute(req, "GET", &url).await
    }
}

/// Error body shapes the backend uses: `{ message }` or `{ error }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

/// Send a request, log the outcome and decode a JSON body.
pub(crate) async fn execute<T: DeserializeOwned>(
    req: reqwest::RequestBuilder,
    method: &str,
    url: &str,
) -> Result<T> {
    let resp = match req.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!("{} {} failed: {}", method, url, e);
            return Err(ApiError::Network(e.to_string()));
        }
    };

    let status = resp.status();
    let body = resp.text().await.map_err(|e| {
        tracing::warn!("{} {} -> {}: unreadable body: {}", method, url, status, e);
        ApiError::from(e)
    })?;

    if status.is_success() {
        tracing::debug!("{} {} -> {}", method, url, status);
        return serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("{} {} -> {}: unexpected body: {}", method, url, status, e);
            ApiError::Malformed(e.to_string())
        });
    }

    let message = server_message(&body)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    tracing::warn!("{} {} -> {}: {}", method, url, status, message);

    if status == reqwest::StatusCode::UNAUTHORIZED {
        Err(ApiError::Unauthorized(message))
    } else {
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
