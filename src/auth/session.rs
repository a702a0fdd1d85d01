//! Session management for Amplify API authentication.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use url::Url;

use super::Credentials;
use crate::{Error, Result};

/// Name of both the login response field carrying the token and the
/// request header it is sent back in.
pub const TOKEN_HEADER: &str = "OB-TOKEN-V1";

/// An authenticated Amplify session.
///
/// Holds the API root and the token obtained from `GET /login`. The token
/// is used as-is for the lifetime of the session; there is no refresh.
pub struct Session {
    base_url: String,
    token: SecretString,
}

impl Session {
    /// Log in with basic auth and capture the session token.
    ///
    /// # Errors
    ///
    /// - [`Error::UrlParse`] if the base URL is not an absolute URL
    /// - [`Error::Http`] on transport failure
    /// - [`Error::Authentication`] if the login status is not 2xx or the
    ///   response has no `OB-TOKEN-V1` string
    /// - [`Error::Json`] if a 2xx response body is not JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use amplify_rs::{Credentials, Session};
    ///
    /// # async fn example() -> amplify_rs::Result<()> {
    /// let session = Session::login(&Credentials::from_env()?).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn login(credentials: &Credentials) -> Result<Self> {
        Self::login_with(&reqwest::Client::new(), credentials).await
    }

    pub(crate) async fn login_with(
        http: &reqwest::Client,
        credentials: &Credentials,
    ) -> Result<Self> {
        let base_url = normalize_base_url(credentials.base_url())?;
        let url = format!("{}/login", base_url);

        tracing::debug!(user = credentials.user(), url = %url, "logging in");

        let response = http
            .get(&url)
            .basic_auth(credentials.user(), Some(credentials.password()))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(login_failure(status, &text));
        }

        let body: Value = serde_json::from_str(&text)?;
        let token = extract_token(&body)?;

        tracing::info!(user = credentials.user(), "logged in to Amplify");

        Ok(Self {
            base_url,
            token: SecretString::from(token),
        })
    }

    /// Build a session from a token obtained elsewhere.
    pub fn from_token(base_url: &str, token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            token: SecretString::from(token.into()),
        })
    }

    /// The API root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a resource path. Leading slashes on `path` are ignored.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn token(&self) -> &str {
        self.token.expose_secret()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

fn normalize_base_url(base_url: &str) -> Result<String> {
    // validate only, keep the caller's spelling
    Url::parse(base_url)?;
    Ok(base_url.trim_end_matches('/').to_string())
}

fn extract_token(body: &Value) -> Result<String> {
    body.get(TOKEN_HEADER)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            Error::Authentication(format!("login response has no {TOKEN_HEADER} field"))
        })
}

fn login_failure(status: StatusCode, text: &str) -> Error {
    let detail = match serde_json::from_str::<Value>(text) {
        Ok(body) => body.to_string(),
        Err(_) => text.to_string(),
    };
    Error::Authentication(format!("Login failed ({}): {}", status.as_u16(), detail))
}
