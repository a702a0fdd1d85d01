//! Login credentials.

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Environment variable holding the API user name.
pub const USER_ENV: &str = "AMPLIFY_USER";
/// Environment variable holding the API password.
pub const PASSWORD_ENV: &str = "AMPLIFY_PASSWORD";
/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "AMPLIFY_BASE_URL";

/// Public production endpoint of the Amplify API.
pub const DEFAULT_BASE_URL: &str = "https://api.outbrain.com/amplify/v0.1";

/// User, password and API root used to log in.
///
/// The password is kept in a [`SecretString`] and never shows up in
/// `Debug` output.
///
/// # Example
///
/// ```
/// use amplify_rs::Credentials;
///
/// let credentials = Credentials::new("user@example.com", "hunter2", "https://api.outbrain.com/amplify/v0.1");
/// assert!(!format!("{:?}", credentials).contains("hunter2"));
/// ```
pub struct Credentials {
    user: String,
    password: SecretString,
    base_url: String,
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            password: SecretString::from(password.into()),
            base_url: base_url.into(),
        }
    }

    /// Read credentials from `AMPLIFY_USER`, `AMPLIFY_PASSWORD` and
    /// `AMPLIFY_BASE_URL`.
    ///
    /// `AMPLIFY_BASE_URL` is optional and defaults to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self> {
        let user = required_env(USER_ENV)?;
        let password = required_env(PASSWORD_ENV)?;
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(user, password, base_url))
    }

    /// The API user name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The API root that `/login` and every resource path hang off.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

fn required_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{name} must be set"))),
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("me", "p4ssw0rd", "http://localhost");
        let debug_str = format!("{:?}", credentials);
        assert!(!debug_str.contains("p4ssw0rd"));
        assert!(debug_str.contains("REDACTED"));
        assert_eq!(credentials.password(), "p4ssw0rd");
    }

    #[test]
    fn test_required_env_missing() {
        let err = required_env("AMPLIFY_RS_TEST_VARIABLE_THAT_IS_NEVER_SET").unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("NEVER_SET")));
    }
}
