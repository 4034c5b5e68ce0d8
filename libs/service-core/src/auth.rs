//! Static request authenticators.
//!
//! Each authenticator decorates outgoing request headers. Token acquisition and
//! refresh are left to the caller: a bearer token is used exactly as supplied.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::ServiceError;

/// Authentication scheme named in external configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    #[default]
    #[serde(alias = "noauth", alias = "none")]
    NoAuth,
    #[serde(alias = "bearerToken", alias = "bearertoken", alias = "bearer")]
    BearerToken,
    Basic,
}

impl AuthType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoAuth => "noauth",
            Self::BearerToken => "bearerToken",
            Self::Basic => "basic",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adds credentials to an outgoing request.
pub trait Authenticator: Send + Sync + fmt::Debug {
    fn authentication_type(&self) -> AuthType;

    /// Decorate `headers` with credentials.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Configuration`] if the credentials cannot form a valid header.
    fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), ServiceError>;
}

/// Sends requests without credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthAuthenticator;

impl Authenticator for NoAuthAuthenticator {
    fn authentication_type(&self) -> AuthType {
        AuthType::NoAuth
    }

    fn authenticate(&self, _headers: &mut HeaderMap) -> Result<(), ServiceError> {
        Ok(())
    }
}

/// Sends a caller-managed bearer token.
#[derive(Debug, Clone)]
pub struct BearerTokenAuthenticator {
    token: SecretString,
}

impl BearerTokenAuthenticator {
    /// # Errors
    ///
    /// [`ServiceError::Configuration`] when the token is empty.
    pub fn new(token: SecretString) -> Result<Self, ServiceError> {
        if token.expose_secret().trim().is_empty() {
            return Err(ServiceError::configuration("bearer token must not be empty"));
        }
        Ok(Self { token })
    }

    /// Replace the token, e.g. after the caller refreshed it.
    pub fn set_token(&mut self, token: SecretString) {
        self.token = token;
    }
}

impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> AuthType {
        AuthType::BearerToken
    }

    fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), ServiceError> {
        let value = sensitive_header(&format!("Bearer {}", self.token.expose_secret()))?;
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// HTTP basic authentication.
#[derive(Debug, Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: SecretString,
}

impl BasicAuthenticator {
    /// # Errors
    ///
    /// [`ServiceError::Configuration`] when the username is empty or contains `:`,
    /// or the password is empty.
    pub fn new(username: impl Into<String>, password: SecretString) -> Result<Self, ServiceError> {
        let username = username.into();
        if username.trim().is_empty() || username.contains(':') {
            return Err(ServiceError::configuration(
                "basic auth username must be non-empty and must not contain ':'",
            ));
        }
        if password.expose_secret().is_empty() {
            return Err(ServiceError::configuration("basic auth password must not be empty"));
        }
        Ok(Self { username, password })
    }
}

impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> AuthType {
        AuthType::Basic
    }

    fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), ServiceError> {
        let credentials = STANDARD.encode(format!(
            "{}:{}",
            self.username,
            self.password.expose_secret()
        ));
        headers.insert(AUTHORIZATION, sensitive_header(&format!("Basic {credentials}"))?);
        Ok(())
    }
}

fn sensitive_header(value: &str) -> Result<HeaderValue, ServiceError> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|_| ServiceError::configuration("credentials contain invalid header characters"))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn bearer_sets_authorization_header() {
        let auth = BearerTokenAuthenticator::new(SecretString::from("tok-123")).unwrap();
        let mut headers = HeaderMap::new();
        auth.authenticate(&mut headers).unwrap();

        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer tok-123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn bearer_debug_redacts_token() {
        let auth = BearerTokenAuthenticator::new(SecretString::from("super-secret")).unwrap();
        assert!(!format!("{auth:?}").contains("super-secret"));
    }

    #[test]
    fn basic_encodes_credentials() {
        let auth = BasicAuthenticator::new("apikey", SecretString::from("pw")).unwrap();
        let mut headers = HeaderMap::new();
        auth.authenticate(&mut headers).unwrap();
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Basic YXBpa2V5OnB3"
        );
    }

    #[test]
    fn invalid_credentials_are_rejected() {
        assert!(BearerTokenAuthenticator::new(SecretString::from(" ")).is_err());
        assert!(BasicAuthenticator::new("a:b", SecretString::from("pw")).is_err());
        assert!(BasicAuthenticator::new("user", SecretString::from("")).is_err());
    }

    #[test]
    fn no_auth_leaves_headers_alone() {
        let mut headers = HeaderMap::new();
        NoAuthAuthenticator.authenticate(&mut headers).unwrap();
        assert!(headers.is_empty());
        assert_eq!(NoAuthAuthenticator.authentication_type(), AuthType::NoAuth);
    }
}
