//! Error taxonomy for service calls.
//!
//! Every failure surfaces as a [`ServiceError`]; nothing is retried or swallowed.

use std::fmt;

use http::{HeaderMap, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// What is wrong with a validated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required value is absent or empty.
    Missing,
    /// A required list has no elements.
    EmptyList,
    /// A list holds a different number of elements than allowed.
    Cardinality { expected: usize, actual: usize },
    /// The value is present but not acceptable.
    Invalid(String),
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("is required"),
            Self::EmptyList => f.write_str("must contain at least one element"),
            Self::Cardinality { expected, actual } => {
                write!(f, "must contain exactly {expected} element(s), got {actual}")
            }
            Self::Invalid(reason) => write!(f, "is invalid: {reason}"),
        }
    }
}

/// A required option is missing or a structural invariant is violated.
///
/// Raised before any request is built. `field` is a path such as
/// `subjects[0].attributes[1].name`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: `{field}` {kind}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ValidationErrorKind::Missing,
        }
    }

    #[must_use]
    pub fn empty_list(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ValidationErrorKind::EmptyList,
        }
    }

    #[must_use]
    pub fn cardinality(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self {
            field: field.into(),
            kind: ValidationErrorKind::Cardinality { expected, actual },
        }
    }

    #[must_use]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ValidationErrorKind::Invalid(reason.into()),
        }
    }

    /// Prefix the field path with its parent, e.g. `name` -> `subjects[0].name`.
    #[must_use]
    pub fn within(mut self, parent: &str) -> Self {
        self.field = format!("{parent}.{}", self.field);
        self
    }
}

/// Errors returned by every service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Options failed validation; no request was built.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be built or the exchange failed at the connection level.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The response body is not the expected JSON shape.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// The server answered with a non-2xx status.
    #[error("server error ({status}): {message}")]
    Server {
        status: StatusCode,
        message: String,
        body: Option<Value>,
        headers: HeaderMap,
    },

    /// External configuration could not be resolved.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl ServiceError {
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Build a server error from a non-2xx response. The body is kept when it is JSON.
    #[must_use]
    pub fn server(status: StatusCode, headers: HeaderMap, body: &[u8]) -> Self {
        let body: Option<Value> = serde_json::from_slice(body).ok();
        let message = server_message(body.as_ref(), status);
        Self::Server {
            status,
            message,
            body,
            headers,
        }
    }

    /// HTTP status of a server error; `None` for every other kind.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The validation failure, if this error is one.
    #[must_use]
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of the service error envelope.
fn server_message(body: Option<&Value>, status: StatusCode) -> String {
    let from_body = body.and_then(|body| {
        body.get("errors")
            .and_then(Value::as_array)
            .and_then(|errors| errors.first())
            .and_then(|first| first.get("message"))
            .or_else(|| body.get("message"))
            .or_else(|| body.get("error"))
            .or_else(|| body.get("errorMessage"))
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
    });

    from_body.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned()
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_errors_envelope() {
        let body = br#"{"trace":"t1","errors":[{"code":"precondition_failed","message":"ETag mismatch"}],"status_code":412}"#;
        let err = ServiceError::server(StatusCode::PRECONDITION_FAILED, HeaderMap::new(), body);

        assert_eq!(err.status(), Some(StatusCode::PRECONDITION_FAILED));
        match err {
            ServiceError::Server { message, body, .. } => {
                assert_eq!(message, "ETag mismatch");
                assert!(body.is_some());
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn server_message_falls_back_to_reason_phrase() {
        let err = ServiceError::server(StatusCode::NOT_FOUND, HeaderMap::new(), b"not json");
        assert_eq!(err.to_string(), "server error (404 Not Found): Not Found");
    }

    #[test]
    fn validation_error_names_nested_field() {
        let err = ValidationError::missing("name")
            .within("attributes[1]")
            .within("subjects[0]");
        assert_eq!(err.field, "subjects[0].attributes[1].name");
        assert_eq!(
            err.to_string(),
            "validation failed: `subjects[0].attributes[1].name` is required"
        );
    }
}
