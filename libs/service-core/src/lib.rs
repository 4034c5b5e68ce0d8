#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Service Core
//!
//! The generic REST collaborator that typed service clients are built on:
//!
//! - [`RequestBuilder`] - URL resolution, headers, query and JSON body
//! - [`BaseService`] - authenticates, sends and decodes one exchange
//! - [`HttpTransport`] / [`HyperTransport`] - the network seam
//! - [`Authenticator`] - static credential schemes
//! - [`ExternalServiceConfig`] - named configuration from file and environment
//! - [`de`] - strict decoding of JSON objects, model lists and timestamps
//! - [`ServiceError`], [`ValidationError`] - error taxonomy
//! - [`Validate`] - required-field checks run before a request is built

pub mod auth;
pub mod config;
pub mod de;
pub mod error;
pub mod request;
pub mod service;
pub mod transport;
pub mod validation;

pub use auth::{
    AuthType, Authenticator, BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator,
};
pub use config::{CREDENTIALS_FILE_ENV, ExternalServiceConfig};
pub use error::{ServiceError, ValidationError, ValidationErrorKind};
pub use request::RequestBuilder;
pub use service::{BaseService, DetailedResponse};
pub use transport::{DEFAULT_TIMEOUT, HttpTransport, HyperTransport};
pub use validation::Validate;
