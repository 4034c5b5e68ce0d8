//! HTTP transport seam.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;

use crate::error::ServiceError;

/// Default deadline for one request/response exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Sends a built request and returns the fully buffered response.
///
/// Implementations must not interpret the status code.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// # Errors
    ///
    /// [`ServiceError::Transport`] on connection failure or timeout.
    async fn send(&self, request: Request<Full<Bytes>>) -> Result<Response<Bytes>, ServiceError>;
}

/// HTTPS-capable transport on hyper with native root certificates.
#[derive(Clone)]
pub struct HyperTransport {
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    timeout: Duration,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// # Errors
    ///
    /// [`ServiceError::Configuration`] when the TLS configuration cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, ServiceError> {
        let native = rustls_native_certs::load_native_certs();
        for error in &native.errors {
            tracing::warn!(%error, "failed to load a native root certificate");
        }

        let mut roots = rustls::RootCertStore::empty();
        let (added, ignored) = roots.add_parsable_certificates(native.certs);
        tracing::debug!(added, ignored, "loaded native root certificates");

        let provider = Arc::new(rustls::crypto::aws_lc_rs::default_provider());
        let tls = rustls::ClientConfig::builder_with_provider(provider)
            .with_safe_default_protocol_versions()
            .map_err(|e| ServiceError::configuration(format!("TLS configuration failed: {e}")))?
            .with_root_certificates(roots)
            .with_no_client_auth();

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_tls_config(tls)
            .https_or_http()
            .enable_http1()
            .build();

        Ok(Self {
            client: Client::builder(TokioExecutor::new()).build(connector),
            timeout,
        })
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl HttpTransport for HyperTransport {
    async fn send(&self, request: Request<Full<Bytes>>) -> Result<Response<Bytes>, ServiceError> {
        let exchange = async {
            let response = self
                .client
                .request(request)
                .await
                .map_err(|e| ServiceError::transport(format!("request failed: {e}")))?;
            let (parts, body) = response.into_parts();
            let body = body
                .collect()
                .await
                .map_err(|e| ServiceError::transport(format!("failed to read response body: {e}")))?
                .to_bytes();
            Ok::<_, ServiceError>(Response::from_parts(parts, body))
        };

        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| {
                ServiceError::transport(format!(
                    "request timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
    }
}
