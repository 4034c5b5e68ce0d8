//! Base service: authenticates, sends and decodes one exchange per call.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use http::header::ETAG;
use http::{HeaderMap, Request, Response, StatusCode};
use http_body_util::Full;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::Authenticator;
use crate::de::decode_object;
use crate::error::ServiceError;
use crate::transport::HttpTransport;

/// A decoded result together with the HTTP metadata of its response.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// The `ETag` response header, used as `If-Match` on the next update.
    #[must_use]
    pub fn etag(&self) -> Option<&str> {
        self.headers.get(ETAG).and_then(|v| v.to_str().ok())
    }

    #[must_use]
    pub fn into_result(self) -> T {
        self.result
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DetailedResponse<U> {
        DetailedResponse {
            status: self.status,
            headers: self.headers,
            result: f(self.result),
        }
    }
}

/// Shared state of a service client: base URL, authenticator and transport.
///
/// Holds no per-call state; `&self` methods are safe to call concurrently.
/// [`BaseService::set_service_url`] takes `&mut self`, so it cannot race
/// with in-flight requests.
#[derive(Clone)]
pub struct BaseService {
    service_url: String,
    authenticator: Arc<dyn Authenticator>,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for BaseService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseService")
            .field("service_url", &self.service_url)
            .field("authenticator", &self.authenticator)
            .finish_non_exhaustive()
    }
}

impl BaseService {
    /// # Errors
    ///
    /// [`ServiceError::Configuration`] when `service_url` is not an absolute
    /// http(s) URL.
    pub fn new(
        service_url: &str,
        authenticator: Arc<dyn Authenticator>,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            service_url: normalize_service_url(service_url)?,
            authenticator,
            transport,
        })
    }

    #[must_use]
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// # Errors
    ///
    /// [`ServiceError::Configuration`] on an invalid URL; the old URL is kept.
    pub fn set_service_url(&mut self, service_url: &str) -> Result<(), ServiceError> {
        self.service_url = normalize_service_url(service_url)?;
        Ok(())
    }

    #[must_use]
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    /// Send `request` and decode its JSON object body into `T`.
    ///
    /// # Errors
    ///
    /// Transport, server (non-2xx) and decode errors, in that order.
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: Request<Full<Bytes>>,
    ) -> Result<DetailedResponse<T>, ServiceError> {
        let response = self.execute(request).await?;
        let (parts, body) = response.into_parts();
        let result = decode_object(&body)?;
        Ok(DetailedResponse {
            status: parts.status,
            headers: parts.headers,
            result,
        })
    }

    /// Send `request` and discard any response body.
    ///
    /// # Errors
    ///
    /// Transport and server (non-2xx) errors.
    pub async fn request_empty(
        &self,
        request: Request<Full<Bytes>>,
    ) -> Result<DetailedResponse<()>, ServiceError> {
        let response = self.execute(request).await?;
        let (parts, _) = response.into_parts();
        Ok(DetailedResponse {
            status: parts.status,
            headers: parts.headers,
            result: (),
        })
    }

    async fn execute(&self, mut request: Request<Full<Bytes>>) -> Result<Response<Bytes>, ServiceError> {
        self.authenticator.authenticate(request.headers_mut())?;

        let method = request.method().clone();
        let uri = request.uri().clone();
        tracing::debug!(%method, %uri, "sending request");

        let response = self.transport.send(request).await?;
        let status = response.status();
        tracing::debug!(%method, %uri, status = status.as_u16(), "received response");

        if status.is_success() {
            return Ok(response);
        }

        let (parts, body) = response.into_parts();
        let error = ServiceError::server(status, parts.headers, &body);
        tracing::warn!(%method, %uri, status = status.as_u16(), %error, "request failed");
        Err(error)
    }
}

fn normalize_service_url(raw: &str) -> Result<String, ServiceError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ServiceError::configuration("service URL must not be empty"));
    }
    let url = Url::parse(trimmed)
        .map_err(|e| ServiceError::configuration(format!("invalid service URL `{trimmed}`: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ServiceError::configuration(format!(
            "service URL `{trimmed}` must use http or https"
        )));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn etag_reads_response_header() {
        let mut headers = HeaderMap::new();
        headers.insert(ETAG, HeaderValue::from_static("W/\"1-d8b9\""));
        let response = DetailedResponse {
            status: StatusCode::OK,
            headers,
            result: 7,
        };

        assert_eq!(response.etag(), Some("W/\"1-d8b9\""));
        assert_eq!(response.map(|n| n * 2).into_result(), 14);
    }

    #[test]
    fn service_url_is_normalized() {
        assert_eq!(
            normalize_service_url(" https://iam.cloud.ibm.com/ ").unwrap(),
            "https://iam.cloud.ibm.com"
        );
        assert!(normalize_service_url("").is_err());
        assert!(normalize_service_url("ftp://iam.cloud.ibm.com").is_err());
        assert!(normalize_service_url("iam.cloud.ibm.com").is_err());
    }
}
