//! Consuming request builder.
//!
//! Failures are recorded as they happen and reported once by [`RequestBuilder::build`],
//! so call chains stay flat.

use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, Method, Request};
use http_body_util::Full;
use serde::Serialize;
use url::Url;

use crate::error::{ServiceError, ValidationError};

pub const APPLICATION_JSON: &str = "application/json";

/// Builds one HTTP request for a service operation.
#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    url: Option<Url>,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: Option<Bytes>,
    error: Option<ServiceError>,
}

impl RequestBuilder {
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            url: None,
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
            error: None,
        }
    }

    /// Resolve `path_template` against `service_url`.
    ///
    /// Placeholders such as `{policy_id}` are replaced by the matching entry of
    /// `params`, percent-encoded. An empty parameter value is a validation error.
    #[must_use]
    pub fn resolve_url(mut self, service_url: &str, path_template: &str, params: &[(&str, &str)]) -> Self {
        if self.error.is_some() {
            return self;
        }
        match resolve(service_url, path_template, params) {
            Ok(url) => self.url = Some(url),
            Err(e) => self.error = Some(e),
        }
        self
    }

    /// Set a header, replacing any previous value with the same name.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if self.error.is_some() {
            return self;
        }
        let name = HeaderName::from_bytes(name.as_bytes());
        let value = HeaderValue::from_str(value);
        match (name, value) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            (Err(e), _) => self.error = Some(ServiceError::transport(format!("invalid header name: {e}"))),
            (_, Err(e)) => self.error = Some(ServiceError::transport(format!("invalid header value: {e}"))),
        }
        self
    }

    #[must_use]
    pub fn header_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.header(name, value),
            None => self,
        }
    }

    /// Copy caller-supplied headers onto the request.
    #[must_use]
    pub fn headers<'a, I>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        headers
            .into_iter()
            .fold(self, |builder, (name, value)| builder.header(name, value))
    }

    #[must_use]
    pub fn accept_json(self) -> Self {
        self.header(ACCEPT.as_str(), APPLICATION_JSON)
    }

    #[must_use]
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn query_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, &value.to_string()),
            None => self,
        }
    }

    /// Serialize `body` as the JSON request body and set `Content-Type`.
    #[must_use]
    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        if self.error.is_some() {
            return self;
        }
        match serde_json::to_vec(body) {
            Ok(bytes) => {
                self.body = Some(Bytes::from(bytes));
                self.header(CONTENT_TYPE.as_str(), APPLICATION_JSON)
            }
            Err(e) => {
                self.error = Some(ServiceError::transport(format!(
                    "failed to serialize request body: {e}"
                )));
                self
            }
        }
    }

    /// # Errors
    ///
    /// The first error recorded while building, or a transport error when no
    /// URL was resolved.
    pub fn build(self) -> Result<Request<Full<Bytes>>, ServiceError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let mut url = self
            .url
            .ok_or_else(|| ServiceError::transport("request URL was not resolved"))?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        let mut request = Request::builder()
            .method(self.method)
            .uri(url.as_str())
            .body(Full::new(self.body.unwrap_or_default()))
            .map_err(|e| ServiceError::transport(format!("failed to build request: {e}")))?;
        *request.headers_mut() = self.headers;
        Ok(request)
    }
}

fn resolve(service_url: &str, path_template: &str, params: &[(&str, &str)]) -> Result<Url, ServiceError> {
    if service_url.trim().is_empty() {
        return Err(ServiceError::transport("service URL is not set"));
    }

    let mut path = path_template.to_owned();
    for (name, value) in params {
        if value.trim().is_empty() {
            return Err(ValidationError::missing(*name).into());
        }
        path = path.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
    }
    if path.contains('{') {
        return Err(ServiceError::transport(format!("unresolved path parameter in `{path}`")));
    }

    let full = format!("{}{path}", service_url.trim_end_matches('/'));
    Url::parse(&full).map_err(|e| ServiceError::transport(format!("invalid request URL `{full}`: {e}")))
}
