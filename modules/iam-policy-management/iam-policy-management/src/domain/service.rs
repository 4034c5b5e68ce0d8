//! HTTP-backed IAM Policy Management service.

use std::sync::Arc;

use http::Method;
use http::header::USER_AGENT;
use iam_policy_management_sdk::Headers;
use service_core::{
    Authenticator, BaseService, ExternalServiceConfig, HttpTransport, HyperTransport,
    RequestBuilder, ServiceError,
};

use crate::config::IamPolicyManagementConfig;

pub const DEFAULT_SERVICE_URL: &str = "https://iam.cloud.ibm.com";
pub const DEFAULT_SERVICE_NAME: &str = "iam_policy_management";

const SERVICE_VERSION: &str = "V1";
const SDK_ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";
const SDK_USER_AGENT: &str = concat!("iam-policy-management-rust/", env!("CARGO_PKG_VERSION"));

/// IAM Policy Management service.
///
/// Holds no per-call state, so one instance can serve concurrent calls.
/// Operations live in the sibling modules, one per resource family.
#[derive(Debug, Clone)]
pub struct IamPolicyManagementV1 {
    pub(crate) service: BaseService,
}

impl IamPolicyManagementV1 {
    /// Build a client on the default hyper transport.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Configuration`] when the URL is invalid, the timeout is
    /// zero or TLS cannot be set up.
    pub fn new(
        config: &IamPolicyManagementConfig,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self, ServiceError> {
        // A zero deadline would fail every exchange before it starts.
        if config.timeout_secs == 0 {
            return Err(ServiceError::configuration(
                "timeout_secs must be greater than zero",
            ));
        }
        let transport = HyperTransport::new(config.timeout())?;
        Self::with_transport(config, authenticator, Arc::new(transport))
    }

    /// # Errors
    ///
    /// [`ServiceError::Configuration`] when the URL is invalid.
    pub fn with_transport(
        config: &IamPolicyManagementConfig,
        authenticator: Arc<dyn Authenticator>,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, ServiceError> {
        let url = config.url.as_deref().unwrap_or(DEFAULT_SERVICE_URL);
        let service = BaseService::new(url, authenticator, transport)?;
        tracing::debug!(
            service_name = %config.service_name,
            service_url = service.service_url(),
            authentication_type = %service.authenticator().authentication_type(),
            "iam_policy_management client created"
        );
        Ok(Self { service })
    }

    /// Build a client from the credentials file and environment entries
    /// stored under `config.service_name`.
    ///
    /// A URL set in `config` wins over the external one.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Configuration`] when external configuration is unreadable
    /// or names no usable credentials.
    pub fn from_external_config(config: &IamPolicyManagementConfig) -> Result<Self, ServiceError> {
        let external = ExternalServiceConfig::load(&config.service_name)?;
        let authenticator = external.authenticator()?;
        let config = IamPolicyManagementConfig {
            url: config.url.clone().or(external.url),
            ..config.clone()
        };
        Self::new(&config, authenticator)
    }

    #[must_use]
    pub fn service_url(&self) -> &str {
        self.service.service_url()
    }

    /// # Errors
    ///
    /// [`ServiceError::Configuration`] on an invalid URL; the old URL is kept.
    pub fn set_service_url(&mut self, service_url: &str) -> Result<(), ServiceError> {
        self.service.set_service_url(service_url)
    }

    /// Start a request for `operation_id` with the headers every call carries.
    ///
    /// SDK headers are applied after caller headers and take precedence.
    pub(crate) fn request(
        &self,
        method: Method,
        operation_id: &str,
        path: &str,
        params: &[(&str, &str)],
        headers: &Headers,
    ) -> RequestBuilder {
        RequestBuilder::new(method)
            .resolve_url(self.service.service_url(), path, params)
            .headers(headers)
            .header(USER_AGENT.as_str(), SDK_USER_AGENT)
            .header(SDK_ANALYTICS_HEADER, &sdk_analytics(operation_id))
            .accept_json()
    }
}

fn sdk_analytics(operation_id: &str) -> String {
    format!(
        "service_name={DEFAULT_SERVICE_NAME};service_version={SERVICE_VERSION};operation_id={operation_id}"
    )
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use service_core::NoAuthAuthenticator;

    use super::*;

    fn client(url: Option<&str>) -> IamPolicyManagementV1 {
        let config = IamPolicyManagementConfig {
            url: url.map(str::to_owned),
            ..IamPolicyManagementConfig::default()
        };
        IamPolicyManagementV1::new(&config, Arc::new(NoAuthAuthenticator)).unwrap()
    }

    #[test]
    fn default_url_applies() {
        assert_eq!(client(None).service_url(), DEFAULT_SERVICE_URL);
        assert_eq!(
            client(Some("https://iam.test.cloud.ibm.com/")).service_url(),
            "https://iam.test.cloud.ibm.com"
        );
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = IamPolicyManagementConfig {
            timeout_secs: 0,
            ..IamPolicyManagementConfig::default()
        };
        let err = IamPolicyManagementV1::new(&config, Arc::new(NoAuthAuthenticator)).unwrap_err();
        assert!(matches!(err, ServiceError::Configuration { .. }), "{err:?}");
    }

    #[test]
    fn set_service_url_keeps_old_value_on_error() {
        let mut svc = client(None);
        assert!(svc.set_service_url("ftp://iam").is_err());
        assert_eq!(svc.service_url(), DEFAULT_SERVICE_URL);
        svc.set_service_url("http://localhost:8080").unwrap();
        assert_eq!(svc.service_url(), "http://localhost:8080");
    }

    #[test]
    fn request_carries_sdk_headers() {
        let mut headers = Headers::new();
        headers.insert("X-Correlation-Id".to_owned(), "c-1".to_owned());
        headers.insert("User-Agent".to_owned(), "custom".to_owned());

        let request = client(None)
            .request(
                Method::GET,
                "GetPolicy",
                "/v1/policies/{policy_id}",
                &[("policy_id", "pol-1")],
                &headers,
            )
            .build()
            .unwrap();

        assert_eq!(request.uri(), "https://iam.cloud.ibm.com/v1/policies/pol-1");
        assert_eq!(request.headers()["x-correlation-id"], "c-1");
        assert_eq!(request.headers()[USER_AGENT], SDK_USER_AGENT);
        assert_eq!(
            request.headers()[SDK_ANALYTICS_HEADER],
            "service_name=iam_policy_management;service_version=V1;operation_id=GetPolicy"
        );
        assert_eq!(request.headers()["accept"], "application/json");
    }
}
