#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write as _;

use secrecy::ExposeSecret;
use service_core::{AuthType, CREDENTIALS_FILE_ENV, ExternalServiceConfig, ServiceError};

const SERVICE: &str = "iam_policy_management";

fn credentials_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn nothing_configured_yields_empty_config() {
    temp_env::with_vars_unset(
        [
            CREDENTIALS_FILE_ENV,
            "IAM_POLICY_MANAGEMENT_URL",
            "IAM_POLICY_MANAGEMENT_AUTH_TYPE",
            "IAM_POLICY_MANAGEMENT_BEARER_TOKEN",
        ],
        || {
            let config = ExternalServiceConfig::load(SERVICE).unwrap();
            assert!(config.url.is_none());
            assert!(config.auth_type.is_none());
        },
    );
}

#[test]
fn environment_variables_are_read() {
    temp_env::with_vars(
        [
            (CREDENTIALS_FILE_ENV, None),
            ("IAM_POLICY_MANAGEMENT_URL", Some("https://iam.example.com")),
            ("IAM_POLICY_MANAGEMENT_AUTH_TYPE", Some("bearerToken")),
            ("IAM_POLICY_MANAGEMENT_BEARER_TOKEN", Some("env-token")),
        ],
        || {
            let config = ExternalServiceConfig::load(SERVICE).unwrap();
            assert_eq!(config.url.as_deref(), Some("https://iam.example.com"));
            assert_eq!(config.auth_type, Some(AuthType::BearerToken));
            assert_eq!(
                config.bearer_token.unwrap().expose_secret(),
                "env-token"
            );
        },
    );
}

#[test]
fn environment_overrides_credentials_file() {
    let file = credentials_file(
        "iam_policy_management:\n  url: https://file.example.com\n  auth_type: basic\n  username: alice\n  password: s3cret\nother_service:\n  url: https://other.example.com\n",
    );

    temp_env::with_vars(
        [
            (CREDENTIALS_FILE_ENV, Some(file.path().to_str().unwrap())),
            ("IAM_POLICY_MANAGEMENT_URL", Some("https://env.example.com")),
            ("IAM_POLICY_MANAGEMENT_AUTH_TYPE", None),
        ],
        || {
            let config = ExternalServiceConfig::load(SERVICE).unwrap();
            assert_eq!(config.url.as_deref(), Some("https://env.example.com"));
            assert_eq!(config.auth_type, Some(AuthType::Basic));
            assert_eq!(config.username.as_deref(), Some("alice"));

            let auth = config.authenticator().unwrap();
            assert_eq!(auth.authentication_type(), AuthType::Basic);
        },
    );
}

#[test]
fn missing_credentials_file_is_a_configuration_error() {
    temp_env::with_var(
        CREDENTIALS_FILE_ENV,
        Some("/nonexistent/iam-credentials.yaml"),
        || {
            let err = ExternalServiceConfig::load(SERVICE).unwrap_err();
            assert!(matches!(err, ServiceError::Configuration { .. }));
        },
    );
}

#[test]
fn unknown_auth_type_is_rejected() {
    temp_env::with_vars(
        [
            (CREDENTIALS_FILE_ENV, None),
            ("IAM_POLICY_MANAGEMENT_AUTH_TYPE", Some("kerberos")),
        ],
        || {
            let err = ExternalServiceConfig::load(SERVICE).unwrap_err();
            assert!(err.to_string().contains("iam_policy_management"));
        },
    );
}

#[test]
fn numeric_credentials_stay_strings() {
    temp_env::with_vars(
        [
            (CREDENTIALS_FILE_ENV, None),
            ("IAM_POLICY_MANAGEMENT_URL", None),
            ("IAM_POLICY_MANAGEMENT_AUTH_TYPE", Some("basic")),
            ("IAM_POLICY_MANAGEMENT_BEARER_TOKEN", None),
            ("IAM_POLICY_MANAGEMENT_USERNAME", Some("1234567")),
            ("IAM_POLICY_MANAGEMENT_PASSWORD", Some("0042")),
        ],
        || {
            let config = ExternalServiceConfig::load(SERVICE).unwrap();
            assert_eq!(config.username.as_deref(), Some("1234567"));
            assert_eq!(config.password.as_ref().unwrap().expose_secret(), "0042");
            assert_eq!(
                config.authenticator().unwrap().authentication_type(),
                AuthType::Basic
            );
        },
    );
}
