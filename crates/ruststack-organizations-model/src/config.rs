//! Client-side endpoint configuration.
//!
//! [`OrganizationsConfig`] carries the values the codec needs to address a
//! request: the service endpoint, the signing region and the endpoint prefix.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default global endpoint of the service.
pub const DEFAULT_ENDPOINT: &str = "https://organizations.us-east-1.amazonaws.com";

/// Region the global endpoint signs requests for.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Endpoint prefix (and signing name) of the service.
pub const ENDPOINT_PREFIX: &str = "organizations";

/// AWS Organizations endpoint configuration.
///
/// # Examples
///
/// ```
/// use ruststack_organizations_model::config::OrganizationsConfig;
///
/// let config = OrganizationsConfig::default();
/// assert_eq!(config.endpoint, "https://organizations.us-east-1.amazonaws.com");
/// assert_eq!(config.region, "us-east-1");
///
/// let local = OrganizationsConfig::builder()
///     .endpoint("http://localhost:4566")
///     .build();
/// assert_eq!(local.endpoint_prefix, "organizations");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationsConfig {
    /// Base URL requests are sent to.
    #[builder(default = String::from(DEFAULT_ENDPOINT), setter(into))]
    pub endpoint: String,

    /// Region used to sign requests.
    #[builder(default = String::from(DEFAULT_REGION), setter(into))]
    pub region: String,

    /// Endpoint prefix of the service.
    #[builder(default = String::from(ENDPOINT_PREFIX), setter(into))]
    pub endpoint_prefix: String,
}

impl Default for OrganizationsConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            region: String::from(DEFAULT_REGION),
            endpoint_prefix: String::from(ENDPOINT_PREFIX),
        }
    }
}

impl OrganizationsConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `ORGANIZATIONS_ENDPOINT` | `https://organizations.us-east-1.amazonaws.com` |
    /// | `DEFAULT_REGION` | `us-east-1` |
    ///
    /// Empty values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("ORGANIZATIONS_ENDPOINT").filter(|v| !v.is_empty()) {
            config.endpoint = v;
        }
        if let Some(v) = lookup("DEFAULT_REGION").filter(|v| !v.is_empty()) {
            config.region = v;
        }

        config
    }

    /// Request URI for an `awsJson1_1` call: the endpoint with a `/` path.
    #[must_use]
    pub fn request_uri(&self) -> String {
        let base = self.endpoint.trim_end_matches('/');
        format!("{base}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = OrganizationsConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_prefix, "organizations");
        assert_eq!(
            config.request_uri(),
            "https://organizations.us-east-1.amazonaws.com/"
        );
    }

    #[test]
    fn test_should_read_overrides_from_lookup() {
        let config = OrganizationsConfig::from_lookup(|key| match key {
            "ORGANIZATIONS_ENDPOINT" => Some("http://localhost:4566/".to_owned()),
            "DEFAULT_REGION" => Some("eu-west-1".to_owned()),
            _ => None,
        });
        assert_eq!(config.endpoint, "http://localhost:4566/");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.request_uri(), "http://localhost:4566/");
    }

    #[test]
    fn test_should_ignore_empty_values() {
        let config = OrganizationsConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(config, OrganizationsConfig::default());
    }

    #[test]
    fn test_should_load_from_env() {
        let config = OrganizationsConfig::from_env();
        assert!(!config.endpoint.is_empty());
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = OrganizationsConfig::builder()
            .endpoint("http://127.0.0.1:9999")
            .region("ap-south-1")
            .build();
        assert_eq!(config.endpoint, "http://127.0.0.1:9999");
        assert_eq!(config.region, "ap-south-1");
        assert_eq!(config.endpoint_prefix, ENDPOINT_PREFIX);
    }

    #[test]
    fn test_should_serialize_to_camel_case_json() {
        let config = OrganizationsConfig::default();
        let json = serde_json::to_value(&config).expect("serialize config");
        assert_eq!(json["endpointPrefix"], "organizations");

        let partial: OrganizationsConfig =
            serde_json::from_str(r#"{"region":"us-gov-west-1"}"#).expect("deserialize config");
        assert_eq!(partial.region, "us-gov-west-1");
        assert_eq!(partial.endpoint, DEFAULT_ENDPOINT);
    }
}
