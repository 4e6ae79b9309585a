//! Configuration for API connections.
use secrecy::SecretString;
use url::Url;

use crate::error::{Error, Result};

/// Default API host for the public platform.
pub const DEFAULT_HOST: &str = "api.github.com";
/// User agent sent with every request; the API rejects agent-less requests.
pub const DEFAULT_USER_AGENT: &str =
    concat!("octopull/", env!("CARGO_PKG_VERSION"));

/// Connection configuration for authenticating and addressing the API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// URL scheme (http or https).
    pub scheme: String,
    /// API host (e.g., "api.github.com").
    pub host: String,
    /// API port for self-hosted instances.
    pub port: Option<u16>,
    /// Access token for authentication; anonymous access works for public
    /// repositories at a lower rate limit.
    pub token: Option<SecretString>,
    /// User agent header value.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: DEFAULT_HOST.to_string(),
            port: None,
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Default configuration with a personal access token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(SecretString::from(token.into())),
            ..Self::default()
        }
    }

    /// Assemble the API base URL from scheme, host, and optional port.
    pub fn base_url(&self) -> Result<Url> {
        let base = match self.port {
            Some(port) => format!("{}://{}:{}/", self.scheme, self.host, port),
            None => format!("{}://{}/", self.scheme, self.host),
        };

        Url::parse(&base).map_err(|err| {
            Error::invalid_config(format!("bad base URL {base}: {err}"))
        })
    }
}
