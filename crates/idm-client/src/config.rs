//! IdentityMind API client configuration.
//!
//! Selects the API host and the credential mode. Defaults point to the
//! sandbox environment. Override via environment variables or explicit
//! construction for production/testing.

use url::Url;
use zeroize::Zeroizing;

/// Environment used when `IDENTITYMIND_API_ENVIRONMENT` is unset.
/// Production is `edna`.
pub const DEFAULT_ENVIRONMENT: &str = "sandbox";

/// Default request timeout for the whole round trip.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How requests authenticate against the API.
///
/// `Debug` redacts every secret.
#[derive(Clone, Default)]
pub enum Credentials {
    /// HTTP Basic authorization built from `username:password`.
    Basic {
        username: String,
        password: Zeroizing<String>,
    },
    /// `Authorization: Bearer <token>`.
    Bearer { token: Zeroizing<String> },
    /// No `Authorization` header is sent.
    #[default]
    None,
}

impl Credentials {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: Zeroizing::new(token.into()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"[REDACTED]")
                .finish(),
            Self::None => f.write_str("None"),
        }
    }
}

/// Configuration for connecting to the IdentityMind API.
///
/// Built once at startup and moved into [`crate::IdentityMindClient::new`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API, e.g. <https://sandbox.identitymind.com>.
    /// Scheme, host and path are split out of it when the client is built.
    pub base_url: Url,
    /// Credential mode for the `Authorization` header.
    pub credentials: Credentials,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Build a configuration from an explicit base URL.
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("base_url", base_url)?,
            credentials,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `IDENTITYMIND_API_ENVIRONMENT` (default: `sandbox`), giving
    ///   `https://{env}.identitymind.com`
    /// - `IDENTITYMIND_API_URL` (optional, overrides the environment host)
    /// - `IDENTITYMIND_API_USER` + `IDENTITYMIND_API_TOKEN`: Basic auth when
    ///   both are set, Bearer when only the token is set
    /// - `IDENTITYMIND_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ApiConfig::from_env`] with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let base_url = match var("IDENTITYMIND_API_URL") {
            Some(raw) => parse_base_url("IDENTITYMIND_API_URL", &raw)?,
            None => {
                let environment =
                    var("IDENTITYMIND_API_ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.into());
                parse_base_url(
                    "IDENTITYMIND_API_ENVIRONMENT",
                    &format!("https://{environment}.identitymind.com"),
                )?
            }
        };

        let credentials = match (var("IDENTITYMIND_API_USER"), var("IDENTITYMIND_API_TOKEN")) {
            (Some(user), Some(token)) => Credentials::basic(user, token),
            (None, Some(token)) => Credentials::bearer(token),
            _ => Credentials::None,
        };

        let timeout_secs = match var("IDENTITYMIND_TIMEOUT_SECS") {
            Some(raw) => raw.parse().ok().filter(|secs: &u64| *secs > 0).ok_or_else(|| {
                ConfigError::InvalidTimeout("IDENTITYMIND_TIMEOUT_SECS".into(), raw.clone())
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            credentials,
            timeout_secs,
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    pub fn local_mock(url: &str, credentials: Credentials) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("local_mock", url)?,
            credentials,
            timeout_secs: 5,
        })
    }
}

fn parse_base_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))?;
    if url.host_str().is_none() {
        return Err(ConfigError::MissingHost(raw.to_string()));
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("base URL has no host: {0}")]
    MissingHost(String),
    #[error("invalid timeout for {0}: {1:?}")]
    InvalidTimeout(String, String),
    #[error("credentials contain characters not allowed in an HTTP header")]
    InvalidCredentials,
}
