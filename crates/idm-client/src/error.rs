//! IdentityMind API client error types.

/// Errors from IdentityMind API calls.
///
/// Nothing is retried internally; every failure is handed back to the caller.
/// Use [`IdmApiError::status`] to recover the HTTP status where a response
/// was received.
#[derive(Debug, thiserror::Error)]
pub enum IdmApiError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
    /// The request URL could not be parsed.
    #[error("invalid request URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    /// HTTP transport error (connection, timeout, TLS).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// A response arrived but its body could not be read to the end.
    #[error("failed to read response body from {endpoint} (status {status}): {source}")]
    ResponseBody {
        endpoint: String,
        status: u16,
        source: reqwest::Error,
    },
    /// The request body could not be encoded.
    #[error("failed to encode request body for {endpoint}: {reason}")]
    Encoding { endpoint: String, reason: String },
    /// The API answered with a status the caller treats as a failure.
    #[error("IdentityMind API {endpoint} returned {status}: {body}")]
    Remote {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// A gzip-encoded response body could not be inflated.
    #[error("failed to decompress response from {endpoint} (status {status}): {source}")]
    Decompress {
        endpoint: String,
        status: u16,
        source: std::io::Error,
    },
    /// The response body is not valid JSON for the requested type.
    #[error("failed to decode response from {endpoint} (status {status}): {body}; {source}")]
    Decode {
        endpoint: String,
        status: u16,
        body: String,
        source: serde_json::Error,
    },
    /// Transaction type outside `transferin`, `transferout`, `transfer`.
    #[error("invalid tx type provided: {0}")]
    InvalidTxType(String),
}

impl IdmApiError {
    /// HTTP status of the response that caused this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. }
            | Self::ResponseBody { status, .. }
            | Self::Decompress { status, .. }
            | Self::Decode { status, .. } => Some(*status),
            Self::Http { source, .. } => source.status().map(|s| s.as_u16()),
            Self::Config(_) | Self::InvalidUrl { .. } | Self::Encoding { .. } | Self::InvalidTxType(_) => {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_reported_for_response_errors() {
        let err = IdmApiError::Remote {
            endpoint: "GET im/admin/jax/case/1".into(),
            status: 404,
            body: "{}".into(),
        };
        assert_eq!(err.status(), Some(404));

        let source = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err = IdmApiError::Decode {
            endpoint: "POST im/transaction".into(),
            status: 502,
            body: "nope".into(),
            source,
        };
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn status_is_absent_before_any_request() {
        assert_eq!(IdmApiError::InvalidTxType("refund".into()).status(), None);
        let err = IdmApiError::Encoding {
            endpoint: "POST im/account/consumer".into(),
            reason: "bad mime".into(),
        };
        assert_eq!(err.status(), None);
    }
}
