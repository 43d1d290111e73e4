//! # Request Dispatch
//!
//! Every IdentityMind call goes through [`ApiClient::send`]: build the URL,
//! encode the parameters for the chosen content type, attach the fixed
//! headers, transmit, inflate a gzip body and decode the JSON.
//!
//! The HTTP status is handed back uninterpreted in [`ApiResponse`]; callers
//! that want non-2xx treated as an error use [`ApiResponse::error_for_status`].
//!
//! ## Fixed request headers
//!
//! | Header | Value |
//! |--------|-------|
//! | `Accept` | `application/json` |
//! | `Accept-Encoding` | `gzip, deflate` |
//! | `Accept-Language` | `en-us` |
//! | `Authorization` | `Basic base64(user:pass)`, `Bearer <token>`, or absent |

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, AUTHORIZATION,
    CONTENT_ENCODING, CONTENT_TYPE,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;
use zeroize::Zeroizing;

use crate::config::{ApiConfig, ConfigError, Credentials};
use crate::encoding;
use crate::error::IdmApiError;
use crate::types::Params;

/// Body encoding for POST and PUT requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Json,
    FormUrlEncoded,
    Multipart,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::Multipart => "multipart/form-data",
        }
    }
}

/// Decoded response together with its HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// `"{METHOD} {url}"` of the request that produced this response.
    pub endpoint: String,
    pub status: u16,
    pub body: T,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Turn a non-2xx response into [`IdmApiError::Remote`].
    pub fn error_for_status(self) -> Result<Self, IdmApiError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(IdmApiError::Remote {
            body: serde_json::to_string(&self.body).unwrap_or_default(),
            endpoint: self.endpoint,
            status: self.status,
        })
    }
}

impl ApiResponse<serde_json::Value> {
    /// Decode the body into one of the typed views, e.g.
    /// [`crate::types::Application`].
    pub fn parse<U: DeserializeOwned>(&self) -> Result<U, IdmApiError> {
        U::deserialize(&self.body).map_err(|source| IdmApiError::Decode {
            endpoint: self.endpoint.clone(),
            status: self.status,
            body: self.body.to_string(),
            source,
        })
    }
}

/// Generic IdentityMind API client: one configured `reqwest::Client` plus the
/// base URL split into scheme, host and path.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    scheme: String,
    host: String,
    path: String,
}

impl ApiClient {
    /// Build the HTTP client from configuration.
    ///
    /// Keep-alive is disabled so each call opens and tears down its own
    /// connection.
    pub fn new(config: &ApiConfig) -> Result<Self, IdmApiError> {
        let base = &config.base_url;
        let host = match (base.host_str(), base.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => return Err(ConfigError::MissingHost(base.to_string()).into()),
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-us"));
        if let Some(value) = authorization(&config.credentials) {
            let mut value =
                HeaderValue::from_str(&value).map_err(|_| ConfigError::InvalidCredentials)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(0)
            .default_headers(headers)
            .build()
            .map_err(|e| IdmApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            scheme: base.scheme().to_string(),
            host,
            path: base.path().to_string(),
        })
    }

    /// Absolute URL for `uri`, relative to the configured base.
    pub fn build_url(&self, uri: &str) -> String {
        build_url(&self.scheme, &self.host, &self.path, uri)
    }

    /// Send one request and decode the JSON response into `T`.
    ///
    /// GET parameters go to the query string. POST and PUT parameters are
    /// encoded according to `content_type`. Other methods send no body.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        content_type: ContentType,
        params: Option<&Params>,
    ) -> Result<ApiResponse<T>, IdmApiError> {
        let (endpoint, status, body) = self.dispatch(method, url, content_type, params).await?;

        let decoded = serde_json::from_slice(&body).map_err(|source| IdmApiError::Decode {
            endpoint: endpoint.clone(),
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
            source,
        })?;

        tracing::debug!(endpoint = %endpoint, status, bytes = body.len(), "IdentityMind API invocation succeeded");
        Ok(ApiResponse {
            endpoint,
            status,
            body: decoded,
        })
    }

    /// Transmit the request and return the status with the (inflated) body.
    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        content_type: ContentType,
        params: Option<&Params>,
    ) -> Result<(String, u16, Vec<u8>), IdmApiError> {
        let endpoint = format!("{method} {url}");
        let mut request_url = Url::parse(url).map_err(|source| {
            tracing::warn!(endpoint = %endpoint, error = %source, "failed to parse IdentityMind API URL");
            IdmApiError::InvalidUrl {
                url: url.to_string(),
                source,
            }
        })?;

        let empty = Params::new();
        let params = params.unwrap_or(&empty);

        let request = if method == Method::POST || method == Method::PUT {
            let builder = self.http.request(method, request_url);
            match content_type {
                ContentType::Json => {
                    let payload = serde_json::to_vec(params).map_err(|e| IdmApiError::Encoding {
                        endpoint: endpoint.clone(),
                        reason: e.to_string(),
                    })?;
                    builder.header(CONTENT_TYPE, content_type.as_str()).body(payload)
                }
                ContentType::FormUrlEncoded => builder
                    .header(CONTENT_TYPE, content_type.as_str())
                    .body(encoding::encode_form(params)),
                ContentType::Multipart => {
                    let form = encoding::into_form(encoding::multipart_fields(params)).map_err(|e| {
                        IdmApiError::Encoding {
                            endpoint: endpoint.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                    builder.multipart(form)
                }
            }
        } else {
            if method == Method::GET {
                encoding::apply_query(&mut request_url, params);
            }
            self.http.request(method, request_url)
        };

        let resp = request.send().await.map_err(|source| {
            tracing::warn!(endpoint = %endpoint, error = %source, "failed to invoke IdentityMind API");
            IdmApiError::Http {
                endpoint: endpoint.clone(),
                source,
            }
        })?;

        let status = resp.status().as_u16();
        tracing::debug!(endpoint = %endpoint, status, "received IdentityMind API response");

        let gzipped = resp
            .headers()
            .get(CONTENT_ENCODING)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("gzip"));

        let raw = resp.bytes().await.map_err(|source| {
            tracing::warn!(endpoint = %endpoint, status, error = %source, "failed to read IdentityMind API response body");
            IdmApiError::ResponseBody {
                endpoint: endpoint.clone(),
                status,
                source,
            }
        })?;

        let body = if gzipped {
            encoding::gunzip(&raw).map_err(|source| IdmApiError::Decompress {
                endpoint: endpoint.clone(),
                status,
                source,
            })?
        } else {
            raw.to_vec()
        };

        Ok((endpoint, status, body))
    }

    /// `GET {base}/{uri}` with string parameters in the query string.
    pub async fn get<T: DeserializeOwned>(
        &self,
        uri: &str,
        params: &Params,
    ) -> Result<ApiResponse<T>, IdmApiError> {
        let url = self.build_url(uri);
        self.send(Method::GET, &url, ContentType::Json, Some(params)).await
    }

    /// `POST {base}/{uri}` with a JSON body.
    pub async fn post<T: DeserializeOwned>(
        &self,
        uri: &str,
        params: &Params,
    ) -> Result<ApiResponse<T>, IdmApiError> {
        let url = self.build_url(uri);
        self.send(Method::POST, &url, ContentType::Json, Some(params)).await
    }

    /// `POST {base}/{uri}` with an `application/x-www-form-urlencoded` body.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        uri: &str,
        params: &Params,
    ) -> Result<ApiResponse<T>, IdmApiError> {
        let url = self.build_url(uri);
        self.send(Method::POST, &url, ContentType::FormUrlEncoded, Some(params))
            .await
    }

    /// `POST {base}/{uri}` with a `multipart/form-data` body; data URI values
    /// become file parts.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        uri: &str,
        params: &Params,
    ) -> Result<ApiResponse<T>, IdmApiError> {
        let url = self.build_url(uri);
        self.send(Method::POST, &url, ContentType::Multipart, Some(params))
            .await
    }

    /// `PUT {base}/{uri}` with a JSON body.
    pub async fn put<T: DeserializeOwned>(
        &self,
        uri: &str,
        params: &Params,
    ) -> Result<ApiResponse<T>, IdmApiError> {
        let url = self.build_url(uri);
        self.send(Method::PUT, &url, ContentType::Json, Some(params)).await
    }

    /// `DELETE {base}/{uri}`. Returns the status; an empty body is accepted.
    pub async fn delete(&self, uri: &str) -> Result<u16, IdmApiError> {
        let url = self.build_url(uri);
        let (endpoint, status, body) = self
            .dispatch(Method::DELETE, &url, ContentType::Json, None)
            .await?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(status);
        }
        serde_json::from_slice::<serde_json::Value>(&body).map_err(|source| IdmApiError::Decode {
            endpoint,
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
            source,
        })?;
        Ok(status)
    }
}

/// `scheme://host[/path]/uri`.
///
/// A path of `/` is dropped; a non-empty path gains a leading slash if it
/// lacks one.
pub fn build_url(scheme: &str, host: &str, path: &str, uri: &str) -> String {
    let path = path.trim_end_matches('/');
    let path = if path.is_empty() || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    format!("{scheme}://{host}{path}/{}", uri.trim_start_matches('/'))
}

/// `Basic base64(username:password)`.
pub fn basic_authorization(username: &str, password: &str) -> String {
    let credentials = Zeroizing::new(format!("{username}:{password}"));
    format!("Basic {}", BASE64.encode(credentials.as_bytes()))
}

/// `Bearer <token>`.
pub fn bearer_authorization(token: &str) -> String {
    format!("Bearer {token}")
}

fn authorization(credentials: &Credentials) -> Option<Zeroizing<String>> {
    match credentials {
        Credentials::Basic { username, password } => {
            Some(Zeroizing::new(basic_authorization(username, password)))
        }
        Credentials::Bearer { token } => Some(Zeroizing::new(bearer_authorization(token))),
        Credentials::None => None,
    }
}
