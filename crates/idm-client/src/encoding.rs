//! Query-string, form and multipart encoders for the dispatch routine, plus
//! response decompression.
//!
//! Only string-valued parameters can be expressed in a query string, a
//! URL-encoded form or a multipart field. Non-string values are skipped with
//! a warning instead of failing the call; the JSON encoder is the only one
//! that carries them.

use std::io::{self, Read};

use flate2::read::GzDecoder;
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::types::Params;

/// Binary payload carried inside an RFC 2397 `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    /// `type/subtype` declared by the URI (`text/plain` when omitted).
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Upper bound on an inflated response body.
pub const MAX_DECOMPRESSED_BYTES: u64 = 32 * 1024 * 1024;

/// Decode `value` as a data URI. Returns `None` for anything that is not a
/// syntactically valid RFC 2397 data URI with a decodable payload.
pub fn decode_data_uri(value: &str) -> Option<DataUri> {
    if !has_data_uri_header(value) {
        return None;
    }
    let url = data_url::DataUrl::process(value).ok()?;
    let (bytes, _fragment) = url.decode_to_vec().ok()?;
    let mime = url.mime_type();
    Some(DataUri {
        mime: format!("{}/{}", mime.type_, mime.subtype),
        bytes,
    })
}

/// RFC 2397 header check: `data:[type/subtype][;attribute=value]*[;base64],`.
///
/// The `data-url` parser follows the WHATWG fetch algorithm and accepts
/// almost any string after `data:`, so the header is validated here first.
fn has_data_uri_header(value: &str) -> bool {
    let Some(scheme) = value.get(..5) else {
        return false;
    };
    if !scheme.eq_ignore_ascii_case("data:") {
        return false;
    }
    let Some((header, _payload)) = value[5..].split_once(',') else {
        return false;
    };
    if header.is_empty() {
        return true;
    }

    let mut segments = header.split(';');
    let media_type = segments.next().unwrap_or_default();
    if !media_type.is_empty() {
        match media_type.split_once('/') {
            Some((type_, subtype)) if is_token(type_) && is_token(subtype) => {}
            _ => return false,
        }
    }

    let parameters: Vec<&str> = segments.collect();
    let last = parameters.len().saturating_sub(1);
    parameters.iter().enumerate().all(|(i, parameter)| {
        if i == last && parameter.eq_ignore_ascii_case("base64") {
            return true;
        }
        match parameter.split_once('=') {
            Some((attribute, value)) => is_token(attribute) && is_parameter_value(value),
            None => false,
        }
    })
}

/// RFC 2045 token: one or more printable ASCII characters, none of them
/// whitespace or a tspecial.
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?=".contains(&b)
        })
}

fn is_parameter_value(s: &str) -> bool {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        return s[1..s.len() - 1].bytes().all(|b| b.is_ascii() && !b.is_ascii_control() && b != b'"');
    }
    is_token(s)
}

/// String-valued entries of `params`, in key order.
pub fn query_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| value.as_str().map(|v| (key.clone(), v.to_string())))
        .collect()
}

/// Set every string-valued parameter on the query string of `url`.
///
/// A parameter replaces any pair with the same key already present in `url`.
pub fn apply_query(url: &mut Url, params: &Params) {
    let pairs = query_pairs(params);
    if pairs.is_empty() {
        return;
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !pairs.iter().any(|(k, _)| k == key))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .extend_pairs(pairs);
}

/// Fields of an `application/x-www-form-urlencoded` body.
pub fn form_fields(params: &Params) -> Vec<(String, String)> {
    let mut fields = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value.as_str() {
            Some(v) => fields.push((key.clone(), v.to_string())),
            None => tracing::warn!(
                key = %key,
                "skipping non-string value when encoding application/x-www-form-urlencoded request"
            ),
        }
    }
    fields
}

/// Encode `params` as an `application/x-www-form-urlencoded` body.
pub fn encode_form(params: &Params) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form_fields(params))
        .finish()
}

/// One part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartField {
    Text {
        name: String,
        value: String,
    },
    /// File part decoded from a data URI; the file name is the parameter key.
    File {
        name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

/// Classify every string-valued parameter as a file (data URI) or a text field.
pub fn multipart_fields(params: &Params) -> Vec<MultipartField> {
    let mut fields = Vec::with_capacity(params.len());
    for (key, value) in params {
        let Some(raw) = value.as_str() else {
            tracing::warn!(
                key = %key,
                "skipping non-string value when constructing multipart/form-data request"
            );
            continue;
        };

        match decode_data_uri(raw) {
            Some(data) => {
                tracing::debug!(key = %key, bytes = data.bytes.len(), "parsed data url parameter");
                fields.push(MultipartField::File {
                    name: key.clone(),
                    mime: data.mime,
                    bytes: data.bytes,
                });
            }
            None => fields.push(MultipartField::Text {
                name: key.clone(),
                value: raw.to_string(),
            }),
        }
    }
    fields
}

/// Assemble a multipart form from classified fields.
pub fn into_form(fields: Vec<MultipartField>) -> Result<Form, reqwest::Error> {
    let mut form = Form::new();
    for field in fields {
        form = match field {
            MultipartField::Text { name, value } => form.text(name, value),
            MultipartField::File { name, mime, bytes } => {
                let part = Part::bytes(bytes).file_name(name.clone()).mime_str(&mime)?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

/// Inflate a gzip-encoded response body, capped at [`MAX_DECOMPRESSED_BYTES`].
pub fn gunzip(body: &[u8]) -> io::Result<Vec<u8>> {
    gunzip_limited(body, MAX_DECOMPRESSED_BYTES)
}

/// Inflate `body`, failing with `InvalidData` once more than `limit` bytes
/// come out.
pub fn gunzip_limited(body: &[u8], limit: u64) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    GzDecoder::new(body)
        .take(limit.saturating_add(1))
        .read_to_end(&mut out)?;
    if out.len() as u64 > limit {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("decompressed body exceeds {limit} bytes"),
        ));
    }
    Ok(out)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::Value;

    /// Parameter values: plain strings mixed with every non-string JSON kind.
    fn param_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            "[a-zA-Z0-9 _&=%+/.-]{0,20}".prop_map(Value::String),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            prop::collection::vec(any::<i32>(), 0..3).prop_map(|v| serde_json::json!(v)),
        ]
    }

    fn param_map() -> impl Strategy<Value = Params> {
        prop::collection::btree_map("[a-z][a-z0-9_]{0,7}", param_value(), 0..8)
            .prop_map(|entries| entries.into_iter().collect())
    }

    fn string_entries(params: &Params) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = params
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
            .collect();
        entries.sort();
        entries
    }

    proptest! {
        /// The query string carries exactly the string-valued parameters.
        #[test]
        fn query_matches_string_entries(params in param_map()) {
            let mut url = Url::parse("https://sandbox.identitymind.com/im/admin/jax/merchant/m-1").unwrap();
            apply_query(&mut url, &params);

            let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
            pairs.sort();
            prop_assert_eq!(pairs, string_entries(&params));
        }

        /// Form fields keep only string-valued parameters.
        #[test]
        fn form_fields_keep_only_strings(params in param_map()) {
            let mut fields = form_fields(&params);
            fields.sort();
            prop_assert_eq!(fields, string_entries(&params));
        }

        /// Every string-valued parameter becomes exactly one multipart field.
        #[test]
        fn multipart_field_count_matches_string_entries(params in param_map()) {
            let fields = multipart_fields(&params);
            prop_assert_eq!(fields.len(), string_entries(&params).len());
        }
    }
}
