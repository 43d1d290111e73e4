//! Request parameters supplied on the command line.
//!
//! Parameters are a JSON object given inline with `--params` or read from a
//! file with `--params-file`. Omitting both sends an empty object.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use idm_client::Params;
use serde_json::Value;

/// Shared `--params` / `--params-file` arguments.
#[derive(Args, Debug, Default, Clone)]
pub struct ParamsArgs {
    /// Request parameters as an inline JSON object.
    #[arg(long, conflicts_with = "params_file")]
    pub params: Option<String>,

    /// Path to a file holding the request parameters as a JSON object.
    #[arg(long)]
    pub params_file: Option<PathBuf>,
}

impl ParamsArgs {
    /// Resolve the parameters for this invocation.
    pub fn load(&self) -> Result<Params> {
        if let Some(raw) = &self.params {
            return parse_params(raw).context("invalid --params");
        }
        if let Some(path) = &self.params_file {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            return parse_params(&raw)
                .with_context(|| format!("invalid parameters in {}", path.display()));
        }
        Ok(Params::new())
    }
}

/// Parse `raw` as a JSON object.
pub fn parse_params(raw: &str) -> Result<Params> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        other => bail!("parameters must be a JSON object, got {}", kind(&other)),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn inline_object_is_parsed() {
        let args = ParamsArgs {
            params: Some(r#"{"man": "jdoe", "amt": 10}"#.to_string()),
            params_file: None,
        };
        let params = args.load().unwrap();
        assert_eq!(params["man"], "jdoe");
        assert_eq!(params["amt"], 10);
    }

    #[test]
    fn missing_params_yield_empty_object() {
        let params = ParamsArgs::default().load().unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn params_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"firstName": "Jane", "lastName": "Doe"}}"#).unwrap();

        let args = ParamsArgs {
            params: None,
            params_file: Some(file.path().to_path_buf()),
        };
        let params = args.load().unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params["lastName"], "Doe");
    }

    #[test]
    fn missing_params_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = ParamsArgs {
            params: None,
            params_file: Some(dir.path().join("absent.json")),
        };
        let err = args.load().unwrap_err();
        assert!(format!("{err:#}").contains("failed to read"));
    }

    #[test]
    fn non_object_json_is_rejected() {
        for raw in ["[1, 2]", "\"jane\"", "42", "null", "true"] {
            let err = parse_params(raw).unwrap_err();
            assert!(
                err.to_string().contains("must be a JSON object"),
                "{raw}: {err}"
            );
        }
    }

    #[test]
    fn malformed_json_is_rejected() {
        let args = ParamsArgs {
            params: Some("{not json".to_string()),
            params_file: None,
        };
        let err = args.load().unwrap_err();
        assert!(format!("{err:#}").contains("invalid --params"));
    }
}
