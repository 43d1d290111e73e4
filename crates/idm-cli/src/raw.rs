//! # Raw Subcommand
//!
//! Generic requests against any path under the configured base URL. The
//! path is given relative to the base, e.g. `im/account/consumer/v2/abc`.

use anyhow::Result;
use clap::{Args, Subcommand};
use idm_client::{ApiResponse, IdentityMindClient};
use serde_json::Value;

use crate::output;
use crate::params::ParamsArgs;

/// Arguments for the `idm raw` subcommand.
#[derive(Args, Debug)]
pub struct RawArgs {
    #[command(subcommand)]
    pub command: RawCommand,
}

/// Raw request subcommands.
#[derive(Subcommand, Debug)]
pub enum RawCommand {
    /// GET with parameters in the query string.
    Get {
        /// Path relative to the base URL.
        uri: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// POST with a JSON body.
    Post {
        /// Path relative to the base URL.
        uri: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// POST with a form-urlencoded body.
    PostForm {
        /// Path relative to the base URL.
        uri: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// POST with a multipart body; data URI values are sent as files.
    PostMultipart {
        /// Path relative to the base URL.
        uri: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// PUT with a JSON body.
    Put {
        /// Path relative to the base URL.
        uri: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// DELETE; prints only the status.
    Delete {
        /// Path relative to the base URL.
        uri: String,
    },
}

/// Execute the raw subcommand.
pub async fn run_raw(args: &RawArgs, client: &IdentityMindClient) -> Result<u8> {
    let api = client.api();
    let response: ApiResponse<Value> = match &args.command {
        RawCommand::Get { uri, params } => api.get(uri, &params.load()?).await?,
        RawCommand::Post { uri, params } => api.post(uri, &params.load()?).await?,
        RawCommand::PostForm { uri, params } => api.post_form(uri, &params.load()?).await?,
        RawCommand::PostMultipart { uri, params } => {
            api.post_multipart(uri, &params.load()?).await?
        }
        RawCommand::Put { uri, params } => api.put(uri, &params.load()?).await?,
        RawCommand::Delete { uri } => return output::report_status(api.delete(uri).await?),
    };
    output::report(&response)
}
