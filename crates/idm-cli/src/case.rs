//! # Case Subcommand
//!
//! - `get` -- Fetch a case.
//! - `create` -- Open a new case.
//! - `close` -- Close a case; the case id travels in the parameters.
//! - `update` -- Update a case.

use anyhow::Result;
use clap::{Args, Subcommand};
use idm_client::IdentityMindClient;

use crate::output;
use crate::params::ParamsArgs;

/// Arguments for the `idm case` subcommand.
#[derive(Args, Debug)]
pub struct CaseArgs {
    #[command(subcommand)]
    pub command: CaseCommand,
}

/// Case subcommands.
#[derive(Subcommand, Debug)]
pub enum CaseCommand {
    /// Fetch a case by id.
    Get {
        /// Case identifier.
        #[arg(long)]
        id: String,
    },

    /// Open a new case.
    Create {
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Close a case.
    Close {
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Update an existing case.
    Update {
        /// Case identifier.
        #[arg(long)]
        id: String,
        #[command(flatten)]
        params: ParamsArgs,
    },
}

/// Execute the case subcommand.
pub async fn run_case(args: &CaseArgs, client: &IdentityMindClient) -> Result<u8> {
    let cases = client.cases();
    let response = match &args.command {
        CaseCommand::Get { id } => cases.get(id).await?,
        CaseCommand::Create { params } => cases.create(&params.load()?).await?,
        CaseCommand::Close { params } => cases.close(&params.load()?).await?,
        CaseCommand::Update { id, params } => cases.update(id, &params.load()?).await?,
    };
    output::report(&response)
}
