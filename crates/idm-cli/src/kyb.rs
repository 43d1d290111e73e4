//! # KYB Subcommand
//!
//! Merchant (business) application commands. Mirrors `idm kyc`, plus
//! `reevaluate` to re-run the decision on an existing application.

use anyhow::Result;
use clap::{Args, Subcommand};
use idm_client::IdentityMindClient;

use crate::output;
use crate::params::ParamsArgs;

/// Arguments for the `idm kyb` subcommand.
#[derive(Args, Debug)]
pub struct KybArgs {
    #[command(subcommand)]
    pub command: KybCommand,
}

/// KYB subcommands.
#[derive(Subcommand, Debug)]
pub enum KybCommand {
    /// Fetch a merchant application.
    Get {
        /// Application identifier.
        #[arg(long)]
        id: String,
    },

    /// Re-evaluate an existing merchant application.
    Reevaluate {
        /// Application identifier.
        #[arg(long)]
        id: String,
    },

    /// Submit a merchant application for evaluation.
    Submit {
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// List documents attached to an application.
    Documents {
        /// Application identifier.
        #[arg(long)]
        id: String,
    },

    /// Fetch one document attached to an application.
    Download {
        /// Application identifier.
        #[arg(long)]
        id: String,
        /// Document identifier.
        #[arg(long)]
        document: String,
    },

    /// Attach documents to an application.
    Upload {
        /// Application identifier.
        #[arg(long)]
        id: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Upload images for document verification.
    UploadImage {
        /// Application identifier.
        #[arg(long)]
        id: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Mark an application as accepted.
    Approve {
        /// Application identifier.
        #[arg(long)]
        id: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Mark an application as rejected.
    Reject {
        /// Application identifier.
        #[arg(long)]
        id: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Return an application to manual review.
    Undecide {
        /// Application identifier.
        #[arg(long)]
        id: String,
        #[command(flatten)]
        params: ParamsArgs,
    },
}

/// Execute the kyb subcommand.
pub async fn run_kyb(args: &KybArgs, client: &IdentityMindClient) -> Result<u8> {
    let kyb = client.kyb();
    let response = match &args.command {
        KybCommand::Get { id } => kyb.get_application(id).await?,
        KybCommand::Reevaluate { id } => kyb.reevaluate_application(id).await?,
        KybCommand::Submit { params } => kyb.submit_application(&params.load()?).await?,
        KybCommand::Documents { id } => kyb.list_documents(id).await?,
        KybCommand::Download { id, document } => kyb.download_document(id, document).await?,
        KybCommand::Upload { id, params } => kyb.upload_document(id, &params.load()?).await?,
        KybCommand::UploadImage { id, params } => {
            kyb.upload_verification_image(id, &params.load()?).await?
        }
        KybCommand::Approve { id, params } => kyb.approve_application(id, &params.load()?).await?,
        KybCommand::Reject { id, params } => kyb.reject_application(id, &params.load()?).await?,
        KybCommand::Undecide { id, params } => {
            kyb.undecide_application(id, &params.load()?).await?
        }
    };
    output::report(&response)
}
