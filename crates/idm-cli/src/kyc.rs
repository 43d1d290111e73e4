//! # KYC Subcommand
//!
//! Consumer application commands.
//!
//! - `get` / `submit` -- Fetch or submit an application.
//! - `documents` / `download` -- List or fetch attached documents.
//! - `upload` / `upload-image` -- Attach documents or verification images;
//!   data URI parameter values are sent as files.
//! - `approve` / `reject` / `undecide` -- Record a manual decision.

use anyhow::Result;
use clap::{Args, Subcommand};
use idm_client::IdentityMindClient;

use crate::output;
use crate::params::ParamsArgs;

/// Arguments for the `idm kyc` subcommand.
#[derive(Args, Debug)]
pub struct KycArgs {
    #[command(subcommand)]
    pub command: KycCommand,
}

/// KYC subcommands.
#[derive(Subcommand, Debug)]
pub enum KycCommand {
    /// Fetch a consumer application.
    Get {
        /// Application identifier.
        #[arg(long)]
        id: String,
    },

    /// Submit a consumer application for evaluation.
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

/// Execute the kyc subcommand.
pub async fn run_kyc(args: &KycArgs, client: &IdentityMindClient) -> Result<u8> {
    let kyc = client.kyc();
    let response = match &args.command {
        KycCommand::Get { id } => kyc.get_application(id).await?,
        KycCommand::Submit { params } => kyc.submit_application(&params.load()?).await?,
        KycCommand::Documents { id } => kyc.list_documents(id).await?,
        KycCommand::Download { id, document } => kyc.download_document(id, document).await?,
        KycCommand::Upload { id, params } => kyc.upload_document(id, &params.load()?).await?,
        KycCommand::UploadImage { id, params } => {
            kyc.upload_verification_image(id, &params.load()?).await?
        }
        KycCommand::Approve { id, params } => kyc.approve_application(id, &params.load()?).await?,
        KycCommand::Reject { id, params } => kyc.reject_application(id, &params.load()?).await?,
        KycCommand::Undecide { id, params } => {
            kyc.undecide_application(id, &params.load()?).await?
        }
    };
    output::report(&response)
}
