//! # Merchant Subcommand
//!
//! Merchant account management and calls made on behalf of a merchant. The
//! merchant id is injected as the `m` parameter by the client.

use anyhow::Result;
use clap::{Args, Subcommand};
use idm_client::IdentityMindClient;

use crate::output;
use crate::params::ParamsArgs;

/// Arguments for the `idm merchant` subcommand.
#[derive(Args, Debug)]
pub struct MerchantArgs {
    #[command(subcommand)]
    pub command: MerchantCommand,
}

/// Merchant subcommands.
#[derive(Subcommand, Debug)]
pub enum MerchantCommand {
    /// Create a merchant account.
    Create {
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Fetch a merchant account; parameters go in the query string.
    Get {
        /// Merchant identifier.
        #[arg(long)]
        id: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Update a merchant account.
    Update {
        /// Merchant identifier.
        #[arg(long)]
        id: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Submit a KYB application for the merchant.
    SubmitApplication {
        /// Merchant identifier.
        #[arg(long)]
        id: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Evaluate a transaction for fraud on behalf of the merchant.
    EvaluateFraud {
        /// Merchant identifier.
        #[arg(long)]
        id: String,
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Report a transaction on behalf of the merchant.
    ReportTx {
        /// Merchant identifier.
        #[arg(long)]
        id: String,
        /// Transaction type: transferin, transferout or transfer.
        #[arg(long = "type")]
        tx_type: String,
        #[command(flatten)]
        params: ParamsArgs,
    },
}

/// Execute the merchant subcommand.
pub async fn run_merchant(args: &MerchantArgs, client: &IdentityMindClient) -> Result<u8> {
    let merchants = client.merchants();
    let response = match &args.command {
        MerchantCommand::Create { params } => merchants.create(&params.load()?).await?,
        MerchantCommand::Get { id, params } => merchants.get(id, &params.load()?).await?,
        MerchantCommand::Update { id, params } => merchants.update(id, &params.load()?).await?,
        MerchantCommand::SubmitApplication { id, params } => {
            merchants
                .submit_business_application(id, &params.load()?)
                .await?
        }
        MerchantCommand::EvaluateFraud { id, params } => {
            merchants.evaluate_fraud(id, &params.load()?).await?
        }
        MerchantCommand::ReportTx {
            id,
            tx_type,
            params,
        } => {
            merchants
                .report_transaction(id, tx_type, &params.load()?)
                .await?
        }
    };
    output::report(&response)
}
