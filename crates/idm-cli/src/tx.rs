//! # Transaction Subcommand
//!
//! - `evaluate-fraud` -- Score a transaction for fraud.
//! - `report-fraud` -- Report a fraud event against a past transaction.
//! - `report` -- Report a deposit, withdrawal or transfer.

use anyhow::Result;
use clap::{Args, Subcommand};
use idm_client::IdentityMindClient;

use crate::output;
use crate::params::ParamsArgs;

/// Arguments for the `idm tx` subcommand.
#[derive(Args, Debug)]
pub struct TxArgs {
    #[command(subcommand)]
    pub command: TxCommand,
}

/// Transaction subcommands.
#[derive(Subcommand, Debug)]
pub enum TxCommand {
    /// Evaluate a transaction for fraud.
    EvaluateFraud {
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Report a fraud event.
    ReportFraud {
        #[command(flatten)]
        params: ParamsArgs,
    },

    /// Report a transaction.
    Report {
        /// Transaction type: transferin, transferout or transfer.
        #[arg(long = "type")]
        tx_type: String,
        #[command(flatten)]
        params: ParamsArgs,
    },
}

/// Execute the tx subcommand.
pub async fn run_tx(args: &TxArgs, client: &IdentityMindClient) -> Result<u8> {
    let transactions = client.transactions();
    let response = match &args.command {
        TxCommand::EvaluateFraud { params } => {
            transactions.evaluate_fraud(&params.load()?).await?
        }
        TxCommand::ReportFraud { params } => transactions.report_fraud(&params.load()?).await?,
        TxCommand::Report { tx_type, params } => {
            transactions
                .report_transaction(tx_type, &params.load()?)
                .await?
        }
    };
    output::report(&response)
}
