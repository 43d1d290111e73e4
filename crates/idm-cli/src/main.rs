//! # idm CLI entry point
//!
//! Parses command-line arguments, configures the client from the
//! `IDENTITYMIND_*` environment and dispatches to subcommand handlers.

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use idm_cli::case::{run_case, CaseArgs};
use idm_cli::kyb::{run_kyb, KybArgs};
use idm_cli::kyc::{run_kyc, KycArgs};
use idm_cli::merchant::{run_merchant, MerchantArgs};
use idm_cli::raw::{run_raw, RawArgs};
use idm_cli::tx::{run_tx, TxArgs};
use idm_client::IdentityMindClient;

/// Log filter used when no `-v` flag is given.
const LOG_LEVEL_ENV: &str = "IDENTITYMIND_LOG_LEVEL";

/// IdentityMind API client.
///
/// Credentials and environment are read from `IDENTITYMIND_API_USER`,
/// `IDENTITYMIND_API_TOKEN`, `IDENTITYMIND_API_ENVIRONMENT` and
/// `IDENTITYMIND_API_URL`.
#[derive(Parser, Debug)]
#[command(name = "idm", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Case management.
    Case(CaseArgs),

    /// Consumer (KYC) applications.
    Kyc(KycArgs),

    /// Merchant (KYB) applications.
    Kyb(KybArgs),

    /// Merchant accounts and merchant-scoped calls.
    Merchant(MerchantArgs),

    /// Fraud evaluation and transaction reporting.
    Tx(TxArgs),

    /// Generic requests against any API path.
    Raw(RawArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("failed to start async runtime: {e}");
            return ExitCode::from(1);
        }
    };

    match runtime.block_on(run(cli.command)) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(command: Commands) -> anyhow::Result<u8> {
    let client = IdentityMindClient::from_env().context("failed to configure IdentityMind client")?;
    tracing::debug!(base_url = %client.api().build_url(""), "configured IdentityMind client");

    match command {
        Commands::Case(args) => run_case(&args, &client).await,
        Commands::Kyc(args) => run_kyc(&args, &client).await,
        Commands::Kyb(args) => run_kyb(&args, &client).await,
        Commands::Merchant(args) => run_merchant(&args, &client).await,
        Commands::Tx(args) => run_tx(&args, &client).await,
        Commands::Raw(args) => run_raw(&args, &client).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idm_cli::case::CaseCommand;
    use idm_cli::kyc::KycCommand;
    use idm_cli::merchant::MerchantCommand;
    use idm_cli::raw::RawCommand;
    use idm_cli::tx::TxCommand;

    #[test]
    fn cli_parse_case_get() {
        let cli = Cli::try_parse_from(["idm", "case", "get", "--id", "123"]).unwrap();
        match cli.command {
            Commands::Case(args) => {
                assert!(matches!(args.command, CaseCommand::Get { ref id } if id == "123"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_kyc_submit_with_inline_params() {
        let cli = Cli::try_parse_from([
            "idm",
            "kyc",
            "submit",
            "--params",
            r#"{"firstName":"Jane"}"#,
        ])
        .unwrap();
        let Commands::Kyc(args) = cli.command else {
            panic!("expected kyc");
        };
        let KycCommand::Submit { params } = args.command else {
            panic!("expected submit");
        };
        assert_eq!(params.load().unwrap()["firstName"], "Jane");
    }

    #[test]
    fn cli_parse_kyc_upload_image_kebab_case() {
        let cli =
            Cli::try_parse_from(["idm", "kyc", "upload-image", "--id", "app-1"]).unwrap();
        let Commands::Kyc(args) = cli.command else {
            panic!("expected kyc");
        };
        assert!(matches!(args.command, KycCommand::UploadImage { .. }));
    }

    #[test]
    fn cli_parse_tx_report_type_flag() {
        let cli =
            Cli::try_parse_from(["idm", "tx", "report", "--type", "transferin"]).unwrap();
        let Commands::Tx(args) = cli.command else {
            panic!("expected tx");
        };
        assert!(matches!(args.command, TxCommand::Report { ref tx_type, .. } if tx_type == "transferin"));
    }

    #[test]
    fn cli_parse_merchant_report_tx() {
        let cli = Cli::try_parse_from([
            "idm", "merchant", "report-tx", "--id", "m-1", "--type", "transfer",
        ])
        .unwrap();
        let Commands::Merchant(args) = cli.command else {
            panic!("expected merchant");
        };
        assert!(matches!(args.command, MerchantCommand::ReportTx { ref id, .. } if id == "m-1"));
    }

    #[test]
    fn cli_parse_raw_delete_positional_uri() {
        let cli = Cli::try_parse_from(["idm", "raw", "delete", "im/admin/jax/case/9"]).unwrap();
        let Commands::Raw(args) = cli.command else {
            panic!("expected raw");
        };
        assert!(matches!(args.command, RawCommand::Delete { ref uri } if uri == "im/admin/jax/case/9"));
    }

    #[test]
    fn cli_rejects_both_params_sources() {
        let result = Cli::try_parse_from([
            "idm",
            "case",
            "create",
            "--params",
            "{}",
            "--params-file",
            "params.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_verbose_is_global() {
        let cli = Cli::try_parse_from(["idm", "kyb", "get", "--id", "k-1", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
