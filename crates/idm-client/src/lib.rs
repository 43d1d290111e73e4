//! # idm-client -- Typed Rust client for the IdentityMind API
//!
//! Provides typed access to the IdentityMind identity-verification service:
//! - **Cases** via `im/admin/jax/case`
//! - **KYC** (consumer applications) via `im/account/consumer`
//! - **KYB** (merchant/business applications) via `im/account/merchant`
//! - **Merchants** via `im/admin/jax/merchant` plus merchant-scoped calls
//! - **Transactions** (fraud evaluation and reporting) via `im/transaction`,
//!   `im/admin/jax/feg` and `im/account/{tx}`
//!
//! ## Architecture
//!
//! All sub-clients share one [`ApiClient`], whose [`ApiClient::send`] is the
//! only place a request is built. Responses are decoded into
//! [`serde_json::Value`] and returned with their HTTP status; the client does
//! not classify 4xx/5xx itself (see [`ApiResponse::error_for_status`]).
//!
//! ## Environments
//!
//! The base URL is `https://{environment}.identitymind.com`, where the
//! environment is `sandbox` by default and `edna` in production.

pub mod cases;
pub mod config;
pub mod encoding;
pub mod error;
pub mod kyb;
pub mod kyc;
pub mod merchants;
pub mod transactions;
pub mod transport;
pub mod types;

pub use config::{ApiConfig, Credentials};
pub use error::IdmApiError;
pub use transport::{ApiClient, ApiResponse, ContentType};
pub use types::{Application, ApplicationState, Params, TxType};

/// Top-level IdentityMind API client. Holds sub-clients for each area.
#[derive(Debug, Clone)]
pub struct IdentityMindClient {
    api: ApiClient,
    cases: cases::CaseClient,
    kyc: kyc::KycClient,
    kyb: kyb::KybClient,
    merchants: merchants::MerchantClient,
    transactions: transactions::TransactionClient,
}

impl IdentityMindClient {
    /// Create a new IdentityMind API client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, IdmApiError> {
        let api = ApiClient::new(&config)?;
        tracing::debug!(base_url = %config.base_url, "IdentityMind API client initialized");

        Ok(Self {
            cases: cases::CaseClient::new(api.clone()),
            kyc: kyc::KycClient::new(api.clone()),
            kyb: kyb::KybClient::new(api.clone()),
            merchants: merchants::MerchantClient::new(api.clone()),
            transactions: transactions::TransactionClient::new(api.clone()),
            api,
        })
    }

    /// Create a client from `IDENTITYMIND_*` environment variables.
    pub fn from_env() -> Result<Self, IdmApiError> {
        Self::new(ApiConfig::from_env()?)
    }

    /// Access the generic client (`get`, `post`, `put`, `post_form`,
    /// `post_multipart`, `delete`).
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Access the case-management client.
    pub fn cases(&self) -> &cases::CaseClient {
        &self.cases
    }

    /// Access the consumer KYC client.
    pub fn kyc(&self) -> &kyc::KycClient {
        &self.kyc
    }

    /// Access the merchant KYB client.
    pub fn kyb(&self) -> &kyb::KybClient {
        &self.kyb
    }

    /// Access the merchant-account client.
    pub fn merchants(&self) -> &merchants::MerchantClient {
        &self.merchants
    }

    /// Access the fraud and transaction-reporting client.
    pub fn transactions(&self) -> &transactions::TransactionClient {
        &self.transactions
    }
}
