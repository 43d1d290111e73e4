//! Typed client for merchant aggregation: merchant accounts plus the KYB,
//! fraud and transaction calls made on behalf of a specific merchant.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `im/admin/jax/merchant` | Create merchant account |
//! | GET    | `im/admin/jax/merchant/{merchantId}` | Get merchant account |
//! | POST   | `im/admin/jax/merchant/{merchantId}` | Update merchant account |
//! | POST   | `im/account/merchant?graphScoreResponse=false` | Submit KYB application for merchant |
//! | POST   | `im/transaction?graphScoreResponse=false` | Evaluate fraud for merchant |
//! | POST   | `im/account/{tx}?graphScoreResponse=false` | Report transaction for merchant |
//!
//! Merchant-scoped calls send the merchant id as the `m` parameter. The
//! caller's parameters are copied, never mutated.

use serde_json::Value;

use crate::error::IdmApiError;
use crate::transactions::{transaction_uri, FRAUD_EVALUATION_URI};
use crate::transport::{ApiClient, ApiResponse};
use crate::types::{Params, TxType};

/// Client for merchant accounts and merchant-scoped operations.
#[derive(Debug, Clone)]
pub struct MerchantClient {
    api: ApiClient,
}

impl MerchantClient {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Calls `POST {base_url}/im/admin/jax/merchant`.
    pub async fn create(&self, params: &Params) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api.post("im/admin/jax/merchant", params).await
    }

    /// Calls `GET {base_url}/im/admin/jax/merchant/{merchant_id}`; string
    /// parameters are sent in the query string.
    pub async fn get(
        &self,
        merchant_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .get(&format!("im/admin/jax/merchant/{merchant_id}"), params)
            .await
    }

    /// Calls `POST {base_url}/im/admin/jax/merchant/{merchant_id}`.
    pub async fn update(
        &self,
        merchant_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(&format!("im/admin/jax/merchant/{merchant_id}"), params)
            .await
    }

    /// Calls `POST {base_url}/im/account/merchant?graphScoreResponse=false`
    /// with `m` set to `merchant_id`.
    pub async fn submit_business_application(
        &self,
        merchant_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(
                "im/account/merchant?graphScoreResponse=false",
                &scoped(merchant_id, params),
            )
            .await
    }

    /// Calls `POST {base_url}/im/transaction?graphScoreResponse=false` with
    /// `m` set to `merchant_id`.
    pub async fn evaluate_fraud(
        &self,
        merchant_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(FRAUD_EVALUATION_URI, &scoped(merchant_id, params))
            .await
    }

    /// Report a transaction on behalf of `merchant_id`.
    ///
    /// `tx_type` must be `transferin`, `transferout` or `transfer`; anything
    /// else fails with [`IdmApiError::InvalidTxType`] before a request is sent.
    pub async fn report_transaction(
        &self,
        merchant_id: &str,
        tx_type: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        let tx_type: TxType = tx_type.parse()?;
        self.api
            .post(&transaction_uri(tx_type), &scoped(merchant_id, params))
            .await
    }
}

/// Copy of `params` with the merchant id injected as `m`.
fn scoped(merchant_id: &str, params: &Params) -> Params {
    let mut params = params.clone();
    params.insert("m".to_string(), Value::String(merchant_id.to_string()));
    params
}
