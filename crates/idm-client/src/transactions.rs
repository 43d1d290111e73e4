//! Typed client for fraud evaluation and transaction reporting.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `im/transaction?graphScoreResponse=false` | Evaluate payment fraud |
//! | POST   | `im/admin/jax/feg` | Report fraud event |
//! | POST   | `im/account/{transferin,transferout,transfer}?graphScoreResponse=false` | Report transaction |

use serde_json::Value;

use crate::error::IdmApiError;
use crate::transport::{ApiClient, ApiResponse};
use crate::types::{Params, TxType};

pub(crate) const FRAUD_EVALUATION_URI: &str = "im/transaction?graphScoreResponse=false";

pub(crate) fn transaction_uri(tx_type: TxType) -> String {
    format!("im/account/{tx_type}?graphScoreResponse=false")
}

/// Client for the anti-fraud and transaction-monitoring endpoints.
#[derive(Debug, Clone)]
pub struct TransactionClient {
    api: ApiClient,
}

impl TransactionClient {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Evaluate a transaction for payment fraud.
    ///
    /// Calls `POST {base_url}/im/transaction?graphScoreResponse=false`.
    pub async fn evaluate_fraud(&self, params: &Params) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api.post(FRAUD_EVALUATION_URI, params).await
    }

    /// Report a fraud event.
    ///
    /// Calls `POST {base_url}/im/admin/jax/feg`.
    pub async fn report_fraud(&self, params: &Params) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api.post("im/admin/jax/feg", params).await
    }

    /// Report a deposit (`transferin`), withdrawal (`transferout`) or internal
    /// transfer (`transfer`).
    ///
    /// Any other `tx_type` fails with [`IdmApiError::InvalidTxType`] before a
    /// request is sent.
    pub async fn report_transaction(
        &self,
        tx_type: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        let tx_type: TxType = tx_type.parse()?;
        self.api.post(&transaction_uri(tx_type), params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_uri_uses_api_segment() {
        assert_eq!(
            transaction_uri(TxType::Deposit),
            "im/account/transferin?graphScoreResponse=false"
        );
        assert_eq!(
            transaction_uri(TxType::Withdrawal),
            "im/account/transferout?graphScoreResponse=false"
        );
        assert_eq!(
            transaction_uri(TxType::Transfer),
            "im/account/transfer?graphScoreResponse=false"
        );
    }
}
