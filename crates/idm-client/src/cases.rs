//! Typed client for IdentityMind case management.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `im/admin/jax/case/{caseId}` | Get case |
//! | POST   | `im/admin/jax/case` | Create case |
//! | POST   | `im/admin/jax/case/close` | Close case |
//! | POST   | `im/admin/jax/case/{caseId}` | Update case content |

use serde_json::Value;

use crate::error::IdmApiError;
use crate::transport::{ApiClient, ApiResponse};
use crate::types::Params;

/// Client for the case-management endpoints.
#[derive(Debug, Clone)]
pub struct CaseClient {
    api: ApiClient,
}

impl CaseClient {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Calls `GET {base_url}/im/admin/jax/case/{case_id}`.
    pub async fn get(&self, case_id: &str) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .get(&format!("im/admin/jax/case/{case_id}"), &Params::new())
            .await
    }

    /// Calls `POST {base_url}/im/admin/jax/case`.
    pub async fn create(&self, params: &Params) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api.post("im/admin/jax/case", params).await
    }

    /// Calls `POST {base_url}/im/admin/jax/case/close`.
    ///
    /// The case to close is identified inside `params`.
    pub async fn close(&self, params: &Params) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api.post("im/admin/jax/case/close", params).await
    }

    /// Calls `POST {base_url}/im/admin/jax/case/{case_id}`.
    pub async fn update(
        &self,
        case_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(&format!("im/admin/jax/case/{case_id}"), params)
            .await
    }
}
