//! Typed client for merchant/business KYB applications.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `im/account/merchant/{id}` | Get application |
//! | POST   | `im/account/merchant/{id}` | Re-evaluate application |
//! | POST   | `im/account/merchant?graphScoreResponse=false` | Submit application |
//! | GET    | `im/account/merchant/{id}/files` | List documents |
//! | GET    | `im/account/merchant/{id}/files/{documentId}` | Download document |
//! | POST   | `im/account/merchant/{id}/files` | Upload document (multipart) |
//! | POST   | `im/account/merchant/{id}/dv` | Upload verification image (multipart) |
//! | POST   | `im/account/merchant/{id}/accepted` | Approve application |
//! | POST   | `im/account/merchant/{id}/rejected` | Reject application |
//! | POST   | `im/account/merchant/{id}/review` | Return application to review |
//!
//! Submissions on behalf of a specific merchant go through
//! [`crate::merchants::MerchantClient::submit_business_application`].

use serde_json::Value;

use crate::error::IdmApiError;
use crate::transport::{ApiClient, ApiResponse};
use crate::types::Params;

const MERCHANT_PREFIX: &str = "im/account/merchant";

/// Client for the merchant (KYB) application endpoints.
#[derive(Debug, Clone)]
pub struct KybClient {
    api: ApiClient,
}

impl KybClient {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Calls `GET {base_url}/im/account/merchant/{application_id}`.
    pub async fn get_application(
        &self,
        application_id: &str,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .get(&format!("{MERCHANT_PREFIX}/{application_id}"), &Params::new())
            .await
    }

    /// Calls `POST {base_url}/im/account/merchant/{application_id}` with an
    /// empty body.
    pub async fn reevaluate_application(
        &self,
        application_id: &str,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(&format!("{MERCHANT_PREFIX}/{application_id}"), &Params::new())
            .await
    }

    /// Calls `POST {base_url}/im/account/merchant?graphScoreResponse=false`.
    pub async fn submit_application(
        &self,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(&format!("{MERCHANT_PREFIX}?graphScoreResponse=false"), params)
            .await
    }

    /// Calls `GET {base_url}/im/account/merchant/{application_id}/files`.
    pub async fn list_documents(
        &self,
        application_id: &str,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .get(&format!("{MERCHANT_PREFIX}/{application_id}/files"), &Params::new())
            .await
    }

    /// Calls `GET {base_url}/im/account/merchant/{application_id}/files/{document_id}`.
    pub async fn download_document(
        &self,
        application_id: &str,
        document_id: &str,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .get(
                &format!("{MERCHANT_PREFIX}/{application_id}/files/{document_id}"),
                &Params::new(),
            )
            .await
    }

    /// Calls `POST {base_url}/im/account/merchant/{application_id}/files`
    /// as `multipart/form-data`.
    pub async fn upload_document(
        &self,
        application_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post_multipart(&format!("{MERCHANT_PREFIX}/{application_id}/files"), params)
            .await
    }

    /// Calls `POST {base_url}/im/account/merchant/{application_id}/dv`
    /// as `multipart/form-data`.
    pub async fn upload_verification_image(
        &self,
        application_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post_multipart(&format!("{MERCHANT_PREFIX}/{application_id}/dv"), params)
            .await
    }

    /// Calls `POST {base_url}/im/account/merchant/{application_id}/accepted`.
    pub async fn approve_application(
        &self,
        application_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(&format!("{MERCHANT_PREFIX}/{application_id}/accepted"), params)
            .await
    }

    /// Calls `POST {base_url}/im/account/merchant/{application_id}/rejected`.
    pub async fn reject_application(
        &self,
        application_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(&format!("{MERCHANT_PREFIX}/{application_id}/rejected"), params)
            .await
    }

    /// Calls `POST {base_url}/im/account/merchant/{application_id}/review`.
    pub async fn undecide_application(
        &self,
        application_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(&format!("{MERCHANT_PREFIX}/{application_id}/review"), params)
            .await
    }
}
