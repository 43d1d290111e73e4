//! Typed client for consumer KYC applications.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `im/account/consumer/v2/{id}` | Get application |
//! | POST   | `im/account/consumer?graphScoreResponse=false` | Submit application |
//! | GET    | `im/account/consumer/{id}/files` | List documents |
//! | GET    | `im/account/consumer/{id}/files/{documentId}` | Download document |
//! | POST   | `im/account/consumer/{id}/files` | Upload document (multipart) |
//! | POST   | `im/account/consumer/{id}/dv` | Upload verification image (multipart) |
//! | POST   | `im/account/consumer/{id}/accepted` | Approve application |
//! | POST   | `im/account/consumer/{id}/rejected` | Reject application |
//! | POST   | `im/account/consumer/{id}/review` | Return application to review |
//!
//! Uploads take the file as a data URI string under any parameter key; the
//! key becomes both the form field name and the file name.

use serde_json::Value;

use crate::error::IdmApiError;
use crate::transport::{ApiClient, ApiResponse};
use crate::types::Params;

const CONSUMER_PREFIX: &str = "im/account/consumer";

/// Client for the consumer (KYC) application endpoints.
#[derive(Debug, Clone)]
pub struct KycClient {
    api: ApiClient,
}

impl KycClient {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Calls `GET {base_url}/im/account/consumer/v2/{application_id}`.
    pub async fn get_application(
        &self,
        application_id: &str,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .get(&format!("{CONSUMER_PREFIX}/v2/{application_id}"), &Params::new())
            .await
    }

    /// Calls `POST {base_url}/im/account/consumer?graphScoreResponse=false`.
    pub async fn submit_application(
        &self,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(&format!("{CONSUMER_PREFIX}?graphScoreResponse=false"), params)
            .await
    }

    /// Calls `GET {base_url}/im/account/consumer/{application_id}/files`.
    pub async fn list_documents(
        &self,
        application_id: &str,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .get(&format!("{CONSUMER_PREFIX}/{application_id}/files"), &Params::new())
            .await
    }

    /// Calls `GET {base_url}/im/account/consumer/{application_id}/files/{document_id}`.
    pub async fn download_document(
        &self,
        application_id: &str,
        document_id: &str,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .get(
                &format!("{CONSUMER_PREFIX}/{application_id}/files/{document_id}"),
                &Params::new(),
            )
            .await
    }

    /// Calls `POST {base_url}/im/account/consumer/{application_id}/files`
    /// as `multipart/form-data`.
    pub async fn upload_document(
        &self,
        application_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post_multipart(&format!("{CONSUMER_PREFIX}/{application_id}/files"), params)
            .await
    }

    /// Calls `POST {base_url}/im/account/consumer/{application_id}/dv`
    /// as `multipart/form-data`.
    pub async fn upload_verification_image(
        &self,
        application_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post_multipart(&format!("{CONSUMER_PREFIX}/{application_id}/dv"), params)
            .await
    }

    /// Calls `POST {base_url}/im/account/consumer/{application_id}/accepted`.
    pub async fn approve_application(
        &self,
        application_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(&format!("{CONSUMER_PREFIX}/{application_id}/accepted"), params)
            .await
    }

    /// Calls `POST {base_url}/im/account/consumer/{application_id}/rejected`.
    pub async fn reject_application(
        &self,
        application_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(&format!("{CONSUMER_PREFIX}/{application_id}/rejected"), params)
            .await
    }

    /// Calls `POST {base_url}/im/account/consumer/{application_id}/review`.
    pub async fn undecide_application(
        &self,
        application_id: &str,
        params: &Params,
    ) -> Result<ApiResponse<Value>, IdmApiError> {
        self.api
            .post(&format!("{CONSUMER_PREFIX}/{application_id}/review"), params)
            .await
    }
}
