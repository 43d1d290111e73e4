//! # Shared Request and Response Types
//!
//! Request parameters are an untyped JSON object: the remote contract of each
//! endpoint decides which keys it expects. Responses are decoded into
//! [`serde_json::Value`] unless the caller asks for one of the narrow typed
//! views defined here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdmApiError;

/// Request parameter bag. Values are usually strings; in multipart requests a
/// string holding a data URI is sent as a file part.
pub type Params = serde_json::Map<String, serde_json::Value>;

// -- Application record ------------------------------------------------------

/// Application state code returned by the KYC and KYB endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationState {
    #[serde(rename = "A")]
    Accepted,
    #[serde(rename = "D")]
    Rejected,
    #[serde(rename = "R")]
    UnderReview,
    /// Forward-compatible catch-all.
    #[serde(other)]
    Unknown,
}

/// KYC or KYB application as returned by the consumer and merchant endpoints.
///
/// Only the fields needed to read the decision are modeled; everything else
/// stays in the raw response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "ednaScoreCard", default)]
    pub edna_score_card: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub mtid: Option<String>,
    #[serde(default)]
    pub tid: Option<String>,
    #[serde(default)]
    pub rcd: Option<String>,
    #[serde(default)]
    pub state: Option<ApplicationState>,
}

impl Application {
    pub fn is_accepted(&self) -> bool {
        self.state == Some(ApplicationState::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        self.state == Some(ApplicationState::Rejected)
    }

    pub fn is_under_review(&self) -> bool {
        self.state == Some(ApplicationState::UnderReview)
    }
}

// -- Transaction type --------------------------------------------------------

/// Kind of transaction reported through `im/account/{tx}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxType {
    /// `transferin`
    Deposit,
    /// `transferout`
    Withdrawal,
    /// `transfer`
    Transfer,
}

impl TxType {
    /// Path segment used by the API for this transaction type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "transferin",
            Self::Withdrawal => "transferout",
            Self::Transfer => "transfer",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxType {
    type Err = IdmApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transferin" => Ok(Self::Deposit),
            "transferout" => Ok(Self::Withdrawal),
            "transfer" => Ok(Self::Transfer),
            other => Err(IdmApiError::InvalidTxType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn application_predicates_follow_state_code() {
        let app: Application = serde_json::from_value(json!({"mtid": "abc", "state": "A"})).unwrap();
        assert!(app.is_accepted());
        assert!(!app.is_rejected());
        assert_eq!(app.mtid.as_deref(), Some("abc"));

        let app: Application = serde_json::from_value(json!({"state": "D"})).unwrap();
        assert!(app.is_rejected());

        let app: Application = serde_json::from_value(json!({"state": "R"})).unwrap();
        assert!(app.is_under_review());
    }

    #[test]
    fn application_tolerates_missing_and_unknown_state() {
        let app: Application = serde_json::from_value(json!({"tid": "t-1"})).unwrap();
        assert_eq!(app.state, None);
        assert!(!app.is_accepted() && !app.is_rejected() && !app.is_under_review());

        let app: Application = serde_json::from_value(json!({"state": "Z"})).unwrap();
        assert_eq!(app.state, Some(ApplicationState::Unknown));
    }

    #[test]
    fn application_keeps_score_card() {
        let app: Application =
            serde_json::from_value(json!({"ednaScoreCard": {"er": {"reportedRule": {}}}})).unwrap();
        assert!(app.edna_score_card.unwrap().contains_key("er"));
    }

    #[test]
    fn tx_type_accepts_only_api_segments() {
        assert_eq!("transferin".parse::<TxType>().unwrap(), TxType::Deposit);
        assert_eq!("transferout".parse::<TxType>().unwrap(), TxType::Withdrawal);
        assert_eq!("transfer".parse::<TxType>().unwrap(), TxType::Transfer);

        for bad in ["deposit", "withdrawal", "TRANSFER", "", "refund"] {
            match bad.parse::<TxType>() {
                Err(IdmApiError::InvalidTxType(v)) => assert_eq!(v, bad),
                other => panic!("expected InvalidTxType for {bad:?}, got {other:?}"),
            }
        }
    }
}
