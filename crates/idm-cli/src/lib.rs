//! # idm-cli -- IdentityMind Command-Line Interface
//!
//! Drives the `idm-client` facade from the shell. Every subcommand maps to a
//! single client operation and prints the HTTP status followed by the JSON
//! body.
//!
//! ## Subcommands
//!
//! - `case` -- Case management
//! - `kyc` -- Consumer applications and their documents
//! - `kyb` -- Merchant (business) applications and their documents
//! - `merchant` -- Merchant accounts and merchant-scoped calls
//! - `tx` -- Fraud evaluation and transaction reporting
//! - `raw` -- Generic requests against any API path
//!
//! ## Exit Codes
//!
//! `0` for a 2xx response, `2` for any other HTTP status, `1` when the
//! request could not be made or its response could not be read.

pub mod case;
pub mod kyb;
pub mod kyc;
pub mod merchant;
pub mod output;
pub mod params;
pub mod raw;
pub mod tx;
