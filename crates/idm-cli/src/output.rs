//! Printing responses and mapping HTTP status to an exit code.

use anyhow::Result;
use idm_client::ApiResponse;
use serde_json::Value;

/// Exit code for a non-2xx response.
pub const EXIT_REMOTE_ERROR: u8 = 2;

/// Print `status: N` followed by the pretty-printed body.
pub fn report(response: &ApiResponse<Value>) -> Result<u8> {
    println!("status: {}", response.status);
    println!("{}", serde_json::to_string_pretty(&response.body)?);
    Ok(exit_code(response.status))
}

/// Print `status: N` for calls that return no body.
pub fn report_status(status: u16) -> Result<u8> {
    println!("status: {status}");
    Ok(exit_code(status))
}

pub fn exit_code(status: u16) -> u8 {
    if (200..300).contains(&status) {
        0
    } else {
        EXIT_REMOTE_ERROR
    }
}
