// crates/dis-client/src/error.rs
// ============================================================================
// Module: DIS Client Errors
// Description: Error type shared by every DIS API call.
// Purpose: Preserve HTTP status and raw body for top-level logging.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! [`ApiError`] separates transport failures, non-2xx responses and
//! undecodable bodies. Status errors keep the raw response body so scenario
//! runners can log exactly what the service returned.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// DIS API call errors.
///
/// # Invariants
/// - `Status` is only produced for responses outside the 2xx range.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be built (invalid base URL or path segment).
    #[error("invalid dis request: {0}")]
    Request(String),
    /// Connection, timeout or body read failure.
    #[error("dis transport error: {0}")]
    Transport(String),
    /// Service responded with a non-success status.
    #[error("dis responded with status {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Raw response body, lossily decoded as UTF-8.
        body: String,
    },
    /// Response body did not match the expected shape.
    #[error("dis response decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returns the HTTP status code when the service answered, `0` otherwise.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Status {
                code, ..
            } => *code,
            Self::Request(_) | Self::Transport(_) | Self::Decode(_) => 0,
        }
    }

    /// Returns the raw response body, or the error message when there is none.
    #[must_use]
    pub fn response_body(&self) -> String {
        match self {
            Self::Status {
                body, ..
            } => body.clone(),
            Self::Request(message) | Self::Transport(message) | Self::Decode(message) => {
                message.clone()
            }
        }
    }
}
