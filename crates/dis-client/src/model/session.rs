// crates/dis-client/src/model/session.rs
// ============================================================================
// Module: DIS Session Wire Types
// Description: Session creation payloads.
// Purpose: Typed session timeout and token.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Session creation request and issued token.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Sessions
// ============================================================================

/// Body of `POST /sessions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    /// Session lifetime in seconds.
    pub timeout: u32,
}

/// Response of `POST /sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    /// Session token sent in the session header.
    pub token: String,
}
