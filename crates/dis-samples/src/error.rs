// crates/dis-samples/src/error.rs
// ============================================================================
// Module: Scenario Errors
// Description: Error type returned by scenario bodies.
// Purpose: Unify API, auth, resource and output failures for top-level logging.
// Dependencies: dis-client, dis-config, thiserror
// ============================================================================

//! ## Overview
//! [`ScenarioError`] is what every scenario body returns. The harness logs
//! it; nothing above the harness sees it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::ApiError;
use dis_client::AuthError;
use dis_config::ConfigError;
use thiserror::Error;

use crate::output::OutputError;
use crate::resources::ResourceError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Scenario failures caught and logged by the harness.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// DIS call failed.
    #[error("api failure: {0}")]
    Api(#[from] ApiError),
    /// Auth0 token exchange failed.
    #[error("auth0 failure: {0}")]
    Auth(#[from] AuthError),
    /// Configuration needed by the scenario is missing or invalid.
    #[error("config failure: {0}")]
    Config(#[from] ConfigError),
    /// Bundled or remote resource could not be loaded.
    #[error("resource failure: {0}")]
    Resource(#[from] ResourceError),
    /// Output image could not be written.
    #[error("output failure: {0}")]
    Output(#[from] OutputError),
    /// Service processed the input and rejected it; the scenario stops.
    #[error("rejected: {0}")]
    Rejected(String),
    /// Response lacks a field the scenario depends on.
    #[error("missing response field: {0}")]
    MissingField(String),
}

impl ScenarioError {
    /// Builds a rejection from a domain error code.
    pub fn rejected(code: impl std::fmt::Display) -> Self {
        Self::Rejected(code.to_string())
    }
}
