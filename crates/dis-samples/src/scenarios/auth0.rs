// crates/dis-samples/src/scenarios/auth0.rs
// ============================================================================
// Module: Auth0 Scenario
// Description: Customer creation with an Auth0-issued token.
// Purpose: Show the client-credentials flow in front of a DIS call.
// Dependencies: dis-client, dis-config, tracing
// ============================================================================

//! ## Overview
//! The scenario ignores the static bearer token. It exchanges the configured
//! Auth0 credentials for a token, connects a fresh client with it, and
//! creates and deletes one customer. A failed exchange issues no DIS call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::Auth0Request;
use dis_client::fetch_auth0_token;
use tracing::error;
use tracing::info;

use crate::cleanup::with_customer;
use crate::error::ScenarioError;
use crate::harness::SampleEnv;
use crate::harness::connect;

// ============================================================================
// SECTION: Scenario
// ============================================================================

/// Creates a customer through a client authenticated with Auth0.
///
/// # Errors
///
/// Returns [`ScenarioError::Config`] when the Auth0 settings are incomplete,
/// [`ScenarioError::Auth`] when no token is issued, and
/// [`ScenarioError::Api`] when a DIS call fails.
pub fn auth0_customer(env: &SampleEnv) -> Result<(), ScenarioError> {
    let credentials = env.config.auth0_credentials()?;
    let request = Auth0Request {
        client_id: credentials.client_id,
        client_secret: credentials.client_secret,
        token_endpoint: credentials.token_endpoint,
        audience: credentials.audience,
    };
    let token = match fetch_auth0_token(&request, &env.client_settings()) {
        Ok(token) => token,
        Err(err) => {
            error!("Failed to obtain Auth0 token");
            return Err(err.into());
        }
    };
    let client = connect(&env.config, &token)?;
    with_customer(&client, |customer_id| {
        info!("Customer created with id: {customer_id} using an Auth0 token");
        Ok(())
    })
}
