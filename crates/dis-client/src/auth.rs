// crates/dis-client/src/auth.rs
// ============================================================================
// Module: Auth0 Token Exchange
// Description: OAuth client-credentials grant against an Auth0 tenant.
// Purpose: Obtain a bearer token for the DIS API without a static token.
// Dependencies: reqwest, serde, serde_json, thiserror, tracing, url
// ============================================================================

//! ## Overview
//! [`fetch_auth0_token`] posts a form-encoded client-credentials grant with
//! HTTP Basic client authentication and returns the `access_token` of the
//! JSON response. One attempt is made; any status other than `200 OK` is an
//! error and no token is produced.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;
use url::form_urlencoded::Serializer;

use crate::client::ClientSettings;
use crate::client::read_response_limited;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Form media type of the token request.
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
/// OAuth grant type used for machine-to-machine tokens.
const CLIENT_CREDENTIALS: &str = "client_credentials";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Client-credentials grant inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth0Request {
    /// OAuth client identifier.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Token endpoint URL.
    pub token_endpoint: String,
    /// Requested audience.
    pub audience: String,
}

/// Token exchange errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token endpoint URL is invalid.
    #[error("invalid auth0 token endpoint: {0}")]
    Endpoint(String),
    /// Connection, timeout or body read failure.
    #[error("auth0 transport error: {0}")]
    Transport(String),
    /// Token endpoint answered with a status other than 200.
    #[error("error getting auth0 token, response code: {0}")]
    Status(u16),
    /// Response is not JSON or has no usable `access_token`.
    #[error("auth0 response has no access token: {0}")]
    MissingToken(String),
}

/// Token endpoint response fields used by the samples.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    /// Issued access token.
    #[serde(default)]
    access_token: Option<String>,
}

// ============================================================================
// SECTION: Token Exchange
// ============================================================================

/// Exchanges client credentials for an access token.
///
/// # Errors
///
/// Returns [`AuthError`] when the endpoint is invalid, the request fails, the
/// status is not `200 OK`, or the body carries no token.
pub fn fetch_auth0_token(
    request: &Auth0Request,
    settings: &ClientSettings,
) -> Result<String, AuthError> {
    let endpoint = Url::parse(request.token_endpoint.trim())
        .map_err(|err| AuthError::Endpoint(err.to_string()))?;
    let form = Serializer::new(String::new())
        .append_pair("grant_type", CLIENT_CREDENTIALS)
        .append_pair("audience", &request.audience)
        .finish();
    let http = Client::builder()
        .timeout(Duration::from_millis(settings.timeout_ms))
        .user_agent(settings.user_agent.clone())
        .build()
        .map_err(|_| AuthError::Transport("http client build failed".to_string()))?;
    debug!(endpoint = endpoint.as_str(), "requesting auth0 token");
    let mut response = http
        .post(endpoint)
        .basic_auth(&request.client_id, Some(&request.client_secret))
        .header(CONTENT_TYPE, FORM_URLENCODED)
        .body(form)
        .send()
        .map_err(|err| AuthError::Transport(err.to_string()))?;
    let status = response.status().as_u16();
    let body = read_response_limited(&mut response, settings.max_response_bytes)
        .map_err(|err| AuthError::Transport(err.to_string()))?;
    extract_access_token(status, &body)
}

/// Extracts the access token from a token endpoint response.
///
/// Field order in the body is irrelevant; the token must be a non-empty string.
///
/// # Errors
///
/// Returns [`AuthError::Status`] for any status other than `200`, and
/// [`AuthError::MissingToken`] when the body has no usable token.
pub fn extract_access_token(status: u16, body: &[u8]) -> Result<String, AuthError> {
    if status != StatusCode::OK.as_u16() {
        return Err(AuthError::Status(status));
    }
    let parsed: TokenResponse =
        serde_json::from_slice(body).map_err(|err| AuthError::MissingToken(err.to_string()))?;
    match parsed.access_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MissingToken("access_token is absent or empty".to_string())),
    }
}
