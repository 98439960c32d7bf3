// crates/dis-client/src/lib.rs
// ============================================================================
// Module: DIS Client Library
// Description: Typed blocking client for the Digital Identity Service.
// Purpose: Expose the DIS REST surface as traits backed by one HTTP client.
// Dependencies: base64, reqwest, serde, serde_json, thiserror, tracing, url
// ============================================================================

//! ## Overview
//! `dis-client` wraps the Digital Identity Service REST API. A [`DisClient`]
//! is bound to a [`RequestContext`] (base URL, bearer token and an optional
//! session token) and implements one trait per API group:
//! [`FaceOperations`], [`CustomerOnboarding`], [`SessionManagement`],
//! [`MetadataOperations`] and [`ActuatorOperations`]. Callers depend on the
//! traits so the transport can be replaced in tests.
//!
//! Endpoints that report a domain `errorCode` return an [`Outcome`], which
//! separates accepted responses from rejected ones without losing the body.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod api;
pub mod auth;
pub mod client;
pub mod context;
pub mod error;
pub mod model;
pub mod outcome;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use api::ActuatorOperations;
pub use api::CustomerOnboarding;
pub use api::FaceOperations;
pub use api::MetadataOperations;
pub use api::SessionManagement;
pub use auth::Auth0Request;
pub use auth::AuthError;
pub use auth::extract_access_token;
pub use auth::fetch_auth0_token;
pub use client::ClientSettings;
pub use client::DisClient;
pub use context::RequestContext;
pub use context::SESSION_TOKEN_HEADER;
pub use error::ApiError;
pub use outcome::ErrorCoded;
pub use outcome::Outcome;
