// crates/dis-config/src/lib.rs
// ============================================================================
// Module: DIS Samples Config Library
// Description: Typed configuration model for the DIS integration samples.
// Purpose: Single source of truth for dis-samples.toml semantics.
// Dependencies: serde, thiserror, toml, url
// ============================================================================

//! ## Overview
//! `dis-config` loads the sample configuration once per process: the service
//! URL and bearer token, optional Auth0 client credentials, example image
//! URLs and the numeric decision thresholds used by the face scenarios.
//! Loading is strict and fail-closed; a config that loads is internally
//! consistent.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
