// crates/dis-samples/src/lib.rs
// ============================================================================
// Module: DIS Samples Library
// Description: Scenario harness and sample scenarios for the DIS API.
// Purpose: Run fixed call sequences against an injected DIS client.
// Dependencies: dis-client, dis-config, image, regex, reqwest, tracing
// ============================================================================

//! ## Overview
//! Every scenario is a linear script over the DIS API traits. The
//! [`SampleRunner`] owns the injected API client and a [`SampleEnv`]
//! (configuration, resource loader, image writer) and runs scenarios by
//! [`ScenarioKind`], logging any failure instead of propagating it.
//!
//! Remote resources created by a scenario (customers, faces, sessions) are
//! always deleted through the scoped helpers in [`cleanup`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod cleanup;
pub mod decision;
pub mod error;
pub mod harness;
pub mod output;
pub mod resources;
pub mod scenarios;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use cleanup::with_customer;
pub use cleanup::with_face;
pub use cleanup::with_session;
pub use error::ScenarioError;
pub use harness::DisApi;
pub use harness::SampleEnv;
pub use harness::SampleRunner;
pub use harness::ScenarioReport;
pub use output::ImageWriter;
pub use output::OutputError;
pub use resources::DocumentLevel;
pub use resources::ResourceError;
pub use resources::ResourceLoader;
pub use scenarios::ScenarioKind;
