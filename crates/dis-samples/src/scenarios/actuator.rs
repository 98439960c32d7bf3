// crates/dis-samples/src/scenarios/actuator.rs
// ============================================================================
// Module: Actuator Scenario
// Description: Service health and version report.
// Purpose: Log health status, build and library versions.
// Dependencies: dis-client, tracing
// ============================================================================

//! ## Overview
//! Reports service health and the build, SAM and iFace versions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::ActuatorOperations;
use dis_client::model::LicenseExpiration;
use tracing::info;

use crate::error::ScenarioError;

// ============================================================================
// SECTION: Scenario
// ============================================================================

/// Formats a license expiration as `YYYY-M-D`.
#[must_use]
pub fn license_date(license: LicenseExpiration) -> String {
    format!("{}-{}-{}", license.year, license.month, license.day)
}

/// Logs the health status and the versions reported by the service.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails or the info response lacks a
/// component.
pub fn actuator_info<A: ActuatorOperations>(api: &A) -> Result<(), ScenarioError> {
    let health = api.health()?;
    let info = api.info()?;
    info!("Digital Identity Service return Health status: {}", health.status);
    let build = info.build.ok_or_else(|| ScenarioError::MissingField("build".to_string()))?;
    info!("Digital Identity Service is running in version: {}", build.version);
    let sam = info.sam.ok_or_else(|| ScenarioError::MissingField("sam".to_string()))?;
    info!("Digital Identity Service has SAM library in version: {}", sam.version);
    let iface = info.iface.ok_or_else(|| ScenarioError::MissingField("iface".to_string()))?;
    let license = iface
        .license
        .map_or_else(|| "unknown".to_string(), license_date);
    info!(
        "Digital Identity Service has iFace library in version: {} with license expiration: {license}",
        iface.version
    );
    Ok(())
}
