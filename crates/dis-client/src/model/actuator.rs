// crates/dis-client/src/model/actuator.rs
// ============================================================================
// Module: DIS Actuator Wire Types
// Description: Service health and build information.
// Purpose: Typed health status and component versions.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Health status and component versions of the running service.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Actuator
// ============================================================================

/// Response of `GET /actuator/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActuatorHealth {
    /// Health status, e.g. `UP`.
    pub status: String,
}

/// Response of `GET /actuator/info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActuatorInfo {
    /// Service build.
    #[serde(default)]
    pub build: Option<ComponentVersion>,
    /// SAM library.
    #[serde(default)]
    pub sam: Option<ComponentVersion>,
    /// iFace library.
    #[serde(default)]
    pub iface: Option<IfaceInfo>,
}

/// Version of one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentVersion {
    /// Version string.
    pub version: String,
}

/// iFace library version and license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfaceInfo {
    /// Version string.
    pub version: String,
    /// License expiration.
    #[serde(default)]
    pub license: Option<LicenseExpiration>,
}

/// License expiration date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseExpiration {
    /// Year.
    pub year: u16,
    /// Month, 1-based.
    pub month: u8,
    /// Day of month.
    pub day: u8,
}
