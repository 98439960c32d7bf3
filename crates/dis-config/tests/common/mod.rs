// crates/dis-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared fixtures for config validation tests.
// Purpose: Provide a complete, valid config body that tests can mutate.
// =============================================================================
//! ## Overview
//! Shared config fixtures.

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::io::Write;

use tempfile::NamedTempFile;

/// A complete configuration that passes validation.
pub const VALID_CONFIG: &str = r#"
dot-identity-service-url = "https://dot.example.com/identity"
dot-authentication-token = "token-123"
example-image-url = "https://images.example.com/face.jpeg"

similarity.probe.example-image-url = "https://images.example.com/probe.jpeg"
similarity.reference.example-image-url = "https://images.example.com/reference.jpeg"

liveness-records.magnifeye-liveness.binary-file = "records/magnifeye.bin"

aspects-check.age-threshold = 18.0
aspects-check.gender-threshold = 0.5

wearables.face-mask-threshold = 0.5
wearables.glasses-threshold = 0.5
wearables.heavy-glass-frame-threshold = 0.5
wearables.tinted-glass-threshold = 0.5

quality.glass-conditions.detection-confidence = 0.8
quality.glass-conditions.yaw-angle.low = -10.0
quality.glass-conditions.yaw-angle.high = 10.0
quality.glass-conditions.pitch-angle.low = -15.0
quality.glass-conditions.pitch-angle.high = 15.0
"#;

/// Returns the valid config with one line replaced.
pub fn config_with(from: &str, to: &str) -> String {
    VALID_CONFIG.replace(from, to)
}

/// Writes `content` into a temp file and returns it.
pub fn write_config(content: &str) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(content.as_bytes()).map_err(|err| err.to_string())?;
    Ok(file)
}
