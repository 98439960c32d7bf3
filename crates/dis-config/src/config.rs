// crates/dis-config/src/config.rs
// ============================================================================
// Module: DIS Samples Configuration
// Description: Configuration loading and validation for the DIS samples.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, thiserror, toml, url
// ============================================================================

//! ## Overview
//! Configuration is loaded once per process from a TOML file with strict size
//! and path limits. Dotted keys mirror the sample property names, so
//! `aspects-check.age-threshold = 0.5` parses into
//! [`AspectsCheckConfig::age_threshold`]. Missing files, unparsable numbers and
//! inconsistent thresholds fail closed before any scenario runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "dis-samples.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "DIS_SAMPLES_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default HTTP request timeout in milliseconds.
pub(crate) const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;
/// Minimum HTTP request timeout in milliseconds.
pub(crate) const MIN_HTTP_TIMEOUT_MS: u64 = 100;
/// Maximum HTTP request timeout in milliseconds.
pub(crate) const MAX_HTTP_TIMEOUT_MS: u64 = 300_000;
/// Default user agent for outbound requests.
pub(crate) const DEFAULT_USER_AGENT: &str = "dis-samples/0.1";

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// DIS samples configuration.
///
/// # Invariants
/// - Values are validated by [`SamplesConfig::validate`] before use.
/// - The struct is read-only after [`SamplesConfig::load`] returns.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SamplesConfig {
    /// Base URL of the Digital Identity Service.
    pub dot_identity_service_url: String,
    /// Bearer token used for every DIS request.
    pub dot_authentication_token: String,
    /// Auth0 client identifier for the client-credentials flow.
    #[serde(default)]
    pub dot_auth0_client_id: Option<String>,
    /// Auth0 client secret for the client-credentials flow.
    #[serde(default)]
    pub dot_auth0_client_secret: Option<String>,
    /// Auth0 token endpoint URL.
    #[serde(default)]
    pub dot_auth0_token_endpoint: Option<String>,
    /// Auth0 audience requested for the token.
    #[serde(default)]
    pub dot_auth0_audience: Option<String>,
    /// Remote face image used by detection and evaluation scenarios.
    pub example_image_url: String,
    /// Probe/reference images for similarity scenarios.
    pub similarity: SimilarityConfig,
    /// Liveness record inputs.
    pub liveness_records: LivenessRecordsConfig,
    /// Age and gender decision thresholds.
    pub aspects_check: AspectsCheckConfig,
    /// Wearables decision thresholds.
    pub wearables: WearablesConfig,
    /// Custom quality check preconditions.
    pub quality: QualityConfig,
    /// Bundled resource locations.
    #[serde(default)]
    pub resources: ResourcesConfig,
    /// Output locations for saved images.
    #[serde(default)]
    pub output: OutputConfig,
    /// HTTP client settings.
    #[serde(default)]
    pub http: HttpConfig,
}

impl SamplesConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved)
            .map_err(|err| ConfigError::Io(format!("{}: {err}", resolved.display())))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_http_url("dot-identity-service-url", &self.dot_identity_service_url)?;
        if self.dot_authentication_token.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "dot-authentication-token must be non-empty".to_string(),
            ));
        }
        if let Some(endpoint) = &self.dot_auth0_token_endpoint {
            validate_http_url("dot-auth0-token-endpoint", endpoint)?;
        }
        validate_http_url("example-image-url", &self.example_image_url)?;
        self.similarity.validate()?;
        self.liveness_records.validate()?;
        self.aspects_check.validate()?;
        self.wearables.validate()?;
        self.quality.validate()?;
        self.resources.validate()?;
        self.output.validate()?;
        self.http.validate()?;
        Ok(())
    }

    /// Returns the Auth0 client credentials when all four keys are configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first missing key.
    pub fn auth0_credentials(&self) -> Result<Auth0Credentials, ConfigError> {
        let client_id = required_key("dot-auth0-client-id", self.dot_auth0_client_id.as_ref())?;
        let client_secret =
            required_key("dot-auth0-client-secret", self.dot_auth0_client_secret.as_ref())?;
        let token_endpoint =
            required_key("dot-auth0-token-endpoint", self.dot_auth0_token_endpoint.as_ref())?;
        let audience = required_key("dot-auth0-audience", self.dot_auth0_audience.as_ref())?;
        Ok(Auth0Credentials {
            client_id,
            client_secret,
            token_endpoint,
            audience,
        })
    }
}

/// Auth0 client-credentials grant inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth0Credentials {
    /// OAuth client identifier.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Token endpoint URL.
    pub token_endpoint: String,
    /// Requested audience.
    pub audience: String,
}

/// Similarity scenario inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SimilarityConfig {
    /// Probe image.
    pub probe: ExampleImageConfig,
    /// Reference image.
    pub reference: ExampleImageConfig,
}

impl SimilarityConfig {
    /// Validates both image URLs.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_http_url("similarity.probe.example-image-url", &self.probe.example_image_url)?;
        validate_http_url(
            "similarity.reference.example-image-url",
            &self.reference.example_image_url,
        )
    }
}

/// A single remote example image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExampleImageConfig {
    /// Remote image URL.
    pub example_image_url: String,
}

/// Liveness record inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct LivenessRecordsConfig {
    /// Magnifeye liveness record.
    pub magnifeye_liveness: BinaryFileConfig,
}

impl LivenessRecordsConfig {
    /// Validates the record file path.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_path_string(
            "liveness-records.magnifeye-liveness.binary-file",
            &self.magnifeye_liveness.binary_file.to_string_lossy(),
        )
    }
}

/// Path to a local binary file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BinaryFileConfig {
    /// File path, relative to the working directory.
    pub binary_file: PathBuf,
}

/// Age and gender decision thresholds.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AspectsCheckConfig {
    /// Age at or above which a face is reported as higher.
    pub age_threshold: f64,
    /// Gender score at or above which a face is classified as female.
    pub gender_threshold: f64,
}

impl AspectsCheckConfig {
    /// Validates both thresholds are finite.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_finite("aspects-check.age-threshold", self.age_threshold)?;
        validate_finite("aspects-check.gender-threshold", self.gender_threshold)
    }
}

/// Wearables decision thresholds.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct WearablesConfig {
    /// Face mask score threshold.
    pub face_mask_threshold: f64,
    /// Glasses score threshold.
    pub glasses_threshold: f64,
    /// Heavy glass frame score threshold.
    pub heavy_glass_frame_threshold: f64,
    /// Tinted glass score threshold.
    pub tinted_glass_threshold: f64,
}

impl WearablesConfig {
    /// Validates all thresholds are finite.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_finite("wearables.face-mask-threshold", self.face_mask_threshold)?;
        validate_finite("wearables.glasses-threshold", self.glasses_threshold)?;
        validate_finite("wearables.heavy-glass-frame-threshold", self.heavy_glass_frame_threshold)?;
        validate_finite("wearables.tinted-glass-threshold", self.tinted_glass_threshold)
    }
}

/// Quality check configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct QualityConfig {
    /// Glass detection preconditions.
    pub glass_conditions: GlassConditionsConfig,
}

impl QualityConfig {
    /// Validates nested preconditions.
    fn validate(&self) -> Result<(), ConfigError> {
        self.glass_conditions.validate()
    }
}

/// Documented glass detection preconditions.
///
/// # Invariants
/// - `yaw_angle.low < yaw_angle.high` and `pitch_angle.low < pitch_angle.high`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GlassConditionsConfig {
    /// Minimum face detection confidence.
    pub detection_confidence: f64,
    /// Accepted yaw angle range (exclusive).
    pub yaw_angle: AngleRange,
    /// Accepted pitch angle range (exclusive).
    pub pitch_angle: AngleRange,
}

impl GlassConditionsConfig {
    /// Validates confidence and both angle ranges.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_finite(
            "quality.glass-conditions.detection-confidence",
            self.detection_confidence,
        )?;
        self.yaw_angle.validate("quality.glass-conditions.yaw-angle")?;
        self.pitch_angle.validate("quality.glass-conditions.pitch-angle")
    }
}

/// Open angle interval `(low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AngleRange {
    /// Lower bound (exclusive).
    pub low: f64,
    /// Upper bound (exclusive).
    pub high: f64,
}

impl AngleRange {
    /// Validates bounds are finite and ordered.
    fn validate(&self, field: &str) -> Result<(), ConfigError> {
        validate_finite(&format!("{field}.low"), self.low)?;
        validate_finite(&format!("{field}.high"), self.high)?;
        if self.low >= self.high {
            return Err(ConfigError::Invalid(format!("{field}.low must be below {field}.high")));
        }
        Ok(())
    }
}

/// Bundled resource locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Directory containing `images/faces` and `images/documents`.
    #[serde(default = "default_resources_root")]
    pub root: PathBuf,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            root: default_resources_root(),
        }
    }
}

impl ResourcesConfig {
    /// Validates the root path.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_path_string("resources.root", &self.root.to_string_lossy())
    }
}

/// Output locations for saved images.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    /// Parent directory for scenario output folders.
    #[serde(default = "default_output_root")]
    pub root: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_output_root(),
        }
    }
}

impl OutputConfig {
    /// Validates the root path.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_path_string("output.root", &self.root.to_string_lossy())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct HttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// User agent for outbound requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
            user_agent: default_user_agent(),
        }
    }
}

impl HttpConfig {
    /// Validates timeout bounds and user agent.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_HTTP_TIMEOUT_MS..=MAX_HTTP_TIMEOUT_MS).contains(&self.timeout_ms) {
            return Err(ConfigError::Invalid(format!(
                "http.timeout-ms must be between {MIN_HTTP_TIMEOUT_MS} and {MAX_HTTP_TIMEOUT_MS}"
            )));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("http.user-agent must be non-empty".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error, including missing keys and non-numeric thresholds.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Default resources root.
fn default_resources_root() -> PathBuf {
    PathBuf::from("resources")
}

/// Default output root.
fn default_output_root() -> PathBuf {
    PathBuf::from(".")
}

/// Default HTTP timeout.
const fn default_http_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}

/// Default user agent.
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates that a value parses as an `http` or `https` URL with a host.
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value.trim())
        .map_err(|err| ConfigError::Invalid(format!("{field} is not a valid url: {err}")))?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ConfigError::Invalid(format!("{field} has unsupported scheme {scheme}")));
        }
    }
    if url.host_str().is_none() {
        return Err(ConfigError::Invalid(format!("{field} must include a host")));
    }
    Ok(())
}

/// Validates that a threshold is a finite number.
fn validate_finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{field} must be finite")))
    }
}

/// Returns an owned, non-empty optional key or an error naming it.
fn required_key(field: &str, value: Option<&String>) -> Result<String, ConfigError> {
    match value.map(|value| value.trim()) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ConfigError::Invalid(format!("{field} must be set for auth0 scenarios"))),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use super::*;

    #[test]
    fn angle_range_rejects_equal_bounds() {
        let range = AngleRange {
            low: 5.0,
            high: 5.0,
        };
        let err = range.validate("quality.glass-conditions.yaw-angle").unwrap_err();
        assert!(err.to_string().contains("must be below"));
    }

    #[test]
    fn angle_range_accepts_ordered_bounds() {
        let range = AngleRange {
            low: -10.0,
            high: 10.0,
        };
        assert!(range.validate("yaw").is_ok());
    }

    #[test]
    fn validate_finite_rejects_nan_and_infinity() {
        assert!(validate_finite("x", f64::NAN).is_err());
        assert!(validate_finite("x", f64::INFINITY).is_err());
        assert!(validate_finite("x", 0.25).is_ok());
    }

    #[test]
    fn validate_http_url_rejects_other_schemes() {
        let err = validate_http_url("example-image-url", "ftp://example.com/face.jpeg").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
        assert!(validate_http_url("example-image-url", "not a url").is_err());
        assert!(validate_http_url("example-image-url", "https://example.com/face.jpeg").is_ok());
    }

    #[test]
    fn resolve_path_prefers_explicit_path() {
        let resolved = resolve_path(Some(Path::new("custom.toml"))).unwrap();
        assert_eq!(resolved, PathBuf::from("custom.toml"));
    }

    #[test]
    fn required_key_rejects_blank_values() {
        let blank = "  ".to_string();
        assert!(required_key("dot-auth0-audience", Some(&blank)).is_err());
        assert!(required_key("dot-auth0-audience", None).is_err());
        let value = "aud".to_string();
        assert_eq!(required_key("dot-auth0-audience", Some(&value)).unwrap(), "aud");
    }

    #[test]
    fn http_config_rejects_timeout_out_of_range() {
        let config = HttpConfig {
            timeout_ms: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        };
        assert!(config.validate().is_err());
        assert_eq!(HttpConfig::default().timeout_ms, DEFAULT_HTTP_TIMEOUT_MS);
    }
}
