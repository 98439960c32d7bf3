// crates/dis-client/src/model/common.rs
// ============================================================================
// Module: DIS Common Wire Types
// Description: Images, crops and base64 field helpers shared across APIs.
// Purpose: Keep binary payload encoding in one place.
// Dependencies: base64, serde
// ============================================================================

//! ## Overview
//! Images are sent either inline as base64 `data` or by `url`, never both.
//! Crops and templates come back as base64 `data` and are decoded to bytes
//! during deserialization.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Base64 Fields
// ============================================================================

/// Serde adapter for required base64 byte fields.
pub mod base64_bytes {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;
    use serde::de::Error as _;

    /// Serializes bytes as a standard base64 string.
    ///
    /// # Errors
    ///
    /// Returns the serializer error when writing fails.
    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    /// Deserializes a standard base64 string into bytes.
    ///
    /// # Errors
    ///
    /// Returns a deserializer error when the string is not valid base64.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded.as_bytes()).map_err(D::Error::custom)
    }
}

/// Serde adapter for optional base64 byte fields.
pub mod base64_option {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;
    use serde::de::Error as _;

    /// Serializes optional bytes as a base64 string or `null`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error when writing fails.
    #[allow(clippy::ref_option, reason = "Signature is dictated by serde(with).")]
    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional base64 string into bytes.
    ///
    /// # Errors
    ///
    /// Returns a deserializer error when the string is not valid base64.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|encoded| STANDARD.decode(encoded.as_bytes()).map_err(D::Error::custom))
            .transpose()
    }
}

// ============================================================================
// SECTION: Images
// ============================================================================

/// Image input, either inline bytes or a URL the service fetches itself.
///
/// # Invariants
/// - Exactly one of `data` and `url` is set by the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Encoded image bytes (JPEG or PNG).
    #[serde(default, with = "base64_option", skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u8>>,
    /// Remote image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Image {
    /// Creates an inline image from encoded bytes.
    #[must_use]
    pub const fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            data: Some(data),
            url: None,
        }
    }

    /// Creates an image the service downloads from `url`.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            data: None,
            url: Some(url.into()),
        }
    }
}

/// Cropped image returned by crop and portrait endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCrop {
    /// Encoded image bytes.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

/// Optional output dimensions for crop endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CropSize {
    /// Requested width in pixels.
    pub width: Option<u32>,
    /// Requested height in pixels.
    pub height: Option<u32>,
}

impl CropSize {
    /// Requests a crop scaled to `width` pixels.
    #[must_use]
    pub const fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// Requests a crop scaled to `height` pixels.
    #[must_use]
    pub const fn height(height: u32) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }

    /// Returns the query pairs for the request, omitting unset dimensions.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(width) = self.width {
            pairs.push(("width", width.to_string()));
        }
        if let Some(height) = self.height {
            pairs.push(("height", height.to_string()));
        }
        pairs
    }
}
