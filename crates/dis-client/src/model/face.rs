// crates/dis-client/src/model/face.rs
// ============================================================================
// Module: DIS Face Wire Types
// Description: Bodies of the face operations endpoints.
// Purpose: Typed detection, evaluation, crop and similarity payloads.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Detection, evaluation, crop, template and similarity payloads of the
//! face endpoints.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use super::common::Image;
use super::common::base64_bytes;
use super::common::base64_option;
use crate::outcome::ErrorCoded;

// ============================================================================
// SECTION: Detection
// ============================================================================

/// Body of `POST /faces`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaceRequest {
    /// Image to detect a face on.
    pub image: Image,
}

wire_enum! {
    /// Rejection codes of face detection.
    CreateFaceErrorCode {
        /// No face found on the image.
        NoFaceDetected => "NO_FACE_DETECTED",
    }
}

/// Response of `POST /faces`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaceResponse {
    /// Server-assigned face id.
    #[serde(default)]
    pub id: Option<String>,
    /// Detection details.
    #[serde(default)]
    pub detection: Option<FaceDetection>,
    /// Hypermedia links.
    #[serde(default)]
    pub links: Option<FaceLinks>,
    /// Rejection code, if any.
    #[serde(default)]
    pub error_code: Option<CreateFaceErrorCode>,
}

impl ErrorCoded for CreateFaceResponse {
    type Code = CreateFaceErrorCode;

    fn error_code(&self) -> Option<Self::Code> {
        self.error_code
    }
}

/// Face detection details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceDetection {
    /// Detection confidence in `[0, 1]`.
    pub confidence: f64,
}

/// Links of a detected face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceLinks {
    /// Link to the face resource itself.
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
}

// ============================================================================
// SECTION: Evaluations
// ============================================================================

/// Response of `GET /faces/{id}/aspects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceAspectsResponse {
    /// Estimated age in years.
    pub age: f64,
    /// Gender score; higher values lean female.
    pub gender: f64,
}

/// Response of `GET /faces/{id}/face-mask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceMaskResponse {
    /// Face mask score.
    pub score: f64,
}

/// Response of `GET /faces/{id}/glasses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassesResponse {
    /// Glasses presence score.
    pub score: f64,
    /// Heavy frame score.
    pub heavy_frame: f64,
    /// Tinted glass score.
    pub tinted: f64,
}

/// Response of `GET /faces/{id}/quality`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceQualityResponse {
    /// Head yaw attribute.
    #[serde(default)]
    pub yaw: Option<HeadPoseAttribute>,
    /// Head pitch attribute.
    #[serde(default)]
    pub pitch: Option<HeadPoseAttribute>,
    /// Head roll attribute.
    #[serde(default)]
    pub roll: Option<HeadPoseAttribute>,
}

/// Head pose angle with its evaluation preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadPoseAttribute {
    /// Angle in degrees.
    pub angle: f64,
    /// Whether the service could evaluate the angle reliably.
    pub preconditions_met: bool,
}

// ============================================================================
// SECTION: Crops And Templates
// ============================================================================

/// Response of `GET /faces/{id}/crop/coordinates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropCoordinatesResponse {
    /// Whether the whole face fits inside the source image.
    #[serde(default)]
    pub fully_captured: Option<bool>,
    /// Crop corners in source image pixels.
    #[serde(default)]
    pub coordinates: Option<CropCoordinates>,
}

/// Corners of a face crop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropCoordinates {
    /// Top-left corner.
    pub top_left: Point,
    /// Top-right corner.
    pub top_right: Point,
    /// Bottom-left corner.
    pub bottom_left: Point,
    /// Bottom-right corner.
    pub bottom_right: Point,
}

/// Pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset.
    pub x: i64,
    /// Vertical offset.
    pub y: i64,
}

/// Response of `GET /faces/{id}/face-template`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceTemplate {
    /// Template bytes.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    /// Template format version.
    #[serde(default)]
    pub version: Option<String>,
}

// ============================================================================
// SECTION: Similarity
// ============================================================================

/// Body of `POST /faces/{id}/similarity`.
///
/// # Invariants
/// - Exactly one of `reference_face` and `reference_face_template` is set by
///   the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceSimilarityRequest {
    /// Link to a previously detected reference face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_face: Option<String>,
    /// Reference face template bytes.
    #[serde(default, with = "base64_option", skip_serializing_if = "Option::is_none")]
    pub reference_face_template: Option<Vec<u8>>,
}

impl FaceSimilarityRequest {
    /// Compares against a detected face identified by its link.
    #[must_use]
    pub fn with_reference_face(link: impl Into<String>) -> Self {
        Self {
            reference_face: Some(link.into()),
            reference_face_template: None,
        }
    }

    /// Compares against a face template.
    #[must_use]
    pub const fn with_reference_template(template: Vec<u8>) -> Self {
        Self {
            reference_face: None,
            reference_face_template: Some(template),
        }
    }
}

/// Response of `POST /faces/{id}/similarity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceSimilarityResponse {
    /// Similarity score in `[0, 1]`.
    pub score: f64,
}
