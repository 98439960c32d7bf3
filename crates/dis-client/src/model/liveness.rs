// crates/dis-client/src/model/liveness.rs
// ============================================================================
// Module: DIS Liveness Wire Types
// Description: Liveness selfie, record and evaluation payloads.
// Purpose: Typed assertions, evaluation types and rejection codes.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Liveness selfies carry an [`Assertion`]; records are raw bytes. Every
//! rejection code enum decodes unknown values as `Unknown`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::common::Image;
use crate::outcome::ErrorCoded;

// ============================================================================
// SECTION: Liveness Selfies
// ============================================================================

/// Expected pose or expression of a liveness selfie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Assertion {
    /// Plain selfie for passive liveness.
    None,
    /// Eyes looking at the top-left corner.
    EyeGazeTopLeft,
    /// Eyes looking at the top-right corner.
    EyeGazeTopRight,
    /// Eyes looking at the bottom-left corner.
    EyeGazeBottomLeft,
    /// Eyes looking at the bottom-right corner.
    EyeGazeBottomRight,
    /// Neutral expression for smile liveness.
    Neutral,
    /// Smiling expression for smile liveness.
    Smile,
}

impl Assertion {
    /// Returns the wire name of the assertion.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::EyeGazeTopLeft => "EYE_GAZE_TOP_LEFT",
            Self::EyeGazeTopRight => "EYE_GAZE_TOP_RIGHT",
            Self::EyeGazeBottomLeft => "EYE_GAZE_BOTTOM_LEFT",
            Self::EyeGazeBottomRight => "EYE_GAZE_BOTTOM_RIGHT",
            Self::Neutral => "NEUTRAL",
            Self::Smile => "SMILE",
        }
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /customers/{id}/liveness/selfies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLivenessSelfieRequest {
    /// Selfie image.
    pub image: Image,
    /// Expected pose or expression.
    pub assertion: Assertion,
}

wire_enum! {
    /// Rejection codes of liveness selfie upload.
    LivenessSelfieErrorCode {
        /// No face found on the selfie.
        NoFaceDetected => "NO_FACE_DETECTED",
    }
}

wire_enum! {
    /// Warnings attached to an accepted liveness selfie.
    LivenessSelfieWarning {
        /// More than one face found; only the largest is evaluated.
        MultipleFacesDetected => "MULTIPLE_FACES_DETECTED",
        /// Image quality makes the evaluation unreliable.
        LowQuality => "LOW_QUALITY",
    }
}

/// Response of `POST /customers/{id}/liveness/selfies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLivenessSelfieResponse {
    /// Non-fatal warnings.
    #[serde(default)]
    pub warnings: Vec<LivenessSelfieWarning>,
    /// Rejection code, if any.
    #[serde(default)]
    pub error_code: Option<LivenessSelfieErrorCode>,
}

impl ErrorCoded for CreateLivenessSelfieResponse {
    type Code = LivenessSelfieErrorCode;

    fn error_code(&self) -> Option<Self::Code> {
        self.error_code
    }
}

// ============================================================================
// SECTION: Liveness Records
// ============================================================================

wire_enum! {
    /// Rejection codes of liveness record upload.
    LivenessRecordErrorCode {
        /// The record cannot be evaluated.
        InvalidData => "INVALID_DATA",
    }
}

/// Response of `POST /customers/{id}/liveness/records`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLivenessRecordResponse {
    /// Links to resources derived from the record.
    #[serde(default)]
    pub links: Option<LivenessRecordLinks>,
    /// Rejection code, if any.
    #[serde(default)]
    pub error_code: Option<LivenessRecordErrorCode>,
}

impl ErrorCoded for CreateLivenessRecordResponse {
    type Code = LivenessRecordErrorCode;

    fn error_code(&self) -> Option<Self::Code> {
        self.error_code
    }
}

/// Links of a liveness record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivenessRecordLinks {
    /// Link to the selfie extracted from the record.
    #[serde(default)]
    pub selfie: Option<String>,
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Liveness evaluation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LivenessType {
    /// Single-image passive liveness.
    PassiveLiveness,
    /// Eye gaze (formerly active) liveness.
    EyeGazeLiveness,
    /// Neutral/smile expression pair.
    SmileLiveness,
    /// Magnifeye record liveness.
    MagnifeyeLiveness,
}

/// Body of `POST /customers/{id}/liveness/evaluation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateLivenessRequest {
    /// Evaluation method.
    #[serde(rename = "type")]
    pub liveness_type: LivenessType,
}

wire_enum! {
    /// Rejection codes of liveness evaluation.
    LivenessEvaluationErrorCode {
        /// Not enough selfies or records were uploaded.
        NotEnoughData => "NOT_ENOUGH_DATA",
        /// Uploaded data cannot be evaluated.
        InvalidData => "INVALID_DATA",
        /// No face found on the uploaded data.
        NoFaceDetected => "NO_FACE_DETECTED",
    }
}

/// Response of `POST /customers/{id}/liveness/evaluation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateLivenessResponse {
    /// Liveness score, present when accepted.
    #[serde(default)]
    pub score: Option<f64>,
    /// Rejection code, if any.
    #[serde(default)]
    pub error_code: Option<LivenessEvaluationErrorCode>,
}

impl ErrorCoded for EvaluateLivenessResponse {
    type Code = LivenessEvaluationErrorCode;

    fn error_code(&self) -> Option<Self::Code> {
        self.error_code
    }
}
