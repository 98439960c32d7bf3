// crates/dis-samples/src/decision.rs
// ============================================================================
// Module: Sample Decisions
// Description: Threshold decisions applied to DIS evaluation scores.
// Purpose: Keep client-side classification rules pure and testable.
// Dependencies: dis-client, dis-config
// ============================================================================

//! ## Overview
//! The service returns raw scores; the samples turn them into verdicts with
//! configured thresholds. Gender and age use inclusive thresholds, wearables
//! use strict ones, and head pose angles must lie strictly inside their range.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use dis_client::model::FaceQualityResponse;
use dis_client::model::HeadPoseAttribute;
use dis_config::AngleRange;
use dis_config::GlassConditionsConfig;

// ============================================================================
// SECTION: Aspects
// ============================================================================

/// Gender derived from a gender score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Score at or above the threshold.
    Female,
    /// Score below the threshold.
    Male,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Female => "F",
            Self::Male => "M",
        })
    }
}

/// Age relative to a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeComparison {
    /// Age at or above the threshold.
    Higher,
    /// Age below the threshold.
    Lower,
}

impl fmt::Display for AgeComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Higher => "Higher",
            Self::Lower => "Lower",
        })
    }
}

/// Classifies a gender score; equality counts as female.
#[must_use]
pub fn classify_gender(score: f64, threshold: f64) -> Gender {
    if score >= threshold { Gender::Female } else { Gender::Male }
}

/// Compares an estimated age; equality counts as higher.
#[must_use]
pub fn compare_age(age: f64, threshold: f64) -> AgeComparison {
    if age >= threshold { AgeComparison::Higher } else { AgeComparison::Lower }
}

// ============================================================================
// SECTION: Wearables
// ============================================================================

/// Returns `true` when `score` is strictly above `threshold`.
#[must_use]
pub fn exceeds_threshold(score: f64, threshold: f64) -> bool {
    score > threshold
}

// ============================================================================
// SECTION: Quality
// ============================================================================

/// Accepts a head pose attribute when its preconditions are met and the angle
/// lies strictly inside `range`. A missing attribute is rejected.
#[must_use]
pub fn headpose_accepted(attribute: Option<&HeadPoseAttribute>, range: &AngleRange) -> bool {
    attribute.is_some_and(|attribute| {
        attribute.preconditions_met && attribute.angle > range.low && attribute.angle < range.high
    })
}

/// Custom quality verdict for the glass detection preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityVerdict {
    /// Detection confidence is at or above the configured minimum.
    pub confidence_ok: bool,
    /// Yaw is accepted.
    pub yaw_ok: bool,
    /// Pitch is accepted.
    pub pitch_ok: bool,
}

impl QualityVerdict {
    /// Evaluates a quality response against the preconditions.
    #[must_use]
    pub fn evaluate(
        quality: &FaceQualityResponse,
        confidence: f64,
        conditions: &GlassConditionsConfig,
    ) -> Self {
        Self {
            confidence_ok: confidence >= conditions.detection_confidence,
            yaw_ok: headpose_accepted(quality.yaw.as_ref(), &conditions.yaw_angle),
            pitch_ok: headpose_accepted(quality.pitch.as_ref(), &conditions.pitch_angle),
        }
    }

    /// Returns `true` when every criterion holds.
    #[must_use]
    pub const fn compliant(&self) -> bool {
        self.confidence_ok && self.yaw_ok && self.pitch_ok
    }
}
