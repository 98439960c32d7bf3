// crates/dis-client/src/model/inspect.rs
// ============================================================================
// Module: DIS Inspection Wire Types
// Description: Customer inspect and document inspect responses.
// Purpose: Typed access to cross-check findings.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Findings of `POST /customers/{id}/inspect` and
//! `POST /customers/{id}/document/inspect`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Customer Inspect
// ============================================================================

/// Response of `POST /customers/{id}/inspect`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInspectResponse {
    /// Selfie cross-checks.
    #[serde(default)]
    pub selfie_inspection: Option<SelfieInspection>,
}

/// Selfie cross-checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfieInspection {
    /// Similarity of the selfie with other customer images.
    #[serde(default)]
    pub similarity_with: Option<SimilarityWith>,
    /// Gender estimated from the selfie.
    #[serde(default)]
    pub gender_estimate: Option<String>,
    /// Consistency of the selfie gender with document data.
    #[serde(default)]
    pub gender_consistency: Option<GenderConsistency>,
}

/// Selfie similarity flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityWith {
    /// Selfie matches the document portrait.
    #[serde(default)]
    pub document_portrait: Option<bool>,
    /// Selfie matches the liveness selfies.
    #[serde(default)]
    pub liveness_selfies: Option<bool>,
}

/// Gender consistency flags; `None` means the source was not available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderConsistency {
    /// Consistent with the document portrait.
    #[serde(default)]
    pub document_portrait: Option<bool>,
    /// Consistent with the visual zone.
    #[serde(default)]
    pub viz: Option<bool>,
    /// Consistent with the machine readable zone.
    #[serde(default)]
    pub mrz: Option<bool>,
}

// ============================================================================
// SECTION: Document Inspect
// ============================================================================

/// Response of `POST /customers/{id}/document/inspect`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInspectResponse {
    /// Whether the document is past its expiry date.
    #[serde(default)]
    pub expired: Option<bool>,
    /// MRZ checksum validation.
    #[serde(default)]
    pub mrz_inspection: Option<MrzInspection>,
    /// Document portrait checks.
    #[serde(default)]
    pub portrait_inspection: Option<PortraitInspection>,
    /// Visual zone checks.
    #[serde(default)]
    pub visual_zone_inspection: Option<VisualZoneInspection>,
    /// Tampering checks keyed by page type.
    #[serde(default)]
    pub page_tampering: Option<BTreeMap<String, PageTamperingInspection>>,
}

/// MRZ checksum validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MrzInspection {
    /// All MRZ checksums are valid.
    pub valid: bool,
}

/// Document portrait checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortraitInspection {
    /// Gender estimated from the portrait.
    #[serde(default)]
    pub gender_estimate: Option<String>,
    /// Consistency of the portrait gender with document text.
    #[serde(default)]
    pub gender_consistency: Option<GenderConsistency>,
}

/// Visual zone checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualZoneInspection {
    /// Text consistency with other document sources.
    #[serde(default)]
    pub text_consistency: Option<TextConsistency>,
}

/// Text consistency result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConsistency {
    /// All compared fields agree.
    pub consistent: bool,
    /// Per-source inconsistencies.
    #[serde(default)]
    pub consistency_with: Option<TextConsistentWith>,
}

/// Inconsistent fields per compared source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConsistentWith {
    /// Fields disagreeing with the MRZ.
    #[serde(default)]
    pub mrz: Option<InconsistentTexts>,
    /// Fields disagreeing with barcodes.
    #[serde(default)]
    pub barcodes: Option<InconsistentTexts>,
}

/// List of inconsistent field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InconsistentTexts {
    /// Field names.
    #[serde(default)]
    pub inconsistent_texts: Vec<String>,
}

/// Tampering checks of one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTamperingInspection {
    /// Page looks like a black and white copy.
    #[serde(default)]
    pub color_profile_change_detected: Option<bool>,
    /// Page looks like a photo of a screen.
    #[serde(default)]
    pub looks_like_screenshot: Option<bool>,
}
