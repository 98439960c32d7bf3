// crates/dis-samples/src/scenarios/mod.rs
// ============================================================================
// Module: Sample Scenarios
// Description: Catalogue of runnable DIS sample scenarios.
// Purpose: Map scenario names to their call sequences.
// Dependencies: dis-client, dis-config
// ============================================================================

//! ## Overview
//! Each scenario is a plain function over the API traits and the
//! [`SampleEnv`]. [`ScenarioKind`] is the closed list of scenarios with their
//! stable command-line names.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod actuator;
pub mod auth0;
pub mod crops;
pub mod documents;
pub mod faces;
pub mod inspect;
pub mod liveness;
pub mod metadata;
pub mod onboarding;
pub mod similarity;

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::ScenarioError;
use crate::harness::DisApi;
use crate::harness::SampleEnv;

// ============================================================================
// SECTION: Catalogue
// ============================================================================

/// Runnable scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    /// Detect faces by URL and by bytes, then delete them.
    FaceDetection,
    /// Classify age and gender against thresholds.
    FaceAspects,
    /// Check custom quality criteria.
    FaceQuality,
    /// Check face mask and glasses.
    Wearables,
    /// Save face crops and report crop coordinates.
    FaceCrops,
    /// Compare two detected faces.
    SimilarityImageToImage,
    /// Compare a detected face with a face template.
    SimilarityImageToTemplate,
    /// Full customer onboarding.
    CustomerOnboarding,
    /// Customer onboarding inside a session.
    CustomerOnboardingSession,
    /// Customer onboarding driven by a Magnifeye liveness record.
    CustomerOnboardingMagnifeye,
    /// Customer and document inspection findings.
    CustomerInspect,
    /// Passive liveness evaluation.
    PassiveLiveness,
    /// Smile liveness evaluation.
    SmileLiveness,
    /// Eye gaze liveness evaluation.
    EyeGazeLiveness,
    /// Magnifeye liveness evaluation.
    MagnifeyeLiveness,
    /// Document OCR reading only the MRZ.
    DocumentOcrMrz,
    /// Document OCR with classification advice.
    DocumentOcrAdvice,
    /// Document page quality.
    DocumentQuality,
    /// Level 0 document detection.
    DocumentL0Validation,
    /// Level 1 document detection.
    DocumentL1Validation,
    /// Supported documents of one country.
    DocumentsMetadata,
    /// Service health and versions.
    ActuatorInfo,
    /// Customer creation with an Auth0 token.
    Auth0Customer,
}

impl ScenarioKind {
    /// Every scenario, in listing order.
    pub const ALL: &'static [Self] = &[
        Self::FaceDetection,
        Self::FaceAspects,
        Self::FaceQuality,
        Self::Wearables,
        Self::FaceCrops,
        Self::SimilarityImageToImage,
        Self::SimilarityImageToTemplate,
        Self::CustomerOnboarding,
        Self::CustomerOnboardingSession,
        Self::CustomerOnboardingMagnifeye,
        Self::CustomerInspect,
        Self::PassiveLiveness,
        Self::SmileLiveness,
        Self::EyeGazeLiveness,
        Self::MagnifeyeLiveness,
        Self::DocumentOcrMrz,
        Self::DocumentOcrAdvice,
        Self::DocumentQuality,
        Self::DocumentL0Validation,
        Self::DocumentL1Validation,
        Self::DocumentsMetadata,
        Self::ActuatorInfo,
        Self::Auth0Customer,
    ];

    /// Returns the command-line name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FaceDetection => "face-detection",
            Self::FaceAspects => "face-aspects",
            Self::FaceQuality => "face-quality",
            Self::Wearables => "wearables",
            Self::FaceCrops => "face-crops",
            Self::SimilarityImageToImage => "similarity-image-to-image",
            Self::SimilarityImageToTemplate => "similarity-image-to-template",
            Self::CustomerOnboarding => "customer-onboarding",
            Self::CustomerOnboardingSession => "customer-onboarding-session",
            Self::CustomerOnboardingMagnifeye => "customer-onboarding-magnifeye",
            Self::CustomerInspect => "customer-inspect",
            Self::PassiveLiveness => "passive-liveness",
            Self::SmileLiveness => "smile-liveness",
            Self::EyeGazeLiveness => "eye-gaze-liveness",
            Self::MagnifeyeLiveness => "magnifeye-liveness",
            Self::DocumentOcrMrz => "document-ocr-mrz",
            Self::DocumentOcrAdvice => "document-ocr-advice",
            Self::DocumentQuality => "document-quality",
            Self::DocumentL0Validation => "document-l0-validation",
            Self::DocumentL1Validation => "document-l1-validation",
            Self::DocumentsMetadata => "documents-metadata",
            Self::ActuatorInfo => "actuator-info",
            Self::Auth0Customer => "auth0-customer",
        }
    }

    /// Looks a scenario up by its command-line name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Runs the scenario.
    ///
    /// The Auth0 scenario builds its own client from the configured
    /// credentials and ignores `api`.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError`] when a step fails or the service rejects an input.
    pub fn run<A: DisApi>(self, api: &A, env: &SampleEnv) -> Result<(), ScenarioError> {
        match self {
            Self::FaceDetection => faces::face_detection(api, env),
            Self::FaceAspects => faces::face_aspects(api, env),
            Self::FaceQuality => faces::face_quality(api, env),
            Self::Wearables => faces::wearables(api, env),
            Self::FaceCrops => crops::face_crops(api, env),
            Self::SimilarityImageToImage => similarity::image_to_image(api, env),
            Self::SimilarityImageToTemplate => similarity::image_to_template(api, env),
            Self::CustomerOnboarding => onboarding::customer_onboarding(api, env),
            Self::CustomerOnboardingSession => onboarding::customer_onboarding_session(api, env),
            Self::CustomerOnboardingMagnifeye => {
                onboarding::customer_onboarding_magnifeye(api, env)
            }
            Self::CustomerInspect => inspect::customer_inspect(api, env),
            Self::PassiveLiveness => liveness::passive_liveness(api, env),
            Self::SmileLiveness => liveness::smile_liveness(api, env),
            Self::EyeGazeLiveness => liveness::eye_gaze_liveness(api, env),
            Self::MagnifeyeLiveness => liveness::magnifeye_liveness(api, env),
            Self::DocumentOcrMrz => documents::ocr_mrz(api, env),
            Self::DocumentOcrAdvice => documents::ocr_with_advice(api, env),
            Self::DocumentQuality => documents::page_quality(api, env),
            Self::DocumentL0Validation => documents::l0_validation(api, env),
            Self::DocumentL1Validation => documents::l1_validation(api, env),
            Self::DocumentsMetadata => metadata::documents_metadata(api),
            Self::ActuatorInfo => actuator::actuator_info(api),
            Self::Auth0Customer => auth0::auth0_customer(env),
        }
    }
}
