// crates/dis-samples/src/scenarios/faces.rs
// ============================================================================
// Module: Face Scenarios
// Description: Detection, aspects, quality and wearables scenarios.
// Purpose: Detect a face and classify evaluation scores with thresholds.
// Dependencies: dis-client, tracing
// ============================================================================

//! ## Overview
//! Each scenario detects the example face, calls one evaluation endpoint and
//! classifies the scores with the thresholds from [`crate::decision`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::FaceOperations;
use dis_client::model::CreateFaceRequest;
use dis_client::model::CreateFaceResponse;
use dis_client::model::HeadPoseAttribute;
use dis_client::model::Image;
use tracing::error;
use tracing::info;

use crate::cleanup::with_face;
use crate::decision::QualityVerdict;
use crate::decision::classify_gender;
use crate::decision::compare_age;
use crate::decision::exceeds_threshold;
use crate::error::ScenarioError;
use crate::harness::SampleEnv;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a detection request for a remote image.
pub(crate) fn detect_by_url(url: &str) -> CreateFaceRequest {
    CreateFaceRequest {
        image: Image::from_url(url),
    }
}

/// Returns the detection confidence of an accepted detection.
pub(crate) fn detection_confidence(detection: &CreateFaceResponse) -> Result<f64, ScenarioError> {
    detection
        .detection
        .as_ref()
        .map(|details| details.confidence)
        .ok_or_else(|| ScenarioError::MissingField("detection.confidence".to_string()))
}

// ============================================================================
// SECTION: Detection
// ============================================================================

/// Detects the example face by URL and the bundled face by bytes, logging
/// both confidences. Both faces are deleted.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails or a resource is missing.
pub fn face_detection<A: FaceOperations>(api: &A, env: &SampleEnv) -> Result<(), ScenarioError> {
    with_face(api, &detect_by_url(&env.config.example_image_url), log_detection)?;
    let by_bytes = CreateFaceRequest {
        image: env.resources.face_image("face")?,
    };
    with_face(api, &by_bytes, log_detection)
}

/// Logs the id and confidence of a detected face.
fn log_detection(face_id: &str, detection: &CreateFaceResponse) -> Result<(), ScenarioError> {
    let confidence = detection_confidence(detection)?;
    info!("Face created with id: {face_id} with detection confidence: {confidence}");
    Ok(())
}

// ============================================================================
// SECTION: Aspects
// ============================================================================

/// Classifies gender and age of the example face.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails.
pub fn face_aspects<A: FaceOperations>(api: &A, env: &SampleEnv) -> Result<(), ScenarioError> {
    let thresholds = env.config.aspects_check;
    with_face(api, &detect_by_url(&env.config.example_image_url), |face_id, _| {
        let aspects = api.evaluate_aspects(face_id)?;
        let gender = classify_gender(aspects.gender, thresholds.gender_threshold);
        info!(
            "Gender is evaluated as: {gender} with score {} and threshold: {}",
            aspects.gender, thresholds.gender_threshold
        );
        info!(
            "Face aspects check with detected age of: {} and threshold of: {}",
            aspects.age, thresholds.age_threshold
        );
        let age = compare_age(aspects.age, thresholds.age_threshold);
        info!("Age of face on image is: {age} than requested threshold.");
        Ok(())
    })
}

// ============================================================================
// SECTION: Quality
// ============================================================================

/// Checks the example face against the glass detection preconditions.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails or the detection has no confidence.
pub fn face_quality<A: FaceOperations>(api: &A, env: &SampleEnv) -> Result<(), ScenarioError> {
    let conditions = env.config.quality.glass_conditions;
    with_face(api, &detect_by_url(&env.config.example_image_url), |face_id, detection| {
        info!("About to evaluate custom quality check with glass detection preconditions:");
        info!("  'face detection confidence' >= {}", conditions.detection_confidence);
        info!("  'yaw angle' <{};{}>", conditions.yaw_angle.low, conditions.yaw_angle.high);
        info!("  'pitch angle' <{};{}>", conditions.pitch_angle.low, conditions.pitch_angle.high);
        let quality = api.check_quality(face_id)?;
        let confidence = detection_confidence(detection)?;
        info!("Checking detection confidence with score: {confidence}");
        log_headpose("yaw", quality.yaw.as_ref());
        log_headpose("pitch", quality.pitch.as_ref());
        let verdict = QualityVerdict::evaluate(&quality, confidence, &conditions);
        info!(
            "Face image is compliant with selected quality criteria: {}",
            verdict.compliant()
        );
        Ok(())
    })
}

/// Logs one head pose attribute.
fn log_headpose(label: &str, attribute: Option<&HeadPoseAttribute>) {
    match attribute {
        Some(attribute) => info!(
            "Evaluating {label} angle with preconditions met: {} and angle: {}",
            attribute.preconditions_met, attribute.angle
        ),
        None => info!("Quality response has no {label} angle"),
    }
}

// ============================================================================
// SECTION: Wearables
// ============================================================================

/// Checks face mask and glasses on the example face. A failed mask check is
/// logged and the glasses check still runs.
///
/// # Errors
///
/// Returns [`ScenarioError`] when detection or the glasses check fails.
pub fn wearables<A: FaceOperations>(api: &A, env: &SampleEnv) -> Result<(), ScenarioError> {
    let thresholds = env.config.wearables;
    with_face(api, &detect_by_url(&env.config.example_image_url), |face_id, _| {
        match api.check_face_mask(face_id) {
            Ok(mask) => {
                let detected = exceeds_threshold(mask.score, thresholds.face_mask_threshold);
                info!("Face mask detected on face image: {detected}");
            }
            Err(err) => {
                error!(
                    code = err.code(),
                    "Mask detection call failed. Make sure balanced or accurate detection mode is enabled"
                );
            }
        }
        let glasses = api.check_glasses(face_id)?;
        let has_glasses = exceeds_threshold(glasses.score, thresholds.glasses_threshold);
        let heavy_frame =
            exceeds_threshold(glasses.heavy_frame, thresholds.heavy_glass_frame_threshold);
        let tinted = exceeds_threshold(glasses.tinted, thresholds.tinted_glass_threshold);
        info!(
            "Glasses were detected on face image: {has_glasses} having heavy frame: {heavy_frame} and having tinted glass: {tinted}"
        );
        Ok(())
    })
}
