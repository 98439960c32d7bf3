// crates/dis-samples/src/scenarios/liveness.rs
// ============================================================================
// Module: Liveness Scenarios
// Description: Passive, smile, eye gaze and Magnifeye liveness evaluation.
// Purpose: Upload liveness inputs and diagnose evaluation rejections.
// Dependencies: dis-client, tracing
// ============================================================================

//! ## Overview
//! Every liveness scenario creates a customer, creates its liveness
//! sub-resource, uploads selfies or a record, and evaluates one liveness
//! type. A rejected evaluation is a finding, not a failure: it is logged with
//! a diagnosis from [`evaluation_diagnosis`] and the customer is deleted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::CustomerOnboarding;
use dis_client::Outcome;
use dis_client::model::Assertion;
use dis_client::model::CreateLivenessSelfieRequest;
use dis_client::model::EvaluateLivenessRequest;
use dis_client::model::Image;
use dis_client::model::LivenessEvaluationErrorCode;
use dis_client::model::LivenessRecordErrorCode;
use dis_client::model::LivenessSelfieErrorCode;
use dis_client::model::LivenessSelfieWarning;
use dis_client::model::LivenessType;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::cleanup::with_customer;
use crate::error::ScenarioError;
use crate::harness::SampleEnv;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Eye gaze segments uploaded in order, as `(image id, assertion)`.
pub const EYE_GAZE_SEQUENCE: [(&str, Assertion); 5] = [
    ("top-left", Assertion::EyeGazeTopLeft),
    ("bottom-left", Assertion::EyeGazeBottomLeft),
    ("bottom-right", Assertion::EyeGazeBottomRight),
    ("top-left", Assertion::EyeGazeTopLeft),
    ("bottom-right", Assertion::EyeGazeBottomRight),
];

/// Smile expressions uploaded in order, as `(image id, assertion)`.
pub const SMILE_SEQUENCE: [(&str, Assertion); 2] =
    [("face-neutral", Assertion::Neutral), ("face-smile", Assertion::Smile)];

/// Message of a smile scenario stopped by a rejected expression.
const SMILE_UPLOAD_FAILED: &str = "Smile Liveness can not be calculated if any of images fails.";

// ============================================================================
// SECTION: Diagnosis
// ============================================================================

/// Explains why an evaluation of `liveness_type` was rejected with `code`.
#[must_use]
pub const fn evaluation_diagnosis(
    liveness_type: LivenessType,
    code: LivenessEvaluationErrorCode,
) -> &'static str {
    match (liveness_type, code) {
        (LivenessType::PassiveLiveness, LivenessEvaluationErrorCode::NotEnoughData) => {
            "Passive Liveness evaluation failed! At least one photo needs to be successfully uploaded with assertion NONE."
        }
        (LivenessType::SmileLiveness, LivenessEvaluationErrorCode::NotEnoughData) => {
            "Smile Liveness evaluation failed! At least one pair of photos with expression NEUTRAL and SMILE needs to be successfully uploaded."
        }
        (LivenessType::EyeGazeLiveness, LivenessEvaluationErrorCode::NotEnoughData) => {
            "You have to upload at least 4 segments for Eye Gaze Liveness evaluation."
        }
        (LivenessType::EyeGazeLiveness, LivenessEvaluationErrorCode::InvalidData) => {
            "Either eyes were not detected on less than 4 segments or face was not detected on at least one segment."
        }
        (LivenessType::MagnifeyeLiveness, LivenessEvaluationErrorCode::NotEnoughData) => {
            "Liveness record has to be created to evaluate Magnifeye Liveness."
        }
        (LivenessType::MagnifeyeLiveness, LivenessEvaluationErrorCode::InvalidData) => {
            "Invalid data. Magnifeye Liveness can not be evaluated on this liveness record."
        }
        (_, LivenessEvaluationErrorCode::NoFaceDetected) => {
            "Face was not detected on the uploaded data. Liveness can not be evaluated."
        }
        _ => "Liveness evaluation was rejected with an unexpected error code.",
    }
}

/// Explains a liveness selfie warning.
#[must_use]
pub const fn selfie_warning_diagnosis(warning: LivenessSelfieWarning) -> &'static str {
    match warning {
        LivenessSelfieWarning::MultipleFacesDetected => {
            "Image added into liveness check contains more than one face. Only the biggest face will be evaluated."
        }
        LivenessSelfieWarning::LowQuality => {
            "Image added into liveness check has low quality and liveness evaluation may NOT be reliable."
        }
        LivenessSelfieWarning::Unknown => "Image added into liveness check has an unknown warning.",
    }
}

// ============================================================================
// SECTION: Steps
// ============================================================================

/// Uploads one liveness selfie, logging its warnings. Returns the rejection
/// code, if any.
fn upload_selfie<A: CustomerOnboarding>(
    api: &A,
    customer_id: &str,
    image: Image,
    assertion: Assertion,
) -> Result<Option<LivenessSelfieErrorCode>, ScenarioError> {
    let outcome = api.create_liveness_selfie(customer_id, &CreateLivenessSelfieRequest {
        image,
        assertion,
    })?;
    for warning in &outcome.response().warnings {
        warn!("{}", selfie_warning_diagnosis(*warning));
    }
    Ok(match outcome {
        Outcome::Accepted(_) => None,
        Outcome::Rejected {
            code, ..
        } => Some(code),
    })
}

/// Evaluates liveness and logs either the score or the diagnosis.
fn evaluate<A: CustomerOnboarding>(
    api: &A,
    customer_id: &str,
    liveness_type: LivenessType,
) -> Result<(), ScenarioError> {
    let outcome = api.evaluate_liveness(customer_id, &EvaluateLivenessRequest {
        liveness_type,
    })?;
    match outcome {
        Outcome::Accepted(response) => match response.score {
            Some(score) => info!("Liveness score has been evaluated to: {score}"),
            None => warn!("Liveness evaluation returned no score"),
        },
        Outcome::Rejected {
            code, ..
        } => error!(code = %code, "{}", evaluation_diagnosis(liveness_type, code)),
    }
    Ok(())
}

// ============================================================================
// SECTION: Scenarios
// ============================================================================

/// Evaluates passive liveness of the example image.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails.
pub fn passive_liveness<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    with_customer(api, |customer_id| {
        api.create_liveness(customer_id)?;
        let image = Image::from_url(&env.config.example_image_url);
        match upload_selfie(api, customer_id, image, Assertion::None)? {
            None => info!("Added image for Passive Liveness evaluation."),
            Some(LivenessSelfieErrorCode::NoFaceDetected) => warn!(
                "Face was not detected on image. Passive Liveness can not be evaluated on this image."
            ),
            Some(code) => error!("Liveness selfie was rejected with code {code}"),
        }
        evaluate(api, customer_id, LivenessType::PassiveLiveness)
    })
}

/// Evaluates smile liveness from a neutral and a smiling selfie. A rejected
/// expression stops the scenario.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails or an expression is rejected.
pub fn smile_liveness<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    with_customer(api, |customer_id| {
        api.create_liveness(customer_id)?;
        for (image_id, assertion) in SMILE_SEQUENCE {
            let image = env.resources.face_image(image_id)?;
            if let Some(code) = upload_selfie(api, customer_id, image, assertion)? {
                error!(
                    "Adding image: {image_id} as smile liveness for face expression: {assertion} failed with error code: {code}"
                );
                return Err(ScenarioError::Rejected(SMILE_UPLOAD_FAILED.to_string()));
            }
            info!(
                "Successfully added image: {image_id} as smile liveness for face expression: {assertion}"
            );
        }
        evaluate(api, customer_id, LivenessType::SmileLiveness)
    })
}

/// Evaluates eye gaze liveness from five gaze segments. Rejected segments
/// are logged and the upload goes on.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails or an image is missing.
pub fn eye_gaze_liveness<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    with_customer(api, |customer_id| {
        api.create_liveness(customer_id)?;
        for (image_id, assertion) in EYE_GAZE_SEQUENCE {
            let image = env.resources.face_image(image_id)?;
            match upload_selfie(api, customer_id, image, assertion)? {
                None => info!(
                    "Successfully added image: {image_id} as eye gaze image for position: {assertion}"
                ),
                Some(code) => warn!(
                    "Adding image: {image_id} as eye gaze image for position: {assertion} failed with error code {code}"
                ),
            }
        }
        evaluate(api, customer_id, LivenessType::EyeGazeLiveness)
    })
}

/// Evaluates Magnifeye liveness from the configured liveness record.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails or the record file is missing.
pub fn magnifeye_liveness<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    let record_path = &env.config.liveness_records.magnifeye_liveness.binary_file;
    with_customer(api, |customer_id| {
        api.create_liveness(customer_id)?;
        let record = env.resources.binary_file(record_path)?;
        match api.create_liveness_record(customer_id, &record)? {
            Outcome::Accepted(_) => {
                info!("Customer liveness record for Magnifeye Liveness was successfully created.");
            }
            Outcome::Rejected {
                code: LivenessRecordErrorCode::InvalidData,
                ..
            } => error!(
                "Invalid data. Magnifeye Liveness can not be evaluated on this liveness record."
            ),
            Outcome::Rejected {
                code, ..
            } => error!("Liveness record was rejected with code {code}"),
        }
        evaluate(api, customer_id, LivenessType::MagnifeyeLiveness)
    })
}
