// crates/dis-samples/src/scenarios/onboarding.rs
// ============================================================================
// Module: Onboarding Scenarios
// Description: Customer onboarding with selfie, liveness and document pages.
// Purpose: Demonstrate the full onboarding flow and its session and
//          Magnifeye variants.
// Dependencies: dis-client, serde_json, tracing
// ============================================================================

//! ## Overview
//! Onboarding stops at the first rejected step. Each step is a small helper
//! shared with the inspection and document scenarios. Front page, back page
//! and portrait crops are saved as PNG once the document has a portrait.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::CustomerOnboarding;
use dis_client::Outcome;
use dis_client::model::Assertion;
use dis_client::model::CreateDocumentPageRequest;
use dis_client::model::CreateDocumentPageResponse;
use dis_client::model::CreateDocumentRequest;
use dis_client::model::CreateLivenessSelfieRequest;
use dis_client::model::CreateSelfieRequest;
use dis_client::model::CropSize;
use dis_client::model::Customer;
use dis_client::model::EvaluateLivenessRequest;
use dis_client::model::Image;
use dis_client::model::LivenessType;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::cleanup::with_customer;
use crate::cleanup::with_session;
use crate::error::ScenarioError;
use crate::harness::DisApi;
use crate::harness::SampleEnv;
use crate::output::ONBOARDING_DIR;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Country advised for document classification.
pub(crate) const ADVICE_COUNTRY: &str = "INO";
/// Session lifetime of the session variant, in seconds.
const SESSION_TIMEOUT_SECS: u32 = 600;
/// Bundled selfie id.
pub(crate) const SELFIE_IMAGE: &str = "face";
/// Bundled front page id.
pub(crate) const FRONT_PAGE_IMAGE: &str = "document-front";
/// Bundled back page id.
pub(crate) const BACK_PAGE_IMAGE: &str = "document-back";
/// Message logged when the passive liveness selfie carries warnings.
const LOW_QUALITY_LIVENESS_SELFIE: &str =
    "Liveness selfie does not meet quality required for accurate passive liveness evaluation.";
/// Message logged when the document has no portrait.
pub(crate) const MISSING_PORTRAIT: &str = "Face not found on document portrait";

// ============================================================================
// SECTION: Steps
// ============================================================================

/// Sets the customer selfie. A rejection stops the flow.
pub(crate) fn create_selfie<A: CustomerOnboarding>(
    api: &A,
    customer_id: &str,
    request: &CreateSelfieRequest,
) -> Result<(), ScenarioError> {
    match api.create_selfie(customer_id, request)? {
        Outcome::Accepted(response) => {
            for warning in &response.warnings {
                warn!("Customer selfie warning: {warning}");
            }
            info!("Face detected on selfie.");
            Ok(())
        }
        Outcome::Rejected {
            code, ..
        } => Err(ScenarioError::rejected(code)),
    }
}

/// Uploads a passive liveness selfie and evaluates passive liveness.
///
/// A selfie carrying warnings is not accurate enough and stops the flow.
pub(crate) fn passive_liveness<A: CustomerOnboarding>(
    api: &A,
    customer_id: &str,
    image: Image,
) -> Result<f64, ScenarioError> {
    api.create_liveness(customer_id)?;
    let request = CreateLivenessSelfieRequest {
        image,
        assertion: Assertion::None,
    };
    match api.create_liveness_selfie(customer_id, &request)? {
        Outcome::Accepted(response) if !response.warnings.is_empty() => {
            for warning in &response.warnings {
                warn!("Liveness selfie warning: {warning}");
            }
            return Err(ScenarioError::Rejected(LOW_QUALITY_LIVENESS_SELFIE.to_string()));
        }
        Outcome::Accepted(_) => {}
        Outcome::Rejected {
            code, ..
        } => return Err(ScenarioError::rejected(code)),
    }
    let evaluation = api
        .evaluate_liveness(customer_id, &EvaluateLivenessRequest {
            liveness_type: LivenessType::PassiveLiveness,
        })?
        .accepted()
        .map_err(ScenarioError::rejected)?;
    let score =
        evaluation.score.ok_or_else(|| ScenarioError::MissingField("score".to_string()))?;
    info!("Passive liveness score: {score}");
    Ok(score)
}

/// Uploads one document page and requires a classified document type.
pub(crate) fn create_document_page<A: CustomerOnboarding>(
    api: &A,
    customer_id: &str,
    image: Image,
) -> Result<CreateDocumentPageResponse, ScenarioError> {
    let page = api
        .create_document_page(customer_id, &CreateDocumentPageRequest {
            image,
        })?
        .accepted()
        .map_err(ScenarioError::rejected)?;
    let Some(document_type) = page.document_type.as_ref() else {
        return Err(ScenarioError::MissingField("documentType".to_string()));
    };
    info!(
        "Document classified: {} page type: {}",
        document_type.type_name.as_deref().unwrap_or("unknown"),
        page.page_type.as_deref().unwrap_or("unknown")
    );
    Ok(page)
}

/// Reads the customer and requires a document portrait.
pub(crate) fn require_portrait<A: CustomerOnboarding>(
    api: &A,
    customer_id: &str,
) -> Result<Customer, ScenarioError> {
    let customer = api.get_customer(customer_id)?.customer;
    match customer {
        Some(customer)
            if customer.document.as_ref().and_then(|doc| doc.portrait_link()).is_some() =>
        {
            Ok(customer)
        }
        _ => Err(ScenarioError::Rejected(MISSING_PORTRAIT.to_string())),
    }
}

/// Creates the document with country advice, uploads both pages, checks the
/// portrait, logs the customer and saves the document images.
fn onboard_document<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
    customer_id: &str,
) -> Result<(), ScenarioError> {
    api.create_document(
        customer_id,
        &CreateDocumentRequest::with_classification(&[ADVICE_COUNTRY], &[]),
    )?;
    create_document_page(api, customer_id, env.resources.document_image(None, FRONT_PAGE_IMAGE)?)?;
    create_document_page(api, customer_id, env.resources.document_image(None, BACK_PAGE_IMAGE)?)?;
    let customer = require_portrait(api, customer_id)?;
    match serde_json::to_string(&customer) {
        Ok(json) => info!("Customer: {json}"),
        Err(err) => error!("Customer could not be serialized: {err}"),
    }
    save_document_images(api, env, customer_id)
}

/// Saves front page, back page and portrait crops.
fn save_document_images<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
    customer_id: &str,
) -> Result<(), ScenarioError> {
    let front = api.document_page_crop(customer_id, "front", CropSize::default())?;
    env.output.save_png(ONBOARDING_DIR, "document-front.png", &front.data)?;
    let back = api.document_page_crop(customer_id, "back", CropSize::default())?;
    env.output.save_png(ONBOARDING_DIR, "document-back.png", &back.data)?;
    let portrait = api.document_portrait(customer_id, CropSize::default())?;
    env.output.save_png(ONBOARDING_DIR, "portrait.png", &portrait.data)?;
    Ok(())
}

/// Runs the selfie, passive liveness and document steps for one customer.
fn onboard<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
    customer_id: &str,
) -> Result<(), ScenarioError> {
    let selfie = env.resources.face_image(SELFIE_IMAGE)?;
    create_selfie(api, customer_id, &CreateSelfieRequest::from_image(selfie.clone()))?;
    passive_liveness(api, customer_id, selfie)?;
    onboard_document(api, env, customer_id)
}

// ============================================================================
// SECTION: Scenarios
// ============================================================================

/// Onboards a customer from the bundled selfie and document pages.
///
/// # Errors
///
/// Returns [`ScenarioError`] at the first failed or rejected step.
pub fn customer_onboarding<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    with_customer(api, |customer_id| onboard(api, env, customer_id))
}

/// Runs the onboarding flow on a session-scoped client, deleting the
/// customer and then the session.
///
/// # Errors
///
/// Returns [`ScenarioError`] at the first failed or rejected step.
pub fn customer_onboarding_session<A: DisApi>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    with_session(api, SESSION_TIMEOUT_SECS, |scoped| {
        with_customer(scoped, |customer_id| onboard(scoped, env, customer_id))
    })
}

/// Onboards a customer from a Magnifeye liveness record: the record is
/// evaluated and its selfie becomes the customer selfie.
///
/// # Errors
///
/// Returns [`ScenarioError`] at the first failed or rejected step.
pub fn customer_onboarding_magnifeye<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    let record_path = &env.config.liveness_records.magnifeye_liveness.binary_file;
    with_customer(api, |customer_id| {
        api.create_liveness(customer_id)?;
        let record = env.resources.binary_file(record_path)?;
        let created = api
            .create_liveness_record(customer_id, &record)?
            .accepted()
            .map_err(ScenarioError::rejected)?;
        info!("Customer liveness record for Magnifeye Liveness was successfully created.");

        let evaluation = api
            .evaluate_liveness(customer_id, &EvaluateLivenessRequest {
                liveness_type: LivenessType::MagnifeyeLiveness,
            })?
            .accepted()
            .map_err(ScenarioError::rejected)?;
        let score =
            evaluation.score.ok_or_else(|| ScenarioError::MissingField("score".to_string()))?;
        info!("Customer Magnifeye Liveness score: {score}");

        let selfie_link = created
            .links
            .and_then(|links| links.selfie)
            .ok_or_else(|| ScenarioError::MissingField("links.selfie".to_string()))?;
        create_selfie(api, customer_id, &CreateSelfieRequest::from_liveness_selfie(selfie_link))?;
        info!("Successfully created customer selfie from Magnifeye liveness selfie.");

        onboard_document(api, env, customer_id)
    })
}
