// crates/dis-samples/src/scenarios/documents.rs
// ============================================================================
// Module: Document Scenarios
// Description: Document OCR, page quality and document level validation.
// Purpose: Exercise the document sub-resource without a selfie or liveness.
// Dependencies: dis-client, serde_json, tracing
// ============================================================================

//! ## Overview
//! Each scenario creates a customer, creates its document with a source or
//! advice restriction, uploads pages and reads the result back. Level
//! validation classifies the uploaded document with [`is_level0`] and
//! [`is_level1`].
//!
//! ## Levels
//! - Level 0: the service does not recognise the document at all.
//! - Level 1: only the machine readable zone could be read.
//! - Level 2: the document type is fully classified.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::CustomerOnboarding;
use dis_client::Outcome;
use dis_client::model::CreateDocumentPageRequest;
use dis_client::model::CreateDocumentPageResponse;
use dis_client::model::CreateDocumentRequest;
use dis_client::model::Customer;
use dis_client::model::CustomerDocument;
use dis_client::model::DocumentSource;
use dis_client::model::DocumentType;
use dis_client::model::Image;
use dis_client::model::SupportLevel;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::cleanup::with_customer;
use crate::error::ScenarioError;
use crate::harness::SampleEnv;
use crate::resources::DocumentLevel;
use crate::scenarios::onboarding::ADVICE_COUNTRY;
use crate::scenarios::onboarding::BACK_PAGE_IMAGE;
use crate::scenarios::onboarding::FRONT_PAGE_IMAGE;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Document type advised for classification.
const ADVICE_TYPE: &str = "identity-card";
/// Page type checked by the quality scenario.
const FRONT_PAGE: &str = "front";

// ============================================================================
// SECTION: Level Classification
// ============================================================================

/// Returns `true` when no identifying field of the type is set.
fn type_not_recognized(document_type: &DocumentType) -> bool {
    document_type.type_name.is_none()
        && document_type.edition.is_none()
        && document_type.country.is_none()
        && document_type.machine_readable_travel_document.is_none()
}

/// Returns `true` when the uploaded document is level 0.
///
/// Both pages must carry the not-recognised warning and the customer must
/// have a document whose type is absent, empty or not supported.
#[must_use]
pub fn is_level0(
    front: &CreateDocumentPageResponse,
    back: &CreateDocumentPageResponse,
    customer: Option<&Customer>,
) -> bool {
    if !front.has_not_recognized_warning() || !back.has_not_recognized_warning() {
        return false;
    }
    let Some(document) = customer.and_then(|customer| customer.document.as_ref()) else {
        return false;
    };
    match &document.document_type {
        None => true,
        Some(document_type) => {
            type_not_recognized(document_type)
                || document_type.support_level == Some(SupportLevel::NotSupported)
        }
    }
}

/// Returns `true` when the uploaded document is level 1: an MRZ was read and
/// the type carries nothing but the travel document class.
#[must_use]
pub fn is_level1(document: Option<&CustomerDocument>) -> bool {
    let Some(document) = document else {
        return false;
    };
    document.mrz.is_some()
        && document.document_type.as_ref().is_some_and(|document_type| {
            document_type.type_name.is_none()
                && document_type.edition.is_none()
                && document_type.country.is_none()
                && document_type.machine_readable_travel_document.is_some()
        })
}

// ============================================================================
// SECTION: Steps
// ============================================================================

/// Uploads a page; a rejection stops the scenario.
fn upload_page<A: CustomerOnboarding>(
    api: &A,
    customer_id: &str,
    image: Image,
) -> Result<CreateDocumentPageResponse, ScenarioError> {
    match api.create_document_page(customer_id, &CreateDocumentPageRequest {
        image,
    })? {
        Outcome::Accepted(page) => Ok(page),
        Outcome::Rejected {
            code, ..
        } => {
            error!("{code}");
            Err(ScenarioError::rejected(code))
        }
    }
}

/// Uploads a page whose rejection is only logged.
fn upload_page_lenient<A: CustomerOnboarding>(
    api: &A,
    customer_id: &str,
    image: Image,
) -> Result<CreateDocumentPageResponse, ScenarioError> {
    let outcome = api.create_document_page(customer_id, &CreateDocumentPageRequest {
        image,
    })?;
    if let Outcome::Rejected {
        code, ..
    } = &outcome
    {
        warn!("Document page was rejected with code {code}");
    }
    Ok(outcome.into_response())
}

/// Reads the customer and logs it as JSON.
fn log_customer<A: CustomerOnboarding>(
    api: &A,
    customer_id: &str,
) -> Result<Option<Customer>, ScenarioError> {
    let customer = api.get_customer(customer_id)?.customer;
    match &customer {
        Some(customer) => match serde_json::to_string(customer) {
            Ok(json) => info!("Customer: {json}"),
            Err(err) => warn!("Customer could not be rendered: {err}"),
        },
        None => info!("Customer has no onboarded data"),
    }
    Ok(customer)
}

// ============================================================================
// SECTION: Scenarios
// ============================================================================

/// Reads only the machine readable zone of the back page.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails or the page is rejected.
pub fn ocr_mrz<A: CustomerOnboarding>(api: &A, env: &SampleEnv) -> Result<(), ScenarioError> {
    with_customer(api, |customer_id| {
        api.create_document(
            customer_id,
            &CreateDocumentRequest::with_sources(vec![DocumentSource::Mrz]),
        )?;
        let back = env.resources.document_image(None, BACK_PAGE_IMAGE)?;
        upload_page(api, customer_id, back)?;
        log_customer(api, customer_id).map(|_| ())
    })
}

/// Reads a document classified with a country and type advice.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails or the page is rejected.
pub fn ocr_with_advice<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    with_customer(api, |customer_id| {
        api.create_document(
            customer_id,
            &CreateDocumentRequest::with_classification(&[ADVICE_COUNTRY], &[ADVICE_TYPE]),
        )?;
        let front = env.resources.document_image(Some(DocumentLevel::L2), FRONT_PAGE_IMAGE)?;
        upload_page(api, customer_id, front)?;
        log_customer(api, customer_id).map(|_| ())
    })
}

/// Uploads the front page and reports its quality.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails, the page is rejected, or the
/// page quality is not fine.
pub fn page_quality<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    with_customer(api, |customer_id| {
        api.create_document(customer_id, &CreateDocumentRequest::default())?;
        let front = env.resources.document_image(None, FRONT_PAGE_IMAGE)?;
        upload_page(api, customer_id, front)?;
        let quality = api.document_page_quality(customer_id, FRONT_PAGE)?;
        if quality.fine {
            info!("Document processed successfully.");
            for warning in &quality.warnings {
                warn!("Document quality warning: {warning}");
            }
            return Ok(());
        }
        error!("Document processing failed with errors.");
        for issue in &quality.issues {
            error!("Document quality issue: {issue}");
        }
        let issues = quality.issues.join(", ");
        Err(ScenarioError::Rejected(format!("document quality issues: {issues}")))
    })
}

/// Uploads a level 0 document and reports whether it was read as level 0.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails or an image is missing.
pub fn l0_validation<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    with_customer(api, |customer_id| {
        api.create_document(customer_id, &CreateDocumentRequest::default())?;
        let front = env.resources.document_image(Some(DocumentLevel::L0), FRONT_PAGE_IMAGE)?;
        let front = upload_page_lenient(api, customer_id, front)?;
        let back = env.resources.document_image(Some(DocumentLevel::L0), BACK_PAGE_IMAGE)?;
        let back = upload_page_lenient(api, customer_id, back)?;
        let customer = api.get_customer(customer_id)?.customer;
        if is_level0(&front, &back, customer.as_ref()) {
            info!("The uploaded document Level is 0.");
        } else {
            warn!("The uploaded document other than Level 0.");
        }
        Ok(())
    })
}

/// Uploads a level 1 document and reports whether it was read as level 1.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails or an image is missing.
pub fn l1_validation<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    with_customer(api, |customer_id| {
        api.create_document(customer_id, &CreateDocumentRequest::default())?;
        let front = env.resources.document_image(Some(DocumentLevel::L1), FRONT_PAGE_IMAGE)?;
        upload_page_lenient(api, customer_id, front)?;
        let back = env.resources.document_image(Some(DocumentLevel::L1), BACK_PAGE_IMAGE)?;
        upload_page_lenient(api, customer_id, back)?;
        let customer = api.get_customer(customer_id)?.customer;
        let document = customer.as_ref().and_then(|customer| customer.document.as_ref());
        if is_level1(document) {
            info!("The uploaded document Level is 1.");
        } else {
            info!("The uploaded document other than Level 1.");
        }
        Ok(())
    })
}
