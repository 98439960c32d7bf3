// crates/dis-samples/src/scenarios/inspect.rs
// ============================================================================
// Module: Inspection Scenario
// Description: Customer inspect and document inspect findings.
// Purpose: Prepare a customer and report cross-check findings.
// Dependencies: dis-client, tracing
// ============================================================================

//! ## Overview
//! Preparation uploads a selfie, a passive liveness selfie and both document
//! pages. Rejections during preparation are logged and preparation goes on;
//! the inspections then report whatever the service could cross-check.
//! Findings are computed as plain messages so they can be checked without a
//! service.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::CustomerOnboarding;
use dis_client::model::CreateDocumentRequest;
use dis_client::model::CreateSelfieRequest;
use dis_client::model::CustomerInspectResponse;
use dis_client::model::DocumentInspectResponse;
use dis_client::model::GenderConsistency;
use tracing::error;
use tracing::info;

use super::onboarding::ADVICE_COUNTRY;
use super::onboarding::BACK_PAGE_IMAGE;
use super::onboarding::FRONT_PAGE_IMAGE;
use super::onboarding::SELFIE_IMAGE;
use super::onboarding::create_document_page;
use super::onboarding::create_selfie;
use super::onboarding::passive_liveness;
use super::onboarding::require_portrait;
use crate::cleanup::with_customer;
use crate::error::ScenarioError;
use crate::harness::SampleEnv;

// ============================================================================
// SECTION: Findings
// ============================================================================

/// Returns `true` when any known gender source disagrees.
fn gender_inconsistent(consistency: &GenderConsistency) -> bool {
    [consistency.document_portrait, consistency.viz, consistency.mrz].contains(&Some(false))
}

/// Describes the customer inspection.
#[must_use]
pub fn customer_findings(response: &CustomerInspectResponse) -> Vec<String> {
    let mut findings = Vec::new();
    let Some(selfie) = response.selfie_inspection.as_ref() else {
        return findings;
    };
    if let Some(similarity) = selfie.similarity_with {
        if let Some(similar) = similarity.document_portrait {
            findings.push(if similar {
                "Document Portrait is similar to Selfie Photo.".to_string()
            } else {
                "Document Portrait is NOT similar to Selfie Photo!".to_string()
            });
        }
        if let Some(similar) = similarity.liveness_selfies {
            findings.push(if similar {
                "Liveness Selfie is similar to Selfie Photo.".to_string()
            } else {
                "Liveness Selfie is NOT similar to Selfie Photo!".to_string()
            });
        }
    }
    if let Some(consistency) = selfie.gender_consistency.as_ref() {
        findings.push(format!(
            "Gender estimated from selfie is: {}",
            selfie.gender_estimate.as_deref().unwrap_or("unknown")
        ));
        if gender_inconsistent(consistency) {
            findings
                .push("Inconsistent gender across customer data has been identified!".to_string());
        }
    }
    findings
}

/// Describes the document inspection.
#[must_use]
pub fn document_findings(response: &DocumentInspectResponse) -> Vec<String> {
    let mut findings = Vec::new();
    if let Some(expired) = response.expired {
        let finding = if expired { "Document is expired!" } else { "Document is valid." };
        findings.push(finding.to_string());
    }
    if let Some(mrz) = response.mrz_inspection {
        let finding = if mrz.valid {
            "Document MRZ is valid."
        } else {
            "Document has invalid MRZ checksums!"
        };
        findings.push(finding.to_string());
    }
    if let Some(portrait) = response.portrait_inspection.as_ref() {
        findings.push(format!(
            "Gender estimated from document is: {}",
            portrait.gender_estimate.as_deref().unwrap_or("unknown")
        ));
        if portrait.gender_consistency.as_ref().is_some_and(gender_inconsistent) {
            findings
                .push("Inconsistent gender across document data has been identified!".to_string());
        }
    }
    let text = response
        .visual_zone_inspection
        .as_ref()
        .and_then(|inspection| inspection.text_consistency.as_ref());
    if let Some(text) = text
        && !text.consistent
    {
        findings.push("Document has some inconsistent text on Visual Zone!".to_string());
        if let Some(with) = text.consistency_with.as_ref() {
            for field in with.mrz.iter().flat_map(|mrz| &mrz.inconsistent_texts) {
                findings.push(format!(
                    "Document has inconsistent text on Visual Zone and MRZ in fields: {field}"
                ));
            }
            for field in with.barcodes.iter().flat_map(|barcodes| &barcodes.inconsistent_texts) {
                findings.push(format!(
                    "Document has inconsistent text on Visual Zone and Barcode in fields: {field}"
                ));
            }
        }
    }
    for (page, tampering) in response.page_tampering.iter().flatten() {
        if tampering.color_profile_change_detected == Some(true) {
            findings.push(format!(
                "Black and white copy of real document has been identified on page: {page}!"
            ));
        }
        if tampering.looks_like_screenshot == Some(true) {
            findings.push(format!("Screen Attack has been identified on page: {page}!"));
        }
    }
    findings
}

// ============================================================================
// SECTION: Scenario
// ============================================================================

/// Logs a preparation rejection and lets preparation continue. Transport and
/// local failures still stop the scenario.
fn tolerate<T>(step: Result<T, ScenarioError>) -> Result<(), ScenarioError> {
    match step {
        Ok(_) => Ok(()),
        Err(err @ (ScenarioError::Rejected(_) | ScenarioError::MissingField(_))) => {
            error!("{err}");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Uploads everything the inspections cross-check.
fn prepare<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
    customer_id: &str,
) -> Result<(), ScenarioError> {
    info!("Data preparation started.");
    let selfie = env.resources.face_image(SELFIE_IMAGE)?;
    tolerate(create_selfie(api, customer_id, &CreateSelfieRequest::from_image(selfie.clone())))?;
    tolerate(passive_liveness(api, customer_id, selfie))?;
    api.create_document(
        customer_id,
        &CreateDocumentRequest::with_classification(&[ADVICE_COUNTRY], &[]),
    )?;
    let front = env.resources.document_image(None, FRONT_PAGE_IMAGE)?;
    tolerate(create_document_page(api, customer_id, front))?;
    let back = env.resources.document_image(None, BACK_PAGE_IMAGE)?;
    tolerate(create_document_page(api, customer_id, back))?;
    tolerate(require_portrait(api, customer_id))?;
    info!("Data preparation ended.");
    Ok(())
}

/// Prepares a customer and logs customer and document inspection findings.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails.
pub fn customer_inspect<A: CustomerOnboarding>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    with_customer(api, |customer_id| {
        prepare(api, env, customer_id)?;
        info!("Customer Inspect info below:");
        for finding in customer_findings(&api.inspect(customer_id)?) {
            info!("{finding}");
        }
        info!("Document Inspect info below:");
        for finding in document_findings(&api.inspect_document(customer_id)?) {
            info!("{finding}");
        }
        Ok(())
    })
}
