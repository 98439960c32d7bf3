// crates/dis-samples/src/scenarios/similarity.rs
// ============================================================================
// Module: Similarity Scenarios
// Description: Face-to-face and face-to-template similarity checks.
// Purpose: Compare a probe face with a reference face or template.
// Dependencies: dis-client, tracing
// ============================================================================

//! ## Overview
//! The probe face comes from the configured probe URL. The reference is
//! either a second detected face or that face's template. Both faces are
//! deleted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::FaceOperations;
use dis_client::model::FaceSimilarityRequest;
use tracing::info;

use super::faces::detect_by_url;
use crate::cleanup::with_face;
use crate::error::ScenarioError;
use crate::harness::SampleEnv;

// ============================================================================
// SECTION: Scenarios
// ============================================================================

/// Compares the configured probe face with the configured reference face,
/// referencing the latter by its link.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails or the reference has no link.
pub fn image_to_image<A: FaceOperations>(api: &A, env: &SampleEnv) -> Result<(), ScenarioError> {
    let similarity = &env.config.similarity;
    with_face(api, &detect_by_url(&similarity.probe.example_image_url), |probe_id, _| {
        with_face(api, &detect_by_url(&similarity.reference.example_image_url), |_, reference| {
            let link = reference
                .links
                .as_ref()
                .and_then(|links| links.self_link.clone())
                .ok_or_else(|| ScenarioError::MissingField("links.self".to_string()))?;
            let response =
                api.check_similarity(probe_id, &FaceSimilarityRequest::with_reference_face(link))?;
            info!("Faces similarity score: {}", response.score);
            Ok(())
        })
    })
}

/// Compares the example face with a template created from a second
/// detection of the same image.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails.
pub fn image_to_template<A: FaceOperations>(
    api: &A,
    env: &SampleEnv,
) -> Result<(), ScenarioError> {
    let request = detect_by_url(&env.config.example_image_url);
    with_face(api, &request, |probe_id, _| {
        let template = with_face(api, &request, |reference_id, _| {
            let template = api.create_template(reference_id)?;
            if let Some(version) = template.version.as_deref() {
                info!("Face template created with version: {version}");
            }
            Ok(template.data)
        })?;
        let response = api
            .check_similarity(probe_id, &FaceSimilarityRequest::with_reference_template(template))?;
        info!("Face to template similarity score: {}", response.score);
        Ok(())
    })
}
