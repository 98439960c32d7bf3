// crates/dis-samples/src/cleanup.rs
// ============================================================================
// Module: Scoped Resource Cleanup
// Description: Create-use-delete helpers for customers, faces and sessions.
// Purpose: Delete every remote resource exactly once on every path.
// Dependencies: dis-client, tracing
// ============================================================================

//! ## Overview
//! Each helper creates a remote resource, runs the body with its id, then
//! deletes the resource whatever the body returned. A body error takes
//! precedence over a delete error; a delete error after a successful body is
//! returned to the caller. A resource whose creation failed is never deleted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::CustomerOnboarding;
use dis_client::FaceOperations;
use dis_client::Outcome;
use dis_client::SessionManagement;
use dis_client::model::CreateFaceRequest;
use dis_client::model::CreateFaceResponse;
use dis_client::model::CreateSessionRequest;
use tracing::info;
use tracing::warn;

use crate::error::ScenarioError;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Runs `body` with a fresh customer and deletes it afterwards.
///
/// # Errors
///
/// Returns the creation error, the body error, or the delete error, in that
/// order of precedence.
pub fn with_customer<A, T, F>(api: &A, body: F) -> Result<T, ScenarioError>
where
    A: CustomerOnboarding,
    F: FnOnce(&str) -> Result<T, ScenarioError>,
{
    let customer_id = api.create_customer()?.id;
    info!("Customer created with id: {customer_id}");
    let result = body(&customer_id);
    info!("Deleting customer with id: {customer_id}");
    let deleted = api.delete_customer(&customer_id);
    finish(result, deleted.map_err(ScenarioError::from))
}

/// Detects a face, runs `body` with the detection, and deletes the face.
///
/// A rejected detection (no face found) or a detection without an id is an
/// error and nothing is deleted.
///
/// # Errors
///
/// Returns the detection error, the body error, or the delete error, in that
/// order of precedence.
pub fn with_face<A, T, F>(
    api: &A,
    request: &CreateFaceRequest,
    body: F,
) -> Result<T, ScenarioError>
where
    A: FaceOperations,
    F: FnOnce(&str, &CreateFaceResponse) -> Result<T, ScenarioError>,
{
    let detection = match api.detect(request)? {
        Outcome::Accepted(detection) => detection,
        Outcome::Rejected {
            code, ..
        } => return Err(ScenarioError::rejected(code)),
    };
    let Some(face_id) = detection.id.clone() else {
        return Err(ScenarioError::MissingField("face id".to_string()));
    };
    info!("Face detected with id: {face_id}");
    let result = body(&face_id, &detection);
    let deleted = api.delete_face(&face_id);
    if deleted.is_ok() {
        info!("Face deleted with id: {face_id}");
    }
    finish(result, deleted.map_err(ScenarioError::from))
}

/// Creates a session, runs `body` with a session-scoped client, and deletes
/// the session with the original client.
///
/// # Errors
///
/// Returns the creation error, the body error, or the delete error, in that
/// order of precedence.
pub fn with_session<A, T, F>(api: &A, timeout_secs: u32, body: F) -> Result<T, ScenarioError>
where
    A: SessionManagement,
    F: FnOnce(&A) -> Result<T, ScenarioError>,
{
    let session = api.create_session(&CreateSessionRequest {
        timeout: timeout_secs,
    })?;
    info!("Session created");
    let scoped = api.with_session_token(&session.token);
    let result = body(&scoped);
    info!("Deleting session");
    let deleted = api.delete_session(&session.token);
    finish(result, deleted.map_err(ScenarioError::from))
}

/// Combines a body result with its cleanup result.
fn finish<T>(
    result: Result<T, ScenarioError>,
    cleanup: Result<(), ScenarioError>,
) -> Result<T, ScenarioError> {
    match (result, cleanup) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(err)) | (Err(err), Ok(())) => Err(err),
        (Err(err), Err(cleanup_err)) => {
            warn!(error = %cleanup_err, "cleanup failed after scenario error");
            Err(err)
        }
    }
}
