// crates/dis-samples/tests/cleanup.rs
// ============================================================================
// Module: Cleanup Helper Tests
// Description: Scoped creation and deletion of customers, faces and sessions.
// Purpose: Verify every created resource is deleted exactly once.
// ============================================================================

//! ## Overview
//! Drives the cleanup helpers against the in-memory DIS double.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use dis_client::model::CreateFaceRequest;
use dis_client::model::Image;
use dis_samples::ScenarioError;
use dis_samples::with_customer;
use dis_samples::with_face;
use dis_samples::with_session;

use crate::common::Call;
use crate::common::FakeApi;
use crate::common::Script;

fn face_request() -> CreateFaceRequest {
    CreateFaceRequest {
        image: Image::from_url("https://images.example.com/face.jpeg"),
    }
}

#[test]
fn customer_is_deleted_once_after_success() {
    let api = FakeApi::new(Script::default());
    let id = with_customer(&api, |customer_id| Ok(customer_id.to_string())).unwrap();
    assert_eq!(id, "customer-1");
    assert_eq!(api.calls(), vec!["create_customer", "delete_customer"]);
}

#[test]
fn customer_is_deleted_once_after_body_error() {
    let api = FakeApi::new(Script::default());
    let result: Result<(), ScenarioError> =
        with_customer(&api, |_| Err(ScenarioError::Rejected("stop".to_string())));
    assert!(matches!(result, Err(ScenarioError::Rejected(message)) if message == "stop"));
    assert_eq!(api.count("delete_customer"), 1);
}

#[test]
fn failed_creation_deletes_nothing_and_skips_body() {
    let api = FakeApi::new(Script {
        fail_create_customer: true,
        ..Script::default()
    });
    let mut ran = false;
    let result = with_customer(&api, |_| {
        ran = true;
        Ok(())
    });
    assert!(matches!(result, Err(ScenarioError::Api(err)) if err.code() == 500));
    assert!(!ran);
    assert_eq!(api.calls(), vec!["create_customer"]);
}

#[test]
fn delete_failure_surfaces_after_successful_body() {
    let api = FakeApi::new(Script {
        fail_delete_customer: true,
        ..Script::default()
    });
    let result = with_customer(&api, |_| Ok(()));
    assert!(matches!(result, Err(ScenarioError::Api(_))));
}

#[test]
fn body_error_wins_over_delete_failure() {
    let api = FakeApi::new(Script {
        fail_delete_customer: true,
        ..Script::default()
    });
    let result: Result<(), ScenarioError> =
        with_customer(&api, |_| Err(ScenarioError::MissingField("score".to_string())));
    assert!(matches!(result, Err(ScenarioError::MissingField(field)) if field == "score"));
}

#[test]
fn face_is_deleted_after_body() {
    let api = FakeApi::new(Script::default());
    with_face(&api, &face_request(), |face_id, detection| {
        assert_eq!(face_id, "face-1");
        assert!(detection.detection.is_some());
        Ok(())
    })
    .unwrap();
    assert_eq!(api.calls(), vec!["detect", "delete_face"]);
}

#[test]
fn rejected_detection_deletes_nothing() {
    let api = FakeApi::new(Script {
        reject_face: true,
        ..Script::default()
    });
    let result = with_face(&api, &face_request(), |_, _| Ok(()));
    assert!(
        matches!(result, Err(ScenarioError::Rejected(code)) if code == "NO_FACE_DETECTED")
    );
    assert_eq!(api.calls(), vec!["detect"]);
}

#[test]
fn session_outlives_the_customer_created_inside_it() {
    let api = FakeApi::new(Script::default());
    with_session(&api, 600, |scoped| with_customer(scoped, |_| Ok(()))).unwrap();
    let session = Some("session-1".to_string());
    assert_eq!(api.call_log(), vec![
        Call {
            name: "create_session".to_string(),
            session: None,
        },
        Call {
            name: "create_customer".to_string(),
            session: session.clone(),
        },
        Call {
            name: "delete_customer".to_string(),
            session,
        },
        Call {
            name: "delete_session".to_string(),
            session: None,
        },
    ]);
}
