// crates/dis-samples/tests/scenarios.rs
// ============================================================================
// Module: Scenario Flow Tests
// Description: Scenario call sequences against the in-memory DIS double.
// Purpose: Verify stop and continue rules and the saved output.
// ============================================================================

//! ## Overview
//! Each test scripts the double, runs one scenario and checks the calls it
//! made and what it left on disk.

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

use std::collections::BTreeMap;
use std::collections::VecDeque;

use dis_client::model::DocumentMetadata;
use dis_client::model::DocumentMetadataResponse;
use dis_client::model::DocumentPageQuality;
use dis_client::model::LivenessEvaluationErrorCode;
use dis_client::model::LivenessSelfieErrorCode;
use dis_client::model::LivenessSelfieWarning;
use dis_client::model::MetadataDocumentType;
use dis_client::model::PageMetadata;
use dis_samples::SampleRunner;
use dis_samples::ScenarioError;
use dis_samples::ScenarioKind;
use dis_samples::ScenarioReport;
use dis_samples::output::FACE_CROPS_DIR;
use dis_samples::output::ONBOARDING_DIR;
use serde_json::json;

use crate::common::FakeApi;
use crate::common::Script;
use crate::common::test_env;

fn run(kind: ScenarioKind, script: Script) -> (FakeApi, Result<(), ScenarioError>) {
    let api = FakeApi::new(script);
    let env = test_env();
    let result = kind.run(&api, &env.env);
    (api, result)
}

#[test]
fn onboarding_runs_every_step_and_saves_document_images() {
    let api = FakeApi::new(Script::default());
    let env = test_env();
    ScenarioKind::CustomerOnboarding.run(&api, &env.env).unwrap();
    assert_eq!(api.calls(), vec![
        "create_customer",
        "create_selfie",
        "create_liveness",
        "create_liveness_selfie",
        "evaluate_liveness",
        "create_document",
        "create_document_page",
        "create_document_page",
        "get_customer",
        "document_page_crop",
        "document_page_crop",
        "document_portrait",
        "delete_customer",
    ]);
    let folder = env.output_dir().join(ONBOARDING_DIR);
    for name in ["document-front.png", "document-back.png", "portrait.png"] {
        assert!(folder.join(name).is_file(), "{name} saved");
    }
}

#[test]
fn onboarding_stops_at_rejected_selfie_but_deletes_customer() {
    let (api, result) = run(ScenarioKind::CustomerOnboarding, Script {
        reject_selfie: true,
        ..Script::default()
    });
    assert!(matches!(result, Err(ScenarioError::Rejected(_))));
    assert_eq!(api.calls(), vec!["create_customer", "create_selfie", "delete_customer"]);
}

#[test]
fn onboarding_stops_when_liveness_selfie_has_warnings() {
    let (api, result) = run(ScenarioKind::CustomerOnboarding, Script {
        liveness_selfie_warnings: vec![LivenessSelfieWarning::LowQuality],
        ..Script::default()
    });
    assert!(matches!(result, Err(ScenarioError::Rejected(_))));
    assert_eq!(api.count("evaluate_liveness"), 0);
    assert_eq!(api.count("delete_customer"), 1);
}

#[test]
fn onboarding_requires_a_document_portrait() {
    let customer = serde_json::from_value(json!({ "document": {} })).unwrap();
    let (api, result) = run(ScenarioKind::CustomerOnboarding, Script {
        customer: Some(customer),
        ..Script::default()
    });
    assert!(
        matches!(result, Err(ScenarioError::Rejected(message)) if message.contains("portrait"))
    );
    assert_eq!(api.count("document_portrait"), 0);
    assert_eq!(api.count("delete_customer"), 1);
}

#[test]
fn session_onboarding_scopes_customer_calls_to_the_session() {
    let (api, result) = run(ScenarioKind::CustomerOnboardingSession, Script::default());
    result.unwrap();
    let log = api.call_log();
    assert_eq!(log.first().map(|call| call.name.as_str()), Some("create_session"));
    assert_eq!(log.last().map(|call| call.name.as_str()), Some("delete_session"));
    let inner = &log[1..log.len() - 1];
    assert!(inner.iter().all(|call| call.session.as_deref() == Some("session-1")));
    assert_eq!(inner.last().map(|call| call.name.as_str()), Some("delete_customer"));
}

#[test]
fn magnifeye_onboarding_uses_the_record_selfie() {
    let (api, result) = run(ScenarioKind::CustomerOnboardingMagnifeye, Script::default());
    result.unwrap();
    let calls = api.calls();
    assert_eq!(&calls[..6], &[
        "create_customer",
        "create_liveness",
        "create_liveness_record",
        "evaluate_liveness",
        "create_selfie",
        "create_document",
    ]);
    assert_eq!(api.count("delete_customer"), 1);
}

#[test]
fn wearables_continues_after_mask_failure() {
    let (api, result) = run(ScenarioKind::Wearables, Script {
        fail_face_mask: true,
        ..Script::default()
    });
    result.unwrap();
    assert_eq!(api.calls(), vec!["detect", "check_face_mask", "check_glasses", "delete_face"]);
}

#[test]
fn face_detection_deletes_both_faces() {
    let (api, result) = run(ScenarioKind::FaceDetection, Script::default());
    result.unwrap();
    assert_eq!(api.count("detect"), 2);
    assert_eq!(api.count("delete_face"), 2);
}

#[test]
fn face_crops_saves_six_images() {
    let api = FakeApi::new(Script::default());
    let env = test_env();
    ScenarioKind::FaceCrops.run(&api, &env.env).unwrap();
    let saved = std::fs::read_dir(env.output_dir().join(FACE_CROPS_DIR)).unwrap().count();
    assert_eq!(saved, 6);
    assert_eq!(api.count("delete_face"), 1);
}

#[test]
fn similarity_scenarios_clean_up_every_face() {
    for kind in [ScenarioKind::SimilarityImageToImage, ScenarioKind::SimilarityImageToTemplate] {
        let (api, result) = run(kind, Script::default());
        result.unwrap();
        assert_eq!(api.count("check_similarity"), 1);
        assert_eq!(api.count("detect"), api.count("delete_face"));
    }
}

#[test]
fn smile_liveness_aborts_when_an_expression_is_rejected() {
    let (api, result) = run(ScenarioKind::SmileLiveness, Script {
        liveness_selfie_rejections: VecDeque::from([Some(LivenessSelfieErrorCode::NoFaceDetected)]),
        ..Script::default()
    });
    assert!(matches!(result, Err(ScenarioError::Rejected(_))));
    assert_eq!(api.count("create_liveness_selfie"), 1);
    assert_eq!(api.count("evaluate_liveness"), 0);
    assert_eq!(api.count("delete_customer"), 1);
}

#[test]
fn eye_gaze_liveness_uploads_all_segments_despite_a_rejection() {
    let (api, result) = run(ScenarioKind::EyeGazeLiveness, Script {
        liveness_selfie_rejections: VecDeque::from([None, Some(
            LivenessSelfieErrorCode::NoFaceDetected,
        )]),
        evaluation_error: Some(LivenessEvaluationErrorCode::NotEnoughData),
        ..Script::default()
    });
    result.unwrap();
    assert_eq!(api.count("create_liveness_selfie"), 5);
    assert_eq!(api.count("evaluate_liveness"), 1);
}

#[test]
fn rejected_passive_evaluation_is_a_finding() {
    let (api, result) = run(ScenarioKind::PassiveLiveness, Script {
        evaluation_error: Some(LivenessEvaluationErrorCode::NotEnoughData),
        ..Script::default()
    });
    result.unwrap();
    assert_eq!(api.count("delete_customer"), 1);
}

#[test]
fn magnifeye_liveness_evaluates_after_a_rejected_record() {
    let (api, result) = run(ScenarioKind::MagnifeyeLiveness, Script {
        reject_liveness_record: true,
        evaluation_error: Some(LivenessEvaluationErrorCode::InvalidData),
        ..Script::default()
    });
    result.unwrap();
    assert_eq!(api.calls(), vec![
        "create_customer",
        "create_liveness",
        "create_liveness_record",
        "evaluate_liveness",
        "delete_customer",
    ]);
}

#[test]
fn page_quality_issues_fail_the_scenario() {
    let (api, result) = run(ScenarioKind::DocumentQuality, Script {
        page_quality: Some(DocumentPageQuality {
            fine: false,
            warnings: Vec::new(),
            issues: vec!["DOCUMENT_SMALL".to_string()],
        }),
        ..Script::default()
    });
    let Err(ScenarioError::Rejected(message)) = result else {
        panic!("page quality issues must fail the scenario");
    };
    assert!(message.contains("DOCUMENT_SMALL"));
    assert_eq!(api.count("delete_customer"), 1);
}

#[test]
fn level_validations_upload_both_pages() {
    for kind in [ScenarioKind::DocumentL0Validation, ScenarioKind::DocumentL1Validation] {
        let (api, result) = run(kind, Script::default());
        result.unwrap();
        assert_eq!(api.count("create_document_page"), 2);
        assert_eq!(api.count("get_customer"), 1);
    }
}

#[test]
fn customer_inspect_queries_both_inspections() {
    let (api, result) = run(ScenarioKind::CustomerInspect, Script::default());
    result.unwrap();
    assert_eq!(api.count("inspect"), 1);
    assert_eq!(api.count("inspect_document"), 1);
}

#[test]
fn metadata_and_actuator_scenarios_complete() {
    let document = DocumentMetadata {
        document_type: MetadataDocumentType {
            type_name: Some("passport".to_string()),
            edition: Some("2006".to_string()),
            country: Some("CZE".to_string()),
        },
        pages: BTreeMap::from([("front".to_string(), PageMetadata::default())]),
    };
    let script = Script {
        metadata: DocumentMetadataResponse {
            documents: vec![document],
        },
        ..Script::default()
    };
    let runner = SampleRunner::new(FakeApi::new(script), test_env().env);
    assert_eq!(runner.run(ScenarioKind::DocumentsMetadata), ScenarioReport::Completed);
    assert_eq!(runner.run(ScenarioKind::ActuatorInfo), ScenarioReport::Completed);
    assert_eq!(runner.api().calls(), vec!["metadata", "health", "info"]);
}

#[test]
fn runner_reports_api_failures_with_status_code() {
    let runner = SampleRunner::new(
        FakeApi::new(Script {
            fail_create_customer: true,
            ..Script::default()
        }),
        test_env().env,
    );
    let report = runner.run(ScenarioKind::PassiveLiveness);
    assert!(matches!(report, ScenarioReport::Failed { code: 500, .. }));
}
