// crates/dis-samples/tests/auth0_scenario.rs
// ============================================================================
// Module: Auth0 Scenario Tests
// Description: Token exchange followed by a customer round trip.
// Purpose: Verify the issued token is used and failures stop the scenario.
// ============================================================================
//! ## Overview
//! Runs the Auth0 scenario against a mock server serving both the token
//! endpoint and the customer endpoints.

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

use dis_client::AuthError;
use dis_samples::SampleRunner;
use dis_samples::ScenarioError;
use dis_samples::ScenarioKind;
use dis_samples::ScenarioReport;

use crate::common::FakeApi;
use crate::common::MockServer;
use crate::common::Script;
use crate::common::test_env_with;

fn auth0_keys(base_url: &str) -> String {
    [
        "dot-auth0-client-id = \"client\"".to_string(),
        "dot-auth0-client-secret = \"secret\"".to_string(),
        format!("dot-auth0-token-endpoint = \"{base_url}/oauth/token\""),
        "dot-auth0-audience = \"https://dis.example.com\"".to_string(),
    ]
    .join("\n")
}

#[test]
fn issued_token_authenticates_customer_calls() {
    let server = MockServer::start(vec![
        (200, br#"{"access_token":"issued","token_type":"Bearer"}"#.to_vec()),
        (200, br#"{"id":"customer-9"}"#.to_vec()),
        (204, Vec::new()),
    ]);
    let env = test_env_with(&server.base_url, &auth0_keys(&server.base_url));
    let api = FakeApi::new(Script::default());
    ScenarioKind::Auth0Customer.run(&api, &env.env).unwrap();
    let requests = server.finish();
    assert_eq!(requests[0].0, "POST");
    assert_eq!(requests[0].1, "/oauth/token");
    assert_eq!(requests[1].1, "/api/v1/customers");
    assert_eq!(requests[1].2.as_deref(), Some("Bearer issued"));
    assert_eq!(requests[2].0, "DELETE");
    assert_eq!(requests[2].1, "/api/v1/customers/customer-9");
    assert!(api.calls().is_empty());
}

#[test]
fn failed_token_exchange_issues_no_service_call() {
    let server = MockServer::start(vec![(401, br#"{"error":"access_denied"}"#.to_vec())]);
    let env = test_env_with(&server.base_url, &auth0_keys(&server.base_url));
    let result = ScenarioKind::Auth0Customer.run(&FakeApi::new(Script::default()), &env.env);
    assert!(matches!(result, Err(ScenarioError::Auth(AuthError::Status(401)))));
    assert_eq!(server.finish().len(), 1);
}

#[test]
fn missing_auth0_keys_fail_before_any_request() {
    let env = test_env_with("https://dis.example.com", "");
    let runner = SampleRunner::new(FakeApi::new(Script::default()), env.env);
    let report = runner.run(ScenarioKind::Auth0Customer);
    assert!(matches!(report, ScenarioReport::Failed { code: 0, .. }));
}
