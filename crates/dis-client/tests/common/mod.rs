// crates/dis-client/tests/common/mod.rs
// =============================================================================
// Module: Client Test Helpers
// Description: Scripted tiny_http server recording incoming requests.
// Purpose: Observe exactly what the client puts on the wire.
// =============================================================================
//! ## Overview
//! Shared mock server for the client suites.

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::sync::mpsc;
use std::sync::mpsc::Receiver;
use std::thread;
use std::thread::JoinHandle;

use dis_client::ClientSettings;
use dis_client::DisClient;
use dis_client::RequestContext;
use tiny_http::Header;
use tiny_http::Response;
use tiny_http::Server;

/// Bearer token used by test clients.
pub const TEST_TOKEN: &str = "test-token";

/// Request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: String,
    /// Request path and query.
    pub url: String,
    /// `Authorization` header.
    pub authorization: Option<String>,
    /// Session token header.
    pub session_token: Option<String>,
    /// `Content-Type` header.
    pub content_type: Option<String>,
    /// Raw request body.
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Parses the body as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body json")
    }
}

/// Mock server answering a fixed script of responses.
pub struct MockServer {
    /// Base URL of the server.
    pub base_url: String,
    /// Recorded requests.
    requests: Receiver<RecordedRequest>,
    /// Server thread.
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Starts a server answering each request with the next `(status, body)`.
    pub fn start(script: Vec<(u16, String)>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("http server");
        let addr = server.server_addr().to_ip().expect("ip addr");
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            for (status, body) in script {
                let Ok(mut request) = server.recv() else {
                    return;
                };
                let header = |name: &'static str| {
                    request
                        .headers()
                        .iter()
                        .find(|header| header.field.equiv(name))
                        .map(|header| header.value.as_str().to_string())
                };
                let authorization = header("Authorization");
                let session_token = header("x-inn-session-token");
                let content_type = header("Content-Type");
                let method = request.method().as_str().to_string();
                let url = request.url().to_string();
                let mut bytes = Vec::new();
                let _ = request.as_reader().read_to_end(&mut bytes);
                let _ = tx.send(RecordedRequest {
                    method,
                    url,
                    authorization,
                    session_token,
                    content_type,
                    body: bytes,
                });
                let response = Response::from_string(body)
                    .with_status_code(status)
                    .with_header(Header::from_bytes("Content-Type", "application/json").unwrap());
                let _ = request.respond(response);
            }
        });
        Self {
            base_url: format!("http://{addr}"),
            requests: rx,
            handle,
        }
    }

    /// Builds a client pointed at this server.
    pub fn client(&self) -> DisClient {
        let context = RequestContext::new(&self.base_url, TEST_TOKEN).expect("context");
        DisClient::new(context, ClientSettings::default()).expect("client")
    }

    /// Waits for the script to finish and returns the recorded requests.
    pub fn finish(self) -> Vec<RecordedRequest> {
        self.handle.join().expect("server thread");
        self.requests.try_iter().collect()
    }
}
