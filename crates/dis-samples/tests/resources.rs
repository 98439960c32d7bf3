// crates/dis-samples/tests/resources.rs
// ============================================================================
// Module: Resource Loader Tests
// Description: Bundled, remote and binary resource resolution.
// Purpose: Verify location rules and failure modes of the loader.
// ============================================================================
//! ## Overview
//! Bundled paths, remote URLs and the liveness binary file, including the
//! missing-resource and failed-fetch cases.

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

use std::fs;
use std::path::Path;

use dis_samples::DocumentLevel;
use dis_samples::ResourceError;
use dis_samples::ResourceLoader;
use tempfile::TempDir;

use crate::common::MockServer;

fn loader(root: &Path) -> ResourceLoader {
    ResourceLoader::new(root, 2_000, "dis-samples-test").unwrap()
}

#[test]
fn locations_follow_the_bundled_layout() {
    let dir = TempDir::new().unwrap();
    let loader = loader(dir.path());
    assert_eq!(loader.face_location("face"), "images/faces/face.jpeg");
    assert_eq!(
        loader.document_location(Some(DocumentLevel::L1), "document-back"),
        "images/documents/L1/document-back.jpeg"
    );
    assert_eq!(
        loader.document_location(None, "document-front"),
        "images/documents/document-front.jpeg"
    );
    assert_eq!(
        loader.face_location("https://images.example.com/face.jpeg"),
        "https://images.example.com/face.jpeg"
    );
}

#[test]
fn bundled_images_are_sent_inline() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("images/faces")).unwrap();
    fs::write(dir.path().join("images/faces/face.jpeg"), b"jpeg-bytes").unwrap();
    let bundled = loader(dir.path()).face_image("face").unwrap();
    assert_eq!(bundled.data.as_deref(), Some(&b"jpeg-bytes"[..]));
    assert_eq!(bundled.url, None);
}

#[test]
fn remote_images_are_downloaded_and_sent_inline() {
    let server = MockServer::start(vec![(200, b"remote-jpeg".to_vec())]);
    let dir = TempDir::new().unwrap();
    let image = loader(dir.path()).face_image(&format!("{}/face.jpeg", server.base_url)).unwrap();
    assert_eq!(image.data.as_deref(), Some(&b"remote-jpeg"[..]));
    assert_eq!(image.url, None);
    let requests = server.finish();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "GET");
    assert_eq!(requests[0].1, "/face.jpeg");
}

#[test]
fn unreachable_remote_image_is_a_fetch_error() {
    let dir = TempDir::new().unwrap();
    let result = loader(dir.path()).face_image("http://127.0.0.1:9/face.jpeg");
    assert!(matches!(result, Err(ResourceError::Fetch(_))));
}

#[test]
fn missing_bundled_image_is_reported() {
    let dir = TempDir::new().unwrap();
    let result = loader(dir.path()).document_image(Some(DocumentLevel::L0), "document-front");
    assert!(matches!(result, Err(ResourceError::Missing(path)) if path.contains("L0")));
}

#[test]
fn missing_binary_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let result = loader(dir.path()).binary_file(&dir.path().join("absent.bin"));
    assert!(matches!(result, Err(ResourceError::Missing(_))));
}

#[test]
fn remote_bytes_are_fetched() {
    let server = MockServer::start(vec![(200, b"remote-bytes".to_vec())]);
    let dir = TempDir::new().unwrap();
    let bytes = loader(dir.path()).bytes(&format!("{}/face.jpeg", server.base_url)).unwrap();
    assert_eq!(bytes, b"remote-bytes");
    let requests = server.finish();
    assert_eq!(requests[0].1, "/face.jpeg");
}

#[test]
fn remote_error_status_is_a_fetch_error() {
    let server = MockServer::start(vec![(404, Vec::new())]);
    let dir = TempDir::new().unwrap();
    let result = loader(dir.path()).bytes(&format!("{}/missing.jpeg", server.base_url));
    assert!(matches!(result, Err(ResourceError::Fetch(_))));
    server.finish();
}
