// crates/dis-samples/tests/common/mod.rs
// =============================================================================
// Module: Scenario Test Helpers
// Description: In-memory DIS double, temp environments and a tiny HTTP mock.
// Purpose: Run scenarios without a live service and observe their calls.
// =============================================================================
//! ## Overview
//! Shared fixtures for the scenario suites.

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::collections::VecDeque;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::mpsc;
use std::sync::mpsc::Receiver;
use std::thread;
use std::thread::JoinHandle;

use dis_client::ActuatorOperations;
use dis_client::ApiError;
use dis_client::CustomerOnboarding;
use dis_client::FaceOperations;
use dis_client::MetadataOperations;
use dis_client::Outcome;
use dis_client::SessionManagement;
use dis_client::model::ActuatorHealth;
use dis_client::model::ActuatorInfo;
use dis_client::model::CreateCustomerResponse;
use dis_client::model::CreateDocumentPageRequest;
use dis_client::model::CreateDocumentPageResponse;
use dis_client::model::CreateDocumentRequest;
use dis_client::model::CreateDocumentResponse;
use dis_client::model::CreateFaceErrorCode;
use dis_client::model::CreateFaceRequest;
use dis_client::model::CreateFaceResponse;
use dis_client::model::CreateLivenessRecordResponse;
use dis_client::model::CreateLivenessSelfieRequest;
use dis_client::model::CreateLivenessSelfieResponse;
use dis_client::model::CreateSelfieRequest;
use dis_client::model::CreateSelfieResponse;
use dis_client::model::CreateSessionRequest;
use dis_client::model::CreateSessionResponse;
use dis_client::model::CropCoordinatesResponse;
use dis_client::model::CropSize;
use dis_client::model::Customer;
use dis_client::model::CustomerInspectResponse;
use dis_client::model::DocumentInspectResponse;
use dis_client::model::DocumentMetadataResponse;
use dis_client::model::DocumentPageErrorCode;
use dis_client::model::DocumentPageQuality;
use dis_client::model::DocumentPageWarning;
use dis_client::model::DocumentType;
use dis_client::model::EvaluateLivenessRequest;
use dis_client::model::EvaluateLivenessResponse;
use dis_client::model::FaceAspectsResponse;
use dis_client::model::FaceDetection;
use dis_client::model::FaceLinks;
use dis_client::model::FaceMaskResponse;
use dis_client::model::FaceQualityResponse;
use dis_client::model::FaceSimilarityRequest;
use dis_client::model::FaceSimilarityResponse;
use dis_client::model::FaceTemplate;
use dis_client::model::GetCustomerResponse;
use dis_client::model::GlassesResponse;
use dis_client::model::ImageCrop;
use dis_client::model::LivenessEvaluationErrorCode;
use dis_client::model::LivenessRecordErrorCode;
use dis_client::model::LivenessRecordLinks;
use dis_client::model::LivenessSelfieErrorCode;
use dis_client::model::LivenessSelfieWarning;
use dis_client::model::SelfieErrorCode;
use dis_config::SamplesConfig;
use dis_samples::SampleEnv;
use image::ImageFormat;
use image::RgbImage;
use serde_json::json;
use tempfile::TempDir;
use tiny_http::Header;
use tiny_http::Response;
use tiny_http::Server;

// =============================================================================
// SECTION: Scripted API Double
// =============================================================================

/// Behaviour of the in-memory DIS double. Defaults accept every input.
#[derive(Debug, Clone, Default)]
pub struct Script {
    /// Reject face detection with `NO_FACE_DETECTED`.
    pub reject_face: bool,
    /// Fail the face mask call with HTTP 400.
    pub fail_face_mask: bool,
    /// Fail customer creation with HTTP 500.
    pub fail_create_customer: bool,
    /// Fail customer deletion with HTTP 500.
    pub fail_delete_customer: bool,
    /// Reject the customer selfie with `NO_FACE_DETECTED`.
    pub reject_selfie: bool,
    /// Per-call liveness selfie rejections; accepted once drained.
    pub liveness_selfie_rejections: VecDeque<Option<LivenessSelfieErrorCode>>,
    /// Warnings attached to every liveness selfie.
    pub liveness_selfie_warnings: Vec<LivenessSelfieWarning>,
    /// Reject the liveness record with `INVALID_DATA`.
    pub reject_liveness_record: bool,
    /// Rejection code of liveness evaluation.
    pub evaluation_error: Option<LivenessEvaluationErrorCode>,
    /// Rejection code of document page upload.
    pub page_error: Option<DocumentPageErrorCode>,
    /// Warnings attached to every document page.
    pub page_warnings: Vec<DocumentPageWarning>,
    /// Customer returned by `get_customer`; a customer with a portrait when unset.
    pub customer: Option<Customer>,
    /// Page quality returned for every page.
    pub page_quality: Option<DocumentPageQuality>,
    /// Metadata table.
    pub metadata: DocumentMetadataResponse,
}

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Trait method name.
    pub name: String,
    /// Session token the calling client was scoped to.
    pub session: Option<String>,
}

/// State shared by a double and its session-scoped copies.
#[derive(Debug)]
struct Shared {
    /// Scripted behaviour.
    script: Script,
    /// Calls in order.
    calls: Vec<Call>,
}

/// In-memory DIS double recording every call.
#[derive(Debug, Clone)]
pub struct FakeApi {
    /// Shared script and call log.
    shared: Arc<Mutex<Shared>>,
    /// Session token this copy is scoped to.
    session: Option<String>,
}

impl FakeApi {
    /// Creates a double following `script`.
    pub fn new(script: Script) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                script,
                calls: Vec::new(),
            })),
            session: None,
        }
    }

    /// Returns the recorded call names in order.
    pub fn calls(&self) -> Vec<String> {
        self.call_log().into_iter().map(|call| call.name).collect()
    }

    /// Returns the recorded calls with their session scope.
    pub fn call_log(&self) -> Vec<Call> {
        self.shared.lock().expect("fake api lock").calls.clone()
    }

    /// Counts calls named `name`.
    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|call| *call == name).count()
    }

    /// Records a call and returns a snapshot of the script.
    fn record(&self, name: &str) -> Script {
        let mut shared = self.shared.lock().expect("fake api lock");
        shared.calls.push(Call {
            name: name.to_string(),
            session: self.session.clone(),
        });
        shared.script.clone()
    }

    /// Pops the next scripted liveness selfie rejection.
    fn next_selfie_rejection(&self) -> Option<LivenessSelfieErrorCode> {
        let mut shared = self.shared.lock().expect("fake api lock");
        shared.script.liveness_selfie_rejections.pop_front().flatten()
    }
}

/// HTTP 500 failure.
fn server_error() -> ApiError {
    ApiError::Status {
        code: 500,
        body: "{\"errorCode\":\"INTERNAL\"}".to_string(),
    }
}

/// Returns a 2x2 PNG image.
pub fn png_bytes() -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    RgbImage::new(2, 2).write_to(&mut bytes, ImageFormat::Png).expect("png encode");
    bytes.into_inner()
}

/// Returns a customer whose document has a classified type and a portrait.
pub fn customer_with_portrait() -> Customer {
    serde_json::from_value(json!({
        "document": {
            "type": { "type": "identity-card", "country": "INO" },
            "links": { "portrait": "/customers/customer-1/document/portrait" }
        }
    }))
    .expect("customer json")
}

impl FaceOperations for FakeApi {
    fn detect(
        &self,
        _request: &CreateFaceRequest,
    ) -> Result<Outcome<CreateFaceResponse, CreateFaceErrorCode>, ApiError> {
        let script = self.record("detect");
        if script.reject_face {
            return Ok(Outcome::from_response(CreateFaceResponse {
                id: None,
                detection: None,
                links: None,
                error_code: Some(CreateFaceErrorCode::NoFaceDetected),
            }));
        }
        Ok(Outcome::from_response(CreateFaceResponse {
            id: Some("face-1".to_string()),
            detection: Some(FaceDetection {
                confidence: 0.9,
            }),
            links: Some(FaceLinks {
                self_link: Some("/api/v1/faces/face-1".to_string()),
            }),
            error_code: None,
        }))
    }

    fn delete_face(&self, _face_id: &str) -> Result<(), ApiError> {
        self.record("delete_face");
        Ok(())
    }

    fn evaluate_aspects(&self, _face_id: &str) -> Result<FaceAspectsResponse, ApiError> {
        self.record("evaluate_aspects");
        Ok(FaceAspectsResponse {
            age: 30.0,
            gender: 0.2,
        })
    }

    fn check_face_mask(&self, _face_id: &str) -> Result<FaceMaskResponse, ApiError> {
        let script = self.record("check_face_mask");
        if script.fail_face_mask {
            return Err(ApiError::Status {
                code: 400,
                body: "mask detection not supported".to_string(),
            });
        }
        Ok(FaceMaskResponse {
            score: 0.1,
        })
    }

    fn check_glasses(&self, _face_id: &str) -> Result<GlassesResponse, ApiError> {
        self.record("check_glasses");
        Ok(GlassesResponse {
            score: 0.8,
            heavy_frame: 0.1,
            tinted: 0.1,
        })
    }

    fn check_quality(&self, _face_id: &str) -> Result<FaceQualityResponse, ApiError> {
        self.record("check_quality");
        Ok(serde_json::from_value(json!({
            "yaw": { "angle": 2.0, "preconditionsMet": true },
            "pitch": { "angle": -3.0, "preconditionsMet": true }
        }))
        .expect("quality json"))
    }

    fn crop(&self, _face_id: &str, _size: CropSize) -> Result<ImageCrop, ApiError> {
        self.record("crop");
        Ok(ImageCrop {
            data: png_bytes(),
        })
    }

    fn crop_removed_background(
        &self,
        _face_id: &str,
        _size: CropSize,
    ) -> Result<ImageCrop, ApiError> {
        self.record("crop_removed_background");
        Ok(ImageCrop {
            data: png_bytes(),
        })
    }

    fn crop_coordinates(&self, _face_id: &str) -> Result<CropCoordinatesResponse, ApiError> {
        self.record("crop_coordinates");
        Ok(CropCoordinatesResponse {
            fully_captured: Some(true),
            coordinates: None,
        })
    }

    fn create_template(&self, _face_id: &str) -> Result<FaceTemplate, ApiError> {
        self.record("create_template");
        Ok(FaceTemplate {
            data: vec![7, 7, 7],
            version: Some("1.0".to_string()),
        })
    }

    fn check_similarity(
        &self,
        _face_id: &str,
        _request: &FaceSimilarityRequest,
    ) -> Result<FaceSimilarityResponse, ApiError> {
        self.record("check_similarity");
        Ok(FaceSimilarityResponse {
            score: 0.95,
        })
    }
}

impl CustomerOnboarding for FakeApi {
    fn create_customer(&self) -> Result<CreateCustomerResponse, ApiError> {
        let script = self.record("create_customer");
        if script.fail_create_customer {
            return Err(server_error());
        }
        Ok(CreateCustomerResponse {
            id: "customer-1".to_string(),
        })
    }

    fn get_customer(&self, _customer_id: &str) -> Result<GetCustomerResponse, ApiError> {
        let script = self.record("get_customer");
        Ok(GetCustomerResponse {
            customer: Some(script.customer.unwrap_or_else(customer_with_portrait)),
        })
    }

    fn delete_customer(&self, _customer_id: &str) -> Result<(), ApiError> {
        let script = self.record("delete_customer");
        if script.fail_delete_customer {
            return Err(server_error());
        }
        Ok(())
    }

    fn create_selfie(
        &self,
        _customer_id: &str,
        _request: &CreateSelfieRequest,
    ) -> Result<Outcome<CreateSelfieResponse, SelfieErrorCode>, ApiError> {
        let script = self.record("create_selfie");
        Ok(Outcome::from_response(CreateSelfieResponse {
            warnings: Vec::new(),
            error_code: script.reject_selfie.then_some(SelfieErrorCode::NoFaceDetected),
        }))
    }

    fn create_liveness(&self, _customer_id: &str) -> Result<(), ApiError> {
        self.record("create_liveness");
        Ok(())
    }

    fn create_liveness_selfie(
        &self,
        _customer_id: &str,
        _request: &CreateLivenessSelfieRequest,
    ) -> Result<Outcome<CreateLivenessSelfieResponse, LivenessSelfieErrorCode>, ApiError> {
        let script = self.record("create_liveness_selfie");
        Ok(Outcome::from_response(CreateLivenessSelfieResponse {
            warnings: script.liveness_selfie_warnings,
            error_code: self.next_selfie_rejection(),
        }))
    }

    fn create_liveness_record(
        &self,
        _customer_id: &str,
        _record: &[u8],
    ) -> Result<Outcome<CreateLivenessRecordResponse, LivenessRecordErrorCode>, ApiError> {
        let script = self.record("create_liveness_record");
        Ok(Outcome::from_response(CreateLivenessRecordResponse {
            links: Some(LivenessRecordLinks {
                selfie: Some("/customers/customer-1/liveness/selfies/0".to_string()),
            }),
            error_code: script
                .reject_liveness_record
                .then_some(LivenessRecordErrorCode::InvalidData),
        }))
    }

    fn evaluate_liveness(
        &self,
        _customer_id: &str,
        _request: &EvaluateLivenessRequest,
    ) -> Result<Outcome<EvaluateLivenessResponse, LivenessEvaluationErrorCode>, ApiError> {
        let script = self.record("evaluate_liveness");
        Ok(Outcome::from_response(EvaluateLivenessResponse {
            score: script.evaluation_error.is_none().then_some(0.87),
            error_code: script.evaluation_error,
        }))
    }

    fn create_document(
        &self,
        _customer_id: &str,
        _request: &CreateDocumentRequest,
    ) -> Result<CreateDocumentResponse, ApiError> {
        self.record("create_document");
        Ok(CreateDocumentResponse::default())
    }

    fn create_document_page(
        &self,
        _customer_id: &str,
        _request: &CreateDocumentPageRequest,
    ) -> Result<Outcome<CreateDocumentPageResponse, DocumentPageErrorCode>, ApiError> {
        let script = self.record("create_document_page");
        Ok(Outcome::from_response(CreateDocumentPageResponse {
            document_type: Some(DocumentType {
                type_name: Some("identity-card".to_string()),
                ..DocumentType::default()
            }),
            page_type: Some("front".to_string()),
            warnings: script.page_warnings,
            error_code: script.page_error,
        }))
    }

    fn document_page_quality(
        &self,
        _customer_id: &str,
        _page_type: &str,
    ) -> Result<DocumentPageQuality, ApiError> {
        let script = self.record("document_page_quality");
        Ok(script.page_quality.unwrap_or(DocumentPageQuality {
            fine: true,
            warnings: Vec::new(),
            issues: Vec::new(),
        }))
    }

    fn document_page_crop(
        &self,
        _customer_id: &str,
        _page_type: &str,
        _size: CropSize,
    ) -> Result<ImageCrop, ApiError> {
        self.record("document_page_crop");
        Ok(ImageCrop {
            data: png_bytes(),
        })
    }

    fn document_portrait(
        &self,
        _customer_id: &str,
        _size: CropSize,
    ) -> Result<ImageCrop, ApiError> {
        self.record("document_portrait");
        Ok(ImageCrop {
            data: png_bytes(),
        })
    }

    fn inspect(&self, _customer_id: &str) -> Result<CustomerInspectResponse, ApiError> {
        self.record("inspect");
        Ok(CustomerInspectResponse::default())
    }

    fn inspect_document(&self, _customer_id: &str) -> Result<DocumentInspectResponse, ApiError> {
        self.record("inspect_document");
        Ok(DocumentInspectResponse::default())
    }
}

impl SessionManagement for FakeApi {
    fn create_session(
        &self,
        _request: &CreateSessionRequest,
    ) -> Result<CreateSessionResponse, ApiError> {
        self.record("create_session");
        Ok(CreateSessionResponse {
            token: "session-1".to_string(),
        })
    }

    fn delete_session(&self, _token: &str) -> Result<(), ApiError> {
        self.record("delete_session");
        Ok(())
    }

    fn with_session_token(&self, token: &str) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            session: Some(token.to_string()),
        }
    }
}

impl MetadataOperations for FakeApi {
    fn metadata(&self) -> Result<DocumentMetadataResponse, ApiError> {
        Ok(self.record("metadata").metadata)
    }
}

impl ActuatorOperations for FakeApi {
    fn health(&self) -> Result<ActuatorHealth, ApiError> {
        self.record("health");
        Ok(ActuatorHealth {
            status: "UP".to_string(),
        })
    }

    fn info(&self) -> Result<ActuatorInfo, ApiError> {
        self.record("info");
        Ok(serde_json::from_value(json!({
            "build": { "version": "1.40.0" },
            "sam": { "version": "2.1.0" },
            "iface": { "version": "5.2.1", "license": { "year": 2027, "month": 3, "day": 9 } }
        }))
        .expect("info json"))
    }
}

// =============================================================================
// SECTION: Environments
// =============================================================================

/// Face images every bundled-face scenario reads.
const FACE_IMAGES: [&str; 6] =
    ["face", "face-neutral", "face-smile", "top-left", "bottom-left", "bottom-right"];

/// Sample environment backed by temporary directories.
pub struct TestEnv {
    /// Environment handed to scenarios.
    pub env: SampleEnv,
    /// Directory holding resources, output and the liveness record.
    pub dir: TempDir,
}

impl TestEnv {
    /// Returns the output directory.
    pub fn output_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("output")
    }
}

/// Returns a valid config body rooted at `dir`, followed by `extra` keys.
pub fn config_toml(dir: &Path, service_url: &str, extra: &str) -> String {
    let root = dir.display();
    format!(
        r#"
dot-identity-service-url = "{service_url}"
dot-authentication-token = "static-token"
example-image-url = "https://images.example.com/face.jpeg"
similarity.probe.example-image-url = "https://images.example.com/probe.jpeg"
similarity.reference.example-image-url = "https://images.example.com/reference.jpeg"
liveness-records.magnifeye-liveness.binary-file = '{root}/record.bin'
aspects-check.age-threshold = 18.0
aspects-check.gender-threshold = 0.5
wearables.face-mask-threshold = 0.5
wearables.glasses-threshold = 0.5
wearables.heavy-glass-frame-threshold = 0.5
wearables.tinted-glass-threshold = 0.5
quality.glass-conditions.detection-confidence = 0.8
quality.glass-conditions.yaw-angle.low = -10.0
quality.glass-conditions.yaw-angle.high = 10.0
quality.glass-conditions.pitch-angle.low = -15.0
quality.glass-conditions.pitch-angle.high = 15.0
resources.root = '{root}/resources'
output.root = '{root}/output'
http.timeout-ms = 2000
{extra}
"#
    )
}

/// Creates an environment with every bundled image and the liveness record.
pub fn test_env() -> TestEnv {
    test_env_with("https://dis.example.com", "")
}

/// Creates an environment for `service_url` with `extra` config keys.
pub fn test_env_with(service_url: &str, extra: &str) -> TestEnv {
    let dir = TempDir::new().expect("temp dir");
    let faces = dir.path().join("resources/images/faces");
    fs::create_dir_all(&faces).expect("faces dir");
    for name in FACE_IMAGES {
        fs::write(faces.join(format!("{name}.jpeg")), b"jpeg").expect("face image");
    }
    for level in ["", "L0", "L1", "L2"] {
        let documents = dir.path().join("resources/images/documents").join(level);
        fs::create_dir_all(&documents).expect("documents dir");
        for page in ["document-front", "document-back"] {
            fs::write(documents.join(format!("{page}.jpeg")), b"jpeg").expect("document image");
        }
    }
    fs::write(dir.path().join("record.bin"), [1_u8, 2, 3]).expect("record");
    let config = SamplesConfig::from_toml_str(&config_toml(dir.path(), service_url, extra))
        .expect("config");
    let env = SampleEnv::from_config(config).expect("env");
    TestEnv {
        env,
        dir,
    }
}

// =============================================================================
// SECTION: HTTP Mock
// =============================================================================

/// Mock server answering a fixed script and recording request lines.
pub struct MockServer {
    /// Base URL of the server.
    pub base_url: String,
    /// Recorded `(method, url, authorization)` triples.
    requests: Receiver<(String, String, Option<String>)>,
    /// Server thread.
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Starts a server answering each request with the next `(status, body)`.
    pub fn start(script: Vec<(u16, Vec<u8>)>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("http server");
        let addr = server.server_addr().to_ip().expect("ip addr");
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            for (status, body) in script {
                let Ok(mut request) = server.recv() else {
                    return;
                };
                let authorization = request
                    .headers()
                    .iter()
                    .find(|header| header.field.equiv("Authorization"))
                    .map(|header| header.value.as_str().to_string());
                let mut ignored = Vec::new();
                let _ = request.as_reader().read_to_end(&mut ignored);
                let _ = tx.send((
                    request.method().as_str().to_string(),
                    request.url().to_string(),
                    authorization,
                ));
                let response = Response::from_data(body)
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

    /// Waits for the script to finish and returns `(method, url, authorization)`.
    pub fn finish(self) -> Vec<(String, String, Option<String>)> {
        self.handle.join().expect("server thread");
        self.requests.try_iter().collect()
    }
}
