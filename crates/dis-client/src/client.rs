// crates/dis-client/src/client.rs
// ============================================================================
// Module: DIS HTTP Client
// Description: Blocking reqwest implementation of the DIS API traits.
// Purpose: Issue bounded, authenticated JSON requests against the service.
// Dependencies: reqwest, serde, serde_json, tracing, url
// ============================================================================

//! ## Overview
//! [`DisClient`] sends one blocking request per trait call. Every request
//! carries the bearer token of its [`RequestContext`] and, for session-scoped
//! clients, the session token header. Response bodies are read with a hard
//! size cap; non-2xx statuses surface as [`ApiError::Status`] with the raw body.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::api::ActuatorOperations;
use crate::api::CustomerOnboarding;
use crate::api::FaceOperations;
use crate::api::MetadataOperations;
use crate::api::SessionManagement;
use crate::context::RequestContext;
use crate::context::SESSION_TOKEN_HEADER;
use crate::error::ApiError;
use crate::model::ActuatorHealth;
use crate::model::ActuatorInfo;
use crate::model::CreateCustomerResponse;
use crate::model::CreateDocumentPageRequest;
use crate::model::CreateDocumentPageResponse;
use crate::model::CreateDocumentRequest;
use crate::model::CreateDocumentResponse;
use crate::model::CreateFaceErrorCode;
use crate::model::CreateFaceRequest;
use crate::model::CreateFaceResponse;
use crate::model::CreateLivenessRecordResponse;
use crate::model::CreateLivenessSelfieRequest;
use crate::model::CreateLivenessSelfieResponse;
use crate::model::CreateSelfieRequest;
use crate::model::CreateSelfieResponse;
use crate::model::CreateSessionRequest;
use crate::model::CreateSessionResponse;
use crate::model::CropCoordinatesResponse;
use crate::model::CropSize;
use crate::model::CustomerInspectResponse;
use crate::model::DocumentInspectResponse;
use crate::model::DocumentMetadataResponse;
use crate::model::DocumentPageErrorCode;
use crate::model::DocumentPageQuality;
use crate::model::EvaluateLivenessRequest;
use crate::model::EvaluateLivenessResponse;
use crate::model::FaceAspectsResponse;
use crate::model::FaceMaskResponse;
use crate::model::FaceQualityResponse;
use crate::model::FaceSimilarityRequest;
use crate::model::FaceSimilarityResponse;
use crate::model::FaceTemplate;
use crate::model::GetCustomerResponse;
use crate::model::GlassesResponse;
use crate::model::ImageCrop;
use crate::model::LivenessEvaluationErrorCode;
use crate::model::LivenessRecordErrorCode;
use crate::model::LivenessSelfieErrorCode;
use crate::model::SelfieErrorCode;
use crate::outcome::Outcome;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Default maximum response body size (32 MiB).
const DEFAULT_MAX_RESPONSE_BYTES: usize = 32 * 1024 * 1024;
/// Default user agent for outbound requests.
const DEFAULT_USER_AGENT: &str = "dis-samples/0.1";
/// JSON media type.
const APPLICATION_JSON: &str = "application/json";
/// Binary media type for liveness records.
const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Transport settings of a [`DisClient`].
///
/// # Invariants
/// - `timeout_ms` applies to the full request lifecycle.
/// - `max_response_bytes` is a hard upper bound on response bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Request body variants.
enum Payload {
    /// No body.
    Empty,
    /// Serialized JSON body.
    Json(Vec<u8>),
    /// Raw binary body.
    Binary(Vec<u8>),
}

/// Blocking DIS client bound to one [`RequestContext`].
///
/// # Invariants
/// - The context is fixed for the lifetime of the client.
/// - Scoping to a session yields a new client sharing the connection pool.
#[derive(Debug, Clone)]
pub struct DisClient {
    /// Base URL and tokens attached to every request.
    context: RequestContext,
    /// Transport settings.
    settings: ClientSettings,
    /// HTTP client used for outbound requests.
    http: Client,
}

impl DisClient {
    /// Creates a client for the given context.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the HTTP client cannot be built.
    pub fn new(context: RequestContext, settings: ClientSettings) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|_| ApiError::Transport("http client build failed".to_string()))?;
        Ok(Self {
            context,
            settings,
            http,
        })
    }

    /// Returns the request context of this client.
    #[must_use]
    pub const fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Sends a GET request and decodes the JSON response.
    fn get<T: DeserializeOwned>(&self, segments: &[&str], size: CropSize) -> Result<T, ApiError> {
        let mut url = self.context.endpoint(segments)?;
        let pairs = size.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        decode(&self.execute(Method::GET, url, Payload::Empty)?)
    }

    /// Sends a JSON body with the given method and decodes the JSON response.
    fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.context.endpoint(segments)?;
        let bytes = serde_json::to_vec(body)
            .map_err(|err| ApiError::Request(format!("request encode failed: {err}")))?;
        decode(&self.execute(method, url, Payload::Json(bytes))?)
    }

    /// Sends a request without a body and decodes the JSON response.
    fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<T, ApiError> {
        let url = self.context.endpoint(segments)?;
        decode(&self.execute(method, url, Payload::Empty)?)
    }

    /// Sends a request whose response body is ignored.
    fn send_ignoring_body(&self, method: Method, segments: &[&str]) -> Result<(), ApiError> {
        let url = self.context.endpoint(segments)?;
        self.execute(method, url, Payload::Empty).map(|_| ())
    }

    /// Executes one request and returns the bounded response body.
    fn execute(&self, method: Method, url: Url, payload: Payload) -> Result<Vec<u8>, ApiError> {
        debug!(method = %method, path = url.path(), "sending dis request");
        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(self.context.bearer_token())
            .header(ACCEPT, APPLICATION_JSON);
        if let Some(token) = self.context.session_token() {
            request = request.header(SESSION_TOKEN_HEADER, token);
        }
        request = match payload {
            Payload::Empty => request,
            Payload::Json(bytes) => request.header(CONTENT_TYPE, APPLICATION_JSON).body(bytes),
            Payload::Binary(bytes) => {
                request.header(CONTENT_TYPE, APPLICATION_OCTET_STREAM).body(bytes)
            }
        };
        let mut response =
            request.send().map_err(|err| ApiError::Transport(format!("request failed: {err}")))?;
        let status = response.status();
        let body = read_response_limited(&mut response, self.settings.max_response_bytes)?;
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body)
    }
}

// ============================================================================
// SECTION: Face Operations
// ============================================================================

impl FaceOperations for DisClient {
    fn detect(
        &self,
        request: &CreateFaceRequest,
    ) -> Result<Outcome<CreateFaceResponse, CreateFaceErrorCode>, ApiError> {
        self.send_json(Method::POST, &["faces"], request).map(Outcome::from_response)
    }

    fn delete_face(&self, face_id: &str) -> Result<(), ApiError> {
        self.send_ignoring_body(Method::DELETE, &["faces", face_id])
    }

    fn evaluate_aspects(&self, face_id: &str) -> Result<FaceAspectsResponse, ApiError> {
        self.get(&["faces", face_id, "aspects"], CropSize::default())
    }

    fn check_face_mask(&self, face_id: &str) -> Result<FaceMaskResponse, ApiError> {
        self.get(&["faces", face_id, "face-mask"], CropSize::default())
    }

    fn check_glasses(&self, face_id: &str) -> Result<GlassesResponse, ApiError> {
        self.get(&["faces", face_id, "glasses"], CropSize::default())
    }

    fn check_quality(&self, face_id: &str) -> Result<FaceQualityResponse, ApiError> {
        self.get(&["faces", face_id, "quality"], CropSize::default())
    }

    fn crop(&self, face_id: &str, size: CropSize) -> Result<ImageCrop, ApiError> {
        self.get(&["faces", face_id, "crop"], size)
    }

    fn crop_removed_background(
        &self,
        face_id: &str,
        size: CropSize,
    ) -> Result<ImageCrop, ApiError> {
        self.get(&["faces", face_id, "crop", "removed-background"], size)
    }

    fn crop_coordinates(&self, face_id: &str) -> Result<CropCoordinatesResponse, ApiError> {
        self.get(&["faces", face_id, "crop", "coordinates"], CropSize::default())
    }

    fn create_template(&self, face_id: &str) -> Result<FaceTemplate, ApiError> {
        self.get(&["faces", face_id, "face-template"], CropSize::default())
    }

    fn check_similarity(
        &self,
        face_id: &str,
        request: &FaceSimilarityRequest,
    ) -> Result<FaceSimilarityResponse, ApiError> {
        self.send_json(Method::POST, &["faces", face_id, "similarity"], request)
    }
}

// ============================================================================
// SECTION: Customer Onboarding
// ============================================================================

impl CustomerOnboarding for DisClient {
    fn create_customer(&self) -> Result<CreateCustomerResponse, ApiError> {
        self.send_empty(Method::POST, &["customers"])
    }

    fn get_customer(&self, customer_id: &str) -> Result<GetCustomerResponse, ApiError> {
        self.get(&["customers", customer_id], CropSize::default())
    }

    fn delete_customer(&self, customer_id: &str) -> Result<(), ApiError> {
        self.send_ignoring_body(Method::DELETE, &["customers", customer_id])
    }

    fn create_selfie(
        &self,
        customer_id: &str,
        request: &CreateSelfieRequest,
    ) -> Result<Outcome<CreateSelfieResponse, SelfieErrorCode>, ApiError> {
        self.send_json(Method::PUT, &["customers", customer_id, "selfie"], request)
            .map(Outcome::from_response)
    }

    fn create_liveness(&self, customer_id: &str) -> Result<(), ApiError> {
        self.send_ignoring_body(Method::PUT, &["customers", customer_id, "liveness"])
    }

    fn create_liveness_selfie(
        &self,
        customer_id: &str,
        request: &CreateLivenessSelfieRequest,
    ) -> Result<Outcome<CreateLivenessSelfieResponse, LivenessSelfieErrorCode>, ApiError> {
        self.send_json(Method::POST, &["customers", customer_id, "liveness", "selfies"], request)
            .map(Outcome::from_response)
    }

    fn create_liveness_record(
        &self,
        customer_id: &str,
        record: &[u8],
    ) -> Result<Outcome<CreateLivenessRecordResponse, LivenessRecordErrorCode>, ApiError> {
        let url = self.context.endpoint(&["customers", customer_id, "liveness", "records"])?;
        let body = self.execute(Method::POST, url, Payload::Binary(record.to_vec()))?;
        decode(&body).map(Outcome::from_response)
    }

    fn evaluate_liveness(
        &self,
        customer_id: &str,
        request: &EvaluateLivenessRequest,
    ) -> Result<Outcome<EvaluateLivenessResponse, LivenessEvaluationErrorCode>, ApiError> {
        self.send_json(Method::POST, &["customers", customer_id, "liveness", "evaluation"], request)
            .map(Outcome::from_response)
    }

    fn create_document(
        &self,
        customer_id: &str,
        request: &CreateDocumentRequest,
    ) -> Result<CreateDocumentResponse, ApiError> {
        self.send_json(Method::PUT, &["customers", customer_id, "document"], request)
    }

    fn create_document_page(
        &self,
        customer_id: &str,
        request: &CreateDocumentPageRequest,
    ) -> Result<Outcome<CreateDocumentPageResponse, DocumentPageErrorCode>, ApiError> {
        self.send_json(Method::PUT, &["customers", customer_id, "document", "pages"], request)
            .map(Outcome::from_response)
    }

    fn document_page_quality(
        &self,
        customer_id: &str,
        page_type: &str,
    ) -> Result<DocumentPageQuality, ApiError> {
        self.get(
            &["customers", customer_id, "document", "pages", page_type, "quality"],
            CropSize::default(),
        )
    }

    fn document_page_crop(
        &self,
        customer_id: &str,
        page_type: &str,
        size: CropSize,
    ) -> Result<ImageCrop, ApiError> {
        self.get(&["customers", customer_id, "document", "pages", page_type, "crop"], size)
    }

    fn document_portrait(&self, customer_id: &str, size: CropSize) -> Result<ImageCrop, ApiError> {
        self.get(&["customers", customer_id, "document", "portrait"], size)
    }

    fn inspect(&self, customer_id: &str) -> Result<CustomerInspectResponse, ApiError> {
        self.send_empty(Method::POST, &["customers", customer_id, "inspect"])
    }

    fn inspect_document(&self, customer_id: &str) -> Result<DocumentInspectResponse, ApiError> {
        self.send_empty(Method::POST, &["customers", customer_id, "document", "inspect"])
    }
}

// ============================================================================
// SECTION: Sessions, Metadata, Actuator
// ============================================================================

impl SessionManagement for DisClient {
    fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<CreateSessionResponse, ApiError> {
        self.send_json(Method::POST, &["sessions"], request)
    }

    fn delete_session(&self, token: &str) -> Result<(), ApiError> {
        self.send_ignoring_body(Method::DELETE, &["sessions", token])
    }

    fn with_session_token(&self, token: &str) -> Self {
        Self {
            context: self.context.with_session_token(token),
            settings: self.settings.clone(),
            http: self.http.clone(),
        }
    }
}

impl MetadataOperations for DisClient {
    fn metadata(&self) -> Result<DocumentMetadataResponse, ApiError> {
        self.get(&["metadata"], CropSize::default())
    }
}

impl ActuatorOperations for DisClient {
    fn health(&self) -> Result<ActuatorHealth, ApiError> {
        self.get(&["actuator", "health"], CropSize::default())
    }

    fn info(&self) -> Result<ActuatorInfo, ApiError> {
        self.get(&["actuator", "info"], CropSize::default())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Decodes a JSON response body.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Reads a response body while enforcing a maximum byte limit.
pub(crate) fn read_response_limited(
    response: &mut Response,
    max_bytes: usize,
) -> Result<Vec<u8>, ApiError> {
    let max_bytes_u64 = u64::try_from(max_bytes)
        .map_err(|_| ApiError::Transport("response size limit exceeds u64".to_string()))?;
    if let Some(expected) = response.content_length()
        && expected > max_bytes_u64
    {
        return Err(ApiError::Transport("dis response exceeds size limit".to_string()));
    }
    let mut buf = Vec::new();
    let mut handle = response.take(max_bytes_u64.saturating_add(1));
    handle
        .read_to_end(&mut buf)
        .map_err(|err| ApiError::Transport(format!("failed to read response: {err}")))?;
    if buf.len() > max_bytes {
        return Err(ApiError::Transport("dis response exceeds size limit".to_string()));
    }
    Ok(buf)
}
