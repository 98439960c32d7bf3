// crates/dis-client/src/api.rs
// ============================================================================
// Module: DIS API Traits
// Description: One trait per DIS API group.
// Purpose: Let scenarios depend on behaviour rather than on the transport.
// Dependencies: crate::model, crate::outcome
// ============================================================================

//! ## Overview
//! [`DisClient`](crate::DisClient) implements every trait here against the
//! live service. Tests implement them with in-memory doubles. All methods are
//! blocking and issue exactly one request.

// ============================================================================
// SECTION: Imports
// ============================================================================

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
// SECTION: Face Operations
// ============================================================================

/// Face detection and evaluation endpoints.
pub trait FaceOperations {
    /// Detects a face and stores it server side (`POST /faces`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn detect(
        &self,
        request: &CreateFaceRequest,
    ) -> Result<Outcome<CreateFaceResponse, CreateFaceErrorCode>, ApiError>;

    /// Deletes a stored face (`DELETE /faces/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn delete_face(&self, face_id: &str) -> Result<(), ApiError>;

    /// Estimates age and gender (`GET /faces/{id}/aspects`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn evaluate_aspects(&self, face_id: &str) -> Result<FaceAspectsResponse, ApiError>;

    /// Scores face mask presence (`GET /faces/{id}/face-mask`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails, including when the service
    /// runs in a detection mode without mask support.
    fn check_face_mask(&self, face_id: &str) -> Result<FaceMaskResponse, ApiError>;

    /// Scores glasses presence (`GET /faces/{id}/glasses`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn check_glasses(&self, face_id: &str) -> Result<GlassesResponse, ApiError>;

    /// Evaluates image quality attributes (`GET /faces/{id}/quality`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn check_quality(&self, face_id: &str) -> Result<FaceQualityResponse, ApiError>;

    /// Crops the face (`GET /faces/{id}/crop`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn crop(&self, face_id: &str, size: CropSize) -> Result<ImageCrop, ApiError>;

    /// Crops the face with the background removed
    /// (`GET /faces/{id}/crop/removed-background`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn crop_removed_background(&self, face_id: &str, size: CropSize)
    -> Result<ImageCrop, ApiError>;

    /// Returns crop corners in the source image (`GET /faces/{id}/crop/coordinates`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn crop_coordinates(&self, face_id: &str) -> Result<CropCoordinatesResponse, ApiError>;

    /// Creates a face template (`GET /faces/{id}/face-template`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn create_template(&self, face_id: &str) -> Result<FaceTemplate, ApiError>;

    /// Compares a face with a reference (`POST /faces/{id}/similarity`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn check_similarity(
        &self,
        face_id: &str,
        request: &FaceSimilarityRequest,
    ) -> Result<FaceSimilarityResponse, ApiError>;
}

// ============================================================================
// SECTION: Customer Onboarding
// ============================================================================

/// Customer onboarding endpoints.
pub trait CustomerOnboarding {
    /// Creates an empty customer (`POST /customers`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn create_customer(&self) -> Result<CreateCustomerResponse, ApiError>;

    /// Reads the customer aggregate (`GET /customers/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn get_customer(&self, customer_id: &str) -> Result<GetCustomerResponse, ApiError>;

    /// Deletes a customer and all of its sub-resources (`DELETE /customers/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn delete_customer(&self, customer_id: &str) -> Result<(), ApiError>;

    /// Sets the customer selfie (`PUT /customers/{id}/selfie`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn create_selfie(
        &self,
        customer_id: &str,
        request: &CreateSelfieRequest,
    ) -> Result<Outcome<CreateSelfieResponse, SelfieErrorCode>, ApiError>;

    /// Creates the liveness sub-resource (`PUT /customers/{id}/liveness`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn create_liveness(&self, customer_id: &str) -> Result<(), ApiError>;

    /// Uploads a liveness selfie (`POST /customers/{id}/liveness/selfies`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn create_liveness_selfie(
        &self,
        customer_id: &str,
        request: &CreateLivenessSelfieRequest,
    ) -> Result<Outcome<CreateLivenessSelfieResponse, LivenessSelfieErrorCode>, ApiError>;

    /// Uploads a binary liveness record (`POST /customers/{id}/liveness/records`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn create_liveness_record(
        &self,
        customer_id: &str,
        record: &[u8],
    ) -> Result<Outcome<CreateLivenessRecordResponse, LivenessRecordErrorCode>, ApiError>;

    /// Evaluates liveness (`POST /customers/{id}/liveness/evaluation`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn evaluate_liveness(
        &self,
        customer_id: &str,
        request: &EvaluateLivenessRequest,
    ) -> Result<Outcome<EvaluateLivenessResponse, LivenessEvaluationErrorCode>, ApiError>;

    /// Creates the document sub-resource (`PUT /customers/{id}/document`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn create_document(
        &self,
        customer_id: &str,
        request: &CreateDocumentRequest,
    ) -> Result<CreateDocumentResponse, ApiError>;

    /// Uploads a document page (`PUT /customers/{id}/document/pages`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn create_document_page(
        &self,
        customer_id: &str,
        request: &CreateDocumentPageRequest,
    ) -> Result<Outcome<CreateDocumentPageResponse, DocumentPageErrorCode>, ApiError>;

    /// Reports page quality (`GET /customers/{id}/document/pages/{page}/quality`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn document_page_quality(
        &self,
        customer_id: &str,
        page_type: &str,
    ) -> Result<DocumentPageQuality, ApiError>;

    /// Returns the normalised page image (`GET /customers/{id}/document/pages/{page}/crop`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn document_page_crop(
        &self,
        customer_id: &str,
        page_type: &str,
        size: CropSize,
    ) -> Result<ImageCrop, ApiError>;

    /// Returns the document portrait (`GET /customers/{id}/document/portrait`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn document_portrait(&self, customer_id: &str, size: CropSize)
    -> Result<ImageCrop, ApiError>;

    /// Cross-checks the customer (`POST /customers/{id}/inspect`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn inspect(&self, customer_id: &str) -> Result<CustomerInspectResponse, ApiError>;

    /// Cross-checks the customer document (`POST /customers/{id}/document/inspect`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn inspect_document(&self, customer_id: &str) -> Result<DocumentInspectResponse, ApiError>;
}

// ============================================================================
// SECTION: Session Management
// ============================================================================

/// Session endpoints and session scoping.
pub trait SessionManagement {
    /// Creates a session (`POST /sessions`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<CreateSessionResponse, ApiError>;

    /// Deletes a session (`DELETE /sessions/{token}`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn delete_session(&self, token: &str) -> Result<(), ApiError>;

    /// Returns a client whose requests carry the session token.
    ///
    /// The receiver is left unchanged.
    #[must_use]
    fn with_session_token(&self, token: &str) -> Self
    where
        Self: Sized;
}

// ============================================================================
// SECTION: Metadata And Actuator
// ============================================================================

/// Document metadata endpoint.
pub trait MetadataOperations {
    /// Returns the supported document table (`GET /metadata`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn metadata(&self) -> Result<DocumentMetadataResponse, ApiError>;
}

/// Service health endpoints.
pub trait ActuatorOperations {
    /// Returns service health (`GET /actuator/health`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn health(&self) -> Result<ActuatorHealth, ApiError>;

    /// Returns build and library versions (`GET /actuator/info`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    fn info(&self) -> Result<ActuatorInfo, ApiError>;
}
