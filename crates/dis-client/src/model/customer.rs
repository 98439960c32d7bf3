// crates/dis-client/src/model/customer.rs
// ============================================================================
// Module: DIS Customer Wire Types
// Description: Customer aggregate and selfie payloads.
// Purpose: Typed access to the customer fields scenarios branch on.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The customer aggregate is large and grows with every service release. Only
//! the fields scenarios inspect are typed; everything else is kept in
//! flattened maps so that logging a customer shows the full server view.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::common::Image;
use crate::outcome::ErrorCoded;

// ============================================================================
// SECTION: Customer
// ============================================================================

/// Response of `POST /customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerResponse {
    /// Server-assigned customer id.
    pub id: String,
}

/// Response of `GET /customers/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCustomerResponse {
    /// Customer aggregate, absent when nothing was onboarded yet.
    #[serde(default)]
    pub customer: Option<Customer>,
}

/// Customer aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Document read from the uploaded pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<CustomerDocument>,
    /// Remaining customer fields.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Document part of the customer aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDocument {
    /// Classified document type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    /// Machine readable zone, when one was read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrz: Option<Value>,
    /// Links to document sub-resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<DocumentLinks>,
    /// Remaining document fields.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl CustomerDocument {
    /// Returns the portrait link, if a portrait was found on the document.
    #[must_use]
    pub fn portrait_link(&self) -> Option<&str> {
        self.links.as_ref().and_then(|links| links.portrait.as_deref())
    }
}

/// Links of a customer document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLinks {
    /// Link to the cropped document portrait.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<String>,
}

wire_enum! {
    /// Level of service support for a document type.
    SupportLevel {
        /// Document is recognised but not supported for extraction.
        NotSupported => "NOT_SUPPORTED",
        /// Only part of the document is supported.
        Partial => "PARTIAL",
        /// Document is fully supported.
        Full => "FULL",
    }
}

/// Classified document type.
///
/// Every field is optional: level 0 documents come back with none of them,
/// level 1 documents with only `machine_readable_travel_document`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentType {
    /// Document type name, e.g. `identity-card`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Document edition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    /// ISO 3166 alpha-3 issuing country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Machine readable travel document class (e.g. `TD1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_readable_travel_document: Option<String>,
    /// Service support level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_level: Option<SupportLevel>,
}

// ============================================================================
// SECTION: Selfie
// ============================================================================

/// Body of `PUT /customers/{id}/selfie`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSelfieRequest {
    /// Selfie image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Reference to a liveness selfie to reuse as the customer selfie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selfie_origin: Option<LivenessSelfieOrigin>,
}

impl CreateSelfieRequest {
    /// Creates a selfie from an image.
    #[must_use]
    pub const fn from_image(image: Image) -> Self {
        Self {
            image: Some(image),
            selfie_origin: None,
        }
    }

    /// Creates a selfie from a liveness selfie link.
    #[must_use]
    pub fn from_liveness_selfie(link: impl Into<String>) -> Self {
        Self {
            image: None,
            selfie_origin: Some(LivenessSelfieOrigin {
                link: link.into(),
            }),
        }
    }
}

/// Liveness selfie used as selfie source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivenessSelfieOrigin {
    /// Link to the liveness selfie.
    pub link: String,
}

wire_enum! {
    /// Rejection codes of selfie creation.
    SelfieErrorCode {
        /// No face found on the selfie.
        NoFaceDetected => "NO_FACE_DETECTED",
    }
}

wire_enum! {
    /// Warnings attached to an accepted selfie.
    SelfieWarning {
        /// More than one face found; the largest was used.
        MultipleFacesDetected => "MULTIPLE_FACES_DETECTED",
        /// Selfie quality is below the recommended level.
        LowQuality => "LOW_QUALITY",
    }
}

/// Response of `PUT /customers/{id}/selfie`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSelfieResponse {
    /// Non-fatal selfie warnings.
    #[serde(default)]
    pub warnings: Vec<SelfieWarning>,
    /// Rejection code, if any.
    #[serde(default)]
    pub error_code: Option<SelfieErrorCode>,
}

impl ErrorCoded for CreateSelfieResponse {
    type Code = SelfieErrorCode;

    fn error_code(&self) -> Option<Self::Code> {
        self.error_code
    }
}
