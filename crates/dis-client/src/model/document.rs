// crates/dis-client/src/model/document.rs
// ============================================================================
// Module: DIS Document Wire Types
// Description: Document, document page and page quality payloads.
// Purpose: Typed classification advice, page results and quality reports.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Document creation with classification advice, page upload results and
//! page quality reports.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use super::common::Image;
use super::customer::DocumentType;
use crate::outcome::ErrorCoded;

// ============================================================================
// SECTION: Document
// ============================================================================

/// Data source the service reads document fields from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentSource {
    /// Visual inspection zone.
    Viz,
    /// Machine readable zone.
    Mrz,
    /// Document portrait.
    DocumentPortrait,
    /// Barcodes.
    Barcode,
}

/// Body of `PUT /customers/{id}/document`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    /// Classification hints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advice: Option<DocumentAdvice>,
    /// Sources to read; all sources when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<DocumentSource>>,
}

impl CreateDocumentRequest {
    /// Creates a request restricting classification to the given countries and types.
    #[must_use]
    pub fn with_classification(countries: &[&str], types: &[&str]) -> Self {
        Self {
            advice: Some(DocumentAdvice {
                classification: DocumentClassificationAdvice {
                    countries: countries.iter().map(|value| (*value).to_string()).collect(),
                    types: types.iter().map(|value| (*value).to_string()).collect(),
                },
            }),
            sources: None,
        }
    }

    /// Creates a request reading only the given sources.
    #[must_use]
    pub fn with_sources(sources: Vec<DocumentSource>) -> Self {
        Self {
            advice: None,
            sources: Some(sources),
        }
    }
}

/// Document classification hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAdvice {
    /// Classification restriction.
    pub classification: DocumentClassificationAdvice,
}

/// Candidate countries and types for classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentClassificationAdvice {
    /// ISO 3166 alpha-3 country codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<String>,
    /// Document type names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

/// Response of `PUT /customers/{id}/document`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentResponse {
    /// Links to document sub-resources.
    #[serde(default)]
    pub links: Option<serde_json::Value>,
}

// ============================================================================
// SECTION: Document Pages
// ============================================================================

/// Body of `PUT /customers/{id}/document/pages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentPageRequest {
    /// Page image.
    pub image: Image,
}

wire_enum! {
    /// Rejection codes of document page upload.
    DocumentPageErrorCode {
        /// No document found on the image.
        NoDocumentDetected => "NO_DOCUMENT_DETECTED",
        /// Page does not belong to the document of earlier pages.
        PageDoesntMatchDocumentTypeOfPreviousPage => "PAGE_DOESNT_MATCH_DOCUMENT_TYPE_OF_PREVIOUS_PAGE",
    }
}

wire_enum! {
    /// Warnings attached to an accepted document page.
    DocumentPageWarning {
        /// The page could not be matched to a known document type.
        DocumentTypeNotRecognized => "DOCUMENT_TYPE_NOT_RECOGNIZED",
    }
}

/// Response of `PUT /customers/{id}/document/pages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentPageResponse {
    /// Classified document type.
    #[serde(default)]
    pub document_type: Option<DocumentType>,
    /// Classified page type, e.g. `front`.
    #[serde(default)]
    pub page_type: Option<String>,
    /// Non-fatal warnings.
    #[serde(default)]
    pub warnings: Vec<DocumentPageWarning>,
    /// Rejection code, if any.
    #[serde(default)]
    pub error_code: Option<DocumentPageErrorCode>,
}

impl CreateDocumentPageResponse {
    /// Returns `true` when the page carries the not-recognised warning.
    #[must_use]
    pub fn has_not_recognized_warning(&self) -> bool {
        self.warnings.contains(&DocumentPageWarning::DocumentTypeNotRecognized)
    }
}

impl ErrorCoded for CreateDocumentPageResponse {
    type Code = DocumentPageErrorCode;

    fn error_code(&self) -> Option<Self::Code> {
        self.error_code
    }
}

/// Response of `GET /customers/{id}/document/pages/{page}/quality`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPageQuality {
    /// Whether the page is usable.
    pub fine: bool,
    /// Non-fatal quality warnings.
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Quality issues preventing processing.
    #[serde(default)]
    pub issues: Vec<String>,
}
