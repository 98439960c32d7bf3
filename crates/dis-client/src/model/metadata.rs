// crates/dis-client/src/model/metadata.rs
// ============================================================================
// Module: DIS Metadata Wire Types
// Description: Supported document metadata table.
// Purpose: Typed document, page and visual zone metadata.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The supported document table, keyed by country.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Metadata
// ============================================================================

/// Response of `GET /metadata`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadataResponse {
    /// Supported documents.
    #[serde(default)]
    pub documents: Vec<DocumentMetadata>,
}

/// Metadata of one supported document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Document identity.
    pub document_type: MetadataDocumentType,
    /// Pages keyed by page type.
    #[serde(default)]
    pub pages: BTreeMap<String, PageMetadata>,
}

/// Identity of a supported document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDocumentType {
    /// Document type name.
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    /// Document edition.
    #[serde(default)]
    pub edition: Option<String>,
    /// ISO 3166 alpha-3 issuing country.
    #[serde(default)]
    pub country: Option<String>,
}

/// Metadata of one document page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Visual zone fields keyed by field name.
    #[serde(default)]
    pub visual_zone: BTreeMap<String, Value>,
}
