// crates/dis-samples/src/scenarios/metadata.rs
// ============================================================================
// Module: Metadata Scenario
// Description: Supported document listing for one country.
// Purpose: Summarise the document metadata table.
// Dependencies: dis-client, tracing
// ============================================================================

//! ## Overview
//! Lists the documents the service supports for one country, with page
//! count and whether a machine readable zone is present.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::MetadataOperations;
use dis_client::model::DocumentMetadata;
use dis_client::model::DocumentMetadataResponse;
use tracing::info;

use crate::error::ScenarioError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Issuing country listed by the scenario.
pub const METADATA_COUNTRY: &str = "CZE";
/// Visual zone key marking a machine readable zone.
const MRZ_KEY: &str = "machineReadableZone";

// ============================================================================
// SECTION: Summary
// ============================================================================

/// Returns `true` when any page of the document has a machine readable zone.
#[must_use]
pub fn has_mrz_zone(document: &DocumentMetadata) -> bool {
    document.pages.values().any(|page| page.visual_zone.contains_key(MRZ_KEY))
}

/// Renders one numbered line per document issued by `country`.
#[must_use]
pub fn summarize(response: &DocumentMetadataResponse, country: &str) -> Vec<String> {
    response
        .documents
        .iter()
        .filter(|document| document.document_type.country.as_deref() == Some(country))
        .enumerate()
        .map(|(index, document)| {
            let mrz = if has_mrz_zone(document) { "contains" } else { "do not contains" };
            format!(
                "{}/ Document Type: {}; Document Edition: {}; This document has {} pages and {mrz} MRZ Zone",
                index + 1,
                document.document_type.type_name.as_deref().unwrap_or("null"),
                document.document_type.edition.as_deref().unwrap_or("null"),
                document.pages.len(),
            )
        })
        .collect()
}

// ============================================================================
// SECTION: Scenario
// ============================================================================

/// Lists the supported documents of [`METADATA_COUNTRY`].
///
/// # Errors
///
/// Returns [`ScenarioError`] when the metadata call fails.
pub fn documents_metadata<A: MetadataOperations>(api: &A) -> Result<(), ScenarioError> {
    let response = api.metadata()?;
    info!("Digital Identity Service support these {METADATA_COUNTRY} documents:");
    for line in summarize(&response, METADATA_COUNTRY) {
        info!("{line}");
    }
    Ok(())
}
