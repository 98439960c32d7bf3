// crates/dis-samples/src/scenarios/crops.rs
// ============================================================================
// Module: Face Crop Scenario
// Description: Crop coordinates, crops and removed-background crops.
// Purpose: Save every crop variant of the example face as PNG.
// Dependencies: dis-client, tracing
// ============================================================================

//! ## Overview
//! Crops the example face in every supported variant and saves each result
//! under `faceImageCropsOutput/`. The face is deleted afterwards.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::FaceOperations;
use dis_client::model::CropCoordinates;
use dis_client::model::CropSize;
use dis_client::model::Point;
use tracing::info;

use super::faces::detect_by_url;
use crate::cleanup::with_face;
use crate::error::ScenarioError;
use crate::harness::SampleEnv;
use crate::output::FACE_CROPS_DIR;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Forced crop dimension in pixels.
const FORCED_SIZE: u32 = 800;

// ============================================================================
// SECTION: Scenario
// ============================================================================

/// Reports crop coordinates of the example face and saves six crops:
/// default, forced width and forced height, each with and without background.
///
/// # Errors
///
/// Returns [`ScenarioError`] when a call fails or a crop cannot be saved.
pub fn face_crops<A: FaceOperations>(api: &A, env: &SampleEnv) -> Result<(), ScenarioError> {
    with_face(api, &detect_by_url(&env.config.example_image_url), |face_id, _| {
        let coordinates = api.crop_coordinates(face_id)?;
        let fully_captured =
            coordinates.fully_captured.map_or_else(|| "unknown".to_string(), |v| v.to_string());
        match coordinates.coordinates.as_ref() {
            Some(corners) => info!(
                "Face crop found with face fully present: {fully_captured} on coordinates: {}",
                describe_corners(corners)
            ),
            None => info!("Face crop found with face fully present: {fully_captured}"),
        }

        let variants = [
            (CropSize::default(), "croppedFaceImage.png", false),
            (CropSize::width(FORCED_SIZE), "croppedFaceImage_width_800.png", false),
            (CropSize::height(FORCED_SIZE), "croppedFaceImage_height_800.png", false),
            (CropSize::default(), "removedBackgroundFaceImage.png", true),
            (CropSize::width(FORCED_SIZE), "removedBackgroundFaceImage_width_800.png", true),
            (CropSize::height(FORCED_SIZE), "removedBackgroundFaceImage_height_800.png", true),
        ];
        for (size, file_name, removed_background) in variants {
            let crop = if removed_background {
                info!("Calling crop with removed background for face with id: {face_id}");
                api.crop_removed_background(face_id, size)?
            } else {
                info!("Calling crop for face with id: {face_id}");
                api.crop(face_id, size)?
            };
            env.output.save_png(FACE_CROPS_DIR, file_name, &crop.data)?;
            info!("Face image crop obtained and stored in {FACE_CROPS_DIR}/{file_name}");
        }
        Ok(())
    })
}

/// Formats crop corners as `(x, y)` pairs.
fn describe_corners(corners: &CropCoordinates) -> String {
    let point = |p: &Point| format!("({}, {})", p.x, p.y);
    format!(
        "top-left {} top-right {} bottom-left {} bottom-right {}",
        point(&corners.top_left),
        point(&corners.top_right),
        point(&corners.bottom_left),
        point(&corners.bottom_right)
    )
}
