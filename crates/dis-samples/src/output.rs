// crates/dis-samples/src/output.rs
// ============================================================================
// Module: Sample Output
// Description: PNG writer for images returned by the service.
// Purpose: Persist crops and portraits under the configured output root.
// Dependencies: image, thiserror, tracing
// ============================================================================

//! ## Overview
//! Images come back from the service as encoded bytes (JPEG or PNG). They are
//! decoded and re-encoded as PNG into a named folder under the output root,
//! which is created on first use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use image::ImageFormat;
use thiserror::Error;
use tracing::info;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Folder receiving face crops.
pub const FACE_CROPS_DIR: &str = "faceImageCropsOutput";
/// Folder receiving onboarding page crops and portraits.
pub const ONBOARDING_DIR: &str = "onboardingImages";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Output errors.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory could not be created.
    #[error("output directory error: {0}")]
    Directory(String),
    /// Bytes are not a decodable image.
    #[error("image decode error: {0}")]
    Decode(String),
    /// PNG could not be written.
    #[error("image write error: {0}")]
    Write(String),
}

/// Writes PNG files below an output root.
#[derive(Debug, Clone)]
pub struct ImageWriter {
    /// Parent of all output folders.
    root: PathBuf,
}

impl ImageWriter {
    /// Creates a writer rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    /// Returns the output root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Decodes `bytes` and saves them as `<root>/<folder>/<file_name>` in PNG.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] when the folder cannot be created, the bytes do
    /// not decode, or the file cannot be written.
    pub fn save_png(
        &self,
        folder: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<PathBuf, OutputError> {
        let dir = self.root.join(folder);
        fs::create_dir_all(&dir)
            .map_err(|err| OutputError::Directory(format!("{}: {err}", dir.display())))?;
        let decoded =
            image::load_from_memory(bytes).map_err(|err| OutputError::Decode(err.to_string()))?;
        let path = dir.join(file_name);
        decoded
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|err| OutputError::Write(format!("{}: {err}", path.display())))?;
        info!(path = %path.display(), "image saved");
        Ok(path)
    }
}
