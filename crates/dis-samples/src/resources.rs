// crates/dis-samples/src/resources.rs
// ============================================================================
// Module: Sample Resources
// Description: Loader for bundled images, remote images and binary records.
// Purpose: Resolve image locations uniformly for every scenario.
// Dependencies: dis-client, regex, reqwest, tracing
// ============================================================================

//! ## Overview
//! A location matching `^https?://.*$` is remote; anything else is a path
//! relative to the resources root. Remote locations are downloaded with a
//! size cap and, like bundled files, sent to the service inline. Missing local
//! files are reported as [`ResourceError::Missing`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use dis_client::model::Image;
use regex::Regex;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Pattern distinguishing remote locations from bundled paths.
const REMOTE_LOCATION_PATTERN: &str = r"^https?://.*$";
/// Maximum size of a fetched remote image.
const MAX_REMOTE_BYTES: usize = 32 * 1024 * 1024;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Resource loading errors.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Location resolves to nothing.
    #[error("missing resource: {0}")]
    Missing(String),
    /// Local file could not be read.
    #[error("resource io error: {0}")]
    Io(String),
    /// Remote resource could not be fetched.
    #[error("resource fetch error: {0}")]
    Fetch(String),
}

/// Document support level directory under `images/documents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentLevel {
    /// Unknown document.
    L0,
    /// Document readable only through its MRZ.
    L1,
    /// Fully supported document.
    L2,
}

impl DocumentLevel {
    /// Returns the directory name of the level.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::L0 => "L0",
            Self::L1 => "L1",
            Self::L2 => "L2",
        }
    }
}

/// Loads bundled and remote sample resources.
#[derive(Debug, Clone)]
pub struct ResourceLoader {
    /// Directory containing `images/`.
    root: PathBuf,
    /// Remote location matcher.
    remote: Regex,
    /// Client for remote fetches.
    http: Client,
}

// ============================================================================
// SECTION: Loader
// ============================================================================

impl ResourceLoader {
    /// Creates a loader rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Fetch`] when the HTTP client cannot be built.
    pub fn new(
        root: impl Into<PathBuf>,
        timeout_ms: u64,
        user_agent: &str,
    ) -> Result<Self, ResourceError> {
        let remote = Regex::new(REMOTE_LOCATION_PATTERN)
            .map_err(|err| ResourceError::Fetch(format!("invalid remote pattern: {err}")))?;
        let http = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(user_agent.to_string())
            .build()
            .map_err(|_| ResourceError::Fetch("http client build failed".to_string()))?;
        Ok(Self {
            root: root.into(),
            remote,
            http,
        })
    }

    /// Returns the resources root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns `true` when `location` is an `http(s)` URL.
    #[must_use]
    pub fn is_remote(&self, location: &str) -> bool {
        self.remote.is_match(location)
    }

    /// Resolves a face image id to `images/faces/<id>.jpeg`; URLs pass through.
    #[must_use]
    pub fn face_location(&self, image_id: &str) -> String {
        if self.is_remote(image_id) {
            return image_id.to_string();
        }
        format!("images/faces/{image_id}.jpeg")
    }

    /// Resolves a document image id to `images/documents[/<level>]/<id>.jpeg`;
    /// URLs pass through.
    #[must_use]
    pub fn document_location(&self, level: Option<DocumentLevel>, image_id: &str) -> String {
        if self.is_remote(image_id) {
            return image_id.to_string();
        }
        match level {
            Some(level) => format!("images/documents/{}/{image_id}.jpeg", level.dir_name()),
            None => format!("images/documents/{image_id}.jpeg"),
        }
    }

    /// Builds an inline API image from a bundled or remote location.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] when a bundled file is missing or unreadable,
    /// or a remote fetch fails.
    pub fn image(&self, location: &str) -> Result<Image, ResourceError> {
        self.bytes(location).map(Image::from_bytes)
    }

    /// Loads the bytes behind a location, fetching remote ones.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] when the location cannot be resolved.
    pub fn bytes(&self, location: &str) -> Result<Vec<u8>, ResourceError> {
        if self.is_remote(location) {
            return self.fetch(location);
        }
        self.read_local(Path::new(location))
    }

    /// Loads a bundled face image.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] when the image cannot be resolved.
    pub fn face_image(&self, image_id: &str) -> Result<Image, ResourceError> {
        self.image(&self.face_location(image_id))
    }

    /// Loads a bundled document image.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] when the image cannot be resolved.
    pub fn document_image(
        &self,
        level: Option<DocumentLevel>,
        image_id: &str,
    ) -> Result<Image, ResourceError> {
        self.image(&self.document_location(level, image_id))
    }

    /// Reads a binary file such as a liveness record. Relative paths are
    /// resolved against the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Missing`] when the file does not exist.
    pub fn binary_file(&self, path: &Path) -> Result<Vec<u8>, ResourceError> {
        if !path.is_file() {
            return Err(ResourceError::Missing(path.display().to_string()));
        }
        fs::read(path).map_err(|err| ResourceError::Io(format!("{}: {err}", path.display())))
    }

    /// Reads a file relative to the resources root.
    fn read_local(&self, relative: &Path) -> Result<Vec<u8>, ResourceError> {
        let path = self.root.join(relative);
        if !path.is_file() {
            return Err(ResourceError::Missing(path.display().to_string()));
        }
        fs::read(&path).map_err(|err| ResourceError::Io(format!("{}: {err}", path.display())))
    }

    /// Fetches a remote resource with a size cap.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ResourceError> {
        debug!(url, "fetching remote resource");
        let response =
            self.http.get(url).send().map_err(|err| ResourceError::Fetch(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResourceError::Fetch(format!("{url} responded with status {status}")));
        }
        let mut body = Vec::new();
        let limit = u64::try_from(MAX_REMOTE_BYTES)
            .map_err(|_| ResourceError::Fetch("size limit overflow".to_string()))?
            .saturating_add(1);
        response
            .take(limit)
            .read_to_end(&mut body)
            .map_err(|err| ResourceError::Fetch(err.to_string()))?;
        if body.len() > MAX_REMOTE_BYTES {
            return Err(ResourceError::Fetch(format!("{url} exceeds {MAX_REMOTE_BYTES} bytes")));
        }
        Ok(body)
    }
}
