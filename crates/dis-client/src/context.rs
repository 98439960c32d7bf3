// crates/dis-client/src/context.rs
// ============================================================================
// Module: DIS Request Context
// Description: Immutable per-client request identity (URL, tokens).
// Purpose: Scope clients to sessions without mutating shared state.
// Dependencies: url
// ============================================================================

//! ## Overview
//! A [`RequestContext`] holds everything that is attached to every request
//! issued by one client: the service base URL, the bearer token and an
//! optional session token. Contexts are values; scoping to a session returns
//! a new context and leaves the original untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use url::Url;

use crate::error::ApiError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Header carrying the DIS session token.
pub const SESSION_TOKEN_HEADER: &str = "x-inn-session-token";
/// Path prefix of the versioned DIS API.
const API_PREFIX: [&str; 2] = ["api", "v1"];

// ============================================================================
// SECTION: Request Context
// ============================================================================

/// Identity attached to every request of a client.
///
/// # Invariants
/// - `base_url` is an absolute `http` or `https` URL.
/// - The context is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Service base URL, without the `/api/v1` prefix.
    base_url: Url,
    /// Bearer token sent in the `Authorization` header.
    bearer_token: String,
    /// Session token sent in [`SESSION_TOKEN_HEADER`] when present.
    session_token: Option<String>,
}

impl RequestContext {
    /// Creates a context for the given base URL and bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] when the base URL is not an absolute
    /// `http(s)` URL.
    pub fn new(base_url: &str, bearer_token: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|err| ApiError::Request(format!("invalid base url: {err}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ApiError::Request("base url must be http or https".to_string()));
        }
        Ok(Self {
            base_url,
            bearer_token: bearer_token.into(),
            session_token: None,
        })
    }

    /// Returns a copy of this context carrying the given session token.
    #[must_use]
    pub fn with_session_token(&self, token: impl Into<String>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            bearer_token: self.bearer_token.clone(),
            session_token: Some(token.into()),
        }
    }

    /// Returns the service base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    /// Returns the session token, if this context is session scoped.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Builds `<base>/api/v1/<segments...>`, percent-encoding each segment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] when a segment is empty.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(ApiError::Request("empty path segment".to_string()));
        }
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ApiError::Request("base url cannot carry a path".to_string()))?;
            path.pop_if_empty();
            path.extend(API_PREFIX);
            path.extend(segments);
        }
        Ok(url)
    }
}
