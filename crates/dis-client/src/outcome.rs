// crates/dis-client/src/outcome.rs
// ============================================================================
// Module: DIS Call Outcomes
// Description: Tagged results for endpoints that report a domain error code.
// Purpose: Make accepted and rejected responses explicit at call sites.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Several DIS endpoints answer `200 OK` with an `errorCode` field when the
//! input was processed but rejected (no face found, not enough liveness data).
//! [`Outcome`] lifts that field into the type so callers branch with `match`
//! instead of checking for a nullable code.

// ============================================================================
// SECTION: Error Code Access
// ============================================================================

/// Response types that may carry a domain error code.
pub trait ErrorCoded {
    /// Closed error code enum for the endpoint.
    type Code: Copy;

    /// Returns the error code reported by the service, if any.
    fn error_code(&self) -> Option<Self::Code>;
}

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Result of a DIS call whose response may be rejected with a domain code.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, C> {
    /// The service accepted the input.
    Accepted(T),
    /// The service processed the input and rejected it.
    Rejected {
        /// Domain error code.
        code: C,
        /// Full response body, including warnings.
        response: T,
    },
}

impl<T> Outcome<T, T::Code>
where
    T: ErrorCoded,
{
    /// Classifies a decoded response by its error code.
    #[must_use]
    pub fn from_response(response: T) -> Self {
        match response.error_code() {
            Some(code) => Self::Rejected {
                code,
                response,
            },
            None => Self::Accepted(response),
        }
    }
}

impl<T, C> Outcome<T, C> {
    /// Returns the response body regardless of acceptance.
    #[must_use]
    pub const fn response(&self) -> &T {
        match self {
            Self::Accepted(response)
            | Self::Rejected {
                response, ..
            } => response,
        }
    }

    /// Consumes the outcome and returns the response body.
    #[must_use]
    pub fn into_response(self) -> T {
        match self {
            Self::Accepted(response)
            | Self::Rejected {
                response, ..
            } => response,
        }
    }

    /// Returns `true` when the service accepted the input.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Converts into a `Result`, keeping only the rejection code on failure.
    ///
    /// # Errors
    ///
    /// Returns the rejection code when the outcome is [`Outcome::Rejected`].
    pub fn accepted(self) -> Result<T, C> {
        match self {
            Self::Accepted(response) => Ok(response),
            Self::Rejected {
                code, ..
            } => Err(code),
        }
    }
}
