// crates/dis-client/src/model/mod.rs
// ============================================================================
// Module: DIS Wire Model
// Description: Request and response bodies of the DIS REST API.
// Purpose: Typed serde views of the JSON exchanged with the service.
// Dependencies: base64, serde, serde_json
// ============================================================================

//! ## Overview
//! Field names follow the service's camelCase JSON. Response types tolerate
//! unknown fields, and enum-valued fields decode unrecognised values as an
//! `Unknown` variant so that newer service versions do not break decoding.
//! Binary payloads (images, crops, templates) travel as base64 strings.

// ============================================================================
// SECTION: Wire Enums
// ============================================================================

/// Declares a closed wire enum with an `Unknown` catch-all and `Display`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
            /// Value not known to this client.
            #[serde(other)]
            Unknown,
        }

        impl $name {
            /// Returns the wire name of the value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown => "UNKNOWN",
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod actuator;
pub mod common;
pub mod customer;
pub mod document;
pub mod face;
pub mod inspect;
pub mod liveness;
pub mod metadata;
pub mod session;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use actuator::*;
pub use common::*;
pub use customer::*;
pub use document::*;
pub use face::*;
pub use inspect::*;
pub use liveness::*;
pub use metadata::*;
pub use session::*;
