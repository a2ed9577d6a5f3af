//! `decode` namespace — base for the identifiers minted in extended mode.
//!
//! Declares no classes. An annotated reading's `@id` is the compact IRI
//! `decode:/<deviceId>:<createdAt>` resolved against this prefix.

use crate::model::iris::{NS_DECODE, PREFIX_DECODE};
use crate::model::{Namespace, NamespaceModule};

/// Returns the `decode` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: PREFIX_DECODE,
            iri: NS_DECODE,
            label: "DECODE reading identifiers",
            comment: "Identifiers for individual readings, derived from the \
                      originating device and the reading's creation time.",
        },
        classes: vec![],
    }
}

/// Builds the compact `@id` of a reading from its rendered parts.
#[must_use]
pub fn reading_id(device_id: &str, created_at: &str) -> String {
    format!("{PREFIX_DECODE}:/{device_id}:{created_at}")
}
