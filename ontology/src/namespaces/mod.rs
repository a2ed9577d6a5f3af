//! Vocabulary namespace modules.
//!
//! Each sub-module encodes one namespace as Rust static data. See
//! [`crate::Vocabulary::full`] for the `@context` assembly order.

pub mod decode;
pub mod m3_lite;
