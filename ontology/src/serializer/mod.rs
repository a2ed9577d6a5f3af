//! Serializers for the annotation vocabulary.
//!
//! - **JSON-LD** ([`jsonld`]) — output to `public/expando.vocabulary.json`

pub mod jsonld;
