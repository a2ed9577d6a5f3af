//! Ontology annotation of sensor readings.
//!
//! The `expando-ontology` crate attaches fixed JSON-LD metadata from the
//! m3-lite IoT vocabulary to sensor readings before they are forwarded
//! downstream. It also encodes that vocabulary as typed Rust data and can
//! serialize it as a JSON-LD document.
//!
//! # Entry Point
//!
//! ```
//! use expando_ontology::{Annotator, Mode};
//! use serde_json::json;
//!
//! let reading = json!({ "deviceId": "sensor42", "createdAt": "2021-01-01T00:00:00Z" });
//! let annotated = Annotator::new(Mode::Extended).annotate(&reading).unwrap();
//! assert_eq!(annotated["@id"], "decode:/sensor42:2021-01-01T00:00:00Z");
//! assert_eq!(annotated["@type"], "m3-lite:AirPollutantSensor");
//! ```
//!
//! # Running a transform over raw bytes
//!
//! ```
//! use expando_ontology::{Annotator, Engine, Mode};
//!
//! let out = Engine::new()
//!     .execute(&Annotator::new(Mode::Basic), br#"{"deviceId":"a"}"#)
//!     .unwrap();
//! assert!(out.get("@id").is_none());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod annotator;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod model;
pub mod namespaces;
pub mod serializer;

pub use annotator::{annotate, Annotator, Mode};
pub use config::AnnotatorConfig;
pub use console::{Console, NoopConsole, TracingConsole};
pub use engine::{Engine, Identity, Transform};
pub use error::{AnnotateError, ConfigError, EngineError, JsonKind};
pub use model::{Class, Namespace, NamespaceModule, Vocabulary};

impl Vocabulary {
    /// Returns the vocabulary with every namespace the annotator writes.
    ///
    /// Assembly order is the `@context` order of an extended reading:
    /// `m3-lite → decode`.
    #[must_use]
    pub fn full() -> &'static Vocabulary {
        static VOCABULARY: std::sync::OnceLock<Vocabulary> = std::sync::OnceLock::new();
        VOCABULARY.get_or_init(|| Vocabulary {
            version: "1.0.0",
            namespaces: vec![namespaces::m3_lite::module(), namespaces::decode::module()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::iris;

    #[test]
    fn namespace_count() {
        assert_eq!(Vocabulary::full().namespaces.len(), 2);
    }

    #[test]
    fn class_count() {
        assert_eq!(Vocabulary::full().class_count(), 4);
    }

    #[test]
    fn annotation_terms_are_declared() {
        let vocabulary = Vocabulary::full();
        assert!(vocabulary.find_class(iris::AIR_POLLUTANT_SENSOR).is_some());
        assert!(vocabulary.find_class(iris::ENVIRONMENT).is_some());
        assert!(vocabulary.find_class("m3-lite:Thermometer").is_none());
    }

    #[test]
    fn all_class_iris_unique() {
        let mut iris = std::collections::HashSet::new();
        for module in &Vocabulary::full().namespaces {
            for class in &module.classes {
                assert!(iris.insert(class.id), "Duplicate class IRI: {}", class.id);
            }
        }
    }

    #[test]
    fn class_prefixes_resolve() {
        let vocabulary = Vocabulary::full();
        for module in &vocabulary.namespaces {
            for class in &module.classes {
                assert_eq!(class.prefix(), Some(module.namespace.prefix));
                for parent in class.subclass_of {
                    assert!(
                        vocabulary.find_class(parent).is_some(),
                        "Unknown parent {parent} of {}",
                        class.id
                    );
                }
            }
        }
    }

    #[test]
    fn expand_compact_iris() {
        let vocabulary = Vocabulary::full();
        assert_eq!(
            vocabulary.expand(iris::AIR_POLLUTANT_SENSOR).as_deref(),
            Some("http://purl.org/iot/vocab/m3-lite#AirPollutantSensor")
        );
        assert_eq!(
            vocabulary.expand("decode:/sensor42:t").as_deref(),
            Some("http://decode.xxx/sensor42:t")
        );
        assert_eq!(vocabulary.expand("unknown:Thing"), None);
        assert_eq!(vocabulary.expand("no-prefix"), None);
    }

    #[test]
    fn find_namespace_by_prefix() {
        let ns = Vocabulary::full()
            .find_namespace(iris::PREFIX_DECODE)
            .expect("decode namespace");
        assert_eq!(ns.iri, iris::NS_DECODE);
    }
}
