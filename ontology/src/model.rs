//! Core vocabulary model types.
//!
//! These types represent the ontology terms the annotator writes into each
//! reading as typed Rust data. Class identifiers are stored in compact
//! (`prefix:local`) form because that is how they appear in annotated output.
//! The top-level entry point is [`Vocabulary::full()`](crate::Vocabulary::full).

/// An ontology namespace bound to a prefix in the JSON-LD `@context`.
#[derive(Debug, Clone)]
pub struct Namespace {
    /// The prefix used in the `@context` (e.g., `"m3-lite"`).
    pub prefix: &'static str,
    /// The full IRI the prefix expands to.
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the namespace.
    pub comment: &'static str,
}

/// A class from an external vocabulary, referenced by compact IRI.
#[derive(Debug, Clone)]
pub struct Class {
    /// Compact IRI (e.g., `"m3-lite:AirPollutantSensor"`).
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Compact IRIs of parent classes (`rdfs:subClassOf`).
    pub subclass_of: &'static [&'static str],
}

impl Class {
    /// Returns the prefix part of the compact IRI, if it has one.
    #[must_use]
    pub fn prefix(&self) -> Option<&'static str> {
        self.id.split_once(':').map(|(prefix, _)| prefix)
    }
}

/// A namespace together with the classes the annotator uses from it.
#[derive(Debug, Clone)]
pub struct NamespaceModule {
    /// Namespace metadata.
    pub namespace: Namespace,
    /// Classes referenced from this namespace.
    pub classes: Vec<Class>,
}

/// The complete vocabulary known to the annotator.
#[derive(Debug)]
pub struct Vocabulary {
    /// Vocabulary version (e.g., `"1.0.0"`).
    pub version: &'static str,
    /// Namespace modules in `@context` order.
    pub namespaces: Vec<NamespaceModule>,
}

impl Vocabulary {
    /// Looks up a namespace by its `@context` prefix.
    #[must_use]
    pub fn find_namespace(&self, prefix: &str) -> Option<&Namespace> {
        self.namespaces
            .iter()
            .map(|m| &m.namespace)
            .find(|ns| ns.prefix == prefix)
    }

    /// Looks up a class by its compact IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, compact_iri: &str) -> Option<&Class> {
        self.namespaces
            .iter()
            .flat_map(|m| m.classes.iter())
            .find(|c| c.id == compact_iri)
    }

    /// Returns the total number of classes across all namespaces.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.classes.len()).sum()
    }

    /// Expands a compact IRI against the known prefixes.
    ///
    /// Returns `None` when the value has no prefix or the prefix is unknown.
    #[must_use]
    pub fn expand(&self, compact_iri: &str) -> Option<String> {
        let (prefix, local) = compact_iri.split_once(':')?;
        self.find_namespace(prefix)
            .map(|ns| format!("{}{local}", ns.iri))
    }
}

/// IRI constants shared by the namespace modules and the annotator.
pub mod iris {
    /// m3-lite IoT measurement ontology.
    pub const NS_M3_LITE: &str = "http://purl.org/iot/vocab/m3-lite#";
    /// Base for reading identifiers minted in extended mode.
    pub const NS_DECODE: &str = "http://decode.xxx";

    /// `m3-lite` prefix.
    pub const PREFIX_M3_LITE: &str = "m3-lite";
    /// `decode` prefix.
    pub const PREFIX_DECODE: &str = "decode";

    /// `m3-lite:AirPollutantSensor`, the `@type` of every annotated reading.
    pub const AIR_POLLUTANT_SENSOR: &str = "m3-lite:AirPollutantSensor";
    /// `m3-lite:Environment`, the `@type` of every reading's `domain`.
    pub const ENVIRONMENT: &str = "m3-lite:Environment";
    /// `m3-lite:Sensor`.
    pub const SENSOR: &str = "m3-lite:Sensor";
    /// `m3-lite:DomainOfInterest`.
    pub const DOMAIN_OF_INTEREST: &str = "m3-lite:DomainOfInterest";
}
