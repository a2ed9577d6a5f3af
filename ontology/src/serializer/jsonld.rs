//! JSON-LD 1.1 serializer for the annotation vocabulary.
//!
//! Produces a single JSON-LD document with a `@context` binding every known
//! prefix and a `@graph` holding one node per namespace and per class.
//! Downstream consumers can load it to resolve the compact IRIs that appear
//! in annotated readings.

use serde_json::{json, Map, Value};

use crate::model::{Class, Namespace, Vocabulary};

/// Serializes the vocabulary to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(vocabulary: &Vocabulary) -> Value {
    json!({
        "@context": build_context(vocabulary),
        "@graph": build_graph(vocabulary)
    })
}

/// Builds only the `@context` object, as attached to extended readings.
#[must_use]
pub fn context(vocabulary: &Vocabulary) -> Value {
    let mut ctx = Map::new();
    for module in &vocabulary.namespaces {
        ctx.insert(module.namespace.prefix.to_owned(), json!(module.namespace.iri));
    }
    Value::Object(ctx)
}

fn build_context(vocabulary: &Vocabulary) -> Value {
    let mut ctx = Map::new();
    ctx.insert("owl".to_owned(), json!("http://www.w3.org/2002/07/owl#"));
    ctx.insert("rdfs".to_owned(), json!("http://www.w3.org/2000/01/rdf-schema#"));
    if let Value::Object(prefixes) = context(vocabulary) {
        ctx.extend(prefixes);
    }
    Value::Object(ctx)
}

fn build_graph(vocabulary: &Vocabulary) -> Value {
    let mut nodes: Vec<Value> = Vec::new();

    for module in &vocabulary.namespaces {
        nodes.push(namespace_to_json(&module.namespace, vocabulary.version));
        for class in &module.classes {
            nodes.push(class_to_json(class));
        }
    }

    Value::Array(nodes)
}

fn namespace_to_json(ns: &Namespace, version: &str) -> Value {
    json!({
        "@id": ns.iri,
        "@type": "owl:Ontology",
        "rdfs:label": ns.label,
        "rdfs:comment": ns.comment,
        "owl:versionInfo": version
    })
}

fn class_to_json(class: &Class) -> Value {
    let mut node = json!({
        "@id": class.id,
        "@type": "owl:Class",
        "rdfs:label": class.label,
        "rdfs:comment": class.comment
    });
    if !class.subclass_of.is_empty() {
        let parents: Vec<Value> = class
            .subclass_of
            .iter()
            .map(|iri| json!({ "@id": iri }))
            .collect();
        node["rdfs:subClassOf"] = Value::Array(parents);
    }
    node
}
