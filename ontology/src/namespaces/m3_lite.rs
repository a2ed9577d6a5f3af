//! `m3-lite` namespace — the IoT measurement ontology used for sensor typing.
//!
//! Only the classes the annotator writes (and their direct parents) are
//! encoded here; the full vocabulary is documented at
//! <http://ontology.fiesta-iot.eu/ontologyDocs/fiesta-iot/doc>.

use crate::model::iris::{
    AIR_POLLUTANT_SENSOR, DOMAIN_OF_INTEREST, ENVIRONMENT, NS_M3_LITE, PREFIX_M3_LITE, SENSOR,
};
use crate::model::{Class, Namespace, NamespaceModule};

/// Returns the `m3-lite` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: PREFIX_M3_LITE,
            iri: NS_M3_LITE,
            label: "M3-lite IoT Ontology",
            comment: "Lightweight taxonomy of IoT sensor types, measured quantities, \
                      units and domains of interest.",
        },
        classes: classes(),
    }
}

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: SENSOR,
            label: "Sensor",
            comment: "A device that observes a property of a feature of interest.",
            subclass_of: &[],
        },
        Class {
            id: AIR_POLLUTANT_SENSOR,
            label: "Air Pollutant Sensor",
            comment: "A sensor measuring the concentration of pollutants in air.",
            subclass_of: &[SENSOR],
        },
        Class {
            id: DOMAIN_OF_INTEREST,
            label: "Domain of Interest",
            comment: "The application domain an observation belongs to.",
            subclass_of: &[],
        },
        Class {
            id: ENVIRONMENT,
            label: "Environment",
            comment: "The environmental monitoring domain.",
            subclass_of: &[DOMAIN_OF_INTEREST],
        },
    ]
}
