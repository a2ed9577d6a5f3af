//! Error types for annotation, transform execution and configuration.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// The kind of a JSON value, used to report what was found where a mapping
/// was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    /// `null`.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any JSON number.
    Number,
    /// A JSON string.
    String,
    /// A JSON array.
    Array,
    /// A JSON object (mapping).
    Object,
}

impl JsonKind {
    /// Classifies a JSON value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// Returns the lowercase name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by a transform.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    /// The reading was not a JSON object.
    #[error("invalid input kind: expected object, found {found}")]
    InvalidInputKind {
        /// What was passed instead.
        found: JsonKind,
    },
}

/// Errors raised while executing a transform against a raw payload.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The payload was empty or contained only whitespace.
    #[error("empty payload")]
    EmptyPayload,

    /// The payload was not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    /// The transform rejected the decoded payload.
    #[error("transform '{transform}' failed: {source}")]
    Transform {
        /// Name of the transform that failed.
        transform: String,
        /// Underlying transform error.
        #[source]
        source: AnnotateError,
    },
}

/// Errors raised while loading annotator configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration was not valid TOML for [`crate::AnnotatorConfig`].
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
