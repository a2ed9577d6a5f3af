//! Transform execution against raw payloads.
//!
//! A host hands the engine the bytes it received and the transform to run.
//! The engine decodes the payload as JSON, applies the transform and returns
//! its output. The transform is looked up by convention under the name
//! `decode`; [`Identity`] is what runs when no annotation is wanted.

use std::time::Instant;

use serde_json::Value;

use crate::error::{AnnotateError, EngineError};

/// A named, single-argument transformation of a decoded payload.
pub trait Transform: Send + Sync {
    /// Name the host invokes the transform by.
    fn name(&self) -> &str;

    /// Transforms one decoded payload.
    ///
    /// # Errors
    ///
    /// Returns an [`AnnotateError`] if the input has a shape the transform
    /// cannot handle.
    fn apply(&self, input: Value) -> Result<Value, AnnotateError>;
}

/// Returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl Transform for Identity {
    fn name(&self) -> &str {
        "decode"
    }

    fn apply(&self, input: Value) -> Result<Value, AnnotateError> {
        Ok(input)
    }
}

/// Runs transforms over JSON payloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

impl Engine {
    /// Creates an engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Decodes `payload` as JSON and applies `transform` to it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyPayload`] for blank payloads,
    /// [`EngineError::Payload`] if the bytes are not valid JSON, and
    /// [`EngineError::Transform`] if the transform rejects the value.
    pub fn execute(
        &self,
        transform: &dyn Transform,
        payload: &[u8],
    ) -> Result<Value, EngineError> {
        let start = Instant::now();

        if payload.iter().all(|&b| matches!(b, b' ' | b'\t' | b'\n' | b'\r')) {
            return Err(EngineError::EmptyPayload);
        }
        let input: Value = serde_json::from_slice(payload)?;

        let output = transform
            .apply(input)
            .map_err(|source| EngineError::Transform {
                transform: transform.name().to_owned(),
                source,
            })?;

        tracing::debug!(
            transform = transform.name(),
            bytes = payload.len(),
            duration = ?start.elapsed(),
            "executed transform"
        );
        Ok(output)
    }
}
