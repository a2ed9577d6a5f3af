//! Ontology annotation of sensor readings.
//!
//! The annotator copies a reading and attaches fixed JSON-LD metadata:
//!
//! | Key | Basic | Extended |
//! |-----|-------|----------|
//! | `@context` | `m3-lite` prefix | `m3-lite` and `decode` prefixes |
//! | `@id` | not set | `decode:/<deviceId>:<createdAt>` |
//! | `@type` | `m3-lite:AirPollutantSensor` | same |
//! | `domain` | `{"@type": "m3-lite:Environment"}` | same |
//!
//! Every other key of the reading passes through untouched. Measurement
//! values are not interpreted.

use std::fmt;
use std::sync::Arc;

use serde_json::{json, Map, Number, Value};

use crate::config::AnnotatorConfig;
use crate::console::{Console, TracingConsole};
use crate::engine::Transform;
use crate::error::{AnnotateError, JsonKind};
use crate::model::iris::{
    AIR_POLLUTANT_SENSOR, ENVIRONMENT, NS_DECODE, NS_M3_LITE, PREFIX_DECODE, PREFIX_M3_LITE,
};
use crate::namespaces::decode::reading_id;

/// Key holding the JSON-LD context.
pub const KEY_CONTEXT: &str = "@context";
/// Key holding the reading's identifier (extended mode only).
pub const KEY_ID: &str = "@id";
/// Key holding the reading's type.
pub const KEY_TYPE: &str = "@type";
/// Key holding the reading's domain of interest.
pub const KEY_DOMAIN: &str = "domain";
/// Reading field naming the originating device.
pub const FIELD_DEVICE_ID: &str = "deviceId";
/// Reading field holding the creation timestamp.
pub const FIELD_CREATED_AT: &str = "createdAt";

/// Rendering of a field the reading does not carry.
const UNDEFINED: &str = "undefined";

/// Which annotations are attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `@context` (m3-lite only), `@type` and `domain`.
    #[default]
    Basic,
    /// Basic plus the `decode` prefix and a derived `@id`.
    Extended,
}

impl Mode {
    /// Returns the mode name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Basic => "basic",
            Mode::Extended => "extended",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attaches ontology annotations to readings.
///
/// Immutable once built, so one instance can serve any number of callers.
#[derive(Clone)]
pub struct Annotator {
    mode: Mode,
    console: Arc<dyn Console>,
}

impl fmt::Debug for Annotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotator").field("mode", &self.mode).finish()
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl Annotator {
    /// Creates an annotator that logs through [`TracingConsole`].
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            console: Arc::new(TracingConsole),
        }
    }

    /// Creates an annotator from loaded configuration.
    #[must_use]
    pub fn from_config(config: &AnnotatorConfig) -> Self {
        Self::new(config.mode())
    }

    /// Replaces the console the annotator logs through.
    #[must_use]
    pub fn with_console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = console;
        self
    }

    /// Returns the configured mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns an annotated copy of `reading`.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotateError::InvalidInputKind`] if `reading` is not a
    /// JSON object.
    pub fn annotate(&self, reading: &Value) -> Result<Value, AnnotateError> {
        match reading {
            Value::Object(map) => Ok(Value::Object(self.annotate_map(map.clone()))),
            other => Err(AnnotateError::InvalidInputKind {
                found: JsonKind::of(other),
            }),
        }
    }

    /// Annotates an owned reading. Cannot fail.
    #[must_use]
    pub fn annotate_map(&self, mut reading: Map<String, Value>) -> Map<String, Value> {
        self.console
            .log(self.name(), &[json!("decode called"), json!(self.mode.as_str())]);

        reading.insert(KEY_CONTEXT.to_owned(), self.context());

        if self.mode == Mode::Extended {
            let id = reading_id(
                &script_string(reading.get(FIELD_DEVICE_ID)),
                &script_string(reading.get(FIELD_CREATED_AT)),
            );
            reading.insert(KEY_ID.to_owned(), Value::String(id));
        }

        reading.insert(KEY_TYPE.to_owned(), json!(AIR_POLLUTANT_SENSOR));
        reading.insert(KEY_DOMAIN.to_owned(), json!({ "@type": ENVIRONMENT }));

        tracing::debug!(mode = %self.mode, keys = reading.len(), "annotated reading");
        reading
    }

    fn context(&self) -> Value {
        let mut ctx = Map::new();
        ctx.insert(PREFIX_M3_LITE.to_owned(), json!(NS_M3_LITE));
        if self.mode == Mode::Extended {
            ctx.insert(PREFIX_DECODE.to_owned(), json!(NS_DECODE));
        }
        Value::Object(ctx)
    }
}

impl Transform for Annotator {
    fn name(&self) -> &str {
        "decode"
    }

    fn apply(&self, input: Value) -> Result<Value, AnnotateError> {
        match input {
            Value::Object(map) => Ok(Value::Object(self.annotate_map(map))),
            other => Err(AnnotateError::InvalidInputKind {
                found: JsonKind::of(&other),
            }),
        }
    }
}

/// Annotates `reading` with a default annotator in the given mode.
///
/// # Errors
///
/// Returns [`AnnotateError::InvalidInputKind`] if `reading` is not a JSON
/// object.
pub fn annotate(reading: &Value, mode: Mode) -> Result<Value, AnnotateError> {
    Annotator::new(mode).annotate(reading)
}

/// Renders a field the way script string concatenation would.
///
/// Absent fields become `undefined`, so a reading without a device id still
/// gets an (unhelpful) `@id` rather than an error.
fn script_string(value: Option<&Value>) -> String {
    match value {
        None => UNDEFINED.to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) => "null".to_owned(),
        Some(Value::Bool(b)) => b.to_string(),
        // Negative zero prints as `0` in script concatenation.
        Some(Value::Number(n)) if is_negative_zero(n) => "0".to_owned(),
        Some(Value::Number(n)) => n.to_string(),
        // Array elements that are null render as empty strings.
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => script_string(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_owned(),
    }
}

fn is_negative_zero(n: &Number) -> bool {
    n.as_f64().is_some_and(|f| f == 0.0 && f.is_sign_negative())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::RecordingConsole;

    fn reading() -> Value {
        json!({
            "deviceId": "sensor42",
            "createdAt": "2021-01-01T00:00:00Z",
            "pm25": 12.5
        })
    }

    #[test]
    fn basic_mode_sets_fixed_fields() {
        let out = annotate(&reading(), Mode::Basic).expect("object input");
        assert_eq!(out[KEY_TYPE], json!("m3-lite:AirPollutantSensor"));
        assert_eq!(out[KEY_DOMAIN], json!({"@type": "m3-lite:Environment"}));
        assert_eq!(
            out[KEY_CONTEXT],
            json!({"m3-lite": "http://purl.org/iot/vocab/m3-lite#"})
        );
        assert!(out.get(KEY_ID).is_none());
    }

    #[test]
    fn extended_mode_adds_id_and_decode_prefix() {
        let out = annotate(&reading(), Mode::Extended).expect("object input");
        assert_eq!(out[KEY_ID], json!("decode:/sensor42:2021-01-01T00:00:00Z"));
        assert_eq!(out[KEY_CONTEXT]["decode"], json!("http://decode.xxx"));
        assert_eq!(
            out[KEY_CONTEXT]["m3-lite"],
            json!("http://purl.org/iot/vocab/m3-lite#")
        );
    }

    #[test]
    fn input_is_not_mutated() {
        let input = reading();
        let before = input.clone();
        let _ = annotate(&input, Mode::Extended).expect("object input");
        assert_eq!(input, before);
    }

    #[test]
    fn original_keys_pass_through() {
        let out = annotate(&reading(), Mode::Basic).expect("object input");
        assert_eq!(out["pm25"], json!(12.5));
        assert_eq!(out["deviceId"], json!("sensor42"));
    }

    #[test]
    fn existing_annotations_are_overwritten() {
        let input = json!({
            "@type": "something:Else",
            "domain": "nowhere",
            "@context": {"other": "http://example.org/"}
        });
        let out = annotate(&input, Mode::Basic).expect("object input");
        assert_eq!(out[KEY_TYPE], json!(AIR_POLLUTANT_SENSOR));
        assert_eq!(out[KEY_DOMAIN], json!({"@type": ENVIRONMENT}));
        assert!(out[KEY_CONTEXT].get("other").is_none());
    }

    #[test]
    fn basic_mode_keeps_a_preexisting_id() {
        let input = json!({"@id": "urn:keep"});
        let out = annotate(&input, Mode::Basic).expect("object input");
        assert_eq!(out[KEY_ID], json!("urn:keep"));
    }

    #[test]
    fn missing_fields_render_undefined() {
        let out = annotate(&json!({}), Mode::Extended).expect("object input");
        assert_eq!(out[KEY_ID], json!("decode:/undefined:undefined"));
    }

    #[test]
    fn non_string_fields_render_like_script_values() {
        let input = json!({"deviceId": 42, "createdAt": 1.5e3});
        let out = annotate(&input, Mode::Extended).expect("object input");
        assert_eq!(out[KEY_ID], json!("decode:/42:1500.0"));

        let input = json!({"deviceId": null, "createdAt": true});
        let out = annotate(&input, Mode::Extended).expect("object input");
        assert_eq!(out[KEY_ID], json!("decode:/null:true"));

        let input = json!({"deviceId": ["a", null, 2], "createdAt": {"t": 1}});
        let out = annotate(&input, Mode::Extended).expect("object input");
        assert_eq!(out[KEY_ID], json!("decode:/a,,2:[object Object]"));
    }

    #[test]
    fn numbers_render_as_json_text() {
        assert_eq!(script_string(Some(&json!(0.25))), "0.25");
        assert_eq!(script_string(Some(&json!(1e21))), "1e21");
        assert_eq!(script_string(Some(&json!(1e-7))), "1e-7");
        assert_eq!(script_string(Some(&json!(-0.0))), "0");
        assert_eq!(script_string(Some(&json!(0))), "0");
        assert_eq!(script_string(Some(&json!(2.0))), "2.0");
        assert_eq!(script_string(Some(&json!(-3))), "-3");
    }

    #[test]
    fn non_object_input_is_rejected() {
        for (input, kind) in [
            (Value::Null, JsonKind::Null),
            (json!([1, 2]), JsonKind::Array),
            (json!("reading"), JsonKind::String),
            (json!(7), JsonKind::Number),
            (json!(false), JsonKind::Boolean),
        ] {
            let err = annotate(&input, Mode::Basic).unwrap_err();
            assert_eq!(err, AnnotateError::InvalidInputKind { found: kind });
        }
    }

    #[test]
    fn console_receives_one_call_per_annotation() {
        let console = Arc::new(RecordingConsole::default());
        let annotator = Annotator::new(Mode::Basic).with_console(console.clone());
        let _ = annotator.annotate(&reading()).expect("object input");
        let _ = annotator.annotate(&reading()).expect("object input");
        let calls = console.calls.lock().expect("lock");
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "decode");
        assert_eq!(calls[0].1, vec![json!("decode called"), json!("basic")]);
    }

    #[test]
    fn console_receives_the_mode() {
        for mode in [Mode::Basic, Mode::Extended] {
            let console = Arc::new(RecordingConsole::default());
            let annotator = Annotator::new(mode).with_console(console.clone());
            let _ = annotator.annotate(&reading()).expect("object input");
            let calls = console.calls.lock().expect("lock");
            assert_eq!(calls[0].1, vec![json!("decode called"), json!(mode.as_str())]);
        }
    }

    #[test]
    fn from_config_picks_mode() {
        let config = AnnotatorConfig { extended: true };
        assert_eq!(Annotator::from_config(&config).mode(), Mode::Extended);
        assert_eq!(Annotator::default().mode(), Mode::Basic);
    }

    #[test]
    fn transform_apply_matches_annotate() {
        let annotator = Annotator::new(Mode::Extended).with_console(Arc::new(
            crate::console::NoopConsole,
        ));
        let via_apply = annotator.apply(reading()).expect("object input");
        let via_annotate = annotator.annotate(&reading()).expect("object input");
        assert_eq!(via_apply, via_annotate);
        assert!(annotator.apply(Value::Null).is_err());
    }
}
