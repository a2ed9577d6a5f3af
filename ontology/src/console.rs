//! Logging hook handed to transforms.
//!
//! Transforms never log directly; they call the [`Console`] they were built
//! with. Hosts choose where the lines go: [`TracingConsole`] forwards them to
//! `tracing`, [`NoopConsole`] drops them.

use serde_json::Value;

/// Sink for log lines emitted from inside a transform.
pub trait Console: Send + Sync {
    /// Records one log call made by the named transform.
    fn log(&self, transform: &str, args: &[Value]);
}

/// Forwards transform log lines to `tracing` at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn log(&self, transform: &str, args: &[Value]) {
        let line = args
            .iter()
            .map(|arg| match arg {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!(target: "expando::console", transform, "{line}");
    }
}

/// Discards every log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopConsole;

impl Console for NoopConsole {
    fn log(&self, _transform: &str, _args: &[Value]) {}
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingConsole;
    use super::*;
    use serde_json::json;

    #[test]
    fn noop_accepts_anything() {
        NoopConsole.log("decode", &[json!("decode called"), json!({"a": 1})]);
    }

    #[test]
    fn tracing_console_is_callable_without_subscriber() {
        TracingConsole.log("decode", &[json!("decode called"), json!(3)]);
    }

    #[test]
    fn recording_console_keeps_order() {
        let console = RecordingConsole::default();
        console.log("decode", &[json!("first")]);
        console.log("identity", &[json!("second")]);
        let calls = console.calls.lock().expect("lock");
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "decode");
        assert_eq!(calls[1].1, vec![json!("second")]);
    }
}
