//! `expando` — Annotates sensor readings piped on stdin with m3-lite ontology
//! metadata and writes them to stdout.
//!
//! Input is JSON Lines: every non-empty line is one reading. Each result is
//! written as one JSON document per line (pretty-printed with `--pretty`).
//! Lines that fail are reported on stderr; the remaining lines are still
//! processed and the exit status is non-zero.
//!
//! **Usage:**
//! ```text
//! echo '{"deviceId":"sensor42","createdAt":"2021-01-01T00:00:00Z"}' | expando --extended
//! ```
//!
//! **Environment:**
//! - `EXPANDO_CONFIG` — same as `--config`
//! - `EXPANDO_EXTENDED` — same as `--extended`
//! - `RUST_LOG` — log filter for stderr diagnostics (default `warn`)

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use expando_ontology::{Annotator, AnnotatorConfig, Engine, Identity, Transform};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Annotate sensor readings with m3-lite ontology metadata.
#[derive(Parser)]
#[command(
    name = "expando",
    version,
    about = "Annotate sensor readings with m3-lite ontology metadata"
)]
struct Args {
    /// TOML file with annotator settings.
    #[arg(long, env = "EXPANDO_CONFIG")]
    config: Option<PathBuf>,

    /// Add the `decode` context prefix and a derived `@id` to every reading.
    #[arg(long, env = "EXPANDO_EXTENDED")]
    extended: bool,

    /// Forward readings unchanged instead of annotating them.
    #[arg(long, conflicts_with = "extended")]
    passthrough: bool,

    /// Pretty-print each output document.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();
    tracing::info!(
        name = env!("CARGO_BIN_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "starting"
    );

    let config = load_config(&args)?;
    let transform = select_transform(&args, &config);

    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("input expected from stdin e.g. echo {{}} | expando");
    }

    let stdout = io::stdout();
    let failures = process(
        stdin.lock(),
        &mut stdout.lock(),
        &mut io::stderr(),
        transform.as_ref(),
        args.pretty,
    )?;

    if failures > 0 {
        tracing::warn!(failures, "some readings were not processed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Reads the config file if one was given; `--extended` overrides it.
fn load_config(args: &Args) -> Result<AnnotatorConfig> {
    let mut config = match &args.config {
        Some(path) => AnnotatorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnnotatorConfig::default(),
    };
    config.extended |= args.extended;
    tracing::debug!(?config, passthrough = args.passthrough, "resolved configuration");
    Ok(config)
}

fn select_transform(args: &Args, config: &AnnotatorConfig) -> Box<dyn Transform> {
    if args.passthrough {
        Box::new(Identity)
    } else {
        Box::new(Annotator::from_config(config))
    }
}

/// Runs every non-blank input line through `transform`.
///
/// Failed lines are reported to `errors` and skipped. Returns how many lines
/// failed.
fn process(
    input: impl BufRead,
    out: &mut impl Write,
    errors: &mut impl Write,
    transform: &dyn Transform,
    pretty: bool,
) -> Result<usize> {
    let engine = Engine::new();
    let mut failures = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no} from stdin"))?;
        if line.trim().is_empty() {
            continue;
        }
        match engine.execute(transform, line.as_bytes()) {
            Ok(value) => write_value(out, &value, pretty)
                .with_context(|| format!("Failed to write output for line {line_no}"))?,
            Err(err) => {
                failures += 1;
                writeln!(errors, "expando: line {line_no}: {err}")
                    .context("Failed to report line error")?;
            }
        }
    }
    out.flush().context("Failed to flush output")?;
    Ok(failures)
}

fn write_value(out: &mut impl Write, value: &Value, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
