//! `expando-vocab` — Writes the annotation vocabulary from the
//! `expando-ontology` library as a JSON-LD artifact.
//!
//! **Outputs:**
//! - `<out>/expando.vocabulary.json` — JSON-LD 1.1
//!
//! **Usage:**
//! ```text
//! expando-vocab [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use expando_ontology::serializer::jsonld;
use expando_ontology::Vocabulary;
use tracing_subscriber::EnvFilter;

/// Build the annotation vocabulary artifact.
#[derive(Parser)]
#[command(
    name = "expando-vocab",
    version,
    about = "Write the m3-lite annotation vocabulary as JSON-LD"
)]
struct Args {
    /// Output directory for the generated artifact.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let vocabulary = Vocabulary::full();

    println!(
        "expando vocabulary v{}: {} namespaces, {} classes",
        vocabulary.version,
        vocabulary.namespaces.len(),
        vocabulary.class_count()
    );

    let json_path = out.join("expando.vocabulary.json");
    let json_value = jsonld::to_json_ld(vocabulary);
    let json_str = serde_json::to_string_pretty(&json_value)
        .context("Failed to serialize vocabulary to JSON-LD")?;
    fs::write(&json_path, &json_str)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    tracing::info!(path = %json_path.display(), bytes = json_str.len(), "wrote vocabulary");
    println!("  Written: {}", json_path.display());

    Ok(())
}
