//! `ddat-filter`: Produces the visualisation variant of an existing OWL
//! RDF/XML document by removing the skill root class block and every
//! direct `rdfs:subClassOf` link to it.
//!
//! **Usage:**
//! ```
//! ddat-filter --input <ddat.owl> --output <ddat-visualisation.owl> --root <iri>
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
use ddat_clients::logging;
use ddat_modeller::writer::write_text;
use ddat_ontology::visualisation;
use tracing::{info, warn};

/// Filter an OWL RDF/XML document for visualisation.
#[derive(Parser)]
#[command(name = "ddat-filter", about = "Remove the skill root class from an OWL RDF/XML document")]
struct Args {
    /// Document to filter.
    #[arg(long)]
    input: PathBuf,

    /// Where to write the filtered document.
    #[arg(long)]
    output: PathBuf,

    /// Full IRI of the skill root class, e.g. `https://example.org/ddat#skill`.
    #[arg(long)]
    root: String,

    /// Log filter. `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log = logging::init(&args.log_level)?;

    let document = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let outcome = visualisation::filter(&document, &args.root);
    for warning in &outcome.warnings {
        warn!("{warning}");
    }
    info!(removed = outcome.removed_lines, "filtered document");

    write_text(&args.output, &outcome.text)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("  Written: {}", args.output.display());
    Ok(())
}
