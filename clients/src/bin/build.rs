//! `ddat-build`: Assembles the DDaT ontology from the model and parsed
//! sources and writes the artifacts below the working directory.
//!
//! **Outputs:**
//! - `<work>/models/ontology/ddat.json`: versioned JSON snapshot
//! - `<work>/models/ontology/ddat.owl`: OWL RDF/XML
//! - `<work>/models/ontology/ddat-visualisation.owl`: OWL RDF/XML without the skill root
//! - `<work>/logs/application.log`: run log
//!
//! **Usage:**
//! ```
//! ddat-build [--config <ddat.toml>] [--model-dir <path>] [--work-dir <path>]
//!            [--no-visualisation] [--log-level <filter>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use ddat_clients::settings::{self, Overrides, DEFAULT_CONFIG};
use ddat_clients::{logging, pipeline};

/// Build the DDaT ontology artifacts.
#[derive(Parser)]
#[command(name = "ddat-build", about = "Build DDaT ontology artifacts")]
struct Args {
    /// Configuration file. Defaults to `ddat.toml` when it exists.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the hand-maintained JSON collections.
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Working directory for parsed inputs, outputs and logs.
    #[arg(long)]
    work_dir: Option<PathBuf>,

    /// Do not write the visualisation document.
    #[arg(long)]
    no_visualisation: bool,

    /// Log filter, e.g. `info` or `ddat_modeller=debug`. `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let file_log = logging::init(&args.log_level)?;
    let config = settings::resolve(
        &Overrides {
            config: args.config,
            model_dir: args.model_dir,
            work_dir: args.work_dir,
            no_visualisation: args.no_visualisation,
        },
        Path::new(DEFAULT_CONFIG),
    )?;

    let mut guard = None;
    let report = pipeline::build(&config, |logs| {
        guard = Some(file_log.attach(logs)?);
        Ok(())
    })?;

    // Print summary
    println!(
        "DDaT ontology: {} classes, {} properties",
        report.class_count, report.property_count
    );
    for path in &report.files {
        println!("  Written: {}", path.display());
    }

    println!("Build complete.");
    drop(guard);
    Ok(())
}
