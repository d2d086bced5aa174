//! DDaT ontology modeller.
//!
//! Loads the hand-maintained collections from the model directory and the
//! parsed skills and roles from the working directory, checks that every
//! cross-reference resolves, and writes the OWL RDF/XML documents and the
//! JSON snapshot below `<working dir>/models/ontology/`.
//!
//! ```no_run
//! use ddat_modeller::{run, FileSources, ModellerConfig};
//!
//! let config = ModellerConfig::default();
//! let report = run(&FileSources::from_config(&config), &config)?;
//! println!("{} classes", report.class_count);
//! # Ok::<(), ddat_modeller::ModellerError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod assemble;
pub mod config;
pub mod error;
pub mod sources;
pub mod writer;

pub use assemble::{assemble, load, persist, run, Assembly, RunReport};
pub use config::ModellerConfig;
pub use error::ModellerError;
pub use sources::{FileSources, Sources};
