//! Errors raised while assembling and writing the ontology.

use std::io;
use std::path::PathBuf;

use ddat_ontology::OntologyError;
use thiserror::Error;

/// Failure conditions of a modeller run. Every variant is fatal.
#[derive(Debug, Error)]
pub enum ModellerError {
    /// A required input could not be opened or read.
    #[error("source unavailable: {}", path.display())]
    SourceUnavailable {
        /// The input path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// An input parsed as JSON but does not have the expected shape.
    #[error("malformed source: {}", path.display())]
    MalformedSource {
        /// The input path.
        path: PathBuf,
        /// Underlying parse failure, with line and column.
        source: serde_json::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::ModellerConfig`].
    #[error("invalid configuration: {}", path.display())]
    Config {
        /// The configuration path.
        path: PathBuf,
        /// Underlying parse failure.
        source: toml::de::Error,
    },

    /// The loaded entities are inconsistent, or the snapshot failed.
    #[error(transparent)]
    Ontology(#[from] OntologyError),

    /// An output file or directory could not be written.
    #[error("cannot write {}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}
