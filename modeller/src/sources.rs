//! Input sources for the assembler.
//!
//! The ontology is built from eight inputs: the metadata record, five
//! hand-maintained collections, and the skill and role collections produced
//! by the framework parsers. [`Sources`] abstracts where they come from;
//! [`FileSources`] reads them from the configured directories.

use std::fs;
use std::path::{Path, PathBuf};

use ddat_ontology::{
    AnnotationProperty, BranchClass, DisciplineClass, ObjectProperty, OntologyMetadata, RoleClass,
    SkillClass, ThingClass,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{files, ModellerConfig};
use crate::error::ModellerError;

/// Provider of every input the assembler loads, in load order.
pub trait Sources {
    /// Ontology metadata record.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unavailable or malformed.
    fn metadata(&self) -> Result<OntologyMetadata, ModellerError>;

    /// Annotation properties.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unavailable or malformed.
    fn annotation_properties(&self) -> Result<Vec<AnnotationProperty>, ModellerError>;

    /// Object properties.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unavailable or malformed.
    fn object_properties(&self) -> Result<Vec<ObjectProperty>, ModellerError>;

    /// Thing classes.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unavailable or malformed.
    fn things(&self) -> Result<Vec<ThingClass>, ModellerError>;

    /// Discipline classes.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unavailable or malformed.
    fn disciplines(&self) -> Result<Vec<DisciplineClass>, ModellerError>;

    /// Branch classes.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unavailable or malformed.
    fn branches(&self) -> Result<Vec<BranchClass>, ModellerError>;

    /// Parsed skill classes.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unavailable or malformed.
    fn skills(&self) -> Result<Vec<SkillClass>, ModellerError>;

    /// Parsed role classes.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unavailable or malformed.
    fn roles(&self) -> Result<Vec<RoleClass>, ModellerError>;
}

/// Reads every source as a JSON file.
#[derive(Debug, Clone)]
pub struct FileSources {
    model_dir: PathBuf,
    work_dir: PathBuf,
}

impl FileSources {
    /// Sources below `model_dir` (hand-maintained collections) and
    /// `work_dir` (parsed skills and roles).
    #[must_use]
    pub fn new(model_dir: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            work_dir: work_dir.into(),
        }
    }

    /// Sources at the locations named by `config`.
    #[must_use]
    pub fn from_config(config: &ModellerConfig) -> Self {
        Self::new(&config.model_dir, &config.base_working_dir)
    }

    fn model<T: DeserializeOwned>(&self, file: &str) -> Result<T, ModellerError> {
        read_json(&self.model_dir.join(file))
    }

    fn parsed<T: DeserializeOwned>(&self, file: &str) -> Result<T, ModellerError> {
        read_json(&self.work_dir.join(file))
    }
}

impl Sources for FileSources {
    fn metadata(&self) -> Result<OntologyMetadata, ModellerError> {
        self.model(files::METADATA)
    }

    fn annotation_properties(&self) -> Result<Vec<AnnotationProperty>, ModellerError> {
        self.model(files::ANNOTATION_PROPERTIES)
    }

    fn object_properties(&self) -> Result<Vec<ObjectProperty>, ModellerError> {
        self.model(files::OBJECT_PROPERTIES)
    }

    fn things(&self) -> Result<Vec<ThingClass>, ModellerError> {
        self.model(files::CLASS_THINGS)
    }

    fn disciplines(&self) -> Result<Vec<DisciplineClass>, ModellerError> {
        self.model(files::CLASS_DISCIPLINES)
    }

    fn branches(&self) -> Result<Vec<BranchClass>, ModellerError> {
        self.model(files::CLASS_BRANCHES)
    }

    fn skills(&self) -> Result<Vec<SkillClass>, ModellerError> {
        self.parsed(files::PARSED_SKILLS)
    }

    fn roles(&self) -> Result<Vec<RoleClass>, ModellerError> {
        self.parsed(files::PARSED_ROLES)
    }
}

/// Reads and parses one JSON source.
///
/// # Errors
///
/// Returns [`ModellerError::SourceUnavailable`] if the file cannot be read,
/// or [`ModellerError::MalformedSource`] if it does not match `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModellerError> {
    debug!(path = %path.display(), "reading source");
    let text = fs::read_to_string(path).map_err(|source| ModellerError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ModellerError::MalformedSource {
        path: path.to_path_buf(),
        source,
    })
}
