//! Modeller configuration, read from `ddat.toml`.
//!
//! ```toml
//! model_dir = "model"
//! base_working_dir = "data"
//!
//! [ddat]
//! base_url = "https://ddat-capability-framework.service.gov.uk"
//! skills_resource = "skills"
//!
//! [visualisation]
//! apply_filters = true
//! ```
//!
//! Every key is optional and falls back to the values above.

use std::fs;
use std::path::{Path, PathBuf};

use ddat_ontology::serializer::owl::RenderOptions;
use serde::Deserialize;

use crate::error::ModellerError;

/// Input file names below [`ModellerConfig::model_dir`].
pub mod files {
    /// Ontology metadata record.
    pub const METADATA: &str = "ontology_metadata.json";
    /// Annotation properties.
    pub const ANNOTATION_PROPERTIES: &str = "annotation_properties.json";
    /// Object properties.
    pub const OBJECT_PROPERTIES: &str = "object_properties.json";
    /// Thing classes.
    pub const CLASS_THINGS: &str = "class_things.json";
    /// Discipline classes.
    pub const CLASS_DISCIPLINES: &str = "class_disciplines.json";
    /// Branch classes.
    pub const CLASS_BRANCHES: &str = "class_branches.json";

    /// Parsed skills, below the working directory.
    pub const PARSED_SKILLS: &str = "parsed/skills.json";
    /// Parsed roles, below the working directory.
    pub const PARSED_ROLES: &str = "parsed/roles.json";

    /// Snapshot output, below the working directory.
    pub const SNAPSHOT: &str = "models/ontology/ddat.json";
    /// Primary RDF/XML output, below the working directory.
    pub const OWL: &str = "models/ontology/ddat.owl";
    /// Visualisation RDF/XML output, below the working directory.
    pub const OWL_VISUALISATION: &str = "models/ontology/ddat-visualisation.owl";
}

/// Capability framework website settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DdatConfig {
    /// Base URL of the framework website.
    pub base_url: String,
    /// Path of the skills page below `base_url`.
    pub skills_resource: String,
}

impl Default for DdatConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ddat-capability-framework.service.gov.uk".to_owned(),
            skills_resource: "skills".to_owned(),
        }
    }
}

/// Visualisation output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VisualisationConfig {
    /// Write `ddat-visualisation.owl` next to the primary document.
    pub apply_filters: bool,
}

impl Default for VisualisationConfig {
    fn default() -> Self {
        Self {
            apply_filters: true,
        }
    }
}

/// Complete modeller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModellerConfig {
    /// Directory holding the hand-maintained JSON collections.
    pub model_dir: PathBuf,
    /// Directory holding parsed inputs and generated outputs.
    pub base_working_dir: PathBuf,
    /// Framework website settings.
    pub ddat: DdatConfig,
    /// Visualisation output settings.
    pub visualisation: VisualisationConfig,
}

impl Default for ModellerConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("model"),
            base_working_dir: PathBuf::from("data"),
            ddat: DdatConfig::default(),
            visualisation: VisualisationConfig::default(),
        }
    }
}

impl ModellerConfig {
    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ModellerError::SourceUnavailable`] if the file cannot be
    /// read, or [`ModellerError::Config`] if it is not valid configuration.
    pub fn load(path: &Path) -> Result<Self, ModellerError> {
        let text = fs::read_to_string(path).map_err(|source| ModellerError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ModellerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Renderer options for the primary document.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(&self.ddat.base_url, &self.ddat.skills_resource)
    }

    /// Path of a file below [`Self::model_dir`].
    #[must_use]
    pub fn model_path(&self, file: &str) -> PathBuf {
        self.model_dir.join(file)
    }

    /// Path of a file below [`Self::base_working_dir`].
    #[must_use]
    pub fn work_path(&self, file: &str) -> PathBuf {
        self.base_working_dir.join(file)
    }
}
