//! Resolution of the effective [`ModellerConfig`] from the config file and
//! command-line overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ddat_modeller::ModellerConfig;

/// Configuration file read when none is named, if it exists.
pub const DEFAULT_CONFIG: &str = "ddat.toml";

/// Values given on the command line. `None`/`false` keeps the file's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Explicit configuration file; must exist when given.
    pub config: Option<PathBuf>,
    /// Replaces `model_dir`.
    pub model_dir: Option<PathBuf>,
    /// Replaces `base_working_dir`.
    pub work_dir: Option<PathBuf>,
    /// Forces `visualisation.apply_filters` off.
    pub no_visualisation: bool,
}

/// Loads the configuration and applies `overrides`.
///
/// An explicit `overrides.config` is read as-is. Otherwise `fallback` is
/// read when it is a file, and the built-in defaults are used when it is not.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or is not valid
/// configuration.
pub fn resolve(overrides: &Overrides, fallback: &Path) -> Result<ModellerConfig> {
    let mut config = match &overrides.config {
        Some(path) => ModellerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None if fallback.is_file() => ModellerConfig::load(fallback)
            .with_context(|| format!("Failed to load config {}", fallback.display()))?,
        None => ModellerConfig::default(),
    };
    if let Some(dir) = &overrides.model_dir {
        config.model_dir.clone_from(dir);
    }
    if let Some(dir) = &overrides.work_dir {
        config.base_working_dir.clone_from(dir);
    }
    if overrides.no_visualisation {
        config.visualisation.apply_filters = false;
    }
    Ok(config)
}
