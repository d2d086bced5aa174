//! Writes generated artifacts and prepares the working directory.

use std::fs;
use std::path::Path;

use crate::error::ModellerError;

/// Sub-directories of the working directory a run writes into.
pub const WORKING_DIRS: &[&str] = &["logs", "models", "models/ontology", "parsed"];

/// Creates the working directory and its required sub-directories.
/// Existing directories are left untouched.
///
/// # Errors
///
/// Returns [`ModellerError::Write`] if a directory cannot be created.
pub fn prepare_working_dir(base: &Path) -> Result<(), ModellerError> {
    for dir in WORKING_DIRS {
        let path = base.join(dir);
        fs::create_dir_all(&path).map_err(|source| ModellerError::Write { path, source })?;
    }
    Ok(())
}

/// Writes a text file, creating parent directories as needed.
///
/// The content goes to a sibling temporary file first and is renamed over
/// `path`, so readers never observe a half-written document.
///
/// # Errors
///
/// Returns [`ModellerError::Write`] if the directory cannot be created or
/// the file cannot be written.
pub fn write_text(path: &Path, content: &str) -> Result<(), ModellerError> {
    let write_err = |source| ModellerError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let mut partial = path.as_os_str().to_owned();
    partial.push(".partial");
    let partial = Path::new(&partial);
    fs::write(partial, content).map_err(write_err)?;
    fs::rename(partial, path).map_err(write_err)?;
    Ok(())
}
