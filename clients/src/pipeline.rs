//! The `ddat-build` flow: assemble in memory, then prepare the working
//! directory and write.

use std::path::Path;

use anyhow::{Context, Result};
use ddat_modeller::writer::prepare_working_dir;
use ddat_modeller::{assemble, persist, FileSources, ModellerConfig, RunReport};
use tracing::info;

/// Builds the ontology described by `config`.
///
/// Sources are loaded, checked and rendered before anything is created on
/// disk. Once that succeeds the working directory is prepared and
/// `on_ready` is called with its `logs` directory, before any output is
/// written. A failed load leaves the working directory untouched.
///
/// # Errors
///
/// Returns an error if assembly fails, the working directory cannot be
/// prepared, `on_ready` fails, or an output cannot be written.
pub fn build<F>(config: &ModellerConfig, on_ready: F) -> Result<RunReport>
where
    F: FnOnce(&Path) -> Result<()>,
{
    info!(
        model_dir = %config.model_dir.display(),
        work_dir = %config.base_working_dir.display(),
        "starting build"
    );
    let assembly = assemble(
        &FileSources::from_config(config),
        &config.render_options(),
        config.visualisation.apply_filters,
    )
    .context("Failed to build the ontology")?;

    prepare_working_dir(&config.base_working_dir).with_context(|| {
        format!(
            "Failed to prepare working directory: {}",
            config.base_working_dir.display()
        )
    })?;
    on_ready(&config.work_path("logs"))?;

    persist(assembly, config).context("Failed to write the ontology")
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fs;

    use ddat_modeller::config::files;

    use super::*;

    fn config_in(root: &Path) -> ModellerConfig {
        ModellerConfig {
            model_dir: root.join("model"),
            base_working_dir: root.join("work"),
            ..ModellerConfig::default()
        }
    }

    #[test]
    fn missing_sources_leave_no_working_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_in(dir.path());
        let called = Cell::new(false);

        let err = build(&config, |_| {
            called.set(true);
            Ok(())
        })
        .expect_err("must fail");

        assert!(format!("{err:#}").contains(files::METADATA), "{err:#}");
        assert!(!called.get());
        assert!(!config.base_working_dir.exists());
    }

    #[test]
    fn ready_hook_runs_before_outputs_are_written() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_in(dir.path());
        fs::create_dir_all(&config.model_dir).expect("model dir");
        fs::create_dir_all(config.work_path("parsed")).expect("parsed dir");
        fs::write(
            config.model_path(files::METADATA),
            r#"{"name": "T", "iri": "http://x", "description": "d", "owl": {"version": "1"}}"#,
        )
        .expect("metadata");
        for file in [
            files::ANNOTATION_PROPERTIES,
            files::OBJECT_PROPERTIES,
            files::CLASS_THINGS,
            files::CLASS_DISCIPLINES,
            files::CLASS_BRANCHES,
        ] {
            fs::write(config.model_path(file), "[]").expect("collection");
        }
        fs::write(config.work_path(files::PARSED_SKILLS), "[]").expect("skills");
        fs::write(config.work_path(files::PARSED_ROLES), "[]").expect("roles");

        let owl = config.work_path(files::OWL);
        let report = build(&config, |logs| {
            assert!(logs.is_dir());
            assert!(!owl.exists());
            Ok(())
        })
        .expect("builds");

        assert_eq!(report.files.len(), 3);
        assert!(owl.is_file());
    }
}
