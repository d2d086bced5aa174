//! Ontology assembly: load, check, render, write.

use std::path::PathBuf;

use ddat_ontology::serializer::owl::{to_rdf_xml, RenderOptions};
use ddat_ontology::serializer::snapshot;
use ddat_ontology::Ontology;
use tracing::{debug, info};

use crate::config::{files, ModellerConfig};
use crate::error::ModellerError;
use crate::sources::Sources;
use crate::writer;

/// A fully assembled, rendered ontology held in memory.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// The populated and checked aggregate.
    pub ontology: Ontology,
    /// The primary RDF/XML document.
    pub document: String,
    /// The visualisation RDF/XML document, when requested.
    pub visualisation: Option<String>,
}

/// Report of what a run wrote.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of classes rendered.
    pub class_count: usize,
    /// Number of properties rendered.
    pub property_count: usize,
    /// Files written, in write order.
    pub files: Vec<PathBuf>,
}

/// Loads every source into a new aggregate, in fixed order, then checks
/// its references.
///
/// # Errors
///
/// Returns the first source failure, or [`ModellerError::Ontology`] if a
/// reference does not resolve.
pub fn load(sources: &impl Sources) -> Result<Ontology, ModellerError> {
    let mut ontology = Ontology::new(sources.metadata()?);
    info!(name = %ontology.name, iri = %ontology.iri, "loaded ontology metadata");

    ontology.annotation_properties = sources.annotation_properties()?;
    debug!(count = ontology.annotation_properties.len(), "loaded annotation properties");

    ontology.object_properties = sources.object_properties()?;
    debug!(count = ontology.object_properties.len(), "loaded object properties");

    ontology.things = sources.things()?;
    debug!(count = ontology.things.len(), "loaded thing classes");

    ontology.disciplines = sources.disciplines()?;
    debug!(count = ontology.disciplines.len(), "loaded discipline classes");

    ontology.branches = sources.branches()?;
    debug!(count = ontology.branches.len(), "loaded branch classes");

    ontology.skills = sources.skills()?;
    debug!(count = ontology.skills.len(), "loaded skill classes");

    ontology.roles = sources.roles()?;
    debug!(count = ontology.roles.len(), "loaded role classes");

    ontology.check_references()?;
    info!(
        classes = ontology.class_count(),
        properties = ontology.property_count(),
        "ontology references resolved"
    );
    Ok(ontology)
}

/// Loads and renders the ontology without touching the filesystem for output.
///
/// The visualisation document is rendered from the aggregate with the skill
/// root omitted, not by filtering the primary text.
///
/// # Errors
///
/// Returns any error from [`load`].
pub fn assemble(
    sources: &impl Sources,
    options: &RenderOptions,
    with_visualisation: bool,
) -> Result<Assembly, ModellerError> {
    let ontology = load(sources)?;
    let document = to_rdf_xml(&ontology, options);
    debug!(bytes = document.len(), "rendered ontology document");
    let visualisation =
        with_visualisation.then(|| to_rdf_xml(&ontology, &options.for_visualisation()));
    Ok(Assembly {
        ontology,
        document,
        visualisation,
    })
}

/// Assembles the ontology and writes the snapshot, the primary document and,
/// when enabled, the visualisation document below the working directory.
///
/// Nothing is written unless every source loaded, every reference resolved
/// and every output rendered.
///
/// # Errors
///
/// Returns any error from [`assemble`] or [`persist`].
pub fn run(sources: &impl Sources, config: &ModellerConfig) -> Result<RunReport, ModellerError> {
    let assembly = assemble(
        sources,
        &config.render_options(),
        config.visualisation.apply_filters,
    )?;
    persist(assembly, config)
}

/// Prepares the working directory and writes an assembled ontology to it.
///
/// The snapshot is serialized before the directory is touched.
///
/// # Errors
///
/// Returns [`ModellerError::Ontology`] if the snapshot cannot be serialized,
/// or [`ModellerError::Write`] if a directory or output cannot be written.
pub fn persist(assembly: Assembly, config: &ModellerConfig) -> Result<RunReport, ModellerError> {
    let snapshot = snapshot::to_json(&assembly.ontology)?;

    writer::prepare_working_dir(&config.base_working_dir)?;

    let mut report = RunReport {
        class_count: assembly.ontology.class_count(),
        property_count: assembly.ontology.property_count(),
        files: Vec::new(),
    };

    let mut outputs = vec![
        (config.work_path(files::SNAPSHOT), snapshot),
        (config.work_path(files::OWL), assembly.document),
    ];
    if let Some(visualisation) = assembly.visualisation {
        outputs.push((config.work_path(files::OWL_VISUALISATION), visualisation));
    }

    for (path, content) in outputs {
        writer::write_text(&path, &content)?;
        info!(path = %path.display(), bytes = content.len(), "written");
        report.files.push(path);
    }
    Ok(report)
}
