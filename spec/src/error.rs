//! Errors raised while validating or (de)serializing an ontology.

use thiserror::Error;

/// Failure conditions of the ontology model.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// An entity points at an id that no entity of the target kind declares.
    #[error("{entity} `{id}` references unknown {field} `{target}`")]
    DanglingReference {
        /// Kind of the referencing entity (e.g. `"discipline"`).
        entity: &'static str,
        /// Identifier of the referencing entity.
        id: String,
        /// Field holding the reference (e.g. `"thing_id"`).
        field: &'static str,
        /// The id that failed to resolve.
        target: String,
    },

    /// A skill-level label outside `AWARENESS`, `WORKING`, `PRACTITIONER`, `EXPERT`.
    #[error("unknown skill level `{0}`")]
    UnknownSkillLevel(String),

    /// A skill or role whose name derives to an empty identifier.
    #[error("{entity} name `{name}` derives an empty identifier")]
    EmptyName {
        /// Kind of the offending entity.
        entity: &'static str,
        /// The name as given.
        name: String,
    },

    /// Two entities of one kind share an identifier, so their class IRIs
    /// would collide.
    #[error("{entity} id `{id}` is declared by both `{first}` and `{second}`")]
    DuplicateId {
        /// Kind of the entities.
        entity: &'static str,
        /// The shared identifier.
        id: String,
        /// Name of the first entity declaring it.
        first: String,
        /// Name of the later entity declaring it.
        second: String,
    },

    /// The snapshot JSON could not be produced or parsed.
    #[error("invalid ontology snapshot")]
    Snapshot(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible format version.
    #[error("unsupported snapshot format version {found} (expected {expected})")]
    UnsupportedSnapshotVersion {
        /// Version found in the document.
        found: u32,
        /// Version this crate reads and writes.
        expected: u32,
    },
}
