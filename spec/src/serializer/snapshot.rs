//! Versioned JSON snapshot of an assembled ontology.
//!
//! The snapshot wraps the aggregate in `{"format_version": N, "ontology": {...}}`
//! so a later run can reload it without re-reading every source. Collection
//! order, including each role's skill map, survives the round trip.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OntologyError;
use crate::model::Ontology;

/// Snapshot format written by this crate.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    format_version: u32,
    ontology: &'a Ontology,
}

#[derive(Deserialize)]
struct SnapshotOwned {
    format_version: u32,
    ontology: Value,
}

/// Serializes the ontology to a pretty-printed snapshot document.
///
/// # Errors
///
/// Returns [`OntologyError::Snapshot`] if serialization fails.
pub fn to_json(ontology: &Ontology) -> Result<String, OntologyError> {
    let snapshot = SnapshotRef {
        format_version: FORMAT_VERSION,
        ontology,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Reads a snapshot document back into an [`Ontology`].
///
/// # Errors
///
/// Returns [`OntologyError::UnsupportedSnapshotVersion`] for any other
/// format version, or [`OntologyError::Snapshot`] if the document does not
/// have the expected shape.
pub fn from_json(text: &str) -> Result<Ontology, OntologyError> {
    let snapshot: SnapshotOwned = serde_json::from_str(text)?;
    if snapshot.format_version != FORMAT_VERSION {
        return Err(OntologyError::UnsupportedSnapshotVersion {
            found: snapshot.format_version,
            expected: FORMAT_VERSION,
        });
    }
    Ok(serde_json::from_value(snapshot.ontology)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_ontology;

    #[test]
    fn snapshot_restores_the_aggregate() {
        let ontology = sample_ontology();
        let text = to_json(&ontology).expect("serializes");
        assert!(text.contains("\"format_version\": 1"));
        let restored = from_json(&text).expect("parses");
        assert_eq!(restored, ontology);
        let keys: Vec<_> = restored.roles[0].skills.keys().cloned().collect();
        assert_eq!(keys, ["DataModelling", "ProgrammingAndBuildDataEngineering"]);
    }

    #[test]
    fn snapshot_skips_absent_branch_fields() {
        let text = to_json(&sample_ontology()).expect("serializes");
        assert_eq!(text.matches("\"responsibilities\": \"Applies statistics.\"").count(), 1);
        // one branch has no responsibilities, the role's list is an array
        assert_eq!(text.matches("\"responsibilities\":").count(), 2);
    }

    #[test]
    fn other_versions_are_rejected() {
        let text = r#"{"format_version": 7, "ontology": {}}"#;
        assert!(matches!(
            from_json(text),
            Err(OntologyError::UnsupportedSnapshotVersion { found: 7, expected: 1 })
        ));
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        assert!(matches!(from_json("[]"), Err(OntologyError::Snapshot(_))));
        assert!(matches!(
            from_json(r#"{"format_version": 1, "ontology": {"name": "x"}}"#),
            Err(OntologyError::Snapshot(_))
        ));
    }
}
