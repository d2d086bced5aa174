//! Serializers for the DDaT ontology.
//!
//! Two serialization formats are supported:
//! - **OWL RDF/XML** ([`owl`]): the published document, output to `models/ontology/ddat.owl`
//! - **JSON snapshot** ([`snapshot`]): the versioned aggregate, output to `models/ontology/ddat.json`

pub mod owl;
pub mod snapshot;
