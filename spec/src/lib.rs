//! DDaT capability framework ontology encoded as typed Rust data.
//!
//! The `ddat-ontology` crate models the digital, data and technology
//! capability framework (things, disciplines, branches, skills and roles) as
//! an [`Ontology`] aggregate, checks its cross-references, and serializes it
//! to OWL RDF/XML and to a versioned JSON snapshot.
//!
//! # Entry Point
//!
//! ```
//! use ddat_ontology::{Ontology, OntologyMetadata, OwlInfo, ThingClass};
//!
//! let mut ontology = Ontology::new(OntologyMetadata {
//!     name: "DDaT".to_owned(),
//!     iri: "https://example.org/ddat".to_owned(),
//!     description: "Capability framework".to_owned(),
//!     owl: OwlInfo { version: "1.0".to_owned() },
//!     contributors: vec![],
//! });
//! ontology.things.push(ThingClass {
//!     id: "profession".to_owned(),
//!     name: "Profession".to_owned(),
//!     description: "A body of disciplines".to_owned(),
//!     url: "https://example.org".to_owned(),
//! });
//! assert!(ontology.check_references().is_ok());
//! ```
//!
//! # Serialization
//!
//! ```
//! # use ddat_ontology::{Ontology, OntologyMetadata, OwlInfo};
//! # let ontology = Ontology::new(OntologyMetadata {
//! #     name: "DDaT".to_owned(),
//! #     iri: "https://example.org/ddat".to_owned(),
//! #     description: "Capability framework".to_owned(),
//! #     owl: OwlInfo { version: "1.0".to_owned() },
//! #     contributors: vec![],
//! # });
//! use ddat_ontology::serializer::owl::{to_rdf_xml, RenderOptions};
//!
//! let options = RenderOptions::new("https://example.org/framework", "skills");
//! let rdf_xml = to_rdf_xml(&ontology, &options);
//! assert!(rdf_xml.ends_with("</rdf:RDF>\n"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod ident;
pub mod integrity;
pub mod model;
pub mod serializer;
pub mod visualisation;

#[cfg(test)]
mod fixtures;

pub use error::OntologyError;
pub use model::{
    AnnotationProperty, BranchClass, DisciplineClass, ObjectProperty, Ontology, OntologyMetadata,
    OwlInfo, RoleClass, SkillClass, SkillLevel, SkillLevels, ThingClass,
};
