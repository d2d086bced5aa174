//! Core ontology model types.
//!
//! These types represent the DDaT capability framework as typed Rust data.
//! Every collection keeps its source order, so rendering the same aggregate
//! twice yields byte-identical output. The top-level entry point is
//! [`Ontology::new`], populated one collection at a time.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::OntologyError;
use crate::ident::{camel_case, pascal_case};

/// Local name of the implicit skill root class (`<base>#skill`).
pub const SKILL_CLASS_ID: &str = "skill";

/// Object property linking every role to its branch.
pub const SPECIALIST_IN_ID: &str = "specialistIn";

/// One of the four capability tiers a skill is described at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum SkillLevel {
    /// Entry tier.
    Awareness,
    /// Able to apply the skill under guidance.
    Working,
    /// Applies the skill independently.
    Practitioner,
    /// Leads and shapes practice.
    Expert,
}

impl SkillLevel {
    /// All levels, lowest first.
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Awareness,
        SkillLevel::Working,
        SkillLevel::Practitioner,
        SkillLevel::Expert,
    ];

    /// Enum spelling used in role skill maps (`"AWARENESS"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Awareness => "AWARENESS",
            SkillLevel::Working => "WORKING",
            SkillLevel::Practitioner => "PRACTITIONER",
            SkillLevel::Expert => "EXPERT",
        }
    }

    /// Object property a role restriction at this level uses.
    #[must_use]
    pub fn object_property_id(self) -> &'static str {
        match self {
            SkillLevel::Awareness => "awarenessOf",
            SkillLevel::Working => "workingLevelOf",
            SkillLevel::Practitioner => "practitionerOf",
            SkillLevel::Expert => "expertIn",
        }
    }

    /// Annotation element holding a skill's capabilities at this level.
    #[must_use]
    pub fn capabilities_element(self) -> &'static str {
        match self {
            SkillLevel::Awareness => "awarenessLevelCapabilities",
            SkillLevel::Working => "workingLevelCapabilities",
            SkillLevel::Practitioner => "practitionerLevelCapabilities",
            SkillLevel::Expert => "expertLevelCapabilities",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = OntologyError;

    /// Accepts the enum spelling and the framework page labels
    /// (`"Awareness"`, `" working "`), ignoring case and surrounding space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim();
        SkillLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(cleaned))
            .ok_or_else(|| OntologyError::UnknownSkillLevel(s.to_owned()))
    }
}

impl TryFrom<String> for SkillLevel {
    type Error = OntologyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Ontology metadata record as delivered by the model directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyMetadata {
    /// Ontology title.
    pub name: String,
    /// Base namespace IRI.
    pub iri: String,
    /// Free-text description.
    pub description: String,
    /// OWL block (`{"version": ...}`).
    pub owl: OwlInfo,
    /// Contributors, in credit order.
    #[serde(default)]
    pub contributors: Vec<String>,
}

/// The `owl` member of [`OntologyMetadata`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwlInfo {
    /// Value of `owl:versionInfo`.
    pub version: String,
}

/// An OWL annotation property declared by the ontology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationProperty {
    /// Local name.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// SKOS definition.
    pub description: String,
}

/// An OWL object property, always a sub-property of `owl:topObjectProperty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectProperty {
    /// Local name.
    pub id: String,
    /// Human-readable label.
    pub name: String,
}

/// A top-level domain category with no parent class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThingClass {
    /// Local name.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Rendered as `rdfs:comment`.
    pub description: String,
    /// Resource link.
    pub url: String,
}

/// A discipline, child of a [`ThingClass`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineClass {
    /// Local name.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// SKOS definition.
    pub description: String,
    /// Parent thing.
    #[serde(alias = "thingId")]
    pub thing_id: String,
    /// Property of the existential restriction against the parent thing.
    #[serde(alias = "objectPropertyId")]
    pub object_property_id: String,
}

/// A branch of a discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchClass {
    /// Local name.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Parent discipline.
    #[serde(alias = "disciplineId")]
    pub discipline_id: String,
    /// Property of the existential restriction against the parent discipline.
    #[serde(alias = "objectPropertyId")]
    pub object_property_id: String,
    /// SKOS definition, when the framework publishes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text responsibilities, when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<String>,
    /// Branch page.
    pub url: String,
}

/// Capability statements of a skill, one list per [`SkillLevel`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevels {
    /// Awareness tier.
    #[serde(rename = "Awareness")]
    pub awareness: Vec<String>,
    /// Working tier.
    #[serde(rename = "Working")]
    pub working: Vec<String>,
    /// Practitioner tier.
    #[serde(rename = "Practitioner")]
    pub practitioner: Vec<String>,
    /// Expert tier.
    #[serde(rename = "Expert")]
    pub expert: Vec<String>,
}

impl SkillLevels {
    /// Capability statements at `level`.
    #[must_use]
    pub fn at(&self, level: SkillLevel) -> &[String] {
        match level {
            SkillLevel::Awareness => &self.awareness,
            SkillLevel::Working => &self.working,
            SkillLevel::Practitioner => &self.practitioner,
            SkillLevel::Expert => &self.expert,
        }
    }
}

/// A skill, subclass of the implicit `<base>#skill` root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillClass {
    /// Anchor of the skill on the framework's skills page.
    #[serde(alias = "anchorId")]
    pub anchor_id: String,
    /// Display name; the identifier is derived from it.
    pub name: String,
    /// SKOS definition.
    pub description: String,
    /// Capabilities per level.
    #[serde(alias = "skillLevels")]
    pub skill_levels: SkillLevels,
}

impl SkillClass {
    /// Identifier used as key in role skill maps (`"DataModelling"`).
    #[must_use]
    pub fn id(&self) -> String {
        pascal_case(&self.name)
    }

    /// RDF/XML local name (`"skillDataModelling"`).
    #[must_use]
    pub fn local_name(&self) -> String {
        format!("{SKILL_CLASS_ID}{}", self.id())
    }
}

/// A role within a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleClass {
    /// Display name; the identifier is derived from it.
    pub name: String,
    /// Parent branch.
    #[serde(alias = "branchId")]
    pub branch_id: String,
    /// SKOS definition.
    pub description: String,
    /// Role page, including the anchor.
    pub url: String,
    /// Responsibilities at this role level.
    #[serde(default)]
    pub responsibilities: Vec<String>,
    /// Civil service grades the role is usually performed at.
    #[serde(default, alias = "civilServiceJobGrades")]
    pub civil_service_job_grades: Vec<String>,
    /// Skill id ([`SkillClass::id`]) to required level, in framework order.
    #[serde(default)]
    pub skills: IndexMap<String, SkillLevel>,
}

impl RoleClass {
    /// RDF/XML local name (`"dataEngineer"`).
    #[must_use]
    pub fn id(&self) -> String {
        camel_case(&self.name)
    }
}

/// The complete DDaT ontology aggregate.
///
/// Created from the metadata record, then populated collection by
/// collection. A partially populated aggregate is valid; unset collections
/// are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ontology {
    /// Ontology title.
    pub name: String,
    /// Base namespace IRI.
    pub iri: String,
    /// Free-text description.
    pub description: String,
    /// Value of `owl:versionInfo`.
    pub owl_version: String,
    /// Contributors, in credit order.
    pub contributors: Vec<String>,
    /// Annotation properties.
    pub annotation_properties: Vec<AnnotationProperty>,
    /// Object properties.
    pub object_properties: Vec<ObjectProperty>,
    /// Thing classes.
    pub things: Vec<ThingClass>,
    /// Discipline classes.
    pub disciplines: Vec<DisciplineClass>,
    /// Branch classes.
    pub branches: Vec<BranchClass>,
    /// Skill classes.
    pub skills: Vec<SkillClass>,
    /// Role classes.
    pub roles: Vec<RoleClass>,
}

impl Ontology {
    /// Creates an ontology with metadata only; every collection starts empty.
    #[must_use]
    pub fn new(metadata: OntologyMetadata) -> Self {
        Self {
            name: metadata.name,
            iri: metadata.iri,
            description: metadata.description,
            owl_version: metadata.owl.version,
            contributors: metadata.contributors,
            annotation_properties: Vec::new(),
            object_properties: Vec::new(),
            things: Vec::new(),
            disciplines: Vec::new(),
            branches: Vec::new(),
            skills: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// Namespace prefix for local names: the base IRI with exactly one
    /// trailing `#`.
    #[must_use]
    pub fn namespace(&self) -> String {
        format!("{}#", self.iri.trim_end_matches('#'))
    }

    /// Full IRI of the entity with local name `local`.
    #[must_use]
    pub fn iri_of(&self, local: &str) -> String {
        format!("{}{local}", self.namespace())
    }

    /// Full IRI of the implicit skill root class.
    #[must_use]
    pub fn skill_root_iri(&self) -> String {
        self.iri_of(SKILL_CLASS_ID)
    }

    /// Looks up a thing class by id.
    #[must_use]
    pub fn find_thing(&self, id: &str) -> Option<&ThingClass> {
        self.things.iter().find(|t| t.id == id)
    }

    /// Looks up a discipline class by id.
    #[must_use]
    pub fn find_discipline(&self, id: &str) -> Option<&DisciplineClass> {
        self.disciplines.iter().find(|d| d.id == id)
    }

    /// Looks up a branch class by id.
    #[must_use]
    pub fn find_branch(&self, id: &str) -> Option<&BranchClass> {
        self.branches.iter().find(|b| b.id == id)
    }

    /// Looks up a skill by its derived id ([`SkillClass::id`]).
    #[must_use]
    pub fn find_skill(&self, id: &str) -> Option<&SkillClass> {
        self.skills.iter().find(|s| s.id() == id)
    }

    /// Looks up a role by its derived id ([`RoleClass::id`]).
    #[must_use]
    pub fn find_role(&self, id: &str) -> Option<&RoleClass> {
        self.roles.iter().find(|r| r.id() == id)
    }

    /// Looks up an object property by id.
    #[must_use]
    pub fn find_object_property(&self, id: &str) -> Option<&ObjectProperty> {
        self.object_properties.iter().find(|p| p.id == id)
    }

    /// Returns the total number of classes across all class collections.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.things.len()
            + self.disciplines.len()
            + self.branches.len()
            + self.skills.len()
            + self.roles.len()
    }

    /// Returns the total number of declared properties, including the fixed
    /// `skos:definition` annotation property.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.annotation_properties.len() + self.object_properties.len() + 1
    }
}

/// Standard IRI constants used by the serializers.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// XML namespace.
    pub const XML: &str = "http://www.w3.org/XML/1998/namespace";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// SKOS core namespace.
    pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
    /// Dublin Core elements namespace.
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    /// Dublin Core terms namespace.
    pub const TERMS: &str = "http://purl.org/dc/terms/";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `owl:topObjectProperty`.
    pub const OWL_TOP_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topObjectProperty";
    /// `skos:definition`.
    pub const SKOS_DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
}
