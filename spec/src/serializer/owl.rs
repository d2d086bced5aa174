//! OWL RDF/XML serializer for the DDaT ontology.
//!
//! The document is the concatenation of one fragment per section, always in
//! this order: header and metadata, annotation properties, object
//! properties, things, disciplines, branches, skills, roles, footer.
//!
//! Every element sits on its own line and every class block is closed by a
//! `</owl:Class>` line, which [`crate::visualisation::filter`] relies on.
//! Field values are emitted verbatim; callers keep them free of markup.

use crate::ident::numbered_list;
use crate::model::{iris, Ontology, SkillLevel, SKILL_CLASS_ID, SPECIALIST_IN_ID};

/// `rdf:datatype` attribute for `xsd:string` literals.
const DT_STRING: &str = "rdf:datatype=\"http://www.w3.org/2001/XMLSchema#string\"";

/// Closes the `rdf:RDF` root element.
pub const FOOTER: &str = "</rdf:RDF>\n";

/// Values of the `entityType` annotation.
pub mod entity_type {
    /// Thing classes.
    pub const THING: &str = "Thing";
    /// Discipline classes.
    pub const DISCIPLINE: &str = "Discipline";
    /// Branch classes.
    pub const BRANCH: &str = "Branch";
    /// Skill classes.
    pub const SKILL: &str = "Skill";
    /// Role classes.
    pub const ROLE: &str = "Role";
}

/// Rendering parameters that do not belong to the ontology itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Base URL of the capability framework website.
    pub base_url: String,
    /// Path of the skills page below `base_url`.
    pub skills_resource: String,
    /// Drop the skill root class and every direct `rdfs:subClassOf` link to
    /// it, producing the visualisation variant.
    pub visualisation: bool,
}

impl RenderOptions {
    /// Options for the primary document.
    #[must_use]
    pub fn new(base_url: impl Into<String>, skills_resource: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            skills_resource: skills_resource.into(),
            visualisation: false,
        }
    }

    /// The same options, rendering the visualisation variant.
    #[must_use]
    pub fn for_visualisation(&self) -> Self {
        Self {
            visualisation: true,
            ..self.clone()
        }
    }

    /// Page of the skill with the given anchor.
    #[must_use]
    pub fn skill_url(&self, anchor_id: &str) -> String {
        format!(
            "{}/{}#{}",
            self.base_url.trim_end_matches('/'),
            self.skills_resource.trim_matches('/'),
            anchor_id
        )
    }
}

/// Serializes the ontology to an OWL RDF/XML document.
#[must_use]
pub fn to_rdf_xml(ontology: &Ontology, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(64 * 1024);
    out.push_str(&render_metadata(ontology));
    out.push_str(&render_annotation_properties(ontology));
    out.push_str(&render_object_properties(ontology));
    out.push_str(&render_things(ontology, options));
    out.push_str(&render_disciplines(ontology, options));
    out.push_str(&render_branches(ontology, options));
    out.push_str(&render_skills(ontology, options));
    out.push_str(&render_roles(ontology, options));
    out.push_str(FOOTER);
    out
}

/// XML declaration, `rdf:RDF` opening tag and the `owl:Ontology` element.
#[must_use]
pub fn render_metadata(ontology: &Ontology) -> String {
    let ns = ontology.namespace();
    let base = ontology.iri.trim_end_matches('#');
    let mut out = String::from("<?xml version=\"1.0\"?>\n");
    out.push_str(&format!("<rdf:RDF xmlns=\"{ns}\"\n"));
    out.push_str(&format!("    xml:base=\"{base}\"\n"));
    out.push_str(&format!("    xmlns:ddat=\"{ns}\"\n"));
    for (prefix, iri) in [
        ("owl", iris::OWL),
        ("rdf", iris::RDF),
        ("xml", iris::XML),
        ("xsd", iris::XSD),
        ("rdfs", iris::RDFS),
        ("skos", iris::SKOS),
        ("dc", iris::DC),
    ] {
        out.push_str(&format!("    xmlns:{prefix}=\"{iri}\"\n"));
    }
    out.push_str(&format!("    xmlns:terms=\"{}\">\n", iris::TERMS));

    section(&mut out, "ONTOLOGY METADATA");
    out.push_str(&format!("    <owl:Ontology rdf:about=\"{base}\">\n"));
    out.push_str(&format!(
        "        <dc:title xml:lang=\"en\">{}</dc:title>\n",
        ontology.name
    ));
    out.push_str(&format!(
        "        <rdfs:label xml:lang=\"en\" {DT_STRING}>{}</rdfs:label>\n",
        ontology.name
    ));
    for contributor in &ontology.contributors {
        out.push_str(&format!(
            "        <terms:contributor>{contributor}</terms:contributor>\n"
        ));
    }
    out.push_str(&format!(
        "        <dc:description xml:lang=\"en\">{}</dc:description>\n",
        ontology.description
    ));
    out.push_str(&format!(
        "        <owl:versionInfo {DT_STRING}>{}</owl:versionInfo>\n",
        ontology.owl_version
    ));
    out.push_str("    </owl:Ontology>\n\n");
    out
}

/// The fixed `skos:definition` declaration followed by every annotation property.
#[must_use]
pub fn render_annotation_properties(ontology: &Ontology) -> String {
    let mut out = String::new();
    section(&mut out, "ANNOTATION PROPERTIES");
    out.push_str(&format!(
        "    <owl:AnnotationProperty rdf:about=\"{}\"/>\n\n",
        iris::SKOS_DEFINITION
    ));
    for property in &ontology.annotation_properties {
        out.push_str(&format!(
            "    <owl:AnnotationProperty rdf:about=\"{}\">\n",
            ontology.iri_of(&property.id)
        ));
        label(&mut out, &property.name, true);
        definition(&mut out, &property.description);
        out.push_str("    </owl:AnnotationProperty>\n\n");
    }
    out
}

/// Object properties, each a sub-property of `owl:topObjectProperty`.
#[must_use]
pub fn render_object_properties(ontology: &Ontology) -> String {
    let mut out = String::new();
    section(&mut out, "OBJECT PROPERTIES");
    for property in &ontology.object_properties {
        out.push_str(&format!(
            "    <owl:ObjectProperty rdf:about=\"{}\">\n",
            ontology.iri_of(&property.id)
        ));
        out.push_str(&format!(
            "        <rdfs:subPropertyOf rdf:resource=\"{}\"/>\n",
            iris::OWL_TOP_OBJECT_PROPERTY
        ));
        label(&mut out, &property.name, true);
        out.push_str("    </owl:ObjectProperty>\n\n");
    }
    out
}

/// Thing classes. Each block is exactly six lines.
#[must_use]
pub fn render_things(ontology: &Ontology, options: &RenderOptions) -> String {
    let root = ontology.skill_root_iri();
    let mut out = String::new();
    section(&mut out, "CLASSES - THINGS");
    for thing in &ontology.things {
        let class_iri = ontology.iri_of(&thing.id);
        if options.visualisation && class_iri == root {
            continue;
        }
        open_class(&mut out, &class_iri);
        entity(&mut out, entity_type::THING);
        label(&mut out, &thing.name, false);
        out.push_str(&format!(
            "        <rdfs:comment {DT_STRING}>{}</rdfs:comment>\n",
            thing.description
        ));
        url(&mut out, &thing.url);
        close_class(&mut out);
    }
    out
}

/// Discipline classes, each a child of and restricted against its thing.
#[must_use]
pub fn render_disciplines(ontology: &Ontology, options: &RenderOptions) -> String {
    let mut out = String::new();
    section(&mut out, "CLASSES - DISCIPLINES");
    for discipline in &ontology.disciplines {
        let thing_iri = ontology.iri_of(&discipline.thing_id);
        open_class(&mut out, &ontology.iri_of(&discipline.id));
        parent(&mut out, ontology, &thing_iri, options);
        restriction(
            &mut out,
            &ontology.iri_of(&discipline.object_property_id),
            &thing_iri,
        );
        entity(&mut out, entity_type::DISCIPLINE);
        label(&mut out, &discipline.name, false);
        definition(&mut out, &discipline.description);
        close_class(&mut out);
    }
    out
}

/// Branch classes, each a child of and restricted against its discipline.
#[must_use]
pub fn render_branches(ontology: &Ontology, options: &RenderOptions) -> String {
    let mut out = String::new();
    section(&mut out, "CLASSES - BRANCHES");
    for branch in &ontology.branches {
        let discipline_iri = ontology.iri_of(&branch.discipline_id);
        open_class(&mut out, &ontology.iri_of(&branch.id));
        parent(&mut out, ontology, &discipline_iri, options);
        restriction(
            &mut out,
            &ontology.iri_of(&branch.object_property_id),
            &discipline_iri,
        );
        entity(&mut out, entity_type::BRANCH);
        label(&mut out, &branch.name, false);
        if let Some(description) = &branch.description {
            definition(&mut out, description);
        }
        if let Some(responsibilities) = &branch.responsibilities {
            literal(&mut out, "responsibilities", responsibilities);
        }
        url(&mut out, &branch.url);
        close_class(&mut out);
    }
    out
}

/// Skill classes, children of the skill root, with their level capabilities.
#[must_use]
pub fn render_skills(ontology: &Ontology, options: &RenderOptions) -> String {
    let root = ontology.skill_root_iri();
    let mut out = String::new();
    section(&mut out, "CLASSES - SKILLS");
    for skill in &ontology.skills {
        open_class(&mut out, &ontology.iri_of(&skill.local_name()));
        parent(&mut out, ontology, &root, options);
        out.push_str(&format!(
            "        <rdfs:label xml:lang=\"en\">{}</rdfs:label>\n",
            skill.name
        ));
        definition(&mut out, &skill.description);
        entity(&mut out, entity_type::SKILL);
        url(&mut out, &options.skill_url(&skill.anchor_id));
        for level in SkillLevel::ALL {
            literal(
                &mut out,
                level.capabilities_element(),
                &numbered_list(skill.skill_levels.at(level)),
            );
        }
        close_class(&mut out);
    }
    out
}

/// Role classes: branch parent, `specialistIn` restriction, one restriction
/// per required skill, and the role's numbered lists.
#[must_use]
pub fn render_roles(ontology: &Ontology, options: &RenderOptions) -> String {
    let mut out = String::new();
    section(&mut out, "CLASSES - ROLES");
    for role in &ontology.roles {
        let branch_iri = ontology.iri_of(&role.branch_id);
        open_class(&mut out, &ontology.iri_of(&role.id()));
        parent(&mut out, ontology, &branch_iri, options);
        restriction(&mut out, &ontology.iri_of(SPECIALIST_IN_ID), &branch_iri);
        for (skill_id, level) in &role.skills {
            restriction(
                &mut out,
                &ontology.iri_of(level.object_property_id()),
                &ontology.iri_of(&format!("{SKILL_CLASS_ID}{skill_id}")),
            );
        }
        entity(&mut out, entity_type::ROLE);
        out.push_str(&format!(
            "        <rdfs:label xml:lang=\"en\">{}</rdfs:label>\n",
            role.name
        ));
        definition(&mut out, &role.description);
        url(&mut out, &role.url);
        literal(&mut out, "responsibilities", &numbered_list(&role.responsibilities));
        literal(
            &mut out,
            "civilServiceJobGrades",
            &numbered_list(&role.civil_service_job_grades),
        );
        close_class(&mut out);
    }
    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n    <!-- {title} -->\n\n"));
}

fn open_class(out: &mut String, class_iri: &str) {
    out.push_str(&format!("    <owl:Class rdf:about=\"{class_iri}\">\n"));
}

fn close_class(out: &mut String) {
    out.push_str("    </owl:Class>\n\n");
}

/// Direct `rdfs:subClassOf`; omitted for the skill root in the visualisation variant.
fn parent(out: &mut String, ontology: &Ontology, parent_iri: &str, options: &RenderOptions) {
    if options.visualisation && parent_iri == ontology.skill_root_iri() {
        return;
    }
    out.push_str(&format!(
        "        <rdfs:subClassOf rdf:resource=\"{parent_iri}\"/>\n"
    ));
}

fn restriction(out: &mut String, property_iri: &str, target_iri: &str) {
    out.push_str("        <rdfs:subClassOf>\n");
    out.push_str("            <owl:Restriction>\n");
    out.push_str(&format!(
        "                <owl:onProperty rdf:resource=\"{property_iri}\"/>\n"
    ));
    out.push_str(&format!(
        "                <owl:someValuesFrom rdf:resource=\"{target_iri}\"/>\n"
    ));
    out.push_str("            </owl:Restriction>\n");
    out.push_str("        </rdfs:subClassOf>\n");
}

fn label(out: &mut String, text: &str, with_lang: bool) {
    let lang = if with_lang { "xml:lang=\"en\" " } else { "" };
    out.push_str(&format!(
        "        <rdfs:label {lang}{DT_STRING}>{text}</rdfs:label>\n"
    ));
}

fn definition(out: &mut String, text: &str) {
    literal(out, "skos:definition", text);
}

fn entity(out: &mut String, kind: &str) {
    literal(out, "entityType", kind);
}

fn literal(out: &mut String, element: &str, text: &str) {
    out.push_str(&format!(
        "        <{element} xml:lang=\"en\" {DT_STRING}>{text}</{element}>\n"
    ));
}

fn url(out: &mut String, resource: &str) {
    out.push_str(&format!(
        "        <url xml:lang=\"en\" rdf:resource=\"{resource}\"/>\n"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_ontology;
    use crate::model::{OntologyMetadata, OwlInfo, ThingClass};

    fn options() -> RenderOptions {
        RenderOptions::new("https://example.org/framework/", "/skills")
    }

    fn class_block<'a>(doc: &'a str, class_iri: &str) -> &'a str {
        let open = format!("<owl:Class rdf:about=\"{class_iri}\">");
        let start = doc.find(&open).unwrap_or_else(|| panic!("no block for {class_iri}"));
        let end = start + doc[start..].find("</owl:Class>").unwrap_or(0);
        &doc[start..end]
    }

    #[test]
    fn document_frame_and_section_order() {
        let doc = to_rdf_xml(&sample_ontology(), &options());
        assert!(doc.starts_with("<?xml version=\"1.0\"?>\n<rdf:RDF "));
        assert!(doc.ends_with("</rdf:RDF>\n"));
        assert_eq!(doc.matches("<owl:Ontology ").count(), 1);

        let sections = [
            "ONTOLOGY METADATA",
            "ANNOTATION PROPERTIES",
            "OBJECT PROPERTIES",
            "CLASSES - THINGS",
            "CLASSES - DISCIPLINES",
            "CLASSES - BRANCHES",
            "CLASSES - SKILLS",
            "CLASSES - ROLES",
        ];
        let positions: Vec<usize> = sections
            .iter()
            .map(|s| doc.find(&format!("<!-- {s} -->")).unwrap_or(usize::MAX))
            .collect();
        assert!(positions.iter().all(|p| *p != usize::MAX), "{positions:?}");
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn header_declares_namespaces_and_contributors_in_order() {
        let header = render_metadata(&sample_ontology());
        for prefix in ["owl", "rdf", "xml", "xsd", "rdfs", "skos", "dc", "terms"] {
            assert!(header.contains(&format!("xmlns:{prefix}=\"")), "missing {prefix}");
        }
        assert!(header.contains("<rdf:RDF xmlns=\"https://example.org/ddat#\""));
        let ada = header.find("<terms:contributor>Ada</terms:contributor>");
        let grace = header.find("<terms:contributor>Grace</terms:contributor>");
        assert!(ada.is_some() && grace.is_some() && ada < grace);
        assert!(header.contains("<owl:versionInfo"));
        assert!(header.contains(">1.2.0</owl:versionInfo>"));
    }

    #[test]
    fn skos_definition_property_comes_first() {
        let fragment = render_annotation_properties(&sample_ontology());
        let skos = fragment.find("core#definition\"/>").unwrap_or(usize::MAX);
        let first = fragment.find("https://example.org/ddat#entityType").unwrap_or(0);
        assert!(skos < first);
    }

    #[test]
    fn object_properties_extend_top_property() {
        let ontology = sample_ontology();
        let fragment = render_object_properties(&ontology);
        assert_eq!(
            fragment.matches("owl#topObjectProperty\"/>").count(),
            ontology.object_properties.len()
        );
    }

    #[test]
    fn thing_block_is_six_lines() {
        let ontology = sample_ontology();
        let fragment = render_things(&ontology, &options());
        let lines: Vec<&str> = fragment.lines().collect();
        let start = lines
            .iter()
            .position(|l| l.contains("<owl:Class rdf:about=\"https://example.org/ddat#skill\">"))
            .unwrap_or(0);
        assert_eq!(lines[start + 5].trim(), "</owl:Class>");
    }

    #[test]
    fn every_discipline_links_to_a_known_thing() {
        let ontology = sample_ontology();
        let doc = to_rdf_xml(&ontology, &options());
        for discipline in &ontology.disciplines {
            assert!(ontology.find_thing(&discipline.thing_id).is_some());
            let block = class_block(&doc, &ontology.iri_of(&discipline.id));
            let thing = ontology.iri_of(&discipline.thing_id);
            assert!(block.contains(&format!("<rdfs:subClassOf rdf:resource=\"{thing}\"/>")));
            assert!(block.contains(&format!("<owl:someValuesFrom rdf:resource=\"{thing}\"/>")));
            assert!(block.contains(">Discipline</entityType>"));
        }
    }

    #[test]
    fn branch_optional_fields_follow_presence() {
        let ontology = sample_ontology();
        let doc = to_rdf_xml(&ontology, &options());
        let engineering = class_block(&doc, "https://example.org/ddat#dataEngineeringBranch");
        assert!(engineering.contains(">Builds data pipelines.</skos:definition>"));
        assert!(!engineering.contains("<responsibilities"));
        let science = class_block(&doc, "https://example.org/ddat#dataScienceBranch");
        assert!(!science.contains("<skos:definition"));
        assert!(science.contains(">Applies statistics.</responsibilities>"));
        assert!(science.contains("rdf:resource=\"https://example.org/framework/data-science\"/>"));
    }

    #[test]
    fn skill_block_carries_url_and_capabilities() {
        let ontology = sample_ontology();
        let doc = to_rdf_xml(&ontology, &options());
        let block = class_block(&doc, "https://example.org/ddat#skillDataModelling");
        assert!(block.contains("<rdfs:subClassOf rdf:resource=\"https://example.org/ddat#skill\"/>"));
        assert!(block.contains("rdf:resource=\"https://example.org/framework/skills#data-modelling\"/>"));
        assert!(block.contains(">1. Produce models. \n2. Review models. \n</workingLevelCapabilities>"));
        for level in SkillLevel::ALL {
            assert!(block.contains(&format!("<{} ", level.capabilities_element())));
        }
    }

    #[test]
    fn role_has_one_restriction_per_skill_with_mapped_property() {
        let ontology = sample_ontology();
        let doc = to_rdf_xml(&ontology, &options());
        for role in &ontology.roles {
            let block = class_block(&doc, &ontology.iri_of(&role.id()));
            // branch restriction + one per skill
            assert_eq!(block.matches("<owl:Restriction>").count(), role.skills.len() + 1);
            for (skill_id, level) in &role.skills {
                let expected = format!(
                    "<owl:onProperty rdf:resource=\"{}\"/>\n                <owl:someValuesFrom rdf:resource=\"{}\"/>",
                    ontology.iri_of(level.object_property_id()),
                    ontology.iri_of(&format!("skill{skill_id}"))
                );
                assert!(block.contains(&expected), "missing restriction for {skill_id}");
            }
        }
        let block = class_block(&doc, "https://example.org/ddat#dataEngineer");
        assert!(block.contains("#specialistIn\"/>"));
        assert!(block.contains(">1. Design pipelines. \n2. Support users. \n</responsibilities>"));
        assert!(block.contains(">1. Senior executive officer (SEO). \n</civilServiceJobGrades>"));
    }

    #[test]
    fn role_restrictions_follow_skill_map_order() {
        let ontology = sample_ontology();
        let fragment = render_roles(&ontology, &options());
        let working = fragment.find("#workingLevelOf\"/>").unwrap_or(usize::MAX);
        let expert = fragment.find("#expertIn\"/>").unwrap_or(0);
        assert!(working < expert);
    }

    #[test]
    fn rendering_is_deterministic() {
        let ontology = sample_ontology();
        assert_eq!(to_rdf_xml(&ontology, &options()), to_rdf_xml(&ontology, &options()));
    }

    #[test]
    fn visualisation_variant_drops_skill_root_links() {
        let ontology = sample_ontology();
        let doc = to_rdf_xml(&ontology, &options().for_visualisation());
        assert!(!doc.contains("<owl:Class rdf:about=\"https://example.org/ddat#skill\">"));
        assert!(!doc.contains("rdf:resource=\"https://example.org/ddat#skill\"/>"));
        assert!(doc.contains("<owl:Class rdf:about=\"https://example.org/ddat#skillDataModelling\">"));
        assert!(doc.contains("<owl:someValuesFrom rdf:resource=\"https://example.org/ddat#skillDataModelling\"/>"));
    }

    #[test]
    fn minimal_ontology_renders_single_thing() {
        let mut ontology = Ontology::new(OntologyMetadata {
            name: "Test".to_owned(),
            iri: "http://x#".to_owned(),
            description: "d".to_owned(),
            owl: OwlInfo {
                version: "1.0".to_owned(),
            },
            contributors: vec!["A".to_owned()],
        });
        ontology.things.push(ThingClass {
            id: "t1".to_owned(),
            name: "T".to_owned(),
            description: "d".to_owned(),
            url: "http://x".to_owned(),
        });
        let doc = to_rdf_xml(&ontology, &RenderOptions::new("http://x", "skills"));
        assert_eq!(doc.matches("<owl:Class rdf:about=\"http://x#t1\">").count(), 1);
        let block = class_block(&doc, "http://x#t1");
        assert!(block.contains(">T</rdfs:label>"));
        assert!(block.contains(">d</rdfs:comment>"));
        assert!(doc.contains("<terms:contributor>A</terms:contributor>"));
    }
}
