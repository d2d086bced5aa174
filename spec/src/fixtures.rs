//! Small, fully consistent ontology shared by the unit tests.

use indexmap::IndexMap;

use crate::model::{
    AnnotationProperty, BranchClass, DisciplineClass, ObjectProperty, Ontology, OntologyMetadata,
    OwlInfo, RoleClass, SkillClass, SkillLevel, SkillLevels, ThingClass,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

pub(crate) fn sample_ontology() -> Ontology {
    let mut ontology = Ontology::new(OntologyMetadata {
        name: "DDaT Ontology".to_owned(),
        iri: "https://example.org/ddat".to_owned(),
        description: "Digital, data and technology capability framework".to_owned(),
        owl: OwlInfo {
            version: "1.2.0".to_owned(),
        },
        contributors: strings(&["Ada", "Grace"]),
    });

    ontology.annotation_properties = vec![
        AnnotationProperty {
            id: "entityType".to_owned(),
            name: "entity type".to_owned(),
            description: "Domain category of a class.".to_owned(),
        },
        AnnotationProperty {
            id: "url".to_owned(),
            name: "url".to_owned(),
            description: "Framework page describing the class.".to_owned(),
        },
    ];

    ontology.object_properties = [
        ("isDisciplineOf", "is discipline of"),
        ("isBranchOf", "is branch of"),
        ("specialistIn", "specialist in"),
        ("awarenessOf", "awareness of"),
        ("workingLevelOf", "working level of"),
        ("practitionerOf", "practitioner of"),
        ("expertIn", "expert in"),
    ]
    .into_iter()
    .map(|(id, name)| ObjectProperty {
        id: id.to_owned(),
        name: name.to_owned(),
    })
    .collect();

    ontology.things = vec![
        ThingClass {
            id: "profession".to_owned(),
            name: "Profession".to_owned(),
            description: "A body of related disciplines.".to_owned(),
            url: "https://example.org/framework".to_owned(),
        },
        ThingClass {
            id: "skill".to_owned(),
            name: "Skill".to_owned(),
            description: "A capability a role draws on.".to_owned(),
            url: "https://example.org/framework/skills".to_owned(),
        },
    ];

    ontology.disciplines = vec![DisciplineClass {
        id: "dataDiscipline".to_owned(),
        name: "Data".to_owned(),
        description: "Roles that work with data.".to_owned(),
        thing_id: "profession".to_owned(),
        object_property_id: "isDisciplineOf".to_owned(),
    }];

    ontology.branches = vec![
        BranchClass {
            id: "dataEngineeringBranch".to_owned(),
            name: "Data engineering".to_owned(),
            discipline_id: "dataDiscipline".to_owned(),
            object_property_id: "isBranchOf".to_owned(),
            description: Some("Builds data pipelines.".to_owned()),
            responsibilities: None,
            url: "https://example.org/framework/data-engineering".to_owned(),
        },
        BranchClass {
            id: "dataScienceBranch".to_owned(),
            name: "Data science".to_owned(),
            discipline_id: "dataDiscipline".to_owned(),
            object_property_id: "isBranchOf".to_owned(),
            description: None,
            responsibilities: Some("Applies statistics.".to_owned()),
            url: "https://example.org/framework/data-science".to_owned(),
        },
    ];

    ontology.skills = vec![
        SkillClass {
            anchor_id: "data-modelling".to_owned(),
            name: "Data modelling".to_owned(),
            description: "Designs data structures.".to_owned(),
            skill_levels: SkillLevels {
                awareness: strings(&["know what a data model is"]),
                working: strings(&["produce models", "review models"]),
                practitioner: strings(&["choose modelling approaches"]),
                expert: strings(&["set modelling standards"]),
            },
        },
        SkillClass {
            anchor_id: "programming".to_owned(),
            name: "Programming and build (data engineering)".to_owned(),
            description: "Writes and tests code.".to_owned(),
            skill_levels: SkillLevels {
                awareness: strings(&["read code"]),
                working: strings(&["write code"]),
                practitioner: strings(&["design code"]),
                expert: strings(&["lead engineering practice"]),
            },
        },
    ];

    let mut skills = IndexMap::new();
    skills.insert("DataModelling".to_owned(), SkillLevel::Working);
    skills.insert(
        "ProgrammingAndBuildDataEngineering".to_owned(),
        SkillLevel::Expert,
    );
    ontology.roles = vec![RoleClass {
        name: "Data Engineer".to_owned(),
        branch_id: "dataEngineeringBranch".to_owned(),
        description: "Builds and maintains data systems.".to_owned(),
        url: "https://example.org/framework/data-engineer#data-engineer".to_owned(),
        responsibilities: strings(&["design pipelines", "support users"]),
        civil_service_job_grades: strings(&["senior executive officer (SEO)"]),
        skills,
    }];

    ontology
}
