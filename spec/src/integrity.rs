//! Referential integrity of a fully populated ontology.
//!
//! Checks every cross-reference the renderer resolves:
//! - discipline → thing, discipline → object property
//! - branch → discipline, branch → object property
//! - role → branch, role skill keys → skills
//! - role restrictions → `specialistIn` and the skill-level properties
//!
//! Ids must also be unique per entity kind, including the ids derived from
//! skill and role names, since each one becomes a class IRI.
//!
//! The first violation found is returned, in collection order.

use std::collections::HashMap;

use crate::error::OntologyError;
use crate::model::{Ontology, SPECIALIST_IN_ID};

impl Ontology {
    /// Verifies that every reference resolves to a declared entity.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::DanglingReference`] naming the first
    /// unresolved reference, [`OntologyError::EmptyName`] for a skill or
    /// role whose name yields no identifier, or
    /// [`OntologyError::DuplicateId`] when two entities of one kind share an id.
    pub fn check_references(&self) -> Result<(), OntologyError> {
        let things = index("thing", self.things.iter().map(|t| (t.id.clone(), t.name.as_str())))?;
        let properties = index(
            "object property",
            self.object_properties.iter().map(|p| (p.id.clone(), p.name.as_str())),
        )?;
        let disciplines = index(
            "discipline",
            self.disciplines.iter().map(|d| (d.id.clone(), d.name.as_str())),
        )?;
        let branches = index("branch", self.branches.iter().map(|b| (b.id.clone(), b.name.as_str())))?;
        let skills = index("skill", self.skills.iter().map(|s| (s.id(), s.name.as_str())))?;
        index("role", self.roles.iter().map(|r| (r.id(), r.name.as_str())))?;

        for discipline in &self.disciplines {
            require(&things, "discipline", &discipline.id, "thing_id", &discipline.thing_id)?;
            require(
                &properties,
                "discipline",
                &discipline.id,
                "object_property_id",
                &discipline.object_property_id,
            )?;
        }

        for branch in &self.branches {
            require(&disciplines, "branch", &branch.id, "discipline_id", &branch.discipline_id)?;
            require(
                &properties,
                "branch",
                &branch.id,
                "object_property_id",
                &branch.object_property_id,
            )?;
        }

        for role in &self.roles {
            let id = role.id();
            require(&branches, "role", &id, "branch_id", &role.branch_id)?;
            require(&properties, "role", &id, "object property", SPECIALIST_IN_ID)?;
            for (skill_id, level) in &role.skills {
                if !skills.contains_key(skill_id.as_str()) {
                    return Err(dangling("role", &id, "skill", skill_id));
                }
                require(&properties, "role", &id, "object property", level.object_property_id())?;
            }
        }

        Ok(())
    }
}

/// Maps each id to its entity's name, rejecting empty and repeated ids.
fn index<'a>(
    entity: &'static str,
    items: impl Iterator<Item = (String, &'a str)>,
) -> Result<HashMap<String, &'a str>, OntologyError> {
    let mut seen: HashMap<String, &'a str> = HashMap::new();
    for (id, name) in items {
        if id.is_empty() {
            return Err(OntologyError::EmptyName {
                entity,
                name: name.to_owned(),
            });
        }
        if let Some(first) = seen.get(id.as_str()) {
            return Err(OntologyError::DuplicateId {
                entity,
                first: (*first).to_owned(),
                second: name.to_owned(),
                id,
            });
        }
        seen.insert(id, name);
    }
    Ok(seen)
}

fn require(
    known: &HashMap<String, &str>,
    entity: &'static str,
    id: &str,
    field: &'static str,
    target: &str,
) -> Result<(), OntologyError> {
    if known.contains_key(target) {
        Ok(())
    } else {
        Err(dangling(entity, id, field, target))
    }
}

fn dangling(entity: &'static str, id: &str, field: &'static str, target: &str) -> OntologyError {
    OntologyError::DanglingReference {
        entity,
        id: id.to_owned(),
        field,
        target: target.to_owned(),
    }
}
