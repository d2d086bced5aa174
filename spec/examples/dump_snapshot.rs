//! Loads a JSON snapshot written by `ddat-build` and prints its inventory.
//!
//! Run with: `cargo run --example dump_snapshot -p ddat-ontology -- data/models/ontology/ddat.json`

use ddat_ontology::serializer::snapshot;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/models/ontology/ddat.json".to_owned());
    let ontology = snapshot::from_json(&std::fs::read_to_string(&path)?)?;

    println!("{} v{} <{}>", ontology.name, ontology.owl_version, ontology.iri);
    println!("  Annotation properties: {}", ontology.annotation_properties.len());
    println!("  Object properties:     {}", ontology.object_properties.len());
    println!("  Things:                {}", ontology.things.len());
    println!("  Disciplines:           {}", ontology.disciplines.len());
    println!("  Branches:              {}", ontology.branches.len());
    println!("  Skills:                {}", ontology.skills.len());
    println!("  Roles:                 {}", ontology.roles.len());
    println!();

    for role in &ontology.roles {
        println!("  {:40} {:>2} skills  [{}]", role.name, role.skills.len(), role.branch_id);
    }
    Ok(())
}
