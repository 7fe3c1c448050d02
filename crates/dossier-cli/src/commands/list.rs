use comfy_table::{ContentArrangement, Table};
use dossier_catalog::Catalog;
use dossier_engine::budget::signed;

const KINDS: &str =
    "species, professions, traits, planets, doctrines, methods, red-lines, factions, cards";

pub fn run(catalog: &Catalog, kind: &str, search: Option<&str>) -> Result<(), String> {
    if search.is_some() && kind != "traits" {
        return Err(format!("--search only applies to traits, not {kind}"));
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let count = match kind {
        "species" => {
            table.set_header(vec!["Id", "Name", "Points", "Modifiers", "Description"]);
            for s in &catalog.species {
                table.add_row(vec![
                    s.id.clone(),
                    s.name.clone(),
                    signed(s.points),
                    s.ability_mods.clone(),
                    truncate(&s.blurb),
                ]);
            }
            catalog.species.len()
        }
        "professions" => {
            table.set_header(vec!["Id", "Name", "Points", "Modifiers", "Talent"]);
            for p in &catalog.professions {
                table.add_row(vec![
                    p.id.clone(),
                    p.name.clone(),
                    signed(p.points),
                    p.ability_mods.clone(),
                    truncate(&p.talent),
                ]);
            }
            catalog.professions.len()
        }
        "traits" => {
            let traits = catalog.search_traits(search.unwrap_or_default());
            table.set_header(vec!["Id", "Name", "Points", "Modifiers", "Incompatible"]);
            for t in &traits {
                let incompatible = if t.incompatible.is_empty() {
                    "—".to_string()
                } else {
                    t.incompatible.join(", ")
                };
                table.add_row(vec![
                    t.id.clone(),
                    t.name.clone(),
                    signed(t.points()),
                    t.ability_mods.clone(),
                    incompatible,
                ]);
            }
            traits.len()
        }
        "planets" => {
            table.set_header(vec!["Id", "Name", "Region", "Description"]);
            for p in &catalog.planets {
                table.add_row(vec![
                    p.id.clone(),
                    p.name.clone(),
                    p.region.clone(),
                    truncate(&p.blurb),
                ]);
            }
            catalog.planets.len()
        }
        "doctrines" => {
            table.set_header(vec!["Id", "Name", "Description"]);
            for d in &catalog.doctrines {
                table.add_row(vec![d.id.clone(), d.name.clone(), truncate(&d.blurb)]);
            }
            catalog.doctrines.len()
        }
        "methods" => {
            table.set_header(vec!["Id", "Name", "Description"]);
            for m in &catalog.methods {
                table.add_row(vec![m.id.clone(), m.name.clone(), truncate(&m.blurb)]);
            }
            catalog.methods.len()
        }
        "red-lines" => {
            table.set_header(vec!["Id", "Name", "Description"]);
            for r in &catalog.red_lines {
                table.add_row(vec![r.id.clone(), r.name.clone(), truncate(&r.blurb)]);
            }
            catalog.red_lines.len()
        }
        "factions" => {
            table.set_header(vec!["Id", "Name", "Category"]);
            for f in &catalog.factions {
                table.add_row(vec![f.id.clone(), f.name.clone(), f.category.to_string()]);
            }
            catalog.factions.len()
        }
        "cards" => {
            table.set_header(vec!["Id", "Name", "Effects"]);
            for c in &catalog.cards {
                let effects: Vec<String> = c.effects.iter().map(|e| e.to_string()).collect();
                table.add_row(vec![c.id.clone(), c.name.clone(), effects.join(", ")]);
            }
            catalog.cards.len()
        }
        other => return Err(format!("unknown kind: \"{other}\". Use: {KINDS}")),
    };

    if count == 0 {
        println!("  No entries found.");
        return Ok(());
    }

    println!("{table}");
    println!();
    println!("  {count} entries");

    Ok(())
}

fn truncate(text: &str) -> String {
    if text.is_empty() {
        "—".to_string()
    } else if text.chars().count() > 60 {
        let head: String = text.chars().take(57).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
