use colored::Colorize;
use dossier_catalog::{Catalog, CatalogEntry};
use dossier_engine::budget::signed;
use dossier_engine::parse_ability_mods;

pub fn run(catalog: &Catalog, id: &str) -> Result<(), String> {
    let entry = catalog
        .find_any(id)
        .ok_or_else(|| format!("no catalog record with id \"{id}\""))?;

    println!("  {} [{}]", entry.name().bold(), entry.kind().dimmed());
    println!();

    match entry {
        CatalogEntry::Species(s) => {
            print_text(&s.blurb);
            println!("  points:     {}", signed(s.points));
            print_modifiers(&s.ability_mods);
            print_list("skills", &s.skills);
            print_list("tags", &s.tags);
        }
        CatalogEntry::Profession(p) => {
            print_text(&p.blurb);
            println!("  points:     {}", signed(p.points));
            print_modifiers(&p.ability_mods);
            if !p.talent.is_empty() {
                println!("  talent:     {}", p.talent);
            }
            print_list("skills", &p.skills);
            print_list("tags", &p.tags);
        }
        CatalogEntry::Trait(t) => {
            print_text(&t.desc);
            let kind = if t.is_advantage() {
                "advantage".green()
            } else {
                "drawback".red()
            };
            println!("  points:     {} ({kind})", signed(t.points()));
            print_modifiers(&t.ability_mods);
            print_list("blocks", &t.incompatible);
            let blocked_by: Vec<String> = catalog
                .traits
                .iter()
                .filter(|other| other.blocks(&t.id))
                .map(|other| other.id.clone())
                .collect();
            print_list("blocked by", &blocked_by);
            print_list("tags", &t.tags);
        }
        CatalogEntry::Planet(p) => {
            print_text(&p.blurb);
            println!("  region:     {}", p.region);
            print_list("tags", &p.tags);
        }
        CatalogEntry::Doctrine(d) => print_text(&d.blurb),
        CatalogEntry::Method(m) => print_text(&m.blurb),
        CatalogEntry::RedLine(r) => print_text(&r.blurb),
        CatalogEntry::Faction(f) => {
            println!("  category:   {}", f.category);
        }
        CatalogEntry::Card(c) => {
            print_text(&c.blurb);
            if !c.effects.is_empty() {
                println!("  {}:", "effects".bold());
                for effect in &c.effects {
                    let faction = catalog
                        .find_faction(&effect.faction)
                        .map(|f| f.name.as_str())
                        .unwrap_or(effect.faction.as_str());
                    println!("    {} {faction}", signed(effect.delta));
                }
            }
        }
    }

    Ok(())
}

fn print_text(text: &str) {
    if text.is_empty() {
        return;
    }
    for line in text.lines() {
        println!("  {}", line.trim());
    }
    println!();
}

fn print_modifiers(text: &str) {
    if text.trim().is_empty() {
        return;
    }
    let parsed = parse_ability_mods(text);
    if parsed.is_zero() {
        println!("  modifiers:  {text}");
    } else {
        println!("  modifiers:  {text} {}", format!("({parsed})").dimmed());
    }
}

fn print_list(label: &str, items: &[String]) {
    if !items.is_empty() {
        println!("  {:<11} {}", format!("{label}:"), items.join(", "));
    }
}
