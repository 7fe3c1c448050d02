use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use dossier_catalog::{Catalog, Selectable};
use dossier_engine::budget::signed;
use dossier_engine::{BudgetStatus, CharacterSheet, EngineConfig, selected_traits_by_points};

use crate::SelectionArgs;

pub fn run(catalog: &Catalog, config: &EngineConfig, args: &SelectionArgs) -> Result<(), String> {
    let (selection, identity) = super::build_selection(catalog, args)?;
    let sheet = CharacterSheet::compute(catalog, config, &selection);

    let title = if identity.codename.is_empty() {
        "Dossier sans nom"
    } else {
        identity.codename.as_str()
    };
    println!("  {}", title.bold());
    if !identity.concept.is_empty() {
        println!("  {}", identity.concept.italic());
    }
    if let Some(camp) = identity.camp {
        println!("  camp:       {camp}");
    }
    println!();

    let status = match sheet.status {
        BudgetStatus::Ready => sheet.status.to_string().green(),
        BudgetStatus::Overspent => sheet.status.to_string().red().bold(),
    };
    println!("  points:     {} ({status})", sheet.points);

    let names = [
        (
            "species",
            selection
                .species()
                .map(|id| catalog.find_species(id).map_or(id, |s| s.name())),
        ),
        (
            "profession",
            selection
                .profession()
                .map(|id| catalog.find_profession(id).map_or(id, |p| p.name())),
        ),
        (
            "planet",
            selection
                .planet()
                .map(|id| catalog.find_planet(id).map_or(id, |p| p.name.as_str())),
        ),
        (
            "doctrine",
            selection
                .doctrine()
                .map(|id| catalog.find_doctrine(id).map_or(id, |d| d.name.as_str())),
        ),
        (
            "method",
            selection
                .method()
                .map(|id| catalog.find_method(id).map_or(id, |m| m.name.as_str())),
        ),
    ];
    for (label, name) in names {
        if let Some(name) = name {
            println!("  {:<11} {name}", format!("{label}:"));
        }
    }
    if !selection.red_lines().is_empty() {
        let red_lines: Vec<&str> = selection
            .red_lines()
            .iter()
            .map(|id| catalog.find_red_line(id).map_or(id.as_str(), |r| r.name.as_str()))
            .collect();
        println!("  red lines:  {}", red_lines.join(", "));
    }
    println!();

    let traits = selected_traits_by_points(catalog, &selection);
    if !traits.is_empty() {
        println!("  {}", "Traits".bold());
        for t in traits {
            println!("    {:>4}  {}", signed(t.points()), t.name);
        }
        println!();
    }

    if !sheet.disabled_traits.is_empty() {
        let disabled: Vec<&str> = sheet.disabled_traits.iter().map(String::as_str).collect();
        println!("  disabled:   {}", disabled.join(", ").dimmed());
        println!();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ability", "Base", "Mod", "Total"]);
    for (ability, score) in sheet.abilities.iter() {
        table.add_row(vec![
            ability.key().to_string(),
            score.base.to_string(),
            signed(score.modifier),
            score.total.to_string(),
        ]);
    }
    println!("{table}");
    println!();

    if !sheet.skills.is_empty() {
        println!("  skills:     {}", sheet.skills.join(", "));
        println!();
    }

    let moved: Vec<_> = sheet.non_neutral_factions().collect();
    if !moved.is_empty() {
        println!("  {}", "Factions".bold());
        for (id, value) in moved {
            let name = catalog.find_faction(id).map_or(id.as_str(), |f| f.name.as_str());
            let value = if value > 0 {
                signed(value).green()
            } else {
                signed(value).red()
            };
            println!("    {value:>4}  {name}");
        }
    }

    Ok(())
}
