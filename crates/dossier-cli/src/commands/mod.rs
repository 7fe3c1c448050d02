pub mod check;
pub mod export;
pub mod list;
pub mod sheet;
pub mod show;

use std::path::Path;

use colored::Colorize;
use dossier_catalog::Catalog;
use dossier_engine::{Camp, Identity, Selection, TraitToggle};

use crate::SelectionArgs;

/// Load the catalog from a JSON file, or fall back to the built-in content.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(path) => {
            let catalog = Catalog::load(path).map_err(|e| e.to_string())?;
            tracing::info!(path = %path.display(), records = catalog.len(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Replay the selection flags through the engine entry points, in the order
/// a player would click them. Rejected and unknown picks are reported on
/// stderr and otherwise ignored.
fn build_selection(catalog: &Catalog, args: &SelectionArgs) -> Result<(Selection, Identity), String> {
    let camp = match args.camp.as_deref() {
        Some(name) => Some(Camp::parse(name).ok_or_else(|| {
            format!(
                "unknown camp: \"{name}\". Use: {}",
                Camp::ALL.map(|c| c.label()).join(", ")
            )
        })?),
        None => None,
    };

    let mut selection = Selection::new();

    if let Some(id) = args.species.as_deref() {
        warn_if_unknown("species", id, catalog.find_species(id).is_some());
        selection.set_species(Some(id));
    }
    if let Some(id) = args.profession.as_deref() {
        warn_if_unknown("profession", id, catalog.find_profession(id).is_some());
        selection.set_profession(Some(id));
    }
    for id in &args.traits {
        warn_if_unknown("trait", id, catalog.find_trait(id).is_some());
        if let TraitToggle::Rejected { blocked_by } = selection.add_trait(catalog, id) {
            eprintln!(
                "  {} trait '{id}' is incompatible with {}; skipped",
                "warning:".yellow().bold(),
                blocked_by.join(", ")
            );
        }
    }
    if let Some(id) = args.planet.as_deref() {
        warn_if_unknown("planet", id, catalog.find_planet(id).is_some());
        selection.set_planet(Some(id));
    }
    if let Some(id) = args.doctrine.as_deref() {
        warn_if_unknown("doctrine", id, catalog.find_doctrine(id).is_some());
        selection.set_doctrine(Some(id));
    }
    if let Some(id) = args.method.as_deref() {
        warn_if_unknown("method", id, catalog.find_method(id).is_some());
        selection.set_method(Some(id));
    }
    for id in &args.red_lines {
        warn_if_unknown("red line", id, catalog.find_red_line(id).is_some());
        selection.add_red_line(id);
    }
    for id in &args.cards {
        warn_if_unknown("card", id, catalog.find_card(id).is_some());
        if !selection.draft_card(id) {
            eprintln!(
                "  {} card '{id}' already drafted; skipped",
                "warning:".yellow().bold()
            );
        }
    }

    let identity = Identity {
        codename: args.codename.clone(),
        concept: args.concept.clone(),
        notes: args.notes.clone(),
        camp,
    };
    Ok((selection, identity))
}

fn warn_if_unknown(kind: &str, id: &str, known: bool) {
    if !known {
        eprintln!(
            "  {} unknown {kind} '{id}' counts as nothing",
            "warning:".yellow().bold()
        );
    }
}
