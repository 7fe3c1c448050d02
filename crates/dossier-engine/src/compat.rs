//! Trait incompatibility resolution.
//!
//! Incompatibility is a directed relation: a trait blocks exactly the ids in
//! its own `incompatible` list. Nothing here symmetrizes it.

use std::collections::BTreeSet;

use dossier_catalog::{Catalog, TraitId};

/// Trait ids that cannot be newly selected given the selected ids.
///
/// The union of the incompatibility lists of every selected trait, minus
/// the selected ids themselves: a checked trait is never reported as
/// disabled.
pub fn compute_disabled_traits(
    catalog: &Catalog,
    selected: &BTreeSet<TraitId>,
) -> BTreeSet<TraitId> {
    selected
        .iter()
        .filter_map(|id| catalog.find_trait(id))
        .flat_map(|t| t.incompatible.iter())
        .filter(|id| !selected.contains(*id))
        .cloned()
        .collect()
}

/// Selected traits whose incompatibility list names `id`, sorted.
pub fn blockers_of(catalog: &Catalog, selected: &BTreeSet<TraitId>, id: &str) -> Vec<TraitId> {
    selected
        .iter()
        .filter_map(|sel| catalog.find_trait(sel))
        .filter(|t| t.blocks(id))
        .map(|t| t.id.clone())
        .collect()
}

/// Pairs `(a, b)` where `a` lists `b` as incompatible but `b` does not list
/// `a`. Unknown targets are not reported here.
pub fn one_way_incompatibilities(catalog: &Catalog) -> Vec<(TraitId, TraitId)> {
    let mut pairs = Vec::new();
    for t in &catalog.traits {
        let one_way = t
            .incompatible
            .iter()
            .filter_map(|other_id| catalog.find_trait(other_id))
            .filter(|other| other.id != t.id && !other.blocks(&t.id));
        for other in one_way {
            pairs.push((t.id.clone(), other.id.clone()));
        }
    }
    pairs
}
