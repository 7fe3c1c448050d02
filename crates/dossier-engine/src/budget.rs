//! Point budget and the lists derived from the chosen species, profession,
//! and traits.

use std::fmt;

use dossier_catalog::{Catalog, Trait};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::selection::Selection;

/// Whether the budget is still within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Zero or more points remain.
    Ready,
    /// More points were spent than available. A warning, not an error.
    Overspent,
}

impl BudgetStatus {
    /// Classify a point total.
    pub fn of(total: i32) -> Self {
        if total >= 0 {
            Self::Ready
        } else {
            Self::Overspent
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "Prêt"),
            Self::Overspent => write!(f, "Dépassement"),
        }
    }
}

/// Remaining build points.
///
/// `base_points + species cost + profession cost + Σ(-trait value)`. Ids
/// that do not resolve contribute nothing. The result is not clamped.
pub fn compute_total_points(catalog: &Catalog, config: &EngineConfig, selection: &Selection) -> i32 {
    let total = selection
        .options(catalog)
        .iter()
        .fold(config.base_points, |sum, option| {
            sum.saturating_add(option.point_cost())
        });
    tracing::trace!(total, "point total computed");
    total
}

/// Skills granted by the species then the profession, without duplicates.
pub fn resolve_skills(catalog: &Catalog, selection: &Selection) -> Vec<String> {
    let species = selection
        .species()
        .and_then(|id| catalog.find_species(id))
        .map(|s| s.skills.as_slice())
        .unwrap_or_default();
    let profession = selection
        .profession()
        .and_then(|id| catalog.find_profession(id))
        .map(|p| p.skills.as_slice())
        .unwrap_or_default();

    let mut skills: Vec<String> = Vec::new();
    for skill in species.iter().chain(profession) {
        if !skills.contains(skill) {
            skills.push(skill.clone());
        }
    }
    skills
}

/// Selected traits in display order: highest point cost first, then name.
pub fn selected_traits_by_points<'c>(catalog: &'c Catalog, selection: &Selection) -> Vec<&'c Trait> {
    let mut traits: Vec<&Trait> = selection
        .traits()
        .iter()
        .filter_map(|id| catalog.find_trait(id))
        .collect();
    traits.sort_by(|a, b| b.points().cmp(&a.points()).then_with(|| a.name.cmp(&b.name)));
    traits
}

/// Render trait points with an explicit sign, e.g. `+4` or `-3`.
pub fn signed(points: i32) -> String {
    format!("{points:+}")
}
