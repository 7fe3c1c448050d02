//! The derived character sheet: every engine query evaluated once.

use std::collections::{BTreeMap, BTreeSet};

use dossier_catalog::{Catalog, FactionId, TraitId};

use crate::ability::{AbilityScores, compute_ability_scores};
use crate::budget::{BudgetStatus, compute_total_points, resolve_skills};
use crate::compat::compute_disabled_traits;
use crate::config::EngineConfig;
use crate::selection::Selection;
use crate::standing::compute_faction_values;

/// A snapshot of everything the engine derives from a selection.
///
/// Nothing is cached: building a sheet reruns every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSheet {
    /// Remaining build points.
    pub points: i32,
    /// Whether the budget is overspent.
    pub status: BudgetStatus,
    /// Traits that cannot be newly selected.
    pub disabled_traits: BTreeSet<TraitId>,
    /// Derived ability scores.
    pub abilities: AbilityScores,
    /// Skills from species and profession.
    pub skills: Vec<String>,
    /// Faction standings after the draft.
    pub factions: BTreeMap<FactionId, i32>,
}

impl CharacterSheet {
    /// Evaluate every engine query for a selection.
    pub fn compute(catalog: &Catalog, config: &EngineConfig, selection: &Selection) -> Self {
        let points = compute_total_points(catalog, config, selection);
        let sheet = Self {
            points,
            status: BudgetStatus::of(points),
            disabled_traits: compute_disabled_traits(catalog, selection.traits()),
            abilities: compute_ability_scores(catalog, config, selection),
            skills: resolve_skills(catalog, selection),
            factions: compute_faction_values(catalog, config, selection.cards()),
        };
        tracing::debug!(
            points = sheet.points,
            status = %sheet.status,
            disabled = sheet.disabled_traits.len(),
            "character sheet computed"
        );
        sheet
    }

    /// Faction standings that moved away from neutral.
    pub fn non_neutral_factions(&self) -> impl Iterator<Item = (&FactionId, i32)> {
        self.factions
            .iter()
            .filter(|(_, v)| **v != 0)
            .map(|(id, v)| (id, *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::Ability;

    fn sample() -> (Catalog, Selection) {
        let catalog = Catalog::builtin();
        let mut sel = Selection::new();
        sel.set_species(Some("zabrak"));
        sel.set_profession(Some("tech"));
        sel.add_trait(&catalog, "robuste");
        sel.add_trait(&catalog, "impulsif");
        sel.draft_card("sauvetage_jedi");
        (catalog, sel)
    }

    #[test]
    fn sheet_collects_all_queries() {
        let (catalog, sel) = sample();
        let sheet = CharacterSheet::compute(&catalog, &EngineConfig::default(), &sel);

        // 0 + 0 (zabrak) - 4 (tech) - 5 (robuste) + 4 (impulsif)
        assert_eq!(sheet.points, -5);
        assert_eq!(sheet.status, BudgetStatus::Overspent);
        assert!(sheet.disabled_traits.contains("analytique"));

        // zabrak +2 CON -2 SAG, tech +1 INT +1 CON, robuste +2 CON, impulsif -1 SAG
        assert_eq!(sheet.abilities.get(Ability::Con).total, 15);
        assert_eq!(sheet.abilities.get(Ability::Sag).total, 7);
        assert_eq!(sheet.abilities.get(Ability::Int).total, 11);
        assert_eq!(sheet.abilities.get(Ability::For).total, 10);

        assert_eq!(
            sheet.skills,
            vec!["Endurance", "Mécanique", "Informatique", "Systèmes"]
        );

        let moved: Vec<(&FactionId, i32)> = sheet.non_neutral_factions().collect();
        assert_eq!(moved.len(), 2);
        assert_eq!(sheet.factions["jedi"], 3);
        assert_eq!(sheet.factions["sith"], -2);
    }

    #[test]
    fn computing_twice_is_identical() {
        let (catalog, sel) = sample();
        let cfg = EngineConfig::default();
        assert_eq!(
            CharacterSheet::compute(&catalog, &cfg, &sel),
            CharacterSheet::compute(&catalog, &cfg, &sel)
        );
    }

    #[test]
    fn empty_selection_sheet() {
        let catalog = Catalog::builtin();
        let cfg = EngineConfig::default().with_base_points(20);
        let sheet = CharacterSheet::compute(&catalog, &cfg, &Selection::new());
        assert_eq!(sheet.points, 20);
        assert_eq!(sheet.status, BudgetStatus::Ready);
        assert!(sheet.disabled_traits.is_empty());
        assert!(sheet.skills.is_empty());
        assert_eq!(sheet.non_neutral_factions().count(), 0);
        assert!(sheet.abilities.iter().all(|(_, s)| s.total == 10));
    }
}
