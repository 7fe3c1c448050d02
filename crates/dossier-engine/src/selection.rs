//! The mutable selection state of a character under construction.
//!
//! A [`Selection`] is an owned value: front ends hold one, mutate it through
//! the entry points below in response to user input, and hand a shared
//! reference to the query functions. Ids are stored as given; an id that
//! does not resolve in the catalog simply counts as nothing selected.

use std::collections::BTreeSet;

use dossier_catalog::{
    CardId, Catalog, DoctrineId, MethodId, PlanetId, ProfessionId, RedLineId, Selectable,
    SpeciesId, TraitId,
};
use serde::{Deserialize, Serialize};

use crate::compat;

/// Outcome of a trait selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraitToggle {
    /// The trait was added.
    Added,
    /// The trait was removed.
    Removed,
    /// The request did not change anything (already selected, or not
    /// selected when removing).
    Unchanged,
    /// The trait is blocked by already selected traits.
    Rejected {
        /// Selected traits whose incompatibility list names this trait.
        blocked_by: Vec<TraitId>,
    },
}

/// Everything the player has picked so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    species: Option<SpeciesId>,
    profession: Option<ProfessionId>,
    traits: BTreeSet<TraitId>,
    planet: Option<PlanetId>,
    doctrine: Option<DoctrineId>,
    method: Option<MethodId>,
    red_lines: BTreeSet<RedLineId>,
    cards: Vec<CardId>,
}

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chosen species id.
    pub fn species(&self) -> Option<&str> {
        self.species.as_deref()
    }

    /// Chosen profession id.
    pub fn profession(&self) -> Option<&str> {
        self.profession.as_deref()
    }

    /// Selected trait ids.
    pub fn traits(&self) -> &BTreeSet<TraitId> {
        &self.traits
    }

    /// Chosen planet id.
    pub fn planet(&self) -> Option<&str> {
        self.planet.as_deref()
    }

    /// Chosen doctrine id.
    pub fn doctrine(&self) -> Option<&str> {
        self.doctrine.as_deref()
    }

    /// Chosen method id.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Red line ids the character has opted into.
    pub fn red_lines(&self) -> &BTreeSet<RedLineId> {
        &self.red_lines
    }

    /// Drafted allegiance cards, in draft order.
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Set or clear the species.
    pub fn set_species(&mut self, id: Option<&str>) {
        self.species = id.map(str::to_string);
    }

    /// Set or clear the profession.
    pub fn set_profession(&mut self, id: Option<&str>) {
        self.profession = id.map(str::to_string);
    }

    /// Set or clear the planet of origin.
    pub fn set_planet(&mut self, id: Option<&str>) {
        self.planet = id.map(str::to_string);
    }

    /// Set or clear the doctrine.
    pub fn set_doctrine(&mut self, id: Option<&str>) {
        self.doctrine = id.map(str::to_string);
    }

    /// Set or clear the method.
    pub fn set_method(&mut self, id: Option<&str>) {
        self.method = id.map(str::to_string);
    }

    /// Select a trait unless a selected trait blocks it.
    ///
    /// Adding never evicts anything: if the new trait blocks one that is
    /// already selected, both stay selected.
    pub fn add_trait(&mut self, catalog: &Catalog, id: &str) -> TraitToggle {
        if self.traits.contains(id) {
            return TraitToggle::Unchanged;
        }
        let blocked_by = compat::blockers_of(catalog, &self.traits, id);
        if !blocked_by.is_empty() {
            tracing::debug!(trait_id = id, ?blocked_by, "trait selection rejected");
            return TraitToggle::Rejected { blocked_by };
        }
        self.traits.insert(id.to_string());
        TraitToggle::Added
    }

    /// Deselect a trait. Always allowed.
    pub fn remove_trait(&mut self, id: &str) -> TraitToggle {
        if self.traits.remove(id) {
            TraitToggle::Removed
        } else {
            TraitToggle::Unchanged
        }
    }

    /// Deselect the trait if selected, otherwise try to select it.
    pub fn toggle_trait(&mut self, catalog: &Catalog, id: &str) -> TraitToggle {
        if self.traits.contains(id) {
            self.remove_trait(id)
        } else {
            self.add_trait(catalog, id)
        }
    }

    /// Opt into a red line. Returns false if it was already recorded.
    pub fn add_red_line(&mut self, id: &str) -> bool {
        self.red_lines.insert(id.to_string())
    }

    /// Drop a red line. Returns false if it was not recorded.
    pub fn remove_red_line(&mut self, id: &str) -> bool {
        self.red_lines.remove(id)
    }

    /// Append a card to the draft. A card can be drafted only once;
    /// returns false if it is already in the draft.
    pub fn draft_card(&mut self, id: &str) -> bool {
        if self.cards.iter().any(|c| c == id) {
            tracing::debug!(card = id, "card already drafted");
            return false;
        }
        self.cards.push(id.to_string());
        true
    }

    /// Remove a card from the draft, keeping the order of the others.
    pub fn remove_card(&mut self, id: &str) -> bool {
        match self.cards.iter().position(|c| c == id) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Clear every field back to the empty initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if nothing has been picked.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The resolved species, profession, and traits, in that order.
    ///
    /// Ids missing from the catalog are skipped.
    pub fn options<'c>(&self, catalog: &'c Catalog) -> Vec<&'c dyn Selectable> {
        let mut options: Vec<&'c dyn Selectable> = Vec::new();
        if let Some(id) = self.species() {
            match catalog.find_species(id) {
                Some(species) => options.push(species),
                None => tracing::debug!(species = id, "unknown species id ignored"),
            }
        }
        if let Some(id) = self.profession() {
            match catalog.find_profession(id) {
                Some(profession) => options.push(profession),
                None => tracing::debug!(profession = id, "unknown profession id ignored"),
            }
        }
        for id in &self.traits {
            match catalog.find_trait(id) {
                Some(t) => options.push(t),
                None => tracing::debug!(trait_id = %id, "unknown trait id ignored"),
            }
        }
        options
    }
}
