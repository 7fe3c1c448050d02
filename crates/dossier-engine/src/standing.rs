//! Faction standings accumulated from drafted allegiance cards.
//!
//! A standing is a clamped numeric value in `[-bound, bound]`. Cards are
//! applied in draft order and the value is clamped after every single
//! effect, so the order of the draft matters once a standing hits a bound.

use std::collections::BTreeMap;
use std::fmt;

use dossier_catalog::{CardId, Catalog, FactionId};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;

/// Reputation with one faction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Faction id.
    pub faction: FactionId,
    /// Current value.
    pub value: i32,
    /// Symmetric bound: the value stays within `[-bound, bound]`. A
    /// negative bound behaves as 0.
    pub bound: i32,
}

impl Standing {
    /// A neutral standing.
    pub fn new(faction: impl Into<FactionId>, bound: i32) -> Self {
        Self {
            faction: faction.into(),
            value: 0,
            bound: bound.max(0),
        }
    }

    /// Apply a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        let bound = self.bound.max(0);
        self.value = self.value.saturating_add(delta).clamp(-bound, bound);
        self.value
    }

    /// Returns true if the standing sits at its upper bound.
    pub fn is_allied(&self) -> bool {
        self.bound > 0 && self.value >= self.bound
    }

    /// Returns true if the standing sits at its lower bound.
    pub fn is_hostile(&self) -> bool {
        self.bound > 0 && self.value <= -self.bound
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:+}/{}", self.faction, self.value, self.bound)
    }
}

/// Standings for every catalog faction after applying the drafted cards.
///
/// Every catalog faction starts at 0. Unknown card ids are skipped. An
/// effect naming a faction the catalog does not know still gets its own
/// entry, clamped the same way.
pub fn compute_standings(
    catalog: &Catalog,
    config: &EngineConfig,
    cards: &[CardId],
) -> BTreeMap<FactionId, Standing> {
    let bound = config.max_faction_value.max(0);
    let initial: BTreeMap<FactionId, Standing> = catalog
        .factions
        .iter()
        .map(|f| (f.id.clone(), Standing::new(f.id.as_str(), bound)))
        .collect();

    cards
        .iter()
        .filter_map(|id| {
            let card = catalog.find_card(id);
            if card.is_none() {
                tracing::debug!(card = %id, "unknown card id ignored");
            }
            card
        })
        .flat_map(|card| card.effects.iter())
        .fold(initial, |mut standings, effect| {
            standings
                .entry(effect.faction.clone())
                .or_insert_with(|| Standing::new(effect.faction.as_str(), bound))
                .adjust(effect.delta);
            standings
        })
}

/// Faction id to clamped standing value.
pub fn compute_faction_values(
    catalog: &Catalog,
    config: &EngineConfig,
    cards: &[CardId],
) -> BTreeMap<FactionId, i32> {
    compute_standings(catalog, config, cards)
        .into_iter()
        .map(|(id, standing)| (id, standing.value))
        .collect()
}
