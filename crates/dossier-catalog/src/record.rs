use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a species record.
pub type SpeciesId = String;
/// Identifier of a profession record.
pub type ProfessionId = String;
/// Identifier of a trait record.
pub type TraitId = String;
/// Identifier of a planet record.
pub type PlanetId = String;
/// Identifier of a doctrine record.
pub type DoctrineId = String;
/// Identifier of a method record.
pub type MethodId = String;
/// Identifier of a red line record.
pub type RedLineId = String;
/// Identifier of a faction record.
pub type FactionId = String;
/// Identifier of an allegiance card.
pub type CardId = String;

/// A catalog entry the player can pick that carries a point cost and
/// ability modifiers.
pub trait Selectable {
    /// Unique identifier within its table.
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Points charged against the budget. Positive values add to the
    /// remaining budget, negative values spend it.
    fn point_cost(&self) -> i32;

    /// Short descriptive tags.
    fn tags(&self) -> &[String];

    /// Free-text ability modifiers, e.g. `"+2 FOR, -2 DEX"`.
    fn ability_mods(&self) -> &str;
}

/// A playable species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// Unique identifier.
    pub id: SpeciesId,
    /// Display name.
    pub name: String,
    /// Signed point cost.
    #[serde(default)]
    pub points: i32,
    /// One-line pitch shown on the species card.
    #[serde(default)]
    pub blurb: String,
    /// Short descriptive tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ability modifier text.
    #[serde(default)]
    pub ability_mods: String,
    /// Skills granted by the species.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Selectable for Species {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn point_cost(&self) -> i32 {
        self.points
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn ability_mods(&self) -> &str {
        &self.ability_mods
    }
}

/// A profession (career) the character held before the campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profession {
    /// Unique identifier.
    pub id: ProfessionId,
    /// Display name.
    pub name: String,
    /// Signed point cost.
    #[serde(default)]
    pub points: i32,
    /// One-line pitch shown on the profession card.
    #[serde(default)]
    pub blurb: String,
    /// Short descriptive tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ability modifier text.
    #[serde(default)]
    pub ability_mods: String,
    /// Signature talent.
    #[serde(default)]
    pub talent: String,
    /// Skills granted by the profession.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Selectable for Profession {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn point_cost(&self) -> i32 {
        self.points
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn ability_mods(&self) -> &str {
        &self.ability_mods
    }
}

/// An advantage or drawback.
///
/// `value` is the narrative strength of the trait: positive for an
/// advantage, negative for a drawback. The budget is charged the negation,
/// so advantages spend points and drawbacks grant them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    /// Unique identifier.
    pub id: TraitId,
    /// Display name.
    pub name: String,
    /// Narrative strength.
    pub value: i32,
    /// Description shown on the trait card.
    #[serde(default)]
    pub desc: String,
    /// Short descriptive tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ability modifier text.
    #[serde(default)]
    pub ability_mods: String,
    /// Traits this one blocks while selected. One-way as authored.
    #[serde(default)]
    pub incompatible: Vec<TraitId>,
}

impl Trait {
    /// Points charged against the budget for taking this trait.
    pub fn points(&self) -> i32 {
        -self.value
    }

    /// Returns true if this trait is an advantage (costs points).
    pub fn is_advantage(&self) -> bool {
        self.value > 0
    }

    /// Returns true if this trait lists `other` as incompatible.
    pub fn blocks(&self, other: &str) -> bool {
        self.incompatible.iter().any(|id| id == other)
    }
}

impl Selectable for Trait {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn point_cost(&self) -> i32 {
        self.points()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn ability_mods(&self) -> &str {
        &self.ability_mods
    }
}

/// A planet of origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Unique identifier.
    pub id: PlanetId,
    /// Display name.
    pub name: String,
    /// Galactic region (Core, Mid Rim, Outer Rim...).
    #[serde(default)]
    pub region: String,
    /// One-line pitch.
    #[serde(default)]
    pub blurb: String,
    /// Short descriptive tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A moral doctrine: what the character believes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctrine {
    /// Unique identifier.
    pub id: DoctrineId,
    /// Display name.
    pub name: String,
    /// One-line pitch.
    #[serde(default)]
    pub blurb: String,
}

/// A method: how the character gets things done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    /// Unique identifier.
    pub id: MethodId,
    /// Display name.
    pub name: String,
    /// One-line pitch.
    #[serde(default)]
    pub blurb: String,
}

/// A moral line the character refuses to cross.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedLine {
    /// Unique identifier.
    pub id: RedLineId,
    /// Display name.
    pub name: String,
    /// One-line pitch.
    #[serde(default)]
    pub blurb: String,
}

/// Broad grouping of factions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactionCategory {
    /// Galactic superpowers.
    Superpower,
    /// Intelligence services.
    SpyAgency,
    /// Powers that stay out of the war.
    NeutralBloc,
    /// Criminal organizations.
    Underworld,
    /// Houses fighting the proxy war on Alderaan.
    ProxyTheater,
    /// Force-using orders.
    ForceOrder,
    /// Secret societies.
    SecretSociety,
}

impl fmt::Display for FactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Superpower => write!(f, "superpower"),
            Self::SpyAgency => write!(f, "spy agency"),
            Self::NeutralBloc => write!(f, "neutral bloc"),
            Self::Underworld => write!(f, "underworld"),
            Self::ProxyTheater => write!(f, "proxy theater"),
            Self::ForceOrder => write!(f, "force order"),
            Self::SecretSociety => write!(f, "secret society"),
        }
    }
}

/// A faction the character can build standing with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faction {
    /// Unique identifier.
    pub id: FactionId,
    /// Display name.
    pub name: String,
    /// Grouping used for display.
    pub category: FactionCategory,
}

/// One entry of a card's effect table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEffect {
    /// Faction whose standing changes.
    pub faction: FactionId,
    /// Signed standing change.
    pub delta: i32,
}

impl CardEffect {
    /// Create an effect entry.
    pub fn new(faction: impl Into<FactionId>, delta: i32) -> Self {
        Self {
            faction: faction.into(),
            delta,
        }
    }
}

impl fmt::Display for CardEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.delta >= 0 {
            write!(f, "{} +{}", self.faction, self.delta)
        } else {
            write!(f, "{} {}", self.faction, self.delta)
        }
    }
}

/// An allegiance card drafted into the character's past.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllegianceCard {
    /// Unique identifier.
    pub id: CardId,
    /// Display name.
    pub name: String,
    /// Flavor text.
    #[serde(default)]
    pub blurb: String,
    /// Standing changes, applied in order.
    #[serde(default)]
    pub effects: Vec<CardEffect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analytique() -> Trait {
        Trait {
            id: "analytique".to_string(),
            name: "Esprit analytique".to_string(),
            value: 3,
            desc: String::new(),
            tags: vec![],
            ability_mods: String::new(),
            incompatible: vec!["impulsif".to_string()],
        }
    }

    #[test]
    fn trait_points_are_inverted() {
        let t = analytique();
        assert_eq!(t.points(), -3);
        assert_eq!(t.point_cost(), -3);
        assert!(t.is_advantage());
    }

    #[test]
    fn drawback_grants_points() {
        let t = Trait {
            value: -6,
            ..analytique()
        };
        assert_eq!(t.points(), 6);
        assert!(!t.is_advantage());
    }

    #[test]
    fn blocks_is_directed() {
        let t = analytique();
        assert!(t.blocks("impulsif"));
        assert!(!t.blocks("linguiste"));
    }

    #[test]
    fn card_effect_display() {
        assert_eq!(CardEffect::new("sith", 2).to_string(), "sith +2");
        assert_eq!(CardEffect::new("jedi", -1).to_string(), "jedi -1");
    }

    #[test]
    fn species_deserializes_with_defaults() {
        let s: Species = serde_json::from_str(r#"{"id": "humain", "name": "Humain"}"#).unwrap();
        assert_eq!(s.points, 0);
        assert!(s.skills.is_empty());
        assert_eq!(s.ability_mods, "");
    }

    #[test]
    fn faction_category_serde() {
        let f: Faction =
            serde_json::from_str(r#"{"id": "sis", "name": "SIS", "category": "spy_agency"}"#)
                .unwrap();
        assert_eq!(f.category, FactionCategory::SpyAgency);
        assert_eq!(f.category.to_string(), "spy agency");
    }
}
