//! Ability scores and the free-text modifier grammar.
//!
//! Modifiers are authored as text like `"+2 FOR, -2 DEX"`: an optionally
//! signed integer, optional whitespace, then one of the six ability keys
//! (case-insensitive). Anything else in the string is skipped, so malformed
//! text contributes nothing.

mod lexer;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::AddAssign;

use dossier_catalog::{Catalog, Selectable};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::selection::Selection;

use lexer::ModToken;

/// Modifier strings that explicitly mean "no modifier".
pub const NO_MODIFIER_SENTINELS: [&str; 2] = ["Aucun", "Variable selon modèle"];

/// The six ability keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Force (strength).
    #[serde(rename = "FOR")]
    For,
    /// Dextérité.
    #[serde(rename = "DEX")]
    Dex,
    /// Constitution.
    #[serde(rename = "CON")]
    Con,
    /// Intelligence.
    #[serde(rename = "INT")]
    Int,
    /// Sagesse (wisdom).
    #[serde(rename = "SAG")]
    Sag,
    /// Charisme.
    #[serde(rename = "CHA")]
    Cha,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Ability::For,
        Ability::Dex,
        Ability::Con,
        Ability::Int,
        Ability::Sag,
        Ability::Cha,
    ];

    /// Three-letter key used in modifier text.
    pub fn key(self) -> &'static str {
        match self {
            Self::For => "FOR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Sag => "SAG",
            Self::Cha => "CHA",
        }
    }

    /// Full display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::For => "Force",
            Self::Dex => "Dextérité",
            Self::Con => "Constitution",
            Self::Int => "Intelligence",
            Self::Sag => "Sagesse",
            Self::Cha => "Charisme",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A signed delta for every ability. Every key is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityModifiers(BTreeMap<Ability, i32>);

impl Default for AbilityModifiers {
    fn default() -> Self {
        Self(Ability::ALL.iter().map(|a| (*a, 0)).collect())
    }
}

impl AbilityModifiers {
    /// The delta for one ability.
    pub fn get(&self, ability: Ability) -> i32 {
        self.0.get(&ability).copied().unwrap_or(0)
    }

    /// Overwrite the delta for one ability.
    pub fn set(&mut self, ability: Ability, value: i32) {
        self.0.insert(ability, value);
    }

    /// Returns true if every delta is zero.
    pub fn is_zero(&self) -> bool {
        self.0.values().all(|v| *v == 0)
    }

    /// Iterate `(ability, delta)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        self.0.iter().map(|(a, v)| (*a, *v))
    }
}

impl AddAssign<&AbilityModifiers> for AbilityModifiers {
    fn add_assign(&mut self, rhs: &AbilityModifiers) {
        for (ability, delta) in rhs.iter() {
            let slot = self.0.entry(ability).or_insert(0);
            *slot = slot.saturating_add(delta);
        }
    }
}

impl fmt::Display for AbilityModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .filter(|(_, v)| *v != 0)
            .map(|(a, v)| format!("{v:+} {a}"))
            .collect();
        if parts.is_empty() {
            write!(f, "Aucun")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

/// Parse a modifier string into per-ability deltas.
///
/// Blank text and the [`NO_MODIFIER_SENTINELS`] yield all zeros. A number
/// directly followed by a key sets that key; if a key appears twice the
/// later value wins.
pub fn parse_ability_mods(text: &str) -> AbilityModifiers {
    let mut mods = AbilityModifiers::default();
    for (ability, n) in ability_pairs(text) {
        mods.set(ability, n);
    }
    mods
}

/// Whether the text holds at least one number-key pair, zero deltas
/// included.
pub(crate) fn has_ability_pairs(text: &str) -> bool {
    !ability_pairs(text).is_empty()
}

/// Every number directly followed by a key, in source order.
fn ability_pairs(text: &str) -> Vec<(Ability, i32)> {
    let trimmed = text.trim();
    if trimmed.is_empty() || NO_MODIFIER_SENTINELS.contains(&trimmed) {
        return Vec::new();
    }

    let mut pairs = Vec::new();
    let mut pending: Option<i32> = None;
    for token in lexer::lex(trimmed) {
        match token {
            Some(ModToken::Number(n)) => pending = Some(n),
            Some(key) => {
                if let (Some(n), Some(ability)) = (pending.take(), key.ability()) {
                    pairs.push((ability, n));
                }
            }
            None => pending = None,
        }
    }
    pairs
}

/// One line of the ability block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    /// Base score before modifiers.
    pub base: i32,
    /// Sum of all applicable modifiers.
    pub modifier: i32,
    /// `base + modifier`, unclamped.
    pub total: i32,
}

/// Derived scores for all six abilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityScores(BTreeMap<Ability, AbilityScore>);

impl AbilityScores {
    /// Build scores from a uniform base and accumulated modifiers.
    pub fn from_modifiers(base: i32, modifiers: &AbilityModifiers) -> Self {
        Self(
            modifiers
                .iter()
                .map(|(ability, modifier)| {
                    let score = AbilityScore {
                        base,
                        modifier,
                        total: base.saturating_add(modifier),
                    };
                    (ability, score)
                })
                .collect(),
        )
    }

    /// The score line for one ability.
    pub fn get(&self, ability: Ability) -> AbilityScore {
        self.0.get(&ability).copied().unwrap_or(AbilityScore {
            base: 0,
            modifier: 0,
            total: 0,
        })
    }

    /// Iterate score lines in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, AbilityScore)> + '_ {
        self.0.iter().map(|(a, s)| (*a, *s))
    }

    /// Final totals as a plain modifier map.
    pub fn totals(&self) -> AbilityModifiers {
        let mut totals = AbilityModifiers::default();
        for (ability, score) in self.iter() {
            totals.set(ability, score.total);
        }
        totals
    }
}

/// Compute the ability block for a selection.
///
/// Sums the parsed modifiers of the chosen species, the chosen profession,
/// and every selected trait on top of `config.ability_base`.
pub fn compute_ability_scores(
    catalog: &Catalog,
    config: &EngineConfig,
    selection: &Selection,
) -> AbilityScores {
    let mut modifiers = AbilityModifiers::default();
    for option in selection.options(catalog) {
        modifiers += &parse_ability_mods(option.ability_mods());
    }
    tracing::trace!(%modifiers, "ability modifiers accumulated");
    AbilityScores::from_modifiers(config.ability_base, &modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mods(pairs: &[(Ability, i32)]) -> AbilityModifiers {
        let mut m = AbilityModifiers::default();
        for (a, v) in pairs {
            m.set(*a, *v);
        }
        m
    }

    #[test]
    fn parse_reference_string() {
        let parsed = parse_ability_mods("+2 FOR, -2 DEX");
        assert_eq!(parsed, mods(&[(Ability::For, 2), (Ability::Dex, -2)]));
        assert_eq!(parsed.get(Ability::Con), 0);
        assert_eq!(parsed.get(Ability::Cha), 0);
    }

    #[test]
    fn parse_sentinels_yield_zero() {
        assert!(parse_ability_mods("Aucun").is_zero());
        assert!(parse_ability_mods("Variable selon modèle").is_zero());
        assert!(parse_ability_mods("").is_zero());
        assert!(parse_ability_mods("   ").is_zero());
    }

    #[test]
    fn parse_garbage_yields_zero() {
        assert!(parse_ability_mods("beaucoup de force").is_zero());
        assert!(parse_ability_mods("FOR +2").is_zero());
        assert!(parse_ability_mods("+2, FOR").is_zero());
        assert!(parse_ability_mods("+2 xFOR").is_zero());
    }

    #[test]
    fn parse_unsigned_and_lowercase() {
        let parsed = parse_ability_mods("1 int 3 cha");
        assert_eq!(parsed, mods(&[(Ability::Int, 1), (Ability::Cha, 3)]));
    }

    #[test]
    fn parse_skips_bad_tokens_between_pairs() {
        let parsed = parse_ability_mods("+2 CON; ??? -1 SAG");
        assert_eq!(parsed, mods(&[(Ability::Con, 2), (Ability::Sag, -1)]));
    }

    #[test]
    fn parse_accepts_unicode_whitespace() {
        // no-break, narrow no-break, form feed, vertical tab
        for text in ["+2\u{a0}FOR", "+2\u{202f}FOR", "+2\u{c}FOR", "+2\u{b}FOR"] {
            assert_eq!(parse_ability_mods(text), mods(&[(Ability::For, 2)]), "{text:?}");
        }
        assert_eq!(
            parse_ability_mods("+2\u{a0}CHA,\u{a0}-2\u{a0}SAG"),
            mods(&[(Ability::Cha, 2), (Ability::Sag, -2)])
        );
    }

    #[test]
    fn zero_delta_still_counts_as_a_pair() {
        assert!(has_ability_pairs("+0 FOR"));
        assert!(parse_ability_mods("+0 FOR").is_zero());
        assert!(has_ability_pairs("+1 INT, -1 INT"));
        assert!(!has_ability_pairs("Bonus en force"));
        assert!(!has_ability_pairs("Aucun"));
        assert!(!has_ability_pairs(""));
    }

    #[test]
    fn parse_repeated_key_last_wins() {
        let parsed = parse_ability_mods("+2 FOR, +1 FOR");
        assert_eq!(parsed.get(Ability::For), 1);
    }

    #[test]
    fn add_assign_sums_per_key() {
        let mut total = parse_ability_mods("+2 FOR, -1 DEX");
        total += &parse_ability_mods("+1 FOR, +3 CHA");
        assert_eq!(
            total,
            mods(&[(Ability::For, 3), (Ability::Dex, -1), (Ability::Cha, 3)])
        );
    }

    #[test]
    fn display_lists_non_zero_deltas() {
        assert_eq!(
            parse_ability_mods("-2 dex, +2 for").to_string(),
            "+2 FOR, -2 DEX"
        );
        assert_eq!(AbilityModifiers::default().to_string(), "Aucun");
    }

    #[test]
    fn modifiers_serialize_with_keys() {
        let json = serde_json::to_string(&parse_ability_mods("+2 SAG")).unwrap();
        assert_eq!(
            json,
            r#"{"FOR":0,"DEX":0,"CON":0,"INT":0,"SAG":2,"CHA":0}"#
        );
    }

    #[test]
    fn scores_from_modifiers() {
        let scores = AbilityScores::from_modifiers(10, &parse_ability_mods("+2 FOR, -3 CHA"));
        assert_eq!(
            scores.get(Ability::For),
            AbilityScore {
                base: 10,
                modifier: 2,
                total: 12
            }
        );
        assert_eq!(scores.get(Ability::Cha).total, 7);
        assert_eq!(scores.get(Ability::Int).total, 10);
        assert_eq!(scores.totals().get(Ability::For), 12);
    }

    #[test]
    fn ability_labels() {
        assert_eq!(Ability::Sag.key(), "SAG");
        assert_eq!(Ability::Sag.label(), "Sagesse");
        assert_eq!(Ability::ALL.len(), 6);
    }
}
