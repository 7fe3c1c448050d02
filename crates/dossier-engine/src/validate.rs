//! Consistency checks over a content catalog.
//!
//! Checks that ids are unique, that cross-references (incompatibilities,
//! card effects) resolve, and flags authoring smells such as one-way
//! incompatibilities or modifier text that parses to nothing. One-way
//! incompatibilities are reported but never fixed.

use std::collections::HashSet;

use dossier_catalog::{Catalog, Selectable};

use crate::ability::{NO_MODIFIER_SENTINELS, has_ability_pairs};
use crate::compat::one_way_incompatibilities;

/// A warning or error found during catalog validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The record the issue was found on, e.g. `trait 'impulsif'`.
    pub subject: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

/// Validate a catalog. Returns every issue found, errors and warnings mixed
/// in table order.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_unique("species", catalog.species.iter().map(|r| r.id.as_str()), &mut issues);
    check_unique(
        "profession",
        catalog.professions.iter().map(|r| r.id.as_str()),
        &mut issues,
    );
    check_unique("trait", catalog.traits.iter().map(|r| r.id.as_str()), &mut issues);
    check_unique("planet", catalog.planets.iter().map(|r| r.id.as_str()), &mut issues);
    check_unique(
        "doctrine",
        catalog.doctrines.iter().map(|r| r.id.as_str()),
        &mut issues,
    );
    check_unique("method", catalog.methods.iter().map(|r| r.id.as_str()), &mut issues);
    check_unique(
        "red line",
        catalog.red_lines.iter().map(|r| r.id.as_str()),
        &mut issues,
    );
    check_unique(
        "faction",
        catalog.factions.iter().map(|r| r.id.as_str()),
        &mut issues,
    );
    check_unique("card", catalog.cards.iter().map(|r| r.id.as_str()), &mut issues);

    for species in &catalog.species {
        check_modifiers("species", species, &mut issues);
    }
    for profession in &catalog.professions {
        check_modifiers("profession", profession, &mut issues);
    }
    for t in &catalog.traits {
        check_modifiers("trait", t, &mut issues);
        for other in &t.incompatible {
            if *other == t.id {
                issues.push(ValidationIssue {
                    subject: format!("trait '{}'", t.id),
                    message: "lists itself as incompatible".to_string(),
                    is_error: true,
                });
            } else if catalog.find_trait(other).is_none() {
                issues.push(ValidationIssue {
                    subject: format!("trait '{}'", t.id),
                    message: format!("incompatible with unknown trait '{other}'"),
                    is_error: true,
                });
            }
        }
    }

    for (from, to) in one_way_incompatibilities(catalog) {
        issues.push(ValidationIssue {
            subject: format!("trait '{from}'"),
            message: format!("blocks '{to}' but '{to}' does not block '{from}'"),
            is_error: false,
        });
    }

    for card in &catalog.cards {
        for effect in &card.effects {
            if catalog.find_faction(&effect.faction).is_none() {
                issues.push(ValidationIssue {
                    subject: format!("card '{}'", card.id),
                    message: format!("effect on unknown faction '{}'", effect.faction),
                    is_error: true,
                });
            }
        }
    }

    issues
}

/// Report ids that appear more than once in one table.
fn check_unique<'a>(
    table: &str,
    ids: impl Iterator<Item = &'a str>,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            issues.push(ValidationIssue {
                subject: format!("{table} '{id}'"),
                message: "duplicate id".to_string(),
                is_error: true,
            });
        }
    }
}

/// Warn about modifier text that is neither blank, a sentinel, nor
/// parseable into at least one number-key pair. A pair with a zero delta
/// counts as parsed.
fn check_modifiers(table: &str, option: &dyn Selectable, issues: &mut Vec<ValidationIssue>) {
    let text = option.ability_mods().trim();
    if text.is_empty() || NO_MODIFIER_SENTINELS.contains(&text) {
        return;
    }
    if !has_ability_pairs(text) {
        issues.push(ValidationIssue {
            subject: format!("{table} '{}'", option.id()),
            message: format!("ability modifiers \"{text}\" contribute nothing"),
            is_error: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_catalog::{AllegianceCard, CardEffect, Species, Trait};

    fn t(id: &str, incompatible: &[&str]) -> Trait {
        Trait {
            id: id.to_string(),
            name: id.to_string(),
            value: 1,
            desc: String::new(),
            tags: vec![],
            ability_mods: String::new(),
            incompatible: incompatible.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn builtin_catalog_is_clean() {
        let issues = validate_catalog(&Catalog::builtin());
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn empty_catalog_is_valid() {
        assert!(validate_catalog(&Catalog::default()).is_empty());
    }

    #[test]
    fn duplicate_ids_error_once() {
        let catalog = Catalog {
            traits: vec![t("a", &[]), t("a", &[]), t("a", &[])],
            ..Catalog::default()
        };
        let issues = validate_catalog(&catalog);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error);
        assert_eq!(issues[0].to_string(), "error: trait 'a': duplicate id");
    }

    #[test]
    fn unknown_and_self_incompatibility_errors() {
        let catalog = Catalog {
            traits: vec![t("a", &["a", "ghost"])],
            ..Catalog::default()
        };
        let issues = validate_catalog(&catalog);
        assert!(
            issues
                .iter()
                .any(|i| i.is_error && i.message.contains("lists itself"))
        );
        assert!(
            issues
                .iter()
                .any(|i| i.is_error && i.message.contains("unknown trait 'ghost'"))
        );
    }

    #[test]
    fn one_way_incompatibility_warns() {
        let catalog = Catalog {
            traits: vec![t("a", &["b"]), t("b", &[])],
            ..Catalog::default()
        };
        let issues = validate_catalog(&catalog);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
        assert_eq!(
            issues[0].to_string(),
            "warning: trait 'a': blocks 'b' but 'b' does not block 'a'"
        );
    }

    #[test]
    fn unknown_card_faction_errors() {
        let catalog = Catalog {
            cards: vec![AllegianceCard {
                id: "c".to_string(),
                name: "C".to_string(),
                blurb: String::new(),
                effects: vec![CardEffect::new("nobody", 1)],
            }],
            ..Catalog::default()
        };
        let issues = validate_catalog(&catalog);
        assert!(
            issues
                .iter()
                .any(|i| i.is_error && i.message.contains("unknown faction 'nobody'"))
        );
    }

    fn species_with_mods(ability_mods: &str) -> Species {
        Species {
            id: "x".to_string(),
            name: "X".to_string(),
            points: 0,
            blurb: String::new(),
            tags: vec![],
            ability_mods: ability_mods.to_string(),
            skills: vec![],
        }
    }

    #[test]
    fn zero_and_cancelling_modifiers_are_not_flagged() {
        for text in ["+0 FOR", "+1 INT, -1 INT", "Aucun", "  "] {
            let catalog = Catalog {
                species: vec![species_with_mods(text)],
                ..Catalog::default()
            };
            let issues = validate_catalog(&catalog);
            assert!(issues.is_empty(), "{text:?}: {issues:?}");
        }
    }

    #[test]
    fn unparseable_modifiers_warn() {
        let catalog = Catalog {
            species: vec![species_with_mods("Bonus en force")],
            ..Catalog::default()
        };
        let issues = validate_catalog(&catalog);
        assert!(
            issues
                .iter()
                .any(|i| !i.is_error && i.message.contains("contribute nothing")),
            "{issues:?}"
        );
    }
}
