//! Budget engine for the dossier character builder.
//!
//! Holds the player's [`Selection`] and derives everything else from it on
//! demand: the remaining point budget, the traits blocked by
//! incompatibility, ability scores parsed from free-text modifiers, and
//! faction standings accumulated from drafted allegiance cards. Every query
//! is a pure function of `(&Catalog, &EngineConfig, &Selection)`.

pub mod ability;
pub mod budget;
pub mod compat;
pub mod config;
pub mod error;
pub mod export;
pub mod selection;
pub mod sheet;
pub mod standing;
pub mod validate;

pub use ability::{
    Ability, AbilityModifiers, AbilityScore, AbilityScores, compute_ability_scores,
    parse_ability_mods,
};
pub use budget::{
    BudgetStatus, compute_total_points, resolve_skills, selected_traits_by_points,
};
pub use compat::compute_disabled_traits;
pub use config::{
    DEFAULT_ABILITY_BASE, DEFAULT_BASE_POINTS, DEFAULT_MAX_FACTION_VALUE, EngineConfig,
};
pub use error::{DossierError, DossierResult};
pub use export::{Camp, DossierExport, ExportFormat, Identity, export_file_stem};
pub use selection::{Selection, TraitToggle};
pub use sheet::CharacterSheet;
pub use standing::{Standing, compute_faction_values};
pub use validate::{ValidationIssue, validate_catalog};
