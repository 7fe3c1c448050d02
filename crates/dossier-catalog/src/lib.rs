//! Content catalog for the Dossier character builder.
//!
//! Holds the static, hand-authored reference data the builder picks from:
//! species, professions, traits, planets, moral stances, factions, and
//! allegiance cards. A [`Catalog`] can be built from the presets in
//! [`preset`] or deserialized from JSON.

/// The catalog container and its lookups.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Built-in catalog content.
pub mod preset;
/// Record types for every catalog table.
pub mod record;

/// Re-export the catalog container.
pub use catalog::{Catalog, CatalogEntry};
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
/// Re-export record types.
pub use record::{
    AllegianceCard, CardEffect, CardId, Doctrine, DoctrineId, Faction, FactionCategory,
    FactionId, Method, MethodId, Planet, PlanetId, Profession, ProfessionId, RedLine, RedLineId,
    Selectable, Species, SpeciesId, Trait, TraitId,
};
