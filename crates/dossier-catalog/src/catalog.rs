use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::record::{
    AllegianceCard, Doctrine, Faction, Method, Planet, Profession, RedLine, Species, Trait,
};

/// The static content tables the builder picks from.
///
/// A catalog is read once at startup and never mutated afterwards. Lookups
/// are linear scans: the tables are small and authored by hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Playable species.
    pub species: Vec<Species>,
    /// Professions.
    pub professions: Vec<Profession>,
    /// Advantages and drawbacks.
    pub traits: Vec<Trait>,
    /// Planets of origin.
    pub planets: Vec<Planet>,
    /// Moral doctrines.
    pub doctrines: Vec<Doctrine>,
    /// Methods.
    pub methods: Vec<Method>,
    /// Red lines.
    pub red_lines: Vec<RedLine>,
    /// Factions.
    pub factions: Vec<Faction>,
    /// Allegiance cards.
    pub cards: Vec<AllegianceCard>,
}

/// A borrowed record from any catalog table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogEntry<'c> {
    /// A species record.
    Species(&'c Species),
    /// A profession record.
    Profession(&'c Profession),
    /// A trait record.
    Trait(&'c Trait),
    /// A planet record.
    Planet(&'c Planet),
    /// A doctrine record.
    Doctrine(&'c Doctrine),
    /// A method record.
    Method(&'c Method),
    /// A red line record.
    RedLine(&'c RedLine),
    /// A faction record.
    Faction(&'c Faction),
    /// An allegiance card.
    Card(&'c AllegianceCard),
}

impl CatalogEntry<'_> {
    /// The table this entry lives in, as a lowercase label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Species(_) => "species",
            Self::Profession(_) => "profession",
            Self::Trait(_) => "trait",
            Self::Planet(_) => "planet",
            Self::Doctrine(_) => "doctrine",
            Self::Method(_) => "method",
            Self::RedLine(_) => "red line",
            Self::Faction(_) => "faction",
            Self::Card(_) => "card",
        }
    }

    /// Display name of the entry.
    pub fn name(&self) -> &str {
        match self {
            Self::Species(r) => &r.name,
            Self::Profession(r) => &r.name,
            Self::Trait(r) => &r.name,
            Self::Planet(r) => &r.name,
            Self::Doctrine(r) => &r.name,
            Self::Method(r) => &r.name,
            Self::RedLine(r) => &r.name,
            Self::Faction(r) => &r.name,
            Self::Card(r) => &r.name,
        }
    }
}

impl fmt::Display for CatalogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name(), self.kind())
    }
}

impl Catalog {
    /// The built-in content shipped with the builder.
    pub fn builtin() -> Self {
        crate::preset::builtin()
    }

    /// Parse a catalog from a JSON document. Missing tables are empty.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a catalog JSON file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Serialize the catalog as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Find a species by id.
    pub fn find_species(&self, id: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.id == id)
    }

    /// Find a profession by id.
    pub fn find_profession(&self, id: &str) -> Option<&Profession> {
        self.professions.iter().find(|p| p.id == id)
    }

    /// Find a trait by id.
    pub fn find_trait(&self, id: &str) -> Option<&Trait> {
        self.traits.iter().find(|t| t.id == id)
    }

    /// Find a planet by id.
    pub fn find_planet(&self, id: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    /// Find a doctrine by id.
    pub fn find_doctrine(&self, id: &str) -> Option<&Doctrine> {
        self.doctrines.iter().find(|d| d.id == id)
    }

    /// Find a method by id.
    pub fn find_method(&self, id: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.id == id)
    }

    /// Find a red line by id.
    pub fn find_red_line(&self, id: &str) -> Option<&RedLine> {
        self.red_lines.iter().find(|r| r.id == id)
    }

    /// Find a faction by id.
    pub fn find_faction(&self, id: &str) -> Option<&Faction> {
        self.factions.iter().find(|f| f.id == id)
    }

    /// Find an allegiance card by id.
    pub fn find_card(&self, id: &str) -> Option<&AllegianceCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Resolve an id against every table, in declaration order.
    pub fn find_any(&self, id: &str) -> Option<CatalogEntry<'_>> {
        self.find_species(id)
            .map(CatalogEntry::Species)
            .or_else(|| self.find_profession(id).map(CatalogEntry::Profession))
            .or_else(|| self.find_trait(id).map(CatalogEntry::Trait))
            .or_else(|| self.find_planet(id).map(CatalogEntry::Planet))
            .or_else(|| self.find_doctrine(id).map(CatalogEntry::Doctrine))
            .or_else(|| self.find_method(id).map(CatalogEntry::Method))
            .or_else(|| self.find_red_line(id).map(CatalogEntry::RedLine))
            .or_else(|| self.find_faction(id).map(CatalogEntry::Faction))
            .or_else(|| self.find_card(id).map(CatalogEntry::Card))
    }

    /// Traits whose name, description, or any tag contains `query`
    /// (case-insensitive). A blank query returns every trait.
    pub fn search_traits(&self, query: &str) -> Vec<&Trait> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self.traits.iter().collect();
        }
        self.traits
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&q)
                    || t.desc.to_lowercase().contains(&q)
                    || t.tags.iter().any(|tag| tag.to_lowercase().contains(&q))
            })
            .collect()
    }

    /// Total number of records across all tables.
    pub fn len(&self) -> usize {
        self.species.len()
            + self.professions.len()
            + self.traits.len()
            + self.planets.len()
            + self.doctrines.len()
            + self.methods.len()
            + self.red_lines.len()
            + self.factions.len()
            + self.cards.len()
    }

    /// Returns true if every table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
