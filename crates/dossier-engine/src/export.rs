//! Dossier export: a serializable snapshot of identity, selection and every
//! derived value, rendered as JSON or Markdown.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use dossier_catalog::{
    CardId, Catalog, DoctrineId, FactionId, MethodId, PlanetId, ProfessionId, RedLineId,
    SpeciesId, TraitId,
};
use serde::{Deserialize, Serialize};

use crate::ability::{Ability, AbilityModifiers, compute_ability_scores};
use crate::budget::{
    BudgetStatus, compute_total_points, resolve_skills, selected_traits_by_points, signed,
};
use crate::config::EngineConfig;
use crate::error::{DossierError, DossierResult};
use crate::selection::Selection;
use crate::standing::compute_faction_values;

/// Version tag written into every export.
pub const EXPORT_VERSION: &str = "v0.5";

/// Longest file stem produced by [`export_file_stem`].
const MAX_STEM_LEN: usize = 64;

/// The side a character claims to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Camp {
    /// The Galactic Republic.
    #[serde(rename = "République")]
    Republic,
    /// The Sith Empire.
    #[serde(rename = "Empire Sith")]
    SithEmpire,
    /// Nobody's agent.
    #[serde(rename = "Indépendant")]
    Independent,
    /// Working both sides.
    #[serde(rename = "Double agent")]
    DoubleAgent,
}

impl Camp {
    /// All camps in menu order.
    pub const ALL: [Camp; 4] = [
        Camp::Republic,
        Camp::SithEmpire,
        Camp::Independent,
        Camp::DoubleAgent,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Republic => "République",
            Self::SithEmpire => "Empire Sith",
            Self::Independent => "Indépendant",
            Self::DoubleAgent => "Double agent",
        }
    }

    /// Parse a camp name leniently: case, accents on `e`, dashes and
    /// underscores are ignored, and short forms like `empire` are accepted.
    pub fn parse(input: &str) -> Option<Self> {
        let key = input
            .trim()
            .to_lowercase()
            .replace('é', "e")
            .replace(['-', '_'], " ");
        match key.as_str() {
            "republique" | "republic" => Some(Self::Republic),
            "empire sith" | "empire" | "sith" => Some(Self::SithEmpire),
            "independant" | "independent" => Some(Self::Independent),
            "double agent" | "double" => Some(Self::DoubleAgent),
            _ => None,
        }
    }
}

impl fmt::Display for Camp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-text identity fields of a dossier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    /// Code name, also used for the export file name.
    pub codename: String,
    /// One-line character concept.
    pub concept: String,
    /// Free notes.
    pub notes: String,
    /// Declared camp, if any.
    pub camp: Option<Camp>,
}

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON.
    Json,
    /// A Markdown character sheet.
    Markdown,
}

impl ExportFormat {
    /// Parse a format name (`json`, `markdown` or `md`).
    pub fn parse(name: &str) -> DossierResult<Self> {
        match name {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(DossierError::UnsupportedFormat(other.to_string())),
        }
    }

    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// A selected trait as written into the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitLine {
    /// Trait id.
    pub id: TraitId,
    /// Display name.
    pub name: String,
    /// Point cost (inverted trait value).
    pub points: i32,
}

/// Human-readable values resolved from the selection ids.
///
/// Ids that do not resolve in the catalog are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    /// Species name.
    pub species: Option<String>,
    /// Profession name.
    pub profession: Option<String>,
    /// Planet of origin name.
    pub planet: Option<String>,
    /// Doctrine name.
    pub doctrine: Option<String>,
    /// Method name.
    pub method: Option<String>,
    /// Red line names.
    pub red_lines: Vec<String>,
    /// Skills from species and profession.
    pub skills: Vec<String>,
    /// Selected traits, highest point cost first.
    pub traits: Vec<TraitLine>,
    /// Faction standings after the draft.
    pub factions: BTreeMap<FactionId, i32>,
}

/// A complete, self-describing dossier snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DossierExport {
    /// Export format version.
    pub version: String,
    /// When the snapshot was taken.
    pub exported_at: DateTime<Utc>,
    /// Identity fields, flattened into the top level.
    #[serde(flatten)]
    pub identity: Identity,
    /// Chosen species id.
    pub species_id: Option<SpeciesId>,
    /// Chosen profession id.
    pub profession_id: Option<ProfessionId>,
    /// Selected trait ids.
    pub selected_traits: Vec<TraitId>,
    /// Chosen planet id.
    pub planet_id: Option<PlanetId>,
    /// Chosen doctrine id.
    pub doctrine_id: Option<DoctrineId>,
    /// Chosen method id.
    pub method_id: Option<MethodId>,
    /// Red line ids.
    pub red_lines: Vec<RedLineId>,
    /// Drafted card ids, in draft order.
    pub cards: Vec<CardId>,
    /// Remaining build points.
    pub points_remaining: i32,
    /// Final ability scores.
    pub stats: AbilityModifiers,
    /// Names and derived lists.
    pub resolved: Resolved,
}

impl DossierExport {
    /// Snapshot the dossier now.
    pub fn build(
        catalog: &Catalog,
        config: &EngineConfig,
        selection: &Selection,
        identity: &Identity,
    ) -> Self {
        Self::build_at(catalog, config, selection, identity, Utc::now())
    }

    /// Snapshot the dossier with an explicit timestamp.
    pub fn build_at(
        catalog: &Catalog,
        config: &EngineConfig,
        selection: &Selection,
        identity: &Identity,
        exported_at: DateTime<Utc>,
    ) -> Self {
        let resolved = Resolved {
            species: selection
                .species()
                .and_then(|id| catalog.find_species(id))
                .map(|s| s.name.clone()),
            profession: selection
                .profession()
                .and_then(|id| catalog.find_profession(id))
                .map(|p| p.name.clone()),
            planet: selection
                .planet()
                .and_then(|id| catalog.find_planet(id))
                .map(|p| p.name.clone()),
            doctrine: selection
                .doctrine()
                .and_then(|id| catalog.find_doctrine(id))
                .map(|d| d.name.clone()),
            method: selection
                .method()
                .and_then(|id| catalog.find_method(id))
                .map(|m| m.name.clone()),
            red_lines: selection
                .red_lines()
                .iter()
                .filter_map(|id| catalog.find_red_line(id))
                .map(|r| r.name.clone())
                .collect(),
            skills: resolve_skills(catalog, selection),
            traits: selected_traits_by_points(catalog, selection)
                .into_iter()
                .map(|t| TraitLine {
                    id: t.id.clone(),
                    name: t.name.clone(),
                    points: t.points(),
                })
                .collect(),
            factions: compute_faction_values(catalog, config, selection.cards()),
        };

        let export = Self {
            version: EXPORT_VERSION.to_string(),
            exported_at,
            identity: identity.clone(),
            species_id: selection.species().map(str::to_string),
            profession_id: selection.profession().map(str::to_string),
            selected_traits: selection.traits().iter().cloned().collect(),
            planet_id: selection.planet().map(str::to_string),
            doctrine_id: selection.doctrine().map(str::to_string),
            method_id: selection.method().map(str::to_string),
            red_lines: selection.red_lines().iter().cloned().collect(),
            cards: selection.cards().to_vec(),
            points_remaining: compute_total_points(catalog, config, selection),
            stats: compute_ability_scores(catalog, config, selection).totals(),
            resolved,
        };
        tracing::debug!(
            codename = %export.identity.codename,
            points = export.points_remaining,
            traits = export.selected_traits.len(),
            "dossier snapshot built"
        );
        export
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> DossierResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A Markdown character sheet.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let title = if self.identity.codename.trim().is_empty() {
            "Dossier sans nom"
        } else {
            self.identity.codename.trim()
        };
        out.push_str(&format!("# {title}\n\n"));
        if !self.identity.concept.trim().is_empty() {
            out.push_str(&format!("*{}*\n\n", self.identity.concept.trim()));
        }

        let or_dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "—".to_string());
        let camp = self
            .identity
            .camp
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| "—".to_string());
        let red_lines = if self.resolved.red_lines.is_empty() {
            "—".to_string()
        } else {
            self.resolved.red_lines.join(", ")
        };
        out.push_str(&format!("- **Camp:** {camp}\n"));
        out.push_str(&format!(
            "- **Points restants:** {} ({})\n",
            self.points_remaining,
            BudgetStatus::of(self.points_remaining)
        ));
        out.push_str(&format!("- **Espèce:** {}\n", or_dash(&self.resolved.species)));
        out.push_str(&format!(
            "- **Profession:** {}\n",
            or_dash(&self.resolved.profession)
        ));
        out.push_str(&format!(
            "- **Planète d'origine:** {}\n",
            or_dash(&self.resolved.planet)
        ));
        out.push_str(&format!("- **Doctrine:** {}\n", or_dash(&self.resolved.doctrine)));
        out.push_str(&format!("- **Méthode:** {}\n", or_dash(&self.resolved.method)));
        out.push_str(&format!("- **Lignes rouges:** {red_lines}\n\n"));

        out.push_str("## Caractéristiques\n\n");
        let header: Vec<&str> = Ability::ALL.iter().map(|a| a.key()).collect();
        let values: Vec<String> = Ability::ALL
            .iter()
            .map(|a| self.stats.get(*a).to_string())
            .collect();
        out.push_str(&format!("| {} |\n", header.join(" | ")));
        out.push_str(&format!("|{}\n", "-----|".repeat(Ability::ALL.len())));
        out.push_str(&format!("| {} |\n\n", values.join(" | ")));

        if !self.resolved.skills.is_empty() {
            out.push_str("## Compétences\n\n");
            out.push_str(&format!("{}\n\n", self.resolved.skills.join(", ")));
        }

        if !self.resolved.traits.is_empty() {
            out.push_str("## Traits\n\n");
            for t in &self.resolved.traits {
                out.push_str(&format!("- {} ({})\n", t.name, signed(t.points)));
            }
            out.push('\n');
        }

        let moved: Vec<(&FactionId, &i32)> = self
            .resolved
            .factions
            .iter()
            .filter(|(_, v)| **v != 0)
            .collect();
        if !moved.is_empty() {
            out.push_str("## Factions\n\n");
            for (id, value) in moved {
                out.push_str(&format!("- {id}: {}\n", signed(*value)));
            }
            out.push('\n');
        }

        if !self.identity.notes.trim().is_empty() {
            out.push_str("## Notes\n\n");
            out.push_str(&format!("{}\n\n", self.identity.notes.trim()));
        }

        out.push_str(&format!(
            "---\n\n_{} · exporté le {}_\n",
            self.version,
            self.exported_at.format("%Y-%m-%d %H:%M UTC")
        ));
        out
    }

    /// Render in the requested format.
    pub fn render(&self, format: ExportFormat) -> DossierResult<String> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Markdown => Ok(self.to_markdown()),
        }
    }
}

/// A file-system safe stem derived from a code name.
///
/// Lowercases, replaces each run of characters outside `[a-z0-9-_]` with a
/// single `_`, and keeps at most 64 characters. Blank input gives `dossier`.
pub fn export_file_stem(codename: &str) -> String {
    let mut stem = String::new();
    let mut in_run = false;
    for c in codename.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' {
            stem.push(c);
            in_run = false;
        } else if !in_run {
            stem.push('_');
            in_run = true;
        }
    }
    let stem: String = stem.chars().take(MAX_STEM_LEN).collect();
    if stem.is_empty() {
        "dossier".to_string()
    } else {
        stem
    }
}
