//! Built-in content for the Dossier character builder.
//!
//! These produce the same [`Catalog`] that the equivalent JSON file would,
//! but without requiring one on disk.
//!
//! The reference records are the species `humain`, `twi`, `zabrak` and
//! `droid`, the six professions, and the ten traits listed in
//! [`REFERENCE_TRAITS`]: ids, names, costs, descriptions, skills and
//! incompatibilities as first published. Everything else is additional content written for this crate,
//! including every ability modifier string, the extra species and traits,
//! the planets, doctrines, methods, red lines, factions and the allegiance
//! deck. Additional traits never introduce one-way incompatibilities.

use crate::catalog::Catalog;
use crate::record::{
    AllegianceCard, CardEffect, Doctrine, Faction, FactionCategory, Method, Planet, Profession,
    RedLine, Species, Trait,
};

/// Trait ids of the reference table. Their incompatibilities pair up.
pub const REFERENCE_TRAITS: [&str; 10] = [
    "analytique",
    "linguiste",
    "reseau",
    "pilotage",
    "as_du_tir",
    "impulsif",
    "surveillance",
    "trauma",
    "phobie_espace",
    "aveugle",
];

/// The full built-in catalog.
pub fn builtin() -> Catalog {
    Catalog {
        species: species(),
        professions: professions(),
        traits: traits(),
        planets: planets(),
        doctrines: doctrines(),
        methods: methods(),
        red_lines: red_lines(),
        factions: factions(),
        cards: cards(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in species.
pub fn species() -> Vec<Species> {
    let make = |id: &str,
                name: &str,
                points: i32,
                blurb: &str,
                tags: &[&str],
                ability_mods: &str,
                skills: &[&str]| Species {
        id: id.to_string(),
        name: name.to_string(),
        points,
        blurb: blurb.to_string(),
        tags: strings(tags),
        ability_mods: ability_mods.to_string(),
        skills: strings(skills),
    };

    vec![
        make(
            "humain",
            "Humain",
            0,
            "Adaptable. Tu t'intègres partout, et tu survis dans les zones grises.",
            &["polyvalent"],
            "Aucun",
            &["Persuasion"],
        ),
        make(
            "twi",
            "Twi'lek",
            0,
            "Expressif, social, résilient. Tu lis les gens avant qu'ils parlent.",
            &["social"],
            "+2 CHA, -2 SAG",
            &["Persuasion", "Perception"],
        ),
        make(
            "zabrak",
            "Zabrak",
            0,
            "Tenace. Tu encaisses, tu avances. Les compromis, c'est pour les autres.",
            &["endurant"],
            "+2 CON, -2 SAG",
            &["Endurance"],
        ),
        make(
            "droid",
            "Droïde",
            4,
            "Efficace. Tu es une fonction… avec une volonté.",
            &["tech"],
            "Variable selon modèle",
            &["Informatique", "Mécanique"],
        ),
        make(
            "chiss",
            "Chiss",
            -2,
            "Froid, méthodique. Chaque conversation est une partie d'échecs.",
            &["tacticien"],
            "+2 INT, -2 CHA",
            &["Tactique", "Perception"],
        ),
        make(
            "mirialan",
            "Mirialan",
            0,
            "Discipline du corps et de l'esprit, tatouée sur la peau.",
            &["discipliné"],
            "+2 DEX, -2 CHA",
            &["Acrobatie"],
        ),
        make(
            "rattataki",
            "Rattataki",
            2,
            "Né dans les arènes. Tu sais exactement ce que vaut une vie.",
            &["survivant"],
            "+2 CON, -2 INT",
            &["Endurance", "Intimidation"],
        ),
        make(
            "togruta",
            "Togruta",
            0,
            "Tu sens la pièce avant d'y entrer. Le groupe avant l'individu.",
            &["perceptif"],
            "+2 SAG, -2 CON",
            &["Perception"],
        ),
        make(
            "cathar",
            "Cathar",
            0,
            "Instinct de chasse, loyauté de meute.",
            &["instinct"],
            "+2 DEX, -2 INT",
            &["Athlétisme", "Perception"],
        ),
    ]
}

/// Built-in professions.
pub fn professions() -> Vec<Profession> {
    let make = |id: &str,
                name: &str,
                points: i32,
                blurb: &str,
                tags: &[&str],
                ability_mods: &str,
                talent: &str,
                skills: &[&str]| Profession {
        id: id.to_string(),
        name: name.to_string(),
        points,
        blurb: blurb.to_string(),
        tags: strings(tags),
        ability_mods: ability_mods.to_string(),
        talent: talent.to_string(),
        skills: strings(skills),
    };

    vec![
        make(
            "intel",
            "Agent de renseignement",
            -6,
            "Tu entres et tu sors sans laisser de trace. Tu sais qui ment, et pourquoi.",
            &["infiltration", "réseau"],
            "+2 DEX",
            "Couverture",
            &["Discrétion", "Tromperie", "Renseignement", "Perception"],
        ),
        make(
            "diplo",
            "Diplomate subalterne",
            -4,
            "Tu manœuvres entre egos, lois et menaces voilées.",
            &["négociation", "protocole"],
            "+2 CHA",
            "Protocole",
            &[
                "Persuasion",
                "Bureaucratie",
                "Connaissance (social)",
                "Perception",
            ],
        ),
        make(
            "arch",
            "Archiviste / analyste",
            -2,
            "Tu transformes un détail oublié en levier stratégique.",
            &["archives", "déduction"],
            "+2 INT",
            "Accès archives",
            &[
                "Recherche",
                "Linguistique",
                "Connaissance (galactique)",
                "Connaissance (bureaucratie)",
            ],
        ),
        make(
            "tech",
            "Technicien de flotte",
            -4,
            "Tu maintiens des machines en vie quand tout brûle.",
            &["réparation", "terrain"],
            "+1 INT, +1 CON",
            "Ingénieur terrain",
            &["Mécanique", "Informatique", "Systèmes", "Endurance"],
        ),
        make(
            "pilot",
            "Pilote d'escorte",
            -6,
            "Tu fais passer un chasseur entre deux tirs comme si c'était une routine.",
            &["poursuite", "spatial"],
            "+2 DEX",
            "Instinct",
            &["Pilotage", "Perception", "Tactique", "Endurance"],
        ),
        make(
            "sabo",
            "Saboteur civil",
            -5,
            "Une porte est un problème. Un problème a une solution.",
            &["sabotage", "furtif"],
            "+1 DEX, +1 INT",
            "Charge improvisée",
            &["Discrétion", "Mécanique", "Informatique", "Tromperie"],
        ),
    ]
}

/// Built-in traits. Advantages first, then drawbacks.
pub fn traits() -> Vec<Trait> {
    let make = |id: &str,
                name: &str,
                value: i32,
                desc: &str,
                tags: &[&str],
                ability_mods: &str,
                incompatible: &[&str]| Trait {
        id: id.to_string(),
        name: name.to_string(),
        value,
        desc: desc.to_string(),
        tags: strings(tags),
        ability_mods: ability_mods.to_string(),
        incompatible: strings(incompatible),
    };

    vec![
        make(
            "analytique",
            "Esprit analytique",
            3,
            "Recoupements rapides, logique, déductions.",
            &["enquête"],
            "+1 INT",
            &["impulsif"],
        ),
        make(
            "linguiste",
            "Linguiste galactique",
            6,
            "Déchiffre des écritures rares, accélère une traduction.",
            &["langues"],
            "+1 INT",
            &[],
        ),
        make(
            "reseau",
            "Réseau discret",
            8,
            "Trois contacts fiables : info, logistique, planque.",
            &["intrigue"],
            "+1 CHA",
            &["surveillance"],
        ),
        make(
            "pilotage",
            "As du pilotage",
            10,
            "Poursuites spatiales, manœuvres risquées, évasion.",
            &["spatial"],
            "+1 DEX",
            &["phobie_espace"],
        ),
        make(
            "as_du_tir",
            "As du tir",
            8,
            "Tirs utiles, précision et sang-froid sous pression.",
            &["combat"],
            "+1 DEX",
            &["aveugle"],
        ),
        make(
            "sang_froid",
            "Sang-froid",
            4,
            "Tu gardes la tête froide quand tout s'embrase.",
            &["caractère"],
            "+1 SAG",
            &[],
        ),
        make(
            "robuste",
            "Constitution robuste",
            5,
            "Tu encaisses blessures, maladies et nuits blanches.",
            &["physique"],
            "+2 CON",
            &[],
        ),
        make(
            "impulsif",
            "Impulsif",
            -4,
            "Décisions trop rapides : tu t'exposes quand il faut temporiser.",
            &["caractère"],
            "-1 SAG",
            &["analytique"],
        ),
        make(
            "surveillance",
            "Sous surveillance",
            -6,
            "Contrôles, audits, informateurs : tu laisses des traces.",
            &["intrigue"],
            "",
            &["reseau"],
        ),
        make(
            "trauma",
            "Traumatisé par la guerre",
            -6,
            "Sous chaos : panique, gel ou colère (selon la scène).",
            &["psy"],
            "-1 SAG",
            &[],
        ),
        make(
            "phobie_espace",
            "Phobie de l'espace",
            -6,
            "Vide, EVA, dérive : tu perds tes moyens.",
            &["spatial"],
            "",
            &["pilotage"],
        ),
        make(
            "aveugle",
            "Aveugle",
            -8,
            "Handicap majeur : assistance techno ou allié requis.",
            &["handicap"],
            "-2 DEX",
            &["as_du_tir"],
        ),
        make(
            "solitaire",
            "Loup solitaire",
            -3,
            "Tu ne fais confiance à personne, et ça se voit.",
            &["intrigue"],
            "-1 CHA",
            &[],
        ),
        make(
            "dette",
            "Dette envers les Hutts",
            -5,
            "Quelqu'un à Nar Shaddaa attend son argent.",
            &["pègre"],
            "",
            &[],
        ),
    ]
}

/// Built-in planets of origin.
pub fn planets() -> Vec<Planet> {
    let make = |id: &str, name: &str, region: &str, blurb: &str, tags: &[&str]| Planet {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        blurb: blurb.to_string(),
        tags: strings(tags),
    };

    vec![
        make(
            "coruscant",
            "Coruscant",
            "Noyau",
            "Capitale de la République, reconstruite sur ses ruines.",
            &["urbain", "république"],
        ),
        make(
            "dromund_kaas",
            "Dromund Kaas",
            "Espace Sith",
            "Capitale impériale sous un orage éternel.",
            &["jungle", "empire"],
        ),
        make(
            "alderaan",
            "Alderaan",
            "Noyau",
            "Noblesse, montagnes, et une guerre civile de salon.",
            &["noblesse"],
        ),
        make(
            "tatooine",
            "Tatooine",
            "Bordure Extérieure",
            "Deux soleils, du sable, et personne pour poser de questions.",
            &["désert", "pègre"],
        ),
        make(
            "nar_shaddaa",
            "Nar Shaddaa",
            "Espace Hutt",
            "La lune des contrebandiers. Tout s'achète.",
            &["urbain", "pègre"],
        ),
        make(
            "korriban",
            "Korriban",
            "Espace Sith",
            "Tombeaux, académie, et ambitions mortelles.",
            &["sith"],
        ),
        make(
            "ord_mantell",
            "Ord Mantell",
            "Bordure Médiane",
            "Guerre séparatiste et trafic d'armes.",
            &["guerre"],
        ),
        make(
            "balmorra",
            "Balmorra",
            "Colonies",
            "Usines d'armement occupées par l'Empire.",
            &["industrie", "occupation"],
        ),
        make(
            "taris",
            "Taris",
            "Bordure Extérieure",
            "Un monde rasé que la République tente de rebâtir.",
            &["ruines"],
        ),
        make(
            "corellia",
            "Corellia",
            "Noyau",
            "Chantiers navals et pilotes trop sûrs d'eux.",
            &["spatial"],
        ),
    ]
}

/// Built-in moral doctrines.
pub fn doctrines() -> Vec<Doctrine> {
    let make = |id: &str, name: &str, blurb: &str| Doctrine {
        id: id.to_string(),
        name: name.to_string(),
        blurb: blurb.to_string(),
    };

    vec![
        make("lumiere", "Lumière", "La fin ne justifie jamais les moyens."),
        make("ombre", "Ombre", "Le pouvoir est la seule protection réelle."),
        make("equilibre", "Équilibre", "Ni dogme, ni abandon : la mesure."),
        make("pragmatisme", "Pragmatisme", "Ce qui marche est ce qui est juste."),
    ]
}

/// Built-in methods.
pub fn methods() -> Vec<Method> {
    let make = |id: &str, name: &str, blurb: &str| Method {
        id: id.to_string(),
        name: name.to_string(),
        blurb: blurb.to_string(),
    };

    vec![
        make("diplomatie", "Diplomatie", "Convaincre, négocier, promettre."),
        make("subterfuge", "Subterfuge", "Mentir, détourner, disparaître."),
        make("coercition", "Coercition", "Menacer, faire pression, contraindre."),
        make("force_brute", "Force brute", "Quand la porte résiste, on l'enfonce."),
        make("technique", "Technique", "Tout système a une faille."),
    ]
}

/// Built-in red lines.
pub fn red_lines() -> Vec<RedLine> {
    let make = |id: &str, name: &str, blurb: &str| RedLine {
        id: id.to_string(),
        name: name.to_string(),
        blurb: blurb.to_string(),
    };

    vec![
        make("civils", "Jamais de civils", "Les innocents restent hors du jeu."),
        make("trahison", "Jamais trahir un allié", "Une parole donnée tient."),
        make("torture", "Pas de torture", "Aucune information ne vaut ça."),
        make("esclavage", "Contre l'esclavage", "Personne ne s'achète."),
    ]
}

/// Built-in factions.
pub fn factions() -> Vec<Faction> {
    let make = |id: &str, name: &str, category: FactionCategory| Faction {
        id: id.to_string(),
        name: name.to_string(),
        category,
    };

    use FactionCategory::*;
    vec![
        make("republic", "République galactique", Superpower),
        make("empire", "Empire Sith", Superpower),
        make("sis", "Service de renseignement stratégique", SpyAgency),
        make("imperial_intel", "Renseignement impérial", SpyAgency),
        make("hutt", "Cartel Hutt", NeutralBloc),
        make("chiss", "Ascendance Chiss", NeutralBloc),
        make("czerka", "Czerka Corporation", NeutralBloc),
        make("exchange", "L'Échange", Underworld),
        make("blacksun", "Soleil Noir", Underworld),
        make("bountyguild", "Guilde des chasseurs de primes", Underworld),
        make("mandal", "Mandaloriens", Underworld),
        make("organa", "Maison Organa", ProxyTheater),
        make("thul", "Maison Thul", ProxyTheater),
        make("ulgo", "Maison Ulgo", ProxyTheater),
        make("jedi", "Ordre Jedi", ForceOrder),
        make("sith", "Ordre des Seigneurs Sith", ForceOrder),
        make("revanites", "Ordre de Revan", SecretSociety),
        make("starcabal", "Star Cabal", SecretSociety),
        make("genoharadan", "GenoHaradan", SecretSociety),
        make("dreadmasters", "Maîtres de l'Effroi", SecretSociety),
    ]
}

/// Built-in allegiance cards.
pub fn cards() -> Vec<AllegianceCard> {
    let make = |id: &str, name: &str, blurb: &str, effects: &[(&str, i32)]| AllegianceCard {
        id: id.to_string(),
        name: name.to_string(),
        blurb: blurb.to_string(),
        effects: effects
            .iter()
            .map(|(faction, delta)| CardEffect::new(*faction, *delta))
            .collect(),
    };

    vec![
        make(
            "dette_jeu",
            "Dette de jeu",
            "Une partie de sabacc qui a mal tourné.",
            &[("hutt", -2), ("exchange", 1)],
        ),
        make(
            "mission_sis",
            "Mission pour le SIS",
            "Un dossier classé porte ton nom de code.",
            &[("sis", 3), ("republic", 2), ("imperial_intel", -2)],
        ),
        make(
            "informateur_imperial",
            "Informateur impérial",
            "Tu as vendu des secrets. Certains le savent.",
            &[("imperial_intel", 3), ("empire", 2), ("sis", -3)],
        ),
        make(
            "contrat_czerka",
            "Contrat Czerka",
            "Tu as signé sans lire les petites lignes.",
            &[("czerka", 2), ("republic", -1)],
        ),
        make(
            "sauvetage_jedi",
            "Sauvé par un Jedi",
            "Un chevalier t'a tiré des décombres.",
            &[("jedi", 3), ("sith", -2)],
        ),
        make(
            "marque_sith",
            "Marqué par un Sith",
            "Un seigneur noir se souvient de ton visage.",
            &[("sith", 3), ("jedi", -3), ("empire", 1)],
        ),
        make(
            "guerre_alderaan",
            "Guerre civile d'Alderaan",
            "Tu as choisi un camp dans les salons d'Alderaan.",
            &[("organa", 2), ("thul", -2), ("ulgo", 1)],
        ),
        make(
            "prime",
            "Prime sur ta tête",
            "Quelqu'un paie cher pour te retrouver.",
            &[("bountyguild", -3), ("blacksun", 1)],
        ),
        make(
            "faveur_soleil_noir",
            "Faveur du Soleil Noir",
            "Un service rendu, un service dû.",
            &[("blacksun", 3), ("exchange", -2)],
        ),
        make(
            "dette_de_sang",
            "Dette de sang mandalorienne",
            "Un clan te doit la vie d'un des siens.",
            &[("mandal", 3), ("empire", -1)],
        ),
        make(
            "murmures_revan",
            "Murmures de Revan",
            "Des fidèles d'un héros oublié t'ont approché.",
            &[("revanites", 3), ("jedi", -1), ("sith", -1)],
        ),
        make(
            "contact_cabale",
            "Contact de la Star Cabal",
            "Une voix sans visage connaît tes dettes.",
            &[("starcabal", 2), ("republic", -1), ("empire", -1)],
        ),
        make(
            "contrat_genoharadan",
            "Contrat GenoHaradan",
            "Une cible, un prix, aucune question.",
            &[("genoharadan", 3), ("bountyguild", -1)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_tables_are_populated() {
        let catalog = builtin();
        assert_eq!(catalog.species.len(), 9);
        assert_eq!(catalog.professions.len(), 6);
        assert_eq!(catalog.traits.len(), 14);
        assert_eq!(catalog.factions.len(), 20);
        assert!(!catalog.planets.is_empty());
        assert!(!catalog.doctrines.is_empty());
        assert!(!catalog.methods.is_empty());
        assert!(!catalog.red_lines.is_empty());
        assert!(!catalog.cards.is_empty());
    }

    #[test]
    fn reference_records_keep_their_costs() {
        let catalog = builtin();
        assert_eq!(catalog.find_species("droid").unwrap().points, 4);
        assert_eq!(catalog.find_profession("intel").unwrap().points, -6);
        assert_eq!(catalog.find_trait("analytique").unwrap().value, 3);
        assert!(
            catalog
                .find_trait("analytique")
                .unwrap()
                .blocks("impulsif")
        );
    }

    #[test]
    fn additional_traits_block_nothing() {
        let catalog = builtin();
        for t in &catalog.traits {
            if REFERENCE_TRAITS.contains(&t.id.as_str()) {
                for other in &t.incompatible {
                    let other = catalog.find_trait(other).unwrap();
                    assert!(other.blocks(&t.id), "{} -> {} is one-way", t.id, other.id);
                }
            } else {
                assert!(t.incompatible.is_empty(), "{} blocks {:?}", t.id, t.incompatible);
            }
        }
    }

    #[test]
    fn ids_are_unique_per_table() {
        let catalog = builtin();
        let unique = |ids: Vec<&str>| {
            let set: HashSet<&str> = ids.iter().copied().collect();
            set.len() == ids.len()
        };
        assert!(unique(catalog.species.iter().map(|r| r.id.as_str()).collect()));
        assert!(unique(
            catalog.professions.iter().map(|r| r.id.as_str()).collect()
        ));
        assert!(unique(catalog.traits.iter().map(|r| r.id.as_str()).collect()));
        assert!(unique(catalog.factions.iter().map(|r| r.id.as_str()).collect()));
        assert!(unique(catalog.cards.iter().map(|r| r.id.as_str()).collect()));
    }

    #[test]
    fn card_effects_name_known_factions() {
        let catalog = builtin();
        for card in &catalog.cards {
            for effect in &card.effects {
                assert!(
                    catalog.find_faction(&effect.faction).is_some(),
                    "{} references unknown faction {}",
                    card.id,
                    effect.faction
                );
            }
        }
    }

    #[test]
    fn builtin_survives_json() {
        let catalog = builtin();
        let json = catalog.to_json_pretty().unwrap();
        assert_eq!(Catalog::from_json_str(&json).unwrap(), catalog);
    }
}
