//! Integration tests for the `dossier` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A catalog with one self-incompatible trait and one card pointing at an
/// unknown faction.
fn broken_catalog() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("catalog.json"),
        r#"{
  "traits": [
    { "id": "fier", "name": "Fier", "value": 2, "incompatible": ["fier"] }
  ],
  "cards": [
    { "id": "rumeur", "name": "Rumeur", "effects": [{ "faction": "nobody", "delta": 1 }] }
  ]
}
"#,
    )
    .unwrap();
    dir
}

/// A catalog where `ermite` blocks `contact` but not the other way round.
fn one_way_catalog() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("catalog.json"),
        r#"{
  "traits": [
    { "id": "contact", "name": "Contact", "value": 3 },
    { "id": "ermite", "name": "Ermite", "value": -2, "incompatible": ["contact"] }
  ]
}
"#,
    )
    .unwrap();
    dir
}

fn dossier() -> Command {
    let mut cmd = Command::cargo_bin("dossier").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("DOSSIER_CATALOG");
    cmd
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_species() {
    dossier()
        .args(["list", "species"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Droïde")
                .and(predicate::str::contains("Zabrak"))
                .and(predicate::str::contains("9 entries")),
        );
}

#[test]
fn list_traits_with_search() {
    dossier()
        .args(["list", "traits", "--search", "pilot"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("pilotage")
                .and(predicate::str::contains("linguiste").not()),
        );
}

#[test]
fn list_search_without_matches() {
    dossier()
        .args(["list", "traits", "-s", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn list_search_rejected_for_other_kinds() {
    dossier()
        .args(["list", "species", "--search", "zabrak"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--search only applies to traits"));
}

#[test]
fn list_unknown_kind_fails() {
    dossier()
        .args(["list", "vehicles"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown kind"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_species() {
    dossier()
        .args(["show", "droid"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Droïde")
                .and(predicate::str::contains("species"))
                .and(predicate::str::contains("+4")),
        );
}

#[test]
fn show_trait_lists_blockers() {
    dossier()
        .args(["show", "reseau"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("blocked by")
                .and(predicate::str::contains("surveillance")),
        );
}

#[test]
fn show_one_way_target_has_blocker_but_blocks_nothing() {
    let dir = one_way_catalog();
    let path = dir.path().join("catalog.json");
    dossier()
        .args(["show", "contact", "--catalog", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("blocked by")
                .and(predicate::str::contains("ermite")),
        );
}

#[test]
fn show_unknown_id_fails() {
    dossier()
        .args(["show", "wookiee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no catalog record"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_builtin_passes_cleanly() {
    dossier()
        .arg("check")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed")
                .and(predicate::str::contains("0 warnings")),
        )
        .stderr(predicate::str::contains("warning").not());
}

#[test]
fn check_one_way_catalog_passes_with_warning() {
    let dir = one_way_catalog();
    let path = dir.path().join("catalog.json");
    dossier()
        .args(["check", "--catalog", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 warning"))
        .stderr(predicate::str::contains(
            "trait 'ermite': blocks 'contact' but 'contact' does not block 'ermite'",
        ));
}

#[test]
fn check_broken_catalog_fails() {
    let dir = broken_catalog();
    let path = dir.path().join("catalog.json");
    dossier()
        .args(["check", "--catalog", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("lists itself")
                .and(predicate::str::contains("unknown faction 'nobody'")),
        );
}

#[test]
fn catalog_from_env() {
    let dir = broken_catalog();
    dossier()
        .arg("check")
        .env("DOSSIER_CATALOG", dir.path().join("catalog.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog check failed"));
}

#[test]
fn missing_catalog_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    dossier()
        .args(["list", "traits", "--catalog", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read catalog"));
}

// ---------------------------------------------------------------------------
// sheet
// ---------------------------------------------------------------------------

#[test]
fn sheet_reports_overspent_budget() {
    dossier()
        .args([
            "sheet",
            "--species",
            "droid",
            "--profession",
            "intel",
            "--trait",
            "analytique",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("-5")
                .and(predicate::str::contains("Dépassement"))
                .and(predicate::str::contains("impulsif")),
        );
}

#[test]
fn sheet_skips_incompatible_trait() {
    dossier()
        .args(["sheet", "--trait", "analytique", "--trait", "impulsif"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "trait 'impulsif' is incompatible with analytique",
        ))
        .stdout(predicate::str::contains("Esprit analytique"));
}

#[test]
fn sheet_uses_base_points() {
    dossier()
        .args(["sheet", "--species", "droid", "--base-points", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14").and(predicate::str::contains("Prêt")));
}

#[test]
fn sheet_warns_about_unknown_ids() {
    dossier()
        .args(["sheet", "--species", "wookiee"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown species 'wookiee'"));
}

#[test]
fn sheet_rejects_unknown_camp() {
    dossier()
        .args(["sheet", "--camp", "hutts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown camp"));
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_json_to_stdout() {
    let output = dossier()
        .args([
            "export",
            "json",
            "--species",
            "zabrak",
            "--profession",
            "tech",
            "--trait",
            "robuste",
            "--card",
            "mission_sis",
            "--codename",
            "Kael Voss",
            "--camp",
            "republique",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], "v0.5");
    assert_eq!(json["codename"], "Kael Voss");
    assert_eq!(json["camp"], "République");
    assert_eq!(json["pointsRemaining"], -9);
    assert_eq!(json["stats"]["CON"], 15);
    assert_eq!(json["resolved"]["traits"][0]["id"], "robuste");
    assert_eq!(json["resolved"]["factions"]["sis"], 3);
    assert!(json["exportedAt"].is_string());
}

#[test]
fn export_respects_max_faction() {
    let output = dossier()
        .args(["export", "json", "--card", "mission_sis", "--max-faction", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["resolved"]["factions"]["sis"], 1);
    assert_eq!(json["resolved"]["factions"]["imperial_intel"], -1);
}

#[test]
fn export_markdown_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("sheet.md");
    dossier()
        .args([
            "export",
            "markdown",
            "-o",
            out.to_str().unwrap(),
            "--species",
            "humain",
            "--codename",
            "Nyx",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("# Nyx"));
    assert!(content.contains("**Espèce:** Humain"));
}

#[test]
fn export_into_directory_uses_codename_stem() {
    let dir = TempDir::new().unwrap();
    dossier()
        .args([
            "export",
            "json",
            "-o",
            dir.path().to_str().unwrap(),
            "--codename",
            "Kael Voss",
        ])
        .assert()
        .success();

    assert!(dir.path().join("kael_voss_dossier.json").exists());
}

#[test]
fn export_unsupported_format() {
    dossier()
        .args(["export", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}
