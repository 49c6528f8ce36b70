//! Integration tests for the nexus CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A data file with one player and one campaign.
fn seeded(balance: u64, egg: serde_json::Value) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nexus.json");
    let mut user = serde_json::json!({
        "id": "u1",
        "email": "hero@example.com",
        "careBalance": balance,
    });
    if let (Some(user), Some(egg)) = (user.as_object_mut(), egg.as_object()) {
        user.extend(egg.clone());
    }
    let store = serde_json::json!({
        "users": [user],
        "campaigns": [{
            "id": "c1",
            "userId": "u1",
            "name": "Embercliff",
            "system": "Fantasy",
            "description": "A cliffside city of smoke and bells",
            "careEarned": 0,
            "createdAt": "2024-01-01T00:00:00Z"
        }],
        "sessions": []
    });
    fs::write(&path, serde_json::to_string_pretty(&store).unwrap()).unwrap();
    (dir, path)
}

fn nexus(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("nexus").unwrap();
    cmd.arg("--data").arg(data);
    cmd
}

fn stored(data: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(data).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// signup / new-campaign
// ---------------------------------------------------------------------------

#[test]
fn signup_creates_data_file() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("nexus.json");
    nexus(&data)
        .args(["signup", "new@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Nexus Hub"));

    let store = stored(&data);
    assert_eq!(store["users"][0]["email"], "new@example.com");
    assert_eq!(store["users"][0]["careBalance"], 0);
    assert_eq!(store["users"][0]["eggStatus"], "none");
}

#[test]
fn signup_twice_fails() {
    let (_dir, data) = seeded(0, serde_json::json!({}));
    nexus(&data)
        .args(["signup", "HERO@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already registered"));
}

#[test]
fn signup_rejects_bad_email() {
    let dir = TempDir::new().unwrap();
    nexus(&dir.path().join("nexus.json"))
        .args(["signup", "not-an-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid email"));
}

#[test]
fn new_campaign_for_unknown_user_fails() {
    let (_dir, data) = seeded(0, serde_json::json!({}));
    nexus(&data)
        .args(["new-campaign", "Moonfall", "--user", "ghost@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("user not found"));
}

#[test]
fn new_campaign_is_listed_in_portal() {
    let (_dir, data) = seeded(0, serde_json::json!({}));
    nexus(&data)
        .args([
            "new-campaign",
            "Neon Drift",
            "--system",
            "Cyberpunk",
            "--user",
            "hero@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created campaign"));

    nexus(&data)
        .args(["portal", "--user", "hero@example.com"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Neon Drift")
                .and(predicate::str::contains("⚔️ Embercliff · Fantasy · 0 CARE · Portal Active"))
                .and(predicate::str::contains("2 portals")),
        );
}

// ---------------------------------------------------------------------------
// log-session
// ---------------------------------------------------------------------------

#[test]
fn log_session_credits_user_and_campaign() {
    let (_dir, data) = seeded(0, serde_json::json!({}));
    nexus(&data)
        .args([
            "log-session",
            "c1",
            "-a",
            "attendance",
            "-a",
            "storytelling",
            "--recap",
            "Fought a dragon",
            "--date",
            "2024-01-02",
            "--user",
            "hero@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("+15 CARE"));

    let store = stored(&data);
    assert_eq!(store["users"][0]["careBalance"], 15);
    assert_eq!(store["campaigns"][0]["careEarned"], 15);
    assert_eq!(store["sessions"][0]["recap"], "Fought a dragon");
    assert_eq!(store["sessions"][0]["actions"][1], "Collaborative Storytelling");
}

#[test]
fn log_session_rejects_unknown_action() {
    let (_dir, data) = seeded(0, serde_json::json!({}));
    nexus(&data)
        .args(["log-session", "c1", "-a", "juggling", "--user", "hero@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown action"));
    assert_eq!(stored(&data)["sessions"].as_array().unwrap().len(), 0);
}

#[test]
fn log_session_on_someone_elses_campaign_is_denied() {
    let (_dir, data) = seeded(0, serde_json::json!({}));
    nexus(&data)
        .args(["signup", "other@example.com"])
        .assert()
        .success();
    nexus(&data)
        .args(["log-session", "c1", "--user", "other@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not have access"));
}

#[test]
fn last_incubating_session_hatches_egg() {
    let (_dir, data) = seeded(
        0,
        serde_json::json!({"eggStatus": "incubating", "eggSessionsRemaining": 1}),
    );
    nexus(&data)
        .args(["log-session", "c1", "--date", "2024-02-01", "--user", "hero@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hatched"));

    let user = &stored(&data)["users"][0];
    assert_eq!(user["eggStatus"], "hatched");
    assert_eq!(user["dragonHatchedAt"], "2024-02-01T00:00:00Z");
}

// ---------------------------------------------------------------------------
// buy-egg / name-dragon
// ---------------------------------------------------------------------------

#[test]
fn buy_egg_with_insufficient_balance_fails() {
    let (_dir, data) = seeded(999, serde_json::json!({}));
    nexus(&data)
        .args(["buy-egg", "--user", "hero@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient balance"));
    assert_eq!(stored(&data)["users"][0]["careBalance"], 999);
}

#[test]
fn buy_egg_starts_incubation() {
    let (_dir, data) = seeded(1200, serde_json::json!({}));
    nexus(&data)
        .args(["buy-egg", "--user", "hero@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("incubating"));

    let user = &stored(&data)["users"][0];
    assert_eq!(user["careBalance"], 200);
    assert_eq!(user["eggStatus"], "incubating");
    assert_eq!(user["eggSessionsRemaining"], 10);
}

#[test]
fn buy_egg_twice_fails() {
    let (_dir, data) = seeded(2500, serde_json::json!({}));
    nexus(&data)
        .args(["buy-egg", "--user", "hero@example.com"])
        .assert()
        .success();
    nexus(&data)
        .args(["buy-egg", "--user", "hero@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid state"));
    assert_eq!(stored(&data)["users"][0]["careBalance"], 1500);
}

#[test]
fn name_dragon_requires_hatched_egg() {
    let (_dir, data) = seeded(0, serde_json::json!({}));
    nexus(&data)
        .args(["name-dragon", "Cinder", "--user", "hero@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no dragon"));
}

#[test]
fn name_dragon_sets_name() {
    let (_dir, data) = seeded(0, serde_json::json!({"eggStatus": "hatched"}));
    nexus(&data)
        .args(["name-dragon", "Cinder", "--user", "hero@example.com"])
        .assert()
        .success();
    assert_eq!(stored(&data)["users"][0]["dragonName"], "Cinder");
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

#[test]
fn status_shows_cards() {
    let (_dir, data) = seeded(1250, serde_json::json!({}));
    nexus(&data)
        .args(["status", "--user", "hero@example.com"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1,250")
                .and(predicate::str::contains("1250/1,000"))
                .and(predicate::str::contains("Embercliff (Fantasy)"))
                .and(predicate::str::contains("No sessions logged yet"))
                .and(predicate::str::contains("Purchase Ember Egg!")),
        );
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_prints_save_code() {
    let (_dir, data) = seeded(40, serde_json::json!({}));
    nexus(&data)
        .args([
            "log-session",
            "c1",
            "--recap",
            "Fought a dragon",
            "--date",
            "2024-01-02",
            "--user",
            "hero@example.com",
        ])
        .assert()
        .success();

    nexus(&data)
        .args(["export", "c1", "--user", "hero@example.com"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("SAVE_CODE v2.0.1: Embercliff | ")
                .and(predicate::str::contains("• Total Sessions: 1\n"))
                .and(predicate::str::contains(
                    "1. 2024-01-02 - Fought a dragon (+10 CARE)",
                ))
                .and(predicate::str::contains("Earn 950 more CARE to get Ember Egg"))
                .and(predicate::str::contains("Campaign ID: c1"))
                .and(predicate::str::contains("── MODULE: Dragon Companion ──").not()),
        );
}

#[test]
fn export_to_file_with_custom_hub() {
    let (dir, data) = seeded(0, serde_json::json!({"eggStatus": "hatched", "dragonName": "Ash"}));
    let out = dir.path().join("save.txt");
    nexus(&data)
        .args(["export", "c1", "--hub-url", "hub.test", "--user", "hero@example.com", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("hub.test/campaign.html?id=c1"));
    assert!(content.contains("── MODULE: Dragon Companion ──"));
    assert!(content.contains("    dragonName: \"Ash\"\n"));
}

#[test]
fn export_with_compression_profile() {
    let (_dir, data) = seeded(0, serde_json::json!({}));
    nexus(&data)
        .args(["export", "c1", "--compression", "dense", "--user", "hero@example.com"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Compression: DENSE\n")
                .and(predicate::str::contains("| Compression: dense |"))
                .and(predicate::str::contains("BALANCED").not()),
        );
}

#[test]
fn export_unknown_campaign_fails() {
    let (_dir, data) = seeded(0, serde_json::json!({}));
    nexus(&data)
        .args(["export", "nope", "--user", "hero@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("campaign not found"));
}

#[test]
fn corrupt_data_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("nexus.json");
    fs::write(&data, "{ not json").unwrap();
    nexus(&data)
        .args(["status", "--user", "hero@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("store unavailable"));
}
