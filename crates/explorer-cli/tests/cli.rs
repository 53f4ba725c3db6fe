// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn explorer(config: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("polkadot-explorer").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config.path());
    cmd
}

fn visible_ids(json: &serde_json::Value) -> Vec<String> {
    json["visible"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["node"]["id"].as_str().unwrap().to_owned())
        .collect()
}

#[test]
fn hiding_parachains_hides_their_dapps() {
    let config = TempDir::new().unwrap();
    let out = explorer(&config)
        .args(["run", "--json", "select moonbeam", "layer parachain"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(visible_ids(&json), ["relay-chain"]);
    assert_eq!(json["layers"]["parachain"], false);
    assert_eq!(json["detail"]["name"], "Moonbeam");
}

#[test]
fn selection_is_marked_in_the_table() {
    let config = TempDir::new().unwrap();
    explorer(&config)
        .args(["run", "select stellaswap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DEX] StellaSwap"))
        .stdout(predicate::str::contains("Technical Specifications").not());
}

#[test]
fn mode_flag_overrides_prefs() {
    let config = TempDir::new().unwrap();
    explorer(&config)
        .args(["--mode", "advanced", "run", "select relay-chain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode: advanced"))
        .stdout(predicate::str::contains("Technical Specifications: Uses NPoS"));
}

#[test]
fn unknown_node_fails_fast() {
    let config = TempDir::new().unwrap();
    explorer(&config)
        .args(["run", "select kusama"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown node id: kusama"));
}

#[test]
fn finishing_the_tour_clears_selection() {
    let config = TempDir::new().unwrap();
    let out = explorer(&config)
        .args([
            "run",
            "--json",
            "tour start",
            "tour goto 4",
            "tour next",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(json["tour"].is_null());
    assert!(json["detail"].is_null());
    assert_eq!(visible_ids(&json).len(), 11);
}

#[test]
fn shell_walks_the_tour() {
    let config = TempDir::new().unwrap();
    explorer(&config)
        .arg("shell")
        .write_stdin("tour start\ntour next\nlayer bogus\ntour prev\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("STEP 2 / 4: Layer 0: The Relay Chain"))
        .stdout(predicate::str::contains("error: unknown layer tag: bogus"))
        .stdout(predicate::str::contains("camera: relay-chain"));
}

#[test]
fn init_config_writes_prefs_once() {
    let config = TempDir::new().unwrap();
    explorer(&config)
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("prefs.json"));
    assert!(config.path().join("prefs.json").is_file());

    explorer(&config)
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    explorer(&config)
        .args(["init-config", "--force"])
        .assert()
        .success();
}

#[test]
fn saved_prefs_set_the_starting_mode() {
    let config = TempDir::new().unwrap();
    std::fs::write(
        config.path().join("prefs.json"),
        r#"{"view_mode":"advanced","log_filter":"error"}"#,
    )
    .unwrap();
    explorer(&config)
        .args(["run", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode: advanced"));
}

#[test]
fn corrupt_prefs_warn_and_fall_back() {
    let config = TempDir::new().unwrap();
    std::fs::write(config.path().join("prefs.json"), "{not json").unwrap();
    explorer(&config)
        .args(["run", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode: beginner"))
        .stderr(predicate::str::contains("ignoring unreadable prefs"));
}

#[test]
fn missing_prefs_are_quiet_at_default_level() {
    let config = TempDir::new().unwrap();
    explorer(&config)
        .args(["run", "show"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn catalog_and_tour_listings() {
    let config = TempDir::new().unwrap();
    explorer(&config)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("arthswap"))
        .stdout(predicate::str::contains("astar"));
    explorer(&config)
        .arg("tour")
        .assert()
        .success()
        .stdout(predicate::str::contains("Layer 1: Parachains"));
}
