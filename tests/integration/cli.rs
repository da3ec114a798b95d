use grammargen::test_utils::LayoutFixture;
use predicates::prelude::*;
use std::fs;

use crate::common::{grammargen_cmd, pydev_fixture};

/// Fixture whose configuration turns the cog step off.
fn fixture_without_cog() -> LayoutFixture {
    let fixture = pydev_fixture().configure(|config| config.expander.enabled = false);
    fixture.write_config();
    fixture
}

#[test]
fn test_default_command_generates() {
    let fixture = fixture_without_cog();

    grammargen_cmd(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 4 grammar file(s)"));

    assert!(fixture.output_path("grammar30").exists());
}

#[test]
fn test_quiet_suppresses_output() {
    let fixture = fixture_without_cog();

    grammargen_cmd(fixture.path())
        .args(["--quiet", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_cog_install_fails_before_writing() {
    // Expansion enabled, but no builders/ tree
    let fixture = pydev_fixture();

    grammargen_cmd(fixture.path())
        .arg("generate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("External expansion tool not found"))
        .stderr(predicate::str::contains("cog_src"));

    assert!(!fixture.output_path("grammar24").exists());
}

#[test]
fn test_skip_expand_flag() {
    let fixture = pydev_fixture();

    grammargen_cmd(fixture.path()).args(["generate", "--skip-expand"]).assert().success();
    assert!(fixture.output_path("grammar24").exists());
}

#[test]
fn test_unresolved_placeholder_exit_code_and_message() {
    let fixture = LayoutFixture::new()
        .with_template("grammar30", "x $COLN y")
        .configure(|config| config.expander.enabled = false);
    fixture.write_config();

    grammargen_cmd(fixture.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unresolved placeholder '$COLN'"))
        .stderr(predicate::str::contains("grammar30"))
        .stderr(predicate::str::contains("COLON"));
}

#[test]
fn test_check_command() {
    let fixture = fixture_without_cog();

    grammargen_cmd(fixture.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing"));

    grammargen_cmd(fixture.path()).assert().success();

    grammargen_cmd(fixture.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 grammar file(s) up to date"));
}

#[test]
fn test_explicit_config_file() {
    let fixture = LayoutFixture::new().with_template("grammar30", "$COMMA");
    let config = fixture.path().join("custom.toml");
    fs::write(&config, "grammars = [\"grammar30\"]\n\n[expander]\nenabled = false\n").unwrap();

    grammargen_cmd(fixture.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 1 grammar file(s)"));
}

#[test]
fn test_invalid_config_is_reported() {
    let fixture = LayoutFixture::new();
    fs::write(fixture.path().join("grammargen.toml"), "grammar = []\n").unwrap();

    grammargen_cmd(fixture.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("grammargen.toml"));
}

#[test]
fn test_fragments_listing() {
    let fixture = LayoutFixture::new();

    grammargen_cmd(fixture.path())
        .arg("fragments")
        .assert()
        .success()
        .stdout(predicate::str::contains("DICTMAKER"))
        .stdout(predicate::str::contains("38 fragments"));
}

#[test]
fn test_fragments_json() {
    let fixture = LayoutFixture::new();

    let output = grammargen_cmd(fixture.path())
        .args(["fragments", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 38);
    let suite = rows.iter().find(|r| r["name"] == "SUITE").unwrap();
    assert_eq!(suite["tier"], 1);
    assert_eq!(suite["inputs"][0], "NEWLINE");
}

#[test]
fn test_fragments_single_name() {
    let fixture = LayoutFixture::new();

    grammargen_cmd(fixture.path())
        .args(["fragments", "NEWLINE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("handleNoNewline"));

    grammargen_cmd(fixture.path())
        .args(["fragments", "SUITEE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown fragment 'SUITEE'"))
        .stderr(predicate::str::contains("SUITE"));
}
