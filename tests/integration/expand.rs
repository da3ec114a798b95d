use grammargen::expander::CogExpander;
use grammargen::generator::generate;
use predicates::prelude::*;
use std::fs;

use crate::common::{FAKE_COG, grammargen_cmd, pydev_fixture, python};

#[test]
fn test_generate_runs_cog_then_templates() {
    let Some(python) = python() else {
        return;
    };
    let fixture = pydev_fixture()
        .configure(|config| config.expander.python = python.to_string())
        .with_cog_install(FAKE_COG)
        .with_expand_targets("class AbstractTokenManagerWithConstants {}\n");
    let layout = fixture.layout();

    let expander = CogExpander::locate(&layout.cog_install_dir, &layout.python).unwrap();
    let report = generate(&layout, &expander).unwrap();

    assert_eq!(report.expanded, layout.expand_targets);
    let expanded = fs::read_to_string(&layout.expand_targets[0]).unwrap();
    assert!(expanded.ends_with("//[[[end]]] expanded\n"));
    assert_eq!(report.outputs.len(), 4);
}

#[test]
fn test_expand_command() {
    let Some(python) = python() else {
        return;
    };
    let fixture = pydev_fixture()
        .configure(|config| config.expander.python = python.to_string())
        .with_cog_install(FAKE_COG)
        .with_expand_targets("");
    fixture.write_config();

    grammargen_cmd(fixture.path())
        .arg("expand")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expanded 1 file(s)"));

    // expand does not generate grammars
    assert!(!fixture.output_path("grammar30").exists());
}

#[test]
fn test_missing_expand_target_fails() {
    let Some(python) = python() else {
        return;
    };
    let fixture = pydev_fixture()
        .configure(|config| config.expander.python = python.to_string())
        .with_cog_install(FAKE_COG);
    fixture.write_config();

    grammargen_cmd(fixture.path())
        .arg("expand")
        .assert()
        .failure()
        .stderr(predicate::str::contains("AbstractTokenManagerWithConstants.java"));
}
