use grammargen::core::GrammarError;
use grammargen::expander::SkipExpander;
use grammargen::generator::{check, generate};
use grammargen::templating::OutputStatus;
use std::fs;

use crate::common::{GRAMMARS, pydev_fixture};

#[test]
fn test_check_before_and_after_generate() {
    let fixture = pydev_fixture();
    let layout = fixture.layout();

    let report = check(&layout).unwrap();
    assert!(report.entries.iter().all(|(_, s)| *s == OutputStatus::Missing));
    // check never writes
    for (grammar, _) in GRAMMARS {
        assert!(!fixture.output_path(grammar).exists());
    }

    generate(&layout, &SkipExpander).unwrap();
    check(&layout).unwrap().ensure_up_to_date().unwrap();
}

#[test]
fn test_check_names_stale_files() {
    let fixture = pydev_fixture();
    let layout = fixture.layout();
    generate(&layout, &SkipExpander).unwrap();

    let stale = fixture.output_path("grammar26");
    fs::write(&stale, "hand edited").unwrap();

    let err = check(&layout).unwrap().ensure_up_to_date().unwrap_err();
    match err {
        GrammarError::StaleOutput {
            files,
        } => {
            assert!(files.contains("grammar26"));
            assert!(!files.contains("grammar30"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(fs::read_to_string(stale).unwrap(), "hand edited");
}
