use grammargen::core::GrammarError;
use grammargen::expander::SkipExpander;
use grammargen::generator::{assemble_catalog, generate};
use grammargen::templating::placeholder_names;
use grammargen::test_utils::{LayoutFixture, RecordingExpander};
use std::collections::BTreeMap;
use std::fs;

use crate::common::{GRAMMARS, pydev_fixture};

#[test]
fn test_every_template_placeholder_is_registered() {
    let registry = assemble_catalog().unwrap();
    for (grammar, text) in GRAMMARS {
        for name in placeholder_names(text) {
            assert!(registry.contains(name), "{grammar} references unknown fragment {name}");
        }
    }
}

/// Exact text of every fragment, as committed PyDev outputs expect it.
const FRAGMENT_TEXTS: &str = include_str!("../fixtures/fragments.json");

#[test]
fn test_fragment_texts_are_byte_exact() {
    let expected: BTreeMap<String, String> = serde_json::from_str(FRAGMENT_TEXTS).unwrap();
    let registry = assemble_catalog().unwrap();
    let actual: BTreeMap<String, String> =
        registry.iter().map(|(name, text)| (name.to_string(), text.to_string())).collect();

    assert_eq!(actual.keys().collect::<Vec<_>>(), expected.keys().collect::<Vec<_>>());
    for (name, text) in &expected {
        assert_eq!(&actual[name], text, "fragment {name} differs");
    }
}

#[test]
fn test_trailing_whitespace_is_preserved() {
    let registry = assemble_catalog().unwrap();
    let suite = registry.get("SUITE").unwrap();
    assert!(suite.contains("void suite(): {}\n{ \n"));
    assert!(registry.get("LAMBDA_COLON").unwrap().contains("else \n"));
}

#[test]
fn test_generate_all_four_grammars() {
    let fixture = pydev_fixture();
    let layout = fixture.layout();
    let expander = RecordingExpander::default();

    let report = generate(&layout, &expander).unwrap();

    let expected: Vec<_> = GRAMMARS.iter().map(|(g, _)| fixture.output_path(g)).collect();
    assert_eq!(report.outputs, expected);
    for (grammar, _) in GRAMMARS {
        let output = fs::read_to_string(fixture.output_path(grammar)).unwrap();
        assert!(!output.contains('$'), "{grammar} output still has placeholders");
        assert!(output.contains("handleNoNewline"), "{grammar} lacks the NEWLINE spelling");
    }
    assert_eq!(expander.calls(), vec![layout.expand_targets.clone()]);
}

#[test]
fn test_generate_is_deterministic() {
    let fixture = pydev_fixture();
    let layout = fixture.layout();

    generate(&layout, &SkipExpander).unwrap();
    let first: Vec<_> =
        GRAMMARS.iter().map(|(g, _)| fs::read(fixture.output_path(g)).unwrap()).collect();

    generate(&layout, &SkipExpander).unwrap();
    let second: Vec<_> =
        GRAMMARS.iter().map(|(g, _)| fs::read(fixture.output_path(g)).unwrap()).collect();

    assert_eq!(first, second);
}

#[test]
fn test_constructor_resolved_values_reach_output() {
    let fixture = LayoutFixture::new().with_template("grammar30", "start $IF end");
    generate(&fixture.layout(), &SkipExpander).unwrap();

    let registry = assemble_catalog().unwrap();
    let output = fs::read_to_string(fixture.output_path("grammar30")).unwrap();
    assert_eq!(output, format!("start {} end", registry.get("IF").unwrap()));
    assert!(!output.contains("$COLON"));
}

#[test]
fn test_unresolved_key_keeps_earlier_outputs() {
    let fixture = LayoutFixture::new()
        .with_template("grammar24", "$COLON")
        .with_template("grammar25", "before $UNDEFINED_KEY after")
        .with_template("grammar26", "$COMMA");

    let err = generate(&fixture.layout(), &SkipExpander).unwrap_err();
    let grammar_error = err.chain().find_map(|e| e.downcast_ref::<GrammarError>()).unwrap();
    match grammar_error {
        GrammarError::UnresolvedPlaceholder {
            key,
            file,
            ..
        } => {
            assert_eq!(key, "UNDEFINED_KEY");
            assert!(file.contains("grammar25"));
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(fixture.output_path("grammar24").exists());
    assert!(!fixture.output_path("grammar25").exists());
    assert!(!fixture.output_path("grammar26").exists());
}

#[test]
fn test_templates_are_never_modified() {
    let fixture = pydev_fixture();
    generate(&fixture.layout(), &SkipExpander).unwrap();

    for (grammar, text) in GRAMMARS {
        assert_eq!(fs::read_to_string(fixture.template_path(grammar)).unwrap(), *text);
    }
}
