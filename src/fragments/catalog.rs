//! The PyDev grammar fragment library.
//!
//! Every `$NAME` used by the `python.jjt_template` files of the supported grammar
//! versions has an entry here. Names are template keys and must not be changed
//! without updating all templates (`COMMOM_METHODS` included).

use super::{FragmentDef, Newline, Recipe, productions, support, tokens};

/// Build the full catalog, in declaration order.
///
/// Declaration order only breaks ties between fragments of the same tier; the build
/// order itself is computed from the recipes' inputs.
pub fn catalog() -> Vec<FragmentDef> {
    vec![
        // Productions
        FragmentDef::new("FILE_INPUT", Recipe::splice(productions::FILE_INPUT, "NEWLINE"))
            .with_summary("file_input production"),
        FragmentDef::new("NEWLINE", Recipe::Newline(Newline::Recovering))
            .with_summary("end-of-line marker with recovery"),
        FragmentDef::new("NAME_DEFINITION", Recipe::text(productions::NAME_DEFINITION))
            .with_summary("Name() production with error recovery"),
        FragmentDef::new("YIELD", Recipe::text(productions::YIELD)).with_summary("yield_expr production"),
        FragmentDef::new("SUITE", Recipe::splice(productions::SUITE, "NEWLINE"))
            .with_summary("suite production"),
        FragmentDef::new("STMT", Recipe::text(productions::STMT)).with_summary("stmt production"),
        FragmentDef::new("SIMPLE_STMT", Recipe::splice(productions::SIMPLE_STMT, "NEWLINE"))
            .with_summary("simple_stmt production"),
        FragmentDef::new("IMPORT_STMT", Recipe::text(productions::IMPORT_STMT))
            .with_summary("import_stmt production"),
        FragmentDef::new("PASS_STMT", Recipe::text(productions::PASS_STMT))
            .with_summary("pass_stmt production"),
        FragmentDef::new("DELL_STMT", Recipe::text(productions::DELL_STMT))
            .with_summary("del_stmt production"),
        FragmentDef::new("IF_EXP", Recipe::text(productions::IF_EXP))
            .with_summary("conditional expression"),
        FragmentDef::new("DICTMAKER", Recipe::bind(productions::DICTMAKER))
            .with_summary("dictmaker production"),
        FragmentDef::new("IF", Recipe::bind(productions::IF)).with_summary("if_stmt production"),
        FragmentDef::new("ASSERT", Recipe::bind(productions::ASSERT))
            .with_summary("assert_stmt production"),
        // Java support code and lexical states
        FragmentDef::new("IMPORTS", Recipe::text(support::IMPORTS)).with_summary("parser imports"),
        FragmentDef::new("COMMOM_METHODS", Recipe::text(support::COMMOM_METHODS))
            .with_summary("parser accessor methods"),
        FragmentDef::new("TOKEN_MGR_COMMOM_METHODS", Recipe::text(support::TOKEN_MGR_COMMOM_METHODS))
            .with_summary("token manager indentation methods"),
        FragmentDef::new("INDENTING", Recipe::text(support::INDENTING))
            .with_summary("INDENTING lexical state"),
        // Token actions
        FragmentDef::new("RPAREN", Recipe::text(tokens::RPAREN)),
        FragmentDef::new("COLON", Recipe::text(tokens::COLON)),
        FragmentDef::new("AT", Recipe::text(tokens::AT)),
        FragmentDef::new("COMMA", Recipe::text(tokens::COMMA)),
        FragmentDef::new("CALL_ASSERT", Recipe::text(tokens::CALL_ASSERT))
            .with_summary("assert statement call site"),
        FragmentDef::new("RAISE", Recipe::text(tokens::RAISE)),
        FragmentDef::new("DEF_START", Recipe::text(tokens::DEF_START))
            .with_summary("start of a function definition"),
        FragmentDef::new("LPAREN1", Recipe::text(tokens::LPAREN1)),
        FragmentDef::new("LPAREN2", Recipe::text(tokens::LPAREN2)),
        FragmentDef::new("LPAREN3", Recipe::text(tokens::LPAREN3)),
        FragmentDef::new("LAMBDA_COLON", Recipe::text(tokens::LAMBDA_COLON)),
        FragmentDef::new("START_CLASS", Recipe::text(tokens::START_CLASS))
            .with_summary("start of a class definition"),
        FragmentDef::new("EQUAL", Recipe::text(tokens::EQUAL)),
        FragmentDef::new("EQUAL2", Recipe::text(tokens::EQUAL2)),
        FragmentDef::new("IN", Recipe::text(tokens::IN)),
        FragmentDef::new("IF_COMP", Recipe::text(tokens::IF_COMP)),
        FragmentDef::new("FOR_COMP", Recipe::text(tokens::FOR_COMP)),
        FragmentDef::new("IMPORT", Recipe::text(tokens::IMPORT)),
        FragmentDef::new("AS", Recipe::text(tokens::AS)),
        FragmentDef::new("AS2", Recipe::text(tokens::AS2)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templating::placeholder::placeholder_names;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let defs = catalog();
        let names: HashSet<_> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), defs.len());
        assert_eq!(defs.len(), 38);
    }

    #[test]
    fn test_every_dependency_is_in_catalog() {
        let defs = catalog();
        let names: HashSet<_> = defs.iter().map(|d| d.name.clone()).collect();
        for def in &defs {
            for dep in def.dependencies() {
                assert!(names.contains(&dep), "{} depends on unknown {}", def.name, dep);
            }
        }
    }

    #[test]
    fn test_tier_one_fragments() {
        let with_deps: Vec<_> = catalog()
            .into_iter()
            .filter(|d| !d.dependencies().is_empty())
            .map(|d| {
                let deps = d.dependencies();
                (d.name, deps)
            })
            .collect();

        assert_eq!(
            with_deps,
            vec![
                ("FILE_INPUT".to_string(), vec!["NEWLINE".to_string()]),
                ("SUITE".to_string(), vec!["NEWLINE".to_string()]),
                ("SIMPLE_STMT".to_string(), vec!["NEWLINE".to_string()]),
                ("DICTMAKER".to_string(), vec!["COLON".to_string(), "COMMA".to_string()]),
                ("IF".to_string(), vec!["COLON".to_string()]),
                ("ASSERT".to_string(), vec!["COMMA".to_string()]),
            ]
        );
    }

    #[test]
    fn test_static_text_has_no_placeholders() {
        for def in catalog() {
            if let Recipe::Text(text) = &def.recipe {
                assert!(placeholder_names(text).is_empty(), "{} contains a placeholder", def.name);
                assert!(!text.contains('$'), "{} contains a dollar sign", def.name);
            }
        }
    }
}
