//! Placeholder scanning and substitution.
//!
//! Placeholders follow the rules of Python's `string.Template`, which the grammar
//! templates were originally written against:
//!
//! | Syntax    | Meaning                                  |
//! |-----------|------------------------------------------|
//! | `$NAME`   | placeholder, `NAME` = `[_A-Za-z][_A-Za-z0-9]*` |
//! | `${NAME}` | same placeholder, braced                 |
//! | `$$`      | a literal `$`                            |
//! | other `$` | invalid                                  |
//!
//! Names are case-sensitive. Two substitution operations are built on the scanner and
//! are deliberately kept apart:
//!
//! - [`splice`] replaces one sentinel placeholder and leaves every other `$` untouched.
//!   Fragment constructors use it to embed another fragment's text.
//! - [`substitute`] replaces every placeholder in a single pass. Inserted values are
//!   never scanned again, so text that looks like `$NAME` inside a value survives
//!   verbatim.

use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$(?:(?P<escaped>\$)|(?P<named>[_A-Za-z][_A-Za-z0-9]*)|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\}|(?P<invalid>))",
    )
    .expect("placeholder pattern is valid")
});

/// A piece of scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text without any `$`.
    Literal(&'a str),
    /// `$NAME` or `${NAME}`; `raw` is the exact source slice.
    Placeholder {
        /// The placeholder name
        name: &'a str,
        /// The source text, e.g. `${NAME}`
        raw: &'a str,
    },
    /// `$$`
    Escaped,
    /// A lone `$` at byte `offset`.
    Invalid {
        /// Byte offset of the `$`
        offset: usize,
    },
}

/// Why [`substitute`] could not finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstituteError {
    /// A placeholder with no value.
    Missing(String),
    /// A stray `$`, reported as 1-based line and column.
    Invalid {
        /// 1-based line
        line: usize,
        /// 1-based column, counted in characters
        column: usize,
    },
}

/// Split `text` into literal runs, placeholders, escapes and stray dollars.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            result.push(Segment::Literal(&text[last..whole.start()]));
        }

        let segment = if caps.name("escaped").is_some() {
            Segment::Escaped
        } else if let Some(name) = caps.name("named").or_else(|| caps.name("braced")) {
            Segment::Placeholder {
                name: name.as_str(),
                raw: whole.as_str(),
            }
        } else {
            Segment::Invalid {
                offset: whole.start(),
            }
        };
        result.push(segment);
        last = whole.end();
    }

    if last < text.len() {
        result.push(Segment::Literal(&text[last..]));
    }
    result
}

/// Names referenced by `text`, unique, in order of first appearance.
///
/// Escapes and stray dollars are ignored.
pub fn placeholder_names(text: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for segment in segments(text) {
        if let Segment::Placeholder {
            name,
            ..
        } = segment
        {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Replace every `$param` / `${param}` in `body` with `value`.
///
/// All other placeholders, `$$` escapes and stray dollars are copied unchanged, so the
/// result can still go through [`substitute`] later.
pub fn splice(body: &str, param: &str, value: &str) -> String {
    let mut out = String::with_capacity(body.len() + value.len());
    for segment in segments(body) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder {
                name,
                ..
            } if name == param => out.push_str(value),
            Segment::Placeholder {
                raw,
                ..
            } => out.push_str(raw),
            Segment::Escaped => out.push_str("$$"),
            Segment::Invalid {
                ..
            } => out.push('$'),
        }
    }
    out
}

/// Replace every placeholder in `text` with the value returned by `lookup`, in one pass.
///
/// `$$` becomes `$`. Fails on the first placeholder `lookup` does not know, or on the
/// first stray `$`.
pub fn substitute<'v, F>(text: &str, lookup: F) -> Result<String, SubstituteError>
where
    F: Fn(&str) -> Option<&'v str>,
{
    let mut out = String::with_capacity(text.len());
    for segment in segments(text) {
        match segment {
            Segment::Literal(literal) => out.push_str(literal),
            Segment::Placeholder {
                name,
                ..
            } => {
                let value = lookup(name).ok_or_else(|| SubstituteError::Missing(name.to_string()))?;
                out.push_str(value);
            }
            Segment::Escaped => out.push('$'),
            Segment::Invalid {
                offset,
            } => {
                let (line, column) = line_column(text, offset);
                return Err(SubstituteError::Invalid {
                    line,
                    column,
                });
            }
        }
    }
    Ok(out)
}

/// 1-based line and character column of byte `offset`.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
