//! Fragment definitions and constructors.
//!
//! A fragment is a named piece of grammar text: a production, a token action, a block of
//! supporting Java code or a lexical-state rule. Each fragment is described by a
//! [`FragmentDef`] whose [`Recipe`] says how its text is built:
//!
//! - [`Recipe::Text`] - static text, no inputs
//! - [`Recipe::Newline`] - one of the fixed [`Newline`] spellings, no inputs
//! - [`Recipe::Splice`] - a body with one sentinel placeholder replaced by another
//!   fragment's text (see [`placeholder::splice`](crate::templating::placeholder::splice))
//! - [`Recipe::Bind`] - a body whose placeholders are all bound from already resolved
//!   fragments (see [`placeholder::substitute`](crate::templating::placeholder::substitute))
//!
//! Recipes are pure: [`Recipe::build`] reads only the registry it is given, and equal
//! inputs always produce byte-identical text. The constructor-level substitution
//! performed here happens once, when the fragment is built. It is separate from the
//! registry-level substitution the template applier performs afterwards.
//!
//! The fragment library shipped with the generator lives in [`catalog`].

pub mod catalog;
mod productions;
mod support;
mod tokens;

pub use catalog::catalog;

use std::fmt;

use crate::core::GrammarError;
use crate::resolver::Registry;
use crate::templating::placeholder::{self, SubstituteError};

/// Spellings of the end-of-line marker used inside productions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Newline {
    /// `<NEWLINE>` wrapped in a handler that recovers from a missing newline.
    Recovering,
    /// Plain `<NEWLINE>`.
    Strict,
}

impl Newline {
    /// The grammar text for this spelling.
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Recovering => "try{<NEWLINE>}catch(ParseException e){handleNoNewline(e);}",
            Self::Strict => "<NEWLINE>",
        }
    }
}

/// How a fragment's text is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipe {
    /// Static text.
    Text(String),
    /// A fixed end-of-line spelling.
    Newline(Newline),
    /// `body` with every `$param` replaced by the resolved text of fragment `param`.
    Splice {
        /// Text containing the sentinel
        body: String,
        /// Name of both the sentinel and the fragment supplying its value
        param: String,
    },
    /// `body` with every placeholder bound from the registry.
    Bind {
        /// Text whose placeholders are the recipe's inputs
        body: String,
    },
}

impl Recipe {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn splice(body: impl Into<String>, param: impl Into<String>) -> Self {
        Self::Splice {
            body: body.into(),
            param: param.into(),
        }
    }

    pub fn bind(body: impl Into<String>) -> Self {
        Self::Bind {
            body: body.into(),
        }
    }

    /// Names of the fragments this recipe consumes, in order of first use.
    pub fn dependencies(&self) -> Vec<String> {
        match self {
            Self::Text(_) | Self::Newline(_) => Vec::new(),
            Self::Splice {
                param,
                ..
            } => vec![param.clone()],
            Self::Bind {
                body,
            } => placeholder::placeholder_names(body).into_iter().map(str::to_string).collect(),
        }
    }

    /// Build the text of fragment `name` from already resolved fragments.
    ///
    /// # Errors
    ///
    /// - [`GrammarError::UnresolvedFragment`] if an input is not in `registry`
    /// - [`GrammarError::InvalidPlaceholder`] if a [`Recipe::Bind`] body contains a stray `$`
    pub fn build(&self, name: &str, registry: &Registry) -> Result<String, GrammarError> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Newline(spelling) => Ok(spelling.spelling().to_string()),
            Self::Splice {
                body,
                param,
            } => {
                let value = registry.get(param).ok_or_else(|| GrammarError::UnresolvedFragment {
                    fragment: name.to_string(),
                    missing: param.clone(),
                })?;
                Ok(placeholder::splice(body, param, value))
            }
            Self::Bind {
                body,
            } => placeholder::substitute(body, |key| registry.get(key)).map_err(|e| match e {
                SubstituteError::Missing(missing) => GrammarError::UnresolvedFragment {
                    fragment: name.to_string(),
                    missing,
                },
                SubstituteError::Invalid {
                    line,
                    column,
                } => GrammarError::InvalidPlaceholder {
                    file: format!("fragment {name}"),
                    line,
                    column,
                },
            }),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Newline(_) => "newline",
            Self::Splice {
                ..
            } => "splice",
            Self::Bind {
                ..
            } => "bind",
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// A named fragment and the recipe that builds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentDef {
    /// Registry key; matched case-sensitively against `$NAME` in templates.
    pub name: String,
    pub recipe: Recipe,
    /// One-line description shown by `grammargen fragments`.
    pub summary: &'static str,
}

impl FragmentDef {
    pub fn new(name: impl Into<String>, recipe: Recipe) -> Self {
        Self {
            name: name.into(),
            recipe,
            summary: "",
        }
    }

    #[must_use]
    pub fn with_summary(mut self, summary: &'static str) -> Self {
        self.summary = summary;
        self
    }

    pub fn dependencies(&self) -> Vec<String> {
        self.recipe.dependencies()
    }

    /// See [`Recipe::build`].
    pub fn build(&self, registry: &Registry) -> Result<String, GrammarError> {
        self.recipe.build(&self.name, registry)
    }
}
