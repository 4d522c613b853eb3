//! Tag tokenizer
//!
//! Splits a formula into literal text and `[name]` tags. A tag is any maximal
//! `[...]` run with at least one character and no `]` inside; there is no
//! escaping, so a name containing `]` cannot be written.

use lazy_regex::regex;
use std::fmt;

/// One segment of a formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text outside any tag, kept verbatim
    Literal(String),
    /// Variable reference, without the brackets
    Tag(String),
}

impl Token {
    /// Check if this is a tag
    pub fn is_tag(&self) -> bool {
        matches!(self, Token::Tag(_))
    }

    /// Tag name, if this is a tag
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Token::Tag(name) => Some(name),
            Token::Literal(_) => None,
        }
    }
}

impl fmt::Display for Token {
    /// Writes the token back in surface syntax
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => f.write_str(text),
            Token::Tag(name) => write!(f, "[{}]", name),
        }
    }
}

/// Split a formula into literals and tags, left to right
///
/// Empty literals (before a leading tag, after a trailing tag, between adjacent
/// tags) are not emitted, so an empty formula yields no tokens.
///
/// # Example
/// ```rust
/// use tagcalc_formula::{tokenize, Token};
///
/// let tokens = tokenize("[a] + [b]");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Tag("a".into()),
///         Token::Literal(" + ".into()),
///         Token::Tag("b".into()),
///     ]
/// );
/// ```
pub fn tokenize(formula: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in regex!(r"\[([^\]]+)\]").find_iter(formula) {
        if m.start() > last {
            tokens.push(Token::Literal(formula[last..m.start()].to_string()));
        }
        // Brackets are single-byte, so slicing them off stays on char boundaries
        let inner = &formula[m.start() + 1..m.end() - 1];
        tokens.push(Token::Tag(inner.to_string()));
        last = m.end();
    }

    if last < formula.len() {
        tokens.push(Token::Literal(formula[last..].to_string()));
    }

    tokens
}

/// Names of all tags in a formula, in order of appearance (duplicates kept)
pub fn tag_names(formula: &str) -> Vec<String> {
    tokenize(formula)
        .into_iter()
        .filter_map(|token| match token {
            Token::Tag(name) => Some(name),
            Token::Literal(_) => None,
        })
        .collect()
}
