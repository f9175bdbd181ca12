use crate::error::{CaseError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

lazy_static! {
    // Runs of whitespace, hyphens and underscores delimit words
    static ref SEPARATORS: Regex = Regex::new(r"[\s\-_]+").unwrap();
    static ref ALPHANUMERIC_RUN: Regex = Regex::new(r"[A-Za-z0-9]+").unwrap();
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^A-Za-z0-9]").unwrap();
}

/// What happens to symbols found inside a separator-delimited piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolHandling {
    /// A symbol ends the current word: `hello@world` -> `hello`, `world`
    #[default]
    Boundary,
    /// Symbols are dropped and the rest is glued together: `hello@world` -> `helloworld`
    Strip,
}

/// Split text into ASCII-alphanumeric words.
pub fn tokenize(input: &str, symbols: SymbolHandling) -> Result<Vec<String>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CaseError::EmptyInput);
    }

    let mut tokens = Vec::new();
    for piece in SEPARATORS.split(trimmed).filter(|p| !p.is_empty()) {
        match symbols {
            SymbolHandling::Boundary => {
                tokens.extend(ALPHANUMERIC_RUN.find_iter(piece).map(|m| m.as_str().to_string()));
            }
            SymbolHandling::Strip => {
                let cleaned = NON_ALPHANUMERIC.replace_all(piece, "");
                if !cleaned.is_empty() {
                    tokens.push(cleaned.into_owned());
                }
            }
        }
    }

    if tokens.is_empty() {
        return Err(CaseError::NoAlphanumericContent);
    }

    trace!(?tokens, "tokenized input");
    Ok(tokens)
}

/// Replace every uppercase `A` with `@` and every uppercase `S` with `$`.
///
/// Older kebab-case callers relied on this pass running over the raw input
/// before any splitting. Both symbols are later treated like any other
/// non-alphanumeric character by [`tokenize`].
pub fn substitute_legacy_symbols(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            'A' => '@',
            'S' => '$',
            other => other,
        })
        .collect()
}
