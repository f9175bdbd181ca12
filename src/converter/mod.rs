pub mod style;
pub mod tokenizer;

use crate::error::Result;
use crate::input::CaseInput;
use crate::Config;
use serde::{Deserialize, Serialize};
use style::{render, CaseStyle};
use tokenizer::{substitute_legacy_symbols, tokenize, SymbolHandling};
use tracing::debug;

/// How a converter reports input it cannot convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Return the error to the caller
    #[default]
    Strict,
    /// Swallow the error and produce an empty string
    Lenient,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    strictness: Strictness,
    symbols: SymbolHandling,
    legacy_kebab_symbols: bool,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            strictness: config.strictness,
            symbols: config.symbols,
            legacy_kebab_symbols: config.legacy_kebab_symbols,
        }
    }

    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn symbols(mut self, symbols: SymbolHandling) -> Self {
        self.symbols = symbols;
        self
    }

    /// Run the `A` -> `@`, `S` -> `$` pass over the raw input before kebab conversion
    pub fn legacy_kebab_symbols(mut self, enabled: bool) -> Self {
        self.legacy_kebab_symbols = enabled;
        self
    }

    pub fn convert<I: CaseInput + ?Sized>(&self, input: &I, style: CaseStyle) -> Result<String> {
        match self.try_convert(input, style) {
            Ok(out) => Ok(out),
            Err(e) if self.strictness == Strictness::Lenient => {
                debug!(%style, error = %e, "lenient conversion produced empty output");
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }

    fn try_convert<I: CaseInput + ?Sized>(&self, input: &I, style: CaseStyle) -> Result<String> {
        let text = input.as_text()?;
        let tokens = if style == CaseStyle::Kebab && self.legacy_kebab_symbols {
            tokenize(&substitute_legacy_symbols(text), self.symbols)?
        } else {
            tokenize(text, self.symbols)?
        };
        Ok(render(&tokens, style))
    }
}

/// Convert to camelCase, failing on null, blank or symbol-only input.
///
/// ```
/// assert_eq!(recase::to_camel_case("hello world-test_case").unwrap(), "helloWorldTestCase");
/// assert!(recase::to_camel_case("@@@").is_err());
/// ```
pub fn to_camel_case<I: CaseInput + ?Sized>(input: &I) -> Result<String> {
    Converter::new().convert(input, CaseStyle::Camel)
}

/// Convert to kebab-case. Input that cannot be converted yields `""`.
pub fn to_kebab_case<I: CaseInput + ?Sized>(input: &I) -> String {
    Converter::new()
        .strictness(Strictness::Lenient)
        .convert(input, CaseStyle::Kebab)
        .unwrap_or_default()
}

/// Convert to dot.case, failing on null, blank or symbol-only input.
pub fn to_dot_case<I: CaseInput + ?Sized>(input: &I) -> Result<String> {
    Converter::new().convert(input, CaseStyle::Dot)
}
