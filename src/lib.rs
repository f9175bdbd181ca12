//! Convert free-form text to camelCase, kebab-case and dot.case.

pub mod config;
pub mod converter;
pub mod error;
pub mod input;

pub use config::{Config, RepositoryInfo};
pub use converter::style::{render, CaseStyle};
pub use converter::tokenizer::{substitute_legacy_symbols, tokenize, SymbolHandling};
pub use converter::{to_camel_case, to_dot_case, to_kebab_case, Converter, Strictness};
pub use error::CaseError;
pub use input::CaseInput;
