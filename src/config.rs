use crate::converter::tokenizer::SymbolHandling;
use crate::converter::{Converter, Strictness};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where this code lives; fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub name: String,
    pub owner: String,
    pub current_branch: String,
    pub default_branch: String,
}

pub const REPOSITORY_NAME: &str = "Anythink-Market-wivrt3v6";
pub const REPOSITORY_OWNER: &str = "Wilcolab";
pub const DEFAULT_BRANCH: &str = "main";

impl Default for RepositoryInfo {
    fn default() -> Self {
        Self {
            name: REPOSITORY_NAME.to_string(),
            owner: REPOSITORY_OWNER.to_string(),
            current_branch: DEFAULT_BRANCH.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl RepositoryInfo {
    pub fn on_default_branch(&self) -> bool {
        self.current_branch == self.default_branch
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub strictness: Strictness,

    #[serde(default)]
    pub symbols: SymbolHandling,

    #[serde(default)]
    pub legacy_kebab_symbols: bool,

    #[serde(default)]
    pub repository: RepositoryInfo,
}

impl Config {
    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse recase configuration")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize recase configuration")
    }

    pub fn converter(&self) -> Converter {
        Converter::from_config(self)
    }
}
