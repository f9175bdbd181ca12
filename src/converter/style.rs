use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Camel,
    Kebab,
    Dot,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 3] = [CaseStyle::Camel, CaseStyle::Kebab, CaseStyle::Dot];

    /// Joiner placed between words, if any
    pub fn separator(self) -> Option<&'static str> {
        match self {
            CaseStyle::Camel => None,
            CaseStyle::Kebab => Some("-"),
            CaseStyle::Dot => Some("."),
        }
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dot" | "dot.case" | "dotcase" => Ok(CaseStyle::Dot),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Camel => write!(f, "camel"),
            CaseStyle::Kebab => write!(f, "kebab"),
            CaseStyle::Dot => write!(f, "dot"),
        }
    }
}

/// Reassemble words in the given style.
pub fn render<S: AsRef<str>>(tokens: &[S], style: CaseStyle) -> String {
    match style.separator() {
        Some(sep) => tokens
            .iter()
            .map(|t| t.as_ref().to_lowercase())
            .collect::<Vec<_>>()
            .join(sep),
        None => {
            let mut out = String::new();
            for (i, token) in tokens.iter().enumerate() {
                let token = token.as_ref();
                if i == 0 {
                    out.push_str(&token.to_lowercase());
                } else {
                    out.push_str(&capitalize(token));
                }
            }
            out
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
