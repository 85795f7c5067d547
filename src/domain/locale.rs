// src/domain/locale.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locales the public site is served in. Public API routes carry the locale
/// as their first path segment; leads record the locale they arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Th,
    Ru,
    De,
    Zh,
}

impl Locale {
    pub const ALL: [Self; 5] = [Self::En, Self::Th, Self::Ru, Self::De, Self::Zh];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Th => "th",
            Self::Ru => "ru",
            Self::De => "de",
            Self::Zh => "zh",
        }
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        match value {
            "en" => Ok(Self::En),
            "th" => Ok(Self::Th),
            "ru" => Ok(Self::Ru),
            "de" => Ok(Self::De),
            "zh" => Ok(Self::Zh),
            other => Err(DomainError::NotFound(format!(
                "unsupported locale: {other}"
            ))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
