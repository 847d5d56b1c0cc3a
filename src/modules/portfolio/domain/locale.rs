use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Content languages a portfolio is authored in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    #[default]
    En,
    Vi,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale '{0}' (expected 'en' or 'vi')")]
pub struct UnknownLocale(pub String);

impl LocaleCode {
    pub const ALL: [LocaleCode; 2] = [LocaleCode::En, LocaleCode::Vi];

    pub fn as_str(self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::Vi => "vi",
        }
    }

    /// Maps an interface language tag (`vi-VN`, `vn`, `en-US`, ...) onto a
    /// content locale. Anything that is not Vietnamese reads as English.
    pub fn from_language_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        if tag.starts_with("vi") || tag == "vn" {
            LocaleCode::Vi
        } else {
            LocaleCode::En
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocaleCode {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(LocaleCode::En),
            "vi" => Ok(LocaleCode::Vi),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}
