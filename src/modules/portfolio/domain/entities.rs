use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::portfolio::domain::lenient;
use crate::portfolio::domain::locale::LocaleCode;

/// Nav keys, in the order sections appear on the page.
pub const NAV_KEYS: [&str; 6] = [
    "home",
    "about",
    "skills",
    "experience",
    "education",
    "contact",
];

pub const FOOTER_YEAR_PLACEHOLDER: &str = "{{year}}";

/// The flat string sections of a locale document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Nav,
    Hero,
    Profile,
    About,
    Skills,
    Experience,
    Education,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Nav,
        SectionKind::Hero,
        SectionKind::Profile,
        SectionKind::About,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Contact,
    ];

    /// Key of the section in the JSON document.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Nav => "nav",
            SectionKind::Hero => "hero",
            SectionKind::Profile => "profile",
            SectionKind::About => "about",
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Contact => "contact",
        }
    }
}

/// Every first-level key a locale document owns.
pub const DOCUMENT_KEYS: [&str; 10] = [
    "nav",
    "hero",
    "profile",
    "about",
    "skills",
    "experience",
    "experiences",
    "education",
    "contact",
    "footer",
];

/// A "soft" section: string keys to string values, every key optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextSection(BTreeMap<String, String>);

impl TextSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Value for `key`, or `""` when the key is absent.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceProject {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub team_size: String,
    #[serde(deserialize_with = "lenient::list")]
    pub responsibilities: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub tech: Vec<String>,
}

/// One job. Identified by its position in the list, nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceItem {
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(deserialize_with = "lenient::string")]
    pub period: String,
    #[serde(deserialize_with = "lenient::list")]
    pub projects: Vec<ExperienceProject>,
}

/// All displayable content for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleDocument {
    pub nav: TextSection,
    pub hero: TextSection,
    pub profile: TextSection,
    pub about: TextSection,
    pub skills: TextSection,
    pub experience: TextSection,
    pub experiences: Vec<ExperienceItem>,
    pub education: TextSection,
    pub contact: TextSection,
    /// Template with a `{{year}}` placeholder.
    pub footer: String,
    /// Top-level keys this client does not know about, carried through as is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl LocaleDocument {
    pub fn section(&self, kind: SectionKind) -> &TextSection {
        match kind {
            SectionKind::Nav => &self.nav,
            SectionKind::Hero => &self.hero,
            SectionKind::Profile => &self.profile,
            SectionKind::About => &self.about,
            SectionKind::Skills => &self.skills,
            SectionKind::Experience => &self.experience,
            SectionKind::Education => &self.education,
            SectionKind::Contact => &self.contact,
        }
    }

    pub fn section_mut(&mut self, kind: SectionKind) -> &mut TextSection {
        match kind {
            SectionKind::Nav => &mut self.nav,
            SectionKind::Hero => &mut self.hero,
            SectionKind::Profile => &mut self.profile,
            SectionKind::About => &mut self.about,
            SectionKind::Skills => &mut self.skills,
            SectionKind::Experience => &mut self.experience,
            SectionKind::Education => &mut self.education,
            SectionKind::Contact => &mut self.contact,
        }
    }

    pub fn render_footer(&self, year: i32) -> String {
        self.footer
            .replace(FOOTER_YEAR_PLACEHOLDER, &year.to_string())
    }

    /// Nav labels in page order.
    pub fn nav_items(&self) -> Vec<(&'static str, &str)> {
        NAV_KEYS.iter().map(|key| (*key, self.nav.get(key))).collect()
    }
}

/// A locale document as it arrives from storage: any JSON at all.
///
/// Only the merge engine reads it, and only through [`field`](Self::field).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct PartialLocaleDocument {
    fields: Map<String, Value>,
}

impl PartialLocaleDocument {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Raw value of a first-level key; `null` reads as absent.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// First-level keys outside [`DOCUMENT_KEYS`].
    pub fn unknown_fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields
            .iter()
            .filter(|(key, _)| !DOCUMENT_KEYS.contains(&key.as_str()))
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

impl From<Value> for PartialLocaleDocument {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            Value::Null => Self::empty(),
            other => {
                warn!(kind = json_kind(&other), "Locale document is not an object, ignoring it");
                Self::empty()
            }
        }
    }
}

impl From<&LocaleDocument> for PartialLocaleDocument {
    fn from(document: &LocaleDocument) -> Self {
        serde_json::to_value(document)
            .map(Self::from)
            .unwrap_or_default()
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Both locale documents of a portfolio. Always holds `en` and `vi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locales {
    pub en: LocaleDocument,
    pub vi: LocaleDocument,
}

impl Locales {
    pub fn get(&self, locale: LocaleCode) -> &LocaleDocument {
        match locale {
            LocaleCode::En => &self.en,
            LocaleCode::Vi => &self.vi,
        }
    }

    pub fn get_mut(&mut self, locale: LocaleCode) -> &mut LocaleDocument {
        match locale {
            LocaleCode::En => &mut self.en,
            LocaleCode::Vi => &mut self.vi,
        }
    }
}

/// Normalized aggregate: both locales merged against their defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub slug: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub skills: Vec<String>,
    pub is_public: bool,
    pub locales: Locales,
}

impl Portfolio {
    pub fn document(&self, locale: LocaleCode) -> &LocaleDocument {
        self.locales.get(locale)
    }
}

/// A portfolio exactly as the service returns it, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub dob: String,
    #[serde(deserialize_with = "lenient::list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_public: Option<bool>,
    #[serde(deserialize_with = "record_locales")]
    pub locales: Option<RecordLocales>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordLocales {
    pub en: Option<PartialLocaleDocument>,
    pub vi: Option<PartialLocaleDocument>,
}

impl RecordLocales {
    pub fn get(&self, locale: LocaleCode) -> Option<&PartialLocaleDocument> {
        match locale {
            LocaleCode::En => self.en.as_ref(),
            LocaleCode::Vi => self.vi.as_ref(),
        }
    }
}

fn take_locale(locales: &mut Map<String, Value>, code: &str) -> Option<PartialLocaleDocument> {
    locales
        .remove(code)
        .filter(|value| !value.is_null())
        .map(PartialLocaleDocument::from)
}

/// `locales` that is not an object reads as absent, so both locales fall back to defaults.
fn record_locales<'de, D>(deserializer: D) -> Result<Option<RecordLocales>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(mut locales) => Some(RecordLocales {
            en: take_locale(&mut locales, "en"),
            vi: take_locale(&mut locales, "vi"),
        }),
        Value::Null => None,
        other => {
            warn!(kind = json_kind(&other), "Ignoring locales that are not an object");
            None
        }
    })
}
