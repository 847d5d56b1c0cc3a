use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

use crate::shared::validation::ValidationError;

pub const MIN_SLUG_LEN: usize = 2;

/// Path prefix of a shared portfolio: `/p/:slug`.
pub const SHARE_PATH_PREFIX: &str = "/p/";

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("slug pattern compiles"));

/// Trims, lowercases and turns every whitespace run into one hyphen.
///
/// `"  My Portfolio  "` becomes `"my-portfolio"`.
pub fn normalize_slug(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Checks an already normalized slug.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(ValidationError::SlugRequired);
    }
    if !SLUG_PATTERN.is_match(slug) {
        return Err(ValidationError::SlugInvalidCharacters);
    }
    if slug.chars().count() < MIN_SLUG_LEN {
        return Err(ValidationError::SlugTooShort { min: MIN_SLUG_LEN });
    }
    Ok(())
}

pub fn share_path(slug: &str) -> String {
    format!("{}{}", SHARE_PATH_PREFIX, slug)
}

pub fn share_url(origin: &str, slug: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), share_path(slug))
}

/// Where the slug of the portfolio to show comes from.
///
/// Precedence: route parameter, then `?slug=` query, then the configured default.
/// Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugRequest {
    pub route_param: Option<String>,
    pub query_param: Option<String>,
}

impl SlugRequest {
    /// Reads both sources from a location such as `/p/jane`, `/?slug=jane`
    /// or a full `https://host/p/jane?slug=other` URL.
    pub fn from_location(location: &str) -> Self {
        let Some(url) = parse_location(location) else {
            return Self::default();
        };

        let route_param = url.path_segments().and_then(|mut segments| {
            match (segments.next(), segments.next()) {
                (Some("p"), Some(slug)) if !slug.is_empty() => Some(decode_segment(slug)),
                _ => None,
            }
        });

        let query_param = url
            .query_pairs()
            .find(|(key, _)| key == "slug")
            .map(|(_, value)| value.into_owned())
            .filter(|s| !s.is_empty());

        Self {
            route_param,
            query_param,
        }
    }

    pub fn resolve(&self, default_slug: &str) -> String {
        non_empty(self.route_param.as_deref())
            .or_else(|| non_empty(self.query_param.as_deref()))
            .unwrap_or(default_slug)
            .to_string()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_location(location: &str) -> Option<Url> {
    let location = location.trim();
    if location.is_empty() {
        return None;
    }
    Url::parse(location).ok().or_else(|| {
        let base = Url::parse("http://local/").ok()?;
        base.join(location).ok()
    })
}

fn decode_segment(segment: &str) -> String {
    // Path segments stay percent-encoded in `Url`; `+` is literal in a path.
    String::from_utf8_lossy(&urlencoding::decode_binary(segment.as_bytes())).into_owned()
}
