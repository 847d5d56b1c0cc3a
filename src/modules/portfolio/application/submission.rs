use email_address::EmailAddress;
use serde::Serialize;

use crate::portfolio::domain::entities::{LocaleDocument, Locales, Portfolio};
use crate::portfolio::domain::slug::{normalize_slug, validate_slug};
use crate::shared::validation::{ValidationError, ValidationErrors};

/// Editable top-level fields of a portfolio, as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopLevelFields {
    pub slug: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub skills: Vec<String>,
    /// `None` means the owner never touched the toggle.
    pub is_public: Option<bool>,
}

impl TopLevelFields {
    pub fn from_portfolio(portfolio: &Portfolio) -> Self {
        Self {
            slug: portfolio.slug.clone(),
            email: portfolio.email.clone(),
            phone: portfolio.phone.clone(),
            dob: portfolio.dob.clone(),
            skills: portfolio.skills.clone(),
            is_public: Some(portfolio.is_public),
        }
    }
}

/// Body of `POST /portfolios` and `PUT /portfolios/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrUpdatePayload {
    pub slug: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub skills: Vec<String>,
    pub is_public: bool,
    pub locales: Locales,
}

/// Validates the form and packs both locale documents into one payload.
///
/// Every failing field is reported, not only the first.
pub fn build_submission(
    fields: &TopLevelFields,
    en: &LocaleDocument,
    vi: &LocaleDocument,
) -> Result<CreateOrUpdatePayload, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let slug = normalize_slug(&fields.slug);
    if let Err(err) = validate_slug(&slug) {
        errors.push(err);
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.push(ValidationError::MissingField { field: "email" });
    } else if !EmailAddress::is_valid(email) {
        errors.push(ValidationError::InvalidEmail);
    }

    let phone = fields.phone.trim();
    if phone.is_empty() {
        errors.push(ValidationError::MissingField { field: "phone" });
    }

    let dob = fields.dob.trim();
    if dob.is_empty() {
        errors.push(ValidationError::MissingField { field: "dob" });
    }

    errors.into_result(CreateOrUpdatePayload {
        slug,
        email: email.to_string(),
        phone: phone.to_string(),
        dob: dob.to_string(),
        skills: fields.skills.clone(),
        is_public: fields.is_public != Some(false),
        locales: Locales {
            en: en.clone(),
            vi: vi.clone(),
        },
    })
}
