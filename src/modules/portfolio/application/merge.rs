//! Deep merge of stored locale documents onto their defaults.
//!
//! One level deep: each flat section is a key-wise union where the stored
//! value wins, `experiences` is replaced as a whole, and `footer` is taken
//! verbatim when present. Nothing here fails; a field with the wrong shape
//! keeps the base value and logs a warning. Inside `experiences` only the
//! unreadable items are dropped.

use serde_json::Value;
use tracing::warn;

use crate::portfolio::domain::defaults::default_document;
use crate::portfolio::domain::entities::{
    json_kind, ExperienceItem, LocaleDocument, Locales, PartialLocaleDocument, Portfolio,
    PortfolioRecord, SectionKind, TextSection,
};
use crate::portfolio::domain::lenient;
use crate::portfolio::domain::locale::LocaleCode;

/// Merges `incoming` onto `base`. `None` returns `base` unchanged.
pub fn merge(base: &LocaleDocument, incoming: Option<&PartialLocaleDocument>) -> LocaleDocument {
    let Some(incoming) = incoming else {
        return base.clone();
    };

    let mut merged = base.clone();

    for kind in SectionKind::ALL {
        if let Some(value) = incoming.field(kind.key()) {
            merge_section(merged.section_mut(kind), kind, value);
        }
    }

    if let Some(value) = incoming.field("experiences") {
        if let Some(experiences) = read_experiences(value) {
            merged.experiences = experiences;
        }
    }

    match incoming.field("footer") {
        Some(Value::String(footer)) => merged.footer = footer.clone(),
        Some(other) => warn!(kind = json_kind(other), "Ignoring non-string footer"),
        None => {}
    }

    for (key, value) in incoming.unknown_fields() {
        if !value.is_null() {
            merged.extra.insert(key.clone(), value.clone());
        }
    }

    merged
}

/// Merges stored content for `locale` onto that locale's default document.
pub fn merge_with_default(
    locale: LocaleCode,
    incoming: Option<&PartialLocaleDocument>,
) -> LocaleDocument {
    merge(&default_document(locale), incoming)
}

/// Turns a raw service record into a portfolio whose locales are both complete.
pub fn normalize_portfolio(record: PortfolioRecord) -> Portfolio {
    let stored = record.locales.unwrap_or_default();

    Portfolio {
        id: record.id,
        slug: record.slug,
        email: record.email,
        phone: record.phone,
        dob: record.dob,
        skills: record.skills,
        is_public: record.is_public != Some(false),
        locales: Locales {
            en: merge_with_default(LocaleCode::En, stored.get(LocaleCode::En)),
            vi: merge_with_default(LocaleCode::Vi, stored.get(LocaleCode::Vi)),
        },
    }
}

fn merge_section(target: &mut TextSection, kind: SectionKind, value: &Value) {
    let Value::Object(entries) = value else {
        warn!(
            section = kind.key(),
            kind = json_kind(value),
            "Ignoring section that is not an object"
        );
        return;
    };

    for (key, entry) in entries {
        match entry {
            Value::String(text) => target.set(key.clone(), text.clone()),
            Value::Null => {}
            other => warn!(
                section = kind.key(),
                key = key.as_str(),
                kind = json_kind(other),
                "Ignoring non-string section value"
            ),
        }
    }
}

/// `Some` for any array; elements that cannot be read as an item are skipped
/// one by one so the rest of the list survives.
fn read_experiences(value: &Value) -> Option<Vec<ExperienceItem>> {
    match value {
        Value::Array(items) => Some(lenient::read_list(items.clone())),
        other => {
            warn!(kind = json_kind(other), "Ignoring experiences that are not a list");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::submission::{build_submission, TopLevelFields};
    use crate::portfolio::domain::entities::{ExperienceProject, DOCUMENT_KEYS};
    use crate::tests::support::fixtures::portfolio_record as fixture_record;
    use serde_json::json;

    fn partial(value: Value) -> PartialLocaleDocument {
        PartialLocaleDocument::from(value)
    }

    fn customized_en() -> LocaleDocument {
        let mut doc = default_document(LocaleCode::En);
        doc.nav.set("home", "Start");
        doc.hero.set("title", "Fullstack Developer");
        doc.hero.set("summary", "Builds things.");
        doc.profile.set("name", "Nguyen Van A");
        doc.profile.set("address", "Da Nang");
        doc.about.set("title", "Who I am");
        doc.skills.set("title", "Toolbox");
        doc.experience.set("team", "Crew");
        doc.education.set("school", "HCMUT");
        doc.contact.set("intro", "Write me.");
        doc.footer = "© {{year}} Nguyen Van A".to_string();
        doc.experiences = vec![ExperienceItem {
            company: "Acme".into(),
            role: "Engineer".into(),
            period: "2020 - 2023".into(),
            projects: vec![ExperienceProject {
                name: "Billing".into(),
                description: "Invoices".into(),
                team_size: "4".into(),
                responsibilities: vec!["API".into()],
                tech: vec!["Rust".into(), "Postgres".into()],
            }],
        }];
        doc
    }

    #[test]
    fn test_absent_incoming_returns_base() {
        let base = default_document(LocaleCode::En);

        assert_eq!(merge(&base, None), base);
    }

    #[test]
    fn test_empty_object_yields_defaults() {
        let base = default_document(LocaleCode::En);

        let merged = merge(&base, Some(&partial(json!({}))));

        assert_eq!(merged, default_document(LocaleCode::En));
    }

    #[test]
    fn test_missing_sub_keys_fall_back_to_base() {
        let base = default_document(LocaleCode::En);

        let merged = merge(&base, Some(&partial(json!({"hero": {"title": "Dev"}}))));

        assert_eq!(merged.hero.get("title"), "Dev");
        assert_eq!(merged.hero.get("greeting"), "Hi, I'm");
        assert_eq!(merged.hero.get("viewExperience"), "View experience");
    }

    #[test]
    fn test_unknown_sub_keys_are_kept() {
        let base = default_document(LocaleCode::En);

        let merged = merge(
            &base,
            Some(&partial(json!({"education": {"school": "HCMUT", "gpa": "3.6"}}))),
        );

        assert_eq!(merged.education.get("title"), "Education");
        assert_eq!(merged.education.get("school"), "HCMUT");
        assert_eq!(merged.education.get("gpa"), "3.6");
    }

    #[test]
    fn test_merge_is_one_level_deep() {
        let base = default_document(LocaleCode::En);

        let merged = merge(
            &base,
            Some(&partial(json!({"about": {"title": {"nested": "x"}, "email": "Mail"}}))),
        );

        assert_eq!(merged.about.get("title"), "About");
        assert_eq!(merged.about.get("email"), "Mail");
    }

    #[test]
    fn test_removed_fields_restore_defaults_and_present_fields_survive() {
        let base = default_document(LocaleCode::En);
        let full = serde_json::to_value(customized_en()).unwrap();
        let defaults = serde_json::to_value(&base).unwrap();

        // Every subset of the document keys, from nothing removed to everything removed.
        for mask in 0u32..(1 << DOCUMENT_KEYS.len()) {
            let removed: Vec<&str> = DOCUMENT_KEYS
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, key)| *key)
                .collect();

            let mut value = full.clone();
            for key in &removed {
                value.as_object_mut().unwrap().remove(*key);
            }

            let merged = serde_json::to_value(merge(&base, Some(&partial(value)))).unwrap();

            for key in DOCUMENT_KEYS {
                let expected = if removed.contains(&key) { &defaults[key] } else { &full[key] };
                assert_eq!(&merged[key], expected, "removed {removed:?}, checking {key}");
            }
        }
    }

    #[test]
    fn test_removing_several_sections_at_once() {
        let base = default_document(LocaleCode::En);
        let mut value = serde_json::to_value(customized_en()).unwrap();
        for key in ["about", "skills", "experience", "education", "experiences"] {
            value.as_object_mut().unwrap().remove(key);
        }

        let merged = merge(&base, Some(&partial(value)));

        assert_eq!(merged.about, base.about);
        assert_eq!(merged.skills, base.skills);
        assert_eq!(merged.experience, base.experience);
        assert_eq!(merged.education, base.education);
        assert!(merged.experiences.is_empty());
        assert_eq!(merged.hero.get("title"), "Fullstack Developer");
        assert_eq!(merged.footer, "© {{year}} Nguyen Van A");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let base = default_document(LocaleCode::Vi);
        let incoming = partial(json!({
            "hero": {"title": "Kỹ sư"},
            "experiences": [{"company": "Acme"}],
            "footer": "",
            "awards": ["x"]
        }));

        let once = merge(&base, Some(&incoming));
        let twice = merge(&base, Some(&PartialLocaleDocument::from(&once)));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_experiences_replace_base_list() {
        let base = customized_en();

        let merged = merge(&base, Some(&partial(json!({"experiences": []}))));

        assert!(merged.experiences.is_empty());
    }

    #[test]
    fn test_present_experiences_replace_whole_list() {
        let base = customized_en();

        let merged = merge(
            &base,
            Some(&partial(json!({"experiences": [{"company": "Globex", "role": "CTO"}]}))),
        );

        assert_eq!(merged.experiences.len(), 1);
        assert_eq!(merged.experiences[0].company, "Globex");
        assert_eq!(merged.experiences[0].period, "");
        assert!(merged.experiences[0].projects.is_empty());
    }

    #[test]
    fn test_absent_experiences_keep_base() {
        let base = customized_en();

        let merged = merge(&base, Some(&partial(json!({"hero": {}}))));

        assert_eq!(merged.experiences, base.experiences);
    }

    #[test]
    fn test_explicit_empty_footer_wins() {
        let base = default_document(LocaleCode::En);

        let merged = merge(&base, Some(&partial(json!({"footer": ""}))));

        assert_eq!(merged.footer, "");
    }

    #[test]
    fn test_malformed_fields_degrade_to_base() {
        let base = customized_en();
        let shapes = [
            json!({"experiences": {"company": "not a list"}}),
            json!({"experiences": "nope"}),
            json!({"hero": "Dev"}),
            json!({"nav": [1, 2, 3]}),
            json!({"footer": 2026}),
            json!({"profile": {"name": 7}}),
            json!({"skills": null, "contact": true}),
        ];

        for shape in shapes {
            let merged = merge(&base, Some(&partial(shape.clone())));
            assert_eq!(merged, base, "shape {shape} changed the document");
        }
    }

    #[test]
    fn test_unreadable_experience_items_are_skipped_one_by_one() {
        let base = customized_en();

        let merged = merge(
            &base,
            Some(&partial(json!({"experiences": [
                1,
                {"company": "Globex", "period": 2021},
                "text",
                {"company": "Initech"}
            ]}))),
        );

        let companies: Vec<_> = merged.experiences.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(companies, vec!["Globex", "Initech"]);
        assert_eq!(merged.experiences[0].period, "");
    }

    #[test]
    fn test_null_sub_fields_keep_the_whole_list_through_save() {
        let mut record = fixture_record("jane");
        record.locales = serde_json::from_value::<PortfolioRecord>(json!({
            "locales": {"en": {"experiences": [
                {
                    "company": "Acme",
                    "role": "Engineer",
                    "period": "2020",
                    "projects": [{"name": "Billing", "teamSize": null}]
                },
                {"company": "Globex", "role": "CTO", "period": null, "projects": null}
            ]}}
        }))
        .unwrap()
        .locales;

        let portfolio = normalize_portfolio(record);
        assert_eq!(portfolio.locales.en.experiences.len(), 2);
        assert_eq!(portfolio.locales.en.experiences[0].projects[0].team_size, "");
        assert!(portfolio.locales.en.experiences[1].projects.is_empty());

        let payload = build_submission(
            &TopLevelFields::from_portfolio(&portfolio),
            &portfolio.locales.en,
            &portfolio.locales.vi,
        )
        .unwrap();
        assert_eq!(payload.locales.en.experiences.len(), 2);
        assert_eq!(payload.locales.en.experiences[1].company, "Globex");
    }

    #[test]
    fn test_non_object_document_is_treated_as_empty() {
        let base = default_document(LocaleCode::En);

        for value in [json!(null), json!(42), json!("text"), json!([1, 2])] {
            assert_eq!(merge(&base, Some(&partial(value))), base);
        }
    }

    #[test]
    fn test_unknown_top_level_fields_are_carried() {
        let base = default_document(LocaleCode::En);

        let merged = merge(&base, Some(&partial(json!({"awards": ["Best talk"]}))));

        assert_eq!(merged.extra.get("awards"), Some(&json!(["Best talk"])));
    }

    #[test]
    fn test_normalize_portfolio_fills_both_locales() {
        let record: PortfolioRecord = serde_json::from_value(json!({
            "id": "p1",
            "slug": "jane",
            "email": "jane@example.com",
            "locales": {"en": {"profile": {"name": "Jane"}}}
        }))
        .unwrap();

        let portfolio = normalize_portfolio(record);

        assert!(portfolio.is_public);
        assert_eq!(portfolio.locales.en.profile.get("name"), "Jane");
        assert_eq!(portfolio.locales.en.nav.get("home"), "Home");
        assert_eq!(portfolio.locales.vi, default_document(LocaleCode::Vi));
    }

    #[test]
    fn test_normalize_portfolio_respects_explicit_private() {
        let record = PortfolioRecord {
            is_public: Some(false),
            ..Default::default()
        };

        let portfolio = normalize_portfolio(record);

        assert!(!portfolio.is_public);
        assert_eq!(portfolio.locales.en, default_document(LocaleCode::En));
    }
}
