use std::collections::BTreeMap;

use crate::portfolio::domain::entities::{LocaleDocument, TextSection, NAV_KEYS};
use crate::portfolio::domain::locale::LocaleCode;

const DEFAULT_FOOTER: &str = "© {{year}}";

/// Labels that differ between languages. Structure is shared.
struct Labels {
    nav: [&'static str; 6],
    about: [&'static str; 5],
    skills: &'static str,
    experience: &'static str,
    education: &'static str,
    contact: &'static str,
    contact_phone: &'static str,
}

const EN: Labels = Labels {
    nav: ["Home", "About", "Skills", "Experience", "Education", "Contact"],
    about: ["About", "Email", "Phone", "Address", "Date of birth"],
    skills: "Skills",
    experience: "Experience",
    education: "Education",
    contact: "Contact",
    contact_phone: "Phone",
};

const VI: Labels = Labels {
    nav: [
        "Trang chủ",
        "Giới thiệu",
        "Kỹ năng",
        "Kinh nghiệm",
        "Học vấn",
        "Liên hệ",
    ],
    about: ["Giới thiệu", "Email", "Điện thoại", "Địa chỉ", "Ngày sinh"],
    skills: "Kỹ năng",
    experience: "Kinh nghiệm",
    education: "Học vấn",
    contact: "Liên hệ",
    contact_phone: "Điện thoại",
};

/// Fully populated document for `locale`. Every key a page reads has a value.
pub fn default_document(locale: LocaleCode) -> LocaleDocument {
    let labels = match locale {
        LocaleCode::En => &EN,
        LocaleCode::Vi => &VI,
    };

    LocaleDocument {
        nav: TextSection::from_pairs(NAV_KEYS.into_iter().zip(labels.nav)),
        // Hero copy is shared; the editor fills in title and summary.
        hero: TextSection::from_pairs([
            ("greeting", "Hi, I'm"),
            ("title", ""),
            ("summary", ""),
            ("contact", "Contact"),
            ("viewExperience", "View experience"),
        ]),
        profile: TextSection::from_pairs([("name", ""), ("summary", ""), ("address", "")]),
        about: TextSection::from_pairs(
            ["title", "email", "phone", "address", "dob"]
                .into_iter()
                .zip(labels.about),
        ),
        skills: TextSection::from_pairs([("title", labels.skills)]),
        experience: TextSection::from_pairs([("title", labels.experience), ("team", "Team")]),
        experiences: Vec::new(),
        education: TextSection::from_pairs([("title", labels.education)]),
        contact: TextSection::from_pairs([
            ("title", labels.contact),
            ("intro", ""),
            ("email", "Email"),
            ("phone", labels.contact_phone),
        ]),
        footer: DEFAULT_FOOTER.to_string(),
        extra: BTreeMap::new(),
    }
}
