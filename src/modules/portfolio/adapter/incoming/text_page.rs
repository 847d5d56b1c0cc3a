// src/modules/portfolio/adapter/incoming/text_page.rs

use std::fmt::Write;

use chrono::{Datelike, Utc};

use crate::portfolio::domain::entities::{LocaleDocument, Portfolio};
use crate::portfolio::domain::locale::LocaleCode;

/// Plain-text rendering of a published portfolio in one locale.
///
/// Sections follow the nav order: hero, about, skills, experience,
/// education, contact, then the footer.
pub fn render_page(portfolio: &Portfolio, locale: LocaleCode) -> String {
    render_page_for_year(portfolio, locale, Utc::now().year())
}

pub fn render_page_for_year(portfolio: &Portfolio, locale: LocaleCode, year: i32) -> String {
    let doc = portfolio.document(locale);
    let mut out = String::new();

    let nav: Vec<&str> = doc.nav_items().into_iter().map(|(_, label)| label).collect();
    let _ = writeln!(out, "{}", nav.join(" | "));
    let _ = writeln!(out);

    render_hero(&mut out, doc);
    render_about(&mut out, doc, portfolio);

    heading(&mut out, doc.skills.get("title"));
    if !portfolio.skills.is_empty() {
        let _ = writeln!(out, "{}", portfolio.skills.join(", "));
    }

    render_experience(&mut out, doc);

    heading(&mut out, doc.education.get("title"));
    for (key, value) in doc.education.iter() {
        if key != "title" && !value.is_empty() {
            let _ = writeln!(out, "{}", value);
        }
    }

    heading(&mut out, doc.contact.get("title"));
    line(&mut out, "", doc.contact.get("intro"));
    line(&mut out, doc.contact.get("email"), &portfolio.email);
    line(&mut out, doc.contact.get("phone"), &portfolio.phone);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", doc.render_footer(year));
    out
}

fn render_hero(out: &mut String, doc: &LocaleDocument) {
    let name = doc.profile.get("name");
    let _ = writeln!(out, "{} {}", doc.hero.get("greeting"), name);
    line(out, "", doc.hero.get("title"));
    line(out, "", doc.hero.get("summary"));
    line(out, "", doc.profile.get("summary"));
}

fn render_about(out: &mut String, doc: &LocaleDocument, portfolio: &Portfolio) {
    heading(out, doc.about.get("title"));
    line(out, doc.about.get("email"), &portfolio.email);
    line(out, doc.about.get("phone"), &portfolio.phone);
    line(out, doc.about.get("address"), doc.profile.get("address"));
    line(out, doc.about.get("dob"), &portfolio.dob);
}

fn render_experience(out: &mut String, doc: &LocaleDocument) {
    heading(out, doc.experience.get("title"));
    let team = doc.experience.get("team");

    for item in &doc.experiences {
        let _ = writeln!(out, "{} · {} ({})", item.role, item.company, item.period);
        for project in &item.projects {
            let _ = writeln!(out, "  - {}: {}", project.name, project.description);
            line(out, &format!("    {}", team), &project.team_size);
            if !project.responsibilities.is_empty() {
                let _ = writeln!(out, "    * {}", project.responsibilities.join("\n    * "));
            }
            if !project.tech.is_empty() {
                let _ = writeln!(out, "    [{}]", project.tech.join(", "));
            }
        }
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "== {} ==", title);
}

// Skips empty values so unfilled defaults do not print dangling labels.
fn line(out: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    if label.is_empty() {
        let _ = writeln!(out, "{}", value);
    } else {
        let _ = writeln!(out, "{}: {}", label, value);
    }
}
