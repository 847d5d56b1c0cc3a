use tracing::{debug, warn};

use crate::portfolio::application::editor::experiences::{self, EditorError};
use crate::portfolio::application::editor::tags;
use crate::portfolio::domain::entities::{
    ExperienceItem, ExperienceProject, LocaleDocument, SectionKind,
};
use crate::portfolio::domain::locale::LocaleCode;

/// Which string list of a project a tag operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagList {
    Responsibilities,
    Tech,
}

impl TagList {
    fn select(self, project: &mut ExperienceProject) -> &mut Vec<String> {
        match self {
            TagList::Responsibilities => &mut project.responsibilities,
            TagList::Tech => &mut project.tech,
        }
    }
}

/// Edits one locale of the session buffer in place.
///
/// List operations return `false` and leave the buffer untouched when an
/// index is out of range.
pub struct LocaleEditor<'a> {
    locale: LocaleCode,
    document: &'a mut LocaleDocument,
}

impl<'a> LocaleEditor<'a> {
    pub fn new(locale: LocaleCode, document: &'a mut LocaleDocument) -> Self {
        Self { locale, document }
    }

    pub fn locale(&self) -> LocaleCode {
        self.locale
    }

    pub fn document(&self) -> &LocaleDocument {
        self.document
    }

    /// Sets one key of a flat section, e.g. `(Profile, "name")`.
    pub fn set_field(&mut self, section: SectionKind, key: &str, value: impl Into<String>) {
        self.document.section_mut(section).set(key, value);
    }

    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.document.footer = footer.into();
    }

    pub fn add_experience(&mut self) {
        self.document.experiences = experiences::add_experience(&self.document.experiences);
        debug!(locale = %self.locale, count = self.document.experiences.len(), "Experience added");
    }

    pub fn update_experience(&mut self, index: usize, item: ExperienceItem) -> bool {
        let result = experiences::update_experience(&self.document.experiences, index, item);
        self.apply(result)
    }

    pub fn remove_experience(&mut self, index: usize) -> bool {
        let result = experiences::remove_experience(&self.document.experiences, index);
        self.apply(result)
    }

    pub fn add_project(&mut self, exp: usize) -> bool {
        let result = experiences::add_project(&self.document.experiences, exp);
        self.apply(result)
    }

    pub fn update_project(&mut self, exp: usize, proj: usize, project: ExperienceProject) -> bool {
        let result = experiences::update_project(&self.document.experiences, exp, proj, project);
        self.apply(result)
    }

    pub fn remove_project(&mut self, exp: usize, proj: usize) -> bool {
        let result = experiences::remove_project(&self.document.experiences, exp, proj);
        self.apply(result)
    }

    pub fn add_project_tags(&mut self, exp: usize, proj: usize, list: TagList, input: &str) -> bool {
        self.edit_project_tags(exp, proj, list, |current| Ok(tags::add_tags(current, input)))
    }

    pub fn remove_project_tag(&mut self, exp: usize, proj: usize, list: TagList, index: usize) -> bool {
        self.edit_project_tags(exp, proj, list, |current| tags::remove_tag(current, index))
    }

    fn edit_project_tags<F>(&mut self, exp: usize, proj: usize, list: TagList, edit: F) -> bool
    where
        F: FnOnce(&[String]) -> Result<Vec<String>, EditorError>,
    {
        let Some(project) = self.project(exp, proj) else {
            return false;
        };

        let mut project = project.clone();
        let target = list.select(&mut project);
        match edit(target.as_slice()) {
            Ok(next) => *target = next,
            Err(err) => {
                warn!(locale = %self.locale, error = %err, "Ignoring tag edit");
                return false;
            }
        }

        self.update_project(exp, proj, project)
    }

    fn project(&self, exp: usize, proj: usize) -> Option<&ExperienceProject> {
        let found = self
            .document
            .experiences
            .get(exp)
            .and_then(|item| item.projects.get(proj));

        if found.is_none() {
            warn!(locale = %self.locale, exp, proj, "Ignoring tag edit on a missing project");
        }
        found
    }

    fn apply(&mut self, result: Result<Vec<ExperienceItem>, EditorError>) -> bool {
        match result {
            Ok(next) => {
                self.document.experiences = next;
                true
            }
            Err(err) => {
                warn!(locale = %self.locale, error = %err, "Ignoring experience edit");
                false
            }
        }
    }
}
