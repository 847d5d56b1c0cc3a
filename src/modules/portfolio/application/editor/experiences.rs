use crate::portfolio::domain::entities::{ExperienceItem, ExperienceProject};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("No {list} at position {index} (list has {len})")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },
}

// ============================ Experiences =============================

/// Appends an empty experience.
pub fn add_experience(experiences: &[ExperienceItem]) -> Vec<ExperienceItem> {
    let mut next = experiences.to_vec();
    next.push(ExperienceItem::default());
    next
}

pub fn update_experience(
    experiences: &[ExperienceItem],
    index: usize,
    item: ExperienceItem,
) -> Result<Vec<ExperienceItem>, EditorError> {
    check_index("experience", index, experiences.len())?;

    let mut next = experiences.to_vec();
    next[index] = item;
    Ok(next)
}

/// Removes one experience; later items shift down one position.
pub fn remove_experience(
    experiences: &[ExperienceItem],
    index: usize,
) -> Result<Vec<ExperienceItem>, EditorError> {
    check_index("experience", index, experiences.len())?;

    let mut next = experiences.to_vec();
    next.remove(index);
    Ok(next)
}

// ============================ Projects =============================

/// Appends an empty project to the experience at `exp`.
pub fn add_project(
    experiences: &[ExperienceItem],
    exp: usize,
) -> Result<Vec<ExperienceItem>, EditorError> {
    with_projects(experiences, exp, |projects| {
        projects.push(ExperienceProject::default());
        Ok(())
    })
}

pub fn update_project(
    experiences: &[ExperienceItem],
    exp: usize,
    proj: usize,
    project: ExperienceProject,
) -> Result<Vec<ExperienceItem>, EditorError> {
    with_projects(experiences, exp, |projects| {
        check_index("project", proj, projects.len())?;
        projects[proj] = project;
        Ok(())
    })
}

pub fn remove_project(
    experiences: &[ExperienceItem],
    exp: usize,
    proj: usize,
) -> Result<Vec<ExperienceItem>, EditorError> {
    with_projects(experiences, exp, |projects| {
        check_index("project", proj, projects.len())?;
        projects.remove(proj);
        Ok(())
    })
}

fn with_projects<F>(
    experiences: &[ExperienceItem],
    exp: usize,
    edit: F,
) -> Result<Vec<ExperienceItem>, EditorError>
where
    F: FnOnce(&mut Vec<ExperienceProject>) -> Result<(), EditorError>,
{
    check_index("experience", exp, experiences.len())?;

    let mut next = experiences.to_vec();
    edit(&mut next[exp].projects)?;
    Ok(next)
}

fn check_index(list: &'static str, index: usize, len: usize) -> Result<(), EditorError> {
    if index < len {
        Ok(())
    } else {
        Err(EditorError::IndexOutOfRange { list, index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(company: &str) -> ExperienceItem {
        ExperienceItem {
            company: company.to_string(),
            ..Default::default()
        }
    }

    fn project(name: &str) -> ExperienceProject {
        ExperienceProject {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn two_jobs() -> Vec<ExperienceItem> {
        vec![
            ExperienceItem {
                projects: vec![project("Billing"), project("Search")],
                ..job("Acme")
            },
            job("Globex"),
        ]
    }

    #[test]
    fn test_add_then_remove_first_shifts_items() {
        let start = two_jobs();

        let added = add_experience(&start);
        assert_eq!(added.len(), 3);
        assert_eq!(added[2], ExperienceItem::default());

        let removed = remove_experience(&added, 0).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0], start[1]);
        assert_eq!(removed[1], ExperienceItem::default());
    }

    #[test]
    fn test_update_experience_replaces_only_target() {
        let start = two_jobs();

        let next = update_experience(&start, 1, job("Initech")).unwrap();

        assert_eq!(next[0], start[0]);
        assert_eq!(next[1].company, "Initech");
    }

    #[test]
    fn test_index_equal_to_length_is_rejected() {
        let start = two_jobs();

        assert_eq!(
            update_experience(&start, 2, job("Late")),
            Err(EditorError::IndexOutOfRange {
                list: "experience",
                index: 2,
                len: 2
            })
        );
        assert!(remove_experience(&start, 2).is_err());
        assert!(remove_experience(&[], 0).is_err());
        assert_eq!(start, two_jobs());
    }

    #[test]
    fn test_add_project_appends_to_target_experience() {
        let start = two_jobs();

        let next = add_project(&start, 1).unwrap();

        assert_eq!(next[1].projects, vec![ExperienceProject::default()]);
        assert_eq!(next[0].projects, start[0].projects);
    }

    #[test]
    fn test_update_and_remove_project() {
        let start = two_jobs();

        let updated = update_project(&start, 0, 1, project("Search v2")).unwrap();
        assert_eq!(updated[0].projects[1].name, "Search v2");

        let removed = remove_project(&updated, 0, 0).unwrap();
        assert_eq!(removed[0].projects, vec![project("Search v2")]);
    }

    #[test]
    fn test_project_index_errors_name_the_list() {
        let start = two_jobs();

        assert_eq!(
            remove_project(&start, 0, 2),
            Err(EditorError::IndexOutOfRange {
                list: "project",
                index: 2,
                len: 2
            })
        );
        assert_eq!(
            add_project(&start, 5),
            Err(EditorError::IndexOutOfRange {
                list: "experience",
                index: 5,
                len: 2
            })
        );
    }

    #[test]
    fn test_error_message() {
        let err = EditorError::IndexOutOfRange {
            list: "project",
            index: 3,
            len: 1,
        };

        assert_eq!(err.to_string(), "No project at position 3 (list has 1)");
    }
}
