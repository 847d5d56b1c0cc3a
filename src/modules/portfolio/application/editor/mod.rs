pub mod experiences;
pub mod locale_editor;
pub mod tags;

pub use experiences::{
    add_experience, add_project, remove_experience, remove_project, update_experience,
    update_project, EditorError,
};
pub use locale_editor::{LocaleEditor, TagList};
pub use tags::{add_tags, remove_tag};
