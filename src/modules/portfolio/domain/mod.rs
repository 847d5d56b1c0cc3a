pub mod defaults;
pub mod entities;
pub(crate) mod lenient;
pub mod locale;
pub mod slug;

pub use defaults::default_document;
pub use entities::{
    ExperienceItem, ExperienceProject, LocaleDocument, Locales, PartialLocaleDocument, Portfolio,
    PortfolioRecord, SectionKind, TextSection,
};
pub use locale::LocaleCode;
