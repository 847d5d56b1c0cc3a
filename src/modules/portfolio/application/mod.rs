pub mod editor;
pub mod merge;
pub mod ports;
pub mod submission;
pub mod use_cases;

pub use merge::{merge, normalize_portfolio};
pub use submission::{build_submission, CreateOrUpdatePayload, TopLevelFields};
