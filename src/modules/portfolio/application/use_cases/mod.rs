pub mod edit_session;
pub mod view_portfolio;

pub use edit_session::{EditBuffer, EditSession, SaveError};
pub use view_portfolio::{fetch_published, LoadError, LoadOutcome, PortfolioViewer, ViewState};
