pub mod portfolio_api;

pub use portfolio_api::PortfolioApi;
