pub mod api_client;
pub mod error;
pub mod response;

pub use api_client::ApiClient;
pub use error::ApiError;
