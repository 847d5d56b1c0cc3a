pub mod auth_api_http;
pub mod credential_store_file;
pub mod credential_store_memory;

pub use auth_api_http::HttpAuthApi;
pub use credential_store_file::FileCredentialStore;
pub use credential_store_memory::InMemoryCredentialStore;
