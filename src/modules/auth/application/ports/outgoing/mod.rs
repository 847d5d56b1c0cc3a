pub mod auth_api;
pub mod credential_store;

pub use auth_api::AuthApi;
pub use credential_store::{CredentialStore, CredentialStoreError};
