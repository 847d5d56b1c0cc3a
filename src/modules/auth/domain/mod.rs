pub mod entities;

pub use entities::{AuthResponse, AuthUser, Credentials, StoredAuth};
