use async_trait::async_trait;

use crate::auth::domain::entities::StoredAuth;

/// Errors that can occur while persisting credentials
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialStoreError {
    #[error("Credential storage failed: {0}")]
    Io(String),

    #[error("Stored credentials are unreadable: {0}")]
    Corrupt(String),
}

/// Credential store port: keeps the signed-in user across sessions.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> Result<Option<StoredAuth>, CredentialStoreError>;

    async fn save(&self, auth: &StoredAuth) -> Result<(), CredentialStoreError>;

    /// Forget the stored user. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), CredentialStoreError>;

    /// Bearer token of the stored user, if any.
    async fn get_token(&self) -> Result<Option<String>, CredentialStoreError> {
        Ok(self
            .load()
            .await?
            .filter(StoredAuth::is_usable)
            .map(|auth| auth.token))
    }
}
