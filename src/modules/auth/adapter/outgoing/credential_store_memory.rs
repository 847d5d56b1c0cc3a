use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auth::application::ports::outgoing::{CredentialStore, CredentialStoreError};
use crate::auth::domain::entities::StoredAuth;

/// Process-local store. Nothing outlives the process.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    auth: RwLock<Option<StoredAuth>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth(auth: StoredAuth) -> Self {
        Self {
            auth: RwLock::new(Some(auth)),
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn load(&self) -> Result<Option<StoredAuth>, CredentialStoreError> {
        Ok(self.auth.read().await.clone())
    }

    async fn save(&self, auth: &StoredAuth) -> Result<(), CredentialStoreError> {
        *self.auth.write().await = Some(auth.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        *self.auth.write().await = None;
        Ok(())
    }
}
