use async_trait::async_trait;

use crate::auth::domain::entities::{AuthResponse, Credentials};
use crate::shared::api::ApiError;

/// External token issuer.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;

    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;
}
