use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::application::ports::outgoing::{AuthApi, CredentialStore};
use crate::auth::domain::entities::{AuthResponse, AuthUser, Credentials, StoredAuth};
use crate::shared::api::ApiError;
use crate::shared::validation::ValidationErrors;

// ====================== Auth Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

// ====================== Auth Session =============================
/// Signed-in state of this client.
///
/// The token lives here and in the credential store. Failing to write the
/// store never fails a login: the session simply will not survive a restart.
pub struct AuthSession {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn CredentialStore>,
    current: Option<StoredAuth>,
}

impl AuthSession {
    pub fn new(api: Arc<dyn AuthApi>, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            api,
            store,
            current: None,
        }
    }

    /// Picks up the user saved by a previous run. Unreadable records count as signed out.
    pub async fn restore(&mut self) -> Option<&AuthUser> {
        self.current = match self.store.load().await {
            Ok(stored) => stored.filter(StoredAuth::is_usable),
            Err(err) => {
                warn!(error = %err, "Ignoring stored credentials");
                None
            }
        };
        self.user()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&AuthUser, AuthError> {
        let credentials = Credentials::new(email, password)?;
        let response = self.api.login(&credentials).await?;
        info!(user_id = response.user.id.as_str(), "Logged in");
        Ok(self.sign_in(response).await)
    }

    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<&AuthUser, AuthError> {
        let credentials = Credentials::for_registration(email, password, confirm_password)?;
        let response = self.api.register(&credentials).await?;
        info!(user_id = response.user.id.as_str(), "Registered");
        Ok(self.sign_in(response).await)
    }

    pub async fn logout(&mut self) {
        self.current = None;
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "Could not clear stored credentials");
        }
        info!("Logged out");
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.current.as_ref().map(|auth| &auth.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|auth| auth.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    async fn sign_in(&mut self, response: AuthResponse) -> &AuthUser {
        let stored = StoredAuth::from(response);
        if let Err(err) = self.store.save(&stored).await {
            warn!(error = %err, "Could not persist credentials");
        }
        &self.current.insert(stored).user
    }
}
