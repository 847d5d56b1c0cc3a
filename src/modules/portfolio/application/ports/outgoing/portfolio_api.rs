// src/modules/portfolio/application/ports/outgoing/portfolio_api.rs

use async_trait::async_trait;

use crate::portfolio::application::submission::CreateOrUpdatePayload;
use crate::portfolio::domain::entities::PortfolioRecord;
use crate::portfolio::domain::locale::LocaleCode;
use crate::shared::api::ApiError;

//
// ──────────────────────────────────────────────────────────
// Port (remote portfolio storage)
// ──────────────────────────────────────────────────────────
//
// Records come back raw; callers normalize them before use.
//

#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// Published portfolio by slug. `ApiError::NotFound` when there is none.
    async fn fetch_by_slug(
        &self,
        slug: &str,
        locale: Option<LocaleCode>,
    ) -> Result<PortfolioRecord, ApiError>;

    /// The signed-in owner's portfolio; `None` when they have not created one.
    async fn fetch_mine(
        &self,
        token: &str,
        locale: Option<LocaleCode>,
    ) -> Result<Option<PortfolioRecord>, ApiError>;

    async fn create(
        &self,
        token: &str,
        payload: &CreateOrUpdatePayload,
    ) -> Result<PortfolioRecord, ApiError>;

    async fn update(
        &self,
        token: &str,
        id: &str,
        payload: &CreateOrUpdatePayload,
    ) -> Result<PortfolioRecord, ApiError>;
}
