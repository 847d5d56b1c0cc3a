use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::portfolio::application::merge::normalize_portfolio;
use crate::portfolio::application::ports::outgoing::PortfolioApi;
use crate::portfolio::domain::entities::{LocaleDocument, Portfolio};
use crate::portfolio::domain::locale::LocaleCode;
use crate::portfolio::domain::slug::SlugRequest;
use crate::shared::api::ApiError;

// ====================== Load Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Portfolio '{slug}' not found")]
    NotFound { slug: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Fetches the published portfolio for `slug` and normalizes both locales.
pub async fn fetch_published(
    api: &dyn PortfolioApi,
    slug: &str,
    locale: LocaleCode,
) -> Result<Portfolio, LoadError> {
    match api.fetch_by_slug(slug, Some(locale)).await {
        Ok(record) => Ok(normalize_portfolio(record)),
        Err(ApiError::NotFound) => Err(LoadError::NotFound {
            slug: slug.to_string(),
        }),
        Err(err) => Err(LoadError::Api(err)),
    }
}

// ====================== Viewer =============================
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading { slug: String, locale: LocaleCode },
    Ready(Portfolio),
    NotFound { slug: String },
    Failed { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response became the current state.
    Applied,
    /// A newer load started meanwhile; the response was dropped.
    Stale,
}

/// Read-only display path for a published portfolio.
///
/// Every `load` takes a new generation number. A response is applied only
/// while its generation is still the latest one.
pub struct PortfolioViewer {
    api: Arc<dyn PortfolioApi>,
    generation: AtomicU64,
    state: RwLock<ViewState>,
}

impl PortfolioViewer {
    pub fn new(api: Arc<dyn PortfolioApi>) -> Self {
        Self {
            api,
            generation: AtomicU64::new(0),
            state: RwLock::new(ViewState::Idle),
        }
    }

    /// Resolves the slug from `location` (route, then query, then `default_slug`) and loads it.
    pub async fn load_location(
        &self,
        location: &str,
        default_slug: &str,
        locale: LocaleCode,
    ) -> LoadOutcome {
        let slug = SlugRequest::from_location(location).resolve(default_slug);
        self.load(&slug, locale).await
    }

    pub async fn load(&self, slug: &str, locale: LocaleCode) -> LoadOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.mark_loading(generation, slug, locale).await {
            debug!(slug, generation, "Superseded before the request went out");
            return LoadOutcome::Stale;
        }

        let result = fetch_published(self.api.as_ref(), slug, locale).await;

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(slug, generation, "Dropping stale portfolio response");
            return LoadOutcome::Stale;
        }

        *state = match result {
            Ok(portfolio) => {
                info!(slug, locale = %locale, "Portfolio loaded");
                ViewState::Ready(portfolio)
            }
            Err(LoadError::NotFound { slug }) => {
                info!(slug = slug.as_str(), "Portfolio not found");
                ViewState::NotFound { slug }
            }
            Err(LoadError::Api(err)) => {
                warn!(slug, error = %err, "Portfolio load failed");
                ViewState::Failed {
                    message: err.user_message(),
                }
            }
        };
        LoadOutcome::Applied
    }

    /// Shows `Loading` unless a newer load has already taken over.
    async fn mark_loading(&self, generation: u64, slug: &str, locale: LocaleCode) -> bool {
        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        *state = ViewState::Loading {
            slug: slug.to_string(),
            locale,
        };
        true
    }

    pub async fn state(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Document of the loaded portfolio for `locale`, if one is loaded.
    pub async fn document(&self, locale: LocaleCode) -> Option<LocaleDocument> {
        match &*self.state.read().await {
            ViewState::Ready(portfolio) => Some(portfolio.document(locale).clone()),
            _ => None,
        }
    }
}
