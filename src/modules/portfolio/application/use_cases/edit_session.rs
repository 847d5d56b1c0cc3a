use std::sync::Arc;

use tracing::{info, warn};

use crate::portfolio::application::editor::{add_tags, remove_tag, LocaleEditor};
use crate::portfolio::application::merge::normalize_portfolio;
use crate::portfolio::application::ports::outgoing::PortfolioApi;
use crate::portfolio::application::submission::{
    build_submission, CreateOrUpdatePayload, TopLevelFields,
};
use crate::portfolio::domain::defaults::default_document;
use crate::portfolio::domain::entities::{LocaleDocument, Portfolio, PortfolioRecord};
use crate::portfolio::domain::locale::LocaleCode;
use crate::portfolio::domain::slug::share_url;
use crate::shared::api::ApiError;
use crate::shared::validation::ValidationErrors;

// ====================== Save Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("Please fix the highlighted fields ({0})")]
    Validation(#[from] ValidationErrors),

    #[error("No existing portfolio to update")]
    NoExistingPortfolio,

    #[error("This account already has a portfolio")]
    PortfolioAlreadyExists,

    #[error(transparent)]
    Api(#[from] ApiError),
}

// ====================== Edit Buffer =============================
/// Local working copy of everything the form can change.
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    pub fields: TopLevelFields,
    pub en: LocaleDocument,
    pub vi: LocaleDocument,
}

impl EditBuffer {
    /// Buffer for an owner who has no portfolio yet.
    pub fn blank() -> Self {
        Self {
            fields: TopLevelFields::default(),
            en: default_document(LocaleCode::En),
            vi: default_document(LocaleCode::Vi),
        }
    }

    pub fn from_portfolio(portfolio: &Portfolio) -> Self {
        Self {
            fields: TopLevelFields::from_portfolio(portfolio),
            en: portfolio.locales.en.clone(),
            vi: portfolio.locales.vi.clone(),
        }
    }

    pub fn document(&self, locale: LocaleCode) -> &LocaleDocument {
        match locale {
            LocaleCode::En => &self.en,
            LocaleCode::Vi => &self.vi,
        }
    }

    fn document_mut(&mut self, locale: LocaleCode) -> &mut LocaleDocument {
        match locale {
            LocaleCode::En => &mut self.en,
            LocaleCode::Vi => &mut self.vi,
        }
    }
}

// ====================== Edit Session =============================
/// An owner editing their own portfolio.
///
/// Holds two copies: the last saved aggregate and the buffer the editors
/// mutate. Only a successful save or create replaces both.
pub struct EditSession {
    api: Arc<dyn PortfolioApi>,
    token: String,
    saved: Option<Portfolio>,
    buffer: EditBuffer,
}

impl EditSession {
    /// Loads the owner's portfolio, or starts from the defaults when there is none.
    pub async fn open(
        api: Arc<dyn PortfolioApi>,
        token: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let token = token.into();
        let saved = api.fetch_mine(&token, None).await?.map(normalize_portfolio);

        match &saved {
            Some(portfolio) => info!(slug = portfolio.slug.as_str(), "Editing existing portfolio"),
            None => info!("No portfolio yet, starting from defaults"),
        }

        let buffer = saved
            .as_ref()
            .map(EditBuffer::from_portfolio)
            .unwrap_or_else(EditBuffer::blank);

        Ok(Self {
            api,
            token,
            saved,
            buffer,
        })
    }

    pub fn saved(&self) -> Option<&Portfolio> {
        self.saved.as_ref()
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn fields_mut(&mut self) -> &mut TopLevelFields {
        &mut self.buffer.fields
    }

    pub fn editor(&mut self, locale: LocaleCode) -> LocaleEditor<'_> {
        LocaleEditor::new(locale, self.buffer.document_mut(locale))
    }

    pub fn add_skills(&mut self, input: &str) {
        self.buffer.fields.skills = add_tags(&self.buffer.fields.skills, input);
    }

    pub fn remove_skill(&mut self, index: usize) -> bool {
        match remove_tag(&self.buffer.fields.skills, index) {
            Ok(next) => {
                self.buffer.fields.skills = next;
                true
            }
            Err(err) => {
                warn!(error = %err, "Ignoring skill removal");
                false
            }
        }
    }

    /// `true` when the buffer differs from what was last saved.
    pub fn is_dirty(&self) -> bool {
        match &self.saved {
            Some(portfolio) => self.buffer != EditBuffer::from_portfolio(portfolio),
            None => self.buffer != EditBuffer::blank(),
        }
    }

    pub fn submission(&self) -> Result<CreateOrUpdatePayload, ValidationErrors> {
        build_submission(&self.buffer.fields, &self.buffer.en, &self.buffer.vi)
    }

    /// Sends the buffer as an update of the existing portfolio.
    pub async fn save(&mut self) -> Result<&Portfolio, SaveError> {
        let payload = self.submission()?;
        let id = match &self.saved {
            Some(portfolio) => portfolio.id.clone(),
            None => return Err(SaveError::NoExistingPortfolio),
        };

        let record = self
            .api
            .update(&self.token, &id, &payload)
            .await
            .inspect_err(|err| warn!(id = id.as_str(), error = %err, "Portfolio update failed"))?;

        info!(id = id.as_str(), slug = payload.slug.as_str(), "Portfolio updated");
        Ok(self.commit(record))
    }

    /// Creates the owner's first portfolio from the buffer.
    pub async fn create(&mut self) -> Result<&Portfolio, SaveError> {
        if self.saved.is_some() {
            return Err(SaveError::PortfolioAlreadyExists);
        }
        let payload = self.submission()?;

        let record = self
            .api
            .create(&self.token, &payload)
            .await
            .inspect_err(|err| warn!(error = %err, "Portfolio create failed"))?;

        info!(slug = payload.slug.as_str(), "Portfolio created");
        Ok(self.commit(record))
    }

    /// Drops every unsaved change.
    pub fn discard(&mut self) {
        self.buffer = match &self.saved {
            Some(portfolio) => EditBuffer::from_portfolio(portfolio),
            None => EditBuffer::blank(),
        };
    }

    /// Public link of the saved portfolio.
    pub fn share_url(&self, origin: &str) -> Option<String> {
        self.saved
            .as_ref()
            .filter(|portfolio| !portfolio.slug.is_empty())
            .map(|portfolio| share_url(origin, &portfolio.slug))
    }

    fn commit(&mut self, record: PortfolioRecord) -> &Portfolio {
        let portfolio = normalize_portfolio(record);
        self.buffer = EditBuffer::from_portfolio(&portfolio);
        self.saved.insert(portfolio)
    }
}
