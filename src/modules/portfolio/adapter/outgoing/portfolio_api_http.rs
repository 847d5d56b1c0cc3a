// src/modules/portfolio/adapter/outgoing/portfolio_api_http.rs

use async_trait::async_trait;
use reqwest::{Method, Url};
use tracing::debug;

use crate::portfolio::application::ports::outgoing::PortfolioApi;
use crate::portfolio::application::submission::CreateOrUpdatePayload;
use crate::portfolio::domain::entities::PortfolioRecord;
use crate::portfolio::domain::locale::LocaleCode;
use crate::shared::api::{ApiClient, ApiError};

/// `PortfolioApi` over the service's `/api/portfolios` routes.
#[derive(Debug, Clone)]
pub struct HttpPortfolioApi {
    client: ApiClient,
}

impl HttpPortfolioApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn portfolios_url(&self, tail: &[&str], locale: Option<LocaleCode>) -> Url {
        let mut segments = vec!["portfolios"];
        segments.extend_from_slice(tail);

        let mut url = self.client.endpoint(&segments);
        if let Some(locale) = locale {
            url.query_pairs_mut().append_pair("locale", locale.as_str());
        }
        url
    }
}

fn require_body(record: Option<PortfolioRecord>) -> Result<PortfolioRecord, ApiError> {
    record.ok_or_else(|| ApiError::Decode("empty response body".to_string()))
}

#[async_trait]
impl PortfolioApi for HttpPortfolioApi {
    async fn fetch_by_slug(
        &self,
        slug: &str,
        locale: Option<LocaleCode>,
    ) -> Result<PortfolioRecord, ApiError> {
        let url = self.portfolios_url(&[slug], locale);
        // An empty body means the same to a visitor as a 404.
        self.client
            .get::<PortfolioRecord>(url, None)
            .await?
            .ok_or(ApiError::NotFound)
    }

    async fn fetch_mine(
        &self,
        token: &str,
        locale: Option<LocaleCode>,
    ) -> Result<Option<PortfolioRecord>, ApiError> {
        let url = self.portfolios_url(&["me"], locale);
        match self.client.get::<PortfolioRecord>(url, Some(token)).await {
            Err(ApiError::NotFound) => {
                debug!("Owner has no portfolio yet");
                Ok(None)
            }
            other => other,
        }
    }

    async fn create(
        &self,
        token: &str,
        payload: &CreateOrUpdatePayload,
    ) -> Result<PortfolioRecord, ApiError> {
        let url = self.portfolios_url(&[], None);
        let record = self
            .client
            .send_json(Method::POST, url, Some(token), payload)
            .await?;
        require_body(record)
    }

    async fn update(
        &self,
        token: &str,
        id: &str,
        payload: &CreateOrUpdatePayload,
    ) -> Result<PortfolioRecord, ApiError> {
        let url = self.portfolios_url(&[id], None);
        let record = self
            .client
            .send_json(Method::PUT, url, Some(token), payload)
            .await?;
        require_body(record)
    }
}
