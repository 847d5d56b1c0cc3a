// src/shared/api/api_client.rs
use std::time::Duration;

use reqwest::{header, Method, RequestBuilder, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::shared::api::error::ApiError;
use crate::shared::api::response::{server_message, unwrap_envelope};

/// Thin JSON client over the portfolio service.
///
/// Every call takes the bearer token explicitly; the client never reads
/// credentials on its own.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_http_client(http, base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = Url::parse(trimmed)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", trimmed, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(trimmed.to_string()));
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/{segments..}` with every segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    pub async fn get<T>(&self, url: Url, token: Option<&str>) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::GET, url, token)).await
    }

    pub async fn send_json<T, B>(
        &self,
        method: Method,
        url: Url,
        token: Option<&str>,
        body: &B,
    ) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = self.request(method, url, token).body(payload);
        self.execute(request).await
    }

    fn request(&self, method: Method, url: Url, token: Option<&str>) -> RequestBuilder {
        debug!(%method, %url, "Sending portfolio service request");

        let mut request = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// `Ok(None)` for 204, an empty body or a JSON `null`.
    async fn execute<T>(&self, request: RequestBuilder) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = server_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string));
            warn!(status = status.as_u16(), ?message, "Portfolio service rejected request");
            return Err(ApiError::Transport {
                status: Some(status.as_u16()),
                message,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))?;

        match unwrap_envelope(value) {
            Value::Null => Ok(None),
            value => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ApiError::Decode(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        slug: String,
    }

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(5)).expect("valid base url")
    }

    #[test]
    fn test_endpoint_trims_trailing_slash_and_encodes_segments() {
        let client = client("http://localhost:10001/");

        let url = client.endpoint(&["portfolios", "jane doe"]);

        assert_eq!(url.as_str(), "http://localhost:10001/api/portfolios/jane%20doe");
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let client = client("https://example.com/backend");

        let url = client.endpoint(&["portfolios", "me"]);

        assert_eq!(url.as_str(), "https://example.com/backend/api/portfolios/me");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ApiClient::new("not a url", Duration::from_secs(1));

        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[tokio::test]
    async fn test_get_sends_bearer_token_and_decodes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/things/1"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"slug": "jane"})))
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let result: Option<Echo> = client
            .get(client.endpoint(&["things", "1"]), Some("secret"))
            .await
            .unwrap();

        assert_eq!(
            result,
            Some(Echo {
                slug: "jane".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_get_unwraps_success_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/things/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "data": {"slug": "wrapped"}})),
            )
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let result: Option<Echo> = client.get(client.endpoint(&["things", "1"]), None).await.unwrap();

        assert_eq!(result.map(|e| e.slug), Some("wrapped".to_string()));
    }

    #[tokio::test]
    async fn test_no_content_and_empty_body_are_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/empty"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/blank"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let empty: Option<Echo> = client.get(client.endpoint(&["empty"]), None).await.unwrap();
        let blank: Option<Echo> = client.get(client.endpoint(&["blank"]), None).await.unwrap();

        assert!(empty.is_none());
        assert!(blank.is_none());
    }

    #[tokio::test]
    async fn test_not_found_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "nope"})))
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let result: Result<Option<Echo>, ApiError> =
            client.get(client.endpoint(&["missing"]), None).await;

        assert_eq!(result, Err(ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_error_status_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/things/1"))
            .and(body_json(json!({"slug": "x"})))
            .respond_with(
                ResponseTemplate::new(409).set_body_json(json!({"message": "Slug already taken"})),
            )
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let result: Result<Option<Echo>, ApiError> = client
            .send_json(
                Method::PUT,
                client.endpoint(&["things", "1"]),
                None,
                &json!({"slug": "x"}),
            )
            .await;

        assert_eq!(
            result,
            Err(ApiError::Transport {
                status: Some(409),
                message: Some("Slug already taken".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_error_status_without_body_falls_back_to_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let err = client
            .get::<Echo>(client.endpoint(&["boom"]), None)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(err.user_message(), "Internal Server Error");
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let client = client(&server.uri());
        let err = client
            .get::<Echo>(client.endpoint(&["broken"]), None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }
}
