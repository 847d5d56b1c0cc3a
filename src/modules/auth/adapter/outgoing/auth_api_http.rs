use async_trait::async_trait;
use reqwest::Method;

use crate::auth::application::ports::outgoing::AuthApi;
use crate::auth::domain::entities::{AuthResponse, Credentials};
use crate::shared::api::{ApiClient, ApiError};

/// `AuthApi` over `/api/auth/login` and `/api/auth/register`.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn post(&self, action: &str, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let url = self.client.endpoint(&["auth", action]);
        self.client
            .send_json(Method::POST, url, None, credentials)
            .await?
            .ok_or_else(|| ApiError::Decode("empty auth response".to_string()))
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.post("login", credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.post("register", credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api(server: &MockServer) -> HttpAuthApi {
        HttpAuthApi::new(ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap())
    }

    fn credentials() -> Credentials {
        Credentials::new("jane@example.com", "secret").unwrap()
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({"email": "jane@example.com", "password": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok",
                "user": {"id": "u1", "email": "jane@example.com"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = api(&server).login(&credentials()).await.unwrap();

        assert_eq!(response.access_token, "tok");
        assert_eq!(response.user.id, "u1");
    }

    #[tokio::test]
    async fn test_register_conflict_carries_message_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({"message": ["Email already registered"]})),
            )
            .mount(&server)
            .await;

        let err = api(&server).register(&credentials()).await.unwrap_err();

        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message(), "Email already registered");
    }
}
