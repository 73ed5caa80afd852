//! # Shared HTTP client
//!
//! [`ApiClient`] wraps one `reqwest::Client`, the API base URL, and the bearer
//! token. Clones share the token slot, so setting it through the session makes
//! every later request from every clone carry `Authorization: Bearer <token>`,
//! and clearing it stops that immediately.
//!
//! Responses are checked here: non-2xx becomes [`ApiError::Server`] with the
//! server's `message` field when it sends one, and bodies are decoded with
//! `serde_json` so decode failures keep their context.

use std::sync::{Arc, RwLock};

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// Typed client for the remote Daily Diet API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set or clear the bearer token attached to every request.
    /// Empty strings clear it.
    pub fn set_token(&self, token: Option<String>) {
        let token = token.filter(|t| !t.trim().is_empty());
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "api request");
        let builder = self.http.request(method, self.url(path));
        match self.token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = Self::checked(builder.send().await?).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and ignore whatever body comes back.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        Self::checked(builder.send().await?).await?;
        Ok(())
    }

    async fn checked(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);
        tracing::warn!(status = status.as_u16(), %message, "api request rejected");

        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3333/");
        assert_eq!(client.base_url(), "http://localhost:3333");
        assert_eq!(client.url("/meals"), "http://localhost:3333/meals");
        assert_eq!(client.url("meals/total"), "http://localhost:3333/meals/total");
    }

    #[test]
    fn test_clones_share_token() {
        let client = ApiClient::new("http://localhost");
        let clone = client.clone();

        client.set_token(Some("abc".to_string()));
        assert_eq!(clone.token().as_deref(), Some("abc"));

        clone.set_token(None);
        assert!(!client.has_token());
    }

    #[test]
    fn test_empty_token_clears() {
        let client = ApiClient::new("http://localhost");
        client.set_token(Some("abc".to_string()));
        client.set_token(Some(String::new()));
        assert!(client.token().is_none());
    }

    #[tokio::test]
    async fn test_error_body_message_is_extracted() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/meals/total")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Resource not found."}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.total_meals().await.unwrap_err();

        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Resource not found.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_plain_text_error_body_is_kept() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/profile")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.get_profile().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.user_message(), "boom");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/gamification/status")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"level":"three"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.gamification_status().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
