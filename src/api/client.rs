//! Blocking HTTP client for the article server.
//!
//! One method per endpoint. Authenticated calls take the bearer token
//! explicitly; the client itself holds no session state.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::ApiError;
use super::types::{Article, ArticleUpdate, Credentials, ErrorBody, LoginResponse, NewArticle};
use crate::config::ApiConfig;

/// Longest server error text carried into an `ApiError::Status`
pub const MAX_ERROR_MESSAGE_CHARS: usize = 200;

/// Client for the `/auth` and `/article` endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client. `timeout: None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_token(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// POST /auth/login. Returns the session token.
    pub fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        debug!(username = %credentials.username, "POST /auth/login");

        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "login rejected");
            return Err(ApiError::InvalidCredentials);
        }

        let parsed: LoginResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        match parsed.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => {
                warn!("login succeeded without a token in the response");
                Err(ApiError::InvalidCredentials)
            }
        }
    }

    /// POST /auth/register
    pub fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        debug!(username = %credentials.username, "POST /auth/register");

        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(credentials)
            .send()?;

        Self::expect_success(response).map(|_| ())
    }

    /// GET /article/
    pub fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        debug!("GET /article/");

        let response = self.http.get(self.url("/article/")).send()?;
        Self::decode(Self::expect_success(response)?)
    }

    /// POST /article
    pub fn create_article(
        &self,
        token: Option<&str>,
        article: &NewArticle,
    ) -> Result<Article, ApiError> {
        debug!(title = %article.title, "POST /article");

        let request = self.http.post(self.url("/article")).json(article);
        let response = Self::with_token(request, token).send()?;
        Self::decode(Self::expect_success(response)?)
    }

    /// PUT /article/{id}
    pub fn update_article(
        &self,
        token: Option<&str>,
        id: &str,
        update: &ArticleUpdate,
    ) -> Result<Article, ApiError> {
        debug!(id, "PUT /article/{{id}}");

        let request = self
            .http
            .put(self.url(&format!("/article/{id}")))
            .json(update);
        let response = Self::with_token(request, token).send()?;
        Self::decode(Self::expect_success(response)?)
    }

    /// DELETE /article/{id}
    pub fn delete_article(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        debug!(id, "DELETE /article/{{id}}");

        let request = self.http.delete(self.url(&format!("/article/{id}")));
        let response = Self::with_token(request, token).send()?;
        Self::expect_success(response).map(|_| ())
    }

    /// Turn a non-success response into `ApiError::Status`, preferring the
    /// body's `message` field, then the raw body, then the status line.
    fn expect_success(response: Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text()?;

        if status.is_success() {
            return Ok(body);
        }

        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                } else {
                    trimmed.to_string()
                }
            });
        let message = truncate_message(message);

        warn!(status = status.as_u16(), %message, "server returned an error");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    fn decode<T: DeserializeOwned>(body: String) -> Result<T, ApiError> {
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Cut long error bodies (HTML error pages and the like) to a readable size
fn truncate_message(message: String) -> String {
    if message.chars().count() <= MAX_ERROR_MESSAGE_CHARS {
        return message;
    }
    let mut cut: String = message.chars().take(MAX_ERROR_MESSAGE_CHARS).collect();
    cut.push_str("...");
    cut
}
