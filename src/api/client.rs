//! Dashboard REST API Client
//!
//! HTTP client for the remote dashboard API. The client itself holds no
//! credentials: authenticated calls take the bearer token explicitly.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{
    ChartSeries, ErrorBody, LoginRequest, LoginResponse, ProbeResponse, Product, RegisterRequest,
    UserProfile,
};
use super::error::{ApiError, ApiResult};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Operations the dashboard needs from the remote collaborator
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// `POST /login`
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse>;

    /// `POST /register`
    async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<()>;

    /// `GET /products`
    async fn products(&self, token: &str) -> ApiResult<Vec<Product>>;

    /// `GET /sales-summary`
    async fn sales_summary(&self, token: &str) -> ApiResult<ChartSeries>;

    /// `GET /profile`
    async fn profile(&self, token: &str) -> ApiResult<UserProfile>;

    /// `GET /test`
    async fn probe(&self) -> ApiResult<String>;
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, e.g. "http://localhost:5000/api"
    pub base_url: String,
    /// Optional request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Config pointed at a custom base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// reqwest-backed [`RemoteApi`]
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let mut builder = Client::builder()
            .user_agent(concat!("ajarin-dash/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer header built from the given token
    fn authorized(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.bearer_auth(token)
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await?;
        check_status(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> ApiResult<T> {
        let request = self.authorized(self.client.get(self.url(path)), token);
        let response = self.send(request).await?;
        decode(response).await
    }
}

#[async_trait]
impl RemoteApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        tracing::debug!(email = %email, "POST /login");
        let request = self
            .client
            .post(self.url("/login"))
            .json(&LoginRequest { email, password });
        let response = self.send(request).await?;
        decode(response).await
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<()> {
        tracing::debug!(email = %email, "POST /register");
        let request = self.client.post(self.url("/register")).json(&RegisterRequest {
            name,
            email,
            password,
        });
        self.send(request).await?;
        Ok(())
    }

    async fn products(&self, token: &str) -> ApiResult<Vec<Product>> {
        self.get_json("/products", token).await
    }

    async fn sales_summary(&self, token: &str) -> ApiResult<ChartSeries> {
        self.get_json("/sales-summary", token).await
    }

    async fn profile(&self, token: &str) -> ApiResult<UserProfile> {
        self.get_json("/profile", token).await
    }

    async fn probe(&self) -> ApiResult<String> {
        let response = self.send(self.client.get(self.url("/test"))).await?;
        let body: ProbeResponse = decode(response).await?;
        Ok(body.message)
    }
}

/// Map a non-success status to an [`ApiError`]
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}
