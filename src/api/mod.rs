//! Dashboard API Client
//!
//! Thin HTTP layer over the remote dashboard API, built with reqwest.
//!
//! # Endpoints
//!
//! ## Auth
//! - `POST /login` - Exchange credentials for a bearer token
//! - `POST /register` - Create an account
//! - `GET /profile` - Profile of the token's owner
//!
//! ## Dashboard
//! - `GET /products` - Product list
//! - `GET /sales-summary` - Weekly sales chart series
//!
//! ## Health
//! - `GET /test` - Connectivity probe
//!
//! Any authenticated endpoint may answer 401, surfaced as
//! [`ApiError::Unauthorized`].
//!
//! # Example
//!
//! ```rust,no_run
//! use ajarin_dash::api::{ApiClient, ClientConfig, RemoteApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ClientConfig::default())?;
//!     let login = client.login("a@b.com", "x").await?;
//!     let products = client.products(&login.access_token).await?;
//!     println!("{} products", products.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dto;
pub mod error;

pub use client::{ApiClient, ClientConfig, RemoteApi, DEFAULT_API_BASE};
pub use dto::{ChartDataset, ChartSeries, LoginResponse, Product, UserProfile};
pub use error::{ApiError, ApiResult};
