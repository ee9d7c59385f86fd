//! # Ajarindongdit Dashboard
//!
//! Terminal client for the Ajarindongdit sales dashboard. It authenticates
//! against the remote API, keeps the bearer token between runs, and renders
//! the product table and the weekly sales chart.
//!
//! ## Modules
//!
//! - [`api`]: reqwest client for the remote API
//! - [`session`]: session store and persisted token slot
//! - [`views`]: login, register and dashboard views
//! - [`router`]: route table and navigation loop
//! - [`render`]: text rendering for tables and bar charts
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ajarin_dash::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     let api = Arc::new(ApiClient::new(config.api.client_config())?);
//!     let tokens = Arc::new(FileTokenStore::new(config.session.token_file()));
//!
//!     let session = SessionStore::restore(api, tokens);
//!     let mut router = Router::new(session, Box::new(StdinInput::new()), RenderOptions::default());
//!
//!     router.run(Route::Home, &mut std::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod render;
pub mod router;
pub mod session;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

// Re-export top-level types for convenience
pub use api::{
    ApiClient, ApiError, ApiResult, ChartSeries, ClientConfig, Product, RemoteApi, UserProfile,
};

pub use session::{FileTokenStore, MemoryTokenStore, Session, SessionError, SessionStore, TokenStore};

pub use views::{FormInput, HomeView, LoginView, Navigation, Prefill, RegisterView, ScriptedInput, StdinInput};

pub use router::{Route, RouteError, Router, RunOutcome};

pub use render::{ChartStyle, OutputFormat, RenderOptions};

pub use config::{Config, ConfigError, LoggingConfig};
