//! Home / Dashboard View
//!
//! Two states: without a token the view redirects to `/login` and fetches
//! nothing. With a token it fetches products and the sales summary once per
//! token, concurrently. A 401 from either fetch ends the session.

use super::Navigation;
use crate::api::{ChartSeries, Product};
use crate::render::{self, OutputFormat, RenderOptions};
use crate::router::Route;
use crate::session::SessionStore;

pub const TITLE: &str = "Project Ajarindongdit (Dashboard)";
pub const CHART_HEADING: &str = "Analisis Penjualan Mingguan";
pub const PRODUCTS_HEADING: &str = "Data Produk:";
pub const CHART_LOADING: &str = "Memuat data grafik...";
pub const PRODUCTS_LOADING: &str = "Memuat data produk...";

/// Generic message for any failed fetch
pub const FETCH_FAILED: &str = "Gagal mengambil data produk.";

/// Dashboard state
#[derive(Debug, Default)]
pub struct HomeView {
    products: Vec<Product>,
    chart: Option<ChartSeries>,
    error: Option<String>,
    /// Token the current data was fetched with
    fetched_for: Option<String>,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn chart(&self) -> Option<&ChartSeries> {
        self.chart.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter the view with the current session state
    pub async fn enter(&mut self, session: &mut SessionStore) -> Navigation {
        let token = match session.token() {
            Some(token) => token.to_string(),
            None => {
                tracing::debug!("No session token, redirecting to login");
                return Navigation::Navigate(Route::Login);
            }
        };

        if self.fetched_for.as_deref() == Some(token.as_str()) {
            return Navigation::Stay;
        }

        self.products.clear();
        self.chart = None;
        self.error = None;
        self.fetched_for = Some(token.clone());

        let api = session.api();
        let (products, chart) = tokio::join!(api.products(&token), api.sales_summary(&token));

        let mut unauthorized = false;

        match products {
            Ok(products) => {
                tracing::debug!("Fetched {} products", products.len());
                self.products = products;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch products: {}", e);
                unauthorized |= e.is_unauthorized();
                self.error = Some(FETCH_FAILED.to_string());
            }
        }

        match chart {
            Ok(chart) => self.chart = Some(chart),
            Err(e) => {
                tracing::warn!("Failed to fetch sales summary: {}", e);
                unauthorized |= e.is_unauthorized();
                self.error = Some(FETCH_FAILED.to_string());
            }
        }

        if unauthorized {
            tracing::info!("Session token rejected, logging out");
            session.logout();
            self.fetched_for = None;
            return Navigation::Navigate(Route::Login);
        }

        Navigation::Stay
    }

    /// Render the dashboard from `(products, chart, error)`
    pub fn render(&self, options: &RenderOptions) -> String {
        match options.format {
            OutputFormat::Json => {
                let mut out =
                    render::render_json(&self.products, self.chart.as_ref(), self.error());
                out.push('\n');
                out
            }
            OutputFormat::Table => self.render_table(options),
        }
    }

    fn render_table(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        out.push_str(TITLE);
        out.push('\n');
        out.push_str(&"=".repeat(TITLE.chars().count()));
        out.push_str("\n\n");

        out.push_str(CHART_HEADING);
        out.push('\n');
        match &self.chart {
            Some(chart) => out.push_str(&render::render_bar_chart(chart, &options.chart)),
            None => {
                out.push_str(CHART_LOADING);
                out.push('\n');
            }
        }
        out.push('\n');

        out.push_str(PRODUCTS_HEADING);
        out.push('\n');
        if let Some(error) = &self.error {
            out.push_str(error);
            out.push('\n');
        }
        if self.products.is_empty() {
            out.push_str(PRODUCTS_LOADING);
            out.push('\n');
        } else {
            out.push_str(&render::render_products(&self.products));
        }

        out
    }
}
