//! Terminal Rendering
//!
//! Pure functions turning dashboard data into text. Nothing here performs
//! I/O; callers decide where the output goes.

mod chart;
mod table;

pub use chart::{render_bar_chart, ChartStyle};
pub use table::render_products;

use serde::Serialize;

use crate::api::{ChartSeries, Product};

/// How the dashboard is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table and bar chart
    #[default]
    Table,
    /// Raw JSON with the API's field names
    Json,
}

/// Render options shared by the views
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub chart: ChartStyle,
}

/// Dashboard payload as emitted by the JSON format
#[derive(Serialize)]
struct DashboardJson<'a> {
    products: &'a [Product],
    chart: Option<&'a ChartSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Serialize the dashboard, passing the chart series through verbatim
pub fn render_json(
    products: &[Product],
    chart: Option<&ChartSeries>,
    error: Option<&str>,
) -> String {
    let payload = DashboardJson {
        products,
        chart,
        error,
    };
    serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string())
}

/// Format an amount without a trailing `.0` for whole numbers
pub(crate) fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
