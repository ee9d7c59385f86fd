//! Bar Chart
//!
//! Horizontal bar chart for a [`ChartSeries`], one block per dataset.

use super::format_amount;
use crate::api::{ChartDataset, ChartSeries};

const BAR_GLYPH: char = '█';

/// Shown when no dataset carries a value
pub const NO_DATA: &str = "Tidak ada data";

/// Chart dimensions
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Width of the longest bar in characters
    pub bar_width: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self { bar_width: 40 }
    }
}

/// Render every dataset of the series as horizontal bars.
///
/// Bars share one scale: the largest value across all datasets fills
/// `bar_width`. Negative values draw no bar; missing or non-numeric points
/// draw `-`.
pub fn render_bar_chart(series: &ChartSeries, style: &ChartStyle) -> String {
    if series.is_empty() {
        return format!("{}\n", NO_DATA);
    }

    let max = series.max_value().unwrap_or(0.0);
    let label_width = series
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (idx, dataset) in series.datasets.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        render_dataset(&mut out, &series.labels, dataset, max, label_width, style);
    }
    out
}

fn render_dataset(
    out: &mut String,
    labels: &[String],
    dataset: &ChartDataset,
    max: f64,
    label_width: usize,
    style: &ChartStyle,
) {
    if !dataset.label.is_empty() {
        out.push_str(&dataset.label);
        out.push('\n');
    }

    // Values without a label fall back to their position
    let rows = labels.len().max(dataset.data.len());
    let label_width = label_width.max(rows.to_string().len());

    for i in 0..rows {
        let label = labels
            .get(i)
            .cloned()
            .unwrap_or_else(|| (i + 1).to_string());

        let line = match dataset.value(i) {
            Some(value) => {
                let len = bar_length(value, max, style.bar_width);
                format!(
                    "{:<lw$} | {:<bw$} {}",
                    label,
                    BAR_GLYPH.to_string().repeat(len),
                    format_amount(value),
                    lw = label_width,
                    bw = style.bar_width,
                )
            }
            None => format!("{:<lw$} | -", label, lw = label_width),
        };

        out.push_str(&line);
        out.push('\n');
    }
}

fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 || !value.is_finite() {
        return 0;
    }
    ((value / max) * width as f64).round().min(width as f64) as usize
}
