//! Data Transfer Objects
//!
//! Request and response types exchanged with the dashboard API.
//! Field names on the wire follow the remote API (`nama`, `nama_produk`,
//! `harga`, `stok`); the Rust side uses English names.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================
// Auth DTOs
// ============================================

/// Body of `POST /login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful response of `POST /login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Body of `POST /register`
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    #[serde(rename = "nama")]
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// User identity returned by the API.
///
/// Kept as the raw JSON object: the client only reads it for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(pub Map<String, Value>);

impl UserProfile {
    /// Raw field lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Name to greet the user with (`nama`, then `email`)
    pub fn display_name(&self) -> Option<&str> {
        self.get("nama")
            .or_else(|| self.get("email"))
            .and_then(Value::as_str)
    }
}

// ============================================
// Dashboard DTOs
// ============================================

/// A product row from `GET /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nama_produk")]
    pub name: String,
    #[serde(rename = "harga")]
    pub price: f64,
    #[serde(rename = "stok", default)]
    pub stock: i64,
}

/// Chart payload from `GET /sales-summary`.
///
/// Only `labels` and each dataset's `label`/`data` are read for rendering.
/// Data points stay raw JSON and every other key is kept in `extra`, so the
/// series serializes back exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartDataset>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One dataset of a [`ChartSeries`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    #[serde(default)]
    pub label: String,
    /// Raw points; `null` marks a gap
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartDataset {
    /// Numeric value of the point at `index`, if there is one
    pub fn value(&self, index: usize) -> Option<f64> {
        self.data.get(index).and_then(Value::as_f64)
    }

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().filter_map(Value::as_f64)
    }
}

impl ChartSeries {
    /// True when no dataset carries a numeric value
    pub fn is_empty(&self) -> bool {
        self.datasets.iter().all(|d| d.values().next().is_none())
    }

    /// Largest numeric value across all datasets
    pub fn max_value(&self) -> Option<f64> {
        self.datasets
            .iter()
            .flat_map(ChartDataset::values)
            .fold(None, |acc, v| match acc {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }
}

// ============================================
// Misc
// ============================================

/// Response of the `GET /test` connectivity probe
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body returned by the API on failures
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_wire_names() {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "nama_produk": "Produk Contoh",
            "harga": 10000.0,
            "stok": 50
        }))
        .unwrap();

        assert_eq!(product.name, "Produk Contoh");
        assert_eq!(product.price, 10000.0);
        assert_eq!(product.stock, 50);
    }

    #[test]
    fn test_product_stock_defaults_to_zero() {
        let product: Product = serde_json::from_value(json!({
            "id": 2,
            "nama_produk": "Kosong",
            "harga": 500
        }))
        .unwrap();

        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_chart_series_keeps_style_keys() {
        let raw = json!({
            "labels": ["Senin", "Selasa"],
            "datasets": [{
                "label": "Penjualan (Rp)",
                "data": [120000, 190000],
                "backgroundColor": "rgba(75, 192, 192, 0.6)",
                "borderWidth": 1
            }]
        });

        let series: ChartSeries = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(series.datasets[0].value(0), Some(120000.0));
        assert_eq!(series.max_value(), Some(190000.0));

        let back = serde_json::to_value(&series).unwrap();
        assert_eq!(
            back["datasets"][0]["backgroundColor"],
            raw["datasets"][0]["backgroundColor"]
        );
        assert_eq!(back["datasets"][0]["borderWidth"], json!(1));
    }

    #[test]
    fn test_chart_series_serializes_back_unchanged() {
        let raw = json!({
            "labels": ["Senin", "Selasa", "Rabu"],
            "datasets": [{
                "label": "Penjualan (Rp)",
                "data": [120000, 190000.5, 300000],
                "backgroundColor": "rgba(75, 192, 192, 0.6)"
            }],
            "title": "Mingguan"
        });

        let series: ChartSeries = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&series).unwrap(), raw);
    }

    #[test]
    fn test_chart_series_accepts_gaps() {
        let raw = json!({
            "labels": ["Senin", "Selasa"],
            "datasets": [{"label": "Penjualan", "data": [120000, null]}]
        });

        let series: ChartSeries = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(series.datasets[0].value(0), Some(120000.0));
        assert_eq!(series.datasets[0].value(1), None);
        assert_eq!(series.max_value(), Some(120000.0));
        assert!(!series.is_empty());
        assert_eq!(serde_json::to_value(&series).unwrap(), raw);
    }

    #[test]
    fn test_chart_series_all_gaps_is_empty() {
        let series: ChartSeries = serde_json::from_value(json!({
            "labels": ["Senin"],
            "datasets": [{"label": "Penjualan", "data": [null]}]
        }))
        .unwrap();

        assert!(series.is_empty());
        assert_eq!(series.max_value(), None);
    }

    #[test]
    fn test_user_profile_display_name() {
        let user: UserProfile = serde_json::from_value(json!({"id": 1, "nama": "A"})).unwrap();
        assert_eq!(user.display_name(), Some("A"));

        let user: UserProfile =
            serde_json::from_value(json!({"id": 2, "email": "b@c.com"})).unwrap();
        assert_eq!(user.display_name(), Some("b@c.com"));
    }

    #[test]
    fn test_register_request_uses_nama() {
        let body = serde_json::to_value(RegisterRequest {
            name: "Budi",
            email: "budi@example.com",
            password: "rahasia",
        })
        .unwrap();

        assert_eq!(body["nama"], "Budi");
        assert!(body.get("name").is_none());
    }
}
