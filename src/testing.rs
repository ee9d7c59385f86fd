//! In-memory remote collaborator for unit tests

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::api::dto::LoginResponse;
use crate::api::{ApiError, ApiResult, ChartSeries, Product, RemoteApi, UserProfile};

/// Scripted outcome of a login call
#[derive(Debug, Clone)]
pub enum LoginBehavior {
    Succeed { token: String, user: Value },
    Status(u16),
}

fn status_error(status: u16) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Status {
            status,
            message: "scripted failure".to_string(),
        }
    }
}

pub struct FakeApi {
    login: LoginBehavior,
    register_status: Option<u16>,
    products: Result<Vec<Product>, u16>,
    sales: Result<ChartSeries, u16>,
    profile_status: Option<u16>,
    login_calls: Mutex<Vec<(String, String)>>,
    register_calls: AtomicUsize,
    products_calls: AtomicUsize,
    sales_calls: AtomicUsize,
    profile_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            login: LoginBehavior::Status(401),
            register_status: None,
            products: Ok(vec![sample_product()]),
            sales: Ok(sample_series()),
            profile_status: None,
            login_calls: Mutex::new(Vec::new()),
            register_calls: AtomicUsize::new(0),
            products_calls: AtomicUsize::new(0),
            sales_calls: AtomicUsize::new(0),
            profile_calls: AtomicUsize::new(0),
        }
    }

    pub fn login_returns(self, token: &str, user: Value) -> Self {
        self.login_behavior(LoginBehavior::Succeed {
            token: token.to_string(),
            user,
        })
    }

    pub fn login_behavior(mut self, behavior: LoginBehavior) -> Self {
        self.login = behavior;
        self
    }

    pub fn register_fails(mut self, status: u16) -> Self {
        self.register_status = Some(status);
        self
    }

    pub fn products_fail(mut self, status: u16) -> Self {
        self.products = Err(status);
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = Ok(products);
        self
    }

    pub fn sales_fail(mut self, status: u16) -> Self {
        self.sales = Err(status);
        self
    }

    pub fn profile_unauthorized(mut self) -> Self {
        self.profile_status = Some(401);
        self
    }

    pub fn login_calls(&self) -> Vec<(String, String)> {
        self.login_calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn products_calls(&self) -> usize {
        self.products_calls.load(Ordering::SeqCst)
    }

    pub fn sales_calls(&self) -> usize {
        self.sales_calls.load(Ordering::SeqCst)
    }

    /// Authenticated calls issued so far
    pub fn fetch_count(&self) -> usize {
        self.products_calls() + self.sales_calls() + self.profile_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteApi for FakeApi {
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        if let Ok(mut calls) = self.login_calls.lock() {
            calls.push((email.to_string(), password.to_string()));
        }
        match &self.login {
            LoginBehavior::Succeed { token, user } => Ok(LoginResponse {
                access_token: token.clone(),
                user: serde_json::from_value(user.clone())
                    .map_err(|e| ApiError::Decode(e.to_string()))?,
            }),
            LoginBehavior::Status(status) => Err(status_error(*status)),
        }
    }

    async fn register(&self, _name: &str, _email: &str, _password: &str) -> ApiResult<()> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        match self.register_status {
            Some(status) => Err(status_error(status)),
            None => Ok(()),
        }
    }

    async fn products(&self, _token: &str) -> ApiResult<Vec<Product>> {
        self.products_calls.fetch_add(1, Ordering::SeqCst);
        self.products.clone().map_err(status_error)
    }

    async fn sales_summary(&self, _token: &str) -> ApiResult<ChartSeries> {
        self.sales_calls.fetch_add(1, Ordering::SeqCst);
        self.sales.clone().map_err(status_error)
    }

    async fn profile(&self, _token: &str) -> ApiResult<UserProfile> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        match self.profile_status {
            Some(status) => Err(status_error(status)),
            None => serde_json::from_value(json!({"id": 1, "nama": "A"}))
                .map_err(|e| ApiError::Decode(e.to_string())),
        }
    }

    async fn probe(&self) -> ApiResult<String> {
        Ok("ok".to_string())
    }
}

pub fn sample_product() -> Product {
    Product {
        id: 1,
        name: "Produk Contoh".to_string(),
        price: 10000.0,
        stock: 50,
    }
}

pub fn sample_series() -> ChartSeries {
    serde_json::from_value(json!({
        "labels": ["Senin", "Selasa", "Rabu"],
        "datasets": [{
            "label": "Penjualan (Rp)",
            "data": [120000, 190000, 300000],
            "backgroundColor": "rgba(75, 192, 192, 0.6)"
        }]
    }))
    .unwrap_or_default()
}
