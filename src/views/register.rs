//! Register View

use super::form::{Field, FieldKind, FormInput};
use super::{Navigation, Prefill, ViewOutput};
use crate::router::{Route, RouteError};
use crate::session::SessionStore;

/// Shown on any registration failure; the API gives no structured reason
pub const REGISTER_FAILED: &str = "Gagal mendaftar. Email mungkin sudah dipakai.";

/// Registration form
pub struct RegisterView {
    name: Field,
    email: Field,
    password: Field,
    error: Option<String>,
}

impl RegisterView {
    pub fn new(prefill: Prefill) -> Self {
        Self {
            name: Field::new("Nama Lengkap", FieldKind::Text, prefill.name),
            email: Field::new("Email", FieldKind::Email, prefill.email),
            password: Field::new("Password", FieldKind::Password, prefill.password),
            error: None,
        }
    }

    pub async fn run(
        &mut self,
        session: &mut SessionStore,
        input: &mut dyn FormInput,
    ) -> Result<ViewOutput, RouteError> {
        let name = self.name.fill(input)?;
        let email = self.email.fill(input)?;
        let password = self.password.fill(input)?;

        let navigation = self.submit(session, &name, &email, &password).await;
        Ok(ViewOutput {
            text: self.render(),
            navigation,
        })
    }

    pub async fn submit(
        &mut self,
        session: &SessionStore,
        name: &str,
        email: &str,
        password: &str,
    ) -> Navigation {
        self.error = None;

        if session.register(name, email, password).await {
            Navigation::Navigate(Route::Login)
        } else {
            self.error = Some(REGISTER_FAILED.to_string());
            Navigation::Stay
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Register\n");
        if let Some(error) = &self.error {
            out.push_str(error);
            out.push('\n');
        }
        out.push_str("Sudah punya akun? Login di sini: ajarin login\n");
        out
    }
}
