//! Login View

use super::form::{Field, FieldKind, FormInput};
use super::{Navigation, Prefill, ViewOutput};
use crate::router::{Route, RouteError};
use crate::session::SessionStore;

/// Shown when the credentials are rejected or the API is unreachable
pub const LOGIN_FAILED: &str = "Email atau password salah.";

/// Login form
pub struct LoginView {
    email: Field,
    password: Field,
    error: Option<String>,
}

impl LoginView {
    pub fn new(prefill: Prefill) -> Self {
        Self {
            email: Field::new("Email", FieldKind::Email, prefill.email),
            password: Field::new("Password", FieldKind::Password, prefill.password),
            error: None,
        }
    }

    /// Fill the form from `input` and submit it
    pub async fn run(
        &mut self,
        session: &mut SessionStore,
        input: &mut dyn FormInput,
    ) -> Result<ViewOutput, RouteError> {
        let email = self.email.fill(input)?;
        let password = self.password.fill(input)?;

        let navigation = self.submit(session, &email, &password).await;
        Ok(ViewOutput {
            text: self.render(),
            navigation,
        })
    }

    /// Call the session store and decide where to go
    pub async fn submit(
        &mut self,
        session: &mut SessionStore,
        email: &str,
        password: &str,
    ) -> Navigation {
        self.error = None;

        if session.login(email, password).await {
            Navigation::Navigate(Route::Home)
        } else {
            self.error = Some(LOGIN_FAILED.to_string());
            Navigation::Stay
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Form chrome: title, error line, link to registration
    pub fn render(&self) -> String {
        let mut out = String::from("Login\n");
        if let Some(error) = &self.error {
            out.push_str(error);
            out.push('\n');
        }
        out.push_str("Belum punya akun? Daftar di sini: ajarin register\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;
    use crate::testing::FakeApi;
    use crate::views::ScriptedInput;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_login_success_navigates_home() {
        let api = Arc::new(FakeApi::new().login_returns("T1", json!({"id": 1})));
        let mut session = SessionStore::restore(api, Arc::new(MemoryTokenStore::new()));
        let mut view = LoginView::new(Prefill::default());
        let mut input = ScriptedInput::new(["a@b.com", "x"]);

        let output = view.run(&mut session, &mut input).await.unwrap();

        assert_eq!(output.navigation, Navigation::Navigate(Route::Home));
        assert_eq!(view.error(), None);
        assert_eq!(session.token(), Some("T1"));
    }

    #[tokio::test]
    async fn test_login_failure_shows_message() {
        let api = Arc::new(FakeApi::new());
        let mut session = SessionStore::restore(api, Arc::new(MemoryTokenStore::new()));
        let mut view = LoginView::new(Prefill {
            email: Some("a@b.com".into()),
            password: Some("salah".into()),
            ..Default::default()
        });
        let mut input = ScriptedInput::default();

        let output = view.run(&mut session, &mut input).await.unwrap();

        assert_eq!(output.navigation, Navigation::Stay);
        assert!(output.text.contains(LOGIN_FAILED));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_invalid_email_never_submitted() {
        let api = Arc::new(FakeApi::new());
        let mut session = SessionStore::restore(api.clone(), Arc::new(MemoryTokenStore::new()));
        let mut view = LoginView::new(Prefill::default());
        let mut input = ScriptedInput::new(["not-an-email"]);

        let result = view.run(&mut session, &mut input).await;

        assert!(matches!(result, Err(RouteError::InputClosed)));
        assert!(api.login_calls().is_empty());
    }
}
