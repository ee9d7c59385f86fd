//! Session Store
//!
//! Owns the session (user + bearer token) and is the only place it changes.
//! Every failure is downgraded to a boolean here; nothing propagates to the
//! views.

use std::sync::Arc;

use super::token::TokenStore;
use crate::api::{ApiError, ApiResult, RemoteApi, UserProfile};

/// Authenticated identity held by the client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
}

impl Session {
    /// `Authorization` header value for outgoing requests
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }
}

/// Session state plus the collaborators it is mutated through
pub struct SessionStore {
    api: Arc<dyn RemoteApi>,
    tokens: Arc<dyn TokenStore>,
    session: Session,
}

impl SessionStore {
    /// Create a store, rehydrating the token from the persisted slot
    pub fn restore(api: Arc<dyn RemoteApi>, tokens: Arc<dyn TokenStore>) -> Self {
        let token = match tokens.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Ignoring unreadable token slot: {}", e);
                None
            }
        };

        if token.is_some() {
            tracing::debug!("Session token restored");
        }

        Self {
            api,
            tokens,
            session: Session { user: None, token },
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.token.is_some()
    }

    /// `Some("Bearer <token>")` exactly when a token is present
    pub fn authorization(&self) -> Option<String> {
        self.session.authorization()
    }

    /// Remote collaborator, for views that fetch with the current token
    pub fn api(&self) -> &dyn RemoteApi {
        self.api.as_ref()
    }

    /// Exchange credentials for a token and start a session
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        let response = match self.api.login(email, password).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(email = %email, "Login failed: {}", e);
                return false;
            }
        };

        if let Err(e) = self.tokens.save(&response.access_token) {
            tracing::warn!("Login failed: could not persist token: {}", e);
            return false;
        }

        self.session = Session {
            user: Some(response.user),
            token: Some(response.access_token),
        };

        tracing::info!(
            user = self.user().and_then(UserProfile::display_name).unwrap_or("-"),
            "Logged in"
        );
        true
    }

    /// Create a remote account. The local session is left untouched.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> bool {
        match self.api.register(name, email, password).await {
            Ok(()) => {
                tracing::info!(email = %email, "Account registered");
                true
            }
            Err(e) => {
                tracing::warn!(email = %email, "Registration failed: {}", e);
                false
            }
        }
    }

    /// Clear the session and the persisted token. No remote call.
    pub fn logout(&mut self) {
        let was_authenticated = self.is_authenticated();
        self.session = Session::default();

        if let Err(e) = self.tokens.clear() {
            tracing::warn!("Failed to clear persisted token: {}", e);
        }

        if was_authenticated {
            tracing::info!("Logged out");
        }
    }

    /// Profile of the logged-in user. A 401 ends the session.
    pub async fn profile(&mut self) -> ApiResult<UserProfile> {
        let token = self.token().ok_or(ApiError::Unauthorized)?.to_string();

        match self.api.profile(&token).await {
            Ok(profile) => Ok(profile),
            Err(e) => {
                if e.is_unauthorized() {
                    self.logout();
                }
                Err(e)
            }
        }
    }
}
