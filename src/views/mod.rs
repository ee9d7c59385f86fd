//! Views
//!
//! The three screens of the dashboard. Each view reads the session, calls
//! its operations, and tells the router where to go next.

mod form;
mod home;
mod login;
mod register;

pub use form::{is_email, Field, FieldKind, FormInput, ScriptedInput, StdinInput};
pub use home::{HomeView, FETCH_FAILED};
pub use login::{LoginView, LOGIN_FAILED};
pub use register::{RegisterView, REGISTER_FAILED};

use crate::router::Route;

/// Where a view wants to go after it ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Remain on the current route
    Stay,
    /// Switch to another route
    Navigate(Route),
}

/// Result of running a form view
#[derive(Debug, Clone)]
pub struct ViewOutput {
    pub text: String,
    pub navigation: Navigation,
}

/// Form values supplied up front, e.g. from command-line flags
#[derive(Debug, Clone, Default)]
pub struct Prefill {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
