//! Router
//!
//! Maps `/login`, `/register` and `/` to their views and follows the
//! navigations they request. The router owns the session store for the
//! lifetime of a run and lends it to each view.

use std::fmt;
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;

use crate::render::RenderOptions;
use crate::session::SessionStore;
use crate::views::{FormInput, HomeView, LoginView, Navigation, Prefill, RegisterView};

/// Upper bound on navigations within one run
pub const MAX_HOPS: usize = 16;

/// Routes of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Home,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Home => "/",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('/') {
            "" => Ok(Route::Home),
            "/login" => Ok(Route::Login),
            "/register" => Ok(Route::Register),
            _ => Err(RouteError::NotFound(s.to_string())),
        }
    }
}

/// Errors that end a router run
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("No view for path {0:?}")]
    NotFound(String),

    #[error("Input closed before the form was complete")]
    InputClosed,

    #[error("Gave up after {0} redirects")]
    TooManyRedirects(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Last route rendered
    pub route: Route,
    /// Navigation requested but not followed (single-view runs only)
    pub pending: Option<Route>,
    /// False when the last view was a form whose submission failed
    pub completed: bool,
}

/// Session owner and view dispatcher
pub struct Router {
    session: SessionStore,
    input: Box<dyn FormInput>,
    options: RenderOptions,
    prefill: Prefill,
    home: HomeView,
}

impl Router {
    pub fn new(session: SessionStore, input: Box<dyn FormInput>, options: RenderOptions) -> Self {
        Self {
            session,
            input,
            options,
            prefill: Prefill::default(),
            home: HomeView::new(),
        }
    }

    /// Values for the first form shown
    pub fn with_prefill(mut self, prefill: Prefill) -> Self {
        self.prefill = prefill;
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Render `start` and follow navigations until a view stays put
    pub async fn run(&mut self, start: Route, out: &mut dyn Write) -> Result<RunOutcome, RouteError> {
        let mut route = start;
        let mut hops = 0;

        loop {
            let (navigation, failed) = self.visit(route, out).await?;

            match navigation {
                Navigation::Navigate(next) => {
                    hops += 1;
                    if hops > MAX_HOPS {
                        return Err(RouteError::TooManyRedirects(MAX_HOPS));
                    }
                    tracing::debug!(from = %route, to = %next, "Navigating");
                    route = next;
                }
                Navigation::Stay if failed && self.input.is_interactive() => {
                    tracing::debug!(route = %route, "Retrying form");
                }
                Navigation::Stay => {
                    return Ok(RunOutcome {
                        route,
                        pending: None,
                        completed: !failed,
                    });
                }
            }
        }
    }

    /// Render a single view without following its navigation
    pub async fn once(&mut self, route: Route, out: &mut dyn Write) -> Result<RunOutcome, RouteError> {
        let (navigation, failed) = self.visit(route, out).await?;

        Ok(RunOutcome {
            route,
            pending: match navigation {
                Navigation::Navigate(next) => Some(next),
                Navigation::Stay => None,
            },
            completed: !failed,
        })
    }

    /// Run one view. Returns its navigation and whether a form submission failed.
    async fn visit(
        &mut self,
        route: Route,
        out: &mut dyn Write,
    ) -> Result<(Navigation, bool), RouteError> {
        tracing::debug!(route = %route, "Entering view");

        match route {
            Route::Home => {
                let navigation = self.home.enter(&mut self.session).await;
                match navigation {
                    Navigation::Stay => {
                        out.write_all(self.home.render(&self.options).as_bytes())?;
                    }
                    Navigation::Navigate(_) => {
                        if let Some(error) = self.home.error() {
                            self.input.notify(error);
                        }
                    }
                }
                Ok((navigation, false))
            }
            Route::Login => {
                let mut view = LoginView::new(std::mem::take(&mut self.prefill));
                let output = view.run(&mut self.session, self.input.as_mut()).await?;
                finish_form(output.navigation, &output.text, out)
            }
            Route::Register => {
                let mut view = RegisterView::new(std::mem::take(&mut self.prefill));
                let output = view.run(&mut self.session, self.input.as_mut()).await?;
                finish_form(output.navigation, &output.text, out)
            }
        }
    }
}

/// Forms only print when they stay, i.e. when showing an error
fn finish_form(
    navigation: Navigation,
    text: &str,
    out: &mut dyn Write,
) -> Result<(Navigation, bool), RouteError> {
    match navigation {
        Navigation::Stay => {
            out.write_all(text.as_bytes())?;
            Ok((navigation, true))
        }
        Navigation::Navigate(_) => Ok((navigation, false)),
    }
}
