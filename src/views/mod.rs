//! Page view models.
//!
//! Each page owns a [`Loader`] that runs exactly one API call when mounted
//! and settles into one terminal [`ViewState`]. Pages render themselves as
//! plain text; a front-end can instead read the state and draw it however
//! it likes.

pub mod about;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod prediction;
pub mod task;

pub use about::AboutView;
pub use dashboard::DashboardView;
pub use home::HomeView;
pub use login::{LoginState, LoginView};
pub use prediction::PredictionView;
pub use task::{CancelToken, FetchTask};

use std::sync::Arc;

use crate::router::Route;
use crate::TeaCastClient;

/// What a page is showing for its fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    /// User-facing message; the underlying error is logged, not shown.
    Failed(String),
    /// The fetch succeeded but there is nothing to show.
    Empty,
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Drives one fetch from `Loading` to a terminal state.
pub struct Loader<T> {
    state: ViewState<T>,
    task: Option<FetchTask<ViewState<T>>>,
    started: bool,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self {
            state: ViewState::Loading,
            task: None,
            started: false,
        }
    }
}

impl<T: Send + 'static> Loader<T> {
    /// Start the fetch. Later calls are ignored: a page fetches once.
    pub fn start<F>(&mut self, work: F)
    where
        F: FnOnce() -> ViewState<T> + Send + 'static,
    {
        if self.started {
            return;
        }
        self.started = true;
        self.task = Some(FetchTask::spawn(CancelToken::new(), work));
    }
}

impl<T> Loader<T> {
    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Apply the result if it has arrived. Returns `true` when the state changed.
    pub fn poll(&mut self) -> bool {
        match self.task.as_ref().and_then(FetchTask::try_take) {
            Some(state) => {
                self.state = state;
                self.task = None;
                true
            }
            None => false,
        }
    }

    /// Block until the fetch settles (or was cancelled).
    pub fn wait(&mut self) -> &ViewState<T> {
        if let Some(state) = self.task.as_ref().and_then(FetchTask::wait) {
            self.state = state;
            self.task = None;
        }
        &self.state
    }

    /// Abandon an in-flight fetch; its result will be discarded.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A mounted page, selected by [`Route`].
pub enum Page {
    Home(HomeView),
    Login(LoginView),
    Dashboard(DashboardView),
    Predictions(PredictionView),
    About(AboutView),
    NotFound(String),
}

impl Page {
    /// Build the page for `route` and start its fetch.
    pub fn mount(route: &Route, client: &Arc<TeaCastClient>) -> Self {
        match route {
            Route::Home => {
                let mut view = HomeView::new();
                view.mount(client);
                Page::Home(view)
            }
            Route::Login => Page::Login(LoginView::new()),
            Route::Dashboard => {
                let mut view = DashboardView::new();
                view.mount(client);
                Page::Dashboard(view)
            }
            Route::Predictions => {
                let mut view = PredictionView::new();
                view.mount(client);
                Page::Predictions(view)
            }
            Route::About => Page::About(AboutView),
            Route::NotFound(path) => Page::NotFound(path.clone()),
        }
    }

    /// Block until the page's fetch has settled.
    pub fn wait(&mut self) {
        match self {
            Page::Home(view) => {
                view.wait();
            }
            Page::Dashboard(view) => {
                view.wait();
            }
            Page::Predictions(view) => {
                view.wait();
            }
            Page::Login(_) | Page::About(_) | Page::NotFound(_) => {}
        }
    }

    pub fn unmount(&mut self) {
        match self {
            Page::Home(view) => view.unmount(),
            Page::Dashboard(view) => view.unmount(),
            Page::Predictions(view) => view.unmount(),
            Page::Login(view) => view.unmount(),
            Page::About(_) | Page::NotFound(_) => {}
        }
    }

    pub fn render(&self) -> String {
        match self {
            Page::Home(view) => view.render(),
            Page::Login(view) => view.render(),
            Page::Dashboard(view) => view.render(),
            Page::Predictions(view) => view.render(),
            Page::About(view) => view.render(),
            Page::NotFound(path) => format!("Page not found: {path}\n"),
        }
    }
}
