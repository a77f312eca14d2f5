//! Login form.

use std::sync::Arc;

use super::task::{CancelToken, FetchTask};
use crate::error::Result;
use crate::models::AuthResult;
use crate::router::Route;
use crate::session::Session;
use crate::TeaCastClient;

pub const LOGIN_FAILED: &str = "Invalid credentials, please try again";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    Idle,
    Submitting,
    Failed(String),
    /// Signed in; the caller should navigate to the contained route.
    SignedIn(Route),
}

pub struct LoginView {
    pub username: String,
    pub password: String,
    state: LoginState,
    task: Option<FetchTask<Result<AuthResult>>>,
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginView {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            state: LoginState::Idle,
            task: None,
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Send the current credentials. Ignored while a submission is pending.
    pub fn submit(&mut self, client: &Arc<TeaCastClient>) {
        if self.state == LoginState::Submitting {
            return;
        }
        let client = Arc::clone(client);
        let username = self.username.clone();
        let password = self.password.clone();
        self.task = Some(FetchTask::spawn(CancelToken::new(), move || {
            client.auth().login(&username, &password)
        }));
        self.state = LoginState::Submitting;
    }

    /// Apply the login result if it has arrived. Returns `true` on change.
    pub fn poll(&mut self, session: &mut Session) -> bool {
        match self.task.as_ref().and_then(FetchTask::try_take) {
            Some(outcome) => {
                self.finish(outcome, session);
                true
            }
            None => false,
        }
    }

    /// Block until the submission settles.
    pub fn wait(&mut self, session: &mut Session) -> &LoginState {
        if let Some(outcome) = self.task.as_ref().and_then(FetchTask::wait) {
            self.finish(outcome, session);
        }
        &self.state
    }

    /// Both a 2xx body with `success: false` and a 401 end up here as a
    /// failure with the same generic message.
    fn finish(&mut self, outcome: Result<AuthResult>, session: &mut Session) {
        self.task = None;
        self.state = match outcome {
            Ok(result) if result.is_success() => match session.sign_in(result.role) {
                Ok(()) => LoginState::SignedIn(Route::Dashboard),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to persist session");
                    LoginState::Failed(LOGIN_FAILED.to_string())
                }
            },
            Ok(result) => {
                tracing::warn!(message = ?result.message, "Login rejected");
                LoginState::Failed(LOGIN_FAILED.to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, message = ?e.server_message(), "Login failed");
                LoginState::Failed(LOGIN_FAILED.to_string())
            }
        };
    }

    pub fn unmount(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
        if self.state == LoginState::Submitting {
            self.state = LoginState::Idle;
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Login\n");
        match &self.state {
            LoginState::Idle => {}
            LoginState::Submitting => out.push_str("Signing in...\n"),
            LoginState::Failed(msg) => {
                out.push_str(msg);
                out.push('\n');
            }
            LoginState::SignedIn(route) => out.push_str(&format!("Signed in. Continue to {route}\n")),
        }
        out
    }
}
