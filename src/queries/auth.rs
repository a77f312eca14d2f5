//! Login against `/login`.

use std::time::Instant;

use crate::config::LOGIN_PATH;
use crate::error::Result;
use crate::models::{AuthResult, Credentials};
use crate::policy::FailurePolicy;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// AuthQuery
// ---------------------------------------------------------------------------

pub struct AuthQuery<'a> {
    transport: &'a dyn Transport,
}

impl<'a> AuthQuery<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Post credentials and return the decoded response body.
    ///
    /// A 2xx body is returned as-is, even when it carries `success: false`;
    /// interpreting it is up to the caller. Network failures and non-2xx
    /// statuses (e.g. 401) come back as transport errors. Nothing is stored.
    #[tracing::instrument(skip_all, fields(username = %username))]
    pub fn login(&self, username: &str, password: &str) -> Result<AuthResult> {
        let start = Instant::now();
        let body = serde_json::to_value(Credentials::new(username, password))?;

        let outcome = self
            .transport
            .post(LOGIN_PATH, &body)
            .and_then(|resp| Ok(serde_json::from_value::<AuthResult>(resp)?));

        if let Ok(result) = &outcome {
            tracing::info!(
                operation = "authenticate",
                success = result.is_success(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Login response received"
            );
        }
        FailurePolicy::Propagate.resolve("authenticate", outcome)
    }
}
