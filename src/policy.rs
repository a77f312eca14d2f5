//! Per-operation failure policy.
//!
//! Most operations hand errors back to the caller. Best-effort operations
//! (the auction ticker) degrade to a default value instead.

use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum FailurePolicy<T> {
    /// Return the error to the caller unchanged.
    Propagate,
    /// Log the error and return this value instead.
    RecoverWith(T),
}

impl<T> FailurePolicy<T> {
    /// Apply the policy to the outcome of `operation`.
    pub fn resolve(self, operation: &str, outcome: Result<T>) -> Result<T> {
        match (self, outcome) {
            (_, Ok(value)) => Ok(value),
            (FailurePolicy::Propagate, Err(e)) => {
                tracing::error!(operation, kind = ?e.kind(), error = %e, "Request failed");
                Err(e)
            }
            (FailurePolicy::RecoverWith(default), Err(e)) => {
                tracing::warn!(operation, kind = ?e.kind(), error = %e, "Request failed; using default");
                Ok(default)
            }
        }
    }
}
