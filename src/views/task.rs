//! Background fetches that can be abandoned.
//!
//! A view starts a [`FetchTask`] on mount and polls it from its own loop.
//! Cancelling the task (on unmount) guarantees the result is never applied,
//! even if the request is already in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// One request running on a worker thread.
pub struct FetchTask<T> {
    rx: Receiver<T>,
    token: CancelToken,
}

impl<T: Send + 'static> FetchTask<T> {
    pub fn spawn<F>(token: CancelToken, work: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let worker_token = token.clone();
        thread::spawn(move || {
            let out = work();
            if worker_token.is_cancelled() {
                tracing::debug!("Dropping result of cancelled fetch");
                return;
            }
            // Receiver may already be gone; nothing to report then.
            let _ = tx.send(out);
        });
        Self { rx, token }
    }
}

impl<T> FetchTask<T> {
    /// Non-blocking check. `None` while pending or once cancelled.
    pub fn try_take(&self) -> Option<T> {
        if self.token.is_cancelled() {
            return None;
        }
        match self.rx.try_recv() {
            Ok(out) => Some(out),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Block until the result arrives. `None` if cancelled.
    pub fn wait(&self) -> Option<T> {
        if self.token.is_cancelled() {
            return None;
        }
        self.rx.recv().ok().filter(|_| !self.token.is_cancelled())
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn wait_returns_the_result() {
        let task = FetchTask::spawn(CancelToken::new(), || 42);
        assert_eq!(task.wait(), Some(42));
    }

    #[test]
    fn cancelled_task_never_yields() {
        let (release_tx, release_rx) = channel::<()>();
        let task = FetchTask::spawn(CancelToken::new(), move || {
            release_rx.recv().ok();
            "late"
        });
        task.cancel();
        release_tx.send(()).unwrap();
        assert_eq!(task.wait(), None);
        assert_eq!(task.try_take(), None);
    }

    #[test]
    fn try_take_is_none_while_pending() {
        let (release_tx, release_rx) = channel::<()>();
        let task = FetchTask::spawn(CancelToken::new(), move || {
            release_rx.recv().ok();
            1
        });
        assert_eq!(task.try_take(), None);
        release_tx.send(()).unwrap();
        assert_eq!(task.wait(), Some(1));
    }
}
