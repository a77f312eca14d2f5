//! Signed-in session state.
//!
//! The role returned by a successful login lives in a [`Session`] value that
//! is passed to whatever needs it. Persistence goes through a
//! [`SessionStore`], so the role survives restarts when backed by a file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TeaCastError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Set by every accepted login, including ones that carry no role.
    #[serde(default)]
    pub signed_in: bool,
    #[serde(default)]
    pub role: Option<String>,
}

/// Where a [`Session`] is persisted.
pub trait SessionStore: Send {
    fn load(&self) -> Result<SessionRecord>;
    fn save(&self, record: &SessionRecord) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileSessionStore
// ---------------------------------------------------------------------------

/// JSON file store. A missing file reads as an empty session.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<SessionRecord> {
        if !self.path.exists() {
            return Ok(SessionRecord::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(record) => Ok(record),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt session file; ignoring");
                Ok(SessionRecord::default())
            }
        }
    }

    fn save(&self, record: &SessionRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(record)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// MemorySessionStore
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemorySessionStore {
    record: Mutex<SessionRecord>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<SessionRecord> {
        self.record
            .lock()
            .map(|r| r.clone())
            .map_err(|_| TeaCastError::InvalidArgument("session lock poisoned".into()))
    }

    fn save(&self, record: &SessionRecord) -> Result<()> {
        let mut guard = self
            .record
            .lock()
            .map_err(|_| TeaCastError::InvalidArgument("session lock poisoned".into()))?;
        *guard = record.clone();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.save(&SessionRecord::default())
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The current user's sign-in state and role, set on login and cleared on
/// logout. An accepted login without a role still counts as signed in.
pub struct Session {
    record: SessionRecord,
    store: Box<dyn SessionStore>,
}

impl Session {
    /// Restore whatever the store holds.
    pub fn load(store: Box<dyn SessionStore>) -> Result<Self> {
        let record = store.load()?;
        Ok(Self { record, store })
    }

    /// A session that lives only in memory.
    pub fn in_memory() -> Self {
        Self {
            record: SessionRecord::default(),
            store: Box::new(MemorySessionStore::new()),
        }
    }

    pub fn role(&self) -> Option<&str> {
        self.record.role.as_deref()
    }

    /// Files written before `signed_in` existed only carry a role.
    pub fn is_signed_in(&self) -> bool {
        self.record.signed_in || self.record.role.is_some()
    }

    /// Record a successful login and persist it.
    pub fn sign_in(&mut self, role: Option<String>) -> Result<()> {
        let record = SessionRecord {
            signed_in: true,
            role,
        };
        self.store.save(&record)?;
        self.record = record;
        tracing::info!(role = ?self.record.role, "Session started");
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<()> {
        self.store.clear()?;
        self.record = SessionRecord::default();
        tracing::info!("Session cleared");
        Ok(())
    }
}
