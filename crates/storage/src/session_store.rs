//! Logged-in session flag.

use crate::error::StoreResult;
use crate::keys;
use crate::kv::KeyValueStore;

/// Value held under [`keys::SESSION`] while a session is active.
const ACTIVE: &str = "true";

/// The persisted logged-in marker gating the dashboard.
pub struct SessionStore<S> {
    kv: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Record a successful login.
    pub async fn log_in(&self) -> StoreResult<()> {
        self.kv.set(keys::SESSION, ACTIVE).await?;
        Ok(())
    }

    /// Clear the session.
    pub async fn log_out(&self) -> StoreResult<()> {
        self.kv.remove(keys::SESSION).await?;
        Ok(())
    }

    /// True while a session is active.
    pub async fn is_logged_in(&self) -> StoreResult<bool> {
        Ok(self.kv.get(keys::SESSION).await?.as_deref() == Some(ACTIVE))
    }
}
