use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use momentum_core::model::SessionState;
use serde::{Deserialize, Serialize};

use crate::Clock;
use crate::error::ServiceError;

/// Identifier of one interactive session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared reference to one session's state.
///
/// Every access runs under the session's own lock, so a mutation always
/// completes before the next one starts.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    state: Arc<Mutex<SessionState>>,
}

impl SessionHandle {
    fn new(state: SessionState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    // Mutations never leave the state half-updated, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the state while holding the session lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }

    #[must_use]
    pub fn same_session(&self, other: &SessionHandle) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

/// All live sessions of a host. Sessions never see each other's state.
#[derive(Debug)]
pub struct SessionRegistry {
    clock: Clock,
    next_id: AtomicU64,
    sessions: Mutex<HashMap<SessionId, SessionHandle>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            next_id: AtomicU64::new(1),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<SessionId, SessionHandle>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create default state for `id` unless it already exists.
    ///
    /// Calling this again for a live session returns the existing handle untouched.
    pub fn init(&self, id: SessionId) -> SessionHandle {
        let mut sessions = self.sessions();
        if let Some(existing) = sessions.get(&id) {
            return existing.clone();
        }
        let handle = SessionHandle::new(SessionState::new(self.clock.today()));
        sessions.insert(id, handle.clone());
        tracing::debug!(session = %id, "session initialized");
        handle
    }

    /// Allocate a fresh id and initialize it.
    pub fn open(&self) -> (SessionId, SessionHandle) {
        loop {
            let id = SessionId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
            let mut sessions = self.sessions();
            if sessions.contains_key(&id) {
                continue;
            }
            let handle = SessionHandle::new(SessionState::new(self.clock.today()));
            sessions.insert(id, handle.clone());
            tracing::debug!(session = %id, "session opened");
            return (id, handle);
        }
    }

    /// # Errors
    ///
    /// Returns `ServiceError::UnknownSession` if `id` was never initialized or has ended.
    pub fn get(&self, id: SessionId) -> Result<SessionHandle, ServiceError> {
        self.sessions()
            .get(&id)
            .cloned()
            .ok_or(ServiceError::UnknownSession(id))
    }

    /// Drop a session's state. Returns `false` if it was not live.
    pub fn end(&self, id: SessionId) -> bool {
        let removed = self.sessions().remove(&id).is_some();
        if removed {
            tracing::debug!(session = %id, "session ended");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions().is_empty()
    }
}
