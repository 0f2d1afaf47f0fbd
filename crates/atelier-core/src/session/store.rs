//! In-memory anonymous-work store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use atelier_types::AnonWork;

use super::AnonWorkStore;

/// Process-local staging area for pre-authentication work.
///
/// The pre-auth side of the app calls [`stage`](Self::stage) as the user
/// chats; the session flow reads and clears it through [`AnonWorkStore`].
#[derive(Debug, Default)]
pub struct MemoryAnonWorkStore {
    staged: Mutex<Option<AnonWork>>,
}

impl MemoryAnonWorkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever is currently staged.
    pub fn stage(&self, work: AnonWork) {
        *self.locked() = Some(work);
    }

    fn locked(&self) -> MutexGuard<'_, Option<AnonWork>> {
        self.staged.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AnonWorkStore for MemoryAnonWorkStore {
    fn get(&self) -> Option<AnonWork> {
        self.locked().clone()
    }

    fn clear(&self) {
        *self.locked() = None;
    }
}
