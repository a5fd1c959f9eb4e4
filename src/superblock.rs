//! Filesystem-private state carried by a mounted superblock.

use spin::Mutex;

use crate::journal::JournalHandle;

/// Lifecycle of one mounted instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    Mounting,
    Mounted,
    Unmounting,
    Unmounted,
}

/// Per-instance state attached to the generic superblock for as long
/// as the instance is mounted. Owned exclusively by that instance;
/// there is no cross-instance sharing.
pub struct SbInfo {
    journal: Mutex<JournalHandle>,
    state: Mutex<InstanceState>,
}

impl SbInfo {
    /// State for a superblock that is being populated.
    pub fn new(journal: JournalHandle) -> Self {
        Self {
            journal: Mutex::new(journal),
            state: Mutex::new(InstanceState::Mounting),
        }
    }

    pub fn state(&self) -> InstanceState {
        *self.state.lock()
    }

    pub(crate) fn set_state(&self, state: InstanceState) {
        *self.state.lock() = state;
    }

    /// Whether a journal device is still attached.
    pub fn has_journal(&self) -> bool {
        self.journal.lock().is_present()
    }

    /// Detach the journal handle. Later calls observe `None`.
    pub(crate) fn take_journal(&self) -> JournalHandle {
        core::mem::take(&mut *self.journal.lock())
    }
}
