//! Ownership and release of the journal block-device handle.

use alloc::sync::Arc;

use crate::host::{BdevHandle, FileRef};

/// Ownership token for the secondary journal device attached to a
/// mounted superblock.
///
/// The representation depends on the host version: newer hosts hand
/// the device out as a file reference, older ones as an exclusive
/// block-device handle. `None` means no journal was attached, which is
/// a valid state rather than an error.
#[derive(Clone, Default)]
pub enum JournalHandle {
    /// The host keeps the journal device open as a file reference.
    File(Arc<dyn FileRef>),
    /// The host hands out an exclusive block-device handle.
    Bdev(Arc<dyn BdevHandle>),
    /// No journal device attached.
    #[default]
    None,
}

impl JournalHandle {
    /// Whether a journal device is attached.
    pub fn is_present(&self) -> bool {
        !matches!(self, JournalHandle::None)
    }

    /// Release the underlying device reference, if any.
    ///
    /// Consumes the handle; every representation has exactly one
    /// release path and it runs at most once.
    pub fn release(self) {
        match self {
            JournalHandle::File(file) => file.put(),
            JournalHandle::Bdev(bdev) => bdev.release(),
            JournalHandle::None => {}
        }
    }
}
