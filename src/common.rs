//! Shared types and error codes.

use bitflags::bitflags;
use onlyerror::Error;

/// Result of an operation crossing the host VFS boundary.
pub type VfsResult<T> = Result<T, VfsError>;

/// Errno-style codes exchanged with the host VFS.
///
/// Mount failures are surfaced to the caller carrying whichever code
/// the host produced, unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VfsError {
    /// out of memory
    NoMem,
    /// no such device
    NoDev,
    /// invalid argument
    Inval,
    /// I/O error
    Io,
    /// already exists
    Exist,
    /// not found
    NotFound,
    /// device or resource busy
    Busy,
    /// operation not supported
    NoSys,
}

/// Load-time failures of the module lifecycle.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleError {
    /// inode cache creation failed
    CacheInit,
    /// file system registration failed
    Registration,
}

bitflags! {
    /// Properties of a registered filesystem type.
    pub struct FsFlags: u32 {
        /// Instances must be backed by a block device.
        const REQUIRES_DEV = 1 << 0;
    }
}
