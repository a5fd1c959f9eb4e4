//! Contracts this module consumes from its host kernel.
//!
//! The lifecycle layer never reaches past these traits: generic mount
//! and teardown, filesystem-type registration, the dedicated object
//! cache and the deferred-reclamation barrier are all host-provided.

use alloc::sync::Arc;
use core::{alloc::Layout, ptr::NonNull};

use crate::{
    common::{FsFlags, VfsResult},
    superblock::SbInfo,
};

/// A registered filesystem type: the descriptor the host dispatches
/// mount and unmount through. Immutable once registered.
pub trait FileSystemType: Send + Sync {
    /// Name the type is registered under, e.g. `"simplefs"`.
    fn name(&self) -> &'static str;

    fn fs_flags(&self) -> FsFlags;

    /// Mount one instance from `dev_name`.
    fn mount(
        self: Arc<Self>,
        flags: u32,
        dev_name: &str,
        data: &[u8],
    ) -> VfsResult<Arc<dyn Dentry>>;

    /// Tear down one mounted instance.
    fn kill_sb(&self, sb: Arc<dyn SuperBlock>) -> VfsResult<()>;
}

/// Generic state of one mounted instance, owned by the host.
pub trait SuperBlock: Send + Sync {
    /// Device the instance was mounted from.
    fn device_name(&self) -> &str;

    /// Attach the filesystem-private state. Called once while the
    /// superblock is being populated.
    fn set_fs_info(&self, info: Arc<SbInfo>);

    fn fs_info(&self) -> Option<Arc<SbInfo>>;
}

/// Directory handle returned by a successful mount.
pub trait Dentry: Send + Sync {
    fn superblock(&self) -> Arc<dyn SuperBlock>;
}

impl core::fmt::Debug for dyn Dentry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("dyn Dentry")
    }
}

/// Populates the filesystem-specific fields of a freshly allocated
/// superblock, including the journal handle when one is attached.
pub trait FillSuper: Send + Sync {
    fn fill_super(&self, sb: &dyn SuperBlock, data: &[u8]) -> VfsResult<()>;
}

/// Host reference to an open file object. Newer hosts hand the journal
/// device out this way.
pub trait FileRef: Send + Sync {
    /// Drop the host's reference.
    fn put(&self);
}

/// Exclusive open handle to a block device, as handed out by older
/// hosts.
pub trait BdevHandle: Send + Sync {
    /// Release the exclusive claim.
    fn release(&self);
}

/// A dedicated pool for fixed-size objects of one type.
///
/// Internally synchronized. Slots freed through it may stay physically
/// allocated until the host's next grace period.
pub trait ObjectCache: Send + Sync {
    fn name(&self) -> &str;

    /// Layout of the objects the pool was created for.
    fn layout(&self) -> Layout;

    /// Take one slot, or `None` when the pool is exhausted.
    fn alloc(&self) -> Option<NonNull<u8>>;

    /// Queue `obj` for deferred reclamation.
    ///
    /// # Safety
    ///
    /// `obj` must come from [`alloc`](Self::alloc) on the same pool and
    /// must not be used afterwards.
    unsafe fn free(&self, obj: NonNull<u8>);

    /// Return slots freed before the current grace period to the pool.
    fn reclaim(&self);
}

/// Generic host primitives consumed by the lifecycle layer.
pub trait Vfs: Send + Sync {
    /// Make `fs_type` mountable. A name already taken is an error.
    fn register_filesystem(&self, fs_type: Arc<dyn FileSystemType>) -> VfsResult<()>;

    fn unregister_filesystem(&self, name: &str) -> VfsResult<()>;

    /// Generic block-device mount: open `dev_name`, allocate the
    /// generic superblock, run `fill_super` over it and return the
    /// root directory handle.
    fn mount_bdev(
        &self,
        fs_type: Arc<dyn FileSystemType>,
        flags: u32,
        dev_name: &str,
        data: &[u8],
        fill_super: &dyn FillSuper,
    ) -> VfsResult<Arc<dyn Dentry>>;

    /// Generic teardown: release the backing block device and free the
    /// generic superblock. The superblock is invalid afterwards.
    fn kill_block_super(&self, sb: Arc<dyn SuperBlock>);

    /// Create a dedicated pool for objects of `layout`.
    fn create_object_cache(
        &self,
        name: &'static str,
        layout: Layout,
    ) -> VfsResult<Arc<dyn ObjectCache>>;

    /// Drop the host's side of `cache`. Freed objects are not
    /// guaranteed to be physically gone afterwards.
    fn destroy_object_cache(&self, cache: Arc<dyn ObjectCache>);

    /// Block until all reclamation deferred so far is physically
    /// complete.
    fn wait_grace_period(&self);
}
