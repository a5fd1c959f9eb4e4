//! The dedicated cache backing in-memory inode objects.

use alloc::sync::Arc;
use core::{alloc::Layout, ptr::NonNull};

use crate::{
    common::ModuleError,
    host::{ObjectCache, Vfs},
    inode::InodeInfo,
};

/// Name the pool is created under on the host.
pub const CACHE_NAME: &str = "simplefs_cache";

/// Owner of the inode object pool for one module lifecycle.
///
/// Dropping the handle destroys the pool and then waits out the grace
/// period, so that objects freed through it are physically gone before
/// the caller proceeds. There is exactly one live `InodeCache` per
/// active module; acquiring a second one without dropping the first is
/// a caller defect.
pub struct InodeCache {
    host: Arc<dyn Vfs>,
    cache: Arc<dyn ObjectCache>,
}

impl InodeCache {
    /// Allocate the dedicated pool, sized for [`InodeInfo`].
    pub fn create(host: Arc<dyn Vfs>) -> Result<Self, ModuleError> {
        let cache = host
            .create_object_cache(CACHE_NAME, Layout::new::<InodeInfo>())
            .map_err(|_| ModuleError::CacheInit)?;
        Ok(Self { host, cache })
    }

    /// Take a slot from the pool and initialize it for `ino`.
    pub fn alloc_inode(&self, ino: u64) -> Option<NonNull<InodeInfo>> {
        let slot = self.cache.alloc()?.cast::<InodeInfo>();
        unsafe { slot.as_ptr().write(InodeInfo::new(ino)) };
        Some(slot)
    }

    /// Return `inode` to the pool. The slot may stay physically
    /// allocated until the next grace period.
    ///
    /// # Safety
    ///
    /// `inode` must come from [`alloc_inode`](Self::alloc_inode) on
    /// this cache and must not be used afterwards.
    pub unsafe fn free_inode(&self, inode: NonNull<InodeInfo>) {
        core::ptr::drop_in_place(inode.as_ptr());
        self.cache.free(inode.cast());
    }
}

impl Drop for InodeCache {
    fn drop(&mut self) {
        self.host.destroy_object_cache(self.cache.clone());
        // Destroy alone does not free the memory; the grace period
        // must elapse first.
        self.host.wait_grace_period();
    }
}
