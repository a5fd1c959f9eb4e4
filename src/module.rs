//! Module load and unload.

use alloc::sync::Arc;
use log::{error, info};

use crate::{
    common::ModuleError,
    fstype::SimpleFsType,
    host::{FileSystemType, FillSuper, Vfs},
    inode_cache::InodeCache,
};

/// State of one loaded module instance.
///
/// Holding the value means the inode cache exists and the filesystem
/// type is registered, in that order; both are released in reverse
/// order when the value is consumed by [`exit`](Self::exit) or when
/// [`init`](Self::init) fails partway.
pub struct SimpleFsModule {
    host: Arc<dyn Vfs>,
    fs_type: Arc<SimpleFsType>,
    cache: InodeCache,
}

impl core::fmt::Debug for SimpleFsModule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimpleFsModule").finish_non_exhaustive()
    }
}

impl SimpleFsModule {
    /// Load: create the inode cache, then register the filesystem
    /// type.
    ///
    /// Registration failure rolls the cache back (destroy plus grace
    /// wait) before reporting, so a failed load leaves nothing behind.
    pub fn init(
        host: Arc<dyn Vfs>,
        fill_super: Arc<dyn FillSuper>,
    ) -> Result<Self, ModuleError> {
        let cache = match InodeCache::create(host.clone()) {
            Ok(cache) => cache,
            Err(err) => {
                error!("Failed to create inode cache");
                return Err(err);
            }
        };

        let fs_type = Arc::new(SimpleFsType::new(host.clone(), fill_super));
        if host.register_filesystem(fs_type.clone()).is_err() {
            error!("Failed to register file system");
            // `cache` unwinds here: destroy, then the grace wait.
            return Err(ModuleError::Registration);
        }

        info!("module loaded");
        Ok(Self {
            host,
            fs_type,
            cache,
        })
    }

    /// The registered type descriptor.
    pub fn fs_type(&self) -> &Arc<SimpleFsType> {
        &self.fs_type
    }

    /// Unload: unregister, tear down the cache, wait out the grace
    /// period. Runs to completion even when unregistration fails.
    pub fn exit(self) {
        let Self {
            host,
            fs_type,
            cache,
        } = self;

        if host.unregister_filesystem(fs_type.name()).is_err() {
            error!("Failed to unregister file system");
        }

        // Only after the grace wait inside this drop is the inode
        // layout safe to unload.
        drop(cache);

        info!("module unloaded");
    }
}
