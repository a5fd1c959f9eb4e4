//! Mount and unmount entry points.

use alloc::sync::Arc;
use log::{error, info};

use crate::{
    common::{FsFlags, VfsResult},
    host::{Dentry, FileSystemType, FillSuper, SuperBlock, Vfs},
    superblock::InstanceState,
};

/// The "simplefs" filesystem type: mounts instances off block devices
/// through the host's generic mount path.
pub struct SimpleFsType {
    host: Arc<dyn Vfs>,
    fill_super: Arc<dyn FillSuper>,
}

impl SimpleFsType {
    pub const NAME: &'static str = "simplefs";

    /// A descriptor delegating generic work to `host` and superblock
    /// population to `fill_super`.
    pub fn new(host: Arc<dyn Vfs>, fill_super: Arc<dyn FillSuper>) -> Self {
        Self { host, fill_super }
    }
}

impl FileSystemType for SimpleFsType {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn fs_flags(&self) -> FsFlags {
        FsFlags::REQUIRES_DEV
    }

    /// Mount a simplefs partition. The host error is surfaced
    /// unchanged on failure; no retries.
    fn mount(
        self: Arc<Self>,
        flags: u32,
        dev_name: &str,
        data: &[u8],
    ) -> VfsResult<Arc<dyn Dentry>> {
        let result = self.host.mount_bdev(
            self.clone(),
            flags,
            dev_name,
            data,
            self.fill_super.as_ref(),
        );

        match &result {
            Ok(dentry) => {
                if let Some(sbi) = dentry.superblock().fs_info() {
                    sbi.set_state(InstanceState::Mounted);
                }
                info!("'{}' mount success", dev_name);
            }
            Err(_) => error!("'{}' mount failure", dev_name),
        }

        result
    }

    /// Unmount a simplefs partition.
    fn kill_sb(&self, sb: Arc<dyn SuperBlock>) -> VfsResult<()> {
        if let Some(sbi) = sb.fs_info() {
            sbi.set_state(InstanceState::Unmounting);
            // Generic teardown frees the superblock that held the
            // handle; the journal must be released first.
            sbi.take_journal().release();
            self.host.kill_block_super(sb);
            sbi.set_state(InstanceState::Unmounted);
        } else {
            self.host.kill_block_super(sb);
        }

        info!("unmounted disk");
        Ok(())
    }
}
