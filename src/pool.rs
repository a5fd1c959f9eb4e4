//! A fixed-size object pool over a buddy-managed region.

use alloc::{
    alloc::{alloc, dealloc},
    vec::Vec,
};
use core::{alloc::Layout, ptr::NonNull};

use buddy_system_allocator::LockedHeap;
use spin::Mutex;

use crate::host::ObjectCache;

/// Reference implementation of the [`ObjectCache`] contract.
///
/// Slots are carved out of a single region taken from the global
/// allocator at creation time. Freed slots are parked on a pending
/// list and only returned to the heap by `reclaim`, which the host
/// runs under its grace-period discipline.
pub struct SlabPool {
    name: &'static str,
    object: Layout,
    heap: LockedHeap<32>,
    region: NonNull<u8>,
    region_layout: Layout,
    pending: Mutex<Vec<NonNull<u8>>>,
}

unsafe impl Send for SlabPool {}
unsafe impl Sync for SlabPool {}

impl SlabPool {
    /// Allocate a pool with room for `capacity` objects of `object`
    /// layout. `None` when the backing region cannot be allocated.
    pub fn new(name: &'static str, object: Layout, capacity: usize) -> Option<Self> {
        // The buddy heap serves power-of-two blocks.
        let slot = object.pad_to_align().size().next_power_of_two();
        let size = slot.checked_mul(capacity)?;
        if size == 0 {
            return None;
        }
        let region_layout = Layout::from_size_align(size, object.align().max(8)).ok()?;

        let region = NonNull::new(unsafe { alloc(region_layout) })?;
        let heap = LockedHeap::empty();
        unsafe {
            heap.lock().init(region.as_ptr() as usize, size);
        }

        Some(Self {
            name,
            object,
            heap,
            region,
            region_layout,
            pending: Mutex::new(Vec::new()),
        })
    }

    /// Slots freed but not yet physically reclaimed.
    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }
}

impl ObjectCache for SlabPool {
    fn name(&self) -> &str {
        self.name
    }

    fn layout(&self) -> Layout {
        self.object
    }

    fn alloc(&self) -> Option<NonNull<u8>> {
        self.heap.lock().alloc(self.object).ok()
    }

    unsafe fn free(&self, obj: NonNull<u8>) {
        self.pending.lock().push(obj);
    }

    fn reclaim(&self) {
        let mut pending = self.pending.lock();
        for obj in pending.drain(..) {
            self.heap.lock().dealloc(obj, self.object);
        }
    }
}

impl Drop for SlabPool {
    fn drop(&mut self) {
        unsafe { dealloc(self.region.as_ptr(), self.region_layout) };
    }
}
