use core::{
    cell::Cell,
    ptr::NonNull,
};

use crate::{Allocator, GLOBAL_ALLOC};

/// Counts blocks and in-place construct/destroy calls, and can be told to
/// fail after a number of successful allocations.
#[derive(Default)]
pub struct TestAlloc {
    allocations: Cell<usize>,
    live_blocks: Cell<usize>,
    constructed: Cell<usize>,
    destroyed: Cell<usize>,
    remaining: Cell<Option<usize>>,
}

impl TestAlloc {

    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    pub fn live_blocks(&self) -> usize {
        self.live_blocks.get()
    }

    pub fn constructed(&self) -> usize {
        self.constructed.get()
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed.get()
    }

    /// The next `count` allocations succeed, every later one fails.
    pub fn fail_after(&self, count: usize) {
        self.remaining.set(Some(count));
    }

    pub fn never_fail(&self) {
        self.remaining.set(None);
    }
}

impl Allocator for TestAlloc {

    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        if let Some(remaining) = self.remaining.get() {
            if remaining == 0 {
                return None
            }
            self.remaining.set(Some(remaining - 1));
        }
        let ptr = unsafe { GLOBAL_ALLOC.allocate_raw(size, align) }?;
        self.allocations.set(self.allocations.get() + 1);
        self.live_blocks.set(self.live_blocks.get() + 1);
        Some(ptr)
    }

    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize) {
        self.live_blocks.set(self.live_blocks.get() - 1);
        unsafe { GLOBAL_ALLOC.free_raw(ptr, size, align) }
    }

    unsafe fn construct<T, E>(
        &self,
        ptr: NonNull<T>,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<(), E>
    {
        let value = f()?;
        unsafe { ptr.write(value) };
        self.constructed.set(self.constructed.get() + 1);
        Ok(())
    }

    unsafe fn destroy<T>(&self, ptr: NonNull<T>) {
        self.destroyed.set(self.destroyed.get() + 1);
        unsafe { ptr.drop_in_place() }
    }
}

/// Shared bookkeeping for [`Tracked`] values.
#[derive(Default)]
pub struct Tracker {
    live: Cell<isize>,
    clone_budget: Cell<Option<usize>>,
}

impl Tracker {

    pub fn live(&self) -> isize {
        self.live.get()
    }

    /// The next `count` clones succeed, the one after that panics.
    pub fn panic_after_clones(&self, count: usize) {
        self.clone_budget.set(Some(count));
    }

    pub fn make(&self, value: i32) -> Tracked<'_> {
        self.live.set(self.live.get() + 1);
        Tracked { value, tracker: self }
    }
}

/// Element type that counts its live instances and can panic while cloning.
#[derive(Debug)]
pub struct Tracked<'t> {
    pub value: i32,
    tracker: &'t Tracker,
}

impl<'t> Clone for Tracked<'t> {

    fn clone(&self) -> Self {
        if let Some(budget) = self.tracker.clone_budget.get() {
            if budget == 0 {
                panic!("clone budget exhausted")
            }
            self.tracker.clone_budget.set(Some(budget - 1));
        }
        self.tracker.make(self.value)
    }
}

impl<'t> Drop for Tracked<'t> {

    fn drop(&mut self) {
        self.tracker.live.set(self.tracker.live.get() - 1);
    }
}

impl<'t> PartialEq for Tracked<'t> {

    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl core::fmt::Debug for Tracker {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Tracker(live: {})", self.live.get())
    }
}

pub fn values(tracked: &[Tracked<'_>]) -> Vec<i32> {
    tracked.iter().map(|t| t.value).collect()
}
