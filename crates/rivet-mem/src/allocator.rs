use core::{
    alloc::Layout,
    ptr::NonNull,
};

/// Allocation strategy consumed by [`Vector`](crate::Vector).
///
/// Implementors only have to provide [`allocate_raw`](Allocator::allocate_raw)
/// and [`free_raw`](Allocator::free_raw). The typed helpers and the in-place
/// [`construct`](Allocator::construct) / [`destroy`](Allocator::destroy) pair
/// have default implementations that may be overridden, e.g. to count or
/// poison slots.
pub trait Allocator {

    /// Returns `None` if the block cannot be obtained or `size` is zero.
    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>>;

    unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        let layout = Layout::array::<T>(count).ok()?;
        unsafe { self.allocate_raw(layout.size(), layout.align()).map(|ptr| ptr.cast::<T>()) }
    }

    /// Must accept exactly the `size` and `align` the block was allocated with.
    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize);

    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let Ok(layout) = Layout::array::<T>(count) else {
            return
        };
        unsafe { self.free_raw(ptr.cast::<u8>(), layout.size(), layout.align()) }
    }

    /// Runs `f` and writes its value to `ptr`.
    ///
    /// When `f` fails nothing is written and `ptr` stays uninitialized.
    #[inline(always)]
    unsafe fn construct<T, E>(
        &self,
        ptr: NonNull<T>,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<(), E>
    {
        let value = f()?;
        unsafe { ptr.write(value) };
        Ok(())
    }

    #[inline(always)]
    unsafe fn destroy<T>(&self, ptr: NonNull<T>) {
        unsafe { ptr.drop_in_place() }
    }
}

impl<A: Allocator + ?Sized> Allocator for &A {

    #[inline(always)]
    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        unsafe { (**self).allocate_raw(size, align) }
    }

    #[inline(always)]
    unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        unsafe { (**self).allocate_uninit(count) }
    }

    #[inline(always)]
    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize) {
        unsafe { (**self).free_raw(ptr, size, align) }
    }

    #[inline(always)]
    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        unsafe { (**self).free_uninit(ptr, count) }
    }

    #[inline(always)]
    unsafe fn construct<T, E>(
        &self,
        ptr: NonNull<T>,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<(), E>
    {
        unsafe { (**self).construct(ptr, f) }
    }

    #[inline(always)]
    unsafe fn destroy<T>(&self, ptr: NonNull<T>) {
        unsafe { (**self).destroy(ptr) }
    }
}
