use core::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    mem::size_of,
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr::NonNull,
};

/// A random-access position within a [`Vector`](crate::Vector)'s storage.
///
/// A cursor is a plain address: stepping and offsetting never touch memory
/// and are always safe, while every dereference is `unsafe` and unchecked.
/// Cursors obtained from a vector are invalidated by any reallocation of that
/// vector.
pub struct Cursor<T> {
    ptr: *mut T,
}

impl<T> Copy for Cursor<T> {}

impl<T> Clone for Cursor<T> {

    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Cursor<T> {

    #[inline(always)]
    pub const fn from_ptr(ptr: *mut T) -> Self {
        Self { ptr }
    }

    #[inline(always)]
    pub const fn from_non_null(ptr: NonNull<T>) -> Self {
        Self { ptr: ptr.as_ptr() }
    }

    #[inline(always)]
    pub const fn as_ptr(self) -> *mut T {
        self.ptr
    }

    #[inline(always)]
    pub fn offset(self, count: isize) -> Self {
        Self { ptr: self.ptr.wrapping_offset(count) }
    }

    /// Pre-increment.
    #[inline(always)]
    pub fn inc(&mut self) -> &mut Self {
        self.ptr = self.ptr.wrapping_add(1);
        self
    }

    /// Pre-decrement.
    #[inline(always)]
    pub fn dec(&mut self) -> &mut Self {
        self.ptr = self.ptr.wrapping_sub(1);
        self
    }

    /// Post-increment, returns the position before the step.
    #[inline(always)]
    pub fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.inc();
        prev
    }

    /// Post-decrement, returns the position before the step.
    #[inline(always)]
    pub fn post_dec(&mut self) -> Self {
        let prev = *self;
        self.dec();
        prev
    }

    /// Signed element distance from `origin` to `self`.
    #[inline(always)]
    pub fn distance_from(self, origin: Self) -> isize {
        let size = size_of::<T>();
        if size == 0 {
            return 0
        }
        (self.ptr as isize).wrapping_sub(origin.ptr as isize) / size as isize
    }

    /// # Safety
    /// The cursor must point at a live element that outlives `'a` and is not
    /// mutably aliased for `'a`.
    #[inline(always)]
    pub unsafe fn get<'a>(self) -> &'a T {
        unsafe { &*self.ptr }
    }

    /// # Safety
    /// The cursor must point at a live element that outlives `'a` and is not
    /// otherwise aliased for `'a`.
    #[inline(always)]
    pub unsafe fn get_mut<'a>(self) -> &'a mut T {
        unsafe { &mut *self.ptr }
    }

    /// # Safety
    /// Same as [`Cursor::get`] for the element `index` slots away.
    #[inline(always)]
    pub unsafe fn at<'a>(self, index: isize) -> &'a T {
        unsafe { self.offset(index).get() }
    }
}

impl<T> Add<usize> for Cursor<T> {

    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: usize) -> Self::Output {
        Self { ptr: self.ptr.wrapping_add(rhs) }
    }
}

impl<T> Sub<usize> for Cursor<T> {

    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: usize) -> Self::Output {
        Self { ptr: self.ptr.wrapping_sub(rhs) }
    }
}

impl<T> AddAssign<usize> for Cursor<T> {

    #[inline(always)]
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs
    }
}

impl<T> SubAssign<usize> for Cursor<T> {

    #[inline(always)]
    fn sub_assign(&mut self, rhs: usize) {
        *self = *self - rhs
    }
}

impl<T> Sub for Cursor<T> {

    type Output = isize;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.distance_from(rhs)
    }
}

impl<T> PartialEq for Cursor<T> {

    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> PartialOrd for Cursor<T> {

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<T> {

    fn cmp(&self, other: &Self) -> Ordering {
        self.ptr.cmp(&other.ptr)
    }
}

impl<T> Hash for Cursor<T> {

    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.hash(state)
    }
}

impl<T> Debug for Cursor<T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor({:p})", self.ptr)
    }
}

impl<T> From<NonNull<T>> for Cursor<T> {

    fn from(value: NonNull<T>) -> Self {
        Self::from_non_null(value)
    }
}
