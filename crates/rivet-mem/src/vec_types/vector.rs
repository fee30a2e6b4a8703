use core::{
    alloc::Layout,
    convert::Infallible,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::{self, needs_drop, size_of},
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr::NonNull,
    slice,
};

use crate::{
    allocator::Allocator,
    capacity_error::CapacityError,
    global_alloc::GlobalAlloc,
    const_assert,
};

use super::{Cursor, VecError};

use CapacityError::{AllocFailed, CapacityOverflow, IndexOutOfBounds, ZeroSizedElement};

/// A contiguous growable array whose memory comes from an [`Allocator`].
///
/// Elements `[0, len)` are live and `[len, capacity)` is uninitialized. Every
/// operation that constructs several elements advances `len` one element at a
/// time, so a failing (or panicking) constructor leaves the vector holding
/// exactly the elements that were built. Reallocation and positional insert
/// into a full vector are transactional: on failure the vector is unchanged.
pub struct Vector<T, A: Allocator = GlobalAlloc> {
    data: NonNull<T>,
    capacity: usize,
    len: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

const_assert!(size_of::<Vector<u32>>() == size_of::<Option<Vector<u32>>>());

unsafe impl<T: Send, A: Allocator + Send> Send for Vector<T, A> {}

unsafe impl<T: Sync, A: Allocator + Sync> Sync for Vector<T, A> {}

/// Uninitialized block that is released on drop unless adopted.
struct UninitBlock<'a, T, A: Allocator> {
    ptr: NonNull<T>,
    capacity: usize,
    alloc: &'a A,
}

impl<'a, T, A: Allocator> UninitBlock<'a, T, A> {

    #[inline(always)]
    fn adopt(self) -> NonNull<T> {
        let ptr = self.ptr;
        mem::forget(self);
        ptr
    }
}

impl<'a, T, A: Allocator> Drop for UninitBlock<'a, T, A> {

    fn drop(&mut self) {
        unsafe { self.alloc.free_uninit(self.ptr, self.capacity) }
    }
}

impl<T> Vector<T, GlobalAlloc> {

    #[inline(always)]
    pub const fn new() -> Self {
        Self::new_in(GlobalAlloc)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        Self::with_capacity_in(capacity, GlobalAlloc)
    }

    pub fn with_len(len: usize, value: &T) -> Result<Self, CapacityError>
        where
            T: Clone
    {
        Self::with_len_in(len, value, GlobalAlloc)
    }

    pub fn from_slice(slice: &[T]) -> Result<Self, CapacityError>
        where
            T: Clone
    {
        Self::from_slice_in(slice, GlobalAlloc)
    }

    /// # Safety
    /// See [`Vector::from_range_in`].
    pub unsafe fn from_range(first: Cursor<T>, last: Cursor<T>) -> Result<Self, CapacityError>
        where
            T: Clone
    {
        unsafe { Self::from_range_in(first, last, GlobalAlloc) }
    }
}

impl<T, A: Allocator> Vector<T, A> {

    /// Creates an empty vector. Nothing is allocated until elements are added.
    #[inline(always)]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: 0,
            len: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, CapacityError> {
        let mut vec = Self::new_in(alloc);
        vec.reserve(capacity)?;
        Ok(vec)
    }

    /// Allocates exactly `len` slots and fills them with clones of `value`.
    pub fn with_len_in(len: usize, value: &T, alloc: A) -> Result<Self, CapacityError>
        where
            T: Clone
    {
        Self::try_with_len_with(len, |_| Ok::<_, Infallible>(value.clone()), alloc)
            .map_err(VecError::into_capacity)
    }

    /// Allocates exactly `len` slots and constructs element `i` with `f(i)`.
    ///
    /// If `f` fails for element `i` the error carries `index: i`, and the `i`
    /// elements built so far are dropped together with the block.
    pub fn try_with_len_with<E>(
        len: usize,
        f: impl FnMut(usize) -> Result<T, E>,
        alloc: A,
    ) -> Result<Self, VecError<E>>
    {
        let mut vec = Self::new_in(alloc);
        if len == 0 {
            return Ok(vec)
        }
        vec.reallocate(len)?;
        vec.construct_tail(len, f)?;
        Ok(vec)
    }

    pub fn from_slice_in(slice: &[T], alloc: A) -> Result<Self, CapacityError>
        where
            T: Clone
    {
        if size_of::<T>() == 0 && !slice.is_empty() {
            return Err(ZeroSizedElement)
        }
        let range = slice.as_ptr_range();
        unsafe {
            Self::from_range_in(
                Cursor::from_ptr(range.start as *mut T),
                Cursor::from_ptr(range.end as *mut T),
                alloc,
            )
        }
    }

    /// Clones the elements in `[first, last)` into a block of exactly that
    /// many slots. An empty or reversed range produces an empty vector.
    ///
    /// # Safety
    /// `first` and `last` must delimit live elements of a single allocation
    /// that stay valid for the duration of the call.
    pub unsafe fn from_range_in(first: Cursor<T>, last: Cursor<T>, alloc: A) -> Result<Self, CapacityError>
        where
            T: Clone
    {
        unsafe {
            Self::try_from_range_with(first, last, |value| Ok::<_, Infallible>(value.clone()), alloc)
                .map_err(VecError::into_capacity)
        }
    }

    /// # Safety
    /// Same as [`Vector::from_range_in`].
    pub unsafe fn try_from_range_with<E>(
        first: Cursor<T>,
        last: Cursor<T>,
        mut f: impl FnMut(&T) -> Result<T, E>,
        alloc: A,
    ) -> Result<Self, VecError<E>>
    {
        let mut vec = Self::new_in(alloc);
        let count = last - first;
        if count <= 0 {
            return Ok(vec)
        }
        let count = count as usize;
        vec.reallocate(count)?;
        vec.construct_tail(count, |i| f(unsafe { (first + i).get() }))?;
        Ok(vec)
    }

    /// Copies `self` into a new vector that uses `alloc`.
    ///
    /// The copy has the same capacity as `self`, not just the same length.
    pub fn try_clone_in_with<B, E>(
        &self,
        alloc: B,
        mut f: impl FnMut(&T) -> Result<T, E>,
    ) -> Result<Vector<T, B>, VecError<E>>
        where
            B: Allocator,
    {
        let mut vec = Vector::new_in(alloc);
        if self.capacity != 0 {
            vec.reallocate(self.capacity)?;
        }
        let src = self.as_slice();
        vec.construct_tail(src.len(), |i| f(&src[i]))?;
        Ok(vec)
    }

    pub fn try_clone_with<E>(&self, f: impl FnMut(&T) -> Result<T, E>) -> Result<Self, VecError<E>>
        where
            A: Clone
    {
        self.try_clone_in_with(self.alloc.clone(), f)
    }

    pub fn try_clone(&self) -> Result<Self, CapacityError>
        where
            T: Clone,
            A: Clone,
    {
        self.try_clone_with(|value| Ok::<_, Infallible>(value.clone()))
            .map_err(VecError::into_capacity)
    }

    pub fn clone_in<B: Allocator>(&self, alloc: B) -> Result<Vector<T, B>, CapacityError>
        where
            T: Clone
    {
        self.try_clone_in_with(alloc, |value| Ok::<_, Infallible>(value.clone()))
            .map_err(VecError::into_capacity)
    }

    /// Moves the whole block out of `other` in constant time.
    ///
    /// `other` is left empty with no block and can be reused.
    pub fn take(other: &mut Self) -> Self
        where
            A: Clone
    {
        let empty = Self::new_in(other.alloc.clone());
        mem::replace(other, empty)
    }

    /// Moves the elements of `other` into a block obtained from `alloc`.
    ///
    /// The elements are relocated rather than copied, so only the allocation
    /// can fail; in that case `other` is untouched.
    pub fn take_in<B: Allocator>(other: &mut Vector<T, B>, alloc: A) -> Result<Self, CapacityError> {
        let mut vec = Self::new_in(alloc);
        if other.capacity == 0 {
            return Ok(vec)
        }
        vec.reallocate(other.capacity)?;
        unsafe {
            other.data.copy_to_nonoverlapping(vec.data, other.len);
            Vector::<T, B>::free_block(&other.alloc, other.data, other.capacity);
        }
        vec.len = other.len;
        other.data = NonNull::dangling();
        other.capacity = 0;
        other.len = 0;
        Ok(vec)
    }

    /// Replaces the contents of `self` with copies of the elements of `other`.
    ///
    /// The new block is obtained before anything is destroyed, so an
    /// allocation failure leaves `self` unchanged. A constructor failure
    /// leaves `self` holding the copies made so far.
    pub fn try_assign_from_with<E>(
        &mut self,
        other: &Self,
        mut f: impl FnMut(&T) -> Result<T, E>,
    ) -> Result<(), VecError<E>>
        where
            A: Clone
    {
        if self.shares_storage(other) {
            return Ok(())
        }
        let alloc = other.alloc.clone();
        let data =
            if other.capacity != 0 {
                Self::allocate_block(&alloc, other.capacity)?
            }
            else {
                NonNull::dangling()
            };
        self.clear();
        unsafe { Self::free_block(&self.alloc, self.data, self.capacity); }
        self.alloc = alloc;
        self.data = data;
        self.capacity = other.capacity;
        let src = other.as_slice();
        self.construct_tail(src.len(), |i| f(&src[i]))
    }

    pub fn assign_from(&mut self, other: &Self) -> Result<(), CapacityError>
        where
            T: Clone,
            A: Clone,
    {
        self.try_assign_from_with(other, |value| Ok::<_, Infallible>(value.clone()))
            .map_err(VecError::into_capacity)
    }

    /// Drops the contents of `self` and adopts the block of `other`, leaving
    /// `other` empty.
    pub fn move_from(&mut self, other: &mut Self)
        where
            A: Clone
    {
        if self.shares_storage(other) {
            return
        }
        let taken = Self::take(other);
        *self = taken;
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Bounds-checked access.
    pub fn at(&self, index: usize) -> Result<&T, CapacityError> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.data.add(index).as_ref() })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, CapacityError> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.data.add(index).as_mut() })
    }

    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline(always)]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    #[inline(always)]
    pub fn begin(&self) -> Cursor<T> {
        Cursor::from_non_null(self.data)
    }

    #[inline(always)]
    pub fn end(&self) -> Cursor<T> {
        self.begin() + self.len
    }

    /// Position of element `index`; `index == len` gives [`Vector::end`].
    pub fn cursor(&self, index: usize) -> Cursor<T> {
        if index > self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        self.begin() + index
    }

    /// Grows the block to exactly `capacity` slots if it is smaller.
    ///
    /// On failure the block, the elements and the capacity are unchanged.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), CapacityError> {
        if capacity <= self.capacity {
            return Ok(())
        }
        self.reallocate(capacity)
    }

    /// Reallocates down to exactly `len` slots, releasing the block when the
    /// vector is empty.
    pub fn shrink_to_fit(&mut self) -> Result<(), CapacityError> {
        if self.len == self.capacity {
            return Ok(())
        }
        self.reallocate(self.len)
    }

    #[inline(always)]
    pub fn push(&mut self, value: T) -> Result<&mut T, CapacityError> {
        self.emplace_back(|| Ok::<_, Infallible>(value))
            .map_err(VecError::into_capacity)
    }

    /// Appends the value built by `f`, growing to 1 or double the capacity
    /// when full.
    ///
    /// Growth is not rolled back: if `f` fails after the vector grew, the new
    /// capacity is kept while `len` stays unchanged.
    pub fn emplace_back<E>(&mut self, f: impl FnOnce() -> Result<T, E>) -> Result<&mut T, VecError<E>> {
        if self.len == self.capacity {
            let new_capacity = self.grown_capacity()?;
            self.reallocate(new_capacity)?;
        }
        let index = self.len;
        let mut ptr = unsafe { self.data.add(index) };
        if let Err(err) = unsafe { self.alloc.construct(ptr, f) } {
            return Err(VecError::Construct { index, err })
        }
        self.len += 1;
        Ok(unsafe { ptr.as_mut() })
    }

    pub fn extend_from_slice(&mut self, other: &[T]) -> Result<(), CapacityError>
        where
            T: Clone
    {
        if other.is_empty() {
            return Ok(())
        }
        let required = self.len
            .checked_add(other.len())
            .ok_or(CapacityOverflow { requested: usize::MAX })?;
        if required > self.capacity {
            let new_capacity = self.grown_capacity()?.max(required);
            self.reallocate(new_capacity)?;
        }
        self.construct_tail(other.len(), |i| Ok::<_, Infallible>(other[i].clone()))
            .map_err(VecError::into_capacity)
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 { return None }
        self.len -= 1;
        Some(unsafe { self.data.add(self.len).read() })
    }

    /// Destroys the last element in place. Does nothing on an empty vector.
    pub fn pop_back(&mut self) {
        if self.len == 0 {
            debug_assert!(false, "pop_back on an empty vector");
            return
        }
        self.len -= 1;
        unsafe { self.alloc.destroy(self.data.add(self.len)) }
    }

    /// Inserts the value built by `f` before `pos`, returning its position.
    ///
    /// With spare capacity the value is built in a temporary slot first, so a
    /// failing constructor leaves the vector untouched. A full vector is
    /// grown into a fresh block; if construction fails there the fresh block
    /// is released and the original block, length and capacity are
    /// unchanged.
    ///
    /// # Panics
    /// Panics if `pos` is not within `[begin, end]`.
    pub fn emplace<E>(
        &mut self,
        pos: Cursor<T>,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<Cursor<T>, VecError<E>>
    {
        let index = self.index_of(pos);
        if self.len < self.capacity {
            self.emplace_in_place(index, f)
        }
        else {
            self.emplace_realloc(index, f)
        }
    }

    pub fn insert(&mut self, value: T, index: usize) -> Result<&mut T, CapacityError> {
        if index > self.len {
            panic!("index {} was out of bounds with len {} when inserting", index, self.len)
        }
        let pos = self.begin() + index;
        let pos = self.emplace(pos, || Ok::<_, Infallible>(value))
            .map_err(VecError::into_capacity)?;
        Ok(unsafe { pos.get_mut() })
    }

    /// Removes the element at `pos` and returns the position that now holds
    /// its successor.
    ///
    /// # Panics
    /// Panics if `pos` is not within `[begin, end)`.
    pub fn erase(&mut self, pos: Cursor<T>) -> Cursor<T> {
        let index = self.index_of(pos);
        if index == self.len {
            panic!("cannot erase the end position of a vector with len {}", self.len)
        }
        drop(self.remove(index));
        self.begin() + index
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len { return None }
        unsafe {
            let slot = self.data.add(index);
            let removed = slot.read();
            slot.add(1).copy_to(slot, self.len - index - 1);
            self.len -= 1;
            Some(removed)
        }
    }

    /// Destroys every element. The block and the capacity are kept.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        if needs_drop::<T>() {
            for i in 0..len {
                unsafe { self.alloc.destroy(self.data.add(i)) }
            }
        }
    }

    #[inline(always)]
    fn shares_storage(&self, other: &Self) -> bool {
        self.data == other.data && self.capacity == other.capacity
    }

    fn index_of(&self, pos: Cursor<T>) -> usize {
        let offset = pos - self.begin();
        if offset < 0 || offset as usize > self.len {
            panic!("position {} was out of bounds with len {}", offset, self.len)
        }
        offset as usize
    }

    #[inline(always)]
    fn grown_capacity(&self) -> Result<usize, CapacityError> {
        if self.capacity == 0 {
            Ok(1)
        }
        else {
            self.capacity
                .checked_mul(2)
                .ok_or(CapacityOverflow { requested: self.capacity })
        }
    }

    fn allocate_block(alloc: &A, capacity: usize) -> Result<NonNull<T>, CapacityError> {
        if size_of::<T>() == 0 {
            return Err(ZeroSizedElement)
        }
        if Layout::array::<T>(capacity).is_err() {
            return Err(CapacityOverflow { requested: capacity })
        }
        unsafe { alloc.allocate_uninit(capacity) }
            .ok_or(AllocFailed { new_capacity: capacity })
    }

    #[inline(always)]
    unsafe fn free_block(alloc: &A, data: NonNull<T>, capacity: usize) {
        if capacity != 0 {
            unsafe { alloc.free_uninit(data, capacity) }
        }
    }

    /// Moves every element into a block of exactly `new_capacity` slots.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), CapacityError> {
        debug_assert!(self.len <= new_capacity);
        if new_capacity == 0 {
            unsafe { Self::free_block(&self.alloc, self.data, self.capacity); }
            self.data = NonNull::dangling();
            self.capacity = 0;
            return Ok(())
        }
        let tmp = Self::allocate_block(&self.alloc, new_capacity)?;
        unsafe {
            self.data.copy_to_nonoverlapping(tmp, self.len);
            Self::free_block(&self.alloc, self.data, self.capacity);
        }
        self.data = tmp;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Constructs `count` elements after the live ones, element `i` from
    /// `f(i)`. `len` only counts elements that were written.
    fn construct_tail<E>(
        &mut self,
        count: usize,
        mut f: impl FnMut(usize) -> Result<T, E>,
    ) -> Result<(), VecError<E>>
    {
        debug_assert!(count <= self.capacity - self.len);
        for index in 0..count {
            let ptr = unsafe { self.data.add(self.len) };
            if let Err(err) = unsafe { self.alloc.construct(ptr, || f(index)) } {
                return Err(VecError::Construct { index, err })
            }
            self.len += 1;
        }
        Ok(())
    }

    fn emplace_in_place<E>(
        &mut self,
        index: usize,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<Cursor<T>, VecError<E>>
    {
        let tmp = UninitBlock {
            ptr: unsafe { self.alloc.allocate_uninit::<T>(1) }
                .ok_or(AllocFailed { new_capacity: 1 })?,
            capacity: 1,
            alloc: &self.alloc,
        };
        if let Err(err) = unsafe { self.alloc.construct(tmp.ptr, f) } {
            return Err(VecError::Construct { index, err })
        }
        let slot = unsafe { self.data.add(index) };
        unsafe {
            slot.copy_to(slot.add(1), self.len - index);
            tmp.ptr.copy_to_nonoverlapping(slot, 1);
        }
        drop(tmp);
        self.len += 1;
        Ok(Cursor::from_non_null(slot))
    }

    fn emplace_realloc<E>(
        &mut self,
        index: usize,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<Cursor<T>, VecError<E>>
    {
        let new_capacity = self.grown_capacity()?;
        let block = UninitBlock {
            ptr: Self::allocate_block(&self.alloc, new_capacity)?,
            capacity: new_capacity,
            alloc: &self.alloc,
        };
        // the relocated prefix stays owned by the old block until adoption
        unsafe { self.data.copy_to_nonoverlapping(block.ptr, index); }
        let slot = unsafe { block.ptr.add(index) };
        if let Err(err) = unsafe { self.alloc.construct(slot, f) } {
            return Err(VecError::Construct { index, err })
        }
        unsafe {
            self.data.add(index).copy_to_nonoverlapping(slot.add(1), self.len - index);
        }
        let data = block.adopt();
        unsafe { Self::free_block(&self.alloc, self.data, self.capacity); }
        self.data = data;
        self.capacity = new_capacity;
        self.len += 1;
        Ok(Cursor::from_non_null(slot))
    }
}

impl<T, A: Allocator> Drop for Vector<T, A> {

    fn drop(&mut self) {
        self.clear();
        unsafe { Self::free_block(&self.alloc, self.data, self.capacity); }
    }
}

impl<T, A: Allocator + Default> Default for Vector<T, A> {

    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for Vector<T, A> {

    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(vec) => vec,
            Err(err) => panic!("failed to clone vector: {}", err),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign_from(source) {
            panic!("failed to clone vector: {}", err)
        }
    }
}

impl<T, A: Allocator> Index<usize> for Vector<T, A> {

    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_ref() }
    }
}

impl<T, A: Allocator> IndexMut<usize> for Vector<T, A> {

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_mut() }
    }
}

impl<T, A: Allocator> Deref for Vector<T, A> {

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: Allocator> DerefMut for Vector<T, A> {

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> AsRef<[T]> for Vector<T, A> {

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for Vector<T, A> {

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'vec, T, A: Allocator> IntoIterator for &'vec Vector<T, A> {

    type Item = &'vec T;
    type IntoIter = slice::Iter<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'vec, T, A: Allocator> IntoIterator for &'vec mut Vector<T, A> {

    type Item = &'vec mut T;
    type IntoIter = slice::IterMut<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Debug, A: Allocator> Debug for Vector<T, A> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, U, A, B> PartialEq<Vector<U, B>> for Vector<T, A>
    where
        T: PartialEq<U>,
        A: Allocator,
        B: Allocator,
{

    fn eq(&self, other: &Vector<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for Vector<T, A> {

    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<&[U]> for Vector<T, A> {

    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for Vector<T, A> {

    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Allocator> Eq for Vector<T, A> {}

impl<T: Hash, A: Allocator> Hash for Vector<T, A> {

    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}
