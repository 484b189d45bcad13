use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr;
use core::slice::{self, SliceIndex};

use crate::error::infallible;
use crate::raw::{self, RawStorage};
use crate::{AllocError, SmallVectorIndex};

/// Creates a [`SmallVector`] containing the arguments.
///
/// The syntax mirrors `vec!`. The index type and inline capacity come from
/// the binding's annotation.
///
/// ```
/// use small_vector::{small_vector, SmallVector};
///
/// let empty: SmallVector<String, u8, 4> = small_vector![];
/// let zeros: SmallVector<i64, u8, 4> = small_vector![0; 6];
/// let list: SmallVector<i32, u8, 4> = small_vector![1, 2, 3];
///
/// assert!(empty.is_empty());
/// assert_eq!(zeros.len(), 6);
/// assert_eq!(list, [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! small_vector {
    [] => { $crate::SmallVector::new() };
    [$elem:expr; $n:expr] => { $crate::SmallVector::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::SmallVector::from([ $($item),+ ]) };
}

/// A contiguous growable vector with `N` inline slots.
///
/// Up to `N` elements live inside the `SmallVector` value itself. Once more
/// room is needed, all elements move to one heap block owned by the vector.
///
/// # Type Parameters
/// - `T`: The element type.
/// - `I`: The index type holding count and capacity (`u8`, `u16`, `u32`,
///   `u64`, or `usize`). Defaults to `usize`.
/// - `N`: The inline capacity. Defaults to 8. Must fit in `I`.
///
/// # Storage Mode
/// The vector is inline-backed iff `capacity == N` and heap-backed otherwise.
/// No separate flag exists. Capacity never drops below `N` and only grows when
/// a heap block is installed, so a heap-backed vector can never report
/// `capacity == N`. Adding any shrinking operation would have to move the
/// elements back inline before lowering capacity to `N`.
///
/// # Growth
/// A push on a full vector reserves `max(capacity * 2, 1)` slots. `reserve`
/// allocates exactly the requested number of slots.
///
/// # Panics
/// Any operation that needs more than `I::MAX_CAPACITY` slots panics with
/// "capacity overflow". Allocator failure goes to
/// [`handle_alloc_error`](alloc::alloc::handle_alloc_error). Use
/// [`try_reserve`](Self::try_reserve) to observe either as an [`AllocError`].
pub struct SmallVector<T, I: SmallVectorIndex = usize, const N: usize = 8> {
    storage: RawStorage<T, N>,
    capacity: I,
    count: I,
    _marker: PhantomData<T>,
}

// SAFETY: the vector owns its elements and its heap block exclusively.
unsafe impl<T: Send, I: SmallVectorIndex, const N: usize> Send for SmallVector<T, I, N> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync, I: SmallVectorIndex, const N: usize> Sync for SmallVector<T, I, N> {}

impl<T, I: SmallVectorIndex, const N: usize> SmallVector<T, I, N> {
    const INLINE_FITS: () = assert!(
        N <= I::MAX_CAPACITY,
        "inline capacity does not fit in the index type"
    );

    /// Creates an empty, inline-backed vector with capacity `N`.
    #[inline]
    pub fn new() -> Self {
        let () = Self::INLINE_FITS;
        Self {
            storage: RawStorage::new(),
            capacity: I::narrow(N),
            count: I::zero(),
            _marker: PhantomData,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.count.as_()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count.is_zero()
    }

    /// Returns the number of slots available without reallocating. Never less than `N`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.as_()
    }

    /// Returns the inline capacity `N`.
    #[inline]
    pub const fn inline_capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the elements live in a heap block.
    ///
    /// # Examples
    /// ```
    /// use small_vector::SmallVector;
    ///
    /// let mut v: SmallVector<u32, u8, 2> = SmallVector::new();
    /// v.push(1);
    /// v.push(2);
    /// assert!(!v.spilled());
    /// v.push(3);
    /// assert!(v.spilled());
    /// ```
    #[inline]
    pub fn spilled(&self) -> bool {
        self.capacity() != N
    }

    /// Returns a pointer to the first slot: the inline buffer or the heap block.
    ///
    /// The pointer is valid for `len()` reads until the vector is mutated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        if self.spilled() {
            // SAFETY: capacity != N, so the heap member is live.
            unsafe { self.storage.heap_ptr().as_ptr() }
        } else {
            self.storage.inline_ptr()
        }
    }

    /// Returns a mutable pointer to the first slot. See [`as_ptr`](Self::as_ptr).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        if self.spilled() {
            // SAFETY: capacity != N, so the heap member is live.
            unsafe { self.storage.heap_ptr().as_ptr() }
        } else {
            self.storage.inline_mut_ptr()
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are live.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len()) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        // SAFETY: the first `len` slots are live.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Ensures capacity for at least `requested` elements, reporting failure.
    ///
    /// Does nothing if `requested < capacity()`. Otherwise a block of exactly
    /// `requested` slots is allocated, live elements are moved into it, and the
    /// previous heap block (if any) is freed. A request equal to the capacity of
    /// a heap-backed vector therefore moves the elements to a fresh block of the
    /// same size. An inline-backed vector already has `N` slots, so a request
    /// for exactly `N` is a no-op.
    ///
    /// On error the vector is left untouched.
    ///
    /// # Examples
    /// ```
    /// use small_vector::{AllocError, SmallVector};
    ///
    /// let mut v: SmallVector<u8, u8, 4> = SmallVector::new();
    /// assert_eq!(v.try_reserve(300), Err(AllocError::CapacityOverflow));
    /// assert_eq!(v.capacity(), 4);
    ///
    /// v.try_reserve(200).unwrap();
    /// assert_eq!(v.capacity(), 200);
    /// ```
    pub fn try_reserve(&mut self, requested: usize) -> Result<(), AllocError> {
        let capacity = self.capacity();
        if requested < capacity || (requested == capacity && !self.spilled()) {
            return Ok(());
        }
        let new_capacity = I::from_usize(requested).ok_or(AllocError::CapacityOverflow)?;
        let block = raw::allocate::<T>(requested)?;

        let len = self.len();
        let was_spilled = self.spilled();
        // SAFETY: `block` has room for `requested >= len` elements and is
        // disjoint from the current storage. The old block, if any, is
        // released exactly once and replaced below.
        unsafe {
            raw::relocate(self.as_ptr(), block.as_ptr(), len);
            if was_spilled {
                raw::deallocate(self.storage.heap_ptr(), capacity);
            }
        }
        self.storage = RawStorage::from_heap(block);
        self.capacity = new_capacity;

        if was_spilled {
            trace!(
                "small_vector: reallocated {} elements, capacity {} -> {}",
                len,
                capacity,
                requested
            );
        } else {
            trace!(
                "small_vector: spilled {} elements to heap, capacity {} -> {}",
                len,
                capacity,
                requested
            );
        }
        Ok(())
    }

    /// Ensures capacity for at least `requested` elements.
    ///
    /// See [`try_reserve`](Self::try_reserve) for the exact policy.
    ///
    /// # Panics
    /// Panics if `requested` does not fit in `I`.
    #[inline]
    pub fn reserve(&mut self, requested: usize) {
        infallible(self.try_reserve(requested));
    }

    /// Makes room for one more element, doubling capacity when full.
    fn try_reserve_one(&mut self) -> Result<(), AllocError> {
        if self.count != self.capacity {
            return Ok(());
        }
        let capacity = self.capacity();
        let grown = match capacity.checked_mul(2) {
            Some(doubled) => doubled.max(1).min(I::MAX_CAPACITY),
            None => I::MAX_CAPACITY,
        };
        if grown <= capacity {
            return Err(AllocError::CapacityOverflow);
        }
        self.try_reserve(grown)
    }

    #[inline]
    fn reserve_one(&mut self) {
        infallible(self.try_reserve_one());
    }

    /// Appends an element, reporting growth failure instead of panicking.
    ///
    /// On error `value` is dropped and the vector is left untouched.
    #[cfg_attr(not(any(feature = "serde", test)), allow(dead_code))]
    pub(crate) fn try_push(&mut self, value: T) -> Result<(), AllocError> {
        self.try_reserve_one()?;
        // SAFETY: `try_reserve_one` left at least one free slot.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Appends `value` without checking capacity.
    ///
    /// # Safety
    /// `len() < capacity()` must hold.
    #[inline]
    unsafe fn push_unchecked(&mut self, value: T) {
        let len = self.len();
        debug_assert!(len < self.capacity());
        ptr::write(self.as_mut_ptr().add(len), value);
        self.count = I::narrow(len + 1);
    }

    /// Appends an element, growing the storage if it is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.reserve_one();
        // SAFETY: `reserve_one` left at least one free slot.
        unsafe { self.push_unchecked(value) }
    }

    /// Appends the value produced by `f`, constructed straight into the new slot.
    ///
    /// Storage grows before `f` runs; if `f` panics the vector keeps its elements.
    ///
    /// # Examples
    /// ```
    /// use small_vector::SmallVector;
    ///
    /// let mut v: SmallVector<String, u8, 2> = SmallVector::new();
    /// let s = v.emplace_with(|| "hello".repeat(2));
    /// s.push('!');
    /// assert_eq!(v[0], "hellohello!");
    /// ```
    #[inline]
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.reserve_one();
        let len = self.len();
        // SAFETY: slot `len` is free and inside capacity.
        unsafe {
            let slot = self.as_mut_ptr().add(len);
            ptr::write(slot, f());
            self.count = I::narrow(len + 1);
            &mut *slot
        }
    }

    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let len = self.len() - 1;
        self.count = I::narrow(len);
        // SAFETY: slot `len` was live and is now outside the counted range.
        Some(unsafe { ptr::read(self.as_ptr().add(len)) })
    }

    /// Drops the elements past `len`. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len();
        if len >= old_len {
            return;
        }
        // count first, so a panicking `Drop` cannot lead to a second drop
        self.count = I::narrow(len);
        // SAFETY: slots `len..old_len` were live and are no longer counted.
        unsafe { raw::destroy(self.as_mut_ptr().add(len), old_len - len) }
    }

    /// Drops all elements. Capacity, and the heap block if any, are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to `new_len`, filling new slots with values produced by `f`.
    ///
    /// Shrinking drops the trailing elements and keeps capacity. Growing first
    /// reserves `new_len` slots.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len);
        for _ in len..new_len {
            // SAFETY: capacity >= new_len after the reserve above.
            unsafe { self.push_unchecked(f()) }
        }
    }

    /// Replaces the contents with the items of `iter`.
    ///
    /// The vector is cleared, then every item goes through [`push`](Self::push).
    /// Storage is not sized up front, so a long input may reallocate several times.
    ///
    /// # Examples
    /// ```
    /// use small_vector::SmallVector;
    ///
    /// let mut v: SmallVector<i32, u8, 2> = SmallVector::from([7, 8, 9]);
    /// v.assign([1, 2]);
    /// assert_eq!(v, [1, 2]);
    /// ```
    pub fn assign<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        self.clear();
        for item in iter {
            self.push(item);
        }
    }

    /// Moves the contents out into a new vector, leaving `self` empty and inline-backed.
    ///
    /// A heap block changes owner without touching the elements, so the new
    /// vector reports the same [`as_ptr`](Self::as_ptr). Inline elements are
    /// moved into the new vector's buffer.
    ///
    /// # Examples
    /// ```
    /// use small_vector::SmallVector;
    ///
    /// let mut a: SmallVector<i32, u8, 2> = SmallVector::from([1, 2, 3]);
    /// let ptr = a.as_ptr();
    ///
    /// let b = a.take();
    /// assert_eq!(b.as_ptr(), ptr);
    /// assert_eq!(b, [1, 2, 3]);
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), 2);
    /// ```
    pub fn take(&mut self) -> Self {
        let mut moved = Self::new();
        if self.spilled() {
            // SAFETY: the heap member is live; ownership passes with the capacity swap below.
            moved.storage = RawStorage::from_heap(unsafe { self.storage.heap_ptr() });
        } else {
            // SAFETY: `moved` is a fresh inline buffer of N slots and `len <= N`.
            unsafe {
                raw::relocate(
                    self.storage.inline_ptr(),
                    moved.storage.inline_mut_ptr(),
                    self.len(),
                )
            }
        }
        // `self` now reports the fresh vector's count and capacity: empty, inline
        mem::swap(&mut self.count, &mut moved.count);
        mem::swap(&mut self.capacity, &mut moved.capacity);
        moved
    }

    /// Moves the contents of `other` into `self`.
    ///
    /// - `other` heap-backed: inline elements of `self` are dropped, then the
    ///   two vectors exchange storage. If `self` was heap-backed, its block and
    ///   elements end up in `other` and are dropped with it.
    /// - `other` inline-backed: `self` drops its elements and frees its heap
    ///   block, then takes `other`'s elements into its inline buffer.
    ///
    /// `self` always ends with `other`'s previous contents and capacity.
    ///
    /// # Examples
    /// ```
    /// use small_vector::SmallVector;
    ///
    /// let mut a: SmallVector<i32, u8, 2> = SmallVector::from([1]);
    /// let mut b: SmallVector<i32, u8, 2> = SmallVector::from([4, 5, 6]);
    ///
    /// a.move_from(&mut b);
    /// assert_eq!(a, [4, 5, 6]);
    /// assert!(b.is_empty());
    /// assert!(!b.spilled());
    /// ```
    pub fn move_from(&mut self, other: &mut Self) {
        if other.spilled() {
            if !self.spilled() {
                self.clear();
            }
            mem::swap(&mut self.storage, &mut other.storage);
            mem::swap(&mut self.count, &mut other.count);
            mem::swap(&mut self.capacity, &mut other.capacity);
        } else {
            self.release();
            let len = other.len();
            // SAFETY: both sides are inline-backed and `len <= N`; `other`
            // forgets the elements right after.
            unsafe {
                raw::relocate(
                    other.storage.inline_ptr(),
                    self.storage.inline_mut_ptr(),
                    len,
                )
            }
            self.count = other.count;
            self.capacity = other.capacity;
            other.count = I::zero();
        }
    }

    /// Drops all elements and frees the heap block, returning to inline storage.
    fn release(&mut self) {
        self.clear();
        if self.spilled() {
            // SAFETY: the heap member is live and owned; storage is reset right after.
            unsafe { raw::deallocate(self.storage.heap_ptr(), self.capacity()) }
            self.storage = RawStorage::new();
            self.capacity = I::narrow(N);
        }
    }
}

impl<T: Clone, I: SmallVectorIndex, const N: usize> SmallVector<T, I, N> {
    /// Creates a vector holding clones of `items`.
    ///
    /// Exactly `items.len()` slots are reserved, so a slice longer than `N`
    /// produces a heap block of that exact size.
    pub fn from_slice(items: &[T]) -> Self {
        let mut vec = Self::new();
        vec.extend_from_slice(items);
        vec
    }

    /// Creates a vector of `n` clones of `elem`.
    pub fn from_elem(elem: T, n: usize) -> Self {
        let mut vec = Self::new();
        vec.resize(n, elem);
        vec
    }

    /// Resizes to `new_len`, cloning `value` into each new slot.
    ///
    /// # Examples
    /// ```
    /// use small_vector::SmallVector;
    ///
    /// let mut v: SmallVector<i32, u8, 4> = SmallVector::from([1, 2]);
    /// v.resize(5, 0);
    /// assert_eq!(v, [1, 2, 0, 0, 0]);
    ///
    /// v.resize(1, 0);
    /// assert_eq!(v, [1]);
    /// assert_eq!(v.capacity(), 5);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) {
        self.resize_with(new_len, || value.clone());
    }

    /// Clones `items` onto the end after reserving `len() + items.len()` slots.
    fn extend_from_slice(&mut self, items: &[T]) {
        self.reserve(self.len() + items.len());
        for item in items {
            // SAFETY: capacity covers every item after the reserve above.
            unsafe { self.push_unchecked(item.clone()) }
        }
    }
}

impl<T: Default, I: SmallVectorIndex, const N: usize> SmallVector<T, I, N> {
    /// Resizes to `new_len`, filling new slots with `T::default()`.
    #[inline]
    pub fn resize_default(&mut self, new_len: usize) {
        self.resize_with(new_len, T::default);
    }
}

impl<T, I: SmallVectorIndex, const N: usize> Drop for SmallVector<T, I, N> {
    fn drop(&mut self) {
        self.clear();
        if self.spilled() {
            // SAFETY: the heap member is live and owned by this vector.
            unsafe { raw::deallocate(self.storage.heap_ptr(), self.capacity()) }
        }
    }
}

impl<T, I: SmallVectorIndex, const N: usize> Default for SmallVector<T, I, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, I: SmallVectorIndex, const N: usize> Clone for SmallVector<T, I, N> {
    /// Clones the live elements, reserving exactly `len()` slots.
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    /// Replaces the contents of `self` with clones of `source`.
    ///
    /// Existing elements are dropped first; an existing heap block is reused
    /// when it is larger than `source.len()`.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend_from_slice(source.as_slice());
    }
}

impl<T, I: SmallVectorIndex, const N: usize> Deref for SmallVector<T, I, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, I: SmallVectorIndex, const N: usize> DerefMut for SmallVector<T, I, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, S: SliceIndex<[T]>, I: SmallVectorIndex, const N: usize> Index<S> for SmallVector<T, I, N> {
    type Output = S::Output;

    #[inline]
    fn index(&self, index: S) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, S: SliceIndex<[T]>, I: SmallVectorIndex, const N: usize> IndexMut<S>
    for SmallVector<T, I, N>
{
    #[inline]
    fn index_mut(&mut self, index: S) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: fmt::Debug, I: SmallVectorIndex, const N: usize> fmt::Debug for SmallVector<T, I, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash, I: SmallVectorIndex, const N: usize> Hash for SmallVector<T, I, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, U, I, J, const N: usize, const M: usize> PartialEq<SmallVector<U, J, M>>
    for SmallVector<T, I, N>
where
    T: PartialEq<U>,
    I: SmallVectorIndex,
    J: SmallVectorIndex,
{
    #[inline]
    fn eq(&self, other: &SmallVector<U, J, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, I: SmallVectorIndex, const N: usize> Eq for SmallVector<T, I, N> {}

impl<T, U, I: SmallVectorIndex, const N: usize> PartialEq<[U]> for SmallVector<T, I, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, I: SmallVectorIndex, const N: usize> PartialEq<&[U]> for SmallVector<T, I, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, I: SmallVectorIndex, const N: usize, const P: usize> PartialEq<[U; P]>
    for SmallVector<T, I, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; P]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd, I: SmallVectorIndex, const N: usize> PartialOrd for SmallVector<T, I, N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, I: SmallVectorIndex, const N: usize> Ord for SmallVector<T, I, N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T, I: SmallVectorIndex, const N: usize> AsRef<[T]> for SmallVector<T, I, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, I: SmallVectorIndex, const N: usize> AsMut<[T]> for SmallVector<T, I, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SmallVectorIndex, const N: usize> Borrow<[T]> for SmallVector<T, I, N> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, I: SmallVectorIndex, const N: usize> BorrowMut<[T]> for SmallVector<T, I, N> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone, I: SmallVectorIndex, const N: usize> From<&[T]> for SmallVector<T, I, N> {
    #[inline]
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T, I: SmallVectorIndex, const N: usize, const P: usize> From<[T; P]>
    for SmallVector<T, I, N>
{
    fn from(items: [T; P]) -> Self {
        let mut vec = Self::new();
        vec.reserve(P);
        for item in items {
            // SAFETY: capacity >= P after the reserve above.
            unsafe { vec.push_unchecked(item) }
        }
        vec
    }
}

impl<T, I: SmallVectorIndex, const N: usize> Extend<T> for SmallVector<T, I, N> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Clone + 'a, I: SmallVectorIndex, const N: usize> Extend<&'a T>
    for SmallVector<T, I, N>
{
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        for item in iter {
            self.push(item.clone());
        }
    }
}

impl<T, I: SmallVectorIndex, const N: usize> FromIterator<T> for SmallVector<T, I, N> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<'a, T, I: SmallVectorIndex, const N: usize> IntoIterator for &'a SmallVector<T, I, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, I: SmallVectorIndex, const N: usize> IntoIterator for &'a mut SmallVector<T, I, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
