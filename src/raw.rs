use alloc::alloc::{alloc, dealloc, Layout};
use core::mem::{align_of, size_of, ManuallyDrop, MaybeUninit};
use core::ptr::{self, NonNull};

use crate::AllocError;

/// Either `N` inline element slots or a pointer to a heap block.
///
/// The union carries no tag. The owning vector selects the live member from
/// its capacity: inline when `capacity == N`, heap otherwise.
pub(crate) union RawStorage<T, const N: usize> {
    inline: ManuallyDrop<MaybeUninit<[T; N]>>,
    heap: NonNull<T>,
}

impl<T, const N: usize> RawStorage<T, N> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            inline: ManuallyDrop::new(MaybeUninit::uninit()),
        }
    }

    #[inline]
    pub(crate) const fn from_heap(ptr: NonNull<T>) -> Self {
        Self { heap: ptr }
    }

    #[inline]
    pub(crate) fn inline_ptr(&self) -> *const T {
        ptr::addr_of!(self.inline) as *const T
    }

    #[inline]
    pub(crate) fn inline_mut_ptr(&mut self) -> *mut T {
        ptr::addr_of_mut!(self.inline) as *mut T
    }

    /// # Safety
    /// The heap member must be the live one.
    #[inline]
    pub(crate) unsafe fn heap_ptr(&self) -> NonNull<T> {
        self.heap
    }
}

/// Allocates an uninitialized block for `capacity` elements, aligned for `T`.
///
/// Zero-sized layouts never reach the allocator and yield a dangling pointer.
pub(crate) fn allocate<T>(capacity: usize) -> Result<NonNull<T>, AllocError> {
    let layout = Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    // SAFETY: layout has a non-zero size.
    let ptr = unsafe { alloc(layout) } as *mut T;
    NonNull::new(ptr).ok_or(AllocError::AllocFailed { layout })
}

/// Releases a block obtained from [`allocate`] with the same `capacity`.
///
/// # Safety
/// `ptr` must come from `allocate::<T>(capacity)` and not have been released yet.
pub(crate) unsafe fn deallocate<T>(ptr: NonNull<T>, capacity: usize) {
    let size = size_of::<T>() * capacity;
    if size == 0 {
        return;
    }
    // the same layout was validated by `allocate`
    let layout = Layout::from_size_align_unchecked(size, align_of::<T>());
    dealloc(ptr.as_ptr() as *mut u8, layout);
}

/// Moves `count` live elements from `src` to `dst`.
///
/// Afterwards the source slots are logically uninitialized and must not be dropped.
///
/// # Safety
/// `src` must hold `count` live elements, `dst` must be valid for `count`
/// writes, and the two ranges must not overlap.
#[inline]
pub(crate) unsafe fn relocate<T>(src: *const T, dst: *mut T, count: usize) {
    if count > 0 {
        ptr::copy_nonoverlapping(src, dst, count);
    }
}

/// Drops `count` live elements starting at `ptr`, in index order. The memory stays allocated.
///
/// # Safety
/// `ptr` must hold `count` live elements, which are dead afterwards.
#[inline]
pub(crate) unsafe fn destroy<T>(ptr: *mut T, count: usize) {
    if count > 0 {
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, count));
    }
}
