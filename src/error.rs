use alloc::alloc::{handle_alloc_error, Layout};
use core::fmt;

/// Error returned by [`SmallVector::try_reserve`](crate::SmallVector::try_reserve).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// The requested capacity does not fit in the index type or overflows `isize::MAX` bytes.
    CapacityOverflow,
    /// The global allocator could not provide the block.
    AllocFailed {
        /// The layout that was passed to the allocator.
        layout: Layout,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::CapacityOverflow => f.write_str("capacity overflow"),
            AllocError::AllocFailed { layout } => write!(
                f,
                "allocation of {} bytes (align {}) failed",
                layout.size(),
                layout.align()
            ),
        }
    }
}

/// Turns a failed reservation into a panic or an allocation-error abort.
#[inline]
pub(crate) fn infallible<T>(result: Result<T, AllocError>) -> T {
    match result {
        Ok(x) => x,
        Err(AllocError::CapacityOverflow) => panic!("capacity overflow"),
        Err(AllocError::AllocFailed { layout }) => handle_alloc_error(layout),
    }
}
