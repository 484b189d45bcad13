use core::fmt;
use core::hash::Hash;

use num_traits::{AsPrimitive, NumCast, PrimInt, Unsigned};

/// Sealed trait module to prevent external implementations.
mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
}

/// Trait for integer types that can hold the count and capacity of a `SmallVector`.
///
/// This trait is sealed and only implemented for `u8`, `u16`, `u32`, `u64`, and `usize`.
/// A narrower index makes the vector itself smaller, at the price of a lower
/// maximum capacity.
///
/// | Index   | Max Capacity | Bookkeeping |
/// |---------|--------------|-------------|
/// | `u8`    | 255          | 2 bytes     |
/// | `u16`   | 65,535       | 4 bytes     |
/// | `u32`   | ~4.29B       | 8 bytes     |
/// | `u64`   | `usize::MAX` | 16 bytes    |
/// | `usize` | `usize::MAX` | 16 bytes*   |
///
/// *On 64-bit platforms. On 32-bit, 8 bytes.
pub trait SmallVectorIndex:
    private::Sealed + PrimInt + Unsigned + Hash + fmt::Debug + AsPrimitive<usize> + 'static
{
    /// Largest value representable both in `Self` and in `usize`.
    const MAX_CAPACITY: usize;

    /// Converts `n`, returning `None` if it does not fit in `Self`.
    #[inline]
    fn from_usize(n: usize) -> Option<Self> {
        <Self as NumCast>::from(n)
    }

    /// Converts `n` with a plain `as` cast.
    ///
    /// Callers must already know that `n <= Self::MAX_CAPACITY`.
    fn narrow(n: usize) -> Self;
}

macro_rules! impl_index {
    ($($ty:ty),*) => {
        $(
            impl SmallVectorIndex for $ty {
                const MAX_CAPACITY: usize = if (<$ty>::MAX as u128) < (usize::MAX as u128) {
                    <$ty>::MAX as usize
                } else {
                    usize::MAX
                };

                #[inline]
                fn narrow(n: usize) -> Self {
                    debug_assert!(n <= Self::MAX_CAPACITY, "count exceeds index capacity");
                    n as $ty
                }
            }
        )*
    };
}

impl_index!(u8, u16, u32, u64, usize);
