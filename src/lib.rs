#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use small_vector::SmallVector;
//!
//! // Four inline slots, counts kept in a u8
//! let mut v: SmallVector<i32, u8, 4> = SmallVector::new();
//!
//! for i in 1..=4 {
//!     v.push(i);
//! }
//! assert_eq!(v.capacity(), 4);
//! assert!(!v.spilled());
//!
//! // The fifth element moves storage to the heap, doubling capacity
//! v.push(5);
//! assert_eq!(v.capacity(), 8);
//! assert!(v.spilled());
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//! ```
//!
//! # Storage Mode
//!
//! There is no flag telling inline storage from heap storage. The vector is
//! heap-backed exactly when `capacity() != N`, and capacity never drops below
//! `N`, so the two states cannot be confused:
//!
//! ```rust
//! use small_vector::SmallVector;
//!
//! let mut v: SmallVector<u64, u32, 2> = SmallVector::new();
//! v.reserve(1); // below capacity, nothing happens
//! assert_eq!(v.capacity(), 2);
//!
//! v.reserve(3);
//! assert_eq!(v.capacity(), 3);
//! assert!(v.spilled());
//!
//! v.clear(); // clearing keeps the heap block
//! assert_eq!(v.capacity(), 3);
//! ```
//!
//! # Index Width
//!
//! Count and capacity are stored in the index type `I` (`u8`, `u16`, `u32`,
//! `u64` or `usize`), which shrinks the vector's own footprint:
//!
//! ```rust
//! use small_vector::SmallVector;
//! use core::mem::size_of;
//!
//! assert!(size_of::<SmallVector<u8, u8, 8>>() < size_of::<SmallVector<u8, usize, 8>>());
//! ```

extern crate alloc;

/// Emits a `log::trace!` record when the `log` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        {
            log::trace!($($arg)*);
        }
    }};
}

mod error;
mod index;
mod raw;
mod small_vector;

#[cfg(feature = "serde")]
mod serde;

pub use error::AllocError;
pub use index::SmallVectorIndex;
pub use small_vector::SmallVector;

#[cfg(test)]
#[path = "tests/small_vector_tests.rs"]
mod tests;
