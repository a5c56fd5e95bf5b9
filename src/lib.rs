//! # kxsort
//!
//! `kxsort` is an adaptive, in-place radix sort for fixed-width integers
//! (`u8`..`u64`, `i8`..`i64`, `usize`, `isize`).
//!
//! It is an MSD **American flag sort**: each pass counts the byte values at one
//! radix position, then permutes elements into their 256 buckets by following
//! swap cycles, so no auxiliary buffer the size of the input is ever allocated.
//! Buckets are refined at the next lower byte, or insertion sorted once they
//! hold at most [`INSERTION_SORT_THRESHOLD`] elements.
//!
//! ## Key Features
//!
//! - **In-Place**: O(1) extra space per pass (256 counters and cursors), and
//!   recursion depth bounded by the key width.
//! - **Adaptive Pass Count**: A [`RangeHint`] lets the sort skip high bytes
//!   that cannot distinguish any two elements.
//! - **Signed Keys**: Signed types use the [`Signed`] policy, which flips the
//!   most significant bit so negative values sort first.
//! - **Custom Orders**: The [`KeyPolicy`] trait can be implemented downstream,
//!   e.g. to sort descending.
//!
//! ## Usage
//!
//! ```rust
//! use kxsort::prelude::*;
//!
//! let mut data = vec![-5i32, 3, -1, 0, 2];
//! data.kx_sort();
//! assert_eq!(data, vec![-5, -1, 0, 2, 3]);
//!
//! // With a precomputed max - min, only one byte is processed.
//! let mut data = vec![200u32, 4, 130, 77];
//! sort_with(&mut data, Unsigned, RangeHint::new(200 - 4));
//! assert_eq!(data, vec![4, 77, 130, 200]);
//! ```
//!
//! ## Range Hints
//!
//! A hint is trusted, never validated, since checking it would cost the very
//! scan it exists to avoid. An understated hint yields an incompletely sorted
//! slice. See [`RangeHint`] for when a raw `max - min` is sufficient, and
//! [`RangeHint::from_bounds`] for a hint that always is.
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(w * n) for `w` processed bytes, plus O(t * n) insertion work
//!   for the threshold `t` at the leaves.
//! - **Memory**: no heap allocation.
//! - **Stability**: not stable.
//!
//! Enable the `work_profiles` feature to print one line per radix pass and per
//! insertion sort leaf.

pub mod algo;
pub mod core;
pub mod error;
pub mod hint;

pub use crate::algo::{
    INSERTION_SORT_THRESHOLD, KxSort, RADIX_BUCKETS, insertion_sort, sort, sort_with,
};
pub use crate::core::{KeyPolicy, RadixInt, Signed, Unsigned};
pub use crate::error::SortError;
pub use crate::hint::RangeHint;

pub mod prelude {
    pub use crate::algo::{KxSort, sort, sort_with};
    pub use crate::core::{KeyPolicy, RadixInt, Signed, Unsigned};
    pub use crate::hint::RangeHint;
}
