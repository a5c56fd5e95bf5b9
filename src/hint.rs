//! Range hints: bounding how many radix passes a sort needs.

use crate::core::RadixInt;
use crate::error::SortError;

/// Caller-supplied bound on the spread of the values being sorted.
///
/// A hint lets the sort skip the high bytes that cannot distinguish any two
/// elements. It is trusted, never checked: the sort only orders elements by
/// their low [`RangeHint::bytes_needed`] key bytes and assumes every element
/// agrees on the bytes above that. An understated hint produces an
/// incompletely sorted slice, not an error.
///
/// A raw `max - min` (via `From<u64>`) satisfies this whenever the values do
/// not straddle a multiple of `256^bytes`, e.g. any set of values in
/// `0..256` with a hint below 256. [`RangeHint::from_bounds`] and
/// [`RangeHint::of_slice`] always produce a sufficient hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RangeHint(u64);

impl RangeHint {
    /// No hint: every byte of the element is processed.
    pub const FULL: RangeHint = RangeHint(u64::MAX);

    /// Wraps a precomputed spread, typically `max - min`.
    pub const fn new(spread: u64) -> Self {
        RangeHint(spread)
    }

    /// Builds a hint covering every value in `[min, max]`.
    ///
    /// The spread is the XOR of the bounds' ordered bit patterns: all values
    /// between the bounds share the bits above its highest set bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use kxsort::{RangeHint, SortError};
    ///
    /// let hint = RangeHint::from_bounds(250u32, 260u32).unwrap();
    /// assert_eq!(hint.bytes_needed(4), 2);
    ///
    /// assert_eq!(RangeHint::from_bounds(9i8, -3i8), Err(SortError::InvertedBounds));
    /// ```
    pub fn from_bounds<T: RadixInt>(min: T, max: T) -> Result<Self, SortError> {
        if min > max {
            return Err(SortError::InvertedBounds);
        }

        Ok(RangeHint(min.ordered_bits() ^ max.ordered_bits()))
    }

    /// Scans `values` for their bounds. Returns `None` when `values` is empty.
    ///
    /// This costs a full pass over the data, so it only pays off when the
    /// resulting hint is reused or the bounds are cheaper to find than a
    /// radix pass.
    pub fn of_slice<T: RadixInt>(values: &[T]) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let (min, max) = rest.iter().fold((*first, *first), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

        Self::from_bounds(min, max).ok()
    }

    /// The wrapped spread.
    pub const fn spread(self) -> u64 {
        self.0
    }

    /// Number of low bytes the sort must process for elements `width` bytes
    /// wide: the byte length of the spread's bit length, clamped to
    /// `1..=width`.
    #[inline]
    pub fn bytes_needed(self, width: usize) -> usize {
        let bits = (u64::BITS - self.0.leading_zeros()) as usize;
        bits.div_ceil(8).clamp(1, width.max(1))
    }
}

impl Default for RangeHint {
    fn default() -> Self {
        RangeHint::FULL
    }
}

impl From<u64> for RangeHint {
    fn from(spread: u64) -> Self {
        RangeHint(spread)
    }
}
