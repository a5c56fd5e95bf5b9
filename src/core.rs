//! Core traits for kxsort.
//!
//! This module defines:
//! - [`RadixInt`]: the fixed-width integer types the sort accepts.
//! - [`KeyPolicy`]: how a byte is read from a value and how two values compare.
//! - [`Unsigned`] and [`Signed`]: the two built-in policies.

/// A fixed-width integer, 1 to 8 bytes wide, that can be radix sorted.
///
/// Every implementor names its natural [`KeyPolicy`] through `Policy`, so the
/// signed/unsigned choice is made once per call at the type level rather than
/// per element.
pub trait RadixInt: Copy + Ord {
    /// Width of the type in bytes.
    const BYTES: usize;

    /// Whether the type is two's-complement signed.
    const SIGNED: bool;

    /// The policy [`crate::sort`] uses for this type.
    type Policy: KeyPolicy<Self> + Default;

    /// Raw bit pattern, zero-extended to 64 bits.
    fn to_bits(self) -> u64;

    /// Mask of the most significant bit of the type.
    #[inline(always)]
    fn sign_bit() -> u64 {
        1 << (Self::BYTES * 8 - 1)
    }

    /// Bit pattern whose unsigned order matches the numeric order of `self`.
    #[inline(always)]
    fn ordered_bits(self) -> u64 {
        if Self::SIGNED {
            self.to_bits() ^ Self::sign_bit()
        } else {
            self.to_bits()
        }
    }
}

/// Key-extraction policy used by the radix passes and the insertion fallback.
///
/// `byte_at` must be consistent with `less_than`: if `less_than(a, b)` then the
/// sequence of bytes of `a` read from the top position down must compare lower
/// than that of `b`. The radix passes only ever look at `byte_at`; the
/// insertion fallback only ever looks at `less_than`.
///
/// # Examples
///
/// A policy that sorts descending:
///
/// ```
/// use kxsort::{KeyPolicy, RangeHint, sort_with};
///
/// struct Descending;
///
/// impl KeyPolicy<u16> for Descending {
///     fn byte_at(&self, value: &u16, k: usize) -> u8 {
///         (!*value >> (k * 8)) as u8
///     }
///
///     fn less_than(&self, a: &u16, b: &u16) -> bool {
///         a > b
///     }
/// }
///
/// let mut data = vec![3u16, 700, 12];
/// sort_with(&mut data, Descending, RangeHint::FULL);
/// assert_eq!(data, vec![700, 12, 3]);
/// ```
pub trait KeyPolicy<T> {
    /// Returns the byte at radix position `k` (0 = least significant).
    fn byte_at(&self, value: &T, k: usize) -> u8;

    /// Strict total order over values.
    fn less_than(&self, a: &T, b: &T) -> bool;
}

/// Reads bytes straight from the bit pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unsigned;

/// Flips the most significant bit before reading bytes, so that negative
/// values land in the lower buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Signed;

impl<T: RadixInt> KeyPolicy<T> for Unsigned {
    #[inline(always)]
    fn byte_at(&self, value: &T, k: usize) -> u8 {
        (value.to_bits() >> (k * 8)) as u8
    }

    #[inline(always)]
    fn less_than(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: RadixInt> KeyPolicy<T> for Signed {
    #[inline(always)]
    fn byte_at(&self, value: &T, k: usize) -> u8 {
        ((value.to_bits() ^ T::sign_bit()) >> (k * 8)) as u8
    }

    #[inline(always)]
    fn less_than(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

macro_rules! impl_radix_int {
    ($policy:ty, $signed:expr, $($t:ty => $bits:ty),+ $(,)?) => {
        $(
            impl RadixInt for $t {
                const BYTES: usize = std::mem::size_of::<$t>();
                const SIGNED: bool = $signed;
                type Policy = $policy;

                #[inline(always)]
                fn to_bits(self) -> u64 {
                    self as $bits as u64
                }
            }
        )+
    };
}

impl_radix_int!(Unsigned, false, u8 => u8, u16 => u16, u32 => u32, u64 => u64, usize => usize);
impl_radix_int!(Signed, true, i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_bytes() {
        let v = 0x1234_5678u32;
        assert_eq!(Unsigned.byte_at(&v, 0), 0x78);
        assert_eq!(Unsigned.byte_at(&v, 1), 0x56);
        assert_eq!(Unsigned.byte_at(&v, 3), 0x12);
    }

    #[test]
    fn test_signed_msb_flip() {
        assert_eq!(Signed.byte_at(&-1i16, 1), 0x7f);
        assert_eq!(Signed.byte_at(&0i16, 1), 0x80);
        assert_eq!(Signed.byte_at(&i16::MIN, 1), 0x00);
        assert_eq!(Signed.byte_at(&i16::MAX, 1), 0xff);
        // Lower bytes are untouched.
        assert_eq!(Signed.byte_at(&-1i16, 0), 0xff);
    }

    #[test]
    fn test_sign_extension_is_dropped() {
        assert_eq!((-1i8).to_bits(), 0xff);
        assert_eq!((-1i32).to_bits(), 0xffff_ffff);
        assert_eq!(i64::MIN.to_bits(), 1 << 63);
    }

    #[test]
    fn test_ordered_bits_follow_numeric_order() {
        let values = [i32::MIN, -70_000, -1, 0, 1, 255, 256, i32::MAX];
        for w in values.windows(2) {
            assert!(w[0].ordered_bits() < w[1].ordered_bits());
        }

        assert_eq!(7u8.ordered_bits(), 7);
    }

    #[test]
    fn test_widths() {
        assert_eq!(<u8 as RadixInt>::BYTES, 1);
        assert_eq!(<i16 as RadixInt>::BYTES, 2);
        assert_eq!(<u32 as RadixInt>::BYTES, 4);
        assert_eq!(<i64 as RadixInt>::BYTES, 8);
        assert_eq!(<usize as RadixInt>::BYTES, std::mem::size_of::<usize>());
    }
}
