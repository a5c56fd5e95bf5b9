//! Core sorting algorithms (in-place MSD radix sort and insertion sort).
//!
//! The sort is a hybrid of:
//! - **American flag sort**: an MSD radix pass that permutes elements into
//!   their 256 buckets by cycle-following swaps, using O(1) extra space.
//! - **Insertion Sort**: fallback for partitions of at most
//!   [`INSERTION_SORT_THRESHOLD`] elements.
//!
//! Passes run from the most significant needed byte down to byte 0. The number
//! of needed bytes comes from the element width, or from a [`RangeHint`].
//!
//! The main entry points are [`sort`] and [`sort_with`].

use crate::core::{KeyPolicy, RadixInt};
use crate::hint::RangeHint;
use cuneiform::cuneiform;

/// Partitions at or below this length are insertion sorted.
pub const INSERTION_SORT_THRESHOLD: usize = 64;

/// Number of buckets per radix pass (256 for byte-wise).
pub const RADIX_BUCKETS: usize = 256;

// Cache-aligned counts struct.
#[cuneiform]
struct RadixCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Sorts `data` in place using the natural policy and full width of `T`.
///
/// Unstable. Runs in `O(w * n)` for `w` bytes of key width, with no heap
/// allocation.
///
/// # Examples
///
/// ```
/// use kxsort::sort;
///
/// let mut data = vec![-5i32, 3, -1, 0, 2];
/// sort(&mut data);
///
/// assert_eq!(data, vec![-5, -1, 0, 2, 3]);
/// ```
pub fn sort<T: RadixInt>(data: &mut [T]) {
    dispatch(data, &T::Policy::default(), T::BYTES);
}

/// Sorts `data` in place with an explicit `policy` and range hint.
///
/// The hint only decides how many low bytes are processed; see [`RangeHint`]
/// for the exact precondition. It is trusted: an understated hint leaves the
/// slice partially sorted. Pass [`RangeHint::FULL`] to process every byte.
///
/// # Arguments
///
/// * `data` - The slice to be sorted.
/// * `policy` - Byte extraction and comparison rule; see [`KeyPolicy`].
/// * `hint` - Spread of the values, typically `max - min`.
///
/// # Examples
///
/// ```
/// use kxsort::{Unsigned, sort_with};
///
/// let mut data = vec![200u32, 4, 130, 77];
/// sort_with(&mut data, Unsigned, 200u64 - 4);
///
/// assert_eq!(data, vec![4, 77, 130, 200]);
/// ```
pub fn sort_with<T, P>(data: &mut [T], policy: P, hint: impl Into<RangeHint>)
where
    T: RadixInt,
    P: KeyPolicy<T>,
{
    let bytes = hint.into().bytes_needed(T::BYTES);
    dispatch(data, &policy, bytes);
}

/// Extension trait adding kxsort to slices (and `Vec` through deref).
pub trait KxSort {
    /// Sorts in place; see [`sort`].
    fn kx_sort(&mut self);

    /// Sorts in place with the natural policy and a range hint; see
    /// [`sort_with`].
    fn kx_sort_with_hint(&mut self, hint: RangeHint);
}

impl<T: RadixInt> KxSort for [T] {
    fn kx_sort(&mut self) {
        sort(self);
    }

    fn kx_sort_with_hint(&mut self, hint: RangeHint) {
        sort_with(self, T::Policy::default(), hint);
    }
}

fn dispatch<T: Copy, P: KeyPolicy<T>>(data: &mut [T], policy: &P, bytes: usize) {
    if data.len() <= INSERTION_SORT_THRESHOLD {
        insertion_sort(data, policy);
        return;
    }

    radix_partition(data, policy, bytes - 1);
}

/// Sorts `data` by adjacent shifts using `policy.less_than`.
///
/// Quadratic; the radix passes only route partitions of at most
/// [`INSERTION_SORT_THRESHOLD`] elements here.
pub fn insertion_sort<T: Copy, P: KeyPolicy<T>>(data: &mut [T], policy: &P) {
    #[cfg(feature = "work_profiles")]
    println!("INSERTION {}", data.len());

    for i in 1..data.len() {
        let tmp = data[i];
        if !policy.less_than(&tmp, &data[i - 1]) {
            continue;
        }

        let mut j = i;
        while j > 0 && policy.less_than(&tmp, &data[j - 1]) {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = tmp;
    }
}

/// One radix pass at `byte`, then refinement of every bucket.
///
/// 1. Counts occurrences of each byte value.
/// 2. Computes bucket heads (exclusive prefix sum).
/// 3. Permutes elements into their buckets in place.
/// 4. Recurses on large buckets at `byte - 1`, insertion sorts small ones.
fn radix_partition<T: Copy, P: KeyPolicy<T>>(data: &mut [T], policy: &P, byte: usize) {
    #[cfg(feature = "work_profiles")]
    println!("({}) RADIX {}", byte, data.len());

    let counts = count_bytes(data, policy, byte);
    let counts = &counts.data;

    permute_in_place(data, policy, byte, counts);

    if byte == 0 {
        return;
    }

    let mut start = 0;
    for &count in counts.iter() {
        let end = start + count;
        if count > INSERTION_SORT_THRESHOLD {
            radix_partition(&mut data[start..end], policy, byte - 1);
        } else if count > 1 {
            insertion_sort(&mut data[start..end], policy);
        }
        start = end;
    }
}

fn count_bytes<T, P: KeyPolicy<T>>(data: &[T], policy: &P, byte: usize) -> RadixCounts {
    let mut counts = RadixCounts {
        data: [0; RADIX_BUCKETS],
    };

    data.iter().for_each(|v| {
        counts.data[policy.byte_at(v, byte) as usize] += 1;
    });

    counts
}

#[inline]
fn prefix_sums(counts: &[usize; RADIX_BUCKETS]) -> [usize; RADIX_BUCKETS] {
    let mut sums = [0usize; RADIX_BUCKETS];
    let mut running_total = 0;

    for (sum, &count) in sums.iter_mut().zip(counts.iter()) {
        *sum = running_total;
        running_total += count;
    }

    sums
}

/// American flag permutation.
///
/// `heads[b]` is the next unfilled slot of bucket `b`. Bucket `b` is walked
/// from its head to its end; an element belonging elsewhere is carried along
/// its cycle, each hop dropping it at the head of its own bucket and picking
/// up the displaced element, until an element of bucket `b` comes back.
/// Buckets below `b` are complete, so every carried element targets `b` or a
/// later bucket.
fn permute_in_place<T: Copy, P: KeyPolicy<T>>(
    data: &mut [T],
    policy: &P,
    byte: usize,
    counts: &[usize; RADIX_BUCKETS],
) {
    let len = data.len();
    let starts = prefix_sums(counts);
    let mut heads = starts;

    for b in 0..RADIX_BUCKETS {
        let end = starts[b] + counts[b];
        if end == len {
            // Everything left belongs to `b`.
            break;
        }

        while heads[b] != end {
            let mut carry = data[heads[b]];
            let mut target = policy.byte_at(&carry, byte) as usize;

            if target != b {
                while target != b {
                    std::mem::swap(&mut carry, &mut data[heads[target]]);
                    heads[target] += 1;
                    target = policy.byte_at(&carry, byte) as usize;
                }
                data[heads[b]] = carry;
            }

            heads[b] += 1;
        }
    }
}
