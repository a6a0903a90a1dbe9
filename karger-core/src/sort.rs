//! Randomized quicksort.
//!
//! Picks a uniformly random pivot per partition step, giving an expected
//! O(n log n) comparison count on every input. Partitioning is three-way so
//! runs of equal keys do not degrade to quadratic time, and the recursion
//! always descends into the smaller side to keep the stack depth logarithmic.

use std::{cmp::Ordering, mem};

use rand::Rng;

/// Sorts `items` in place in ascending order.
///
/// # Examples
/// ```
/// use karger_core::randomized_quicksort;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let mut values = vec![5, 1, 4, 1, 3];
/// randomized_quicksort(&mut values, &mut rng);
/// assert_eq!(values, [1, 1, 3, 4, 5]);
/// ```
pub fn randomized_quicksort<T: Ord, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    randomized_quicksort_by(items, rng, T::cmp);
}

/// Sorts `items` in place using `compare`.
pub fn randomized_quicksort_by<T, R, F>(items: &mut [T], rng: &mut R, mut compare: F)
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_slice(items, rng, &mut compare);
}

fn sort_slice<T, R, F>(mut items: &mut [T], rng: &mut R, compare: &mut F)
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    while items.len() > 1 {
        let pivot = rng.gen_range(0..items.len());
        items.swap(0, pivot);
        let (lower_end, upper_start) = partition(items, compare);

        let (lower, rest) = mem::take(&mut items).split_at_mut(lower_end);
        let (_, upper) = rest.split_at_mut(upper_start.saturating_sub(lower_end));
        if lower.len() < upper.len() {
            sort_slice(lower, rng, compare);
            items = upper;
        } else {
            sort_slice(upper, rng, compare);
            items = lower;
        }
    }
}

/// Three-way partition around `items[0]`.
///
/// Returns `(lt, gt)` such that `items[..lt]` is less than the pivot,
/// `items[lt..gt]` equals it and `items[gt..]` is greater.
fn partition<T, F>(items: &mut [T], compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut lt = 0;
    let mut cursor = 1;
    let mut gt = items.len();
    while cursor < gt {
        match compare(&items[cursor], &items[lt]) {
            Ordering::Less => {
                items.swap(lt, cursor);
                lt += 1;
                cursor += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                items.swap(cursor, gt);
            }
            Ordering::Equal => cursor += 1,
        }
    }
    (lt, gt)
}
