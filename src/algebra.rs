//! Multiset-style set algebra over unsorted slices.
//!
//! Every operation collapses its inputs into presence maps first, so
//! duplicates never reach the output and output order follows map iteration
//! order. `is_array_in_array` is the exception: it reports missing elements
//! of `small` with their duplicates and original order intact.

use crate::{
    errors::{Error, Result},
    presence::{self, PresenceSet},
    visitor::{VecWriter, Visitor},
    Scalar,
};
use tracing::trace;

/// Values common to every input sequence. Fails with
/// [`Error::NoSequences`] when `sets` is empty.
pub fn array_intersect<S, T>(sets: &[S]) -> Result<Vec<T>>
where
    S: AsRef<[T]>,
    T: Scalar,
{
    let mut writer = VecWriter::default();
    array_intersect_into(sets, &mut writer)?;
    Ok(writer.into())
}

/// Streams the intersection of `sets` into `visitor`, returning how many
/// values were visited.
pub fn array_intersect_into<S, T, V>(sets: &[S], visitor: &mut V) -> Result<usize>
where
    S: AsRef<[T]>,
    T: Scalar,
    V: Visitor<T>,
{
    let (first, rest) = sets.split_first().ok_or(Error::NoSequences)?;
    let first = first.as_ref();

    let mut counts = presence::presence_map::<T, usize>(first.len());
    for item in first {
        counts.insert(item.clone(), 1);
    }

    for set in rest {
        let set = set.as_ref();
        let mut present: PresenceSet<&T> = presence::presence_set(set.len());
        present.extend(set.iter());

        for item in present {
            if let Some(count) = counts.get_mut(item) {
                *count += 1;
            }
        }
    }

    // A value seen in every input was counted exactly once per input.
    let mut emitted = 0;
    for (item, count) in counts {
        if count == sets.len() {
            visitor.visit(item);
            emitted += 1;
        }
    }

    trace!(inputs = sets.len(), common = emitted, "intersected sequences");
    Ok(emitted)
}

/// Distinct elements of `big` that do not appear in `small`.
///
/// The names are only for intuition: `small` may well be the longer slice.
pub fn array_subtract<T>(small: &[T], big: &[T]) -> Vec<T>
where
    T: Scalar,
{
    let mut writer = VecWriter::default();
    array_subtract_into(small, big, &mut writer);
    writer.into()
}

pub fn array_subtract_into<T, V>(small: &[T], big: &[T], visitor: &mut V) -> usize
where
    T: Scalar,
    V: Visitor<T>,
{
    let mut remaining = presence::from_slice(big);
    for item in small {
        remaining.remove(item);
    }

    let emitted = remaining.len();
    for item in remaining {
        visitor.visit(item);
    }

    trace!(small = small.len(), big = big.len(), remaining = emitted, "subtracted sequences");
    emitted
}

/// Checks whether every element of `small` occurs in `big`.
///
/// Returns `(true, [])` on full containment; otherwise `false` and the
/// elements of `small` missing from `big`, duplicates and order preserved.
pub fn is_array_in_array<T>(small: &[T], big: &[T]) -> (bool, Vec<T>)
where
    T: Scalar,
{
    let mut present: PresenceSet<&T> = presence::presence_set(big.len());
    present.extend(big.iter());

    let mut missing = Vec::new();
    for item in small {
        if !present.contains(item) {
            missing.push(item.clone());
        }
    }

    (missing.is_empty(), missing)
}
