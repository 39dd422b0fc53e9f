//! Exact median selection without sorting or copying the input.
//!
//! Torben Mogensen's method: bisect the value range `[min, max]` instead of
//! the positions. Each pass over the data counts the elements below, above
//! and equal to a guess and narrows the bracket to the nearest values that
//! actually occur in the data, so only a handful of scalars are kept no
//! matter how large the input is. A pass is O(n) and the number of passes
//! is bounded by the number of distinct values.
//!
//! See <http://ndevilla.free.fr/median/median/index.html>.

use crate::errors::{Error, Result};
use num::Float;
use std::{cmp::Ordering, fmt::Debug};
use tracing::{debug, trace};

mod private {
    pub trait Sealed {}
}

/// Primitive numbers the median selector accepts.
pub trait Numeric: Copy + PartialOrd + Debug + private::Sealed {
    /// A value in `[lo, hi]` splitting the range roughly in half. Never
    /// overflows. Integers truncate like `(lo + hi) / 2` would.
    fn bisect(lo: Self, hi: Self) -> Self;
}

macro_rules! numeric_int {
    ( $( $t:ty ),* ) => {
        $(
impl private::Sealed for $t {}

impl Numeric for $t {
    #[inline]
    fn bisect(lo: Self, hi: Self) -> Self {
        ((lo as i128 + hi as i128) / 2) as $t
    }
}
        )*
    }
}

macro_rules! numeric_float {
    ( $( $t:ty ),* ) => {
        $(
impl private::Sealed for $t {}

impl Numeric for $t {
    #[inline]
    fn bisect(lo: Self, hi: Self) -> Self {
        float_midpoint(lo, hi)
    }
}
        )*
    }
}

numeric_int!{i8, i16, i32, i64, isize, u8, u16, u32, u64, usize}
numeric_float!{f32, f64}

fn float_midpoint<F: Float>(lo: F, hi: F) -> F {
    let two = F::one() + F::one();

    let mut mid = (lo + hi) / two;
    if !mid.is_finite() {
        mid = lo / two + hi / two;
    }
    // -inf and +inf
    if mid.is_nan() {
        mid = F::zero();
    }

    if mid < lo {
        lo
    } else if mid > hi {
        hi
    } else {
        mid
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianStats<N> {
    /// Lower median: rank `ceil(n / 2)` counting from 1.
    pub median: N,
    /// Refinement passes over the data, not counting the min/max scan.
    pub passes: usize,
}

/// Lower median of `data`. For even lengths this is the smaller of the two
/// middle values, not their average.
///
/// Fails on an empty slice or when `data` holds a NaN.
pub fn find_median<N: Numeric>(data: &[N]) -> Result<N> {
    find_median_with_stats(data).map(|stats| stats.median)
}

pub fn find_median_with_stats<N: Numeric>(data: &[N]) -> Result<MedianStats<N>> {
    let (mut min, mut max) = bounds(data)?;
    let half = (data.len() + 1) / 2;

    let mut passes = 0;
    loop {
        let guess = N::bisect(min, max);
        let mut less = 0;
        let mut greater = 0;
        let mut equal = 0;
        let mut max_under = min;
        let mut min_above = max;

        for &value in data {
            if value < guess {
                less += 1;
                if value > max_under {
                    max_under = value;
                }
            } else if value > guess {
                greater += 1;
                if value < min_above {
                    min_above = value;
                }
            } else {
                equal += 1;
            }
        }
        passes += 1;

        trace!(?min, ?max, ?guess, less, equal, greater, "median pass");

        // Neither side holds more than half: whatever the guess did not
        // split off is equal to it and belongs to the middle.
        if less <= half && greater <= half {
            let median = if less >= half {
                max_under
            } else if less + equal >= half {
                guess
            } else {
                min_above
            };

            debug!(len = data.len(), passes, ?median, "median converged");
            return Ok(MedianStats { median, passes });
        }

        if less > greater {
            max = max_under;
        } else {
            min = min_above;
        }
    }
}

// Single scan for the initial bracket, rejecting values that do not
// compare to themselves.
fn bounds<N: Numeric>(data: &[N]) -> Result<(N, N)> {
    let (&first, rest) = data.split_first().ok_or(Error::EmptyInput)?;
    if first.partial_cmp(&first) != Some(Ordering::Equal) {
        return Err(Error::Unordered { index: 0 });
    }

    let mut min = first;
    let mut max = first;
    for (idx, &value) in rest.iter().enumerate() {
        if value.partial_cmp(&value) != Some(Ordering::Equal) {
            return Err(Error::Unordered { index: idx + 1 });
        }
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    Ok((min, max))
}
