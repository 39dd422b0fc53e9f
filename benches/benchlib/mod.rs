use std::ops::Range;

use rand::{distributions::Uniform, prelude::Distribution, thread_rng};

pub fn uniform_values(range: Range<i64>, len: usize) -> Vec<i64> {
    let rng = &mut thread_rng();
    let dist = Uniform::from(range);
    (0..len).map(|_| dist.sample(rng)).collect()
}

pub fn uniform_floats(len: usize) -> Vec<f64> {
    let rng = &mut thread_rng();
    let dist = Uniform::from(-1.0e6..1.0e6);
    (0..len).map(|_| dist.sample(rng)).collect()
}

/// `count` sequences of length `len` drawn from a range sized so that
/// roughly `overlap` of each sequence also appears in the others.
pub fn overlapping_sequences(count: usize, len: usize, overlap: f64) -> Vec<Vec<i64>> {
    let span = ((len as f64) / overlap.max(0.01)) as i64 + 1;
    (0..count).map(|_| uniform_values(0..span, len)).collect()
}
