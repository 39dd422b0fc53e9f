//! Floating-point values as presence-map keys.
//!
//! `f32`/`f64` are neither `Eq` nor `Hash`, so they cannot go through the
//! set operations directly. [`FloatKey`] fixes an equivalence for them:
//! `0.0` and `-0.0` are the same key, every NaN is the same key, and all
//! other values compare as usual.

use num::Float;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy)]
pub struct FloatKey<F>(pub F);

impl<F: Float> FloatKey<F> {
    pub fn get(self) -> F {
        self.0
    }
}

impl<F: Float> From<F> for FloatKey<F> {
    fn from(value: F) -> Self {
        Self(value)
    }
}

impl<F: Float> PartialEq for FloatKey<F> {
    fn eq(&self, other: &Self) -> bool {
        (self.0.is_nan() && other.0.is_nan()) || self.0 == other.0
    }
}

impl<F: Float> Eq for FloatKey<F> {}

impl<F: Float> Hash for FloatKey<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.0.is_nan() {
            state.write_u8(2);
        } else if self.0.is_zero() {
            state.write_u8(0);
        } else {
            state.write_u8(1);
            self.0.integer_decode().hash(state);
        }
    }
}
