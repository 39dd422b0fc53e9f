pub mod algebra;
pub mod errors;
pub mod float;
pub mod median;
pub mod presence;
pub mod search;
pub mod transform;
pub mod visitor;

use std::hash::Hash;

pub use algebra::{
    array_intersect, array_intersect_into,
    array_subtract, array_subtract_into,
    is_array_in_array,
};
pub use errors::{Error, Result};
pub use float::FloatKey;
pub use median::{find_median, find_median_with_stats, MedianStats, Numeric};
pub use search::{element_index, in_array};
pub use transform::{array_map, array_unique};

/// Element types usable as presence-map keys: integers, strings, chars and
/// anything else with total equality and a hash. Raw floats are excluded;
/// wrap them in [`FloatKey`].
pub trait Scalar: Eq + Hash + Clone {}

impl<T> Scalar for T
where
    T: Eq + Hash + Clone
{}
