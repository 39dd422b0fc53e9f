//! Error type shared by the fallible operations.
//!
//! Not-found lookups and missing subset elements are ordinary results and
//! never surface here; only violated preconditions do.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The median of an empty slice is undefined.
    #[error("cannot select the median of an empty slice")]
    EmptyInput,

    /// Intersection seeds its accumulator from the first input.
    #[error("intersection requires at least one input sequence")]
    NoSequences,

    /// A value which does not compare to itself (NaN).
    #[error("value at index {index} is not comparable")]
    Unordered { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
