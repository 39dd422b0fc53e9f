//! Hash-backed presence maps shared by dedup and set algebra.
//!
//! The `fxhash` feature swaps std's SipHash for `rustc_hash`'s Fx hasher.

use crate::Scalar;
use std::collections::{HashMap, HashSet};

#[cfg(feature = "fxhash")]
pub type PresenceHasher = rustc_hash::FxBuildHasher;
#[cfg(not(feature = "fxhash"))]
pub type PresenceHasher = std::collections::hash_map::RandomState;

/// Value to occurrence marker or count.
pub type PresenceMap<T, V> = HashMap<T, V, PresenceHasher>;
pub type PresenceSet<T> = HashSet<T, PresenceHasher>;

pub fn presence_map<T, V>(cardinality: usize) -> PresenceMap<T, V> {
    HashMap::with_capacity_and_hasher(cardinality, PresenceHasher::default())
}

pub fn presence_set<T>(cardinality: usize) -> PresenceSet<T> {
    HashSet::with_capacity_and_hasher(cardinality, PresenceHasher::default())
}

/// Collapses `seq` into a set; duplicates disappear.
pub fn from_slice<T>(seq: &[T]) -> PresenceSet<T>
where
    T: Scalar,
{
    let mut set = presence_set(seq.len());
    for item in seq {
        set.insert(item.clone());
    }
    set
}
