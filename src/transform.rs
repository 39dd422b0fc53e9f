use crate::{presence, Scalar};

/// Eagerly maps every element, in index order, to a new vector of the same
/// length. The callback also receives the element's position.
pub fn array_map<T, R, F>(seq: &[T], mut callback: F) -> Vec<R>
where
    F: FnMut(&T, usize) -> R,
{
    let mut mapped = Vec::with_capacity(seq.len());
    for (idx, item) in seq.iter().enumerate() {
        mapped.push(callback(item, idx));
    }
    mapped
}

/// First occurrence of every distinct value, in original order.
pub fn array_unique<T>(seq: &[T]) -> Vec<T>
where
    T: Scalar,
{
    let mut seen = presence::presence_set(seq.len());
    let mut filtered = Vec::with_capacity(seq.len());

    for item in seq {
        if seen.insert(item.clone()) {
            filtered.push(item.clone());
        }
    }
    filtered
}
