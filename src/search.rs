/// Position of the first element equal to `target`, or `None`.
pub fn element_index<T>(seq: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    for (idx, item) in seq.iter().enumerate() {
        if item == target {
            return Some(idx);
        }
    }
    None
}

/// Membership test in the manner of PHP's `in_array`.
#[inline]
pub fn in_array<T>(seq: &[T], target: &T) -> bool
where
    T: PartialEq,
{
    element_index(seq, target).is_some()
}
