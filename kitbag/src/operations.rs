//! Small functional helpers.

/// Swaps two values in place.
pub fn swap<T>(a: &mut T, b: &mut T) {
    std::mem::swap(a, b);
}

/// Returns whether `data` satisfies `predicate`.
pub fn meets_criteria<T, P>(data: &T, predicate: P) -> bool
where
    P: Fn(&T) -> bool,
{
    predicate(data)
}

/// Applies `operation` to `value` and returns its result.
pub fn apply_operation<T, R, F>(value: &T, operation: F) -> R
where
    F: FnOnce(&T) -> R,
{
    operation(value)
}
