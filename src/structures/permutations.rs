//! Backtracking enumeration of orderings.

/// All orderings of `items`, in lexicographic order of positions.
///
/// `items` must not contain duplicates: an item is considered used if an
/// equal item is already in the partial ordering. The used check is a linear
/// scan, so the whole enumeration costs `O(n · n!)` and is only meant for
/// small inputs.
///
/// An empty slice has exactly one ordering, the empty one.
pub fn permutations<T: Clone + PartialEq>(items: &[T]) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(items.len());
    backtrack(items, &mut current, &mut out);
    out
}

fn backtrack<T: Clone + PartialEq>(items: &[T], current: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
    if current.len() == items.len() {
        out.push(current.clone());
        return;
    }
    for item in items {
        if current.contains(item) {
            continue;
        }
        current.push(item.clone());
        backtrack(items, current, out);
        current.pop();
    }
}
