/// Distinct values in order of first occurrence
pub fn distinct<T: Clone + PartialEq>(items: &[T]) -> Vec<T> {
    let mut seen: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(item) {
            seen.push(item.clone());
        }
    }
    seen
}

/// Copy of `items` with the first occurrence of `value` removed.
///
/// Returns an unchanged copy when `value` is absent.
pub fn remove_first<T: Clone + PartialEq>(items: &[T], value: &T) -> Vec<T> {
    match items.iter().position(|item| item == value) {
        Some(pos) => items
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != pos)
            .map(|(_, item)| item.clone())
            .collect(),
        None => items.to_vec(),
    }
}
