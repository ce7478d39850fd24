use std::iter;

use crate::utils::{distinct, remove_first};

/// Lazy stream of ordered arrangements
pub type Permutations<T> = Box<dyn Iterator<Item = Vec<T>> + Send>;

/// Every ordered arrangement of every non-empty subset of `items`.
///
/// Equal values are treated as interchangeable, so arrangements that only
/// differ by which copy of a duplicate sits at a position are produced once.
/// Arrangements are generated on demand; nothing beyond the current
/// recursion path is held in memory.
pub fn permutations<T>(items: &[T]) -> Permutations<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let items = items.to_vec();
    let heads = distinct(&items);

    Box::new(heads.into_iter().flat_map(move |head| {
        let rest = remove_first(&items, &head);
        let tail_head = head.clone();
        iter::once(vec![head]).chain(permutations(&rest).map(move |tail| {
            let mut arrangement = Vec::with_capacity(tail.len() + 1);
            arrangement.push(tail_head.clone());
            arrangement.extend(tail);
            arrangement
        }))
    }))
}
