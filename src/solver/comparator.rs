use std::cmp::Ordering;

use crate::expression::Expression;

/// Distance between the expression's value and the target
pub fn difference(target: i64, expr: &Expression) -> u64 {
    target.abs_diff(expr.value())
}

/// Whether `expr` is close enough to the target to be a candidate
pub fn within_tolerance(target: i64, tolerance: i64, expr: &Expression) -> bool {
    u64::try_from(tolerance).is_ok_and(|tolerance| difference(target, expr) <= tolerance)
}

/// Rank two expressions as solutions for `target`.
///
/// `Less` means `a` is the better solution: closer to the target, then fewer
/// numbers used, then fewer parentheses.
pub fn compare(target: i64, a: &Expression, b: &Expression) -> Ordering {
    difference(target, a)
        .cmp(&difference(target, b))
        .then_with(|| a.count().cmp(&b.count()))
        .then_with(|| a.parentheses().cmp(&b.parentheses()))
}

/// The better of two expressions; `a` is kept on a full tie.
pub fn better(target: i64, a: Expression, b: Expression) -> Expression {
    if compare(target, &a, &b) == Ordering::Greater {
        b
    } else {
        a
    }
}
