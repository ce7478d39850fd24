use std::sync::Arc;

use log::info;

use crate::expression::Expression;

use super::generator::combiners_using;
use super::permutations::{Permutations, permutations};

/// Lazy stream of expressions
pub type ExpressionStream = Box<dyn Iterator<Item = Expression> + Send>;

/// Every expression tree over `operands`, keeping their left-to-right order.
///
/// For each split point the right-hand candidates are materialised once and
/// shared by every left-hand candidate; the left-hand side stays lazy.
pub fn expressions(operands: &[Expression]) -> ExpressionStream {
    if operands.len() < 2 {
        return Box::new(operands.to_vec().into_iter());
    }

    let operands = operands.to_vec();
    let len = operands.len();

    Box::new((1..len).flat_map(move |split| {
        let (left, right) = operands.split_at(split);
        let rights: Arc<Vec<Expression>> = Arc::new(expressions(right).collect());

        expressions(left).flat_map(move |left_expr| {
            let rights = Arc::clone(&rights);
            combiners_using(&left_expr).flat_map(move |combiner| {
                let rights = Arc::clone(&rights);
                (0..rights.len())
                    .filter_map(move |i| rights.get(i).and_then(|right| combiner.combine(right)))
            })
        })
    }))
}

/// The full candidate stream for a bag of source numbers: every arrangement
/// of every subset, expanded into every expression tree over it.
pub struct ExpressionIterator {
    arrangements: Permutations<i64>,
    current: ExpressionStream,
}

impl ExpressionIterator {
    pub fn new(numbers: &[i64]) -> Self {
        info!(
            "Initialized expression generator over {} source numbers",
            numbers.len()
        );

        Self {
            arrangements: permutations(numbers),
            current: Box::new(std::iter::empty()),
        }
    }
}

impl Iterator for ExpressionIterator {
    type Item = Expression;

    fn next(&mut self) -> Option<Expression> {
        loop {
            if let Some(expr) = self.current.next() {
                return Some(expr);
            }

            let arrangement = self.arrangements.next()?;
            let atoms: Vec<Expression> = arrangement.into_iter().map(Expression::Number).collect();
            self.current = expressions(&atoms);
        }
    }
}
