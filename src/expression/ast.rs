use std::sync::Arc;

use crate::expression::operator::{Operator, Priority};

/// An arithmetic expression over source numbers.
///
/// Composite nodes are reference counted so a sub-expression can be shared
/// between every parent the enumerator builds on top of it.
#[derive(Debug, Clone)]
pub enum Expression {
    Number(i64),
    Binary(Arc<BinaryExpression>),
}

/// A composite node with its derived properties cached at construction.
#[derive(Debug)]
pub struct BinaryExpression {
    left: Expression,
    operator: Operator,
    right: Expression,
    value: i64,
    count: usize,
    parentheses: usize,
}

impl BinaryExpression {
    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }

    /// Whether the left operand is rendered inside parentheses
    pub fn left_parenthesised(&self) -> bool {
        needs_left_parens(self.operator, &self.left)
    }

    /// Whether the right operand is rendered inside parentheses
    pub fn right_parenthesised(&self) -> bool {
        needs_right_parens(self.operator, &self.right)
    }
}

fn needs_left_parens(operator: Operator, left: &Expression) -> bool {
    operator.priority() > left.priority()
}

fn needs_right_parens(operator: Operator, right: &Expression) -> bool {
    let priority = operator.priority();
    priority > right.priority() || (priority == right.priority() && !operator.is_commutative())
}

impl Expression {
    /// Combine two operands under `operator`.
    ///
    /// Returns `None` when the operator cannot be applied to the operand
    /// values (overflow, zero divisor or inexact division).
    pub fn binary(left: Expression, operator: Operator, right: Expression) -> Option<Expression> {
        let value = operator.apply(left.value(), right.value())?;
        let count = left.count() + right.count();
        let parentheses = left.parentheses()
            + right.parentheses()
            + usize::from(needs_left_parens(operator, &left))
            + usize::from(needs_right_parens(operator, &right));

        Some(Expression::Binary(Arc::new(BinaryExpression {
            left,
            operator,
            right,
            value,
            count,
            parentheses,
        })))
    }

    pub fn value(&self) -> i64 {
        match self {
            Expression::Number(n) => *n,
            Expression::Binary(node) => node.value,
        }
    }

    /// Number of source numbers used, i.e. leaves in the tree
    pub fn count(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Binary(node) => node.count,
        }
    }

    /// Number of parenthesised sub-expressions in the rendered form
    pub fn parentheses(&self) -> usize {
        match self {
            Expression::Number(_) => 0,
            Expression::Binary(node) => node.parentheses,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Expression::Number(_) => Priority::Atomic,
            Expression::Binary(node) => node.operator.priority(),
        }
    }

    /// Leaf values in left-to-right order, duplicates kept
    pub fn numbers(&self) -> Vec<i64> {
        let mut numbers = Vec::with_capacity(self.count());
        self.collect_numbers(&mut numbers);
        numbers
    }

    fn collect_numbers(&self, out: &mut Vec<i64>) {
        match self {
            Expression::Number(n) => out.push(*n),
            Expression::Binary(node) => {
                node.left.collect_numbers(out);
                node.right.collect_numbers(out);
            }
        }
    }

    /// Count leaves by walking the tree rather than reading the cached count
    #[cfg(test)]
    pub(crate) fn leaves(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::Binary(node) => node.left.leaves() + node.right.leaves(),
        }
    }

    /// Render as `<expression> = <value>`
    pub fn to_string_with_value(&self) -> String {
        format!("{} = {}", self, self.value())
    }
}
