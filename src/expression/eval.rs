use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

impl Expression {
    /// Re-evaluate the tree bottom-up, ignoring cached values.
    ///
    /// # Errors
    ///
    /// Returns an error when a node would:
    /// - divide by zero
    /// - divide with a remainder
    /// - overflow `i64`
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n),
            Expression::Binary(node) => {
                let left = node.left().evaluate()?;
                let right = node.right().evaluate()?;
                apply_checked(node.operator(), left, right)
            }
        }
    }

    /// Re-evaluate the tree and check it against the cached value.
    ///
    /// # Errors
    ///
    /// Returns an error if re-evaluation fails or yields a different value.
    pub fn verify(&self) -> Result<i64, ExpressionError> {
        let evaluated = self.evaluate()?;
        let cached = self.value();
        if evaluated != cached {
            debug!("Cached value {} disagrees with {}", cached, evaluated);
            return Err(ExpressionError::ValueMismatch { cached, evaluated });
        }
        Ok(evaluated)
    }
}

fn apply_checked(operator: Operator, left: i64, right: i64) -> Result<i64, ExpressionError> {
    if operator == Operator::Divide {
        if right == 0 {
            debug!("Division by zero attempted");
            return Err(ExpressionError::DivisionByZero);
        }
        match left.checked_rem(right) {
            Some(0) => {}
            Some(_) => {
                debug!("Inexact division: {} / {}", left, right);
                return Err(ExpressionError::InexactDivision {
                    dividend: left,
                    divisor: right,
                });
            }
            None => return Err(ExpressionError::Overflow),
        }
    }
    operator.apply(left, right).ok_or(ExpressionError::Overflow)
}
