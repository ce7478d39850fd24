use crate::expression::{Expression, Operator};

/// An operator bound to a left operand that already passed the operator's
/// left-hand guard.
#[derive(Debug, Clone)]
pub struct Combiner {
    operator: Operator,
    left: Expression,
}

impl Combiner {
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Combine with `right`, or `None` when the pair is pruned.
    ///
    /// Pruning rules:
    /// - add: never pruned
    /// - subtract: right must be smaller than left and not exactly half of it
    /// - multiply: right must not be 1
    /// - divide: right must divide left exactly and not be its square root
    pub fn combine(&self, right: &Expression) -> Option<Expression> {
        let lval = self.left.value();
        let rval = right.value();

        let allowed = match self.operator {
            Operator::Add => true,
            Operator::Subtract => rval < lval && rval.checked_mul(2) != Some(lval),
            Operator::Multiply => rval != 1,
            Operator::Divide => {
                rval != 0
                    && lval.checked_rem(rval) == Some(0)
                    && rval.checked_mul(rval) != Some(lval)
            }
        };

        if !allowed {
            return None;
        }
        Expression::binary(self.left.clone(), self.operator, right.clone())
    }
}

impl Operator {
    /// Bind this operator to `left`, or `None` when no right operand could
    /// make it worthwhile.
    ///
    /// Subtraction needs a left value of at least 3; multiplication and
    /// division are skipped for a left value of 1.
    pub fn combiner(self, left: &Expression) -> Option<Combiner> {
        let lval = left.value();
        let applicable = match self {
            Operator::Add => true,
            Operator::Subtract => lval >= 3,
            Operator::Multiply | Operator::Divide => lval != 1,
        };

        applicable.then(|| Combiner {
            operator: self,
            left: left.clone(),
        })
    }
}

/// Combiners applicable to `left`, in operator order
pub fn combiners_using(left: &Expression) -> impl Iterator<Item = Combiner> + Send + use<> {
    let left = left.clone();
    Operator::ALL
        .into_iter()
        .filter_map(move |operator| operator.combiner(&left))
}
