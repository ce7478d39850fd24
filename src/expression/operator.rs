use std::fmt;

/// Precedence level used to decide parenthesisation.
///
/// Ordered from loosest to tightest binding, so `Low < High < Atomic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    High,
    Atomic,
}

/// The four arithmetic operators of the numbers game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in the order their combiners are tried.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn priority(self) -> Priority {
        match self {
            Operator::Add | Operator::Subtract => Priority::Low,
            Operator::Multiply | Operator::Divide => Priority::High,
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Multiply)
    }

    /// Apply the operator to two integers.
    ///
    /// Returns `None` on overflow, division by zero, or a division that
    /// leaves a remainder.
    pub fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => {
                if right == 0 || left.checked_rem(right) != Some(0) {
                    None
                } else {
                    left.checked_div(right)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
