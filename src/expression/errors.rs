use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Inexact division: {dividend} is not divisible by {divisor}")]
    InexactDivision { dividend: i64, divisor: i64 },
    #[error("Integer overflow while evaluating expression")]
    Overflow,
    #[error("Cached value {cached} disagrees with re-evaluated value {evaluated}")]
    ValueMismatch { cached: i64, evaluated: i64 },
}
