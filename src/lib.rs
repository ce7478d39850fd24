//! Countdown - A solver for the Countdown numbers game
//!
//! Given a target and a handful of source numbers, this library searches every
//! arithmetic expression built from `+ - * /` that uses each source number at
//! most once, and returns the one closest to the target.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, Priority};
pub use solver::{ExpressionSolver, SolverConfig, SolverError};
pub use utils::{UtilsError, validate_numbers};

/// Find the expression over `numbers` closest to `target`
///
/// This is a convenience function that runs a solver with the default
/// configuration: a tolerance of 10, chunks of 1000 expressions, and one
/// worker per available CPU.
///
/// # Arguments
///
/// * `target` - The value to reach
/// * `numbers` - Source numbers; each occurrence may be used at most once
///
/// # Returns
///
/// * `Ok(Some(Expression))` - The best expression within tolerance
/// * `Ok(None)` - If no expression comes within tolerance
/// * `Err(SolverError)` - If the input is invalid
///
/// # Errors
///
/// This function will return an error if:
/// * The list of source numbers is empty
/// * A source number is zero or negative
/// * The worker pool cannot be started
///
/// # Examples
///
/// ```
/// use countdown::solve;
///
/// match solve(28, &[4, 6, 1]) {
///     Ok(Some(expr)) => println!("{}", expr.to_string_with_value()),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(target: i64, numbers: &[i64]) -> Result<Option<Expression>, SolverError> {
    ExpressionSolver::default().solve(target, numbers)
}
