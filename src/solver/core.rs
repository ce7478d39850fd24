use log::{debug, info};

use crate::expression::Expression;
use crate::iterator::ExpressionIterator;
use crate::solver::comparator::{better, within_tolerance};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::reducer::parallel_reduce;
use crate::utils::validate_numbers;

/// Main solver for finding the expression closest to a target value
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the best expression over `numbers` for `target`.
    ///
    /// Candidates within the configured tolerance are ranked by distance to
    /// the target, then by how many numbers they use, then by how many
    /// parentheses they need.
    ///
    /// # Errors
    ///
    /// Returns an error if `numbers` is empty or holds a non-positive value,
    /// if the configuration is invalid, or if the worker pool cannot start.
    /// Finding nothing within tolerance is `Ok(None)`.
    pub fn solve(&self, target: i64, numbers: &[i64]) -> Result<Option<Expression>, SolverError> {
        validate_numbers(numbers)?;
        self.config.validate()?;

        info!(
            "Searching for target {} using source numbers {:?}",
            target, numbers
        );

        let tolerance = self.config.tolerance;
        let candidates = ExpressionIterator::new(numbers)
            .filter(move |expr| within_tolerance(target, tolerance, expr));

        let best = parallel_reduce(
            candidates,
            move |a, b| better(target, a, b),
            self.config.chunk_size,
            self.config.concurrency,
        )?;

        match &best {
            Some(expr) => {
                expr.verify()?;
                debug!(
                    "Winner uses {} numbers {:?} with {} parentheses",
                    expr.count(),
                    expr.numbers(),
                    expr.parentheses()
                );
                info!("Best expression: {}", expr.to_string_with_value());
            }
            None => info!("No expression within {} of {}", tolerance, target),
        }

        Ok(best)
    }
}
