pub mod comparator;
pub mod config;
mod core;
mod errors;
pub mod reducer;

pub use self::core::ExpressionSolver;
pub use comparator::{better, compare, difference, within_tolerance};
pub use config::SolverConfig;
pub use errors::SolverError;
pub use reducer::parallel_reduce;
