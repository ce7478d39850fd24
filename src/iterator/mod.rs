pub mod core;
pub mod generator;
pub mod permutations;

pub use self::core::{ExpressionIterator, ExpressionStream, expressions};
pub use generator::{Combiner, combiners_using};
pub use permutations::{Permutations, permutations};
