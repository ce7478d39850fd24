//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;
mod operator;

pub use ast::{BinaryExpression, Expression};
pub use errors::ExpressionError;
pub use operator::{Operator, Priority};

#[cfg(test)]
mod tests;
