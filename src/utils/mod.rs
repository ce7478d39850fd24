//! Utils module split into submodules

mod chunks;
mod errors;
mod lists;
mod validation;

pub use chunks::{Chunked, ChunkedExt};
pub use errors::UtilsError;
pub use lists::{distinct, remove_first};
pub use validation::validate_numbers;
