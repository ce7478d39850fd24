use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Above this many source numbers the search space becomes impractically large.
const LARGE_INPUT_WARNING: usize = 7;

/// # Errors
///
/// Returns an error if the list is empty or contains a number that is not
/// strictly positive.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating source numbers: {:?}", numbers);

    if numbers.is_empty() {
        warn!("Source number list is empty");
        return Err(UtilsError::EmptyNumbers);
    }

    if let Some(&bad) = numbers.iter().find(|&&n| n <= 0) {
        warn!("Source numbers contain a non-positive value: {}", bad);
        return Err(UtilsError::NonPositiveNumber(bad));
    }

    if numbers.len() > LARGE_INPUT_WARNING {
        warn!(
            "{} source numbers given; the search grows factorially and may take a long time",
            numbers.len()
        );
    }

    debug!("Source number validation successful");
    Ok(())
}
