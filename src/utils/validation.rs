use log::{debug, warn};

use crate::utils::errors::InputError;

/// # Errors
///
/// Returns an error if the sequence has no numbers.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), InputError> {
    debug!("Validating number sequence: {:?}", numbers);

    if numbers.is_empty() {
        warn!("Number sequence is empty");
        return Err(InputError::EmptySequence);
    }

    Ok(())
}
