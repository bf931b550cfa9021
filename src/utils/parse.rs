use log::{debug, warn};

use crate::utils::errors::InputError;
use crate::utils::validation::validate_numbers;

/// Parse a comma separated list such as `"3, 4, 5"`
///
/// # Errors
///
/// Returns an error if any element is not an integer or the list is blank.
pub fn parse_number_sequence(input: &str) -> Result<Vec<i64>, InputError> {
    debug!("Parsing number sequence: '{}'", input);

    if input.trim().is_empty() {
        warn!("Number sequence is blank");
        return Err(InputError::EmptySequence);
    }

    let numbers = input
        .split(',')
        .map(str::trim)
        .map(|item| {
            item.parse::<i64>().map_err(|_| {
                warn!("Rejecting non-integer element '{}'", item);
                InputError::InvalidNumber(item.to_string())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_numbers(&numbers)?;
    debug!("Parsed {} numbers", numbers.len());
    Ok(numbers)
}

/// # Errors
///
/// Returns an error if the input is not an integer.
pub fn parse_target(input: &str) -> Result<i64, InputError> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|_| {
        warn!("Rejecting target '{}'", trimmed);
        InputError::InvalidTarget(trimmed.to_string())
    })
}
