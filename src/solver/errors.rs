use thiserror::Error;

use crate::expression::ExpressionError;
use crate::utils::InputError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("Internal invariant violated: {0}")]
    Internal(#[from] ExpressionError),
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
    #[error("Search space for {gaps} operator slots exceeds the limit of {limit} candidates")]
    SearchSpaceTooLarge { gaps: usize, limit: u64 },
    #[error("Search cancelled")]
    Cancelled,
}
