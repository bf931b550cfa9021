//! Reading and checking caller input at the boundary

mod errors;
mod parse;
mod validation;

pub use errors::InputError;
pub use parse::{parse_number_sequence, parse_target};
pub use validation::validate_numbers;
