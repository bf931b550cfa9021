use thiserror::Error;

/// Errors raised while reading caller input, before any search starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Number sequence cannot be empty")]
    EmptySequence,
    #[error("Not an integer: '{0}'")]
    InvalidNumber(String),
    #[error("Target must be an integer: '{0}'")]
    InvalidTarget(String),
}
