//! Operator assignments to try, one operator per gap between operands

mod core;
mod state;
mod types;

pub use self::core::{AssignmentIterator, assignment_at, assignments, candidate_count};
pub use types::Strategy;

#[cfg(test)]
mod tests;
