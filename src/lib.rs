//! Opguess - A library for guessing the arithmetic operators between numbers
//!
//! Given an ordered sequence of integers and a target, this library searches
//! for `+`, `-`, `/`, `*` operators to place between consecutive numbers so
//! that the resulting expression, read with the usual precedence rules,
//! evaluates to the target.

pub mod enumeration;
pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use enumeration::Strategy;
pub use expression::{Expression, ExpressionError, Operator, Value};
pub use solver::{ExpressionSolver, SearchResult, SolverConfig, SolverError};
pub use utils::{InputError, parse_number_sequence, parse_target, validate_numbers};

/// Find operators that make `numbers` evaluate to `target`
///
/// This is a convenience function that validates the input, creates a
/// default solver and returns the first match in enumeration order.
///
/// # Arguments
///
/// * `numbers` - The operands, in the order they must appear
/// * `target` - The value the expression must equal
///
/// # Returns
///
/// * `Ok(SearchResult::Found(Expression))` - If a matching expression is found
/// * `Ok(SearchResult::NotFound)` - If no operator assignment matches
/// * `Err(SolverError)` - If the input is invalid or the search failed
///
/// # Errors
///
/// This function will return an error if:
/// * The number sequence is empty
/// * There's an internal error while building a candidate expression
///
/// # Examples
///
/// ```
/// use opguess::{SearchResult, find_expression};
///
/// match find_expression(&[3, 4, 5], 23) {
///     Ok(SearchResult::Found(expr)) => assert_eq!(expr.to_string(), "3+4*5"),
///     Ok(SearchResult::NotFound) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_expression(numbers: &[i64], target: i64) -> Result<SearchResult, SolverError> {
    validate_numbers(numbers)?;

    let solver = ExpressionSolver::default();
    solver.solve(numbers, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_expression_rejects_empty_input() {
        assert_eq!(
            find_expression(&[], 3),
            Err(SolverError::InvalidInput(InputError::EmptySequence))
        );
    }

    #[test]
    fn test_find_expression_from_text_input() {
        let numbers = parse_number_sequence("3, 4, 5");
        let target = parse_target("23");
        assert!(numbers.is_ok() && target.is_ok());
        if let (Ok(numbers), Ok(target)) = (numbers, target) {
            let result = find_expression(&numbers, target);
            assert_eq!(
                result.map(|r| r.to_string()),
                Ok("3+4*5".to_string())
            );
        }
    }
}
