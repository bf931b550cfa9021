use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

impl Expression {
    /// Interleave `numbers` with `operators` without reordering or dropping anything
    ///
    /// # Errors
    ///
    /// Returns `OperatorCountMismatch` unless there is exactly one operator
    /// for every gap between consecutive numbers. An empty `numbers` slice is
    /// always a mismatch.
    pub fn build(numbers: &[i64], operators: &[Operator]) -> Result<Self, ExpressionError> {
        if numbers.is_empty() || operators.len() != numbers.len() - 1 {
            debug!(
                "Rejecting build with {} numbers and {} operators",
                numbers.len(),
                operators.len()
            );
            return Err(ExpressionError::OperatorCountMismatch {
                numbers: numbers.len(),
                operators: operators.len(),
            });
        }

        Ok(Self {
            numbers: numbers.to_vec(),
            operators: operators.to_vec(),
        })
    }
}
