use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;
use crate::expression::value::{Value, integer};

impl Expression {
    /// Evaluate exactly, with `*` and `/` binding tighter than `+` and `-`,
    /// left to right within each level. Division is true (rational) division.
    ///
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - An operation whose exact result overflows 128-bit rationals
    pub fn evaluate(&self) -> Result<Value, ExpressionError> {
        let mut operands = self.numbers.iter().map(|&n| integer(n));
        let Some(first) = operands.next() else {
            return Err(ExpressionError::OperatorCountMismatch {
                numbers: 0,
                operators: self.operators.len(),
            });
        };

        // First pass folds multiplicative runs into signed terms
        let mut terms: Vec<(Operator, Value)> = Vec::with_capacity(self.numbers.len());
        let mut lead = Operator::Add;
        let mut term = first;
        for (&op, value) in self.operators.iter().zip(operands) {
            match op {
                Operator::Multiply | Operator::Divide => term = op.apply(&term, &value)?,
                Operator::Add | Operator::Subtract => {
                    terms.push((lead, term));
                    lead = op;
                    term = value;
                }
            }
        }
        terms.push((lead, term));

        let result = terms
            .into_iter()
            .try_fold(integer(0), |acc, (op, term)| op.apply(&acc, &term));

        trace!("{} => {:?}", self, result);
        result
    }
}
