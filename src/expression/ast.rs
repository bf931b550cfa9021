use crate::expression::operator::Operator;

/// A flat infix expression: operands in input order with one operator per gap
///
/// Always holds at least one number and exactly `numbers.len() - 1` operators;
/// [`Expression::build`] is the only way to construct one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    pub(crate) numbers: Vec<i64>,
    pub(crate) operators: Vec<Operator>,
}

impl Expression {
    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Number of operands in the expression
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Always false, an expression has at least one operand
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}
