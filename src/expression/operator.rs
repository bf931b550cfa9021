use std::fmt;

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::expression::errors::ExpressionError;
use crate::expression::value::Value;

/// One of the four arithmetic operators that can sit between two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Divide,
    Multiply,
}

impl Operator {
    /// Every operator, in the fixed order used for enumeration: `+ - / *`
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Divide,
        Operator::Multiply,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Divide => '/',
            Operator::Multiply => '*',
        }
    }

    /// Binding strength: `*` and `/` bind tighter than `+` and `-`
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Divide | Operator::Multiply => 2,
        }
    }

    /// Position of this operator within [`Operator::ALL`]
    pub fn index(self) -> usize {
        match self {
            Operator::Add => 0,
            Operator::Subtract => 1,
            Operator::Divide => 2,
            Operator::Multiply => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Operator> {
        Self::ALL.get(index).copied()
    }

    /// # Errors
    ///
    /// Returns `DivisionByZero` for `/` with a zero divisor and `Overflow`
    /// when the exact result does not fit.
    pub fn apply(self, left: &Value, right: &Value) -> Result<Value, ExpressionError> {
        let value = match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => {
                if right.is_zero() {
                    return Err(ExpressionError::DivisionByZero);
                }
                left.checked_div(right)
            }
        };

        value.ok_or(ExpressionError::Overflow)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = ExpressionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '/' => Ok(Operator::Divide),
            '*' => Ok(Operator::Multiply),
            other => Err(ExpressionError::UnknownOperator(other)),
        }
    }
}
