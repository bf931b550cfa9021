use num_rational::Ratio;

/// Exact result of evaluating an expression
///
/// Products of two `i64` operands always fit, and true division stays exact,
/// so comparing against an integer target is plain equality.
pub type Value = Ratio<i128>;

/// Lift an operand into [`Value`]
pub fn integer(n: i64) -> Value {
    Value::from_integer(i128::from(n))
}
