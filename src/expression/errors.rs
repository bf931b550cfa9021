use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Result does not fit in exact 128-bit rational arithmetic")]
    Overflow,
    #[error("{operators} operators cannot join {numbers} numbers")]
    OperatorCountMismatch { numbers: usize, operators: usize },
    #[error("Unknown operator '{0}'")]
    UnknownOperator(char),
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },
}
