//! Flat arithmetic expressions: building, rendering, exact evaluation and reading them back

mod ast;
mod builder;
mod display;
mod errors;
mod eval;
mod operator;
mod parse;
mod value;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use operator::Operator;
pub use parse::evaluate_text;
pub use value::{Value, integer};
