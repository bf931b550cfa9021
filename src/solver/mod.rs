mod config;
mod core;
mod errors;
mod result;

pub use config::SolverConfig;
pub use self::core::ExpressionSolver;
pub use errors::SolverError;
pub use result::SearchResult;
