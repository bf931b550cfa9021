use crate::enumeration::Strategy;
use crate::solver::errors::SolverError;

/// Configuration for the operator search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Evaluate candidates on the rayon pool. The answer is the same as sequential.
    pub parallel: bool,
    /// Refuse searches with more candidates than this
    pub max_candidates: Option<u64>,
}

impl SolverConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: Option<u64>) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` for a candidate limit of zero, which would
    /// refuse every search with more than one number.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.max_candidates == Some(0) {
            return Err(SolverError::InvalidConfig(
                "max_candidates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
