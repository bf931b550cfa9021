use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use log::{debug, info, trace, warn};
use rayon::prelude::*;

use crate::enumeration::{assignment_at, assignments, candidate_count};
use crate::expression::{Expression, ExpressionError, Operator, Value, integer};
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::result::SearchResult;

/// Counters for one search, reported through the log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    /// Candidates built and evaluated
    pub candidates: u64,
    /// Candidates dropped because evaluation failed (zero divisor, overflow)
    pub skipped: u64,
}

/// What a single candidate turned out to be
enum Candidate {
    Match(Expression),
    Miss,
    Skipped,
}

fn is_cancelled(cancel: &Option<Arc<AtomicBool>>) -> bool {
    cancel
        .as_ref()
        .is_some_and(|flag| flag.load(Ordering::Relaxed))
}

/// Searches operator assignments for an expression that evaluates to a target
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the first expression, in enumeration order, that evaluates to `target`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the search space
    /// exceeds `max_candidates`, or the enumeration produced an assignment of
    /// the wrong length. No match is `Ok(SearchResult::NotFound)`.
    pub fn solve(&self, numbers: &[i64], target: i64) -> Result<SearchResult, SolverError> {
        self.solve_with_cancel(numbers, target, None)
    }

    /// Like [`ExpressionSolver::solve`], checking `cancel` before every candidate
    ///
    /// # Errors
    ///
    /// In addition to the errors of `solve`, returns `Cancelled` once the flag
    /// is observed set.
    pub fn solve_with_cancel(
        &self,
        numbers: &[i64],
        target: i64,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, SolverError> {
        self.config.validate()?;
        info!(
            "Searching {:?} operator assignments for {:?} that equal {}",
            self.config.strategy, numbers, target
        );

        let Some((&first, rest)) = numbers.split_first() else {
            warn!("Empty number sequence, nothing to search");
            return Ok(SearchResult::NotFound);
        };

        if rest.is_empty() {
            if is_cancelled(&cancel) {
                return Err(SolverError::Cancelled);
            }
            let lone = Expression::build(numbers, &[])?;
            return Ok(if first == target {
                info!("Single number already equals target: {}", lone);
                SearchResult::Found(lone)
            } else {
                info!("Single number {} does not equal {}", first, target);
                SearchResult::NotFound
            });
        }

        self.check_search_space(rest.len())?;

        let found = if self.config.parallel {
            self.search_parallel(numbers, target, cancel)?
        } else {
            self.search_sequential(numbers, target, cancel)?
        };

        match &found {
            Some(expr) => info!("Found matching expression: {}", expr),
            None => info!("No matching expression found"),
        }
        Ok(found.into())
    }

    /// Every expression that evaluates to `target`, in enumeration order
    ///
    /// # Errors
    ///
    /// Same as [`ExpressionSolver::solve`].
    pub fn find_all(&self, numbers: &[i64], target: i64) -> Result<Vec<Expression>, SolverError> {
        self.config.validate()?;
        if numbers.is_empty() {
            warn!("Empty number sequence, nothing to search");
            return Ok(Vec::new());
        }

        let gaps = numbers.len() - 1;
        self.check_search_space(gaps)?;

        let target = integer(target);
        let mut stats = SearchStats::default();
        let mut matches = Vec::new();
        for operators in assignments(self.config.strategy, gaps) {
            stats.candidates += 1;
            match self.check_candidate(numbers, &operators, &target)? {
                Candidate::Match(expr) => matches.push(expr),
                Candidate::Skipped => stats.skipped += 1,
                Candidate::Miss => {}
            }
        }

        info!(
            "Found {} matching expressions out of {} candidates ({} skipped)",
            matches.len(),
            stats.candidates,
            stats.skipped
        );
        Ok(matches)
    }

    fn check_search_space(&self, gaps: usize) -> Result<(), SolverError> {
        let count = candidate_count(self.config.strategy, gaps);
        debug!("{} operator slots give {:?} candidates", gaps, count);

        match (self.config.max_candidates, count) {
            (None, _) => Ok(()),
            (Some(limit), Some(count)) if count <= limit => Ok(()),
            (Some(limit), _) => {
                warn!("Refusing search over {} operator slots", gaps);
                Err(SolverError::SearchSpaceTooLarge { gaps, limit })
            }
        }
    }

    fn check_candidate(
        &self,
        numbers: &[i64],
        operators: &[Operator],
        target: &Value,
    ) -> Result<Candidate, SolverError> {
        let expr = Expression::build(numbers, operators)?;
        match expr.evaluate() {
            Ok(value) if value == *target => Ok(Candidate::Match(expr)),
            Ok(_) => Ok(Candidate::Miss),
            Err(err @ (ExpressionError::DivisionByZero | ExpressionError::Overflow)) => {
                trace!("Skipping {}: {}", expr, err);
                Ok(Candidate::Skipped)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn search_sequential(
        &self,
        numbers: &[i64],
        target: i64,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Option<Expression>, SolverError> {
        let gaps = numbers.len() - 1;
        let target = integer(target);
        let mut stats = SearchStats::default();

        for operators in assignments(self.config.strategy, gaps) {
            if is_cancelled(&cancel) {
                warn!("Search cancelled after {} candidates", stats.candidates);
                return Err(SolverError::Cancelled);
            }

            stats.candidates += 1;
            match self.check_candidate(numbers, &operators, &target)? {
                Candidate::Match(expr) => {
                    debug!("Match after {:?}", stats);
                    return Ok(Some(expr));
                }
                Candidate::Skipped => stats.skipped += 1,
                Candidate::Miss => {}
            }
        }

        debug!("Exhausted search: {:?}", stats);
        Ok(None)
    }

    /// Evaluates candidates on the rayon pool. Each worker decodes its own
    /// assignment from its rank, and `find_map_first` keeps the answer
    /// identical to the sequential search.
    fn search_parallel(
        &self,
        numbers: &[i64],
        target: i64,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Option<Expression>, SolverError> {
        let strategy = self.config.strategy;
        let gaps = numbers.len() - 1;
        let Some(count) = candidate_count(strategy, gaps) else {
            warn!("{} operator slots are too many to rank", gaps);
            return Err(SolverError::SearchSpaceTooLarge {
                gaps,
                limit: u64::MAX,
            });
        };
        let target = integer(target);
        let skipped = AtomicU64::new(0);

        let found = (0..count)
            .into_par_iter()
            .find_map_first(|rank| {
                if is_cancelled(&cancel) {
                    return Some(Err(SolverError::Cancelled));
                }
                // A rank below `count` always decodes; an empty assignment
                // surfaces as an operator-count mismatch
                let operators = assignment_at(strategy, gaps, rank).unwrap_or_default();
                match self.check_candidate(numbers, &operators, &target) {
                    Ok(Candidate::Match(expr)) => Some(Ok(expr)),
                    Ok(Candidate::Skipped) => {
                        skipped.fetch_add(1, Ordering::Relaxed);
                        None
                    }
                    Ok(Candidate::Miss) => None,
                    Err(err) => Some(Err(err)),
                }
            })
            .transpose()?;

        debug!(
            "Parallel search over {} candidates ({} skipped before stopping)",
            count,
            skipped.load(Ordering::Relaxed)
        );
        Ok(found)
    }
}
