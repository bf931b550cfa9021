use log::debug;

use crate::enumeration::state::AssignmentState;
use crate::enumeration::types::Strategy;
use crate::expression::Operator;

const OPERATOR_COUNT: usize = Operator::ALL.len();

/// Lazily yields operator assignments of a fixed length in enumeration order
#[derive(Debug, Clone)]
pub struct AssignmentIterator {
    strategy: Strategy,
    state: AssignmentState,
}

impl AssignmentIterator {
    pub fn new(strategy: Strategy, gaps: usize) -> Self {
        debug!("Enumerating {:?} assignments for {} gaps", strategy, gaps);
        Self {
            strategy,
            state: AssignmentState::new(gaps),
        }
    }

    fn current(&self) -> Vec<Operator> {
        self.state
            .indices
            .iter()
            .filter_map(|&i| Operator::from_index(i))
            .collect()
    }

    /// Step to the next full Cartesian assignment, carrying right to left
    fn advance_exhaustive(&mut self) {
        for index in self.state.indices.iter_mut().rev() {
            *index += 1;
            if *index < OPERATOR_COUNT {
                return;
            }
            *index = 0;
        }
        self.state.mark_exhausted();
    }

    /// Step to the next non-decreasing assignment: bump the rightmost index
    /// that can still grow and level everything after it up to match
    fn advance_multiset(&mut self) {
        let last = OPERATOR_COUNT - 1;
        match self.state.indices.iter().rposition(|&i| i != last) {
            Some(pos) => {
                let (_, tail) = self.state.indices.split_at_mut(pos);
                if let Some(&bumped) = tail.first() {
                    tail.fill(bumped + 1);
                }
            }
            None => self.state.mark_exhausted(),
        }
    }
}

impl Iterator for AssignmentIterator {
    type Item = Vec<Operator>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.exhausted {
            return None;
        }

        let assignment = self.current();
        match self.strategy {
            Strategy::Exhaustive => self.advance_exhaustive(),
            Strategy::Multiset => self.advance_multiset(),
        }
        Some(assignment)
    }
}

/// All assignments for `gaps` operator slots under `strategy`
///
/// Zero gaps yields exactly one empty assignment.
pub fn assignments(strategy: Strategy, gaps: usize) -> AssignmentIterator {
    AssignmentIterator::new(strategy, gaps)
}

/// Number of assignments [`assignments`] will yield, or `None` if it does not fit in a `u64`
pub fn candidate_count(strategy: Strategy, gaps: usize) -> Option<u64> {
    match strategy {
        Strategy::Exhaustive => (OPERATOR_COUNT as u64).checked_pow(u32::try_from(gaps).ok()?),
        Strategy::Multiset => multiset_count(OPERATOR_COUNT, gaps),
    }
}

/// Non-decreasing sequences of length `len` over `symbols` symbols: C(len + symbols - 1, len)
fn multiset_count(symbols: usize, len: usize) -> Option<u64> {
    let len = u64::try_from(len).ok()?;
    let mut count: u64 = 1;
    // C(len + k, k) built up one factor at a time; each step stays an integer
    for k in 1..u64::try_from(symbols).ok()? {
        count = count.checked_mul(len.checked_add(k)?)? / k;
    }
    Some(count)
}

/// The assignment at position `rank` of [`assignments`], without walking the ones before it
///
/// Returns `None` when `rank` is past the end.
pub fn assignment_at(strategy: Strategy, gaps: usize, rank: u64) -> Option<Vec<Operator>> {
    if rank >= candidate_count(strategy, gaps)? {
        return None;
    }

    match strategy {
        Strategy::Exhaustive => (0..gaps)
            .rev()
            .map(|position| {
                let place = (OPERATOR_COUNT as u64).checked_pow(u32::try_from(position).ok()?)?;
                let digit = rank / place % OPERATOR_COUNT as u64;
                Operator::from_index(usize::try_from(digit).ok()?)
            })
            .collect(),
        Strategy::Multiset => {
            let mut rank = rank;
            let mut floor = 0;
            let mut assignment = Vec::with_capacity(gaps);
            for position in 0..gaps {
                let remaining = gaps - position - 1;
                // Skip whole blocks of assignments that start with a smaller operator
                let mut index = floor;
                loop {
                    if index >= OPERATOR_COUNT {
                        return None;
                    }
                    let block = multiset_count(OPERATOR_COUNT - index, remaining)?;
                    if rank < block {
                        break;
                    }
                    rank -= block;
                    index += 1;
                }
                assignment.push(Operator::from_index(index)?);
                floor = index;
            }
            Some(assignment)
        }
    }
}
