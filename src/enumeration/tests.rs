use std::collections::HashSet;

use crate::enumeration::{Strategy, assignment_at, assignments, candidate_count};
use crate::expression::Operator;

fn render(assignment: &[Operator]) -> String {
    assignment.iter().map(|op| op.symbol()).collect()
}

#[test]
fn test_zero_gaps_yields_one_empty_assignment() {
    for strategy in [Strategy::Exhaustive, Strategy::Multiset] {
        let all: Vec<_> = assignments(strategy, 0).collect();
        assert_eq!(all, vec![Vec::<Operator>::new()]);
        assert_eq!(candidate_count(strategy, 0), Some(1));
    }
}

#[test]
fn test_exhaustive_single_gap_order() {
    let all: Vec<String> = assignments(Strategy::Exhaustive, 1)
        .map(|a| render(&a))
        .collect();
    assert_eq!(all, vec!["+", "-", "/", "*"]);
}

#[test]
fn test_exhaustive_two_gaps_is_lexicographic() {
    let all: Vec<String> = assignments(Strategy::Exhaustive, 2)
        .map(|a| render(&a))
        .collect();
    assert_eq!(all.len(), 16);
    assert_eq!(all.first().map(String::as_str), Some("++"));
    assert_eq!(all.get(1).map(String::as_str), Some("+-"));
    assert_eq!(all.get(4).map(String::as_str), Some("-+"));
    assert_eq!(all.last().map(String::as_str), Some("**"));
    // "*+" comes before "**" and is reachable, unlike under Multiset
    assert!(all.iter().any(|a| a == "*+"));
}

#[test]
fn test_exhaustive_covers_every_sequence_once() {
    for gaps in 0..=5 {
        let all: Vec<Vec<Operator>> = assignments(Strategy::Exhaustive, gaps).collect();
        let unique: HashSet<_> = all.iter().cloned().collect();
        assert_eq!(Some(all.len() as u64), candidate_count(Strategy::Exhaustive, gaps));
        assert_eq!(unique.len(), all.len());
        assert!(all.iter().all(|a| a.len() == gaps));
    }
}

#[test]
fn test_multiset_matches_combinations_with_replacement() {
    let all: Vec<String> = assignments(Strategy::Multiset, 2)
        .map(|a| render(&a))
        .collect();
    assert_eq!(
        all,
        vec!["++", "+-", "+/", "+*", "--", "-/", "-*", "//", "/*", "**"]
    );
}

#[test]
fn test_multiset_is_non_decreasing() {
    for gaps in 0..=6 {
        let all: Vec<Vec<Operator>> = assignments(Strategy::Multiset, gaps).collect();
        assert_eq!(Some(all.len() as u64), candidate_count(Strategy::Multiset, gaps));
        for assignment in &all {
            assert_eq!(assignment.len(), gaps);
            assert!(assignment.windows(2).all(|w| match w {
                [a, b] => a.index() <= b.index(),
                _ => false,
            }));
        }
    }
}

#[test]
fn test_candidate_counts() {
    assert_eq!(candidate_count(Strategy::Exhaustive, 3), Some(64));
    assert_eq!(candidate_count(Strategy::Multiset, 3), Some(20));
    assert_eq!(candidate_count(Strategy::Multiset, 9), Some(220));
    assert_eq!(candidate_count(Strategy::Exhaustive, 32), None);
    assert_eq!(candidate_count(Strategy::Multiset, usize::MAX), None);
}

#[test]
fn test_assignment_at_matches_iteration_order() {
    for strategy in [Strategy::Exhaustive, Strategy::Multiset] {
        for gaps in 0..=5 {
            for (rank, expected) in assignments(strategy, gaps).enumerate() {
                assert_eq!(
                    assignment_at(strategy, gaps, rank as u64),
                    Some(expected),
                    "{:?} gaps={} rank={}",
                    strategy,
                    gaps,
                    rank
                );
            }
        }
    }
}

#[test]
fn test_assignment_at_past_the_end() {
    assert_eq!(assignment_at(Strategy::Exhaustive, 2, 16), None);
    assert_eq!(assignment_at(Strategy::Multiset, 2, 10), None);
    assert_eq!(assignment_at(Strategy::Multiset, 0, 1), None);
    assert_eq!(assignment_at(Strategy::Exhaustive, 0, 0), Some(Vec::new()));
}

#[test]
fn test_assignment_at_deep_rank_without_enumerating() {
    // Last exhaustive assignment for 30 gaps is all multiplications
    let last = candidate_count(Strategy::Exhaustive, 30).map(|count| count - 1);
    assert_eq!(
        last.and_then(|rank| assignment_at(Strategy::Exhaustive, 30, rank)),
        Some(vec![Operator::Multiply; 30])
    );
    assert_eq!(
        assignment_at(Strategy::Multiset, 30, 0),
        Some(vec![Operator::Add; 30])
    );
}
