use std::collections::HashSet;

use proptest::prelude::*;
use target_window::variants::{
    count_runs_with_sum, longest_at_most_k_distinct, longest_unique_run, max_sum_window,
};
use target_window::Span;

fn distinct_count(items: &[u8]) -> usize {
    items.iter().collect::<HashSet<_>>().len()
}

/// Longest run satisfying `ok`, earliest start on ties.
fn brute_longest(items: &[u8], ok: impl Fn(&[u8]) -> bool) -> Span {
    let mut best = Span::EMPTY;
    for start in 0..items.len() {
        for end in start + 1..=items.len() {
            let candidate = Span::new(start, end);
            if ok(&items[start..end]) && candidate.len() > best.len() {
                best = candidate;
            }
        }
    }
    best
}

proptest! {
    #[test]
    fn unique_run_matches_brute_force(text in "[abcd]{0,24}") {
        let items = text.as_bytes();
        let expected = brute_longest(items, |run| distinct_count(run) == run.len());
        prop_assert_eq!(longest_unique_run(items), expected);
    }

    #[test]
    fn at_most_k_matches_brute_force(text in "[abcde]{0,24}", k in 0usize..6) {
        let items = text.as_bytes();
        let expected = brute_longest(items, |run| distinct_count(run) <= k);
        prop_assert_eq!(longest_at_most_k_distinct(items, k), expected);
    }

    #[test]
    fn fixed_window_matches_brute_force(
        data in prop::collection::vec(-20i64..20, 1usize..30),
        width in 1usize..8
    ) {
        let found = max_sum_window(&data, width).unwrap();
        if width > data.len() {
            prop_assert!(found.is_none());
        } else {
            let sums: Vec<i128> = data
                .windows(width)
                .map(|w| w.iter().map(|&v| i128::from(v)).sum())
                .collect();
            let best_sum = *sums.iter().max().unwrap();
            let best_start = sums.iter().position(|&s| s == best_sum).unwrap();
            let found = found.unwrap();
            prop_assert_eq!(found.sum, best_sum);
            prop_assert_eq!(found.span, Span::new(best_start, best_start + width));
        }
    }

    #[test]
    fn run_count_matches_brute_force(
        data in prop::collection::vec(0i64..4, 0usize..30),
        goal in -1i64..8
    ) {
        let mut expected = 0u64;
        for start in 0..data.len() {
            let mut sum = 0i64;
            for &v in &data[start..] {
                sum += v;
                if sum == goal {
                    expected += 1;
                }
            }
        }
        prop_assert_eq!(count_runs_with_sum(&data, goal), Ok(expected));
    }
}
