//! Windows bounded by how many distinct items they may hold.
//!
//! Both searches keep a window `[left, right]` that satisfies its bound after
//! every step, record strictly longer windows only (so the earliest of
//! several equal-length windows wins), and run in O(n) expected time.

use std::collections::HashMap;
use std::hash::Hash;

use crate::span::Span;

/// Longest run in which no item repeats.
///
/// ```
/// use target_window::variants::longest_unique_run;
///
/// let text: Vec<char> = "abcabcbb".chars().collect();
/// let best = longest_unique_run(&text);
/// assert_eq!(best.len(), 3);
/// assert_eq!(best.start, 0);
/// ```
pub fn longest_unique_run<T: Eq + Hash>(items: &[T]) -> Span {
    let mut last_seen: HashMap<&T, usize> = HashMap::new();
    let mut left = 0usize;
    let mut best = Span::EMPTY;

    for (right, item) in items.iter().enumerate() {
        // Only a repeat inside the current window moves the left edge.
        if let Some(&prev) = last_seen.get(item) {
            if prev >= left {
                left = prev + 1;
            }
        }
        last_seen.insert(item, right);

        let candidate = Span::new(left, right + 1);
        if candidate.len() > best.len() {
            best = candidate;
        }
    }

    best
}

/// Longest run holding at most `k` distinct items.
///
/// `k == 0` admits no non-empty run and returns [`Span::EMPTY`].
pub fn longest_at_most_k_distinct<T: Eq + Hash>(items: &[T], k: usize) -> Span {
    if k == 0 {
        return Span::EMPTY;
    }

    let mut counts: HashMap<&T, usize> = HashMap::new();
    let mut left = 0usize;
    let mut best = Span::EMPTY;

    for (right, item) in items.iter().enumerate() {
        *counts.entry(item).or_insert(0) += 1;

        while counts.len() > k {
            let outgoing = &items[left];
            if let Some(count) = counts.get_mut(outgoing) {
                *count -= 1;
                if *count == 0 {
                    counts.remove(outgoing);
                }
            }
            left += 1;
        }

        let candidate = Span::new(left, right + 1);
        if candidate.len() > best.len() {
            best = candidate;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn unique_run_lengths() {
        let cases = [
            ("abcabcbb", 3),
            ("bbbbb", 1),
            ("pwwkew", 3),
            ("", 0),
            ("au", 2),
            ("dvdf", 3),
        ];
        for (text, expected) in cases {
            assert_eq!(longest_unique_run(&chars(text)).len(), expected, "text={text:?}");
        }
    }

    #[test]
    fn unique_run_keeps_earliest() {
        assert_eq!(longest_unique_run(&chars("pwwkew")), Span::new(2, 5));
        assert_eq!(longest_unique_run(&[1, 2, 1, 2]), Span::new(0, 2));
    }

    #[test]
    fn stale_occurrence_outside_window_is_ignored() {
        // 'a' at 0 is behind the window when it repeats at 4.
        assert_eq!(longest_unique_run(&chars("abbca")), Span::new(2, 5));
    }

    #[test]
    fn at_most_k_distinct_lengths() {
        let cases = [
            ("eceba", 2, 3),
            ("aa", 1, 2),
            ("a", 0, 0),
            ("", 2, 0),
            ("abaccc", 2, 4),
            ("abc", 5, 3),
        ];
        for (text, k, expected) in cases {
            assert_eq!(
                longest_at_most_k_distinct(&chars(text), k).len(),
                expected,
                "text={text:?} k={k}"
            );
        }
    }

    #[test]
    fn at_most_k_distinct_span_positions() {
        assert_eq!(longest_at_most_k_distinct(&chars("eceba"), 2), Span::new(0, 3));
        assert_eq!(longest_at_most_k_distinct(&chars("abaccc"), 2), Span::new(2, 6));
    }
}
