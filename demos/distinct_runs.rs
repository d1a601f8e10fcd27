//! Example: windows bounded by distinct characters.
//!
//! Run with:
//! `cargo run --example distinct_runs`

use target_window::variants::{longest_at_most_k_distinct, longest_unique_run};

fn main() {
    for text in ["abcabcbb", "bbbbb", "pwwkew", "dvdf"] {
        let chars: Vec<char> = text.chars().collect();
        let span = longest_unique_run(&chars);
        let run: String = span.slice(&chars).iter().collect();
        println!("no repeats    {text:>10} -> {run:?} (len {})", span.len());
    }

    for (text, k) in [("eceba", 2), ("abaccc", 2), ("aa", 1), ("abc", 5)] {
        let chars: Vec<char> = text.chars().collect();
        let span = longest_at_most_k_distinct(&chars, k);
        let run: String = span.slice(&chars).iter().collect();
        println!("<= {k} distinct {text:>10} -> {run:?} (len {})", span.len());
    }
}
