//! Example: fixed-width maximum and exact-sum run counting.
//!
//! Run with:
//! `cargo run --example fixed_window`

use target_window::variants::{count_runs_with_sum, max_sum_window};

fn main() {
    let data = [1, 4, 2, 10, 23, 3, 1, 0, 20];
    match max_sum_window(&data, 4) {
        Ok(Some(best)) => println!(
            "max width-4 window of {data:?}: {:?} sum {}",
            best.span.slice(&data),
            best.sum
        ),
        Ok(None) => println!("sequence shorter than the window"),
        Err(err) => eprintln!("{err}"),
    }

    let bits = [1, 0, 1, 0, 1];
    match count_runs_with_sum(&bits, 2) {
        Ok(count) => println!("runs of {bits:?} summing to 2: {count}"),
        Err(err) => eprintln!("{err}"),
    }
}
