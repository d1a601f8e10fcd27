//! Example: longest run with an exact target sum.
//!
//! Run with:
//! `cargo run --example longest_target`

use target_window::{longest_prefix_sum, longest_window, TargetEngine};

fn main() {
    let positive = [5, 1, 2, 3, 5];
    match longest_window(&positive, 8) {
        Ok(span) => println!(
            "windowed   {:?} target 8 -> {:?} {:?}",
            positive,
            span.as_range(),
            span.slice(&positive)
        ),
        Err(err) => eprintln!("windowed search failed: {err}"),
    }

    let signed = [1, -1, 5, -2, 3];
    let span = longest_prefix_sum(&signed, 3);
    println!(
        "prefix_sum {:?} target 3 -> {:?} {:?}",
        signed,
        span.as_range(),
        span.slice(&signed)
    );

    // The sliding window refuses signed input instead of guessing.
    if let Err(err) = longest_window(&signed, 3) {
        println!("windowed   {signed:?} -> error: {err}");
    }

    let engine = TargetEngine::new(&signed);
    println!("engine picked '{}'", engine.strategy().name());
    for target in [3, 5, 7, 100] {
        println!("  target {target:>3} -> {:?}", engine.run_slice(target));
    }
}
