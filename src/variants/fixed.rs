//! Maximum-sum window of a fixed width.

use crate::error::WindowError;
use crate::span::Span;

/// Best fixed-width window and its sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWindowMax {
    pub span: Span,
    pub sum: i128,
}

/// Window of exactly `width` elements with the largest sum.
///
/// Ties resolve to the earliest start. Returns `Ok(None)` when the sequence
/// is shorter than `width`, and [`WindowError::ZeroWidth`] for `width == 0`.
pub fn max_sum_window(
    sequence: &[i64],
    width: usize,
) -> Result<Option<FixedWindowMax>, WindowError> {
    if width == 0 {
        return Err(WindowError::ZeroWidth);
    }
    if sequence.len() < width {
        return Ok(None);
    }

    let mut running: i128 = sequence[..width].iter().map(|&v| i128::from(v)).sum();
    let mut best = FixedWindowMax {
        span: Span::new(0, width),
        sum: running,
    };

    for end in width..sequence.len() {
        running += i128::from(sequence[end]) - i128::from(sequence[end - width]);
        if running > best.sum {
            best = FixedWindowMax {
                span: Span::new(end + 1 - width, end + 1),
                sum: running,
            };
        }
    }

    Ok(Some(best))
}
