/// Errors reported by the searches in this crate.
///
/// A search that simply finds nothing is not an error: it returns
/// [`Span::EMPTY`](crate::Span::EMPTY). Errors are reserved for inputs that
/// break a function's documented contract.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// A non-negative-only search met a negative element.
    #[error("precondition violated: element {value} at index {index} is negative")]
    NegativeElement { index: usize, value: i64 },
    /// A fixed-width window was requested with width 0.
    #[error("invalid input: window width must be positive")]
    ZeroWidth,
}

impl WindowError {
    /// Creates a `WindowError::NegativeElement`.
    pub fn negative_element(index: usize, value: i64) -> Self {
        Self::NegativeElement { index, value }
    }
}
