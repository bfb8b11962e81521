//! Recency-biased windows over a sequence.

use std::ops::Range;

/// Number of records shown by each chart.
pub const DEFAULT_WINDOW_SIZE: usize = 30;

/// Index range `[max(0, frame - size + 1), frame + 1)`.
pub fn window_range(frame: usize, size: usize) -> Range<usize> {
    let end = frame + 1;
    let start = end.saturating_sub(size);
    start..end
}

/// Contiguous slice of at most `size` items ending at `frame`.
///
/// A `frame` past the end of `items` is clamped to the last element, so the
/// result is never out of bounds. An empty `items` gives an empty slice.
pub fn window<T>(items: &[T], frame: usize, size: usize) -> &[T] {
    if items.is_empty() {
        return &items[..0];
    }
    let range = window_range(frame.min(items.len() - 1), size);
    &items[range]
}
