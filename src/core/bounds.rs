//! Terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{MAX_MARKERS, MIN_MARKER_CAP};

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Marker cap for the current terminal: the full 20 markers when they fit,
/// otherwise whatever the width allows (one column spare), floored at
/// `MIN_MARKER_CAP`.
#[inline]
#[must_use]
pub fn marker_cap(w: Width) -> usize {
    std::cmp::min(MAX_MARKERS, (w.0 as usize).saturating_sub(1)).max(MIN_MARKER_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminals_keep_the_full_cap() {
        assert_eq!(marker_cap(Width(80)), MAX_MARKERS);
        assert_eq!(marker_cap(Width(21)), MAX_MARKERS);
    }

    #[test]
    fn narrow_terminals_shrink_the_cap() {
        assert_eq!(marker_cap(Width(15)), 14);
        assert_eq!(marker_cap(Width(2)), MIN_MARKER_CAP);
        assert_eq!(marker_cap(Width(0)), MIN_MARKER_CAP);
    }
}
