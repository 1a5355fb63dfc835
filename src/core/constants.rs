//! A collection of constants.

/// Value magnitude represented by a single marker character.
pub const UNITS_PER_MARKER: f64 = 5.0;
/// Bars are capped at 20 markers (values of 100 and above all look alike).
pub const MAX_MARKERS: usize = 20;
/// Default bar character.
pub const DEFAULT_MARKER: char = '*';

/// Bars never shrink below 4 markers even on absurdly narrow terminals.
pub const MIN_MARKER_CAP: usize = 4;
