pub mod chart;

pub use chart::{chart_lines, marker_count, render};
