//! Numeric series to marker lines, one bar per value.

use std::io::Write;

use crate::core::{config::ChartConfig, error::ChartError};

/// Quantize one value to a bar length: `floor(v / unit)` clamped to
/// `0..=cap`.  Negative values would otherwise produce a negative repeat
/// count, hence the lower clamp.
#[inline]
#[must_use]
pub fn marker_count(value: f64, cfg: &ChartConfig) -> usize {
    let n = (value / cfg.unit).floor();
    if n <= 0.0 {
        0
    } else if n >= cfg.cap as f64 {
        cfg.cap
    } else {
        n as usize
    }
}

/// Lay out the full chart: framing first, then one bar per value in the
/// order given.
#[must_use]
pub fn chart_lines(values: &[f64], cfg: &ChartConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(values.len() + 3);
    lines.push(format!("Column: {}", cfg.title));
    lines.push(format!(
        "Legend: each '{}' represents {} units",
        cfg.marker, cfg.unit
    ));
    lines.push(String::new());
    for &v in values {
        lines.push(std::iter::repeat_n(cfg.marker, marker_count(v, cfg)).collect());
    }
    lines
}

/// Write the chart to `out`, preceded by a blank separator line.
pub fn render<W: Write>(out: &mut W, values: &[f64], cfg: &ChartConfig) -> Result<(), ChartError> {
    let mut buf = String::with_capacity(values.len() * (cfg.cap + 1) + 64);
    buf.push('\n');
    for line in chart_lines(values, cfg) {
        buf.push_str(&line);
        buf.push('\n');
    }
    out.write_all(buf.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ChartConfig {
        ChartConfig::builder("X").build().unwrap()
    }

    #[test]
    fn quantization_floors_and_clamps() {
        let cfg = cfg();
        let counts: Vec<usize> = [0.0, 4.9, 5.0, 24.0, 100.0, 1000.0]
            .iter()
            .map(|&v| marker_count(v, &cfg))
            .collect();
        assert_eq!(counts, [0, 0, 1, 4, 20, 20]);
    }

    #[test]
    fn negative_values_clamp_to_zero() {
        assert_eq!(marker_count(-3.0, &cfg()), 0);
        assert_eq!(marker_count(-1000.0, &cfg()), 0);
    }

    #[test]
    fn custom_cap_and_unit_apply() {
        let cfg = ChartConfig::builder("X").unit(2.0).cap(5).build().unwrap();
        assert_eq!(marker_count(9.9, &cfg), 4);
        assert_eq!(marker_count(1000.0, &cfg), 5);
    }

    #[test]
    fn framing_precedes_one_bar_per_value() {
        let lines = chart_lines(&[0.0, 24.0, 1000.0], &cfg());
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Column: X");
        assert_eq!(lines[1], "Legend: each '*' represents 5 units");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "****");
        assert_eq!(lines[5], "*".repeat(20));
    }

    #[test]
    fn custom_marker_shows_in_legend_and_bars() {
        let cfg = ChartConfig::builder("X").marker('#').build().unwrap();
        let lines = chart_lines(&[10.0], &cfg);
        assert_eq!(lines[1], "Legend: each '#' represents 5 units");
        assert_eq!(lines[3], "##");
    }

    #[test]
    fn render_writes_every_line() {
        let mut out = Vec::new();
        render(&mut out, &[5.0], &cfg()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\nColumn: X\nLegend: each '*' represents 5 units\n\n*\n");
    }
}
