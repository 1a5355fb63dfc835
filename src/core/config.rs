//! Run-time chart configuration + fluent builder.

use crate::core::{
    constants::{DEFAULT_MARKER, MAX_MARKERS, UNITS_PER_MARKER},
    error::ConfigError,
};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Column name shown in the chart framing.
    pub title: String,
    /// Bar character.
    pub marker: char,
    /// Value magnitude per marker.
    pub unit: f64,
    /// Bars never exceed this many markers.
    pub cap: usize,
}

impl ChartConfig {
    #[inline]
    pub fn builder(title: impl Into<String>) -> ChartConfigBuilder {
        ChartConfigBuilder::new(title.into())
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct ChartConfigBuilder {
    title: String,
    marker: Option<char>,
    unit: Option<f64>,
    cap: Option<usize>,
}

impl ChartConfigBuilder {
    pub(crate) fn new(title: String) -> Self {
        Self {
            title,
            marker: None,
            unit: None,
            cap: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn marker(mut self, c: char) -> Self {
        self.marker = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn unit(mut self, u: f64) -> Self {
        self.unit = Some(u);
        self
    }
    #[inline]
    #[must_use]
    pub fn cap(mut self, n: usize) -> Self {
        self.cap = Some(n);
        self
    }

    pub fn build(self) -> Result<ChartConfig, ConfigError> {
        let unit = self.unit.unwrap_or(UNITS_PER_MARKER);
        if !unit.is_finite() || unit <= 0.0 {
            return Err(ConfigError::InvalidUnit { unit });
        }
        let cap = self.cap.unwrap_or(MAX_MARKERS);
        if cap == 0 {
            return Err(ConfigError::ZeroCap);
        }
        Ok(ChartConfig {
            title: self.title,
            marker: self.marker.unwrap_or(DEFAULT_MARKER),
            unit,
            cap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_legend() {
        let cfg = ChartConfig::builder("age").build().unwrap();
        assert_eq!(cfg.title, "age");
        assert_eq!(cfg.marker, '*');
        assert_eq!(cfg.unit, 5.0);
        assert_eq!(cfg.cap, 20);
    }

    #[test]
    fn unit_must_be_positive_and_finite() {
        assert!(matches!(
            ChartConfig::builder("x").unit(0.0).build(),
            Err(ConfigError::InvalidUnit { .. })
        ));
        assert!(matches!(
            ChartConfig::builder("x").unit(-2.0).build(),
            Err(ConfigError::InvalidUnit { .. })
        ));
        assert!(matches!(
            ChartConfig::builder("x").unit(f64::NAN).build(),
            Err(ConfigError::InvalidUnit { .. })
        ));
    }

    #[test]
    fn cap_must_be_at_least_one() {
        assert!(matches!(
            ChartConfig::builder("x").cap(0).build(),
            Err(ConfigError::ZeroCap)
        ));
        assert_eq!(ChartConfig::builder("x").cap(8).build().unwrap().cap, 8);
    }
}
