//! Missing-value imputation with zero-allocation float parsing.

use std::str::FromStr;

use crate::core::error::CleanError;

/// Statistic used to replace empty cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillStrategy {
    Min,
    Max,
    Average,
}

impl FromStr for FillStrategy {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self, CleanError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "average" => Ok(Self::Average),
            _ => Err(CleanError::InvalidChoice {
                what: "fill",
                got: s.trim().to_string(),
            }),
        }
    }
}

impl FillStrategy {
    /// Replacement value over the non-empty cells.
    ///
    /// Caller guarantees `values` is non-empty.
    #[must_use]
    pub fn replacement(self, values: &[f64]) -> f64 {
        match self {
            Self::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Average => values.iter().sum::<f64>() / values.len() as f64,
        }
    }
}

/// Parse one cell as a finite float.
#[inline]
pub(crate) fn parse_cell(bytes: &[u8]) -> Result<f64, CleanError> {
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| CleanError::BadFloat {
        text: String::from_utf8_lossy(bytes).into_owned(),
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(CleanError::BadFloat {
            text: String::from_utf8_lossy(bytes).into_owned(),
        })
    }
}

/// Turn one raw column into a numeric series.
///
/// Non-empty cells keep their own parsed value; empty cells take the
/// statistic chosen by `strategy`, computed over the non-empty cells.
/// Output length and order match the input.
pub fn impute<S: AsRef<str>>(cells: &[S], strategy: FillStrategy) -> Result<Vec<f64>, CleanError> {
    let mut parsed = Vec::with_capacity(cells.len());
    let mut present = Vec::new();

    for cell in cells {
        let text = cell.as_ref().trim();
        if text.is_empty() {
            parsed.push(None);
        } else {
            let v = parse_cell(text.as_bytes())?;
            present.push(v);
            parsed.push(Some(v));
        }
    }

    if present.is_empty() {
        return Err(CleanError::EmptyColumn);
    }
    let fill = strategy.replacement(&present);

    Ok(parsed.into_iter().map(|v| v.unwrap_or(fill)).collect())
}
