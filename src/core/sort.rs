//! Insertion sort over a numeric series.
//!
//! Deliberately `O(n²)`: the point of the tool is to show the shifting
//! behavior of insertion sort, not to beat `slice::sort`.

use std::str::FromStr;

use crate::core::error::CleanError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for SortOrder {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self, CleanError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(CleanError::InvalidChoice {
                what: "order",
                got: s.trim().to_string(),
            }),
        }
    }
}

impl SortOrder {
    /// `true` when `key` still has to move left past `probe`.
    /// Strict comparison, so equal values never swap.
    #[inline]
    fn displaces(self, key: f64, probe: f64) -> bool {
        match self {
            Self::Ascending => key < probe,
            Self::Descending => key > probe,
        }
    }
}

/// In-place insertion sort.  Values are finite by construction (the
/// imputation step rejects NaN and infinities).
pub fn insertion_sort(values: &mut [f64], order: SortOrder) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && order.displaces(key, values[j - 1]) {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}
