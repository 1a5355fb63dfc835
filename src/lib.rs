//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use self::core::{
    config::{ChartConfig, ChartConfigBuilder},
    constants::{DEFAULT_MARKER, MAX_MARKERS, UNITS_PER_MARKER},
    error::{ChartError, CleanError, ConfigError},
    impute::{FillStrategy, impute},
    sort::{SortOrder, insertion_sort},
};

pub use render::{chart_lines, marker_count, render};

/// Convenience function: impute, sort, and lay out one column's chart in a
/// single call, with default marker settings.
pub fn chart_column<S: AsRef<str>>(
    cells: &[S],
    column_name: &str,
    strategy: FillStrategy,
    order: SortOrder,
) -> Result<Vec<String>, ChartError> {
    let mut series = impute(cells, strategy)?;
    insertion_sort(&mut series, order);
    let cfg = ChartConfig::builder(column_name).build()?;
    Ok(chart_lines(&series, &cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_pipeline_end_to_end() {
        let lines = chart_column(
            &["30", "", "10", ""],
            "score",
            FillStrategy::Average,
            SortOrder::Descending,
        )
        .unwrap();
        // imputed to [30, 20, 10, 20], sorted descending
        assert_eq!(
            lines,
            [
                "Column: score",
                "Legend: each '*' represents 5 units",
                "",
                "******",
                "****",
                "****",
                "**",
            ]
        );
    }

    #[test]
    fn one_shot_pipeline_surfaces_core_errors() {
        assert!(matches!(
            chart_column(&["", ""], "x", FillStrategy::Min, SortOrder::Ascending),
            Err(ChartError::Clean(CleanError::EmptyColumn))
        ));
    }
}
