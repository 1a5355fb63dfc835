//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod impute;
pub mod sort;

// re-export frequently-used items for convenience
pub use bounds::{marker_cap, terminal_geometry};
pub use config::{ChartConfig, ChartConfigBuilder};
pub use constants::{DEFAULT_MARKER, MAX_MARKERS, MIN_MARKER_CAP, UNITS_PER_MARKER};
pub use data::{Table, read_table, read_table_from_path};
pub use error::{ChartError, CleanError, ConfigError};
pub use impute::{FillStrategy, impute};
pub use sort::{SortOrder, insertion_sort};
