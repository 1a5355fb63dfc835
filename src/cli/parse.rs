use clap::{Parser, Subcommand};

use crate::core::constants::DEFAULT_MARKER;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "starbars",
    about = "Clean one numeric CSV column and chart it with stars"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Impute, sort, and chart one numeric CSV column
    Chart(ChartArgs),
    /// Print example invocations
    Examples,
}

/// `starbars chart …`
#[derive(Parser, Debug)]
pub struct ChartArgs {
    /// CSV path (use `-` for stdin); prompted for when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Column to chart; prompted for when omitted
    #[arg(short, long)]
    pub column: Option<String>,

    /// Replacement for empty cells: min, max, or average
    #[arg(short, long)]
    pub fill: Option<String>,

    /// Sort direction: asc or desc
    #[arg(short, long)]
    pub order: Option<String>,

    /// Bar character
    #[arg(long, default_value_t = DEFAULT_MARKER)]
    pub marker: char,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}
