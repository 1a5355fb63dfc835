mod handlers;
pub mod parse;
mod prompt;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::ChartError;

pub fn run() -> Result<(), ChartError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Chart(a) => handlers::chart(a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
