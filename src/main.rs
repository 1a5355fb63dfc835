use std::process::ExitCode;

use starbars::{ChartError, cli};

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(ChartError::Cancelled) => {
            eprintln!("cancelled");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
