//! rustyline-backed prompt loops.
//!
//! Retry policy lives here and only here: the core functions report an
//! error once, this layer re-asks.  Ctrl-C / Ctrl-D abort the whole run
//! (mapped to `ChartError::Cancelled` by the `From` impl).

use rustyline::DefaultEditor;

use crate::core::{
    data::{Table, read_table_from_path},
    error::ChartError,
    impute::FillStrategy,
    sort::SortOrder,
};

pub struct Prompter {
    rl: DefaultEditor,
}

impl Prompter {
    pub fn new() -> Result<Self, ChartError> {
        Ok(Self {
            rl: DefaultEditor::new()?,
        })
    }

    fn line(&mut self, prompt: &str) -> Result<String, ChartError> {
        let text = self.rl.readline(prompt)?;
        let _ = self.rl.add_history_entry(text.as_str());
        Ok(text)
    }

    /// Re-asks until a path yields a loadable table.
    pub fn table(&mut self) -> Result<Table, ChartError> {
        loop {
            let path = self.line("Please enter the path to the CSV file: ")?;
            match read_table_from_path(path.trim()) {
                Ok(t) => return Ok(t),
                Err(e) => println!("Error reading file: {e}"),
            }
        }
    }

    /// Re-asks until the name matches a column whose non-empty cells are
    /// all numeric.
    pub fn column<'t>(&mut self, table: &'t Table) -> Result<(String, &'t [String]), ChartError> {
        println!("Available columns: {}", table.headers().join(", "));
        loop {
            let name = self.line("Please choose a numerical column: ")?;
            let name = name.trim();
            match table.numeric_column(name) {
                Ok(cells) => return Ok((name.to_string(), cells)),
                Err(e @ ChartError::NoSuchColumn { .. }) => {
                    println!("{e}. Please choose from the available columns.");
                }
                Err(e @ ChartError::NonNumericColumn { .. }) => {
                    println!("{e}. Please choose a different column.");
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn fill(&mut self) -> Result<FillStrategy, ChartError> {
        loop {
            let text = self.line("Replace empty cells with (min, max, average): ")?;
            match text.parse::<FillStrategy>() {
                Ok(s) => return Ok(s),
                Err(e) => println!("{e}"),
            }
        }
    }

    pub fn order(&mut self) -> Result<SortOrder, ChartError> {
        loop {
            let text = self.line("Sort data in ascending or descending order? (asc/desc): ")?;
            match text.parse::<SortOrder>() {
                Ok(o) => return Ok(o),
                Err(e) => println!("{e}"),
            }
        }
    }
}
