use std::io::stdout;
use std::time::Instant;

use crate::{
    core::{
        bounds::{marker_cap, terminal_geometry},
        config::ChartConfig,
        data::read_table_from_path,
        error::ChartError,
        impute::{FillStrategy, impute},
        sort::{SortOrder, insertion_sort},
    },
    render::render,
};

use super::parse::ChartArgs;
use super::prompt::Prompter;

pub fn chart(a: ChartArgs) -> Result<(), ChartError> {
    // Fully scripted run: no prompter, first error is fatal.
    if let (Some(file), Some(column), Some(fill), Some(order)) =
        (&a.file, &a.column, &a.fill, &a.order)
    {
        let t_ingest = Instant::now();
        let table = read_table_from_path(file)?;
        let dur_ingest = t_ingest.elapsed().as_micros();

        let cells = table.numeric_column(column)?;
        let strategy = fill.parse::<FillStrategy>()?;
        let order = order.parse::<SortOrder>()?;
        if a.debug {
            eprintln!("CSV ingest: {dur_ingest} µs   ({} rows)", table.rows());
        }
        return plot(column.clone(), cells, strategy, order, &a);
    }

    interactive(a)
}

/// Anything missing from the flags gets prompted for, with retries.
fn interactive(a: ChartArgs) -> Result<(), ChartError> {
    banner();
    let mut ui = Prompter::new()?;

    let t_ingest = Instant::now();
    let table = match &a.file {
        Some(path) => read_table_from_path(path)?,
        None => ui.table()?,
    };
    if a.debug {
        eprintln!(
            "CSV ingest: {} µs   ({} rows)",
            t_ingest.elapsed().as_micros(),
            table.rows()
        );
    }

    let (name, cells) = match &a.column {
        Some(name) => (name.clone(), table.numeric_column(name)?),
        None => ui.column(&table)?,
    };

    println!("Stage 2: Clean and prepare data");
    let strategy = match &a.fill {
        Some(text) => text.parse::<FillStrategy>()?,
        None => ui.fill()?,
    };

    println!("Stage 3: Analyse data");
    let order = match &a.order {
        Some(text) => text.parse::<SortOrder>()?,
        None => ui.order()?,
    };

    println!("Stage 4: Visualize data");
    plot(name, cells, strategy, order, &a)
}

/// Shared tail of both paths: impute → insertion sort → star chart.
fn plot(
    name: String,
    cells: &[String],
    strategy: FillStrategy,
    order: SortOrder,
    a: &ChartArgs,
) -> Result<(), ChartError> {
    let t_clean = Instant::now();
    let mut series = impute(cells, strategy)?;
    insertion_sort(&mut series, order);
    if a.debug {
        eprintln!("clean+sort: {} µs", t_clean.elapsed().as_micros());
    }

    let (w, _) = terminal_geometry();
    let cfg = ChartConfig::builder(name)
        .marker(a.marker)
        .cap(marker_cap(w))
        .build()?;
    render(&mut stdout(), &series, &cfg)
}

fn banner() {
    println!("---------------------------------\nWelcome to Data Analysis CLI\n---------------------------------");
    println!("Program stages:\n1. Load Data\n2. Clean and prepare data\n3. Analyse Data\n4. Visualize Data");
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "starbars";
    println!(
        "
Example invocations
-------------------
• Fully interactive : {bin} chart
• Scripted          : {bin} chart data.csv --column age --fill average --order asc
• From stdin        : cat data.csv | {bin} chart - --column age --fill min --order desc
• Custom marker     : {bin} chart data.csv --column age --fill max --order asc --marker '#'
• Debug timing      : {bin} chart data.csv --column age --fill average --order asc --debug
"
    );
}
