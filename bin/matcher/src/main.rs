//! Interactive lookup of the closest named color.
//!
//! Loads a color table, then reads one hex color per line from stdin and
//! prints the best CIE-Lab and DIN99 matches for each.

mod error;
mod table;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use clap::{Parser, ValueEnum};
use dinmatch::{find_best_match, parse_hex, ColorTable, MatchError, Metric};
use error::CliError;

/// Input lines shorter than this are not treated as colors.
const MIN_INPUT_LEN: usize = 6;

#[derive(Parser)]
#[command(name = "dinmatch", about = "Find the closest named color in a color table")]
struct Cli {
    /// Color table file, one `LABEL RRGGBB` entry per line.
    table: PathBuf,

    /// Which color differences to report.
    #[arg(short, long, value_enum, default_value_t = MetricArg::Both)]
    metric: MetricArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MetricArg {
    /// CIE-Lab only.
    Lab,
    /// DIN99 only.
    Din,
    /// CIE-Lab, then DIN99.
    Both,
}

impl MetricArg {
    fn metrics(self) -> &'static [Metric] {
        match self {
            MetricArg::Lab => &[Metric::Lab],
            MetricArg::Din => &[Metric::Din99],
            MetricArg::Both => &Metric::ALL,
        }
    }
}

/// Build the report lines for one line of input.
fn describe(
    input: &str,
    table: &ColorTable,
    metrics: &[Metric],
) -> Result<Vec<String>, MatchError> {
    if input.len() < MIN_INPUT_LEN {
        return Ok(vec!["too short, try again".to_owned()]);
    }

    let rgb = parse_hex(input);
    let mut lines = vec![format!(
        "Input was interpreted as ({}, {}, {})",
        rgb.red, rgb.green, rgb.blue
    )];

    for &metric in metrics {
        let found = find_best_match(input, table, metric)?;
        lines.push(format!(
            "best {metric} match: {} (rgb: {}), difference: {:.4} ({})",
            found.label,
            found.rgb,
            found.difference,
            found.band()
        ));
    }

    Ok(lines)
}

/// Answer every line of `input` until it is exhausted. Lines that are not
/// valid UTF-8 are decoded lossily and so read as black.
fn run_session(
    input: impl BufRead,
    mut output: impl Write,
    table: &ColorTable,
    metrics: &[Metric],
) -> Result<(), CliError> {
    for line in input.split(b'\n') {
        let line = line.map_err(|e| CliError::io("reading input", e))?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);

        for report in describe(&String::from_utf8_lossy(line), table, metrics)? {
            writeln!(output, "{report}").map_err(|e| CliError::io("writing output", e))?;
        }
    }

    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let table = table::load_table(&cli.table)
        .map_err(|e| CliError::io(format!("reading {}", cli.table.display()), e))?;

    println!(
        "read {} values from file {}",
        table.len(),
        cli.table.display()
    );

    run_session(
        io::stdin().lock(),
        io::stdout().lock(),
        &table,
        cli.metric.metrics(),
    )
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(e.exit_code());
    }
}
