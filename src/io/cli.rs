//! Command-line interface for ordering part lists

use crate::algorithm::sorter::sort_part_names;
use crate::io::configuration::{
    DEFAULT_LOG_FILTER, LIST_DELIMITER, OUTPUT_SEPARATOR, VERBOSE_LOG_FILTER,
};
use crate::io::error::Result;
use crate::parts::kind::PartKind;
use crate::parts::multiset::PartMultiset;
use clap::Parser;
use std::fmt::Write;

#[derive(Parser)]
#[command(name = "partsort")]
#[command(
    author,
    version,
    about = "Order creep body parts following a layout template"
)]
/// Command-line arguments for the part sorter
pub struct Cli {
    /// Parts to order, comma separated or repeated
    #[arg(value_name = "PARTS", value_delimiter = LIST_DELIMITER)]
    pub parts: Vec<String>,

    /// Layout template, comma separated or repeated
    #[arg(short, long, value_delimiter = LIST_DELIMITER)]
    pub layout: Vec<String>,

    /// Print a count per kind after the sequence
    #[arg(short, long)]
    pub summary: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter to use when `RUST_LOG` is unset
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

/// Sorts the parts named on the command line and renders the result
pub struct SortCommand {
    cli: Cli,
}

impl SortCommand {
    /// Create a command from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Sort the requested parts
    ///
    /// # Errors
    ///
    /// Returns `InvalidPartKind` if any part or layout token is unrecognized
    pub fn sorted(&self) -> Result<Vec<PartKind>> {
        sort_part_names(&self.cli.parts, &self.cli.layout)
    }

    /// Render the output text, one trailing newline per line
    ///
    /// # Errors
    ///
    /// Returns `InvalidPartKind` if any part or layout token is unrecognized
    pub fn render(&self) -> Result<String> {
        let sorted = self.sorted()?;
        let mut output = sorted
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(OUTPUT_SEPARATOR);
        output.push('\n');

        if self.cli.summary {
            let counts = PartMultiset::from_parts(&sorted);
            for (kind, count) in counts.entries().filter(|&(_, count)| count > 0) {
                // Writing to a String cannot fail
                let _ = writeln!(output, "{kind}={count}");
            }
        }

        Ok(output)
    }

    /// Sort and print to standard output
    ///
    /// # Errors
    ///
    /// Returns `InvalidPartKind` if any part or layout token is unrecognized
    // Allow print for the command's only output
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let output = self.render()?;
        print!("{output}");
        Ok(())
    }
}
