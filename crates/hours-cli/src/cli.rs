//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

use crate::output::Field;

/// Convert an Hours timesheet export into one CSV row per day.
///
/// Each row carries the day's first start, last finish, the pauses between
/// entries and the resulting worked time.
#[derive(Debug, Parser)]
#[command(name = "hours-csv", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output and list entries that could not be parsed.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The export to read, or `-` for stdin.
    pub input: PathBuf,

    /// Where to write the result. Prints to stdout if not given.
    pub output: Option<PathBuf>,

    /// Only count entries of this project (exact match).
    #[arg(short, long)]
    pub project: Option<String>,

    /// Columns to write, in order.
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub fields: Option<Vec<Field>>,

    /// Write a JSON array instead of CSV.
    #[arg(long)]
    pub json: bool,

    /// Omit the CSV header row.
    #[arg(long)]
    pub no_header: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_fields_list() {
        let cli = Cli::try_parse_from(["hours-csv", "in.txt", "--fields", "date,total"]).unwrap();
        assert_eq!(cli.fields, Some(vec![Field::Date, Field::Total]));
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_rejects_unknown_field() {
        assert!(Cli::try_parse_from(["hours-csv", "in.txt", "-f", "lines"]).is_err());
    }

    #[test]
    fn test_input_and_output_positionals() {
        let cli = Cli::try_parse_from(["hours-csv", "-p", "work", "-", "out.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("-"));
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.project.as_deref(), Some("work"));
    }
}
