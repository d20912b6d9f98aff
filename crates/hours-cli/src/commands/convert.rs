//! Converting an export into per-day rows.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hours_core::{InputSource, ParseOptions, ParseReport};

use crate::output::{self, Field};
use crate::{Cli, Config};

/// Fully resolved settings for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub options: ParseOptions,
    pub fields: Vec<Field>,
    pub header: bool,
    pub json: bool,
}

impl ConvertArgs {
    /// Merges command-line flags over the loaded configuration.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            input: cli.input.clone(),
            output: cli.output.clone(),
            options: ParseOptions {
                project: cli.project.clone().or_else(|| config.project.clone()),
                verbose: cli.verbose,
            },
            fields: cli.fields.clone().unwrap_or_else(|| config.fields.clone()),
            header: config.header && !cli.no_header,
            json: cli.json,
        }
    }

    fn source(&self) -> InputSource {
        if self.input == Path::new("-") {
            InputSource::reader(io::stdin())
        } else {
            InputSource::path(&self.input)
        }
    }
}

pub fn run(args: &ConvertArgs) -> Result<ParseReport> {
    let report = hours_core::parse(args.source(), &args.options)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_report(&mut writer, &report, args)?;
            writer
                .flush()
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => write_report(&mut io::stdout().lock(), &report, args)?,
    }

    tracing::debug!(days = report.days.len(), "conversion complete");
    Ok(report)
}

fn write_report<W: Write>(writer: &mut W, report: &ParseReport, args: &ConvertArgs) -> Result<()> {
    if args.json {
        output::write_json(writer, &report.days, &args.fields)
    } else {
        output::write_csv(writer, &report.days, &args.fields, args.header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;
    use insta::assert_snapshot;

    const EXPORT: &str = "Hours Timesheet
Report for 2015
Project,Start,Finish,Duration
\"Monday, 12 October\",,,
A,09:00,12:00,3:00
B,12:00,13:00,1:00
A,13:00,18:00,5:00
Total,,,9:00

\"Tuesday, 13 October\",,,
B,09:00,11:00,2:00
B,11:30,lunch,
Total,,,2:00

GRAND TOTAL,,,11:00
";

    fn args_for(cli_args: &[&str], config: &Config) -> ConvertArgs {
        let cli = Cli::try_parse_from(cli_args).unwrap();
        ConvertArgs::resolve(&cli, config)
    }

    #[test]
    fn test_cli_flags_override_config() {
        let config = Config {
            project: Some("A".to_string()),
            fields: vec![Field::Date],
            header: true,
        };
        let args = args_for(&["hours-csv", "in.txt", "-p", "B", "-f", "total", "--no-header"], &config);
        assert_eq!(args.options.project.as_deref(), Some("B"));
        assert_eq!(args.fields, vec![Field::Total]);
        assert!(!args.header);
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let config = Config {
            project: Some("A".to_string()),
            ..Config::default()
        };
        let args = args_for(&["hours-csv", "in.txt"], &config);
        assert_eq!(args.options.project.as_deref(), Some("A"));
        assert_eq!(args.fields, Field::ALL.to_vec());
        assert!(args.header);
    }

    #[test]
    fn test_run_writes_output_file() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("export.txt");
        let output = temp.path().join("days.csv");
        std::fs::write(&input, EXPORT).unwrap();

        let args = ConvertArgs {
            input,
            output: Some(output.clone()),
            options: ParseOptions::for_project("A"),
            fields: Field::ALL.to_vec(),
            header: true,
            json: false,
        };
        let report = run(&args).unwrap();
        assert_eq!(report.empty_days.len(), 1);

        let written = std::fs::read_to_string(&output).unwrap();
        assert_snapshot!(written, @r"
        date,start,finish,pause,total
        2015-10-12,09:00,18:00,1:00,8:00
        ");
    }

    #[test]
    fn test_run_reports_missing_input() {
        let temp = tempfile::tempdir().unwrap();
        let args = ConvertArgs {
            input: temp.path().join("missing.txt"),
            output: Some(temp.path().join("out.csv")),
            options: ParseOptions::default(),
            fields: Field::ALL.to_vec(),
            header: true,
            json: false,
        };
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("failed to parse"), "{err}");
        assert!(!temp.path().join("out.csv").exists());
    }
}
