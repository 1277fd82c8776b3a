//! Terminal front-ends
//!
//! Argument parsing, interactive prompting and report output for the binary.

pub mod args;
pub mod interactive;
pub mod output;

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::mix::{compute_totals, MixError};
use crate::report::{self, ReportError};

pub use args::Args;
pub use interactive::{prompt_inputs, PromptAnswers, PromptDefaults};
pub use output::write_report;

/// Errors surfaced to the user by the binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Mix(#[from] MixError),

    #[error("{0}")]
    Report(#[from] ReportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// 2 for rejected input (as clap does for usage errors), 1 otherwise
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Mix(_) => 2,
            CliError::Report(_) | CliError::Io(_) => 1,
        }
    }
}

/// Result type for front-end operations
pub type CliResult<T> = Result<T, CliError>;

/// Compute and emit a report for `args`
///
/// Prompts on `input`/`out` when no sample count was given. The report goes
/// to `out` unless `--output` names a file.
pub fn run<R: BufRead, W: Write>(args: &Args, input: &mut R, out: &mut W) -> CliResult<()> {
    let (sample_count, excess_percent, mix_x) = match args.samples {
        Some(n) => (n, args.excess, args.mix),
        None => {
            let defaults = PromptDefaults {
                excess_percent: args.excess,
                mix_x: args.mix,
            };
            let answers = prompt_inputs(input, out, defaults)?;
            (answers.sample_count, answers.excess_percent, answers.mix_x)
        }
    };

    let plan = compute_totals(sample_count, excess_percent, mix_x)?;
    let rendered = report::render(&plan, args.report_format())?;

    match &args.output {
        Some(path) => {
            write_report(path, &rendered)?;
            eprintln!("Saved report to {}", path.display());
        }
        None => writeln!(out, "{}", rendered)?,
    }

    if let Some(pdf_path) = &args.pdf {
        report::write_pdf(&plan, pdf_path)?;
        eprintln!("Saved PDF bench sheet to {}", pdf_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn run_with(argv: &[&str], stdin: &str) -> (CliResult<()>, String) {
        let args = Args::try_parse_from(argv).unwrap();
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run(&args, &mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_prints_text_report() {
        let (result, out) = run_with(&["pcrmix", "4", "-e", "5", "-m", "5"], "");
        result.unwrap();
        assert!(out.contains("Samples: 4 | Excess: 5.0% | Mix: 5X"));
        assert!(out.contains("TOTAL master mix       = 46.0 µL"));
    }

    #[test]
    fn test_run_interactive_when_samples_missing() {
        let (result, out) = run_with(&["pcrmix", "--mix", "5"], "8\n\n\n");
        result.unwrap();
        assert!(out.contains("Enter number of PCR samples: "));
        assert!(out.contains("[ENTER for 5]"));
        assert!(out.contains("Samples: 8 | Excess: 10.0% | Mix: 5X"));
    }

    #[test]
    fn test_run_rejects_invalid_input() {
        let (result, out) = run_with(&["pcrmix", "0"], "");
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("sample count"));
        assert!(out.is_empty());

        let (result, _) = run_with(&["pcrmix", "4", "--excess", "-1"], "");
        assert!(result.unwrap_err().to_string().contains("excess percent"));

        let (result, _) = run_with(&["pcrmix", "4", "--mix", "3"], "");
        assert!(result.unwrap_err().to_string().contains("mix_concentration must be 2 or 5"));
    }

    #[test]
    fn test_run_writes_markdown_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mix.md");
        let path_str = path.to_str().unwrap();

        let (result, out) = run_with(&["pcrmix", "8", "-e", "12.5", "-o", path_str], "");
        result.unwrap();
        assert!(out.is_empty());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# PCR Master Mix"));
        assert!(written.contains("| **TOTAL master mix** | **99.0** |"));
    }

    #[test]
    fn test_run_json_to_stdout() {
        let (result, out) = run_with(&["pcrmix", "8", "-e", "12.5", "--format", "json"], "");
        result.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["grand_total_ul"], 99.0);
    }
}
