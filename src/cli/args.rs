//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::mix::{DEFAULT_EXCESS_PERCENT, DEFAULT_MIX_X};
use crate::report::ReportFormat;

/// PCR master mix calculator: DDW, 2X/5X mix and primer volumes by sample count
#[derive(Debug, Clone, Parser)]
#[command(name = "pcrmix", version, about)]
pub struct Args {
    /// Number of PCR reactions (>= 1). Prompts interactively when omitted
    #[arg(value_name = "SAMPLES", allow_negative_numbers = true)]
    pub samples: Option<i64>,

    /// Percent excess to offset pipetting loss
    #[arg(
        short,
        long,
        env = "PCRMIX_EXCESS",
        default_value_t = DEFAULT_EXCESS_PERCENT,
        allow_negative_numbers = true
    )]
    pub excess: f64,

    /// Master mix concentration (2 for 2X, 5 for 5X)
    #[arg(short, long, env = "PCRMIX_MIX", default_value_t = DEFAULT_MIX_X)]
    pub mix: u32,

    /// Report format [default: text, or markdown with --output]
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Write the report to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write a PDF bench sheet to FILE
    #[arg(long, value_name = "FILE")]
    pub pdf: Option<PathBuf>,

    /// Print the build banner to standard error
    #[arg(long)]
    pub banner: bool,
}

impl Args {
    /// Format to render: explicit choice, else Markdown for files and text for stdout
    pub fn report_format(&self) -> ReportFormat {
        match (self.format, &self.output) {
            (Some(format), _) => format,
            (None, Some(_)) => ReportFormat::Markdown,
            (None, None) => ReportFormat::Text,
        }
    }
}
