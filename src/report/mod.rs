//! Report rendering
//!
//! Turns a computed `MixPlan` into text, Markdown, JSON or a PDF bench sheet.

pub mod json;
pub mod markdown;
pub mod pdf;
pub mod text;

use thiserror::Error;

use crate::mix::MixPlan;

pub use json::format_json;
pub use markdown::format_markdown;
pub use pdf::write_pdf;
pub use text::format_report;

/// Report rendering and writing errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Chart error: {0}")]
    Chart(String),
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Textual output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Fixed-width plain text
    #[default]
    Text,
    /// Two Markdown tables
    Markdown,
    /// Pretty-printed JSON
    Json,
}

/// Render a plan in one of the textual formats
pub fn render(plan: &MixPlan, format: ReportFormat) -> ReportResult<String> {
    match format {
        ReportFormat::Text => Ok(format_report(plan)),
        ReportFormat::Markdown => Ok(format_markdown(plan)),
        ReportFormat::Json => format_json(plan),
    }
}
