//! Report destinations

use std::fs;
use std::path::Path;

use crate::report::ReportResult;

/// Write a rendered report to `path`, creating parent directories
pub fn write_report(path: &Path, report: &str) -> ReportResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut contents = report.to_string();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    fs::write(path, contents)?;

    tracing::info!("Wrote report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_report_creates_parents_and_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs").join("plate1.md");

        write_report(&path, "# PCR Master Mix").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "# PCR Master Mix\n");
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mix.txt");

        write_report(&path, "first\n").unwrap();
        write_report(&path, "second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }
}
