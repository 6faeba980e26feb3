// src/output.rs
//! Per-file report rendering.

use std::io::Write;

use crate::args::OutputFormat;
use crate::error::Result;
use crate::stats::FileReport;

/// Render the collected reports in the configured format.
///
/// Table mode already streamed its output during the scan, so only the JSON
/// document is emitted here.
pub fn emit(reports: &[FileReport], format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Table => Ok(()),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
            Ok(())
        }
    }
}
