//! JSON output formatter for machine processing

use crate::domain::CheckReport;
use crate::output::OutputFormatter;
use std::io::Write;

/// JSON formatter writing `{"outdated": [...], "sha_pinned": [...]}`
///
/// Hashes are written in full. Both arrays are always present.
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)?;
        Ok(())
    }
}
