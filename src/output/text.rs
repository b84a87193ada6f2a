//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Aligned tables for outdated and SHA-pinned findings
//! - Abbreviated commit hashes
//! - Summary line

use crate::domain::{short_hash, CheckReport};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

const OUTDATED_HEADERS: [&str; 4] = ["File", "Action", "Current", "Latest"];
const BEHIND_HEADERS: [&str; 5] = ["File", "Action", "Current SHA", "Latest SHA", "Behind"];

/// Text formatter for human-readable output
pub struct TextFormatter {
    verbosity: Verbosity,
    color: bool,
}

impl TextFormatter {
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn heading(&self, title: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "{}", title.bold())
        } else {
            writeln!(writer, "{}", title)
        }
    }

    /// Write `rows` under `headers`, each column padded to its widest cell
    ///
    /// The last column is highlighted as the actionable value.
    fn table<const N: usize>(
        &self,
        headers: [&str; N],
        rows: &[[String; N]],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let mut widths = headers.map(str::len);
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let header_line = pad_row(&headers, &widths);
        let header_line = header_line.trim_end();
        if self.color {
            writeln!(writer, "  {}", header_line.dimmed())?;
        } else {
            writeln!(writer, "  {}", header_line)?;
        }

        for row in rows {
            let (last, rest) = match row.split_last() {
                Some(split) => split,
                None => continue,
            };
            let leading = pad_row(rest, &widths);
            if self.color {
                writeln!(writer, "  {}  {}", leading, last.green().bold())?;
            } else {
                writeln!(writer, "  {}  {}", leading, last)?;
            }
        }
        Ok(())
    }

    fn format_summary(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if report.is_up_to_date() {
            if self.color {
                writeln!(writer, "{}", "All actions are up to date.".green())
            } else {
                writeln!(writer, "All actions are up to date.")
            }
        } else {
            let line = format!(
                "{} outdated, {} behind",
                report.outdated.len(),
                report.behind.len()
            );
            if self.color {
                writeln!(writer, "{}", line.yellow())
            } else {
                writeln!(writer, "{}", line)
            }
        }
    }
}

/// Join cells padded to `widths`
fn pad_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:width$}", cell.as_ref(), width = width))
        .collect::<Vec<_>>()
        .join("  ")
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if !report.outdated.is_empty() {
            self.heading("Outdated actions:", writer)?;
            let rows: Vec<[String; 4]> = report
                .outdated
                .iter()
                .map(|f| {
                    [
                        f.source_location.clone(),
                        f.name.clone(),
                        f.current_version.clone(),
                        f.latest_version.clone(),
                    ]
                })
                .collect();
            self.table(OUTDATED_HEADERS, &rows, writer)?;
            writeln!(writer)?;
        }

        if !report.behind.is_empty() {
            self.heading("SHA-pinned actions behind default branch:", writer)?;
            let rows: Vec<[String; 5]> = report
                .behind
                .iter()
                .map(|f| {
                    [
                        f.source_location.clone(),
                        f.name.clone(),
                        short_hash(&f.current_hash).to_string(),
                        short_hash(&f.latest_hash).to_string(),
                        f.commits_behind.to_string(),
                    ]
                })
                .collect();
            self.table(BEHIND_HEADERS, &rows, writer)?;
            writeln!(writer)?;
        }

        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        self.format_summary(report, writer)
    }
}
