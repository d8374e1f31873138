//! Report formatters.

mod json;
mod text;

use hanlint_core::FileReport;
use miette::Result;

pub use json::output_json;
pub use text::output_text;

/// Prints all reports in the requested format.
///
/// Returns whether any error-level issue was found.
pub fn print_report(reports: &[FileReport], format: &str) -> Result<bool> {
    match format {
        "json" => output_json(reports)?,
        _ => output_text(reports),
    }
    Ok(reports.iter().any(|r| r.has_errors()))
}
