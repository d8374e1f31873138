//! JSON output formatter

use hanlint_core::FileReport;
use miette::{IntoDiagnostic, Result};

pub fn output_json(reports: &[FileReport]) -> Result<()> {
    let output: Vec<_> = reports
        .iter()
        .map(|r| {
            serde_json::json!({
                "path": r.path.display().to_string(),
                "issues": r.issues,
            })
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}
