//! Text output formatter

use hanlint_core::{FileReport, Severity};

pub fn output_text(reports: &[FileReport]) {
    for report in reports {
        if report.issues.is_empty() {
            continue;
        }

        println!("\n{}:", report.path.display());
        for issue in &report.issues {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            println!(
                "  {}:{} {} [{}]: {}",
                issue.line, issue.column, severity, issue.rule, issue.message
            );
            if let Some(ref suggestion) = issue.suggestion {
                println!("      suggestion: {}", suggestion);
            }
        }
    }

    let total_files = reports.len();
    let total_issues: usize = reports.iter().map(|r| r.issues.len()).sum();
    let errors: usize = reports.iter().map(|r| r.error_count()).sum();
    let warnings: usize = reports.iter().map(|r| r.warning_count()).sum();

    println!();
    println!(
        "Checked {} files, found {} issues ({} errors, {} warnings)",
        total_files, total_issues, errors, warnings
    );
}
