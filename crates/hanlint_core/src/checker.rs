//! The checking engine.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::classifier::LineClassifier;
use crate::issue::{Issue, RuleId, Severity};
use crate::rules::{LineContext, Rule, all_rules};
use crate::{CheckConfig, CheckError};

/// Checks one text with the default rule set.
///
/// The single engine entry point: deterministic and free of side
/// effects beyond producing the list.
pub fn check(text: &str, skip_tables: bool) -> Vec<Issue> {
    let config = CheckConfig {
        skip_tables,
        ..CheckConfig::new()
    };
    Checker::new(config).check_text(text)
}

/// All issues found in one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// The checked file.
    pub path: PathBuf,
    /// Issues in detection order.
    pub issues: Vec<Issue>,
}

impl FileReport {
    /// Returns whether any error-level issue was found.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Number of error-level issues.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Number of warning-level issues.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }
}

/// The configured checking engine.
///
/// Holds the enabled detectors; each file check is self-contained, so a
/// `Checker` can be shared across threads freely.
pub struct Checker {
    config: CheckConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl Checker {
    /// Creates a checker from a configuration.
    pub fn new(config: CheckConfig) -> Self {
        for name in config.rules.keys() {
            if RuleId::ALL.iter().all(|id| id.as_str() != name) {
                warn!("Unknown rule in config: {}", name);
            }
        }

        let rules: Vec<Box<dyn Rule>> = all_rules()
            .into_iter()
            .filter(|rule| config.rule_enabled(rule.id().as_str()))
            .collect();

        debug!("Checker configured with {} rules", rules.len());
        Self { config, rules }
    }

    /// Checks the full text of one file.
    pub fn check_text(&self, text: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for line in LineClassifier::new(text, self.config.skip_tables) {
            if line.skip {
                continue;
            }
            let ctx = LineContext::new(line.number, line.content);
            for rule in &self.rules {
                rule.check(&ctx, &mut issues);
            }
        }

        issues
    }

    /// Reads and checks one file.
    pub fn check_file(&self, path: impl AsRef<Path>) -> Result<FileReport, CheckError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| CheckError::file(format!("{}: {}", path.display(), e)))?;

        let issues = self.check_text(&text);
        debug!("{}: {} issues", path.display(), issues.len());

        Ok(FileReport {
            path: path.to_path_buf(),
            issues,
        })
    }

    /// Checks a list of files in parallel.
    ///
    /// Every file check is fully self-contained, so files are processed
    /// with rayon without any coordination. Returns successful reports
    /// and per-file failures separately.
    pub fn check_files(&self, paths: &[PathBuf]) -> (Vec<FileReport>, Vec<(PathBuf, CheckError)>) {
        let results: Vec<Result<FileReport, (PathBuf, CheckError)>> = paths
            .par_iter()
            .map(|path| self.check_file(path).map_err(|e| (path.clone(), e)))
            .collect();

        let mut reports = Vec::with_capacity(paths.len());
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(report) => reports.push(report),
                Err(failure) => failures.push(failure),
            }
        }

        info!(
            "Checked {} files, {} failed",
            reports.len(),
            failures.len()
        );
        (reports, failures)
    }
}
