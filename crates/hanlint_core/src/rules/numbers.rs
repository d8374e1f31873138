//! Large-number formatting rule and its grouping helper.

use std::sync::LazyLock;

use regex::Regex;

use super::{LineContext, Rule};
use crate::issue::{Issue, RuleId, Severity};

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("invalid pattern"));

// Standard-code prefix like "GB 2312", "GB/T 15834", or "GBT 12345",
// anchored at the end of the window directly before the digit run.
static STANDARD_CODE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)gb/?t?\s*$").expect("invalid pattern"));

/// Characters that mark the run as part of a version, path, or ID when
/// they directly precede it.
const ID_PREFIX_CHARS: [char; 4] = ['-', '_', '.', '/'];
/// Same, when they directly follow it.
const ID_SUFFIX_CHARS: [char; 5] = ['-', '_', '.', '/', ':'];

/// Inserts thousands separators into a run of ASCII digits.
pub(crate) fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Warns about runs of five or more digits written without separators.
///
/// Lines mentioning `http` or `://` are skipped wholesale; URL path and
/// query segments are full of long digit runs that are not prose.
pub struct UnformattedLargeNumber;

impl Rule for UnformattedLargeNumber {
    fn id(&self) -> RuleId {
        RuleId::UnformattedLargeNumber
    }

    fn check(&self, line: &LineContext<'_>, issues: &mut Vec<Issue>) {
        if line.sanitized.contains("http") || line.sanitized.contains("://") {
            return;
        }

        let chars: Vec<char> = line.sanitized.chars().collect();

        for m in DIGIT_RUN.find_iter(&line.sanitized) {
            let digits = m.as_str();
            if digits.len() < 5 {
                continue;
            }

            let start = line.column_at(m.start()) - 1;
            let end = start + digits.len();
            let before = start.checked_sub(1).and_then(|i| chars.get(i)).copied();
            let after = chars.get(end).copied();

            // Already-formatted neighbours and version/ID-like tokens.
            if before == Some(',') || after == Some(',') {
                continue;
            }
            if before.is_some_and(|c| ID_PREFIX_CHARS.contains(&c)) {
                continue;
            }
            if after.is_some_and(|c| ID_SUFFIX_CHARS.contains(&c)) {
                continue;
            }

            // National/industry standard numbers ("GB 15834", "GB/T 2312").
            let window: String = chars[start.saturating_sub(10)..start].iter().collect();
            if STANDARD_CODE_PREFIX.is_match(&window) {
                continue;
            }

            let grouped = group_thousands(digits);
            issues.push(
                line.issue(
                    self.id(),
                    start + 1,
                    format!("large number \"{}\" without thousands separators", digits),
                )
                .with_suggestion(grouped)
                .with_severity(Severity::Warning),
            );
        }
    }
}
