//! Detector rules.
//!
//! Each rule is a stateless detector over one sanitized line. Rules are
//! registered in a fixed catalogue order via [`all_rules`]; that order is
//! the only ordering guarantee for issues within a line.

mod numbers;
mod punctuation;
mod spacing;

pub use numbers::UnformattedLargeNumber;
pub use punctuation::{
    ExtraSpaceInBrackets, FullwidthColonInTime, HalfwidthPunctuation, StraightQuotes, WrongDash,
    WrongEllipsis,
};
pub use spacing::{MissingSpaceCnEn, MissingSpaceCnNum};

use crate::issue::{Issue, RuleId};
use crate::sanitize::mask_inline_code;

/// Returns whether a character falls in the basic CJK ideograph block
/// (U+4E00..U+9FFF), the working definition of "Chinese character".
pub(crate) fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// One non-skipped line, prepared for detection.
///
/// Detectors match against [`sanitized`](Self::sanitized), which has
/// inline code spans blanked out but the same character count as the
/// original, so match offsets convert directly into original-line
/// columns.
pub struct LineContext<'a> {
    /// 1-based line number.
    pub number: usize,
    /// The original line.
    pub raw: &'a str,
    /// The original line with inline code spans replaced by spaces.
    pub sanitized: String,
    raw_chars: Vec<char>,
}

impl<'a> LineContext<'a> {
    /// Prepares a line for checking.
    pub fn new(number: usize, raw: &'a str) -> Self {
        Self {
            number,
            raw,
            sanitized: mask_inline_code(raw),
            raw_chars: raw.chars().collect(),
        }
    }

    /// Converts a byte offset in the sanitized text into a 1-based column.
    pub fn column_at(&self, byte_offset: usize) -> usize {
        self.sanitized[..byte_offset].chars().count() + 1
    }

    /// Returns `len` characters of the original line starting at `column`.
    pub fn original_at(&self, column: usize, len: usize) -> String {
        self.raw_chars.iter().skip(column - 1).take(len).collect()
    }

    /// Returns whether any Chinese character survives sanitization.
    pub fn has_cjk(&self) -> bool {
        self.sanitized.chars().any(is_cjk)
    }

    /// Creates an error-level issue anchored to this line.
    pub fn issue(&self, rule: RuleId, column: usize, message: impl Into<String>) -> Issue {
        Issue::new(rule, self.number, column, message).with_context(self.raw.trim())
    }
}

/// A detector rule.
///
/// Implementations are stateless and total: any input line produces zero
/// or more issues, never an error.
pub trait Rule: Send + Sync {
    /// The identifier this rule reports under.
    fn id(&self) -> RuleId;

    /// Appends issues for every confirmed, non-excluded match on `line`.
    fn check(&self, line: &LineContext<'_>, issues: &mut Vec<Issue>);
}

/// Returns the nine detectors in catalogue order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(MissingSpaceCnEn),
        Box::new(MissingSpaceCnNum),
        Box::new(HalfwidthPunctuation),
        Box::new(StraightQuotes),
        Box::new(WrongEllipsis),
        Box::new(WrongDash),
        Box::new(FullwidthColonInTime),
        Box::new(ExtraSpaceInBrackets),
        Box::new(UnformattedLargeNumber),
    ]
}

#[cfg(test)]
pub(crate) fn run_rule(rule: &dyn Rule, line: &str) -> Vec<Issue> {
    let ctx = LineContext::new(1, line);
    let mut issues = Vec::new();
    rule.check(&ctx, &mut issues);
    issues
}
