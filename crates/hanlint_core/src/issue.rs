//! Issue types for check results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level for issues.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - fails the check.
    #[default]
    Error,
    /// Warning - reported but does not fail the check.
    Warning,
}

/// Identifier of a built-in detector rule.
///
/// The set is closed; identifiers serialize as the kebab-case strings
/// used in reports and in the `rules` table of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// Chinese and Latin text without a separating space.
    MissingSpaceCnEn,
    /// Chinese text and digits without a separating space.
    MissingSpaceCnNum,
    /// Half-width punctuation following Chinese text.
    HalfwidthPunctuation,
    /// Straight double quotes in Chinese prose.
    StraightQuotes,
    /// ASCII `...` instead of the Chinese ellipsis.
    WrongEllipsis,
    /// ASCII `--` instead of the Chinese dash.
    WrongDash,
    /// Full-width colon between digits in time notation.
    FullwidthColonInTime,
    /// Extra whitespace inside book-title or full-width brackets.
    ExtraSpaceInBrackets,
    /// Large number without thousands separators.
    UnformattedLargeNumber,
}

impl RuleId {
    /// All rules in catalogue order. This is the order detectors run in.
    pub const ALL: [RuleId; 9] = [
        RuleId::MissingSpaceCnEn,
        RuleId::MissingSpaceCnNum,
        RuleId::HalfwidthPunctuation,
        RuleId::StraightQuotes,
        RuleId::WrongEllipsis,
        RuleId::WrongDash,
        RuleId::FullwidthColonInTime,
        RuleId::ExtraSpaceInBrackets,
        RuleId::UnformattedLargeNumber,
    ];

    /// Returns the kebab-case identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::MissingSpaceCnEn => "missing-space-cn-en",
            RuleId::MissingSpaceCnNum => "missing-space-cn-num",
            RuleId::HalfwidthPunctuation => "halfwidth-punctuation",
            RuleId::StraightQuotes => "straight-quotes",
            RuleId::WrongEllipsis => "wrong-ellipsis",
            RuleId::WrongDash => "wrong-dash",
            RuleId::FullwidthColonInTime => "fullwidth-colon-in-time",
            RuleId::ExtraSpaceInBrackets => "extra-space-in-brackets",
            RuleId::UnformattedLargeNumber => "unformatted-large-number",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported style violation.
///
/// Immutable after creation; built by a detector the moment a match is
/// confirmed and not excluded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Issue {
    /// 1-based line number in the source file.
    pub line: usize,

    /// 1-based character offset into the *original* line.
    ///
    /// Matches are found in the sanitized copy of the line, but the copy
    /// is length-preserving in characters, so offsets carry over.
    pub column: usize,

    /// The rule that produced this issue.
    pub rule: RuleId,

    /// Human-readable description.
    pub message: String,

    /// The trimmed original line, for display.
    pub context: String,

    /// Optional human-readable fix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Issue {
    /// Creates a new error-level issue.
    pub fn new(rule: RuleId, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            rule,
            message: message.into(),
            context: String::new(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Sets the display context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Sets a suggested fix.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_new() {
        let issue = Issue::new(RuleId::StraightQuotes, 3, 7, "straight double quote");

        assert_eq!(issue.line, 3);
        assert_eq!(issue.column, 7);
        assert_eq!(issue.rule, RuleId::StraightQuotes);
        assert_eq!(issue.severity, Severity::Error);
        assert!(issue.suggestion.is_none());
    }

    #[test]
    fn test_issue_builder_chain() {
        let issue = Issue::new(RuleId::UnformattedLargeNumber, 1, 1, "large number")
            .with_context("12345")
            .with_suggestion("12,345")
            .with_severity(Severity::Warning);

        assert_eq!(issue.context, "12345");
        assert_eq!(issue.suggestion.as_deref(), Some("12,345"));
        assert_eq!(issue.severity, Severity::Warning);
    }

    #[test]
    fn test_severity_default() {
        assert_eq!(Severity::default(), Severity::Error);
    }

    #[test]
    fn test_rule_id_display_matches_serde() {
        for rule in RuleId::ALL {
            let json = serde_json::to_string(&rule).unwrap();
            assert_eq!(json, format!("\"{}\"", rule));
        }
    }

    #[test]
    fn test_rule_id_roundtrip() {
        let rule: RuleId = serde_json::from_str("\"missing-space-cn-en\"").unwrap();
        assert_eq!(rule, RuleId::MissingSpaceCnEn);
        assert_eq!(rule.as_str(), "missing-space-cn-en");
    }

    #[test]
    fn test_issue_serialization_skips_empty_suggestion() {
        let issue = Issue::new(RuleId::WrongDash, 2, 5, "msg");
        let json = serde_json::to_string(&issue).unwrap();

        assert!(json.contains("wrong-dash"));
        assert!(!json.contains("suggestion"));
    }
}
