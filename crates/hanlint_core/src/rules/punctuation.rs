//! Punctuation rules: half-width marks, quotes, ellipses, dashes,
//! time colons, and bracket spacing.

use std::sync::LazyLock;

use regex::Regex;

use super::{LineContext, Rule};
use crate::issue::{Issue, RuleId};
use crate::sanitize::mask_links;

static CJK_THEN_HALFWIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{4e00}-\x{9fff}][,.?!:]").expect("invalid pattern"));

static ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{3}").expect("invalid pattern"));

static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("invalid pattern"));

static TIME_WITH_FULLWIDTH_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+：[0-9]+").expect("invalid pattern"));

fn fullwidth_equivalent(punct: char) -> char {
    match punct {
        ',' => '，',
        '.' => '。',
        '?' => '？',
        '!' => '！',
        ':' => '：',
        other => other,
    }
}

/// Flags half-width `,.?!:` directly after a Chinese character.
pub struct HalfwidthPunctuation;

impl Rule for HalfwidthPunctuation {
    fn id(&self) -> RuleId {
        RuleId::HalfwidthPunctuation
    }

    fn check(&self, line: &LineContext<'_>, issues: &mut Vec<Issue>) {
        for m in CJK_THEN_HALFWIDTH.find_iter(&line.sanitized) {
            let punct = m.as_str().chars().nth(1).unwrap_or_default();
            let following = line.sanitized[m.end()..].chars().next();

            // Decimal points and file extensions read as half-width on
            // purpose; so do time-like "9:05" colons.
            if punct == '.' && following.is_some_and(|c| c.is_ascii_alphanumeric()) {
                continue;
            }
            if punct == ':' && following.is_some_and(|c| c.is_ascii_digit()) {
                continue;
            }

            let column = line.column_at(m.start());
            let pair = line.original_at(column, 2);
            issues.push(
                line.issue(
                    self.id(),
                    column,
                    format!("half-width punctuation after Chinese text: \"{}\"", pair),
                )
                .with_suggestion(format!(
                    "{}{}",
                    pair.chars().next().unwrap_or_default(),
                    fullwidth_equivalent(punct)
                )),
            );
        }
    }
}

/// Flags straight double quotes outside Markdown link titles.
///
/// Reports once per line, at the first quote that is not link syntax.
pub struct StraightQuotes;

impl Rule for StraightQuotes {
    fn id(&self) -> RuleId {
        RuleId::StraightQuotes
    }

    fn check(&self, line: &LineContext<'_>, issues: &mut Vec<Issue>) {
        // Quotes inside [text](url "title") are link syntax, not prose.
        let stripped = mask_links(&line.sanitized);
        if let Some(idx) = stripped.chars().position(|c| c == '"') {
            issues.push(
                line.issue(self.id(), idx + 1, "straight double quote in Chinese prose")
                    .with_suggestion("use curly quotes \u{201c}\u{201d}"),
            );
        }
    }
}

/// Flags ASCII `...` on lines containing Chinese text.
pub struct WrongEllipsis;

impl Rule for WrongEllipsis {
    fn id(&self) -> RuleId {
        RuleId::WrongEllipsis
    }

    fn check(&self, line: &LineContext<'_>, issues: &mut Vec<Issue>) {
        if !line.has_cjk() {
            return;
        }
        for m in ELLIPSIS.find_iter(&line.sanitized) {
            let column = line.column_at(m.start());
            issues.push(
                line.issue(self.id(), column, "ASCII ellipsis \"...\" in Chinese text")
                    .with_suggestion("……"),
            );
        }
    }
}

/// Flags exactly-two-hyphen runs on lines containing Chinese text.
pub struct WrongDash;

impl Rule for WrongDash {
    fn id(&self) -> RuleId {
        RuleId::WrongDash
    }

    fn check(&self, line: &LineContext<'_>, issues: &mut Vec<Issue>) {
        if !line.has_cjk() {
            return;
        }
        for m in HYPHEN_RUN.find_iter(&line.sanitized) {
            // Three-or-more hyphens are horizontal rules or separators.
            if m.as_str().len() != 2 {
                continue;
            }
            let column = line.column_at(m.start());
            issues.push(
                line.issue(self.id(), column, "ASCII dash \"--\" in Chinese text")
                    .with_suggestion("——"),
            );
        }
    }
}

/// Flags a full-width colon between digits, as in `9：05`.
pub struct FullwidthColonInTime;

impl Rule for FullwidthColonInTime {
    fn id(&self) -> RuleId {
        RuleId::FullwidthColonInTime
    }

    fn check(&self, line: &LineContext<'_>, issues: &mut Vec<Issue>) {
        for m in TIME_WITH_FULLWIDTH_COLON.find_iter(&line.sanitized) {
            let column = line.column_at(m.start());
            let matched = m.as_str();
            issues.push(
                line.issue(
                    self.id(),
                    column,
                    format!("full-width colon in time notation: \"{}\"", matched),
                )
                .with_suggestion(matched.replace('：', ":")),
            );
        }
    }
}

/// Flags whitespace directly inside `《》` or `（）` brackets.
///
/// Reports at most one occurrence per bracket pattern per line.
pub struct ExtraSpaceInBrackets;

static BRACKET_PATTERNS: LazyLock<[(Regex, &'static str); 4]> = LazyLock::new(|| {
    [
        (
            Regex::new(r"《\s").expect("invalid pattern"),
            "extra space after \u{300a}",
        ),
        (
            Regex::new(r"\s》").expect("invalid pattern"),
            "extra space before \u{300b}",
        ),
        (
            Regex::new(r"（\s").expect("invalid pattern"),
            "extra space after \u{ff08}",
        ),
        (
            Regex::new(r"\s）").expect("invalid pattern"),
            "extra space before \u{ff09}",
        ),
    ]
});

impl Rule for ExtraSpaceInBrackets {
    fn id(&self) -> RuleId {
        RuleId::ExtraSpaceInBrackets
    }

    fn check(&self, line: &LineContext<'_>, issues: &mut Vec<Issue>) {
        for (pattern, message) in BRACKET_PATTERNS.iter() {
            if let Some(m) = pattern.find(&line.sanitized) {
                let column = line.column_at(m.start());
                issues.push(
                    line.issue(self.id(), column, *message)
                        .with_suggestion("remove the space inside the bracket"),
                );
            }
        }
    }
}
