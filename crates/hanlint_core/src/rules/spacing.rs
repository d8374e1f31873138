//! Spacing rules between Chinese text and Latin letters or digits.

use std::sync::LazyLock;

use regex::Regex;

use super::{LineContext, Rule};
use crate::issue::{Issue, RuleId};

// Two directed patterns per rule: a single alternation would consume the
// shared character and miss the overlapping pair in e.g. "中a中".
static CJK_THEN_LATIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{4e00}-\x{9fff}][A-Za-z]").expect("invalid pattern"));
static LATIN_THEN_CJK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][\x{4e00}-\x{9fff}]").expect("invalid pattern"));

static CJK_THEN_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{4e00}-\x{9fff}][0-9]").expect("invalid pattern"));
static DIGIT_THEN_CJK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9][\x{4e00}-\x{9fff}]").expect("invalid pattern"));

/// Measure-word suffixes that read as part of the number itself, so a
/// digit directly followed by one of them needs no separating space.
const UNIT_SUFFIXES: [char; 12] = [
    '万', '亿', '年', '月', '日', '时', '分', '秒', '点', '个', '百', '千',
];

fn spaced(pair: &str) -> String {
    let mut chars = pair.chars();
    let first = chars.next().unwrap_or_default();
    let second = chars.next().unwrap_or_default();
    format!("{} {}", first, second)
}

/// Flags a Chinese character directly adjacent to a Latin letter.
pub struct MissingSpaceCnEn;

impl Rule for MissingSpaceCnEn {
    fn id(&self) -> RuleId {
        RuleId::MissingSpaceCnEn
    }

    fn check(&self, line: &LineContext<'_>, issues: &mut Vec<Issue>) {
        for pattern in [&CJK_THEN_LATIN, &LATIN_THEN_CJK] {
            for m in pattern.find_iter(&line.sanitized) {
                let column = line.column_at(m.start());
                let pair = line.original_at(column, 2);
                issues.push(
                    line.issue(
                        self.id(),
                        column,
                        format!("missing space between Chinese and Latin text: \"{}\"", pair),
                    )
                    .with_suggestion(spaced(&pair)),
                );
            }
        }
    }
}

/// Flags a Chinese character directly adjacent to a digit, except for
/// digit-then-unit pairs like `2024年`.
pub struct MissingSpaceCnNum;

impl Rule for MissingSpaceCnNum {
    fn id(&self) -> RuleId {
        RuleId::MissingSpaceCnNum
    }

    fn check(&self, line: &LineContext<'_>, issues: &mut Vec<Issue>) {
        for m in CJK_THEN_DIGIT.find_iter(&line.sanitized) {
            let column = line.column_at(m.start());
            let pair = line.original_at(column, 2);
            issues.push(
                line.issue(
                    self.id(),
                    column,
                    format!("missing space between Chinese text and digit: \"{}\"", pair),
                )
                .with_suggestion(spaced(&pair)),
            );
        }

        for m in DIGIT_THEN_CJK.find_iter(&line.sanitized) {
            let suffix = m.as_str().chars().nth(1).unwrap_or_default();
            if UNIT_SUFFIXES.contains(&suffix) {
                continue;
            }
            let column = line.column_at(m.start());
            let pair = line.original_at(column, 2);
            issues.push(
                line.issue(
                    self.id(),
                    column,
                    format!("missing space between digit and Chinese text: \"{}\"", pair),
                )
                .with_suggestion(spaced(&pair)),
            );
        }
    }
}
