//! Length-preserving masking of inline code spans and links.
//!
//! Every mask replaces a span with one space per character, so character
//! offsets in the masked text stay valid for the original line. Reported
//! columns depend on this; masking must never remove or insert text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// Longest delimiter first: a double-backtick span may contain a single
// backtick, so it must be blanked before the single-backtick pass runs.
static DOUBLE_BACKTICK_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"``.+?``").expect("invalid double-backtick pattern"));

static SINGLE_BACKTICK_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("invalid single-backtick pattern"));

static INLINE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\([^)]*\)").expect("invalid link pattern"));

/// Replaces every inline code span (delimiters included) with spaces.
///
/// Dangling delimiters with no matching close are left untouched; they
/// are not spans. The result has the same character count as the input.
pub fn mask_inline_code(line: &str) -> String {
    let masked = mask_with_spaces(line, &DOUBLE_BACKTICK_SPAN);
    mask_with_spaces(&masked, &SINGLE_BACKTICK_SPAN)
}

/// Replaces every inline link construct `[text](url "title")` with spaces.
///
/// Used by the straight-quotes detector so that quotes inside link titles
/// are not flagged.
pub fn mask_links(line: &str) -> String {
    mask_with_spaces(line, &INLINE_LINK)
}

fn mask_with_spaces(text: &str, pattern: &Regex) -> String {
    pattern
        .replace_all(text, |caps: &Captures| " ".repeat(caps[0].chars().count()))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_backtick_span_becomes_spaces() {
        assert_eq!(mask_inline_code("运行`cargo build`命令"), "运行             命令");
    }

    #[test]
    fn test_double_backtick_span_with_inner_backtick() {
        let masked = mask_inline_code("见``a`b``处");
        assert_eq!(masked, format!("见{}处", " ".repeat(7)));
    }

    #[test]
    fn test_char_count_is_preserved() {
        let cases = [
            "运行`cargo build`命令",
            "``含`号``",
            "`中文代码`",
            "no code at all",
            "`dangling",
            "文字``中间`有`文字``结尾",
        ];
        for line in cases {
            let masked = mask_inline_code(line);
            assert_eq!(
                masked.chars().count(),
                line.chars().count(),
                "length changed for {:?}",
                line
            );
        }
    }

    #[test]
    fn test_pure_span_line_is_all_spaces() {
        let masked = mask_inline_code("`只有代码`");
        assert!(masked.chars().all(|c| c == ' '));
        assert_eq!(masked.chars().count(), 6);
    }

    #[test]
    fn test_dangling_delimiter_untouched() {
        assert_eq!(mask_inline_code("一个`孤立的反引号"), "一个`孤立的反引号");
        assert_eq!(mask_inline_code("``没有闭合"), "``没有闭合");
    }

    #[test]
    fn test_text_outside_spans_is_verbatim() {
        let masked = mask_inline_code("前缀`code`后缀");
        assert!(masked.starts_with("前缀"));
        assert!(masked.ends_with("后缀"));
    }

    #[test]
    fn test_multiple_spans_on_one_line() {
        let masked = mask_inline_code("用`a`和`b`两个");
        assert!(!masked.contains('a'));
        assert!(!masked.contains('b'));
        assert!(masked.contains('用'));
        assert!(masked.contains('和'));
    }

    #[test]
    fn test_mask_links_blanks_whole_construct() {
        let masked = mask_links("点击[这里](https://x.com \"标题\")查看");
        assert!(!masked.contains('"'));
        assert!(masked.contains("点击"));
        assert!(masked.contains("查看"));
        assert_eq!(
            masked.chars().count(),
            "点击[这里](https://x.com \"标题\")查看".chars().count()
        );
    }

    #[test]
    fn test_mask_links_leaves_plain_text() {
        assert_eq!(mask_links("没有链接的行"), "没有链接的行");
    }
}
