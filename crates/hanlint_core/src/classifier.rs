//! Line classification.
//!
//! Separates checkable prose from fenced code blocks and (optionally)
//! table rows before any detector runs.

/// One classified source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// 1-based line number.
    pub number: usize,
    /// The raw line content, without the trailing newline.
    pub content: &'a str,
    /// Whether detectors must skip this line.
    pub skip: bool,
}

/// Iterator yielding one [`ClassifiedLine`] per source line.
///
/// Holds the single piece of traversal state: whether the cursor is
/// currently inside a fenced code block. The state is reset on
/// construction; the classifier has no memory across invocations.
pub struct LineClassifier<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    skip_tables: bool,
    in_code_block: bool,
}

impl<'a> LineClassifier<'a> {
    /// Creates a classifier over the full text of one file.
    pub fn new(text: &'a str, skip_tables: bool) -> Self {
        Self {
            lines: text.lines().enumerate(),
            skip_tables,
            in_code_block: false,
        }
    }
}

impl<'a> Iterator for LineClassifier<'a> {
    type Item = ClassifiedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, content) = self.lines.next()?;
        let trimmed = content.trim();

        let skip = if trimmed.starts_with("```") {
            // The fence delimiter line itself is never content-checked.
            self.in_code_block = !self.in_code_block;
            true
        } else if self.skip_tables && trimmed.starts_with('|') {
            true
        } else {
            self.in_code_block
        };

        Some(ClassifiedLine {
            number: idx + 1,
            content,
            skip,
        })
    }
}
