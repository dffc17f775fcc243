use crate::parser::{ErrorContext, ParseError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

/// Renders a two column layout: a fixed width left column, and a middle column which wraps onto subsequent lines.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    padding: usize,
    left: usize,
    middle: usize,
}

impl ColumnRenderer {
    /// Produce a renderer based off the provided widths.
    /// This renderer will use a heuristic to chose the middle width.
    pub(crate) fn guided(padding: usize, left: usize, middle: usize, total_width: usize) -> Self {
        let non_middle = left + padding;
        let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;
        let guided_middle = std::cmp::max(middle, MINIMUM_MIDDLE_WIDTH);

        if guided_middle + non_middle <= target_total_width {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} and middle fit within the target total {target_total_width}.  Selecting middle: {guided_middle}.");
            }

            Self::new(padding, left, guided_middle)
        } else if non_middle < total_width {
            let calculated_middle = std::cmp::max(total_width - non_middle, MINIMUM_MIDDLE_WIDTH);
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} fit within the total {total_width}.  Selecting middle: {calculated_middle}.");
            }

            Self::new(padding, left, calculated_middle)
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} do not fit within the total {total_width}.  Selecting middle: {MINIMUM_MIDDLE_WIDTH}.");
            }

            Self::new(padding, left, MINIMUM_MIDDLE_WIDTH)
        }
    }

    /// Produce a renderer based off the provided widths.
    pub(crate) fn new(padding: usize, left: usize, middle: usize) -> Self {
        // middle must be at least 2 (so we can hyphenate)
        assert!(middle >= 2);
        Self {
            padding,
            left,
            middle,
        }
    }

    pub(crate) fn render(&self, indent: usize, left: &str, middle: &str) -> Vec<String> {
        let padding = format!("{:width$}", "", width = self.padding);
        let left_column_width = self.left;
        let middle_column_width = std::cmp::max(self.middle.saturating_sub(indent), 2);
        let mut out = Vec::default();

        for (i, part) in chunk(middle, middle_column_width).iter().enumerate() {
            let column = if i == 0 { left } else { "" };
            out.push(format!(
                "{:indent$}{:left_column_width$}{padding}{part}",
                "", column
            ));
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{left}", ""));
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while left + width < characters.len() {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

/// The seam between the command parser and the process' output streams.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn column_renderer_simple() {
        let cr = ColumnRenderer::new(4, 5, 23);

        assert_eq!(
            cr.render(0, "abc", "something"),
            vec!["abc      something".to_string()]
        );
        assert_eq!(
            cr.render(0, "abc", "  something  "),
            vec!["abc      something".to_string()]
        );
        assert_eq!(
            cr.render(0, "abc12", "something pieces full"),
            vec!["abc12    something pieces full".to_string()]
        );
        assert_eq!(
            cr.render(0, "abc", "something pieces fullest more stuff extra     "),
            vec![
                "abc      something pieces".to_string(),
                "         fullest more stuff".to_string(),
                "         extra".to_string(),
            ]
        );
    }

    #[test]
    fn column_renderer_middle_empty() {
        let cr = ColumnRenderer::new(4, 5, 23);
        assert_eq!(cr.render(0, "abc", ""), vec!["abc".to_string()]);
        assert_eq!(cr.render(2, "abc", "   "), vec!["  abc".to_string()]);
    }

    #[test]
    fn column_renderer_middle_overflow() {
        let cr = ColumnRenderer::new(2, 3, 5);
        assert_eq!(
            cr.render(0, "abc", "abcdefghijk"),
            vec![
                "abc  abcd-".to_string(),
                "     efgh-".to_string(),
                "     ijk".to_string(),
            ]
        );
    }

    #[test]
    fn column_renderer_left_overflow() {
        let cr = ColumnRenderer::new(2, 3, 10);
        assert_eq!(
            cr.render(0, "abcdef", "xyz"),
            vec!["abcdef  xyz".to_string()]
        );
    }

    #[test]
    fn column_renderer_indent() {
        let cr = ColumnRenderer::new(2, 5, 10);
        assert_eq!(
            cr.render(1, "abc", "one two three"),
            vec![
                " abc    one two".to_string(),
                "        three".to_string(),
            ]
        );
    }

    #[rstest]
    #[case(1000, 50)]
    #[case(100, 50)]
    #[case(40, 30)]
    #[case(20, MINIMUM_MIDDLE_WIDTH)]
    #[case(0, MINIMUM_MIDDLE_WIDTH)]
    fn column_renderer_guided(#[case] total_width: usize, #[case] expected: usize) {
        let cr = ColumnRenderer::guided(2, 8, 50, total_width);
        assert_eq!(cr.middle, expected);
    }

    #[rstest]
    #[case("", 5, vec![])]
    #[case("a b c", 5, vec!["a b c"])]
    #[case("a b c d", 5, vec!["a b c", "d"])]
    #[case("abcdefghij", 4, vec!["abc-", "def-", "ghij"])]
    #[case("ab abcdefghij", 4, vec!["ab", "abc-", "def-", "ghij"])]
    #[case("äöüäöü", 4, vec!["äöü-", "äöü"])]
    fn chunk_cases(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(chunk(paragraph, width), expected);
    }
}
