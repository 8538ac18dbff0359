//! Word chunking and right-edge alignment helpers.

/// Lines of a title, each joining up to `words_per_line` space-separated words.
///
/// Produced lazily and consumed once.
pub struct TitleLines<'a> {
    words: std::str::Split<'a, char>,
    words_per_line: usize,
}

/// Split `title` into lines of at most `words_per_line` words.
///
/// Yields `ceil(word_count / words_per_line)` lines. A chunk size of zero is
/// treated as one.
pub fn title_lines(title: &str, words_per_line: usize) -> TitleLines<'_> {
    TitleLines {
        words: title.split(' '),
        words_per_line: words_per_line.max(1),
    }
}

impl Iterator for TitleLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut line: Option<String> = None;
        for word in self.words.by_ref().take(self.words_per_line) {
            match line.as_mut() {
                Some(line) => {
                    line.push(' ');
                    line.push_str(word);
                }
                None => line = Some(word.to_string()),
            }
        }
        line
    }
}

/// Left x at which text of `width` ends exactly on `right_margin`.
pub fn right_align(right_margin: f32, width: f32) -> f32 {
    right_margin - width
}

/// Number of decimal digits in `value`.
pub fn digit_count(value: u32) -> u32 {
    value.checked_ilog10().unwrap_or(0) + 1
}

/// Fixed shift for labels holding `level`: `per_digit` for every digit past the first.
pub fn level_digit_offset(level: u32, per_digit: f32) -> f32 {
    per_digit * (digit_count(level) - 1) as f32
}

/// Truncate to `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_seven_words_chunk_into_three_lines() {
        let lines: Vec<_> = title_lines("one two three four five six seven", 3).collect();
        assert_eq!(lines, ["one two three", "four five six", "seven"]);
        let sizes: Vec<_> = lines.iter().map(|l| l.split(' ').count()).collect();
        assert_eq!(sizes, [3, 3, 1]);
    }

    #[rstest]
    #[case("Incessant Rain", 3, 1)]
    #[case("Before the Tutorial Mission Starts", 3, 2)]
    #[case("Night on the Milky Way", 3, 2)]
    #[case("a b c d e f", 3, 2)]
    #[case("a b c d e f g h i j", 2, 5)]
    fn test_line_count_is_ceil(#[case] title: &str, #[case] k: usize, #[case] lines: usize) {
        assert_eq!(title_lines(title, k).count(), lines);
    }

    #[test]
    fn test_lines_are_consumed_once() {
        let mut lines = title_lines("a b", 3);
        assert_eq!(lines.next().as_deref(), Some("a b"));
        assert_eq!(lines.next(), None);
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_zero_chunk_size_acts_as_one() {
        assert_eq!(title_lines("x y", 0).count(), 2);
    }

    #[test]
    fn test_right_align() {
        assert_eq!(right_align(638.0, 48.5), 589.5);
        assert_eq!(right_align(655.0, 0.0), 655.0);
    }

    #[rstest]
    #[case(1, 0.0)]
    #[case(9, 0.0)]
    #[case(10, 10.0)]
    #[case(15, 10.0)]
    #[case(100, 20.0)]
    #[case(0, 0.0)]
    fn test_level_digit_offset(#[case] level: u32, #[case] expected: f32) {
        assert_eq!(level_digit_offset(level, 10.0), expected);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 20), "short");
        assert_eq!(truncate_label("abcdefghijklmnopqrstuvwxyz", 20), "abcdefghijklmnopqrst...");
        assert_eq!(truncate_label("ééééé", 3), "ééé...");
        assert_eq!(truncate_label("exactly-twenty-chars", 20), "exactly-twenty-chars");
    }
}
