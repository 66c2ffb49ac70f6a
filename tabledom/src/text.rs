use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// A cell count as a layout coordinate, saturating at `u16::MAX`.
pub fn to_cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Widest line of `s`, splitting on explicit newlines only.
pub fn max_line_width(s: &str) -> usize {
    s.split('\n').map(display_width).max().unwrap_or(0)
}

/// Number of lines `s` occupies when word-wrapped to `max_width` cells.
/// Empty text still occupies one line.
pub fn line_count(s: &str, max_width: usize) -> usize {
    wrap_words(s, max_width.max(1)).len().max(1)
}

pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                // Too long for any line: flush, then hard-break the word
                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                }
                let mut broken = wrap_chars(word, max_width);
                let last = broken.pop().unwrap_or_default();
                lines.extend(broken);
                current_width = display_width(&last);
                current_line = last;
                continue;
            }

            let space_width = usize::from(!current_line.is_empty());
            if current_width + space_width + word_width > max_width {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            } else if space_width == 1 {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_width;
        }

        lines.push(current_line);
    }

    lines
}

pub fn wrap_chars(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if ch_width > 0 && current_width + ch_width > max_width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }
        current_line.push(ch);
        current_width += ch_width;
    }

    lines.push(current_line);
    lines
}
