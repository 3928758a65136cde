//! Word wrapping for terminal display.
//!
//! Widths are measured in terminal columns with `unicode-width`, so wide
//! characters such as CJK text and emoji wrap correctly.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps text at word boundaries so no line exceeds `max_width` columns.
///
/// Runs of whitespace collapse to a single space. Words wider than
/// `max_width` are hard-wrapped. Paragraph breaks (`\n`) are preserved as
/// line breaks; blank input lines become empty output lines.
///
/// A `max_width` of zero disables wrapping.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return text.lines().map(str::to_owned).collect();
    }

    text.lines()
        .flat_map(|line| wrap_line(line, max_width))
        .collect()
}

fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    let mut wrapper = LineWrapper::new(max_width);
    for word in line.split_whitespace() {
        wrapper.push_word(word);
    }
    wrapper.finish()
}

/// Accumulates words into lines of bounded display width.
struct LineWrapper {
    max_width: usize,
    lines: Vec<String>,
    current: String,
    current_width: usize,
}

impl LineWrapper {
    const fn new(max_width: usize) -> Self {
        Self {
            max_width,
            lines: Vec::new(),
            current: String::new(),
            current_width: 0,
        }
    }

    fn push_word(&mut self, word: &str) {
        let word_width = UnicodeWidthStr::width(word);

        if word_width > self.max_width {
            self.push_long_word(word);
            return;
        }

        let separator = usize::from(!self.current.is_empty());
        if self.current_width + separator + word_width > self.max_width {
            self.break_line();
        } else if separator == 1 {
            self.current.push(' ');
            self.current_width += 1;
        }

        self.current.push_str(word);
        self.current_width += word_width;
    }

    /// Hard-wraps a word that cannot fit on any line.
    fn push_long_word(&mut self, word: &str) {
        if !self.current.is_empty() {
            self.break_line();
        }

        for ch in word.chars() {
            let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if self.current_width + char_width > self.max_width && !self.current.is_empty() {
                self.break_line();
            }
            self.current.push(ch);
            self.current_width += char_width;
        }
    }

    fn break_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.current_width = 0;
    }

    fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() || self.lines.is_empty() {
            self.lines.push(self.current);
        }
        self.lines
    }
}
