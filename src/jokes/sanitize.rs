//! Removal of terminal control sequences from remotely supplied text.
//!
//! Joke text is written straight into the terminal, so escape sequences in
//! a response could clear the screen or retitle the window. Whole sequences
//! are dropped, not just the ESC byte, so no `[2J` residue is left behind.

/// Returns `text` without escape sequences or control characters.
///
/// Tabs, newlines, and carriage returns become spaces so word wrapping
/// still breaks there.
///
/// # Example
///
/// ```
/// use jokepager::jokes::sanitize_text;
///
/// assert_eq!(sanitize_text("hi \x1b[2Jthere"), "hi there");
/// assert_eq!(sanitize_text("line one\nline two"), "line one line two");
/// ```
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut state = EscapeState::Text;

    for ch in text.chars() {
        state = state.advance(ch, &mut output);
    }

    output
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EscapeState {
    Text,
    /// After ESC (and any intermediate bytes).
    Escape,
    /// Inside `ESC [` until a final byte.
    Csi,
    /// Inside an OSC, DCS, or similar string until BEL or ST.
    ControlString,
    /// ESC seen inside a string; `\` completes ST.
    StringEscape,
}

impl EscapeState {
    fn advance(self, ch: char, output: &mut String) -> Self {
        match self {
            Self::Text => Self::text(ch, output),
            Self::Escape => match ch {
                '[' => Self::Csi,
                ']' | 'P' | 'X' | '^' | '_' => Self::ControlString,
                ' '..='/' => Self::Escape,
                _ => Self::Text,
            },
            Self::Csi if ('@'..='~').contains(&ch) => Self::Text,
            Self::Csi => Self::Csi,
            Self::ControlString => match ch {
                '\x07' => Self::Text,
                '\x1b' => Self::StringEscape,
                _ => Self::ControlString,
            },
            Self::StringEscape if ch == '\\' => Self::Text,
            Self::StringEscape => Self::ControlString,
        }
    }

    fn text(ch: char, output: &mut String) -> Self {
        if ch == '\x1b' {
            return Self::Escape;
        }
        if ch.is_control() {
            if ch.is_whitespace() {
                output.push(' ');
            }
        } else {
            output.push(ch);
        }
        Self::Text
    }
}
