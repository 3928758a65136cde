//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use jokepager::AppError;
use jokepager::jokes::{PageResult, sanitize_text};

/// Writes one page of jokes to stdout.
///
/// # Errors
///
/// Returns [`AppError::Io`] if stdout cannot be written.
pub fn write_page(page: &PageResult) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    write_page_to(&mut stdout, page)
}

/// Writes one page of jokes to the given writer.
///
/// The page position comes first, then one paragraph per joke. Terminal
/// control sequences in joke text are dropped.
///
/// # Errors
///
/// Returns [`AppError::Io`] if the writer fails.
pub fn write_page_to<W: Write>(writer: &mut W, page: &PageResult) -> Result<(), AppError> {
    writeln!(
        writer,
        "Page {} of {}",
        page.current_page(),
        page.total_pages()
    )
    .map_err(|e| io_error(&e))?;

    if page.items().is_empty() {
        writeln!(writer).map_err(|e| io_error(&e))?;
        writeln!(writer, "No jokes on this page.").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for joke in page.items() {
        writeln!(writer).map_err(|e| io_error(&e))?;
        writeln!(writer, "{}", sanitize_text(&joke.text)).map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Converts an I/O error to an [`AppError::Io`].
pub(crate) fn io_error(error: &io::Error) -> AppError {
    AppError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use jokepager::jokes::{Joke, PageInfo, PageNumber, PageResult};

    use super::write_page_to;

    fn render(page: &PageResult) -> String {
        let mut buffer = Vec::new();
        write_page_to(&mut buffer, page).expect("should write page");
        String::from_utf8(buffer).expect("output should be valid UTF-8")
    }

    #[test]
    fn write_page_to_lists_jokes_after_position() {
        let page = PageResult::new(
            PageInfo::new(PageNumber::new(2).expect("non-zero"), 7),
            vec![
                Joke {
                    id: "a".to_owned(),
                    text: "What's brown and sticky? A stick.".to_owned(),
                },
                Joke {
                    id: "b".to_owned(),
                    text: "I only know 25 letters of the alphabet. I don't know y.".to_owned(),
                },
            ],
        );

        let output = render(&page);

        assert_eq!(
            output,
            "Page 2 of 7\n\nWhat's brown and sticky? A stick.\n\nI only know 25 letters of the alphabet. I don't know y.\n"
        );
    }

    #[test]
    fn write_page_to_drops_terminal_escapes() {
        let page = PageResult::new(
            PageInfo::new(PageNumber::FIRST, 1),
            vec![Joke {
                id: "x".to_owned(),
                text: "hi \x1b[2J\x1b]0;pwned\x07there".to_owned(),
            }],
        );

        let output = render(&page);

        assert_eq!(output, "Page 1 of 1\n\nhi there\n");
    }

    #[test]
    fn write_page_to_marks_empty_pages() {
        let page = PageResult::new(PageInfo::new(PageNumber::FIRST, 0), Vec::new());

        let output = render(&page);

        assert!(output.starts_with("Page 1 of 0\n"), "missing position: {output}");
        assert!(
            output.contains("No jokes on this page."),
            "missing empty marker: {output}"
        );
    }
}
