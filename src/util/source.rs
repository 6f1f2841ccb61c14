/// Converts a byte offset into a 1-based `(line, column)` pair.
///
/// Columns count characters, not bytes. Offsets past the end of the source
/// resolve to the position just after the last character.
///
/// ## Example
/// ```
/// use seta::util::source::line_col;
///
/// let source = "val x = 1\nval y = x +";
///
/// assert_eq!(line_col(source, 0), (1, 1));
/// assert_eq!(line_col(source, 14), (2, 5));
/// ```
#[must_use]
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;

    for (index, ch) in source.char_indices() {
        if index >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}

/// Renders an error message prefixed with its location, when it has one.
///
/// ## Example
/// ```
/// use seta::util::source::describe;
///
/// let text = describe("a\nbc", Some(3), "Unknown variable 'c'.");
/// assert_eq!(text, "Error at line 2, column 2: Unknown variable 'c'.");
///
/// let text = describe("a", None, "Assertion failed.");
/// assert_eq!(text, "Error: Assertion failed.");
/// ```
#[must_use]
pub fn describe(source: &str, position: Option<usize>, message: &str) -> String {
    match position {
        Some(offset) => {
            let (line, column) = line_col(source, offset);
            format!("Error at line {line}, column {column}: {message}")
        },
        None => format!("Error: {message}"),
    }
}
