//! Output normalization for test comparisons.

/// Removes trailing whitespace from every line.
///
/// Blank separator lines and indented empty lines compare equal after this,
/// as do outputs that differ only in a final newline.
///
/// # Example
///
/// ```
/// use draft_renderers_dev::output::remove_lines_trailing_whitespace;
///
/// let normalized = remove_lines_trailing_whitespace("1. one  \n    \nafter\n");
/// assert_eq!(normalized, "1. one\n\nafter");
/// ```
#[must_use]
pub fn remove_lines_trailing_whitespace(output: &str) -> String {
    output
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
