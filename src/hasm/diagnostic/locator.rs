//! Finding the source line around an offset, for error rendering.

/// Returns the text of the line containing `offset` and the column of
/// `offset` within it.
///
/// The line spans from just after the previous `'\n'` (or the start of
/// the text) to just before the next one (or the end of the text). The
/// column is a byte distance from the start of that line.
///
/// # Panics
///
/// If `offset` is not smaller than the length of `source`, or does not
/// lie on a character boundary. Both are bugs of the caller.
#[must_use]
pub fn locate(source: &str, offset: usize) -> (&str, usize) {
    assert!(
        offset < source.len(),
        "offset {offset} outside of source of length {}",
        source.len()
    );
    #[expect(clippy::panic, reason = "explicitly warned in docs")]
    let (Some(before), Some(after)) = (source.get(..offset), source.get(offset..)) else {
        panic!("offset {offset} is not on a character boundary");
    };
    let start = before.rfind('\n').map_or(0, |i| i.saturating_add(1));
    let line_before = before.get(start..).unwrap_or_default();
    let line_after = after.split('\n').next().unwrap_or_default();
    let line = source
        .get(start..offset.saturating_add(line_after.len()))
        .unwrap_or_default();
    (line, line_before.len())
}

/// Renders the two context lines shown above a diagnostic: the
/// offending line, then a caret under the offending column.
#[must_use]
pub fn render(source: &str, offset: usize) -> (String, String) {
    let (line, col) = locate(source, offset);
    // Pad by characters, not bytes, so the caret lines up on screen.
    let width = line.get(..col).unwrap_or_default().chars().count();
    let line = line.strip_suffix('\r').unwrap_or(line);
    (line.to_owned(), format!("{}^", " ".repeat(width)))
}
