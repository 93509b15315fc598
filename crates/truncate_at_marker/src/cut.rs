// crates/truncate_at_marker/src/cut.rs

use std::borrow::Cow;

/// Returns the byte offset immediately after the first occurrence of `marker`
/// in `content`, or `None` if the marker does not occur.
///
/// The match is leftmost, case‑sensitive and exact. An empty marker matches at
/// offset 0; callers that must reject it do so before calling.
pub fn find_cut_index(content: &str, marker: &str) -> Option<usize> {
    content.find(marker).map(|start| start + marker.len())
}

/// Translates `\r\n` and lone `\r` line endings to `\n`.
///
/// Content is read as text with universal newlines, so a CRLF file comes out
/// of a truncation with plain `\n` endings throughout.
pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Cuts `content` right after the first occurrence of `marker`, trims trailing
/// whitespace from the kept prefix and appends exactly one newline.
///
/// # Returns
///
/// `Some(truncated)` when the marker is present, `None` otherwise.
pub fn truncate_content(content: &str, marker: &str) -> Option<String> {
    find_cut_index(content, marker).map(|cut_index| cut_at(content, cut_index))
}

/// Keeps `content[..cut_index]`, trimmed of trailing whitespace and
/// terminated by a single newline.
///
/// `cut_index` must lie on a char boundary, as the result of
/// [`find_cut_index`] always does.
pub(crate) fn cut_at(content: &str, cut_index: usize) -> String {
    let mut truncated = content[..cut_index].trim_end_matches(is_trailing_space).to_string();
    truncated.push('\n');
    truncated
}

/// Unicode whitespace plus the ASCII separators U+001C..U+001F, the set a
/// string `rstrip` removes.
fn is_trailing_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
