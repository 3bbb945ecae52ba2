//! Unicode-safe helpers for working with UTF-8 strings.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Convert a character index (0-based) to a byte index in the given string.
/// If `n` exceeds the number of characters, returns `s.len()`.
pub fn char_to_byte_index(s: &str, n: usize) -> usize {
    match s.char_indices().nth(n) {
        Some((i, _)) => i,
        None => s.len(),
    }
}

/// Terminal column width of the first `n` characters of `s`.
pub fn display_width_to(s: &str, n: usize) -> usize {
    s[..char_to_byte_index(s, n)].width()
}

/// Split `line` into pieces no wider than `width` terminal cells.
/// A single character wider than `width` still gets a piece of its own.
pub fn split_to_width(line: &str, width: usize) -> Vec<&str> {
    if width == 0 || line.width() <= width {
        return vec![line];
    }
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (i, c) in line.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width && i > start {
            pieces.push(&line[start..i]);
            start = i;
            used = 0;
        }
        used += w;
    }
    pieces.push(&line[start..]);
    pieces
}
