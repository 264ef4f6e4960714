use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Width of the widest line. Labels may contain explicit line breaks.
pub fn block_width(s: &str) -> usize {
    s.split('\n').map(display_width).max().unwrap_or(0)
}

/// Glyph drawn for an icon kind. Unknown kinds fall back to a bullet.
pub fn icon_glyph(kind: &str) -> char {
    match kind {
        "cross" | "close" => '×',
        "check" => '✓',
        "plus" => '+',
        _ => '•',
    }
}
