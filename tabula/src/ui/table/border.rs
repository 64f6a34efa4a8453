//! Horizontal border and separator lines.

use crate::ui::table::glyph::{
    BOTTOM_LEFT_CORNER, BOTTOM_RIGHT_CORNER, BOTTOM_SEPARATOR, HORIZONTAL_LINE, INNER_LEFT,
    INNER_RIGHT, INNER_SEPARATOR, NEW_LINE, TOP_LEFT_CORNER, TOP_RIGHT_CORNER, TOP_SEPARATOR,
};

/// Position of a horizontal line within a table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BorderKind {
    /// Above the header row.
    Top,
    /// Between two rows, including between the header and the first data row.
    Inner,
    /// Below the last data row.
    Bottom,
}

impl BorderKind {
    /// Returns `(left edge, column separator, right edge)`.
    #[must_use]
    pub const fn glyphs(self) -> (char, char, char) {
        match self {
            Self::Top => (TOP_LEFT_CORNER, TOP_SEPARATOR, TOP_RIGHT_CORNER),
            Self::Inner => (INNER_LEFT, INNER_SEPARATOR, INNER_RIGHT),
            Self::Bottom => (BOTTOM_LEFT_CORNER, BOTTOM_SEPARATOR, BOTTOM_RIGHT_CORNER),
        }
    }
}

/// Appends one border line, newline included, for `column_count` columns of
/// `width` characters each.
pub fn push_border(buf: &mut String, kind: BorderKind, column_count: usize, width: usize) {
    let (left, separator, right) = kind.glyphs();
    buf.push(left);
    for column in 0..column_count {
        if column > 0 {
            buf.push(separator);
        }
        buf.extend(std::iter::repeat_n(HORIZONTAL_LINE, width));
    }
    buf.push(right);
    buf.push(NEW_LINE);
}

/// Returns one border line, newline included.
#[must_use]
pub fn border(kind: BorderKind, column_count: usize, width: usize) -> String {
    let mut buf = String::new();
    push_border(&mut buf, kind, column_count, width);
    buf
}
