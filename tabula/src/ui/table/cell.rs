use crate::ui::table::{glyph::PADDING, width::text_len};

/// Centers `value` in a field of `width` characters.
///
/// The left side gets half of the padding rounded down, the right side gets
/// the rest. A value wider than the field is returned unchanged.
#[must_use]
pub fn center(value: &str, width: usize) -> String {
    let mut buf = String::with_capacity(width.max(value.len()));
    push_centered(&mut buf, value, width);
    buf
}

/// Appends `value` centered in a field of `width` characters to `buf`.
pub fn push_centered(buf: &mut String, value: &str, width: usize) {
    let padding = width.saturating_sub(text_len(value));
    let left = padding / 2;
    let right = padding - left;
    buf.extend(std::iter::repeat_n(PADDING, left));
    buf.push_str(value);
    buf.extend(std::iter::repeat_n(PADDING, right));
}
