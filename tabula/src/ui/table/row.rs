use crate::ui::table::{
    cell::push_centered,
    glyph::{CELL_SEPARATOR, NEW_LINE},
};

/// Appends one header or data row: every cell centered in `width`
/// characters, fenced by vertical separators, newline included.
pub fn push_row<I>(buf: &mut String, cells: I, width: usize)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    buf.push(CELL_SEPARATOR);
    for cell in cells {
        push_centered(buf, cell.as_ref(), width);
        buf.push(CELL_SEPARATOR);
    }
    buf.push(NEW_LINE);
}

/// Returns one rendered row, newline included.
#[must_use]
pub fn row<I>(cells: I, width: usize) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut buf = String::new();
    push_row(&mut buf, cells, width);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_row() {
        assert_eq!(row(["Id"], 4), "║ Id ║\n");
    }

    #[test]
    fn test_multi_cell_row() {
        assert_eq!(row(["1", "Ada"], 8), "║   1    ║  Ada   ║\n");
    }

    #[test]
    fn test_every_segment_has_width() {
        let line = row(["a", "bb", "ccc", "dddd"], 6);
        let segments = line.trim_end_matches('\n').split(CELL_SEPARATOR).collect::<Vec<_>>();
        // leading and trailing separators yield empty outer segments
        assert_eq!(segments.len(), 6);
        assert!(segments[1..5].iter().all(|segment| segment.chars().count() == 6));
    }
}
