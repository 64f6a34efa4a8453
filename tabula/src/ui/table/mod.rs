//! Box-drawn table rendering.
//!
//! [`TableRenderer`] turns a slice of rows into a double-line framed table:
//!
//! ```text
//! ╔════╦════════╗
//! ║ id ║  name  ║
//! ╠════╬════════╣
//! ║ 1  ║  Ada   ║
//! ╚════╩════════╝
//! ```
//!
//! Every column shares one width, computed once from all cells and headers
//! before anything is formatted. The leaf builders live in the submodules and
//! are usable on their own.

pub mod border;
pub mod cell;
pub mod glyph;
pub mod row;
mod summary_ext;
pub mod width;

use self::{
    border::{BorderKind, push_border},
    glyph::{CELL_SEPARATOR, NEW_LINE, PADDING},
    row::push_row,
};
pub use self::summary_ext::TableSummaryExt;
use crate::table::DataSet;

/// Renders rows as a box-drawn table.
///
/// The renderer holds no state: the table name and the output buffer belong
/// to a single [`render`](Self::render) call.
#[derive(Clone, Copy, Debug)]
pub struct TableRenderer;

impl TableRenderer {
    /// Renders `rows` of the table called `table_name`.
    ///
    /// An empty row set, or rows without columns, produce a one-cell box
    /// stating that the table is empty or does not exist.
    #[must_use]
    pub fn render(table_name: &str, rows: &[DataSet]) -> String {
        let Some(first) = rows.first() else {
            return Self::render_empty(table_name);
        };
        let header = first.column_names();
        let column_count = header.len();
        if column_count == 0 {
            return Self::render_empty(table_name);
        }

        let cells = rows
            .iter()
            .map(|row| {
                let values = row.values();
                (0..column_count)
                    .map(|column| values.get(column).map(ToString::to_string).unwrap_or_default())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let width = width::uniform_width(header, &cells);

        let mut buf = String::new();
        push_border(&mut buf, BorderKind::Top, column_count, width);
        push_row(&mut buf, header, width);
        push_border(&mut buf, BorderKind::Inner, column_count, width);
        for (index, row) in cells.iter().enumerate() {
            push_row(&mut buf, row, width);
            let kind =
                if index + 1 < cells.len() { BorderKind::Inner } else { BorderKind::Bottom };
            push_border(&mut buf, kind, column_count, width);
        }
        buf
    }

    /// Renders the box shown for a table without rows.
    ///
    /// The box is exactly as wide as the padded message; no even-width
    /// adjustment is applied.
    #[must_use]
    pub fn render_empty(table_name: &str) -> String {
        let message = format!("Table '{table_name}' is empty or does not exist");
        let line_width = width::text_len(&message) + 2;

        let mut buf = String::new();
        push_border(&mut buf, BorderKind::Top, 1, line_width);
        buf.push(CELL_SEPARATOR);
        buf.push(PADDING);
        buf.push_str(&message);
        buf.push(PADDING);
        buf.push(CELL_SEPARATOR);
        buf.push(NEW_LINE);
        push_border(&mut buf, BorderKind::Bottom, 1, line_width);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<DataSet> {
        vec![
            DataSet::new().with("id", 1_i64).with("name", "Ada"),
            DataSet::new().with("id", 2_i64).with("name", "Grace"),
        ]
    }

    #[test]
    fn test_render_empty_table() {
        let rendered = TableRenderer::render("Users", &[]);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "║ Table 'Users' is empty or does not exist ║");
        assert_eq!(lines[0], format!("╔{}╗", "═".repeat(42)));
        assert_eq!(lines[2], format!("╚{}╝", "═".repeat(42)));
        assert!(lines.iter().all(|line| line.chars().count() == 44));
        assert!(rendered.ends_with("╝\n"));
    }

    #[test]
    fn test_render_rows_without_columns() {
        let rendered = TableRenderer::render("blank", &[DataSet::new()]);
        assert_eq!(rendered, TableRenderer::render_empty("blank"));
    }

    #[test]
    fn test_render_single_column() {
        let rows = vec![DataSet::new().with("Id", "1"), DataSet::new().with("Id", "22")];
        let expected = "\
╔════╗
║ Id ║
╠════╣
║ 1  ║
╠════╣
║ 22 ║
╚════╝
";
        assert_eq!(TableRenderer::render("ids", &rows), expected);
    }

    #[test]
    fn test_render_two_columns() {
        let expected = "\
╔════════╦════════╗
║   id   ║  name  ║
╠════════╬════════╣
║   1    ║  Ada   ║
╠════════╬════════╣
║   2    ║ Grace  ║
╚════════╩════════╝
";
        assert_eq!(TableRenderer::render("users", &users()), expected);
    }

    #[test]
    fn test_render_single_row_ends_with_bottom_border() {
        let rows = vec![DataSet::new().with("k", "v")];
        let expected = "\
╔════╗
║ k  ║
╠════╣
║ v  ║
╚════╝
";
        assert_eq!(TableRenderer::render("kv", &rows), expected);
    }

    #[test]
    fn test_render_header_wider_than_values() {
        let rows = vec![DataSet::new().with("identifier", 1_i64)];
        let rendered = TableRenderer::render("t", &rows);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], "║ identifier ║");
        assert_eq!(lines[3], "║     1      ║");
    }

    #[test]
    fn test_render_shape() {
        let rows = vec![
            DataSet::new().with("a", 1_i64).with("b", "two").with("c", 3.5_f64),
            DataSet::new().with("a", -10_i64).with("b", "").with("c", true),
            DataSet::new().with("a", 0_i64).with("b", "seventeen").with("c", None::<i64>),
        ];
        let column_count = 3;
        let width = width::padded_width(width::text_len("seventeen"));

        let rendered = TableRenderer::render("shape", &rows);
        assert!(rendered.ends_with('\n'));
        let lines = rendered.lines().collect::<Vec<_>>();
        // top, header, separator, then a row and a border per data row
        assert_eq!(lines.len(), 3 + 2 * rows.len());

        for (index, line) in lines.iter().enumerate() {
            if index % 2 == 0 {
                assert_eq!(line.chars().count(), column_count * (width + 1) + 1);
            } else {
                let segments = line.split(CELL_SEPARATOR).collect::<Vec<_>>();
                assert_eq!(segments.len(), column_count + 2);
                assert!(segments[1..=column_count]
                    .iter()
                    .all(|segment| segment.chars().count() == width));
            }
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let rows = users();
        assert_eq!(TableRenderer::render("users", &rows), TableRenderer::render("users", &rows));
    }

    #[test]
    fn test_render_missing_values_keep_shape() {
        let rows = vec![
            DataSet::new().with("a", "x").with("b", "y"),
            DataSet::new().with("a", "z"),
        ];
        let rendered = TableRenderer::render("ragged", &rows);
        assert_eq!(rendered.lines().nth(5), Some("║ z  ║    ║"));
    }

    #[test]
    fn test_render_ignores_values_beyond_header() {
        let rows = vec![
            DataSet::new().with("a", "x"),
            DataSet::new().with("a", "y").with("extra", "a much longer value"),
        ];
        let expected = "\
╔════╗
║ a  ║
╠════╣
║ x  ║
╠════╣
║ y  ║
╚════╝
";
        assert_eq!(TableRenderer::render("narrow", &rows), expected);
    }
}
