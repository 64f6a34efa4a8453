use comfy_table::{Cell, ContentArrangement};

use crate::datasource::TableSummary;

/// Renders a listing of tables, one line per table.
pub trait TableSummaryExt {
    fn render_table(&self) -> String;
}

impl TableSummaryExt for [TableSummary] {
    fn render_table(&self) -> String {
        let rows = self
            .iter()
            .map(|summary| {
                [
                    Cell::new(&summary.name),
                    Cell::new(summary.column_count),
                    Cell::new(summary.row_count),
                ]
            })
            .collect::<Vec<_>>();

        comfy_table::Table::new()
            .load_preset(comfy_table::presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["NAME", "COLUMNS", "ROWS"])
            .add_rows(rows)
            .to_string()
    }
}
