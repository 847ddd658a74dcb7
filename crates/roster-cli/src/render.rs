//! Table rendering with `comfy-table`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_core::{
    Density, LoadStatus, Notification, NotificationKind, RecordField, RowView, SelectAllState,
    TableView,
};

/// Width used for compact density.
const COMPACT_WIDTH: u16 = 80;

/// Width used for comfortable density.
const COMFORTABLE_WIDTH: u16 = 120;

/// Render the current page with its footer.
pub fn render_view(view: &TableView<'_>) -> String {
    let mut out = String::new();
    if let LoadStatus::Failed(reason) = view.load_status {
        out.push_str(&format!("Load failed: {reason}\n"));
    }
    if view.rows.is_empty() {
        out.push_str(if view.query.is_empty() {
            "No records.\n"
        } else {
            "No records match the search.\n"
        });
    } else {
        out.push_str(&format!("{}\n", build_table(view)));
    }
    out.push_str(&footer(view));
    out
}

/// Build the table for the visible rows.
pub fn build_table(view: &TableView<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(checkbox(view.select_all)),
        header_cell("Id"),
        header_cell(RecordField::Name.label()),
        header_cell(RecordField::Email.label()),
        header_cell(RecordField::Role.label()),
        header_cell(""),
    ]);
    apply_table_style(&mut table, view.density);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 1, CellAlignment::Right);

    for row in &view.rows {
        table.add_row(row_cells(row));
    }
    table
}

/// "Page 1 of 2 | 1-10 of 15 | 3 selected | rows 10 (5/10/20/25)"
pub fn footer(view: &TableView<'_>) -> String {
    let options: Vec<String> = view
        .row_limit_options
        .iter()
        .map(ToString::to_string)
        .collect();
    let mut line = format!(
        "Page {} of {} | {} | {} selected | rows {}",
        view.page.page, view.page.page_count, view.page, view.selected_count, view.row_limit
    );
    if !options.is_empty() {
        line.push_str(&format!(" ({})", options.join("/")));
    }
    if !view.query.is_empty() {
        line.push_str(&format!(" | search: {}", view.query));
    }
    line.push('\n');
    line
}

/// One notification as a single line.
pub fn render_notification(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Success => "ok",
        NotificationKind::Info => "info",
        NotificationKind::Warning => "warn",
        NotificationKind::Error => "error",
    };
    format!("[{marker}] {}", notification.message)
}

fn row_cells(row: &RowView<'_>) -> Vec<Cell> {
    let value_cell = |field: RecordField| {
        let cell = Cell::new(row.cell(field));
        if row.is_editing() {
            cell.fg(Color::Yellow)
        } else {
            cell
        }
    };
    let checkbox_cell = if row.selected {
        Cell::new("[x]").fg(Color::Cyan)
    } else {
        dim_cell("[ ]")
    };
    let state_cell = if row.is_editing() {
        Cell::new("editing")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Italic)
    } else {
        Cell::new("")
    };

    vec![
        checkbox_cell,
        dim_cell(row.record.id.as_str()),
        value_cell(RecordField::Name),
        value_cell(RecordField::Email),
        value_cell(RecordField::Role),
        state_cell,
    ]
}

fn checkbox(state: SelectAllState) -> &'static str {
    match state {
        SelectAllState::Unchecked => "[ ]",
        SelectAllState::Indeterminate => "[-]",
        SelectAllState::Checked => "[x]",
    }
}

fn apply_table_style(table: &mut Table, density: Density) {
    match density {
        Density::Compact => {
            table
                .load_preset(UTF8_FULL_CONDENSED)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_width(COMPACT_WIDTH);
        }
        Density::Comfortable => {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .apply_modifier(UTF8_SOLID_INNER_BORDERS)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_width(COMFORTABLE_WIDTH);
        }
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
