use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use crossterm::style::Stylize;

use sticky_grid::config::config::IconConfig;
use sticky_grid::ui::layout_sequencer::{LayoutRow, PinGutter, RowDivider, RowTier, TableLayout};

/// Print a computed layout: header, frozen tier, "Pinned" section, regular
/// rows and the page footer.
pub fn display_layout(layout: &TableLayout, icons: &IconConfig) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut headers: Vec<Cell> = Vec::new();
    if layout.pin_gutter_visible {
        headers.push(Cell::new(""));
    }
    headers.push(Cell::new("#").add_attribute(Attribute::Dim));
    for column in &layout.columns {
        let mut label = if column.is_action {
            "Actions".to_string()
        } else {
            column.label.clone()
        };
        if column.is_last_frozen {
            label = format!("{} {}", label, icons.frozen);
        }
        let mut cell = Cell::new(label).add_attribute(Attribute::Bold);
        if column.sticky_left.is_some() {
            cell = cell.fg(Color::Cyan);
        }
        headers.push(cell);
    }
    table.set_header(headers);

    for row in &layout.frozen_tier {
        table.add_row(row_cells(layout, row, icons));
    }

    if layout.pinned_section_visible {
        let mut marker = vec![Cell::new(format!("{} Pinned", icons.pin)).fg(Color::DarkGrey)];
        marker.extend(
            (0..layout.columns.len() + usize::from(layout.pin_gutter_visible)).map(|_| Cell::new("")),
        );
        table.add_row(marker);
        for row in &layout.pinned_tier {
            table.add_row(row_cells(layout, row, icons));
        }
    }

    for row in &layout.regular_tier {
        table.add_row(row_cells(layout, row, icons));
    }

    println!("{table}");

    let frozen = match layout.boundary {
        Some(b) => format!("columns 0..={} frozen", b),
        None => "no columns frozen".to_string(),
    };
    println!(
        "{}",
        format!(
            "Page {} of {} | {} | {} rows shown",
            layout.current_page,
            layout.total_pages,
            frozen,
            layout.row_count()
        )
        .green()
    );
}

fn row_cells(layout: &TableLayout, row: &LayoutRow, icons: &IconConfig) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(layout.columns.len() + 2);

    match row.pin_gutter {
        PinGutter::Hidden => {}
        PinGutter::Inert => cells.push(Cell::new("")),
        PinGutter::Unpin => cells.push(Cell::new(&icons.unpin)),
    }

    let index = match row.tier {
        RowTier::Frozen => format!("{} {}", icons.frozen, row.global_index),
        _ => row.global_index.to_string(),
    };
    cells.push(Cell::new(index).add_attribute(Attribute::Dim));

    for column in &layout.columns {
        let text = if column.is_action {
            icons.menu.clone()
        } else {
            row.record
                .get(column.index)
                .map(|v| v.to_string())
                .unwrap_or_default()
        };
        let mut cell = Cell::new(text);
        if row.divider == RowDivider::Heavy {
            cell = cell.add_attribute(Attribute::Underlined);
        }
        if row.tier == RowTier::Frozen {
            cell = cell.fg(Color::Blue);
        }
        cells.push(cell);
    }
    cells
}
