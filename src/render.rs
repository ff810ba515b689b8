//! Plain-text rendering of a grid.

use crate::engine::{Coord, Grid};
use unicode_width::UnicodeWidthChar;

fn display_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Renders one line per row from the top to the bottom occupied row.
///
/// Cells are joined by single spaces and blank cells become spaces; each line
/// is right-trimmed. When the grid holds double-width characters, narrower
/// visible cells are padded to match; zero-width marks are never padded.
pub fn render(grid: &Grid) -> String {
    let Some(bounds) = grid.bounds() else {
        return String::new();
    };
    let cell_width = grid.values().map(display_width).max().unwrap_or(1).max(1);
    let blank = " ".repeat(cell_width);

    let mut lines = Vec::with_capacity((bounds.max_row - bounds.min_row + 1) as usize);
    for row in bounds.min_row..=bounds.max_row {
        let cells: Vec<String> = (bounds.min_col..=bounds.max_col)
            .map(|col| match grid.get(Coord::new(row, col)) {
                Some(c) => {
                    let width = display_width(c);
                    let pad = if cell_width > 1 && width > 0 {
                        cell_width - width
                    } else {
                        0
                    };
                    format!("{c}{}", " ".repeat(pad))
                }
                None => blank.clone(),
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }

    lines.join("\n")
}
