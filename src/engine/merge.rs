//! Block merger: lays independent blocks side by side in one grid.

use super::block::Block;
use super::config::LayoutConfig;
use super::grid::{Coord, Grid};

/// Lowest row of `block` holding more than one cell.
///
/// Cells are counted per row regardless of which word wrote them, so a
/// two-letter crossing that adds a single new cell (e.g. `ЗА` hanging one
/// column left of its anchor) already makes its row wide. Lone marks can
/// therefore sit higher than under a rule that only counts cells written
/// together by one word.
fn first_wide_row(block: &Block) -> Option<i32> {
    block
        .grid
        .row_counts()
        .into_iter()
        .find(|&(_, count)| count > 1)
        .map(|(row, _)| row)
}

/// Row for a one-cell block: the first wide row of the previous block, else of
/// the next block, else its own row.
fn single_cell_row(blocks: &[Block], index: usize, own_row: i32) -> i32 {
    let previous = index.checked_sub(1).and_then(|i| blocks.get(i));
    let next = blocks.get(index + 1);

    [previous, next]
        .into_iter()
        .flatten()
        .find_map(first_wide_row)
        .unwrap_or(own_row)
}

fn both_words(current: &Block, next: Option<&Block>) -> bool {
    let leads = |block: &Block| block.anchor_kind().is_some_and(|kind| kind.leads_with_word());
    leads(current) && next.is_some_and(leads)
}

/// Translates every block into one shared coordinate space.
///
/// Blocks after the first are shifted so their leftmost column starts at the
/// running offset; the offset then moves past the block, plus
/// `config.word_gap` when this block and the next are both anchored by words.
/// Column ranges of different blocks never overlap.
pub fn merge_blocks(blocks: &[Block], config: &LayoutConfig) -> Grid {
    let mut grid = Grid::new();
    let mut offset = 0;

    for (index, block) in blocks.iter().enumerate() {
        let Some((min_col, max_col)) = block.grid.columns() else {
            continue;
        };

        if index > 0 {
            offset -= min_col;
        }

        if block.is_single_cell() {
            for (coord, c) in block.grid.iter() {
                let row = single_cell_row(blocks, index, coord.row);
                grid.set(Coord::new(row, coord.col + offset), c);
            }
        } else {
            for (coord, c) in block.grid.iter() {
                let previous = grid.set(Coord::new(coord.row, coord.col + offset), c);
                debug_assert!(previous.is_none(), "blocks overlap at {coord:?}");
            }
        }

        if both_words(block, blocks.get(index + 1)) {
            offset += config.word_gap;
        }
        offset += max_col + 1;
    }

    grid
}
