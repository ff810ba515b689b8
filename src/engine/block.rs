//! Block builder: one vertical anchor plus the crossings that fit on it.

use super::config::LayoutConfig;
use super::grid::{feasible, write, Coord, Direction, Grid, Placement};
use crate::text::{classify, Token, TokenKind};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Self-contained sub-layout in local coordinates, anchor head at (0, 0).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

impl Block {
    /// The vertical word every crossing in this block hangs off.
    pub fn anchor(&self) -> Option<&Placement> {
        self.placements.first()
    }

    pub fn anchor_kind(&self) -> Option<TokenKind> {
        self.anchor().map(|placement| classify(&placement.token))
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// True for a block made of one cell: a lone mark or a one-letter anchor.
    pub fn is_single_cell(&self) -> bool {
        self.grid.len() == 1
    }

    fn place(&mut self, token: &Token, direction: Direction, row: i32, col: i32) {
        write(&mut self.grid, token.as_str(), direction, row, col);
        self.placements.push(Placement {
            token: token.to_string(),
            direction,
            row,
            col,
        });
    }
}

/// Finds the first row at or below `row_cursor` where `token` can cross the anchor.
///
/// Rows are scanned top to bottom and, within a row, the token's letters left
/// to right; the matching letter lands on the anchor column, so the returned
/// column is the negated letter offset.
pub fn find_crossing(
    grid: &Grid,
    token: &Token,
    anchor: &[char],
    vertical: &HashSet<Coord>,
    row_cursor: usize,
    config: &LayoutConfig,
) -> Option<(i32, i32)> {
    let max_overhang = config.max_overhang(token.char_len());
    let first_row = row_cursor.max(config.first_crossing_row());

    for (row, &target) in anchor.iter().enumerate().skip(first_row) {
        for (offset, c) in token.as_str().chars().enumerate() {
            if c != target {
                continue;
            }
            if offset > max_overhang {
                trace!(%token, row, offset, max_overhang, "overhang too wide");
                continue;
            }

            let (row, col) = (row as i32, -(offset as i32));
            if feasible(grid, token.as_str(), Direction::Across, row, col, Some(vertical)) {
                return Some((row, col));
            }
            trace!(%token, row, col, "crossing conflicts with grid");
        }
    }

    None
}

/// Builds one block from the front of `tokens`.
///
/// Returns the block and the tokens it did not consume. The anchor is always
/// consumed, so the remainder is strictly shorter than the input unless the
/// input is empty.
pub fn build_block<'a>(tokens: &'a [Token], config: &LayoutConfig) -> (Block, &'a [Token]) {
    let mut block = Block::default();
    let Some((anchor, rest)) = tokens.split_first() else {
        return (block, tokens);
    };

    block.place(anchor, Direction::Down, 0, 0);
    if anchor.kind().ends_block() {
        debug!(%anchor, "anchor closes its own block");
        return (block, rest);
    }

    let anchor_chars: Vec<char> = anchor.as_str().chars().collect();
    let vertical: HashSet<Coord> = Direction::Down.cells(0, 0, anchor_chars.len()).collect();
    let mut row_cursor = 0;

    for (i, token) in tokens.iter().enumerate().skip(1) {
        if token.kind().is_punctuation() {
            debug!(%anchor, mark = %token, "punctuation closes block");
            return (block, &tokens[i..]);
        }

        match find_crossing(&block.grid, token, &anchor_chars, &vertical, row_cursor, config) {
            Some((row, col)) => {
                block.place(token, Direction::Across, row, col);
                if let Some(placement) = block.placements.last() {
                    debug!(%anchor, %placement, "placed crossing");
                }
                row_cursor = row as usize + 1;
            }
            None => {
                debug!(%anchor, %token, "no crossing found, closing block");
                return (block, &tokens[i..]);
            }
        }
    }

    (block, &[])
}
