//! Crossword layout engine.
//!
//! phrase → tokens → blocks (one vertical anchor each) → one merged grid.

pub mod block;
pub mod config;
pub mod grid;
pub mod merge;
pub mod sequencer;

pub use block::{build_block, find_crossing, Block};
pub use config::{Config, LayoutConfig};
pub use grid::{feasible, write, Bounds, Coord, Direction, Grid, Placement};
pub use merge::merge_blocks;
pub use sequencer::build_blocks;

use crate::text::tokenize;
use tracing::instrument;

/// Lays out `phrase` with the default heuristics.
///
/// Returns the merged grid and the per-block local layouts it was built from.
/// An empty phrase yields an empty grid and no blocks.
pub fn build(phrase: &str) -> (Grid, Vec<Block>) {
    build_with_config(phrase, &LayoutConfig::default())
}

#[instrument(level = "debug", skip(config))]
pub fn build_with_config(phrase: &str, config: &LayoutConfig) -> (Grid, Vec<Block>) {
    let tokens = tokenize(phrase);
    let blocks = build_blocks(&tokens, config);
    let grid = merge_blocks(&blocks, config);
    (grid, blocks)
}
