use super::block::{build_block, Block};
use super::config::LayoutConfig;
use crate::text::Token;
use tracing::debug;

/// Cuts the whole token sequence into consecutive blocks.
///
/// Every call to [`build_block`] consumes at least its anchor, so the loop
/// runs at most once per token.
pub fn build_blocks(tokens: &[Token], config: &LayoutConfig) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut remaining = tokens;

    while !remaining.is_empty() {
        let (block, rest) = build_block(remaining, config);
        debug!(
            index = blocks.len(),
            words = block.placements.len(),
            left = rest.len(),
            "block finished"
        );
        blocks.push(block);
        remaining = rest;
    }

    blocks
}
