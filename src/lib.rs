//! Lays out the words of a short phrase on a character grid, crossword style.
//!
//! ```
//! use cross_word::{build, render};
//!
//! let (grid, blocks) = build("тест есо");
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(render(&grid), "Т\nЕ С О\nС\nТ");
//! ```

pub mod cli;
pub mod engine;
pub mod logging;
pub mod render;
pub mod text;

pub use engine::{build, build_with_config, Block, Grid};
pub use render::render;
pub use text::{tokenize, Token};
