//! Sparse character grid and the two placement primitives.
//!
//! Placement is a two-phase contract: [`feasible`] validates, [`write`] acts.
//! `write` never re-validates, so callers must check first.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Grid coordinate; rows grow downward, columns grow rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Across,
}

impl Direction {
    /// (row step, column step) per character.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Down => (1, 0),
            Direction::Across => (0, 1),
        }
    }

    /// Coordinates covered by `len` characters starting at (row, col).
    pub fn cells(self, row: i32, col: i32, len: usize) -> impl Iterator<Item = Coord> {
        let (row_step, col_step) = self.step();
        (0..len as i32).map(move |i| Coord::new(row + row_step * i, col + col_step * i))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Down => f.write_str("down"),
            Direction::Across => f.write_str("across"),
        }
    }
}

/// Inclusive bounding box of the occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

/// Sparse coordinate → character map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: BTreeMap<Coord, char>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: Coord) -> Option<char> {
        self.cells.get(&coord).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.cells.iter().map(|(&coord, &c)| (coord, c))
    }

    pub fn values(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.values().copied()
    }

    /// Writes one cell, returning the previous content.
    pub(crate) fn set(&mut self, coord: Coord, c: char) -> Option<char> {
        self.cells.insert(coord, c)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut coords = self.cells.keys();
        let first = coords.next()?;
        let init = Bounds {
            min_row: first.row,
            max_row: first.row,
            min_col: first.col,
            max_col: first.col,
        };

        Some(coords.fold(init, |b, c| Bounds {
            min_row: b.min_row.min(c.row),
            max_row: b.max_row.max(c.row),
            min_col: b.min_col.min(c.col),
            max_col: b.max_col.max(c.col),
        }))
    }

    /// Inclusive column span, `None` for an empty grid.
    pub fn columns(&self) -> Option<(i32, i32)> {
        self.bounds().map(|b| (b.min_col, b.max_col))
    }

    /// Number of occupied cells per row.
    pub fn row_counts(&self) -> BTreeMap<i32, usize> {
        let mut counts = BTreeMap::new();
        for coord in self.cells.keys() {
            *counts.entry(coord.row).or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<(Coord, char)> for Grid {
    fn from_iter<I: IntoIterator<Item = (Coord, char)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// One word laid onto a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub token: String,
    pub direction: Direction,
    pub row: i32,
    pub col: i32,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ ({}, {})", self.token, self.direction, self.row, self.col)
    }
}

/// Checks that `word` can be laid at (row, col) without overwriting a different
/// character.
///
/// For `Across` placements with a non-empty `vertical` set, every occupied cell
/// the word touches must also belong to that set, so a crossing word may share
/// letters with the anchor but never with an earlier crossing.
pub fn feasible(
    grid: &Grid,
    word: &str,
    direction: Direction,
    row: i32,
    col: i32,
    vertical: Option<&HashSet<Coord>>,
) -> bool {
    let restrict = match (direction, vertical) {
        (Direction::Across, Some(coords)) if !coords.is_empty() => Some(coords),
        _ => None,
    };

    direction
        .cells(row, col, word.chars().count())
        .zip(word.chars())
        .all(|(coord, c)| match grid.get(coord) {
            None => true,
            Some(existing) if existing != c => false,
            Some(_) => restrict.map_or(true, |coords| coords.contains(&coord)),
        })
}

/// Writes `word` along `direction`. No validation; pair with [`feasible`].
pub fn write(grid: &mut Grid, word: &str, direction: Direction, row: i32, col: i32) {
    for (coord, c) in direction.cells(row, col, word.chars().count()).zip(word.chars()) {
        grid.set(coord, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_coords(len: i32) -> HashSet<Coord> {
        (0..len).map(|r| Coord::new(r, 0)).collect()
    }

    #[test]
    fn test_write_down_and_across() {
        let mut grid = Grid::new();
        write(&mut grid, "ТЕСТ", Direction::Down, 0, 0);
        assert_eq!(grid.get(Coord::new(0, 0)), Some('Т'));
        assert_eq!(grid.get(Coord::new(3, 0)), Some('Т'));
        assert_eq!(grid.len(), 4);

        write(&mut grid, "ЕСО", Direction::Across, 1, 0);
        assert_eq!(grid.get(Coord::new(1, 2)), Some('О'));
        assert_eq!(grid.len(), 6);
    }

    #[test]
    fn test_feasible_crossing_on_matching_letter() {
        let mut grid = Grid::new();
        write(&mut grid, "ТЕСТ", Direction::Down, 0, 0);
        let vertical = column_coords(4);

        assert!(feasible(&grid, "ЕСО", Direction::Across, 1, 0, Some(&vertical)));
        assert!(!feasible(&grid, "КОД", Direction::Across, 0, 0, Some(&vertical)));
    }

    #[test]
    fn test_feasible_rejects_conflicting_crossing() {
        let mut grid = Grid::new();
        write(&mut grid, "МАМА", Direction::Down, 0, 0);
        let vertical = column_coords(4);

        assert!(feasible(&grid, "АМ", Direction::Across, 1, 0, Some(&vertical)));
        write(&mut grid, "АМ", Direction::Across, 1, 0);
        assert!(!feasible(&grid, "АН", Direction::Across, 2, 0, Some(&vertical)));
    }

    #[test]
    fn test_feasible_without_restriction() {
        let mut grid = Grid::new();
        write(&mut grid, "ДОМ", Direction::Down, 0, 0);

        assert!(feasible(&grid, "МО", Direction::Across, 2, 0, None));
        assert!(!feasible(&grid, "НО", Direction::Across, 1, 0, None));
    }

    #[test]
    fn test_feasible_restriction_blocks_shared_letter_outside_anchor() {
        let mut grid = Grid::new();
        write(&mut grid, "КОТ", Direction::Down, 0, 0);
        write(&mut grid, "ОКО", Direction::Across, 1, 0);
        let vertical = column_coords(3);

        // (1, 1) holds 'К' from the crossing, not from the anchor.
        assert!(feasible(&grid, "К", Direction::Across, 1, 1, None));
        assert!(!feasible(&grid, "К", Direction::Across, 1, 1, Some(&vertical)));
        // An empty restriction set restricts nothing.
        assert!(feasible(&grid, "К", Direction::Across, 1, 1, Some(&HashSet::new())));
    }

    #[test]
    fn test_placement_display() {
        let placement = Placement {
            token: "ЕСО".to_string(),
            direction: Direction::Across,
            row: 1,
            col: -2,
        };
        assert_eq!(placement.to_string(), "ЕСО across @ (1, -2)");
    }

    #[test]
    fn test_write_twice_is_idempotent() {
        let mut grid = Grid::new();
        write(&mut grid, "ТЕСТ", Direction::Down, 0, 0);
        assert!(feasible(&grid, "ТЕСТ", Direction::Down, 0, 0, None));

        let before = grid.clone();
        write(&mut grid, "ТЕСТ", Direction::Down, 0, 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_bounds_and_row_counts() {
        let mut grid = Grid::new();
        assert_eq!(grid.bounds(), None);

        write(&mut grid, "ТЕСТ", Direction::Down, 0, 0);
        write(&mut grid, "ВЕСНА", Direction::Across, 2, -2);

        assert_eq!(
            grid.bounds(),
            Some(Bounds {
                min_row: 0,
                max_row: 3,
                min_col: -2,
                max_col: 2
            })
        );
        assert_eq!(grid.columns(), Some((-2, 2)));
        assert_eq!(grid.row_counts().get(&2), Some(&5));
        assert_eq!(grid.row_counts().get(&0), Some(&1));
        assert_eq!(grid.get(Coord::new(2, -2)), Some('В'));
    }
}
