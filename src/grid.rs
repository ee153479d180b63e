//! Cell storage for one generation
//!
//! The logical board is `width` x `height`, but the storage carries a
//! one-cell dead margin on every side. Neighbor reads for edge cells land in
//! the margin instead of needing bounds checks, and the margin is never
//! written.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A bounded board of alive/dead cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// `(height + 2)` rows of `(width + 2)` cells, logical cell `(r, c)`
    /// stored at `[r + 1][c + 1]`
    data: Vec<Vec<bool>>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Grid {
            width,
            height,
            data: vec![vec![false; width + 2]; height + 2],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    fn check(&self, row: usize, col: usize) -> Result<()> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.check(row, col)?;
        Ok(self.data[row + 1][col + 1])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        self.check(row, col)?;
        self.data[row + 1][col + 1] = alive;
        Ok(())
    }

    /// Flip a cell in place and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        self.check(row, col)?;
        let cell = &mut self.data[row + 1][col + 1];
        *cell = !*cell;
        Ok(*cell)
    }

    /// An all-dead grid of the same dimensions
    pub(crate) fn blank(&self) -> Grid {
        Grid {
            width: self.width,
            height: self.height,
            data: vec![vec![false; self.width + 2]; self.height + 2],
        }
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> bool {
        debug_assert!(self.contains(row, col));
        self.data[row + 1][col + 1]
    }

    /// Unchecked in the error sense: indexing past the margin panics
    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut bool {
        debug_assert!(self.contains(row, col));
        &mut self.data[row + 1][col + 1]
    }

    /// Live cells among the eight around a logical cell.
    /// Cells past the edge read from the margin and count as dead.
    pub(crate) fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        debug_assert!(self.contains(row, col));
        let (r, c) = (row + 1, col + 1);
        let mut count = 0;
        for nr in r - 1..=r + 1 {
            for nc in c - 1..=c + 1 {
                if (nr, nc) != (r, c) && self.data[nr][nc] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Logical rows, margin stripped
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.data[1..=self.height]
            .iter()
            .map(move |r| &r[1..=self.width])
    }

    /// Coordinates of every live cell, row-major
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(move |(col, _)| (row, col))
        })
    }

    pub fn population(&self) -> usize {
        self.rows().map(|r| r.iter().filter(|c| **c).count()).sum()
    }
}

/// Parses a plain picture of the board: one line per row, `.`, `0` or a
/// space for a dead cell, anything else alive. Every row must be equally wide.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.is_empty()).collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        let height = lines.len();
        if lines.iter().any(|l| l.chars().count() != width) {
            return Err(Error::InvalidDimension { width, height });
        }

        let mut grid = Grid::new(width, height)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let alive = !matches!(ch, '.' | '0' | ' ');
                grid.set(row, col, alive)?;
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
