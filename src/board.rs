//! Board controller
//!
//! Sole owner of the live [`Grid`]. All coordinates handed to the grid come
//! from here, and every operation keeps the session's cursor and population
//! consistent with the grid it leaves behind.

use crate::error::Result;
use crate::grid::Grid;
use crate::proc;
use crate::session::Session;

#[derive(Debug)]
pub struct Board {
    grid: Grid,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Board {
            grid: Grid::new(width, height)?,
        })
    }

    pub fn from_grid(grid: Grid) -> Self {
        Board { grid }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Advance one generation unless paused
    pub fn step(&mut self, session: &mut Session) {
        if session.paused() {
            return;
        }
        let next = proc::tick(&self.grid);
        self.grid = next.grid;
        session.advance(next.population);
        log::trace!(
            "generation {} population {}",
            session.generation(),
            session.population()
        );
    }

    /// Swap in a grid of the new size, keeping every cell in the overlap.
    /// On a zero dimension nothing changes.
    pub fn resize(&mut self, width: usize, height: usize, session: &mut Session) -> Result<()> {
        let mut next = Grid::new(width, height)?;

        let rows = height.min(self.grid.height());
        let cols = width.min(self.grid.width());
        for row in 0..rows {
            for col in 0..cols {
                if self.grid.get(row, col)? {
                    next.set(row, col, true)?;
                }
            }
        }

        log::debug!(
            "resize {}x{} -> {}x{}",
            self.grid.width(),
            self.grid.height(),
            width,
            height
        );
        self.grid = next;
        session.clamp_cursor(width, height);
        session.set_population(self.grid.population());
        Ok(())
    }

    /// Kill every cell and restart the count, paused
    pub fn clear(&mut self, session: &mut Session) {
        self.grid = self.grid.blank();
        session.reset();
        log::debug!("board cleared");
    }

    /// Flip the cell under the cursor. Allowed while running.
    pub fn toggle_cursor_cell(&mut self, session: &mut Session) -> Result<()> {
        let cursor = session.cursor();
        self.grid.toggle(cursor.row, cursor.col)?;
        session.set_population(self.grid.population());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::Error;
    use crate::session::{Cursor, DelayBounds};

    fn session(cursor: Cursor) -> Session {
        let bounds = DelayBounds {
            min: Duration::from_millis(5),
            max: Duration::from_millis(600),
            step: Duration::from_millis(5),
        };
        Session::new(cursor, Duration::from_millis(100), bounds)
    }

    #[test]
    fn test_step_while_paused_is_noop() {
        let mut board = Board::from_grid("....\n.##.\n.#..\n....".parse().unwrap());
        let before = board.grid().clone();
        let mut s = session(Cursor::default());
        for _ in 0..3 {
            board.step(&mut s);
        }
        assert_eq!(board.grid(), &before);
        assert_eq!(s.generation(), 0);
    }

    #[test]
    fn test_step_counts() {
        let mut board = Board::from_grid("....\n.##.\n.#..\n....".parse().unwrap());
        let mut s = session(Cursor::default());
        s.set_paused(false);
        board.step(&mut s);
        assert_eq!(s.generation(), 1);
        assert_eq!(s.population(), 4);
        assert_eq!(board.grid().to_string(), "....\n.##.\n.##.\n....");
    }

    #[test]
    fn test_resize_keeps_overlap_and_clamps_cursor() {
        let mut board = Board::from_grid("#..#\n....\n.#..\n...#".parse().unwrap());
        let mut s = session(Cursor::new(3, 3));

        board.resize(2, 3, &mut s).unwrap();
        assert_eq!(board.grid().to_string(), "#.\n..\n.#");
        assert_eq!(s.cursor(), Cursor::new(2, 1));
        assert_eq!(s.population(), 2);

        board.resize(5, 5, &mut s).unwrap();
        assert_eq!(board.grid().to_string(), "#....\n.....\n.#...\n.....\n.....");
        assert_eq!(s.cursor(), Cursor::new(2, 1));
    }

    #[test]
    fn test_resize_rejects_zero() {
        let mut board = Board::from_grid("#.\n.#".parse().unwrap());
        let mut s = session(Cursor::new(1, 1));
        assert!(matches!(
            board.resize(0, 3, &mut s),
            Err(Error::InvalidDimension { .. })
        ));
        assert_eq!(board.grid().to_string(), "#.\n.#");
        assert_eq!(s.cursor(), Cursor::new(1, 1));
    }

    #[test]
    fn test_clear() {
        let mut board = Board::from_grid("##\n##".parse().unwrap());
        let mut s = session(Cursor::default());
        s.set_paused(false);
        board.step(&mut s);
        board.clear(&mut s);
        assert_eq!(board.grid().population(), 0);
        assert_eq!((board.width(), board.height()), (2, 2));
        assert_eq!((s.generation(), s.population(), s.paused()), (0, 0, true));
    }

    #[test]
    fn test_toggle_cursor_cell() {
        let mut board = Board::new(3, 3).unwrap();
        let mut s = session(Cursor::new(2, 1));
        board.toggle_cursor_cell(&mut s).unwrap();
        assert!(board.grid().get(2, 1).unwrap());
        assert_eq!(s.population(), 1);

        s.set_paused(false);
        board.toggle_cursor_cell(&mut s).unwrap();
        assert!(!board.grid().get(2, 1).unwrap());
        assert_eq!(s.population(), 0);
    }
}
