//! Per-run counters, the edit cursor and the step delay

use std::time::Duration;

/// Cursor position on the board
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Cursor { row, col }
    }

    /// Pull the cursor inside a `width` x `height` board
    pub fn clamp(&mut self, width: usize, height: usize) {
        self.row = self.row.min(height.saturating_sub(1));
        self.col = self.col.min(width.saturating_sub(1));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Range and increment for the step delay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayBounds {
    pub min: Duration,
    pub max: Duration,
    pub step: Duration,
}

impl DelayBounds {
    /// Same bounds with `min <= max`
    pub fn normalized(self) -> Self {
        DelayBounds {
            min: self.min.min(self.max),
            max: self.min.max(self.max),
            step: self.step,
        }
    }

    /// Never panics; with inverted bounds `max` wins
    #[inline]
    pub fn clamp(&self, delay: Duration) -> Duration {
        delay.max(self.min).min(self.max)
    }
}

/// State read by the renderer. Never holds cell data.
#[derive(Clone, Debug)]
pub struct Session {
    generation: u64,
    population: usize,
    cursor: Cursor,
    paused: bool,
    step_delay: Duration,
    bounds: DelayBounds,
}

impl Session {
    /// A paused session at generation zero
    pub fn new(cursor: Cursor, step_delay: Duration, bounds: DelayBounds) -> Self {
        let bounds = bounds.normalized();
        Session {
            generation: 0,
            population: 0,
            cursor,
            paused: true,
            step_delay: bounds.clamp(step_delay),
            bounds,
        }
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.population
    }

    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    pub fn paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    #[inline]
    pub fn delay_bounds(&self) -> DelayBounds {
        self.bounds
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub(crate) fn advance(&mut self, population: usize) {
        self.generation += 1;
        self.population = population;
    }

    pub(crate) fn set_population(&mut self, population: usize) {
        self.population = population;
    }

    pub(crate) fn reset(&mut self) {
        self.generation = 0;
        self.population = 0;
        self.paused = true;
    }

    pub(crate) fn clamp_cursor(&mut self, width: usize, height: usize) {
        self.cursor.clamp(width, height);
    }

    /// Move one cell; stepping past an edge does nothing
    pub fn move_cursor(&mut self, dir: Direction, width: usize, height: usize) {
        let c = &mut self.cursor;
        match dir {
            Direction::Up => c.row = c.row.saturating_sub(1),
            Direction::Down if c.row + 1 < height => c.row += 1,
            Direction::Left => c.col = c.col.saturating_sub(1),
            Direction::Right if c.col + 1 < width => c.col += 1,
            _ => {}
        }
    }

    /// Shorter delay, floored at the configured minimum
    pub fn faster(&mut self) {
        let delay = self.step_delay.saturating_sub(self.bounds.step);
        self.step_delay = self.bounds.clamp(delay);
    }

    /// Longer delay, capped at the configured maximum
    pub fn slower(&mut self) {
        let delay = self.step_delay.saturating_add(self.bounds.step);
        self.step_delay = self.bounds.clamp(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> DelayBounds {
        DelayBounds {
            min: Duration::from_micros(5_000),
            max: Duration::from_micros(20_000),
            step: Duration::from_micros(5_000),
        }
    }

    #[test]
    fn test_new_session_is_paused() {
        let s = Session::new(Cursor::new(1, 1), Duration::from_micros(10_000), bounds());
        assert!(s.paused());
        assert_eq!(s.generation(), 0);
        assert_eq!(s.population(), 0);
        assert_eq!(s.cursor(), Cursor::new(1, 1));
    }

    #[test]
    fn test_initial_delay_clamped() {
        let s = Session::new(Cursor::default(), Duration::ZERO, bounds());
        assert_eq!(s.step_delay(), Duration::from_micros(5_000));
    }

    #[test]
    fn test_move_stops_at_edges() {
        let mut s = Session::new(Cursor::new(0, 0), Duration::from_micros(10_000), bounds());
        s.move_cursor(Direction::Up, 3, 2);
        s.move_cursor(Direction::Left, 3, 2);
        assert_eq!(s.cursor(), Cursor::new(0, 0));

        for _ in 0..5 {
            s.move_cursor(Direction::Down, 3, 2);
            s.move_cursor(Direction::Right, 3, 2);
        }
        assert_eq!(s.cursor(), Cursor::new(1, 2));
    }

    #[test]
    fn test_delay_saturates() {
        let mut s = Session::new(Cursor::default(), Duration::from_micros(10_000), bounds());
        s.faster();
        assert_eq!(s.step_delay(), Duration::from_micros(5_000));
        s.faster();
        assert_eq!(s.step_delay(), Duration::from_micros(5_000));

        for _ in 0..10 {
            s.slower();
        }
        assert_eq!(s.step_delay(), Duration::from_micros(20_000));
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let inverted = DelayBounds {
            min: Duration::from_micros(20_000),
            max: Duration::from_micros(5_000),
            step: Duration::from_micros(5_000),
        };
        assert_eq!(inverted.clamp(Duration::ZERO), Duration::from_micros(5_000));

        let mut s = Session::new(Cursor::default(), Duration::from_secs(1), inverted);
        assert_eq!(s.delay_bounds(), bounds());
        assert_eq!(s.step_delay(), Duration::from_micros(20_000));
        s.faster();
        assert_eq!(s.step_delay(), Duration::from_micros(15_000));
    }

    #[test]
    fn test_cursor_clamp() {
        let mut c = Cursor::new(9, 9);
        c.clamp(4, 6);
        assert_eq!(c, Cursor::new(5, 3));
        c.clamp(10, 10);
        assert_eq!(c, Cursor::new(5, 3));
    }

    #[test]
    fn test_reset() {
        let mut s = Session::new(Cursor::default(), Duration::from_micros(10_000), bounds());
        s.toggle_pause();
        s.advance(7);
        s.advance(4);
        assert_eq!(s.generation(), 2);
        s.reset();
        assert_eq!((s.generation(), s.population(), s.paused()), (0, 0, true));
    }
}
