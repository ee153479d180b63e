//! Driver state: board, session and the command dispatcher
//!
//! Everything the terminal loop decides goes through [`App::apply`]; the
//! loop itself only polls, draws and sleeps.

use crate::board::Board;
use crate::config::Config;
use crate::error::Result;
use crate::grid::Grid;
use crate::input::Command;
use crate::session::{Cursor, Session};

pub struct App {
    board: Board,
    session: Session,
    config: Config,
    size: usize,
    running: bool,
    redraw: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let (width, height) = config.dimensions(config.size);
        let board = Board::new(width, height)?;

        let mut cursor = Cursor::new(config.size / 2, config.size / 2);
        cursor.clamp(width, height);
        let mut session = Session::new(cursor, config.delay, config.delay_bounds());
        session.set_paused(config.start_paused);

        Ok(App {
            board,
            session,
            size: config.size,
            config,
            running: true,
            redraw: true,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        self.board.grid()
    }

    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.running
    }

    /// True once after anything that needs a full repaint
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Advance the board one generation if not paused
    pub fn tick(&mut self) {
        self.board.step(&mut self.session);
    }

    pub fn apply(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::Move(dir) => {
                let (w, h) = (self.board.width(), self.board.height());
                self.session.move_cursor(dir, w, h);
            }
            Command::Quit => self.running = false,
            Command::TogglePause => {
                self.session.toggle_pause();
                log::debug!("paused: {}", self.session.paused());
            }
            Command::Clear => self.board.clear(&mut self.session),
            Command::ToggleCell => self.board.toggle_cursor_cell(&mut self.session)?,
            Command::Faster => {
                self.session.faster();
                log::debug!("step delay {:?}", self.session.step_delay());
            }
            Command::Slower => {
                self.session.slower();
                log::debug!("step delay {:?}", self.session.step_delay());
            }
            Command::Grow if self.size < self.config.max_size => self.resize(self.size + 1)?,
            Command::Shrink if self.size > self.config.min_size => self.resize(self.size - 1)?,
            Command::Redraw => self.redraw = true,
            Command::Grow | Command::Shrink | Command::Nothing => {}
        }
        Ok(())
    }

    fn resize(&mut self, size: usize) -> Result<()> {
        let (width, height) = self.config.dimensions(size);
        self.board.resize(width, height, &mut self.session)?;
        self.size = size;
        self.redraw = true;
        Ok(())
    }
}
