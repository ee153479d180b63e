use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event,
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};

use crate::{app::App, error::Result, grid::Grid, input::Command, session::Session};

/// Sleep between polls while paused, so editing stays responsive
const IDLE_POLL: Duration = Duration::from_millis(16);

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub struct Rect {
    w: u16,
    h: u16,
}

impl Rect {
    #[inline]
    pub fn new(width: u16, height: u16) -> Self {
        Rect { w: width, h: height }
    }

    #[inline]
    pub fn term_size() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Rect::new(width, height))
    }

    #[inline]
    pub fn w(&self) -> u16 {
        self.w
    }

    #[inline]
    pub fn h(&self) -> u16 {
        self.h
    }

    /// Whether a board plus its status line fits
    pub fn fits(&self, grid: &Grid) -> bool {
        grid.width() <= self.w as usize && grid.height() < self.h as usize
    }
}

/// Take over the terminal, run until quit, then give it back
pub fn run(app: App) -> Result<()> {
    runup()?;
    let d = draw(app);
    shutdown()?;
    d
}

fn runup() -> Result<()> {
    execute!(io::stdout(), EnterAlternateScreen, SetTitle("Game of Life"), Hide)?;
    enable_raw_mode()?;
    Ok(())
}

fn shutdown() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), ResetColor, LeaveAlternateScreen, Show)?;
    Ok(())
}

fn draw(mut app: App) -> Result<()> {
    let mut out = io::stdout();

    while app.running() {
        app.tick();

        let cmd = poll_command()?;
        app.apply(cmd)?;

        if app.take_redraw() {
            clear(&mut out)?;
            let term = Rect::term_size()?;
            if !term.fits(app.grid()) {
                log::warn!(
                    "{}x{} board does not fit {}x{} terminal",
                    app.grid().width(),
                    app.grid().height(),
                    term.w(),
                    term.h()
                );
            }
        }
        render_board(&mut out, app.grid(), app.session())?;
        render_status(&mut out, app.grid(), app.session())?;
        out.flush()?;

        if app.session().paused() {
            thread::sleep(IDLE_POLL);
        } else {
            thread::sleep(app.session().step_delay());
        }
    }
    Ok(())
}

/// At most one command, never waits
fn poll_command() -> Result<Command> {
    if event::poll(Duration::ZERO)? {
        Ok(Command::from_event(&event::read()?))
    } else {
        Ok(Command::Nothing)
    }
}

fn clear(out: &mut impl Write) -> Result<()> {
    use terminal::{Clear, ClearType};

    queue!(out, ResetColor, Clear(ClearType::All))?;
    Ok(())
}

fn render_board(out: &mut impl Write, grid: &Grid, session: &Session) -> Result<()> {
    let cursor = session.cursor();
    for (i, row) in grid.rows().enumerate() {
        queue!(out, MoveTo(0, i as u16))?;
        for (j, &alive) in row.iter().enumerate() {
            let bg = if (i, j) == (cursor.row, cursor.col) {
                Color::Green
            } else if alive {
                Color::Black
            } else {
                Color::White
            };
            queue!(out, SetForegroundColor(Color::Black), SetBackgroundColor(bg), Print('0'))?;
        }
    }
    queue!(out, ResetColor)?;
    Ok(())
}

fn render_status(out: &mut impl Write, grid: &Grid, session: &Session) -> Result<()> {
    let (_, h) = terminal::size()?;
    let (state, color) = if session.paused() {
        ("[PAUSED] ", Color::Red)
    } else {
        ("[RUNNING] ", Color::Green)
    };
    let cursor = session.cursor();
    let cell = if grid.get(cursor.row, cursor.col)? { "Alive" } else { "Dead" };

    queue!(
        out,
        MoveTo(0, h.saturating_sub(1)),
        terminal::Clear(terminal::ClearType::CurrentLine),
        SetForegroundColor(color),
        SetAttribute(Attribute::Bold),
        Print(state),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print(format!(
            "[Generation: {:06}  Population: {:05}  Timing(+/-): {:06}us] [Insert [{:04} x {:04}] ({})]",
            session.generation(),
            session.population(),
            session.step_delay().as_micros(),
            cursor.col,
            cursor.row,
            cell
        ))
    )?;
    Ok(())
}
