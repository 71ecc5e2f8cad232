//! A terminal user interface.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use liferun_lib::{rules::RULE_STRING, Game, Move, Status, UserInterface};
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

/// What the interface is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Evolving automatically, one generation after each delay.
    Running,
    /// Waiting for the user.
    Paused,
    /// No more generations to compute.
    Finished,
}

/// A terminal user interface.
///
/// It enters the alternate screen on creation, and restores the terminal
/// when dropped.
pub(crate) struct TuiInterface {
    stdout: Stdout,
    delay: Duration,
    mode: Mode,
}

impl TuiInterface {
    pub(crate) fn new(delay: Duration, manual: bool) -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(TuiInterface {
            stdout,
            delay,
            mode: if manual { Mode::Paused } else { Mode::Running },
        })
    }

    fn status_str(&self) -> &'static str {
        match self.mode {
            Mode::Running => "Running... Press [space] to pause, [q] to quit.",
            Mode::Paused => {
                "Paused. Press [space] to resume, [enter] for the next generation, [q] to quit."
            }
            Mode::Finished => "Finished. Press [q] to quit.",
        }
    }

    /// Draws a bar in reversed colors on the given line.
    fn bar(&mut self, y: u16, text: &str) -> io::Result<()> {
        let (width, _) = terminal::size()?;
        let text: String = format!("{:width$}", text, width = width as usize)
            .chars()
            .take(width as usize)
            .collect();
        queue!(
            self.stdout,
            MoveTo(0, y),
            SetAttribute(Attribute::Reverse),
            Print(text),
            SetAttribute(Attribute::Reset)
        )
    }

    fn update_status(&mut self) -> io::Result<()> {
        let (_, height) = terminal::size()?;
        self.bar(height.saturating_sub(1), self.status_str())?;
        self.stdout.flush()
    }

    /// Asks whether to quit.
    fn quit(&mut self) -> io::Result<bool> {
        let (_, height) = terminal::size()?;
        self.bar(height.saturating_sub(1), "Are you sure to quit? [Y/n]")?;
        self.stdout.flush()?;
        let quit = matches!(
            read_key()?.code,
            KeyCode::Char('Y') | KeyCode::Char('y') | KeyCode::Enter
        );
        if !quit {
            self.update_status()?;
        }
        Ok(quit)
    }

    /// Handles a key press. Returns the move it triggers, if any.
    fn handle_key(&mut self, key: KeyEvent) -> io::Result<Option<Move>> {
        match (key.code, self.mode) {
            (KeyCode::Char('q'), Mode::Finished) => return Ok(Some(Move::Quit)),
            (KeyCode::Char('q'), _) => {
                let mode = self.mode;
                self.mode = Mode::Paused;
                if self.quit()? {
                    return Ok(Some(Move::Quit));
                }
                self.mode = mode;
                self.update_status()?;
            }
            (KeyCode::Char(' '), Mode::Running) => {
                self.mode = Mode::Paused;
                self.update_status()?;
            }
            (KeyCode::Char(' '), Mode::Paused) => {
                self.mode = Mode::Running;
                self.update_status()?;
                return Ok(Some(Move::Proceed));
            }
            (KeyCode::Enter, Mode::Paused) | (KeyCode::Right, Mode::Paused) => {
                return Ok(Some(Move::Proceed))
            }
            _ => (),
        }
        Ok(None)
    }

    /// Waits until the user quits, after the last generation.
    pub(crate) fn finish(&mut self, game: &Game, status: Status) -> io::Result<()> {
        if status == Status::Quit {
            return Ok(());
        }
        self.mode = Mode::Finished;
        self.display(game)?;
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key)? == Some(Move::Quit) {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => self.display(game)?,
                _ => (),
            }
        }
    }
}

/// Blocks until a key is pressed.
fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

impl UserInterface for TuiInterface {
    type Error = io::Error;

    fn display(&mut self, game: &Game) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        queue!(self.stdout, Clear(ClearType::All))?;
        self.bar(
            0,
            &format!(
                "Gen: {}  Cells: {}  Size: {}x{}  Rule: {}",
                game.generation(),
                game.population(),
                game.rows(),
                game.columns(),
                RULE_STRING
            ),
        )?;
        let world = game.grid().plaintext();
        for (y, line) in world
            .lines()
            .take(height.saturating_sub(2) as usize)
            .enumerate()
        {
            let line: String = line.chars().take(width as usize).collect();
            queue!(self.stdout, MoveTo(0, y as u16 + 1), Print(line))?;
        }
        self.update_status()
    }

    fn trigger_move(&mut self, game: &Game) -> io::Result<Move> {
        let start = Instant::now();
        loop {
            if self.mode == Mode::Running {
                let elapsed = start.elapsed();
                if elapsed >= self.delay {
                    return Ok(Move::Proceed);
                }
                if !event::poll(self.delay - elapsed)? {
                    continue;
                }
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(next) = self.handle_key(key)? {
                        return Ok(next);
                    }
                }
                Event::Resize(_, _) => self.display(game)?,
                _ => (),
            }
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
