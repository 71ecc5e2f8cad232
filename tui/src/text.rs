//! A plain text interface.

use liferun_lib::{Game, Move, UserInterface};
use std::{
    io::{self, BufRead, Write},
    thread,
    time::Duration,
};

/// Prints every generation to the output.
///
/// The next move is permitted after a delay, or, in manual mode,
/// after the user enters a line.
pub(crate) struct TextInterface<W: Write, R: BufRead> {
    output: W,
    input: R,
    delay: Duration,
    manual: bool,
}

impl<W: Write, R: BufRead> TextInterface<W, R> {
    pub(crate) fn new(output: W, input: R, delay: Duration, manual: bool) -> Self {
        TextInterface {
            output,
            input,
            delay,
            manual,
        }
    }
}

impl<W: Write, R: BufRead> UserInterface for TextInterface<W, R> {
    type Error = io::Error;

    fn display(&mut self, game: &Game) -> io::Result<()> {
        writeln!(
            self.output,
            "Generation: {}  Population: {}",
            game.generation(),
            game.population()
        )?;
        write!(self.output, "{}", game.grid().plaintext())?;
        writeln!(self.output)?;
        self.output.flush()
    }

    fn trigger_move(&mut self, _game: &Game) -> io::Result<Move> {
        if !self.manual {
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            return Ok(Move::Proceed);
        }

        write!(
            self.output,
            "Press [Enter] for the next generation, or [q] to quit. "
        )?;
        self.output.flush()?;
        let mut line = String::new();
        // End of input also quits.
        if self.input.read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("q") {
            Ok(Move::Quit)
        } else {
            Ok(Move::Proceed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liferun_lib::{Config, Status};
    use std::io::Cursor;

    fn blinker() -> Game {
        Config::new(3, 3)
            .set_alive(vec![(1, 0), (1, 1), (1, 2)])
            .game()
            .unwrap()
    }

    #[test]
    fn display() -> io::Result<()> {
        let mut output = Vec::new();
        let mut ui = TextInterface::new(&mut output, io::empty(), Duration::ZERO, false);
        let mut game = blinker();
        assert_eq!(game.play(1, &mut ui)?, Status::Finished);
        drop(ui);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Generation: 0  Population: 3\n\
             ...\n\
             ooo\n\
             ...\n\
             \n\
             Generation: 1  Population: 3\n\
             .o.\n\
             .o.\n\
             .o.\n\
             \n"
        );
        Ok(())
    }

    #[test]
    fn manual() -> io::Result<()> {
        let input = Cursor::new("\n\nq\n\n");
        let mut ui = TextInterface::new(io::sink(), input, Duration::ZERO, true);
        let mut game = blinker();
        assert_eq!(game.play(10, &mut ui)?, Status::Quit);
        assert_eq!(game.generation(), 2);
        Ok(())
    }

    #[test]
    fn manual_end_of_input() -> io::Result<()> {
        let input = Cursor::new("\n");
        let mut ui = TextInterface::new(io::sink(), input, Duration::ZERO, true);
        let mut game = blinker();
        assert_eq!(game.play(10, &mut ui)?, Status::Quit);
        assert_eq!(game.generation(), 1);
        Ok(())
    }
}
