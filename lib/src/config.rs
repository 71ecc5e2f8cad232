//! Game configuration.

use crate::{
    cells::{Coord, ALIVE},
    error::Error,
    game::Game,
    grid::Grid,
};
use educe::Educe;
use log::info;
use std::{fmt::Write, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Game configuration.
///
/// The game will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of rows.
    #[educe(Default = 16)]
    pub rows: isize,

    /// Number of columns.
    #[educe(Default = 16)]
    pub columns: isize,

    /// Coordinates `(row, column)` of the cells which are alive
    /// in the initial generation.
    pub alive: Vec<Coord>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(rows: isize, columns: isize) -> Self {
        Config {
            rows,
            columns,
            ..Config::default()
        }
    }

    /// Sets the living cells in the initial generation.
    pub fn set_alive<I: IntoIterator<Item = Coord>>(mut self, alive: I) -> Self {
        self.alive = alive.into_iter().collect();
        self
    }

    /// Adds a living cell to the initial generation.
    pub fn add_alive(mut self, coord: Coord) -> Self {
        self.alive.push(coord);
        self
    }

    /// Creates a new game from the configuration.
    ///
    /// Returns an error if the size is not positive or too large,
    /// or if some living cell is outside the grid.
    pub fn game(&self) -> Result<Game, Error> {
        let grid = Grid::new(self.rows, self.columns)?;
        for &coord in &self.alive {
            grid.set_cell_state(coord, ALIVE)?;
        }
        info!(
            "New {}x{} game with {} living cells",
            self.rows,
            self.columns,
            grid.population()
        );
        Ok(Game::new(grid))
    }

    /// Parses the initial state format.
    ///
    /// The input is a list of whitespace-separated integers.
    /// The first two are the numbers of rows and columns.
    /// They are followed by the `row column` pairs of the living cells,
    /// usually one pair per line.
    ///
    /// Line numbers in the errors count the dimensions as line 1
    /// and the `n`-th pair as line `n + 1`.
    pub fn from_state_str(s: &str) -> Result<Self, Error> {
        let mut tokens = s.split_whitespace().map(str::parse::<isize>);

        let mut dimension = || match tokens.next() {
            Some(Ok(n)) => Ok(n),
            _ => Err(Error::InvalidDimensions { line: 1 }),
        };
        let rows = dimension()?;
        let columns = dimension()?;

        let mut alive = Vec::new();
        let mut line = 2;
        while let Some(row) = tokens.next() {
            let coord = match (row, tokens.next()) {
                (Ok(row), Some(Ok(column))) => (row, column),
                _ => return Err(Error::InvalidCoordinates { line }),
            };
            alive.push(coord);
            line += 1;
        }

        Ok(Config::new(rows, columns).set_alive(alive))
    }

    /// Writes the configuration in the initial state format.
    ///
    /// See [`from_state_str`](Self::from_state_str).
    pub fn to_state_string(&self) -> String {
        let mut str = String::new();
        writeln!(str, "{} {}", self.rows, self.columns).unwrap();
        for (row, column) in &self.alive {
            writeln!(str, "{} {}", row, column).unwrap();
        }
        str
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Config::from_state_str(s)
    }
}

/// The configuration of the current generation of a grid.
impl From<&Grid> for Config {
    fn from(grid: &Grid) -> Self {
        Config::new(grid.rows(), grid.columns())
            .set_alive(grid.cells().filter(|cell| cell.is_alive()).map(|cell| cell.coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default() {
        let config = Config::default();
        assert_eq!((config.rows, config.columns), (16, 16));
        assert!(config.alive.is_empty());
    }

    #[test]
    fn parse() -> Result<(), Error> {
        let config: Config = "5 6\n0 1\n4 5\n2 3\n".parse()?;
        assert_eq!(config.rows, 5);
        assert_eq!(config.columns, 6);
        assert_eq!(config.alive, vec![(0, 1), (4, 5), (2, 3)]);
        Ok(())
    }

    #[test]
    fn parse_only_dimensions() -> Result<(), Error> {
        let config = Config::from_state_str("3 3")?;
        assert_eq!(config, Config::new(3, 3));
        Ok(())
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Config::from_state_str(""),
            Err(Error::InvalidDimensions { line: 1 })
        );
        assert_eq!(
            Config::from_state_str("5 x\n"),
            Err(Error::InvalidDimensions { line: 1 })
        );
        assert_eq!(
            Config::from_state_str("5 5\n1 1\n2 b\n"),
            Err(Error::InvalidCoordinates { line: 3 })
        );
        assert_eq!(
            Config::from_state_str("5 5\n1 1\n2\n"),
            Err(Error::InvalidCoordinates { line: 3 })
        );
    }

    #[test]
    fn state_string() -> Result<(), Error> {
        let config = Config::new(4, 7).set_alive(vec![(1, 2), (3, 6)]);
        assert_eq!(config.to_state_string(), "4 7\n1 2\n3 6\n");
        assert_eq!(Config::from_state_str(&config.to_state_string())?, config);
        Ok(())
    }

    #[test]
    fn game() -> Result<(), Error> {
        let game = Config::new(4, 5)
            .add_alive((0, 0))
            .add_alive((3, 4))
            .game()?;
        assert_eq!(game.rows(), 4);
        assert_eq!(game.columns(), 5);
        assert_eq!(game.generation(), 0);
        assert_eq!(game.population(), 2);
        assert!(game.cell_at(3, 4).unwrap().is_alive());
        Ok(())
    }

    #[test]
    fn game_errors() {
        assert_eq!(
            Config::new(0, 5).game().unwrap_err(),
            Error::NonPositiveError
        );
        assert_eq!(
            Config::new(4, 5).add_alive((4, 0)).game().unwrap_err(),
            Error::SetCellError((4, 0))
        );
        assert_eq!(
            Config::new(4, 5).add_alive((0, -1)).game().unwrap_err(),
            Error::SetCellError((0, -1))
        );
    }

    #[test]
    fn huge_dimensions() -> Result<(), Error> {
        let config = Config::from_state_str(&format!("{} 2\n0 0\n", isize::MAX))?;
        assert_eq!(
            config.game().unwrap_err(),
            Error::SizeTooLarge(isize::MAX, 2)
        );
        Ok(())
    }

    #[test]
    fn from_grid() -> Result<(), Error> {
        let config = Config::new(3, 3).set_alive(vec![(0, 2), (1, 1)]);
        let game = config.game()?;
        assert_eq!(Config::from(game.grid()), config);
        Ok(())
    }
}
