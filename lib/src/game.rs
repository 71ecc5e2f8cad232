//! The game, and the interface between the game and its user.

use crate::{
    cells::{CellRef, Coord},
    grid::Grid,
};
use log::{debug, trace};

/// What to do before the next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Evolves to the next generation.
    Proceed,
    /// Stops playing.
    Quit,
}

/// Play status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// All the requested generations are computed.
    Finished,
    /// The user interface asked to stop before the last generation.
    Quit,
}

/// A user interface which displays the game and controls its pace.
///
/// The interface must only read the game, and must not change any cell.
/// Cells can still be changed through a shared reference, e.g. by
/// [`CellRef::make_alive`](crate::CellRef::make_alive), so this is up to
/// the implementor.
pub trait UserInterface {
    /// Errors raised when displaying or waiting.
    type Error;

    /// Displays the current state of the game.
    fn display(&mut self, game: &Game) -> Result<(), Self::Error>;

    /// Waits until the next move is permitted.
    ///
    /// It is called once before each generation.
    fn trigger_move(&mut self, game: &Game) -> Result<Move, Self::Error>;
}

/// A game of Life.
///
/// It owns the grid, and counts the generations.
#[derive(Debug)]
pub struct Game {
    /// The grid.
    grid: Grid,

    /// The current generation.
    ///
    /// The initial state is generation `0`.
    generation: u64,
}

impl Game {
    /// Starts a new game from a grid, at generation `0`.
    pub fn new(grid: Grid) -> Self {
        Game {
            grid,
            generation: 0,
        }
    }

    /// The grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> isize {
        self.grid.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> isize {
        self.grid.columns()
    }

    /// Finds the cell at the given row and column.
    ///
    /// Returns `None` if there is no such cell.
    #[inline]
    pub fn cell_at(&self, row: isize, column: isize) -> Option<CellRef<'_>> {
        self.grid.cell_at(row, column)
    }

    /// Finds a cell by its coordinates.
    #[inline]
    pub fn find_cell(&self, coord: Coord) -> Option<CellRef<'_>> {
        self.grid.find_cell(coord)
    }

    /// The current generation.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Evolves the whole grid to the next generation.
    ///
    /// Every cell computes its next state before any cell advances,
    /// so that every cell sees the previous generation of its neighbors.
    pub fn step(&mut self) {
        for cell in self.grid.cells() {
            cell.evolve();
        }
        trace!("Generation {}: all cells evolved", self.generation);
        for cell in self.grid.cells() {
            cell.advance();
        }
        self.generation += 1;
        debug!(
            "Generation {}: population {}",
            self.generation,
            self.population()
        );
    }

    /// Plays the game for `generations` generations.
    ///
    /// Displays the initial state, and then, for each generation,
    /// waits for the permission of the user interface, evolves the grid,
    /// and displays the new state.
    pub fn play<U: UserInterface>(
        &mut self,
        generations: u64,
        ui: &mut U,
    ) -> Result<Status, U::Error> {
        ui.display(self)?;
        for _ in 1..=generations {
            if ui.trigger_move(self)? == Move::Quit {
                debug!("Quit at generation {}", self.generation);
                return Ok(Status::Quit);
            }
            self.step();
            ui.display(self)?;
        }
        Ok(Status::Finished)
    }
}
