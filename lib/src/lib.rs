//! __Conway's Game of Life__ on a finite grid.
//!
//! Cells outside the grid are considered dead. Each generation is computed
//! in two passes: every cell first [evolves](CellRef::evolve), computing its
//! next state from the current generation, and only then does every cell
//! [advance](CellRef::advance) to that state.
//!
//! # Example
//!
//! ```rust
//! use liferun_lib::Config;
//!
//! // A blinker.
//! let config = Config::new(5, 5).set_alive(vec![(2, 1), (2, 2), (2, 3)]);
//! let mut game = config.game().unwrap();
//!
//! game.step();
//! assert_eq!(game.generation(), 1);
//! assert_eq!(game.grid().plaintext(), ".....\n..o..\n..o..\n..o..\n.....\n");
//! ```

mod cells;
mod config;
mod error;
mod game;
mod grid;
pub mod rules;

pub use cells::{CellRef, Coord, LifeCell, State, ALIVE, DEAD};
pub use config::Config;
pub use error::Error;
pub use game::{Game, Move, Status, UserInterface};
pub use grid::Grid;
