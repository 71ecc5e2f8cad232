//! Cells in the cellular automaton.

use crate::{grid::Grid, rules};
use educe::Educe;
use std::{
    cell::Cell,
    fmt::{Debug, Error, Formatter},
    ops::{Deref, Not},
    ptr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// The Dead state.
    #[default]
    Dead,
    /// The Alive state.
    Alive,
}

/// The Dead state.
pub const DEAD: State = State::Dead;
/// The Alive state.
pub const ALIVE: State = State::Alive;

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => DEAD,
            State::Dead => ALIVE,
        }
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`. Both coordinates are 0-indexed.
///
/// They are signed, so that the neighbors of a cell on the edge
/// can be looked up, and found to be absent.
pub type Coord = (isize, isize);

/// The offsets of the eight cells in the Moore neighborhood.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell in the cellular automaton.
///
/// The name `LifeCell` is chosen to avoid ambiguity with
/// [`std::cell::Cell`].
pub struct LifeCell {
    /// The coordinates of a cell.
    pub coord: Coord,

    /// The current state of the cell.
    pub(crate) state: Cell<State>,

    /// The state of the cell in the next generation.
    ///
    /// It is only meaningful between an [`evolve`](CellRef::evolve)
    /// and the matching [`advance`](CellRef::advance), which consumes it.
    pub(crate) succ: Cell<Option<State>>,
}

impl LifeCell {
    /// Generates a new dead cell.
    #[inline]
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            state: Cell::new(DEAD),
            succ: Cell::new(None),
        }
    }
}

impl Debug for LifeCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_struct("LifeCell")
            .field("coord", &self.coord)
            .field("state", &self.state.get())
            .field("succ", &self.succ.get())
            .finish()
    }
}

/// A reference to a [`LifeCell`], together with the [`Grid`] containing it.
///
/// The grid is only borrowed, and is used to look up the neighbors.
/// A [`CellRef`] can never outlive its grid.
#[derive(Educe)]
#[educe(Clone, Copy, Debug)]
pub struct CellRef<'a> {
    /// The grid that contains the cell.
    #[educe(Debug(ignore))]
    grid: &'a Grid,

    /// The [`LifeCell`] it refers to.
    cell: &'a LifeCell,
}

impl<'a> CellRef<'a> {
    #[inline]
    pub(crate) fn new(grid: &'a Grid, cell: &'a LifeCell) -> Self {
        CellRef { grid, cell }
    }

    /// The row coordinate of the cell.
    #[inline]
    pub fn row(&self) -> isize {
        self.cell.coord.0
    }

    /// The column coordinate of the cell.
    #[inline]
    pub fn column(&self) -> isize {
        self.cell.coord.1
    }

    /// The current state of the cell.
    #[inline]
    pub fn state(&self) -> State {
        self.cell.state.get()
    }

    /// Whether the cell is currently alive.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state() == ALIVE
    }

    /// Sets the current state of the cell.
    #[inline]
    pub fn set_state(&self, state: State) {
        self.cell.state.set(state);
    }

    /// Makes the cell alive.
    #[inline]
    pub fn make_alive(&self) {
        self.set_state(ALIVE);
    }

    /// Makes the cell dead.
    #[inline]
    pub fn make_dead(&self) {
        self.set_state(DEAD);
    }

    /// The cells in the Moore neighborhood.
    ///
    /// Cells on the edges of the grid have fewer than eight neighbors.
    pub fn neighbors(&self) -> impl Iterator<Item = CellRef<'a>> + 'a {
        let grid = self.grid;
        let (row, column) = self.cell.coord;
        NBHD.iter()
            .filter_map(move |&(dr, dc)| grid.cell_at(row + dr, column + dc))
    }

    /// Number of living cells in the Moore neighborhood.
    pub fn alive_neighbors(&self) -> usize {
        self.neighbors().filter(CellRef::is_alive).count()
    }

    /// Computes the state of the cell in the next generation,
    /// from the current states of the cell and its neighbors.
    ///
    /// Only the pending state of this cell is written.
    /// The current state stays unchanged until [`advance`](Self::advance).
    pub fn evolve(&self) {
        let succ = rules::transition(self.state(), self.alive_neighbors());
        self.cell.succ.set(Some(succ));
    }

    /// Advances the cell to the next generation,
    /// adopting the state computed by the last [`evolve`](Self::evolve).
    ///
    /// It is the caller's responsibility to call [`evolve`](Self::evolve)
    /// first. Otherwise there is no pending state, and the current state
    /// is kept.
    pub fn advance(&self) {
        if let Some(succ) = self.cell.succ.take() {
            self.set_state(succ);
        }
    }
}

impl<'a> Deref for CellRef<'a> {
    type Target = LifeCell;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.cell
    }
}

/// Two [`CellRef`]s are equal when they refer to the same cell.
impl<'a> PartialEq for CellRef<'a> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.cell, other.cell)
    }
}

impl<'a> Eq for CellRef<'a> {}
