//! The grid.

use crate::{
    cells::{CellRef, Coord, LifeCell, State},
    error::Error,
};
use std::fmt::{self, Debug, Formatter};

/// A finite rectangular grid of cells.
///
/// Cells outside the grid do not exist. They are never alive,
/// and never counted as neighbors.
pub struct Grid {
    /// Number of rows.
    rows: isize,

    /// Number of columns.
    columns: isize,

    /// All the cells in the grid, in row-major order.
    ///
    /// This slice will not be resized after its creation.
    /// All the cells will live throughout the lifetime of the grid.
    cells: Box<[LifeCell]>,
}

impl Grid {
    /// Creates a new grid with the given size, where all cells are dead.
    ///
    /// Returns an error if `rows` or `columns` is not positive,
    /// or if the grid is too large to be allocated.
    pub fn new(rows: isize, columns: isize) -> Result<Self, Error> {
        if rows <= 0 || columns <= 0 {
            return Err(Error::NonPositiveError);
        }

        let size = rows
            .checked_mul(columns)
            .ok_or(Error::SizeTooLarge(rows, columns))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size as usize)
            .map_err(|_| Error::SizeTooLarge(rows, columns))?;
        for row in 0..rows {
            for column in 0..columns {
                cells.push(LifeCell::new((row, column)));
            }
        }

        Ok(Grid {
            rows,
            columns,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> isize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> isize {
        self.columns
    }

    /// The position of a cell in the slice of cells,
    /// or `None` if the coordinates are outside the grid.
    #[inline]
    fn index(&self, row: isize, column: isize) -> Option<usize> {
        if 0 <= row && row < self.rows && 0 <= column && column < self.columns {
            Some((row * self.columns + column) as usize)
        } else {
            None
        }
    }

    /// Finds the cell at the given row and column.
    ///
    /// Returns `None` if there is no such cell.
    #[inline]
    pub fn cell_at(&self, row: isize, column: isize) -> Option<CellRef<'_>> {
        self.index(row, column)
            .map(|i| CellRef::new(self, &self.cells[i]))
    }

    /// Finds a cell by its coordinates.
    ///
    /// Returns `None` if there is no such cell.
    #[inline]
    pub fn find_cell(&self, (row, column): Coord) -> Option<CellRef<'_>> {
        self.cell_at(row, column)
    }

    /// Iterates over all the cells, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellRef<'_>> {
        self.cells.iter().map(move |cell| CellRef::new(self, cell))
    }

    /// Gets the state of a cell.
    ///
    /// Returns an error if there is no such cell.
    pub fn get_cell_state(&self, coord: Coord) -> Result<State, Error> {
        self.find_cell(coord)
            .map(|cell| cell.state())
            .ok_or(Error::SetCellError(coord))
    }

    /// Sets the state of a cell.
    ///
    /// Returns an error if there is no such cell.
    pub fn set_cell_state(&self, coord: Coord, state: State) -> Result<(), Error> {
        let cell = self.find_cell(coord).ok_or(Error::SetCellError(coord))?;
        cell.set_state(state);
        Ok(())
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells().filter(CellRef::is_alive).count()
    }

    /// Displays the grid in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    pub fn plaintext(&self) -> String {
        let mut str = String::with_capacity(((self.columns + 1) * self.rows) as usize);
        for cell in self.cells() {
            if cell.is_alive() {
                str.push('o');
            } else {
                str.push('.');
            }
            if cell.column() == self.columns - 1 {
                str.push('\n');
            }
        }
        str
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("population", &self.population())
            .finish()
    }
}
