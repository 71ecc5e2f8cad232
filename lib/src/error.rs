//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Unable to set cell at {0:?}.
    SetCellError(Coord),
    /// Rows and columns should be positive.
    NonPositiveError,
    /// A grid with {0} rows and {1} columns is too large.
    SizeTooLarge(isize, isize),
    /// Invalid dimensions at line {line}.
    InvalidDimensions {
        /// 1-based line number in the initial state.
        line: usize,
    },
    /// Could not read coordinates at line {line}.
    InvalidCoordinates {
        /// 1-based line number in the initial state.
        line: usize,
    },
}
