//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing a board, see [BoardParseError](enum.BoardParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the board. This is the case if either of them is greater than or equal
    /// to 9.
    OutOfBounds,

    /// Indicates that some digit is invalid for a cell. This is the case if
    /// it is greater than 9, or, for operations that place a digit, if it
    /// is 0.
    InvalidDigit,

    /// An error that is raised whenever the backtracking search exhausts all
    /// candidates without completing the board, i.e. the state it started
    /// from admits no solution.
    Unsolvable
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `SudokuBoard`.
#[derive(Debug, Eq, PartialEq)]
pub enum BoardParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid digit (more than 9).
    InvalidDigit
}

/// Syntactic sugar for `Result<V, BoardParseError>`.
pub type BoardParseResult<V> = Result<V, BoardParseError>;

impl Display for BoardParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            BoardParseError::NumberFormatError =>
                write!(f, "number format error"),
            BoardParseError::InvalidDigit =>
                write!(f, "invalid digit")
        }
    }
}

impl From<ParseIntError> for BoardParseError {
    fn from(_: ParseIntError) -> BoardParseError {
        BoardParseError::NumberFormatError
    }
}
