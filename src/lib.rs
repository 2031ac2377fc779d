// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a self-contained engine for classic 9x9 Sudoku. It
//! supports the following key features:
//!
//! * Parsing and printing boards
//! * Checking boards for duplicate digits in rows, columns, and blocks
//! * Solving boards using a randomized backtracking algorithm
//! * Generating puzzles at graded difficulty tiers
//! * Deriving single-cell hints without disturbing the live board
//! * Managing game sessions with move history, undo, timing, and scoring
//!
//! # Parsing and printing boards
//!
//! See [SudokuBoard::parse] for the exact format of a board code.
//!
//! Codes can be used to exchange boards, while pretty prints can be used to
//! display a board in a clearer manner. An example of how to parse and
//! display a board is provided below.
//!
//! ```
//! use sudoku_engine::SudokuBoard;
//!
//! let board = SudokuBoard::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! println!("{}", board);
//! ```
//!
//! # Checking validity
//!
//! A board does not enforce the Sudoku rules on writes. Digits are placed
//! unconditionally, which permits transient invalid states during puzzle
//! generation, and validity is checked on demand using
//! [SudokuBoard::is_valid].
//!
//! ```
//! use sudoku_engine::SudokuBoard;
//!
//! let mut board = SudokuBoard::empty();
//!
//! // Two 4's in the top row.
//! board.set_cell(0, 0, 4).unwrap();
//! board.set_cell(0, 5, 4).unwrap();
//! assert!(!board.is_valid());
//! ```
//!
//! # Solving boards
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! fill the empty cells of a board. As a default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which tries
//! the candidate digits for each empty cell in an order decided by a random
//! number generator and backtracks on dead ends.
//!
//! ```
//! use sudoku_engine::SudokuBoard;
//! use sudoku_engine::solver::{BacktrackingSolver, Solver};
//!
//! let mut board = SudokuBoard::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! let mut solver = BacktrackingSolver::new_default();
//!
//! assert!(solver.solve(&mut board).is_solved());
//! assert!(board.is_complete());
//! assert!(board.is_valid());
//! ```
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) first fills an empty board using a
//! solver and then clears the number of cells configured for a difficulty
//! tier. The removal performs no uniqueness check, so a generated puzzle may
//! admit more than one solution.
//!
//! ```
//! use sudoku_engine::difficulty::{Difficulty, DifficultySettings};
//! use sudoku_engine::generator::Generator;
//!
//! // new_default yields a generator with a backtracking solver and
//! // rand::thread_rng()
//! let mut generator = Generator::new_default();
//! let puzzle =
//!     generator.generate(DifficultySettings::of(Difficulty::Easy)).unwrap();
//!
//! assert!(puzzle.is_valid());
//! assert_eq!(41, puzzle.count_filled());
//! ```
//!
//! # Playing a session
//!
//! A [Session](session::Session) owns one board together with the move
//! history, difficulty settings, elapsed time, and score of a running game.
//! It is the type a presentation layer interacts with.
//!
//! ```
//! use sudoku_engine::difficulty::Difficulty;
//! use sudoku_engine::session::Session;
//!
//! let mut session = Session::new_default(Difficulty::Easy);
//! let (row, column) = session.board().first_empty_cell().unwrap();
//!
//! session.make_move(row, column, 3).unwrap();
//! assert_eq!(1, session.history().len());
//!
//! session.undo();
//! assert_eq!(0, session.board().get_cell(row, column).unwrap());
//! ```
//!
//! # Note regarding performance
//!
//! Backtracking search has an exponential worst case, and puzzle generation
//! performs a full search every call. While both are usually fast for 9x9
//! boards, it is strongly recommended to use at least `opt-level = 2` in
//! tests that generate puzzles.

pub mod difficulty;
pub mod error;
pub mod generator;
pub mod session;
pub mod solver;
pub mod util;

use error::{BoardParseError, BoardParseResult, SudokuError, SudokuResult};
use util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// A classic Sudoku board: a 9x9 grid of cells organized into nine 3x3
/// blocks. Each cell holds a digit in `[0, 9]`, where 0 denotes an empty
/// cell.
///
/// Writes through [SudokuBoard::set_cell] are unconditional, that is, no
/// Sudoku rules are checked. Duplicate digits are only detected on demand by
/// [SudokuBoard::is_valid], which permits transient invalid states while a
/// puzzle is generated or solved.
///
/// `SudokuBoard` implements `Display`, rendering the grid with box-drawing
/// characters:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 5 │ 3 │   ║   │ 7 │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 6 │   │   ║ 1 │ 9 │ 5 ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │ 9 │ 8 ║   │   │   ║   │ 6 │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║ 8 │   │   ║   │ 6 │   ║   │   │ 3 ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 4 │   │   ║ 8 │   │ 3 ║   │   │ 1 ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 7 │   │   ║   │ 2 │   ║   │   │ 6 ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │ 6 │   ║   │   │   ║ 2 │ 8 │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║ 4 │ 1 │ 9 ║   │   │ 5 ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │ 8 │   ║   │ 7 │ 9 ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuBoard {
    cells: [u8; SudokuBoard::CELL_COUNT]
}

fn to_char(cell: u8) -> char {
    if cell == 0 {
        ' '
    }
    else {
        (b'0' + cell) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for column in 0..SudokuBoard::SIZE {
        if column == 0 {
            result.push(start);
        }
        else if column % SudokuBoard::BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(column));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &SudokuBoard, row: usize) -> String {
    line('║', '║', '│', |column| to_char(board.cells[index(row, column)]),
        ' ', '║', true)
}

impl Display for SudokuBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for row in 0..SudokuBoard::SIZE {
            if row == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if row % SudokuBoard::BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn cell_to_string(cell: &u8) -> String {
    if *cell == 0 {
        String::from("")
    }
    else {
        cell.to_string()
    }
}

fn index(row: usize, column: usize) -> usize {
    row * SudokuBoard::SIZE + column
}

impl SudokuBoard {

    /// The width and height of the board, measured in cells.
    pub const SIZE: usize = 9;

    /// The width and height of one of the nine square sub-blocks of the
    /// board, measured in cells.
    pub const BLOCK_SIZE: usize = 3;

    /// The total number of cells on the board.
    pub const CELL_COUNT: usize = SudokuBoard::SIZE * SudokuBoard::SIZE;

    /// Creates a new board on which every cell is empty.
    pub fn empty() -> SudokuBoard {
        SudokuBoard {
            cells: [0; SudokuBoard::CELL_COUNT]
        }
    }

    /// Parses a code encoding a board. The code has to be a comma-separated
    /// list of exactly 81 entries, each of which is either empty, `0`, or a
    /// digit between 1 and 9, where empty and `0` both denote an empty cell.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the
    /// entries is ignored to allow for more intuitive formatting.
    ///
    /// # Errors
    ///
    /// Any specialization of `BoardParseError` (see that documentation).
    pub fn parse(code: &str) -> BoardParseResult<SudokuBoard> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != SudokuBoard::CELL_COUNT {
            return Err(BoardParseError::WrongNumberOfCells);
        }

        let mut board = SudokuBoard::empty();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let digit = entry.parse::<u8>()?;

            if digit > 9 {
                return Err(BoardParseError::InvalidDigit);
            }

            board.cells[i] = digit;
        }

        Ok(board)
    }

    /// Converts the board into a `String` in a way that is consistent with
    /// [SudokuBoard::parse]. That is, a board that is converted to a string
    /// and parsed again will not change, as is illustrated below. Empty
    /// cells are encoded as empty entries.
    ///
    /// ```
    /// use sudoku_engine::SudokuBoard;
    ///
    /// let mut board = SudokuBoard::empty();
    ///
    /// // Just some arbitrary changes to create some content.
    /// board.set_cell(1, 1, 4).unwrap();
    /// board.set_cell(2, 1, 5).unwrap();
    ///
    /// let board_str = board.to_parseable_string();
    /// let board_parsed = SudokuBoard::parse(board_str.as_str()).unwrap();
    /// assert_eq!(board, board_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(cell_to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position. 0 denotes an
    /// empty cell.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, row: usize, column: usize) -> SudokuResult<u8> {
        if row >= SudokuBoard::SIZE || column >= SudokuBoard::SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(row, column)])
        }
    }

    /// Indicates whether the cell at the specified position contains the
    /// given digit. This will return `false` if there is a different digit
    /// in that cell or it is empty. Empty cells are not considered to
    /// contain any digit, so querying for 0 always yields `false`.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `digit`: The digit to check whether it is in the specified cell.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_digit(&self, row: usize, column: usize, digit: u8)
            -> SudokuResult<bool> {
        Ok(digit != 0 && self.get_cell(row, column)? == digit)
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    /// Assigning 0 empties the cell.
    ///
    /// No Sudoku rules are checked by this method. Callers are responsible
    /// for the correctness of the written digit; duplicates are only
    /// detected on demand by [SudokuBoard::is_valid].
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[0, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are not in
    /// the specified range.
    /// * `SudokuError::InvalidDigit` If `digit` is greater than 9.
    pub fn set_cell(&mut self, row: usize, column: usize, digit: u8)
            -> SudokuResult<()> {
        if row >= SudokuBoard::SIZE || column >= SudokuBoard::SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if digit > 9 {
            return Err(SudokuError::InvalidDigit);
        }

        self.cells[index(row, column)] = digit;
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, row: usize, column: usize)
            -> SudokuResult<()> {
        self.set_cell(row, column, 0)
    }

    fn rows_valid(&self) -> bool {
        let mut set = DigitSet::new();

        for row in 0..SudokuBoard::SIZE {
            set.clear();

            for column in 0..SudokuBoard::SIZE {
                let digit = self.cells[index(row, column)];

                if digit != 0 && !set.insert(digit).unwrap() {
                    return false;
                }
            }
        }

        true
    }

    fn columns_valid(&self) -> bool {
        let mut set = DigitSet::new();

        for column in 0..SudokuBoard::SIZE {
            set.clear();

            for row in 0..SudokuBoard::SIZE {
                let digit = self.cells[index(row, column)];

                if digit != 0 && !set.insert(digit).unwrap() {
                    return false;
                }
            }
        }

        true
    }

    fn blocks_valid(&self) -> bool {
        let mut set = DigitSet::new();

        for block_row in 0..SudokuBoard::BLOCK_SIZE {
            for block_column in 0..SudokuBoard::BLOCK_SIZE {
                set.clear();

                let base_row = block_row * SudokuBoard::BLOCK_SIZE;
                let base_column = block_column * SudokuBoard::BLOCK_SIZE;

                for sub_row in 0..SudokuBoard::BLOCK_SIZE {
                    for sub_column in 0..SudokuBoard::BLOCK_SIZE {
                        let digit = self.cells[index(base_row + sub_row,
                            base_column + sub_column)];

                        if digit != 0 && !set.insert(digit).unwrap() {
                            return false;
                        }
                    }
                }
            }
        }

        true
    }

    /// Indicates whether this board satisfies the Sudoku rules given its
    /// current content. That is the case iff, for every row, every column,
    /// and every 3x3 block, the non-zero digits within are pairwise
    /// distinct. Empty cells are ignored, so a board does not need to be
    /// complete to be valid.
    pub fn is_valid(&self) -> bool {
        self.rows_valid() && self.columns_valid() && self.blocks_valid()
    }

    /// Indicates whether this board is complete, i.e. every cell is filled
    /// with a digit. Note that this makes no statement about validity; a
    /// complete board may still contain duplicates.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&c| c != 0)
    }

    /// Indicates whether this board is empty, i.e. no cell is filled with a
    /// digit. In this case, [SudokuBoard::count_filled] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Scans the cells in row-major order, that is, each row is exhausted
    /// before the next one is considered, and returns the coordinates of the
    /// first empty cell as a `(row, column)` pair. If every cell is filled,
    /// `None` is returned.
    ///
    /// Solvers rely on this scan order to decide which cell to fill next.
    /// Together with a seeded random number generator it makes search paths
    /// reproducible.
    pub fn first_empty_cell(&self) -> Option<(usize, usize)> {
        for row in 0..SudokuBoard::SIZE {
            for column in 0..SudokuBoard::SIZE {
                if self.cells[index(row, column)] == 0 {
                    return Some((row, column));
                }
            }
        }

        None
    }

    /// Counts the number of filled cells on this board. While on average
    /// puzzles with less filled cells are harder, this is *not* a reliable
    /// measure of difficulty.
    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Gets a reference to the array which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[u8; SudokuBoard::CELL_COUNT] {
        &self.cells
    }
}

impl Default for SudokuBoard {
    fn default() -> SudokuBoard {
        SudokuBoard::empty()
    }
}

impl From<SudokuBoard> for String {
    fn from(board: SudokuBoard) -> String {
        board.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuBoard {
    type Error = BoardParseError;

    fn try_from(code: String) -> Result<SudokuBoard, BoardParseError> {
        SudokuBoard::parse(code.as_str())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn partial_board() -> SudokuBoard {
        SudokuBoard::parse("\
            5,3, , ,7, , , , ,\
            6, , ,1,9,5, , , ,\
             ,9,8, , , , ,6, ,\
            8, , , ,6, , , ,3,\
            4, , ,8, ,3, , ,1,\
            7, , , ,2, , , ,6,\
             ,6, , , , ,2,8, ,\
             , , ,4,1,9, , ,5,\
             , , , ,8, , ,7,9").unwrap()
    }

    fn full_board() -> SudokuBoard {
        SudokuBoard::parse("\
            5,3,4,6,7,8,9,1,2,\
            6,7,2,1,9,5,3,4,8,\
            1,9,8,3,4,2,5,6,7,\
            8,5,9,7,6,1,4,2,3,\
            4,2,6,8,5,3,7,9,1,\
            7,1,3,9,2,4,8,5,6,\
            9,6,1,5,3,7,2,8,4,\
            2,8,7,4,1,9,6,3,5,\
            3,4,5,2,8,6,1,7,9").unwrap()
    }

    #[test]
    fn parse_ok() {
        let board = partial_board();

        assert_eq!(5, board.get_cell(0, 0).unwrap());
        assert_eq!(3, board.get_cell(0, 1).unwrap());
        assert_eq!(0, board.get_cell(0, 2).unwrap());
        assert_eq!(7, board.get_cell(0, 4).unwrap());
        assert_eq!(1, board.get_cell(1, 3).unwrap());
        assert_eq!(9, board.get_cell(2, 1).unwrap());
        assert_eq!(0, board.get_cell(8, 0).unwrap());
        assert_eq!(9, board.get_cell(8, 8).unwrap());
        assert_eq!(30, board.count_filled());
    }

    #[test]
    fn parse_accepts_zero_as_empty() {
        let code = vec!["0"; SudokuBoard::CELL_COUNT].join(",");
        let board = SudokuBoard::parse(code.as_str()).unwrap();

        assert!(board.is_empty());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        let too_few = vec!["1"; SudokuBoard::CELL_COUNT - 1].join(",");
        let too_many = vec!["1"; SudokuBoard::CELL_COUNT + 1].join(",");

        assert_eq!(Err(BoardParseError::WrongNumberOfCells),
            SudokuBoard::parse(too_few.as_str()));
        assert_eq!(Err(BoardParseError::WrongNumberOfCells),
            SudokuBoard::parse(too_many.as_str()));
    }

    #[test]
    fn parse_number_format_error() {
        let mut entries = vec![""; SudokuBoard::CELL_COUNT];
        entries[17] = "#";
        let code = entries.join(",");

        assert_eq!(Err(BoardParseError::NumberFormatError),
            SudokuBoard::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_digit() {
        let mut entries = vec![""; SudokuBoard::CELL_COUNT];
        entries[40] = "12";
        let code = entries.join(",");

        assert_eq!(Err(BoardParseError::InvalidDigit),
            SudokuBoard::parse(code.as_str()));
    }

    #[test]
    fn to_parseable_string() {
        let mut board = SudokuBoard::empty();

        assert_eq!(",".repeat(SudokuBoard::CELL_COUNT - 1),
            board.to_parseable_string());

        board.set_cell(0, 0, 1).unwrap();
        board.set_cell(4, 4, 5).unwrap();
        board.set_cell(8, 8, 9).unwrap();

        let reparsed =
            SudokuBoard::parse(board.to_parseable_string().as_str()).unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn cell_access() {
        let mut board = SudokuBoard::empty();

        assert_eq!(0, board.get_cell(3, 4).unwrap());

        board.set_cell(3, 4, 7).unwrap();
        assert_eq!(7, board.get_cell(3, 4).unwrap());
        assert!(board.has_digit(3, 4, 7).unwrap());
        assert!(!board.has_digit(3, 4, 6).unwrap());

        board.set_cell(3, 4, 2).unwrap();
        assert_eq!(2, board.get_cell(3, 4).unwrap());

        board.clear_cell(3, 4).unwrap();
        assert_eq!(0, board.get_cell(3, 4).unwrap());
        assert!(!board.has_digit(3, 4, 0).unwrap());
    }

    #[test]
    fn setting_zero_empties_cell() {
        let mut board = SudokuBoard::empty();
        board.set_cell(5, 5, 8).unwrap();
        board.set_cell(5, 5, 0).unwrap();

        assert!(board.is_empty());
    }

    #[test]
    fn cell_access_errors() {
        let mut board = SudokuBoard::empty();

        assert_eq!(Err(SudokuError::OutOfBounds), board.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), board.get_cell(0, 9));
        assert_eq!(Err(SudokuError::OutOfBounds), board.set_cell(10, 0, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), board.clear_cell(0, 10));
        assert_eq!(Err(SudokuError::OutOfBounds), board.has_digit(9, 9, 1));
        assert_eq!(Err(SudokuError::InvalidDigit), board.set_cell(0, 0, 10));
        assert_eq!(0, board.get_cell(0, 0).unwrap());
    }

    #[test]
    fn count_filled_and_empty_and_complete() {
        let empty = SudokuBoard::empty();
        let partial = partial_board();
        let full = full_board();

        assert_eq!(0, empty.count_filled());
        assert_eq!(30, partial.count_filled());
        assert_eq!(81, full.count_filled());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_complete());
        assert!(!partial.is_complete());
        assert!(full.is_complete());
    }

    #[test]
    fn first_empty_cell_scans_row_major() {
        let mut board = SudokuBoard::empty();
        assert_eq!(Some((0, 0)), board.first_empty_cell());

        board.set_cell(0, 0, 1).unwrap();
        assert_eq!(Some((0, 1)), board.first_empty_cell());

        for column in 1..SudokuBoard::SIZE {
            board.set_cell(0, column, 1).unwrap();
        }

        assert_eq!(Some((1, 0)), board.first_empty_cell());
        assert_eq!(None, full_board().first_empty_cell());
    }

    #[test]
    fn valid_boards_recognized() {
        assert!(SudokuBoard::empty().is_valid());
        assert!(partial_board().is_valid());
        assert!(full_board().is_valid());
    }

    #[test]
    fn row_duplicate_invalid() {
        let mut board = SudokuBoard::empty();
        board.set_cell(2, 1, 6).unwrap();
        board.set_cell(2, 7, 6).unwrap();

        assert!(!board.is_valid());
    }

    #[test]
    fn column_duplicate_invalid() {
        let mut board = SudokuBoard::empty();
        board.set_cell(0, 4, 9).unwrap();
        board.set_cell(8, 4, 9).unwrap();

        assert!(!board.is_valid());
    }

    #[test]
    fn block_duplicate_invalid() {
        // Same block, but different row and column.
        let mut board = SudokuBoard::empty();
        board.set_cell(3, 3, 2).unwrap();
        board.set_cell(4, 5, 2).unwrap();

        assert!(!board.is_valid());
    }

    #[test]
    fn complete_board_may_be_invalid() {
        let code = vec!["1"; SudokuBoard::CELL_COUNT].join(",");
        let board = SudokuBoard::parse(code.as_str()).unwrap();

        assert!(board.is_complete());
        assert!(!board.is_valid());
    }

    #[test]
    fn validity_ignores_empty_cells() {
        let mut board = SudokuBoard::empty();
        board.set_cell(0, 0, 5).unwrap();
        board.set_cell(4, 4, 5).unwrap();
        board.set_cell(8, 8, 5).unwrap();

        assert!(board.is_valid());
    }

    #[test]
    fn serde_round_trip() {
        let board = partial_board();
        let json = serde_json::to_string(&board).unwrap();

        assert_eq!(format!("\"{}\"", board.to_parseable_string()), json);

        let deserialized: SudokuBoard =
            serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn serde_rejects_malformed_code() {
        let result = serde_json::from_str::<SudokuBoard>("\"1,2,3\"");
        assert!(result.is_err());
    }
}
