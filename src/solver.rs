//! This module contains the logic for solving Sudoku boards.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver] as a generally usable implementation.
//! The free function [is_safe] is the placement predicate the search builds
//! on. It is exported since it is also useful on its own, for example to
//! flag conflicting inputs in a user interface.

use crate::SudokuBoard;

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

fn row_safe(board: &SudokuBoard, row: usize, digit: u8) -> bool {
    for column in 0..SudokuBoard::SIZE {
        if board.has_digit(row, column, digit).unwrap() {
            return false;
        }
    }

    true
}

fn column_safe(board: &SudokuBoard, column: usize, digit: u8) -> bool {
    for row in 0..SudokuBoard::SIZE {
        if board.has_digit(row, column, digit).unwrap() {
            return false;
        }
    }

    true
}

fn block_safe(board: &SudokuBoard, row: usize, column: usize, digit: u8)
        -> bool {
    let base_row = (row / SudokuBoard::BLOCK_SIZE) * SudokuBoard::BLOCK_SIZE;
    let base_column =
        (column / SudokuBoard::BLOCK_SIZE) * SudokuBoard::BLOCK_SIZE;

    for sub_row in 0..SudokuBoard::BLOCK_SIZE {
        for sub_column in 0..SudokuBoard::BLOCK_SIZE {
            let row = base_row + sub_row;
            let column = base_column + sub_column;

            if board.has_digit(row, column, digit).unwrap() {
                return false;
            }
        }
    }

    true
}

/// Indicates whether the given digit can be placed in the cell at the
/// specified position without violating the Sudoku rules, that is, whether
/// the digit is absent from the cell's entire row, column, and 3x3 block.
/// The current content of the queried cell itself is irrelevant; it is
/// usually empty.
///
/// # Arguments
///
/// * `board`: The board on which the placement is checked.
/// * `row`: The row (y-coordinate) of the cell to check. Must be in the
/// range `[0, 9[`.
/// * `column`: The column (x-coordinate) of the cell to check. Must be in
/// the range `[0, 9[`.
/// * `digit`: The digit whose placement is checked. Only digits in the range
/// `[1, 9]` can conflict; for 0, `true` is always returned, as no cell
/// contains it.
pub fn is_safe(board: &SudokuBoard, row: usize, column: usize, digit: u8)
        -> bool {
    row_safe(board, row, digit) &&
        column_safe(board, column, digit) &&
        block_safe(board, row, column, digit)
}

/// An enumeration of the ways an attempt to solve a board can end. It is
/// returned by [Solver::solve].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution {

    /// Indicates that every cell of the board is filled. The solver placed
    /// digits in all initially empty cells without introducing a duplicate
    /// into any row, column, or block.
    Solved,

    /// Indicates that the solver ran out of options before the board was
    /// complete. The board is left in the state it had before the attempt,
    /// in particular every initially empty cell is still empty.
    Exhausted
}

impl Resolution {

    /// Indicates whether this resolution is [Resolution::Solved].
    pub fn is_solved(self) -> bool {
        self == Resolution::Solved
    }
}

/// A hint for one specific cell of a board: the digit a solver would place
/// in the board's first empty cell. Hints are computed by [Solver::hint].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hint {

    /// The row (y-coordinate) of the hinted cell.
    pub row: usize,

    /// The column (x-coordinate) of the hinted cell.
    pub column: usize,

    /// The digit to place in the hinted cell.
    pub digit: u8
}

/// A trait for structs which have the ability to fill the empty cells of
/// Sudoku boards.
pub trait Solver {

    /// Attempts to fill every empty cell of the given board with a digit
    /// such that no row, column, or 3x3 block contains a duplicate. On
    /// success, the board holds the found solution and [Resolution::Solved]
    /// is returned. On failure, [Resolution::Exhausted] is returned and the
    /// board is left unchanged.
    ///
    /// A board without empty cells is reported as solved without further
    /// checks, so providing a complete but invalid board also yields
    /// [Resolution::Solved].
    fn solve(&mut self, board: &mut SudokuBoard) -> Resolution;

    /// Computes a hint for the given board without modifying it. The hinted
    /// cell is the board's first empty cell in row-major order and the
    /// hinted digit is the one this solver would place there, determined by
    /// solving a copy of the board. `None` is returned if the board has no
    /// empty cell or this solver cannot solve it.
    fn hint(&mut self, board: &SudokuBoard) -> Option<Hint> {
        let (row, column) = board.first_empty_cell()?;
        let mut copy = board.clone();

        if self.solve(&mut copy).is_solved() {
            let digit = copy.get_cell(row, column).unwrap();

            Some(Hint {
                row,
                column,
                digit
            })
        }
        else {
            None
        }
    }
}

/// A [Solver] which fills the board's first empty cell (in row-major order)
/// by trying the digits 1 to 9 in a randomly shuffled order, recursing for
/// each safe one, and resetting the cell to empty once every candidate has
/// led to a dead end. It finds a solution whenever the empty cells admit
/// one, though its worst-case runtime is exponential.
///
/// Since the candidate order in every cell is drawn from the wrapped random
/// number generator, solving an empty board produces a random full grid,
/// which is what puzzle generation builds on. With a seeded generator the
/// entire search is reproducible.
pub struct BacktrackingSolver<R: Rng> {
    rng: R
}

impl<R: Rng> BacktrackingSolver<R> {

    /// Creates a new backtracking solver that draws its candidate orders
    /// from the given random number generator.
    pub fn new(rng: R) -> BacktrackingSolver<R> {
        BacktrackingSolver {
            rng
        }
    }

    fn solve_rec(&mut self, board: &mut SudokuBoard) -> Resolution {
        let (row, column) = match board.first_empty_cell() {
            Some(coordinates) => coordinates,
            None => return Resolution::Solved
        };

        let mut candidates: Vec<u8> = (1..=9).collect();
        candidates.shuffle(&mut self.rng);

        for candidate in candidates {
            if is_safe(board, row, column, candidate) {
                board.set_cell(row, column, candidate).unwrap();

                if self.solve_rec(board).is_solved() {
                    return Resolution::Solved;
                }

                board.clear_cell(row, column).unwrap();
            }
        }

        Resolution::Exhausted
    }
}

impl BacktrackingSolver<ThreadRng> {

    /// Creates a new backtracking solver that uses `rand::thread_rng()` for
    /// its candidate orders.
    pub fn new_default() -> BacktrackingSolver<ThreadRng> {
        BacktrackingSolver::new(rand::thread_rng())
    }
}

impl<R: Rng> Solver for BacktrackingSolver<R> {
    fn solve(&mut self, board: &mut SudokuBoard) -> Resolution {
        self.solve_rec(board)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // The puzzle and its unique solution are the well-known example from the
    // Wikipedia article on Sudoku.

    fn puzzle() -> SudokuBoard {
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

    fn solution() -> SudokuBoard {
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

    // A board with exactly one empty cell, (0, 1), whose only row candidate
    // is blocked by the column, so any solve attempt exhausts immediately.
    fn blocked_board() -> SudokuBoard {
        let mut board = solution();
        board.clear_cell(0, 1).unwrap();
        board.set_cell(4, 1, 3).unwrap();
        board
    }

    fn seeded_solver(seed: u64) -> BacktrackingSolver<ChaCha8Rng> {
        BacktrackingSolver::new(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn is_safe_detects_row_conflict() {
        let mut board = SudokuBoard::empty();
        board.set_cell(0, 0, 5).unwrap();

        assert!(!is_safe(&board, 0, 8, 5));
        assert!(is_safe(&board, 0, 8, 6));
    }

    #[test]
    fn is_safe_detects_column_conflict() {
        let mut board = SudokuBoard::empty();
        board.set_cell(0, 3, 7).unwrap();

        assert!(!is_safe(&board, 8, 3, 7));
        assert!(is_safe(&board, 8, 3, 1));
    }

    #[test]
    fn is_safe_detects_block_conflict() {
        // Same block as (5, 5), but a different row and column.
        let mut board = SudokuBoard::empty();
        board.set_cell(3, 3, 9).unwrap();

        assert!(!is_safe(&board, 5, 5, 9));
        assert!(is_safe(&board, 5, 5, 8));
    }

    #[test]
    fn is_safe_trivially_true_for_zero() {
        assert!(is_safe(&solution(), 0, 0, 0));
    }

    #[test]
    fn backtracking_solves_classic_puzzle() {
        // The puzzle has a unique solution, so every seed must find it.
        let mut board = puzzle();
        let mut solver = seeded_solver(42);

        assert_eq!(Resolution::Solved, solver.solve(&mut board));
        assert_eq!(solution(), board, "Solver gave wrong grid.");
    }

    #[test]
    fn complete_board_solved_without_changes() {
        let mut board = solution();
        let mut solver = seeded_solver(1);

        assert_eq!(Resolution::Solved, solver.solve(&mut board));
        assert_eq!(solution(), board);
    }

    #[test]
    fn exhausted_solve_leaves_board_unchanged() {
        let mut board = blocked_board();
        let snapshot = board.clone();
        let mut solver = seeded_solver(1);

        assert_eq!(Resolution::Exhausted, solver.solve(&mut board));
        assert_eq!(snapshot, board);
        assert_eq!(0, board.get_cell(0, 1).unwrap());
    }

    #[test]
    fn empty_board_solvable_with_any_seed() {
        for seed in 0..10 {
            let mut board = SudokuBoard::empty();
            let mut solver = seeded_solver(seed);

            assert!(solver.solve(&mut board).is_solved());
            assert!(board.is_complete());
            assert!(board.is_valid());
        }
    }

    #[test]
    fn same_seed_reproduces_grid() {
        let mut first = SudokuBoard::empty();
        let mut second = SudokuBoard::empty();

        seeded_solver(7).solve(&mut first);
        seeded_solver(7).solve(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_find_different_grids() {
        let mut first = SudokuBoard::empty();
        let mut second = SudokuBoard::empty();

        seeded_solver(1).solve(&mut first);
        seeded_solver(2).solve(&mut second);

        assert_ne!(first, second);
    }

    #[test]
    fn hint_names_first_empty_cell() {
        // The first empty cell of the puzzle is (0, 2), which must hold 4.
        let hint = seeded_solver(3).hint(&puzzle()).unwrap();

        assert_eq!(0, hint.row);
        assert_eq!(2, hint.column);
        assert_eq!(4, hint.digit);
    }

    #[test]
    fn hint_on_complete_board_is_none() {
        assert_eq!(None, seeded_solver(3).hint(&solution()));
    }

    #[test]
    fn hint_on_unsolvable_board_is_none() {
        assert_eq!(None, seeded_solver(3).hint(&blocked_board()));
    }
}
