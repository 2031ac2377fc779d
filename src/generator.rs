//! This module contains the logic for generating random Sudoku puzzles.
//!
//! Generation of a puzzle is done by first filling an empty board with a
//! [Solver] and then clearing the number of cells configured in the given
//! [DifficultySettings]. The cleared cells are chosen uniformly at random,
//! and no check for a unique solution is performed, so a generated puzzle
//! may admit more than one solution.

use crate::SudokuBoard;
use crate::difficulty::DifficultySettings;
use crate::error::{SudokuError, SudokuResult};
use crate::solver::{BacktrackingSolver, Solver};

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

/// A generator randomly generates Sudoku puzzles: boards whose empty cells
/// can be filled to a complete and valid grid. It uses a [Solver] to fill an
/// empty board with random digits and a random number generator to decide
/// which cells are cleared afterwards. For most cases, sensible defaults are
/// provided by [Generator::new_default].
pub struct Generator<S: Solver, R: Rng> {
    solver: S,
    rng: R
}

impl Generator<BacktrackingSolver<ThreadRng>, ThreadRng> {

    /// Creates a new generator that uses a [BacktrackingSolver] to fill the
    /// board and a `ThreadRng` to choose the cleared cells.
    pub fn new_default()
            -> Generator<BacktrackingSolver<ThreadRng>, ThreadRng> {
        Generator::new(BacktrackingSolver::new_default(), rand::thread_rng())
    }
}

impl<S: Solver, R: Rng> Generator<S, R> {

    /// Creates a new generator with the given solver and random number
    /// generator.
    ///
    /// # Arguments
    ///
    /// * `solver`: A [Solver] used to fill an empty board with random
    /// digits. It decides the content of the generated grid.
    /// * `rng`: A random number generator that decides which cells are
    /// cleared from the filled grid.
    pub fn new(solver: S, rng: R) -> Generator<S, R> {
        Generator {
            solver,
            rng
        }
    }

    /// Gets a mutable reference to the solver wrapped in this generator.
    pub fn solver_mut(&mut self) -> &mut S {
        &mut self.solver
    }

    /// Generates a new random puzzle whose number of empty cells is
    /// controlled by the given settings. The puzzle is valid and solvable,
    /// since it is obtained by clearing randomly chosen cells from a
    /// complete and valid grid.
    ///
    /// No check for a unique solution is performed. Clearing cells without
    /// re-solving keeps generation to a single search, at the price that a
    /// puzzle, especially at high removal counts, may admit several
    /// solutions. A [Solver::hint] on such a puzzle reports a digit that
    /// leads to some solution, not necessarily the grid the puzzle was
    /// derived from.
    ///
    /// # Arguments
    ///
    /// * `settings`: The [DifficultySettings] deciding how many cells are
    /// cleared. The stock tiers remove 40, 50, 60, or 70 of the 81 cells.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsolvable` If the wrapped solver failed to fill an
    /// empty board. This cannot happen with a [BacktrackingSolver], but may
    /// with a weaker solver.
    pub fn generate(&mut self, settings: DifficultySettings)
            -> SudokuResult<SudokuBoard> {
        let mut board = SudokuBoard::empty();

        if !self.solver.solve(&mut board).is_solved() {
            return Err(SudokuError::Unsolvable);
        }

        let mut coordinates: Vec<(usize, usize)> = (0..SudokuBoard::SIZE)
            .flat_map(|row| (0..SudokuBoard::SIZE)
                .map(move |column| (row, column)))
            .collect();
        coordinates.shuffle(&mut self.rng);

        for &(row, column) in
                coordinates.iter().take(settings.cells_to_remove) {
            board.clear_cell(row, column).unwrap();
        }

        Ok(board)
    }
}
