//! This module contains the session layer, which ties boards, solving, and
//! generating together into a playable game.
//!
//! A [Session] is created for a difficulty tier, generates its own puzzle,
//! and from then on manages every interaction of one game: moves, undo,
//! hints, validity checks, solving, timing, and scoring.

use crate::SudokuBoard;
use crate::difficulty::{Difficulty, DifficultySettings};
use crate::error::{SudokuError, SudokuResult};
use crate::generator::Generator;
use crate::solver::{BacktrackingSolver, Hint, Resolution, Solver};

use rand::Rng;
use rand::rngs::ThreadRng;

use std::convert::TryFrom;
use std::time::{Duration, Instant};

/// A record of one move made in a session: which cell was filled and what it
/// contained before. Moves are kept on the session's history stack so they
/// can be undone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Move {

    /// The row (y-coordinate) of the filled cell.
    pub row: usize,

    /// The column (x-coordinate) of the filled cell.
    pub column: usize,

    /// The digit the cell held before the move. [Session::undo] writes this
    /// back into the cell. Moves only ever fill empty cells, so this is
    /// always 0 at present.
    pub previous: u8
}

fn compute_score(base_score: u32, elapsed: Duration) -> u32 {
    let minutes = elapsed.as_secs() / 60;
    let deduction = u32::try_from(minutes).unwrap_or(u32::MAX);
    base_score.saturating_sub(deduction)
}

/// A running game of Sudoku. A session owns the board being played together
/// with everything else that belongs to one game: the difficulty tier and
/// its settings, the history of moves for undoing, the elapsed time, and the
/// score. It is the type a user interface is expected to interact with.
///
/// All player placements go through [Session::make_move], which records them
/// on the history stack. [Session::hint] and [Session::solve] write to the
/// board directly and leave the stack untouched, so [Session::undo] only
/// ever reverts moves the player made.
///
/// For most cases, [Session::new_default] provides a session with sensible
/// defaults, namely a [Generator::new_default].
pub struct Session<S: Solver, R: Rng> {
    board: SudokuBoard,
    generator: Generator<S, R>,
    difficulty: Difficulty,
    settings: DifficultySettings,
    history: Vec<Move>,
    start_time: Instant,
    elapsed: Duration,
    score: u32
}

impl Session<BacktrackingSolver<ThreadRng>, ThreadRng> {

    /// Creates a new session with a default generator (see
    /// [Generator::new_default]) and immediately starts a game at the given
    /// difficulty tier.
    pub fn new_default(difficulty: Difficulty)
            -> Session<BacktrackingSolver<ThreadRng>, ThreadRng> {
        Session::new(Generator::new_default(), difficulty)
    }
}

impl<S: Solver, R: Rng> Session<S, R> {

    /// Creates a new session that obtains its puzzles from the given
    /// generator and immediately starts a game at the given difficulty tier,
    /// as if by [Session::new_game].
    pub fn new(generator: Generator<S, R>, difficulty: Difficulty)
            -> Session<S, R> {
        let mut session = Session {
            board: SudokuBoard::empty(),
            generator,
            difficulty,
            settings: DifficultySettings::of(difficulty),
            history: Vec::new(),
            start_time: Instant::now(),
            elapsed: Duration::from_secs(0),
            score: 0
        };
        session.new_game(difficulty);
        session
    }

    /// Starts a new game at the given difficulty tier. A fresh puzzle is
    /// generated, the history and score are reset, and the clock starts
    /// over. If puzzle generation fails, the session falls back to an empty
    /// board instead of reporting an error, so it always holds a playable
    /// board afterwards.
    pub fn new_game(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.settings = DifficultySettings::of(difficulty);
        self.board = match self.generator.generate(self.settings) {
            Ok(board) => board,
            Err(_) => SudokuBoard::empty()
        };
        self.history.clear();
        self.start_time = Instant::now();
        self.elapsed = Duration::from_secs(0);
        self.score = 0;
    }

    /// Places the given digit in the cell at the specified position, if that
    /// cell is currently empty, and records the move on the history stack.
    /// If the cell already contains a digit, the board and the history are
    /// left unchanged; overwriting requires undoing the earlier move first.
    ///
    /// The placement itself is unconditional in the Sudoku sense: a digit
    /// that conflicts with its row, column, or block is placed all the same
    /// and only flagged once [Session::check] is called.
    ///
    /// If the move completes the board and the result is valid, the game is
    /// won. The elapsed time is updated one final time and the score is
    /// computed (see [Session::score]).
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the cell to fill. Must be in the
    /// range `[0, 9[`.
    /// * `column`: The column (x-coordinate) of the cell to fill. Must be in
    /// the range `[0, 9[`.
    /// * `digit`: The digit to place. Must be in the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If `row` or `column` is not in the
    /// specified range.
    /// * `SudokuError::InvalidDigit` If `digit` is 0 or greater than 9. A
    /// move on an occupied cell is not an error, it is simply ignored.
    pub fn make_move(&mut self, row: usize, column: usize, digit: u8)
            -> SudokuResult<()> {
        if digit == 0 || digit > 9 {
            return Err(SudokuError::InvalidDigit);
        }

        let current = self.board.get_cell(row, column)?;

        if current != 0 {
            return Ok(());
        }

        self.board.set_cell(row, column, digit)?;
        self.history.push(Move {
            row,
            column,
            previous: current
        });

        if self.board.is_complete() && self.board.is_valid() {
            self.update_time();
            self.score = compute_score(self.settings.base_score, self.elapsed);
        }

        Ok(())
    }

    /// Reverts the most recent move that was made through
    /// [Session::make_move] and has not been undone yet, writing the
    /// previous content back into the cell. Returns `true` if a move was
    /// undone and `false` if the history is empty. There is no redo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(mov) => {
                self.board.set_cell(mov.row, mov.column, mov.previous)
                    .unwrap();
                true
            },
            None => false
        }
    }

    /// Asks the session's solver for a hint (see [Solver::hint]) and applies
    /// it to the board: the first empty cell is filled with a digit that
    /// leads to some solution. The applied hint is returned.
    ///
    /// Hinted digits are not recorded on the history stack, so they are not
    /// reverted by [Session::undo], and a hint that completes the board does
    /// not count as winning the game.
    ///
    /// `None` is returned, and nothing is changed, if the board has no empty
    /// cell or the solver cannot solve it.
    pub fn hint(&mut self) -> Option<Hint> {
        let hint = self.generator.solver_mut().hint(&self.board)?;
        self.board.set_cell(hint.row, hint.column, hint.digit).unwrap();
        Some(hint)
    }

    /// Indicates whether the board is currently free of duplicate digits in
    /// every row, column, and block (see [SudokuBoard::is_valid]). Empty
    /// cells are permitted, so this can be used mid-game to check that the
    /// moves made so far are consistent with each other and the clues.
    pub fn check(&self) -> bool {
        self.board.is_valid()
    }

    /// Fills the remaining empty cells of the board with the session's
    /// solver, giving up the game. On [Resolution::Solved], the board is
    /// complete afterwards; on [Resolution::Exhausted], it is unchanged.
    /// Solved cells are not recorded on the history stack, and solving does
    /// not award a score.
    pub fn solve(&mut self) -> Resolution {
        self.generator.solver_mut().solve(&mut self.board)
    }

    /// Recomputes the elapsed time of the current game. The session does not
    /// run a timer of its own; callers poll this method, for example once
    /// per second, and read the result through [Session::elapsed_seconds].
    pub fn update_time(&mut self) {
        self.elapsed = self.start_time.elapsed();
    }

    /// Gets the elapsed time of the current game in whole seconds, as of the
    /// last call to [Session::update_time] or, if the game was won, as of
    /// the winning move.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed.as_secs()
    }

    /// Gets a reference to the board being played.
    pub fn board(&self) -> &SudokuBoard {
        &self.board
    }

    /// Gets the difficulty tier of the current game.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Gets the difficulty settings of the current game.
    pub fn settings(&self) -> DifficultySettings {
        self.settings
    }

    /// Gets the moves made in the current game that have not been undone,
    /// oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Gets the score of the current game. It is 0 until the game is won,
    /// that is, until a move completes the board without duplicates. On
    /// winning, it is set to the base score of the difficulty settings minus
    /// one point per full minute of elapsed time, to a minimum of 0.
    pub fn score(&self) -> u32 {
        self.score
    }
}
