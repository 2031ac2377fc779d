//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used by the
//! validity scans over rows, columns, and blocks.

use crate::error::{SudokuError, SudokuResult};

/// A set of Sudoku digits (1 to 9) that is implemented as a bit mask. Each
/// digit is represented by one bit in a single number. This generally has
/// better performance than a `HashSet` and makes clearing the set between two
/// scanned units trivial.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSet {
    content: u16
}

impl DigitSet {

    /// Creates a new, empty `DigitSet`.
    pub fn new() -> DigitSet {
        DigitSet {
            content: 0
        }
    }

    fn mask(digit: u8) -> SudokuResult<u16> {
        if digit == 0 || digit > 9 {
            Err(SudokuError::InvalidDigit)
        }
        else {
            Ok(1u16 << digit)
        }
    }

    /// Indicates whether this set contains the given digit, in which case
    /// this method returns `true`. If it is not contained or outside the
    /// range of Sudoku digits, `false` will be returned.
    pub fn contains(&self, digit: u8) -> bool {
        if let Ok(mask) = DigitSet::mask(digit) {
            (self.content & mask) > 0
        }
        else {
            false
        }
    }

    /// Inserts the given digit into this set, such that [DigitSet::contains]
    /// returns `true` for this digit afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// not present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `digit` is 0 or greater than 9. In that case,
    /// `SudokuError::InvalidDigit` is returned.
    pub fn insert(&mut self, digit: u8) -> SudokuResult<bool> {
        let mask = DigitSet::mask(digit)?;

        if self.content & mask == 0 {
            self.content |= mask;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Removes all digits from this set, such that [DigitSet::contains] will
    /// return `false` for all inputs and [DigitSet::is_empty] will return
    /// `true`.
    pub fn clear(&mut self) {
        self.content = 0;
    }

    /// Indicates whether this set is empty, i.e. contains no digits.
    pub fn is_empty(&self) -> bool {
        self.content == 0
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.content.count_ones() as usize
    }
}

impl Default for DigitSet {
    fn default() -> DigitSet {
        DigitSet::new()
    }
}
