use crate::word::Word;

/// Number of columns of the grid
pub const GRID_WIDTH: usize = 8;

/// Number of rows of the grid
pub const GRID_HEIGHT: usize = 8;

/// Total number of cells
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_HEIGHT;

/// Set of lit cells for one frame
///
/// Built by OR-ing word masks and consumed by exactly one rendered frame.
/// Cell `i` lives in bit `63 - i`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IlluminationMask(u64);

impl IlluminationMask {
    /// Mask with every cell off
    pub const EMPTY: Self = Self(0);

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// OR the word's cells into the mask
    pub fn activate(&mut self, word: Word) {
        self.0 |= word.mask();
    }

    /// Builder form of [`IlluminationMask::activate`]
    #[must_use]
    pub const fn with(self, word: Word) -> Self {
        Self(self.0 | word.mask())
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether every cell of `word` is lit
    pub const fn contains(&self, word: Word) -> bool {
        self.0 & word.mask() == word.mask()
    }

    /// Whether cell `cell` is lit. Cells outside the grid are never lit.
    pub const fn is_lit(&self, cell: usize) -> bool {
        if cell >= CELL_COUNT {
            return false;
        }
        (self.0 >> (CELL_COUNT - 1 - cell)) & 1 == 1
    }

    /// Number of lit cells
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate lit cell indices in ascending order
    pub fn lit_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(|&cell| self.is_lit(cell))
    }
}

impl From<Word> for IlluminationMask {
    fn from(word: Word) -> Self {
        Self(word.mask())
    }
}

impl FromIterator<Word> for IlluminationMask {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Row and column of a cell
pub const fn row_col(cell: usize) -> (usize, usize) {
    (cell / GRID_WIDTH, cell % GRID_WIDTH)
}
