//! Grid module - the board's spatial state
//!
//! A fixed 7x6 grid of discs stored as a flat array for cache locality and
//! zero allocation. Coordinates are (column, row) with column 0 leftmost and
//! row 0 at the BOTTOM; columns fill upward like dropping a real disc.

use std::fmt;

use dropfour_types::{Disc, COLS, ROWS};

/// Total number of cells on the grid
const GRID_CELLS: usize = COLS * ROWS;

/// The playing grid - 7 columns x 6 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, column-major order (col * ROWS + row)
    cells: [Disc; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Disc::Empty; GRID_CELLS],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: usize, row: usize) -> Option<usize> {
        if col >= COLS || row >= ROWS {
            return None;
        }
        Some(col * ROWS + row)
    }

    /// Get cell at position (col, row)
    /// Returns None if out of bounds
    pub fn get(&self, col: usize, row: usize) -> Option<Disc> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at position (col, row)
    /// Returns false if out of bounds
    pub fn set(&mut self, col: usize, row: usize, disc: Disc) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.cells[idx] = disc;
                true
            }
            None => false,
        }
    }

    /// Get one column as a bottom-to-top slice
    ///
    /// # Panics
    ///
    /// Panics if `col >= COLS`.
    pub fn column(&self, col: usize) -> &[Disc] {
        &self.cells[col * ROWS..(col + 1) * ROWS]
    }

    /// Row index of the lowest empty cell in a column, or None if the column
    /// is full
    ///
    /// # Panics
    ///
    /// Panics if `col >= COLS`.
    pub fn first_empty_row(&self, col: usize) -> Option<usize> {
        self.column(col).iter().position(|&d| d == Disc::Empty)
    }

    /// The highest occupied cell in a column as (row, disc), or None if the
    /// column is empty
    ///
    /// # Panics
    ///
    /// Panics if `col >= COLS`.
    pub fn top_disc(&self, col: usize) -> Option<(usize, Disc)> {
        let column = self.column(col);
        column
            .iter()
            .rposition(|&d| d != Disc::Empty)
            .map(|row| (row, column[row]))
    }

    /// Check if a column has no empty cell left
    ///
    /// # Panics
    ///
    /// Panics if `col >= COLS`.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.first_empty_row(col).is_none()
    }

    /// Check drop validity: in every column the occupied cells form a
    /// contiguous run starting at row 0, with no gap underneath a disc
    pub fn is_drop_valid(&self) -> bool {
        (0..COLS).all(|col| {
            let column = self.column(col);
            match column.iter().position(|&d| d == Disc::Empty) {
                Some(first_empty) => column[first_empty..].iter().all(|&d| d == Disc::Empty),
                None => true,
            }
        })
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Disc] {
        &self.cells
    }

    /// Create from bottom-up column prefixes for testing; cells beyond each
    /// prefix stay empty
    #[cfg(test)]
    pub fn from_columns(columns: [&[Disc]; COLS]) -> Self {
        let mut grid = Self::new();
        for (col, pieces) in columns.iter().enumerate() {
            assert!(pieces.len() <= ROWS);
            for (row, &disc) in pieces.iter().enumerate() {
                grid.set(col, row, disc);
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    /// Render rows top to bottom, each cell as its 3-character label:
    /// `| RED | --- | ... |`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            f.write_str("|")?;
            for col in 0..COLS {
                write!(f, " {} |", self.cells[col * ROWS + row])?;
            }
            if row > 0 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
