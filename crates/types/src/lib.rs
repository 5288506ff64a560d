//! Shared board types - dimensions and the disc enumeration
//!
//! This crate defines the fundamental types for the column-drop board game.
//! Everything here is pure data with no external dependencies, usable from the
//! core engine, tests, and any presentation layer alike.
//!
//! # Board Dimensions
//!
//! Standard Connect Four dimensions:
//!
//! - **Columns**: 7 (indexed 0-6)
//! - **Rows**: 6 (indexed 0-5, row 0 at the bottom)
//!
//! Both are compile-time constants; changing them here resizes the whole
//! engine for different game dynamics.
//!
//! # Disc Labels
//!
//! Every [`Disc`] variant renders as a fixed 3-character label so grid columns
//! stay aligned:
//!
//! | Variant | Label |
//! |---------|-------|
//! | `Empty` | `---` |
//! | `Red`   | `RED` |
//! | `Blue`  | `BLU` |
//!
//! # Examples
//!
//! ```
//! use dropfour_types::{Disc, COLS, ROWS};
//!
//! // Red always moves first; inversion flips between the two players.
//! let first = Disc::Red;
//! assert_eq!(first.invert(), Disc::Blue);
//!
//! // Parse from string (case-insensitive)
//! let parsed = Disc::from_str("red").unwrap();
//! assert_eq!(first, parsed);
//!
//! // Board dimensions
//! assert_eq!(COLS, 7);
//! assert_eq!(ROWS, 6);
//! ```

use std::fmt;

/// Board width in columns (7)
pub const COLS: usize = 7;

/// Board height in rows (6), filled bottom-up
pub const ROWS: usize = 6;

/// The contents of one board cell
///
/// A three-valued type: the two player discs plus `Empty`, which doubles as
/// the "no piece" sentinel for unoccupied cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    #[default]
    Empty,
    Red,
    Blue,
}

impl Disc {
    /// Every variant, in declaration order
    pub const ALL: [Disc; 3] = [Disc::Empty, Disc::Red, Disc::Blue];

    /// Swap the two players; `Empty` inverts to itself
    ///
    /// # Examples
    ///
    /// ```
    /// use dropfour_types::Disc;
    ///
    /// assert_eq!(Disc::Red.invert(), Disc::Blue);
    /// assert_eq!(Disc::Blue.invert(), Disc::Red);
    /// assert_eq!(Disc::Empty.invert(), Disc::Empty);
    /// ```
    pub fn invert(self) -> Self {
        match self {
            Disc::Red => Disc::Blue,
            Disc::Blue => Disc::Red,
            Disc::Empty => Disc::Empty,
        }
    }

    /// Parse a disc from its label (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use dropfour_types::Disc;
    ///
    /// assert_eq!(Disc::from_str("red"), Some(Disc::Red));
    /// assert_eq!(Disc::from_str("BLU"), Some(Disc::Blue));
    /// assert_eq!(Disc::from_str("---"), Some(Disc::Empty));
    /// assert_eq!(Disc::from_str("green"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Disc::Red),
            "blu" | "blue" => Some(Disc::Blue),
            "---" | "empty" => Some(Disc::Empty),
            _ => None,
        }
    }

    /// Convert to the fixed 3-character display label
    ///
    /// # Examples
    ///
    /// ```
    /// use dropfour_types::Disc;
    ///
    /// assert_eq!(Disc::Red.as_str(), "RED");
    /// assert_eq!(Disc::Empty.as_str(), "---");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Disc::Empty => "---",
            Disc::Red => "RED",
            Disc::Blue => "BLU",
        }
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
