//! Errors raised while building squares and boards.
//!
//! Game actions themselves never fail; see [`crate::GameController`].

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("Square ({row}, {col}) is outside the 8x8 board")]
    SquareOutOfRange { row: u8, col: u8 },

    #[error("Layout row {row} has {len} cells, expected 8")]
    BadRowWidth { row: usize, len: usize },

    #[error("Unknown glyph {glyph:?} at ({row}, {col})")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
}

pub type BoardResult<T> = Result<T, BoardError>;
