use std::fmt;

use crate::error::{BoardError, BoardResult};
use crate::types::*;

/// Standard starting layout, row 0 first.
const STANDARD_LAYOUT: [&str; 8] = [
    "♜♞♝♛♚♝♞♜",
    "♟♟♟♟♟♟♟♟",
    "........",
    "........",
    "........",
    "........",
    "♙♙♙♙♙♙♙♙",
    "♖♘♗♕♔♗♘♖",
];

/// 8x8 grid of optional pieces, indexed by [`Square::index`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    pub fn standard() -> Self {
        let mut board = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            board.squares[f] = Some(Piece::new(Color::Black, kind));
            board.squares[8 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[48 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[56 + f] = Some(Piece::new(Color::White, kind));
        }
        board
    }

    /// Builds a board from eight rows of eight cells, row 0 first.
    ///
    /// A cell is a chess glyph (see [`Piece::glyph`]), or `.` / space for an
    /// empty square.
    pub fn from_glyph_rows(rows: &[&str; 8]) -> BoardResult<Self> {
        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != 8 {
                return Err(BoardError::BadRowWidth {
                    row,
                    len: cells.len(),
                });
            }
            for (col, &glyph) in cells.iter().enumerate() {
                if glyph == '.' || glyph == ' ' {
                    continue;
                }
                let piece =
                    Piece::from_glyph(glyph).ok_or(BoardError::UnknownGlyph { row, col, glyph })?;
                board.squares[row * 8 + col] = Some(piece);
            }
        }
        Ok(board)
    }

    /// Layout text of the standard position, as accepted by [`Board::from_glyph_rows`].
    pub fn standard_layout() -> &'static [&'static str; 8] {
        &STANDARD_LAYOUT
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }
    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    /// Removes and returns whatever stands on `sq`.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    pub fn count(&self, color: Color) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|pc| pc.color == color)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.squares.chunks(8) {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', Piece::glyph))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
