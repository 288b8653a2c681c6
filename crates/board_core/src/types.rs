use std::fmt;

use crate::error::{BoardError, BoardResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn label(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

/// A piece is a plain value; two pawns of the same colour are indistinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Unicode chess glyph for this piece
    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Piece> {
        let (color, kind) = match glyph {
            '♔' => (Color::White, PieceKind::King),
            '♕' => (Color::White, PieceKind::Queen),
            '♖' => (Color::White, PieceKind::Rook),
            '♗' => (Color::White, PieceKind::Bishop),
            '♘' => (Color::White, PieceKind::Knight),
            '♙' => (Color::White, PieceKind::Pawn),
            '♚' => (Color::Black, PieceKind::King),
            '♛' => (Color::Black, PieceKind::Queen),
            '♜' => (Color::Black, PieceKind::Rook),
            '♝' => (Color::Black, PieceKind::Bishop),
            '♞' => (Color::Black, PieceKind::Knight),
            '♟' => (Color::Black, PieceKind::Pawn),
            _ => return None,
        };
        Some(Piece { color, kind })
    }
}

/// A board cell. Row 0 is black's home row, row 7 is white's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> BoardResult<Self> {
        if row < 8 && col < 8 {
            Ok(Self { row, col })
        } else {
            Err(BoardError::SquareOutOfRange { row, col })
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index, 0..63
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// All 64 squares, row 0 first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Algebraic name, e.g. (6, 4) is "e2"
    pub fn name(self) -> String {
        let f = (b'a' + self.col) as char;
        let r = (b'8' - self.row) as char;
        format!("{f}{r}")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
