//! Turn, selection and undo bookkeeping for click-to-move play

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, info};

use crate::board::Board;
use crate::types::{Color, Piece, Square};

/// One applied move, kept for undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The piece as it stood on `from`
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Whatever stood on `to` before the move
    pub captured: Option<Piece>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.captured.is_some() { 'x' } else { '-' };
        write!(f, "{} {}{}{}", self.piece.glyph(), self.from, sep, self.to)
    }
}

/// What a square click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was selected
    Selected,
    /// The selected piece moved
    Moved(MoveRecord),
    /// A piece was selected but the target was refused; selection is dropped
    Rejected,
    /// Nothing selected and nothing selectable on the square
    Ignored,
}

/// Owns the board, whose turn it is, the current selection and the undo stack.
///
/// Movement is deliberately loose: a piece may go to any square that does not
/// hold a piece of its own colour. There are no chess rules beyond that.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    turn: Color,
    selected: Option<Square>,
    highlights: HashSet<Square>,
    history: Vec<MoveRecord>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Standard position, white to move
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Color::White)
    }

    pub fn with_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            selected: None,
            highlights: HashSet::new(),
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn turn(&self) -> Color {
        self.turn
    }
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }
    pub fn highlights(&self) -> &HashSet<Square> {
        &self.highlights
    }
    pub fn is_highlighted(&self, sq: Square) -> bool {
        self.highlights.contains(&sq)
    }
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Text for the status line
    pub fn status_text(&self) -> String {
        format!("Current Turn: {}", self.turn.label())
    }

    /// Handle a click on `sq`.
    ///
    /// With a piece selected, the click is a move attempt and the selection is
    /// dropped whatever the result. Otherwise a piece of the side to move gets
    /// selected and its targets highlighted.
    pub fn on_square_clicked(&mut self, sq: Square) -> ClickOutcome {
        if let Some(from) = self.selected {
            let outcome = match self.board.piece_at(from) {
                Some(piece) if self.is_legal_target(from, sq) => {
                    ClickOutcome::Moved(self.apply_move(piece, from, sq))
                }
                _ => {
                    debug!(from = %from, to = %sq, "move rejected");
                    ClickOutcome::Rejected
                }
            };
            self.clear_selection();
            return outcome;
        }

        match self.board.piece_at(sq) {
            Some(piece) if piece.color == self.turn => {
                self.selected = Some(sq);
                self.update_highlights();
                debug!(
                    square = %sq,
                    piece = %piece.glyph(),
                    targets = self.highlights.len(),
                    "piece selected"
                );
                ClickOutcome::Selected
            }
            _ => ClickOutcome::Ignored,
        }
    }

    /// Whether the piece on `from` may go to `to`.
    ///
    /// Only a piece of the mover's own colour on `to` blocks the move, which
    /// also makes the origin square itself illegal. An empty `from` has no
    /// legal targets.
    pub fn is_legal_target(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self.board.piece_at(from) else {
            return false;
        };
        !matches!(self.board.piece_at(to), Some(target) if target.color == piece.color)
    }

    /// Restore the standard position with white to move and an empty history.
    pub fn on_reset_requested(&mut self) {
        self.board = Board::standard();
        self.turn = Color::White;
        self.history.clear();
        self.clear_selection();
        info!("game reset");
    }

    /// Take back the most recent move. Returns `None` when there is nothing to undo.
    pub fn on_undo_requested(&mut self) -> Option<MoveRecord> {
        let Some(record) = self.history.pop() else {
            debug!("undo with empty history ignored");
            return None;
        };

        self.board.set(record.to, None);
        self.board.set(record.from, Some(record.piece));
        if let Some(captured) = record.captured {
            self.board.set(record.to, Some(captured));
        }
        self.turn = self.turn.other();
        self.clear_selection();

        debug!(from = %record.from, to = %record.to, turn = %self.turn, "move undone");
        Some(record)
    }

    fn apply_move(&mut self, piece: Piece, from: Square, to: Square) -> MoveRecord {
        self.board.set(from, None);
        let captured = self.board.take(to);
        self.board.set(to, Some(piece));

        let record = MoveRecord {
            piece,
            from,
            to,
            captured,
        };
        self.history.push(record);
        self.turn = self.turn.other();

        debug!(
            from = %from,
            to = %to,
            captured = captured.is_some(),
            turn = %self.turn,
            "move applied"
        );
        record
    }

    fn update_highlights(&mut self) {
        self.highlights.clear();

        if let Some(from) = self.selected {
            let targets: Vec<Square> = Square::all()
                .filter(|&to| self.is_legal_target(from, to))
                .collect();
            self.highlights.extend(targets);
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.highlights.clear();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
