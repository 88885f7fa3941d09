//! Per-piece move legality.

use castellan_core::{Board, Color, PieceKind, Square};

use crate::engine::RulesEngine;
use crate::symbols::classify;

impl RulesEngine {
    /// Return `true` if a `color` piece of `kind` may move `from` -> `to` on `board`.
    ///
    /// Own-king safety is not checked.
    #[inline]
    pub fn is_legal_move<B: Board + ?Sized>(
        &self,
        kind: PieceKind,
        color: Color,
        from: Square,
        to: Square,
        board: &B,
    ) -> bool {
        self.is_legal_move_with(kind, color, from, to, board, false)
    }

    /// Like [`is_legal_move`](RulesEngine::is_legal_move), classifying `symbol` first.
    ///
    /// Unknown symbols are never legal.
    pub fn is_legal_symbol_move<B: Board + ?Sized>(
        &self,
        symbol: char,
        color: Color,
        from: Square,
        to: Square,
        board: &B,
    ) -> bool {
        classify(symbol).is_some_and(|kind| self.is_legal_move(kind, color, from, to, board))
    }

    /// Geometric legality with control over landing on a friendly piece.
    ///
    /// A destination holding a piece of `color` is rejected unless
    /// `allow_friendly_overlap` is set. Enemy pieces on the destination are
    /// fine for every kind whose geometry allows a capture there.
    pub fn is_legal_move_with<B: Board + ?Sized>(
        &self,
        kind: PieceKind,
        color: Color,
        from: Square,
        to: Square,
        board: &B,
        allow_friendly_overlap: bool,
    ) -> bool {
        if !allow_friendly_overlap && board.piece_at(to).is_some_and(|p| p.color() == color) {
            return false;
        }

        let dr = from.row().abs_diff(to.row());
        let dc = from.col().abs_diff(to.col());
        match kind {
            PieceKind::King => dr <= 1 && dc <= 1 && (dr > 0 || dc > 0),
            PieceKind::Queen => {
                (dr > 0 || dc > 0) && (dr == 0 || dc == 0 || dr == dc) && board.is_path_clear(from, to)
            }
            PieceKind::Rook => (dr == 0) != (dc == 0) && board.is_path_clear(from, to),
            PieceKind::Bishop => dr == dc && dr > 0 && board.is_path_clear(from, to),
            PieceKind::Knight => (dr == 2 && dc == 1) || (dr == 1 && dc == 2),
            PieceKind::Pawn => self.is_legal_pawn_move(color, from, to, board),
        }
    }

    fn is_legal_pawn_move<B: Board + ?Sized>(
        &self,
        color: Color,
        from: Square,
        to: Square,
        board: &B,
    ) -> bool {
        let forward = color.forward();
        let rows = to.row() as i8 - from.row() as i8;
        let dc = from.col().abs_diff(to.col());

        match dc {
            0 => {
                if !board.is_empty(to) {
                    return false;
                }
                if rows == forward {
                    return true;
                }
                rows == 2 * forward
                    && from.row() == color.pawn_start_row()
                    && board.is_path_clear(from, to)
            }
            1 if rows == forward => {
                board.piece_at(to).is_some_and(|p| p.color() != color)
                    || self.is_en_passant_square(color, to)
            }
            _ => false,
        }
    }
}
