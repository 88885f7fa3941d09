//! En passant target tracking and capture.

use tracing::{debug, trace};

use castellan_core::{Board, Color, Piece, PieceKind, Square};

use crate::engine::RulesEngine;
use crate::error::EnPassantError;

/// The square a pawn just skipped over with a double step.
///
/// `square` is where an enemy pawn lands when capturing; `color` is the
/// color of the pawn that double-stepped and may now be captured. Valid for
/// exactly one following move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnPassantTarget {
    pub square: Square,
    pub color: Color,
}

/// The pawn taken by an en passant capture and where it stood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnPassantCapture {
    pub square: Square,
    pub piece: Piece,
}

impl RulesEngine {
    /// Return `true` if a `color` pawn landing on `to` would capture en passant.
    pub fn is_en_passant_square(&self, color: Color, to: Square) -> bool {
        self.en_passant
            .is_some_and(|target| target.square == to && target.color != color)
    }

    /// Remove the pawn passed by a `color` pawn moving `from` -> `to`.
    ///
    /// Only the captured pawn is removed; the host still moves the capturing
    /// pawn and then calls [`on_piece_moved`](RulesEngine::on_piece_moved).
    pub fn perform_en_passant<B: Board + ?Sized>(
        &mut self,
        kind: PieceKind,
        color: Color,
        from: Square,
        to: Square,
        board: &mut B,
    ) -> Result<EnPassantCapture, EnPassantError> {
        if kind != PieceKind::Pawn {
            return Err(EnPassantError::NotAPawn);
        }
        let target = self.en_passant.ok_or(EnPassantError::NoTarget)?;
        if target.square != to {
            trace!(%from, %to, target = %target.square, "en passant refused: wrong square");
            return Err(EnPassantError::NotTargetSquare { square: to });
        }
        if target.color == color {
            trace!(%color, "en passant refused: own target");
            return Err(EnPassantError::OwnTarget);
        }

        // The passed pawn sits one row behind the landing square, seen from the capturer.
        let captured = to
            .offset(-color.forward(), 0)
            .ok_or(EnPassantError::MissingPiece { square: to })?;
        let piece = board
            .remove_piece(captured)
            .ok_or(EnPassantError::MissingPiece { square: captured })?;

        debug!(%color, %from, %to, %captured, "captured en passant");
        Ok(EnPassantCapture {
            square: captured,
            piece,
        })
    }
}
