//! The rules engine and the per-move notification that keeps its state in sync.

use tracing::debug;

use castellan_core::{Color, PieceKind, Square};

use crate::castling::{CastleSide, CastlingState};
use crate::en_passant::EnPassantTarget;

/// Classic-chess move legality plus the cross-move state it depends on.
///
/// One engine belongs to one game. It holds each side's castling state and
/// the current en passant target; the board itself stays with the host and
/// is passed into every call. The engine does not know whose turn it is.
///
/// After committing any move on its board the host must call
/// [`on_piece_moved`](RulesEngine::on_piece_moved) exactly once, otherwise
/// the castling and en passant state drift from the real game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesEngine {
    pub(crate) castling: [CastlingState; Color::COUNT],
    pub(crate) en_passant: Option<EnPassantTarget>,
}

impl RulesEngine {
    /// Create the state for a new game: every castling right available, no en passant target.
    pub fn new() -> RulesEngine {
        RulesEngine {
            castling: [CastlingState::new(); Color::COUNT],
            en_passant: None,
        }
    }

    /// Castling state of `color`.
    #[inline]
    pub fn castling_state(&self, color: Color) -> CastlingState {
        self.castling[color.index()]
    }

    /// The square currently capturable en passant, if any.
    #[inline]
    pub fn en_passant_target(&self) -> Option<EnPassantTarget> {
        self.en_passant
    }

    /// Record a committed move.
    ///
    /// Clears the en passant target, then:
    /// - a king move forfeits both castling rights of its color;
    /// - a rook leaving a home-row corner forfeits that side's right;
    /// - a pawn double step makes the skipped square the new en passant target.
    pub fn on_piece_moved(&mut self, kind: PieceKind, color: Color, from: Square, to: Square) {
        if let Some(target) = self.en_passant.take() {
            debug!(square = %target.square, "en passant target cleared");
        }

        match kind {
            PieceKind::King => {
                let state = &mut self.castling[color.index()];
                if !state.king_moved() {
                    debug!(%color, "king moved, castling rights forfeited");
                }
                state.mark_king_moved();
            }
            PieceKind::Rook if from.row() == color.home_row() => {
                if let Some(side) = CastleSide::from_rook_col(from.col()) {
                    let state = &mut self.castling[color.index()];
                    if state.has_right(side) {
                        debug!(%color, ?side, "rook left its corner, castling right forfeited");
                    }
                    state.mark_rook_moved(side);
                }
            }
            PieceKind::Pawn if from.row().abs_diff(to.row()) == 2 => {
                if let Some(square) = to.offset(-color.forward(), 0) {
                    debug!(%square, %color, "en passant target set");
                    self.en_passant = Some(EnPassantTarget { square, color });
                }
            }
            _ => {}
        }
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}
