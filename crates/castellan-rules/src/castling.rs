//! Castling state, legal castling targets, and the compound king+rook move.

use std::fmt;

use tracing::{debug, trace};

use castellan_core::{Board, Color, Square};

use crate::engine::RulesEngine;
use crate::error::CastlingError;

/// Column the king starts on (the e-file).
pub const KING_HOME_COL: u8 = 4;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, kingside first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column of this side's rook before castling.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_dest_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook lands on.
    #[inline]
    pub const fn rook_dest_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// The side whose rook starts on `col`, if any.
    #[inline]
    pub const fn from_rook_col(col: u8) -> Option<CastleSide> {
        match col {
            7 => Some(CastleSide::KingSide),
            0 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Columns strictly between the king's home column and this side's rook.
    fn between_cols(self) -> std::ops::Range<u8> {
        match self {
            CastleSide::KingSide => KING_HOME_COL + 1..7,
            CastleSide::QueenSide => 1..KING_HOME_COL,
        }
    }

    const fn right_bit(self) -> u8 {
        match self {
            CastleSide::KingSide => KINGSIDE_RIGHT,
            CastleSide::QueenSide => QUEENSIDE_RIGHT,
        }
    }

    const fn rook_moved_bit(self) -> u8 {
        match self {
            CastleSide::KingSide => KINGSIDE_ROOK_MOVED,
            CastleSide::QueenSide => QUEENSIDE_ROOK_MOVED,
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::KingSide => f.write_str("kingside"),
            CastleSide::QueenSide => f.write_str("queenside"),
        }
    }
}

const KINGSIDE_RIGHT: u8 = 0b0_0001;
const QUEENSIDE_RIGHT: u8 = 0b0_0010;
const KING_MOVED: u8 = 0b0_0100;
const KINGSIDE_ROOK_MOVED: u8 = 0b0_1000;
const QUEENSIDE_ROOK_MOVED: u8 = 0b1_0000;

/// One side's castling bookkeeping, packed into a byte.
///
/// Bit 0/1: kingside/queenside right. Bit 2: king moved. Bit 3/4: kingside/
/// queenside rook moved. Rights only ever get cleared and moved flags only
/// ever get set, so a forfeited right can never come back.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingState(u8);

impl CastlingState {
    /// Both rights available, nothing moved.
    #[inline]
    pub const fn new() -> CastlingState {
        CastlingState(KINGSIDE_RIGHT | QUEENSIDE_RIGHT)
    }

    /// Return `true` if the right to castle toward `side` has not been forfeited.
    #[inline]
    pub const fn has_right(self, side: CastleSide) -> bool {
        self.0 & side.right_bit() != 0
    }

    /// Return `true` if the king has left its home square.
    #[inline]
    pub const fn king_moved(self) -> bool {
        self.0 & KING_MOVED != 0
    }

    /// Return `true` if the rook of `side` has left its corner.
    #[inline]
    pub const fn rook_moved(self, side: CastleSide) -> bool {
        self.0 & side.rook_moved_bit() != 0
    }

    /// Return `true` if nothing so far rules out castling toward `side`.
    #[inline]
    pub const fn can_castle(self, side: CastleSide) -> bool {
        self.has_right(side) && !self.king_moved() && !self.rook_moved(side)
    }

    #[inline]
    pub(crate) fn mark_king_moved(&mut self) {
        self.0 = (self.0 | KING_MOVED) & !(KINGSIDE_RIGHT | QUEENSIDE_RIGHT);
    }

    #[inline]
    pub(crate) fn mark_rook_moved(&mut self, side: CastleSide) {
        self.0 = (self.0 | side.rook_moved_bit()) & !side.right_bit();
    }
}

impl Default for CastlingState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CastlingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CastlingState")
            .field("kingside", &self.has_right(CastleSide::KingSide))
            .field("queenside", &self.has_right(CastleSide::QueenSide))
            .field("king_moved", &self.king_moved())
            .field("kingside_rook_moved", &self.rook_moved(CastleSide::KingSide))
            .field("queenside_rook_moved", &self.rook_moved(CastleSide::QueenSide))
            .finish()
    }
}

/// A legal castling destination, addressed by the rook's square.
///
/// Hosts that show castling as a king move must translate to
/// [`king_dest_col`](CastleSide::king_dest_col) themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingTarget {
    pub square: Square,
    pub side: CastleSide,
}

/// The relocation performed by a successful castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingMove {
    pub side: CastleSide,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

/// Return the first occupied square strictly between the king's home column
/// and the rook of `side` on `row`.
fn first_blocker<B: Board + ?Sized>(board: &B, row: u8, side: CastleSide) -> Option<Square> {
    side.between_cols()
        .filter_map(|col| Square::new(row, col))
        .find(|&sq| !board.is_empty(sq))
}

impl RulesEngine {
    /// Castling moves available to the king of `color` standing on `king`.
    ///
    /// Requires the king on its home square and unmoved; per side, the right
    /// must remain, the rook must not have moved, and every square between
    /// them must be empty. Attacked squares are not considered. Kingside is
    /// listed before queenside.
    pub fn legal_castling_destinations<B: Board + ?Sized>(
        &self,
        color: Color,
        king: Square,
        board: &B,
    ) -> Vec<CastlingTarget> {
        let row = color.home_row();
        let state = self.castling_state(color);
        if king.row() != row || king.col() != KING_HOME_COL || state.king_moved() {
            return Vec::new();
        }

        CastleSide::ALL
            .into_iter()
            .filter(|&side| state.can_castle(side))
            .filter(|&side| first_blocker(board, row, side).is_none())
            .filter_map(|side| {
                Square::new(row, side.rook_col()).map(|square| CastlingTarget { square, side })
            })
            .collect()
    }

    /// Castle the king of `color` on `king` with the rook on `rook`.
    ///
    /// Moves the king two columns toward the rook and the rook to the square
    /// the king crossed, then marks the king and that rook as moved. Both
    /// rights of `color` are gone afterwards. Board and state are untouched
    /// on error.
    pub fn perform_castling<B: Board + ?Sized>(
        &mut self,
        color: Color,
        king: Square,
        rook: Square,
        board: &mut B,
    ) -> Result<CastlingMove, CastlingError> {
        let row = color.home_row();
        if king.row() != row || king.col() != KING_HOME_COL {
            trace!(%color, %king, "castling refused: king not home");
            return Err(CastlingError::KingNotHome { square: king });
        }
        let side = match CastleSide::from_rook_col(rook.col()) {
            Some(side) if rook.row() == row => side,
            _ => {
                trace!(%color, %rook, "castling refused: not a corner rook");
                return Err(CastlingError::NotARookSquare { square: rook });
            }
        };

        for square in [king, rook] {
            if board.is_empty(square) {
                trace!(%color, %square, "castling refused: square empty");
                return Err(CastlingError::MissingPiece { square });
            }
        }
        if let Some(square) = first_blocker(&*board, row, side) {
            trace!(%color, %square, "castling refused: path blocked");
            return Err(CastlingError::PathBlocked { square });
        }

        let (Some(king_to), Some(rook_to)) = (
            Square::new(row, side.king_dest_col()),
            Square::new(row, side.rook_dest_col()),
        ) else {
            return Err(CastlingError::NotARookSquare { square: rook });
        };

        let Some(king_piece) = board.remove_piece(king) else {
            return Err(CastlingError::MissingPiece { square: king });
        };
        let Some(rook_piece) = board.remove_piece(rook) else {
            board.place_piece(king, king_piece);
            return Err(CastlingError::MissingPiece { square: rook });
        };
        board.place_piece(king_to, king_piece);
        board.place_piece(rook_to, rook_piece);

        let state = &mut self.castling[color.index()];
        state.mark_king_moved();
        state.mark_rook_moved(side);

        debug!(%color, %side, %king_to, %rook_to, "castled");
        Ok(CastlingMove {
            side,
            king_from: king,
            king_to,
            rook_from: rook,
            rook_to,
        })
    }
}
