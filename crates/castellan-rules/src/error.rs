//! Reasons a special move could not be performed.

use castellan_core::Square;

/// Why [`RulesEngine::perform_castling`](crate::RulesEngine::perform_castling) refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CastlingError {
    /// The king is not on its home square (home row, e-file).
    #[error("king is not on its home square: {square}")]
    KingNotHome {
        /// Where the caller claimed the king stands.
        square: Square,
    },
    /// The rook square is not one of the two home-row corner squares.
    #[error("not a castling rook square: {square}")]
    NotARookSquare {
        /// The offending rook square.
        square: Square,
    },
    /// The king or rook square is empty.
    #[error("no piece on {square}")]
    MissingPiece {
        /// The empty square.
        square: Square,
    },
    /// A square between king and rook is occupied.
    #[error("castling path blocked at {square}")]
    PathBlocked {
        /// The first occupied square found.
        square: Square,
    },
}

/// Why [`RulesEngine::perform_en_passant`](crate::RulesEngine::perform_en_passant) refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EnPassantError {
    /// Only pawns capture en passant.
    #[error("only pawns can capture en passant")]
    NotAPawn,
    /// No pawn double-stepped on the previous move.
    #[error("no en passant target")]
    NoTarget,
    /// The destination is not the en passant target square.
    #[error("{square} is not the en passant target")]
    NotTargetSquare {
        /// The requested destination.
        square: Square,
    },
    /// The target belongs to the mover's own pawn.
    #[error("en passant target belongs to the mover")]
    OwnTarget,
    /// The square behind the target holds no piece.
    #[error("no piece to capture on {square}")]
    MissingPiece {
        /// The square that should have held the passed pawn.
        square: Square,
    },
}

#[cfg(test)]
mod tests {
    use super::{CastlingError, EnPassantError};
    use castellan_core::Square;

    #[test]
    fn castling_error_display() {
        let err = CastlingError::PathBlocked { square: Square::F1 };
        assert_eq!(format!("{err}"), "castling path blocked at f1");
    }

    #[test]
    fn en_passant_error_display() {
        let err = EnPassantError::NotTargetSquare { square: Square::D6 };
        assert_eq!(format!("{err}"), "d6 is not the en passant target");
        assert_eq!(format!("{}", EnPassantError::NoTarget), "no en passant target");
    }
}
