//! Session configuration.

use castellan_core::PieceKind;

/// Knobs for a console session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Print the board after every committed move.
    pub show_board_after_move: bool,
    /// Piece a pawn becomes when a move reaches the last rank without a suffix.
    pub default_promotion: PieceKind,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            show_board_after_move: false,
            default_promotion: PieceKind::Queen,
        }
    }
}
