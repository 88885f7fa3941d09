//! Error types for square parsing and board setup.

/// Errors that occur when parsing a square name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// The string is not a file letter `a`-`h` followed by a rank digit `1`-`8`.
    #[error("invalid square: \"{found}\"")]
    InvalidAlgebraic {
        /// The string that failed to parse.
        found: String,
    },
}

/// Errors that occur when parsing a FEN piece-placement field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The input contained no placement field at all.
    #[error("empty piece placement")]
    Empty,
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index, which is also the board row (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}
