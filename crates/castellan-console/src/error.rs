//! Console session errors.

use castellan_core::{Color, SquareError, Square};
use castellan_rules::{CastlingError, EnPassantError};

/// Errors that can occur while parsing or playing a console command.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A command was given without its required argument.
    #[error("{command}: missing argument")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
    },

    /// A square name could not be parsed.
    #[error(transparent)]
    InvalidSquare(#[from] SquareError),

    /// A move string is not `<from><to>[promotion]`.
    #[error("invalid move: {text}")]
    InvalidMove {
        /// The move string that failed to parse.
        text: String,
    },

    /// The promotion suffix is not one of `q`, `r`, `b`, `n`.
    #[error("invalid promotion piece: '{character}'")]
    InvalidPromotion {
        /// The offending suffix character.
        character: char,
    },

    /// The origin square holds no piece.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty origin square.
        square: Square,
    },

    /// The piece on the origin square belongs to the side not on move.
    #[error("{square} holds a {color} piece but it is not {color}'s turn")]
    WrongTurn {
        /// The origin square.
        square: Square,
        /// Owner of the piece on it.
        color: Color,
    },

    /// The rules do not allow the move.
    #[error("illegal move: {from}{to}")]
    IllegalMove {
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
    },

    /// Castling was selected but could not be carried out.
    #[error("castling failed: {0}")]
    Castling(#[from] CastlingError),

    /// En passant was selected but could not be carried out.
    #[error("en passant failed: {0}")]
    EnPassant(#[from] EnPassantError),

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
