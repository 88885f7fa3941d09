//! Core chess types: colors, pieces, squares, and the board capability.

mod board;
mod color;
mod error;
mod fen;
mod piece;
mod piece_kind;
mod square;

pub use board::{Between, Board, GridBoard, PrettyBoard};
pub use color::Color;
pub use error::{FenError, SquareError};
pub use fen::STARTING_PLACEMENT;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
