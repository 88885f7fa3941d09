//! FEN piece-placement parsing and serialization for [`GridBoard`].
//!
//! Only the first FEN field is meaningful here. Side to move, castling and
//! en passant belong to the rules engine and the host, so trailing fields
//! are accepted and ignored.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::board::{Board, GridBoard};
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// Piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl GridBoard {
    /// Parse a FEN piece-placement field, ranks 8 to 1 separated by `/`.
    pub fn from_placement(placement: &str) -> Result<GridBoard, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut squares = [None; Square::COUNT];
        // FEN ranks go from 8 to 1, which is exactly row order
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let mut length: usize = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    length += digit as usize;
                } else {
                    let piece =
                        Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                    if length < 8 {
                        squares[rank_index * 8 + length] = Some(piece);
                    }
                    length += 1;
                }
            }
            if length != 8 {
                return Err(FenError::BadRankLength { rank_index, length });
            }
        }

        let board = GridBoard::from_squares(squares);
        debug!(pieces = board.count(), "parsed piece placement");
        Ok(board)
    }

    /// Serialize the board as a FEN piece-placement field.
    pub fn placement(&self) -> String {
        let mut s = String::with_capacity(64);
        for row in 0u8..8 {
            let mut empty = 0;
            for col in 0u8..8 {
                let piece = Square::new(row, col).and_then(|sq| self.piece_at(sq));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            s.push_str(&empty.to_string());
                            empty = 0;
                        }
                        s.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                s.push_str(&empty.to_string());
            }
            if row < 7 {
                s.push('/');
            }
        }
        s
    }
}

impl FromStr for GridBoard {
    type Err = FenError;

    /// Accepts either a bare placement field or a full FEN record.
    fn from_str(fen: &str) -> Result<GridBoard, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        GridBoard::from_placement(placement)
    }
}

impl fmt::Display for GridBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.placement())
    }
}
