//! The board capability consumed by the rules, and an array-backed implementation.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Storage-agnostic access to piece placement.
///
/// The rules only ever read a board through [`piece_at`](Board::piece_at),
/// [`is_empty`](Board::is_empty) and [`is_path_clear`](Board::is_path_clear),
/// and write it through the two relocation primitives while performing
/// castling or en passant. Any representation can implement it.
pub trait Board {
    /// Return the piece on `sq`, if any.
    fn piece_at(&self, sq: Square) -> Option<Piece>;

    /// Remove and return the piece on `sq`.
    fn remove_piece(&mut self, sq: Square) -> Option<Piece>;

    /// Put `piece` on `sq`, returning whatever was there before.
    fn place_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece>;

    /// Return `true` if no piece stands on `sq`.
    fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Return `true` if every square strictly between `from` and `to` is empty.
    ///
    /// Only straight and diagonal lines have a path; any other pair of
    /// squares reports `false`. Adjacent squares and `from == to` have
    /// nothing in between and report `true`.
    fn is_path_clear(&self, from: Square, to: Square) -> bool {
        match Between::new(from, to) {
            Some(mut between) => between.all(|sq| self.is_empty(sq)),
            None => false,
        }
    }
}

/// Iterator over the squares strictly between two squares on a shared line.
#[derive(Debug, Clone)]
pub struct Between {
    next: Option<Square>,
    end: Square,
    step: (i8, i8),
}

impl Between {
    /// Walk from `from` toward `to`, or `None` if they share no rank, file or diagonal.
    pub fn new(from: Square, to: Square) -> Option<Between> {
        let dr = to.row() as i8 - from.row() as i8;
        let dc = to.col() as i8 - from.col() as i8;
        if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
            return None;
        }
        let step = (dr.signum(), dc.signum());
        let next = if from == to {
            None
        } else {
            from.offset(step.0, step.1)
        };
        Some(Between {
            next,
            end: to,
            step,
        })
    }
}

impl Iterator for Between {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let sq = self.next?;
        if sq == self.end {
            self.next = None;
            return None;
        }
        self.next = sq.offset(self.step.0, self.step.1);
        Some(sq)
    }
}

/// An 8x8 array of optional pieces, indexed by [`Square::index`].
#[derive(Clone, PartialEq, Eq)]
pub struct GridBoard {
    squares: [Option<Piece>; Square::COUNT],
}

/// Back-rank order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl GridBoard {
    /// Return a board with no pieces on it.
    pub const fn empty() -> GridBoard {
        GridBoard {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn starting_position() -> GridBoard {
        let mut board = GridBoard::empty();
        for color in Color::ALL {
            let home = color.home_row() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.squares[home * 8 + col] = Some(Piece::new(kind, color));
                board.squares[pawns * 8 + col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Construct a board directly from its square array.
    pub(crate) const fn from_squares(squares: [Option<Piece>; Square::COUNT]) -> GridBoard {
        GridBoard { squares }
    }

    /// Move whatever stands on `from` to `to`, returning the piece displaced from `to`.
    ///
    /// Does nothing if `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.remove_piece(from)?;
        self.place_piece(to, piece)
    }

    /// Iterate over every occupied square and its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.squares[sq.index()].map(|piece| (sq, piece)))
    }

    /// Number of pieces on the board.
    pub fn count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_some()).count()
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for GridBoard {
    fn default() -> Self {
        GridBoard::starting_position()
    }
}

impl Board for GridBoard {
    #[inline]
    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    #[inline]
    fn place_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index()].replace(piece)
    }
}

impl fmt::Debug for GridBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridBoard(\"{}\")", self.placement())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid of glyphs.
pub struct PrettyBoard<'a>(&'a GridBoard);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = Square::new(row, col)
                    .and_then(|sq| board.piece_at(sq))
                    .map_or('.', Piece::symbol);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
