//! Enumeration of every legal destination for one piece.

use castellan_core::{Board, Color, PieceKind, Square};

use crate::castling::CastleSide;
use crate::engine::RulesEngine;

/// A legal destination produced by [`RulesEngine::all_legal_moves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Destination square; the rook's square for castling candidates.
    pub square: Square,
    /// An enemy piece stands on `square`.
    pub is_capture: bool,
    /// Set when this candidate is a castling target.
    pub castling: Option<CastleSide>,
}

impl Candidate {
    /// Return `true` if selecting this candidate means castling.
    #[inline]
    pub fn is_castling_target(&self) -> bool {
        self.castling.is_some()
    }
}

impl RulesEngine {
    /// List every legal destination of the `color` `kind` on `from`.
    ///
    /// Squares are scanned in row-major order (a8 .. h1); castling targets,
    /// if any, follow the ordinary moves.
    pub fn all_legal_moves<B: Board + ?Sized>(
        &self,
        kind: PieceKind,
        color: Color,
        from: Square,
        board: &B,
    ) -> Vec<Candidate> {
        let mut moves: Vec<Candidate> = Square::all()
            .filter(|&to| to != from)
            .filter(|&to| self.is_legal_move(kind, color, from, to, board))
            .filter_map(|to| {
                let occupant = board.piece_at(to);
                match occupant {
                    Some(piece) if piece.color() == color => None,
                    _ => Some(Candidate {
                        square: to,
                        is_capture: occupant.is_some(),
                        castling: None,
                    }),
                }
            })
            .collect();

        if kind == PieceKind::King {
            moves.extend(
                self.legal_castling_destinations(color, from, board)
                    .into_iter()
                    .map(|target| Candidate {
                        square: target.square,
                        is_capture: false,
                        castling: Some(target.side),
                    }),
            );
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::Candidate;
    use crate::castling::CastleSide;
    use crate::engine::RulesEngine;
    use castellan_core::{Board, Color, GridBoard, Piece, PieceKind, Square};

    #[test]
    fn starting_position_white_has_twenty() {
        let engine = RulesEngine::new();
        let board = GridBoard::starting_position();
        let total: usize = board
            .pieces()
            .filter(|(_, piece)| piece.color() == Color::White)
            .map(|(sq, piece)| {
                engine
                    .all_legal_moves(piece.kind(), piece.color(), sq, &board)
                    .len()
            })
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn knight_center_has_eight() {
        let engine = RulesEngine::new();
        let mut board = GridBoard::empty();
        board.place_piece(Square::E4, Piece::WHITE_KNIGHT);
        let moves = engine.all_legal_moves(PieceKind::Knight, Color::White, Square::E4, &board);
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|c| !c.is_capture && !c.is_castling_target()));
    }

    #[test]
    fn row_major_order_and_captures() {
        let engine = RulesEngine::new();
        let board: GridBoard = "8/8/8/2p5/3R4/8/8/8".parse().unwrap();
        let moves = engine.all_legal_moves(PieceKind::Rook, Color::White, Square::D4, &board);
        let squares: Vec<Square> = moves.iter().map(|c| c.square).collect();
        let mut sorted = squares.clone();
        sorted.sort_by_key(|sq| sq.index());
        assert_eq!(squares, sorted);
        assert_eq!(squares[0], Square::D8);
        assert_eq!(moves.len(), 14);
        assert!(moves.iter().all(|c| !c.is_capture));

        let moves = engine.all_legal_moves(PieceKind::Bishop, Color::White, Square::D4, &board);
        assert!(moves.contains(&Candidate {
            square: Square::C5,
            is_capture: true,
            castling: None
        }));
        assert!(!moves.iter().any(|c| c.square == Square::B6));
    }

    #[test]
    fn king_gets_castling_targets_last() {
        let engine = RulesEngine::new();
        let board: GridBoard = "4k3/8/8/8/8/8/8/R3K2R".parse().unwrap();
        let moves = engine.all_legal_moves(PieceKind::King, Color::White, Square::E1, &board);
        assert_eq!(moves.len(), 7);
        let castles: Vec<&Candidate> = moves.iter().filter(|c| c.is_castling_target()).collect();
        assert_eq!(castles.len(), 2);
        assert_eq!(castles[0].square, Square::H1);
        assert_eq!(castles[0].castling, Some(CastleSide::KingSide));
        assert_eq!(castles[1].square, Square::A1);
        assert_eq!(castles[1].castling, Some(CastleSide::QueenSide));
        assert!(moves[5].is_castling_target());
    }
}
