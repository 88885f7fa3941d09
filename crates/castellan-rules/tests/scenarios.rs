//! Multi-move scenarios driving the rules engine the way a host would.
//!
//! Each test commits moves on a `GridBoard` and reports them back through
//! `on_piece_moved`, checking that castling and en passant state follow.

use castellan_core::{Board, Color, GridBoard, Piece, PieceKind, Square};
use castellan_rules::{
    CastleSide, CastlingError, CastlingTarget, EnPassantError, EnPassantTarget, RulesEngine,
    classify,
};

/// Helper: move a piece on the board and notify the engine.
fn commit(engine: &mut RulesEngine, board: &mut GridBoard, from: Square, to: Square) {
    let piece = board.piece_at(from).expect("commit from an occupied square");
    board.move_piece(from, to);
    engine.on_piece_moved(piece.kind(), piece.color(), from, to);
}

// ── En passant ────────────────────────────────────────────────────────────────

#[test]
fn double_step_target_then_capture() {
    let mut engine = RulesEngine::new();
    // White pawn e2 (6,4), black pawn d4 (4,3)
    let mut board: GridBoard = "4k3/8/8/8/3p4/8/4P3/4K3".parse().unwrap();

    commit(&mut engine, &mut board, Square::E2, Square::E4);
    assert_eq!(
        engine.en_passant_target(),
        Some(EnPassantTarget {
            square: Square::new(5, 4).unwrap(),
            color: Color::White
        })
    );

    assert!(engine.is_legal_move(PieceKind::Pawn, Color::Black, Square::D4, Square::E3, &board));
    let capture = engine
        .perform_en_passant(PieceKind::Pawn, Color::Black, Square::D4, Square::E3, &mut board)
        .unwrap();
    assert_eq!(capture.square, Square::E4);
    assert_eq!(capture.piece, Piece::WHITE_PAWN);
    commit(&mut engine, &mut board, Square::D4, Square::E3);

    assert_eq!(board.piece_at(Square::E3), Some(Piece::BLACK_PAWN));
    assert!(board.is_empty(Square::E4));
    assert_eq!(engine.en_passant_target(), None);
}

#[test]
fn en_passant_expires_after_one_move() {
    let mut engine = RulesEngine::new();
    let mut board: GridBoard = "4k3/8/8/8/3p4/8/4P3/4K3".parse().unwrap();

    commit(&mut engine, &mut board, Square::E2, Square::E4);
    commit(&mut engine, &mut board, Square::E8, Square::F8);
    commit(&mut engine, &mut board, Square::E1, Square::F1);

    assert_eq!(engine.en_passant_target(), None);
    assert!(!engine.is_legal_move(PieceKind::Pawn, Color::Black, Square::D4, Square::E3, &board));
    let mut scratch = board.clone();
    assert_eq!(
        engine.perform_en_passant(PieceKind::Pawn, Color::Black, Square::D4, Square::E3, &mut scratch),
        Err(EnPassantError::NoTarget)
    );
}

#[test]
fn same_color_target_is_never_capturable() {
    let mut engine = RulesEngine::new();
    let mut board: GridBoard = "4k3/8/8/8/3P4/8/4P3/4K3".parse().unwrap();
    commit(&mut engine, &mut board, Square::E2, Square::E4);

    // A white pawn on d4 cannot take its own side's target on e3 (and moves the wrong way)
    assert!(!engine.is_legal_move(PieceKind::Pawn, Color::White, Square::D4, Square::E3, &board));
    assert!(!engine.is_en_passant_square(Color::White, Square::E3));
    assert_eq!(
        engine.perform_en_passant(PieceKind::Pawn, Color::White, Square::D4, Square::E3, &mut board),
        Err(EnPassantError::OwnTarget)
    );
}

#[test]
fn en_passant_listed_as_non_capture_candidate() {
    let mut engine = RulesEngine::new();
    let mut board: GridBoard = "4k3/3p4/8/4P3/8/8/8/4K3".parse().unwrap();
    commit(&mut engine, &mut board, Square::D7, Square::D5);

    let moves = engine.all_legal_moves(PieceKind::Pawn, Color::White, Square::E5, &board);
    let squares: Vec<Square> = moves.iter().map(|c| c.square).collect();
    assert_eq!(squares, vec![Square::D6, Square::E6]);
    assert!(moves.iter().all(|c| !c.is_capture));
}

// ── Castling ──────────────────────────────────────────────────────────────────

#[test]
fn kingside_castle_scenario() {
    let mut engine = RulesEngine::new();
    let mut board: GridBoard = "4k3/8/8/8/8/8/8/R3K2R".parse().unwrap();

    let targets = engine.legal_castling_destinations(Color::White, Square::E1, &board);
    assert!(targets.contains(&CastlingTarget {
        square: Square::new(7, 7).unwrap(),
        side: CastleSide::KingSide
    }));

    engine
        .perform_castling(Color::White, Square::E1, Square::H1, &mut board)
        .unwrap();
    assert_eq!(board.piece_at(Square::new(7, 6).unwrap()), Some(Piece::WHITE_KING));
    assert_eq!(board.piece_at(Square::new(7, 5).unwrap()), Some(Piece::WHITE_ROOK));

    let state = engine.castling_state(Color::White);
    assert!(!state.has_right(CastleSide::KingSide));
    assert!(!state.has_right(CastleSide::QueenSide));
    assert!(engine.castling_state(Color::Black).has_right(CastleSide::KingSide));
}

#[test]
fn castling_clears_both_rights_after_other_rook_moved() {
    let mut engine = RulesEngine::new();
    let mut board: GridBoard = "4k3/8/8/8/8/8/8/R3K2R".parse().unwrap();

    commit(&mut engine, &mut board, Square::A1, Square::A2);
    let state = engine.castling_state(Color::White);
    assert!(!state.has_right(CastleSide::QueenSide));
    assert!(state.has_right(CastleSide::KingSide));

    engine
        .perform_castling(Color::White, Square::E1, Square::H1, &mut board)
        .unwrap();
    let state = engine.castling_state(Color::White);
    assert!(!state.has_right(CastleSide::KingSide));
    assert!(!state.has_right(CastleSide::QueenSide));
}

#[test]
fn castling_refused_when_path_occupied() {
    let mut engine = RulesEngine::new();
    let mut board: GridBoard = "4k3/8/8/8/8/8/8/R3KB1R".parse().unwrap();
    let before = board.clone();

    assert!(engine
        .legal_castling_destinations(Color::White, Square::E1, &board)
        .iter()
        .all(|t| t.side != CastleSide::KingSide));
    assert_eq!(
        engine.perform_castling(Color::White, Square::E1, Square::H1, &mut board),
        Err(CastlingError::PathBlocked { square: Square::F1 })
    );
    assert_eq!(board, before);
    assert!(engine.castling_state(Color::White).has_right(CastleSide::KingSide));
}

#[test]
fn returning_rook_does_not_restore_rights() {
    let mut engine = RulesEngine::new();
    let mut board: GridBoard = "r3k2r/8/8/8/8/8/8/4K3".parse().unwrap();

    commit(&mut engine, &mut board, Square::H8, Square::H5);
    commit(&mut engine, &mut board, Square::H5, Square::H8);

    let targets = engine.legal_castling_destinations(Color::Black, Square::E8, &board);
    assert_eq!(
        targets,
        vec![CastlingTarget {
            square: Square::A8,
            side: CastleSide::QueenSide
        }]
    );
}

#[test]
fn king_move_removes_castling_from_enumeration() {
    let mut engine = RulesEngine::new();
    let mut board: GridBoard = "4k3/8/8/8/8/8/8/R3K2R".parse().unwrap();

    commit(&mut engine, &mut board, Square::E1, Square::E2);
    commit(&mut engine, &mut board, Square::E2, Square::E1);

    let moves = engine.all_legal_moves(PieceKind::King, Color::White, Square::E1, &board);
    assert!(moves.iter().all(|c| !c.is_castling_target()));
    assert!(engine
        .legal_castling_destinations(Color::White, Square::E1, &board)
        .is_empty());
}

// ── Classification ────────────────────────────────────────────────────────────

#[test]
fn unknown_symbol_is_rejected() {
    let engine = RulesEngine::new();
    let board = GridBoard::starting_position();
    assert_eq!(classify('Z'), None);
    assert!(!engine.is_legal_symbol_move('Z', Color::White, Square::E2, Square::E4, &board));
    assert!(engine.is_legal_symbol_move('♙', Color::White, Square::E2, Square::E4, &board));
}

#[test]
fn independent_games_do_not_share_state() {
    let mut first = RulesEngine::new();
    let second = RulesEngine::new();
    first.on_piece_moved(PieceKind::King, Color::White, Square::E1, Square::E2);
    assert!(first.castling_state(Color::White).king_moved());
    assert!(!second.castling_state(Color::White).king_moved());
}
