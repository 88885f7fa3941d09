//! End-to-end console sessions fed from an in-memory script.

use std::io::Cursor;

use castellan_console::{ConsoleConfig, Session};
use castellan_core::{Board, Color, Piece, Square};

/// Helper: run `script` through a fresh session and return it with its output.
fn run_script(script: &str, config: ConsoleConfig) -> (Session, String) {
    let mut session = Session::new(config);
    let mut output = Vec::new();
    session
        .run(Cursor::new(script.as_bytes()), &mut output)
        .expect("in-memory I/O cannot fail");
    (session, String::from_utf8(output).expect("output is UTF-8"))
}

#[test]
fn en_passant_through_console() {
    let script = "move e2e4\nmove a7a6\nmove e4e5\nmove d7d5\nmove e5d6\nquit\n";
    let (session, output) = run_script(script, ConsoleConfig::default());

    let board = session.board();
    assert_eq!(board.piece_at(Square::D6), Some(Piece::WHITE_PAWN));
    assert!(board.is_empty(Square::D5));
    assert!(board.is_empty(Square::E5));
    assert_eq!(board.count(), 31);
    assert!(output.contains("♙ e5d6 takes ♟"), "output was:\n{output}");
    assert_eq!(session.side_to_move(), Color::Black);
}

#[test]
fn en_passant_window_closes() {
    let script = "move e2e4\nmove a7a6\nmove e4e5\nmove d7d5\nmove h2h3\nmove h7h6\nmove e5d6\n";
    let (session, output) = run_script(script, ConsoleConfig::default());

    assert!(output.contains("error: illegal move: e5d6"), "output was:\n{output}");
    assert_eq!(session.board().piece_at(Square::D5), Some(Piece::BLACK_PAWN));
    assert_eq!(session.side_to_move(), Color::White);
}

#[test]
fn errors_do_not_end_the_session() {
    let script = "fly\nmove e2e5\nmoves z9\nmove g1f3\nquit\nmove e7e5\n";
    let (session, output) = run_script(script, ConsoleConfig::default());

    assert!(output.contains("unknown command: fly"));
    assert!(output.contains("error: illegal move: e2e5"));
    assert!(output.contains("error: invalid square: \"z9\""));
    assert!(output.contains("♘ g1f3"));
    // Nothing after quit is played
    assert_eq!(session.board().piece_at(Square::E7), Some(Piece::BLACK_PAWN));
}

#[test]
fn castle_and_show_board() {
    let script = "move e2e4\nmove e7e5\nmove g1f3\nmove b8c6\nmove f1c4\nmove g8f6\nmove e1g1\n";
    let config = ConsoleConfig {
        show_board_after_move: true,
        ..ConsoleConfig::default()
    };
    let (session, output) = run_script(script, config);

    assert!(output.contains("castles kingside"), "output was:\n{output}");
    assert!(output.contains("1  ♖ ♘ ♗ ♕ . ♖ ♔ ."), "output was:\n{output}");
    assert_eq!(session.board().piece_at(Square::G1), Some(Piece::WHITE_KING));
    assert!(session.engine().castling_state(Color::White).king_moved());
}

#[test]
fn new_game_resets() {
    let script = "move e2e4\nnew\n";
    let (session, output) = run_script(script, ConsoleConfig::default());
    assert!(output.ends_with("ok\n"));
    assert_eq!(session.board().piece_at(Square::E2), Some(Piece::WHITE_PAWN));
    assert_eq!(session.side_to_move(), Color::White);
}
