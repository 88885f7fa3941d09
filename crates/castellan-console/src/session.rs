//! A line-oriented game session over a `GridBoard`.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use castellan_core::{Board, Color, GridBoard, Piece, PieceKind, Square};
use castellan_rules::{CastlingMove, CastlingTarget, RulesEngine, promotion_choices};

use crate::command::{Command, MoveRequest, parse_command};
use crate::config::ConsoleConfig;
use crate::error::ConsoleError;

/// What the session loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What a committed move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    /// The piece that moved, before any promotion.
    pub piece: Piece,
    /// Piece taken, by normal capture or en passant.
    pub captured: Option<Piece>,
    /// Set when the move was a castle.
    pub castled: Option<CastlingMove>,
    /// Set when a pawn promoted on arrival.
    pub promoted: Option<Piece>,
}

/// One game: the board, the rules state, and whose turn it is.
pub struct Session {
    board: GridBoard,
    engine: RulesEngine,
    side_to_move: Color,
    config: ConsoleConfig,
}

impl Session {
    /// Start a game from the standard position with White to move.
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            board: GridBoard::starting_position(),
            engine: RulesEngine::new(),
            side_to_move: Color::White,
            config,
        }
    }

    /// Start a game from an arbitrary position with fresh castling and en passant state.
    pub fn from_position(board: GridBoard, side_to_move: Color, config: ConsoleConfig) -> Self {
        Self {
            board,
            engine: RulesEngine::new(),
            side_to_move,
            config,
        }
    }

    /// The current board.
    pub fn board(&self) -> &GridBoard {
        &self.board
    }

    /// The rules state of the current game.
    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    /// The color due to move next.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Rejected commands are reported on `output` and the session carries on;
    /// only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ConsoleError> {
        info!("castellan session started");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed).and_then(|cmd| self.execute(cmd, &mut output)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(ConsoleError::Io { source }) => return Err(ConsoleError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(output, "error: {e}")?;
                }
            }
        }
        info!("castellan session finished");
        Ok(())
    }

    /// Carry out one parsed command, writing any response to `output`.
    pub fn execute<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<Flow, ConsoleError> {
        match cmd {
            Command::NewGame => {
                *self = Session::new(self.config);
                writeln!(output, "ok")?;
            }
            Command::Show => writeln!(output, "{}", self.board.pretty())?,
            Command::Moves(sq) => self.write_moves(sq, output)?,
            Command::Move(request) => {
                let outcome = self.play(request)?;
                write_outcome(&outcome, output)?;
                if self.config.show_board_after_move {
                    writeln!(output, "{}", self.board.pretty())?;
                }
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(word) if word.is_empty() => {}
            Command::Unknown(word) => writeln!(output, "unknown command: {word}")?,
        }
        Ok(Flow::Continue)
    }

    /// Validate and commit a move for the side to move.
    ///
    /// A king stepping onto its own unmoved rook, or two columns toward it,
    /// castles. A pawn stepping diagonally onto the en passant target captures
    /// the passed pawn. A pawn reaching the last rank promotes.
    ///
    /// Every check runs before the board is touched, so an error leaves the
    /// game exactly as it was. A promotion suffix on any other move is
    /// rejected as [`ConsoleError::InvalidMove`].
    pub fn play(&mut self, request: MoveRequest) -> Result<MoveOutcome, ConsoleError> {
        let MoveRequest { from, to, promotion } = request;
        let color = self.side_to_move;
        let piece = self
            .board
            .piece_at(from)
            .ok_or(ConsoleError::EmptySquare { square: from })?;
        if piece.color() != color {
            return Err(ConsoleError::WrongTurn {
                square: from,
                color: piece.color(),
            });
        }
        let kind = piece.kind();

        let promotes = kind == PieceKind::Pawn && to.row() == color.flip().home_row();
        if let Some(suffix) = promotion.filter(|_| !promotes) {
            return Err(ConsoleError::InvalidMove {
                text: format!("{from}{to}{}", suffix.fen_char()),
            });
        }

        if kind == PieceKind::King {
            if let Some(target) = self.castling_for(color, from, to) {
                let castled = self
                    .engine
                    .perform_castling(color, from, target.square, &mut self.board)?;
                self.engine
                    .on_piece_moved(PieceKind::King, color, castled.king_from, castled.king_to);
                self.side_to_move = !color;
                return Ok(MoveOutcome {
                    from,
                    to: castled.king_to,
                    piece,
                    captured: None,
                    castled: Some(castled),
                    promoted: None,
                });
            }
        }

        if !self.engine.is_legal_move(kind, color, from, to, &self.board) {
            return Err(ConsoleError::IllegalMove { from, to });
        }

        let promoted = if promotes {
            let wanted = promotion.unwrap_or(self.config.default_promotion);
            let choice = promotion_choices(color)
                .into_iter()
                .find(|p| p.kind() == wanted)
                .ok_or(ConsoleError::InvalidPromotion {
                    character: wanted.fen_char(),
                })?;
            Some(choice)
        } else {
            None
        };

        let mut captured = None;
        if kind == PieceKind::Pawn && self.board.is_empty(to) && self.engine.is_en_passant_square(color, to) {
            let capture = self
                .engine
                .perform_en_passant(kind, color, from, to, &mut self.board)?;
            captured = Some(capture.piece);
        }
        if let Some(taken) = self.board.move_piece(from, to) {
            captured = Some(taken);
        }

        if let Some(choice) = promoted {
            self.board.place_piece(to, choice);
        }

        self.engine.on_piece_moved(kind, color, from, to);
        self.side_to_move = !color;
        debug!(%from, %to, ?captured, ?promoted, "move committed");

        Ok(MoveOutcome {
            from,
            to,
            piece,
            captured,
            castled: None,
            promoted,
        })
    }

    /// The castling target selected by a king move `from` -> `to`, if any.
    fn castling_for(&self, color: Color, from: Square, to: Square) -> Option<CastlingTarget> {
        self.engine
            .legal_castling_destinations(color, from, &self.board)
            .into_iter()
            .find(|target| {
                target.square == to
                    || (to.row() == target.square.row() && to.col() == target.side.king_dest_col())
            })
    }

    fn write_moves<W: Write>(&self, sq: Square, output: &mut W) -> Result<(), ConsoleError> {
        let piece = self
            .board
            .piece_at(sq)
            .ok_or(ConsoleError::EmptySquare { square: sq })?;
        let moves = self
            .engine
            .all_legal_moves(piece.kind(), piece.color(), sq, &self.board);

        let listed: Vec<String> = moves
            .iter()
            .map(|c| match c.castling {
                Some(side) => format!("{}({side})", c.square),
                None if c.is_capture => format!("x{}", c.square),
                None => c.square.to_string(),
            })
            .collect();
        writeln!(output, "{sq} {piece}: {}", listed.join(" "))?;
        Ok(())
    }
}

fn write_outcome<W: Write>(outcome: &MoveOutcome, output: &mut W) -> std::io::Result<()> {
    write!(output, "{} {}{}", outcome.piece, outcome.from, outcome.to)?;
    if let Some(castled) = outcome.castled {
        write!(output, " castles {}", castled.side)?;
    }
    if let Some(captured) = outcome.captured {
        write!(output, " takes {captured}")?;
    }
    if let Some(promoted) = outcome.promoted {
        write!(output, " promotes to {promoted}")?;
    }
    writeln!(output)
}
