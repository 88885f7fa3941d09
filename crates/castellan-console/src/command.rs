//! Console command parsing.

use castellan_core::{PieceKind, Square};

use crate::error::ConsoleError;

/// A move typed as `<from><to>[q|r|b|n]`, e.g. `e2e4` or `a7a8n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    /// Explicit promotion piece, if a suffix was given.
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    /// Parse coordinate notation.
    pub fn parse(text: &str) -> Result<MoveRequest, ConsoleError> {
        let invalid = || ConsoleError::InvalidMove {
            text: text.to_string(),
        };
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(invalid());
        }

        let from: Square = text[0..2].parse()?;
        let to: Square = text[2..4].parse()?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => Some(parse_promotion(c)?),
        };
        Ok(MoveRequest {
            from,
            to,
            promotion,
        })
    }
}

fn parse_promotion(c: char) -> Result<PieceKind, ConsoleError> {
    match PieceKind::from_fen_char(c) {
        Some(kind @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => {
            Ok(kind)
        }
        _ => Err(ConsoleError::InvalidPromotion { character: c }),
    }
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- reset to the starting position.
    NewGame,
    /// `board` -- print the board.
    Show,
    /// `moves <square>` -- list legal destinations of the piece there.
    Moves(Square),
    /// `move <from><to>[promotion]` -- commit a move.
    Move(MoveRequest),
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&keyword) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match keyword {
        "new" => Ok(Command::NewGame),
        "board" => Ok(Command::Show),
        "quit" => Ok(Command::Quit),
        "moves" => {
            let sq = tokens
                .get(1)
                .ok_or(ConsoleError::MissingArgument { command: "moves" })?;
            Ok(Command::Moves(sq.parse()?))
        }
        "move" => {
            let mv = tokens
                .get(1)
                .ok_or(ConsoleError::MissingArgument { command: "move" })?;
            Ok(Command::Move(MoveRequest::parse(mv)?))
        }
        _ => Ok(Command::Unknown(keyword.to_string())),
    }
}
