//! Classic chess move legality with castling and en passant bookkeeping.
//!
//! A [`RulesEngine`] answers "may this piece go there?" against any
//! [`Board`](castellan_core::Board) and keeps the cross-move state those
//! answers depend on. The host owns the board and turn order, and reports
//! every committed move back through [`RulesEngine::on_piece_moved`].

mod castling;
mod en_passant;
mod engine;
mod enumerate;
mod error;
mod predicate;
mod symbols;

pub use castling::{CastleSide, CastlingMove, CastlingState, CastlingTarget, KING_HOME_COL};
pub use en_passant::{EnPassantCapture, EnPassantTarget};
pub use engine::RulesEngine;
pub use enumerate::Candidate;
pub use error::{CastlingError, EnPassantError};
pub use symbols::{classify, promotion_choices, promotion_symbols};
