//! Line-oriented console host for the castellan rules engine.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::{Command, MoveRequest};
pub use config::ConsoleConfig;
pub use error::ConsoleError;
pub use session::{MoveOutcome, Session};
