//! Conquid game engine library.
//!
//! Exposes the board model, the move rules, game records, the live session
//! and the text protocol for use by integration tests and the binary entry
//! point.

pub mod board;
pub mod history;
pub mod movegen;
pub mod protocol;
pub mod rules;
pub mod session;
pub mod shell;
