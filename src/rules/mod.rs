//! The rules of Nine Men's Morris.
//!
//! `Game` is the turn state machine: it validates every action against the
//! current phase and board, applies it, and decides who acts next. Errors
//! for every layer of the crate live in `error`.

pub mod phase;
pub mod error;
pub mod engine;

pub use phase::Phase;
pub use error::{ActionError, ConfigError, CoordParseError, TopologyError};
pub use engine::{new_game, Game};
