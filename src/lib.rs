//! # rust-morris
//!
//! A rules engine for Nine Men's Morris.
//!
//! ## Design Principles
//!
//! 1. **Topology, Not Geometry**: The 24 playable points and their lines
//!    come from one adjacency table. Mills are found by walking that graph,
//!    never by coordinate arithmetic.
//!
//! 2. **Rejections Are Values**: Every action returns `Result`. A rejected
//!    action says why and leaves the game untouched.
//!
//! 3. **Single Writer**: One `Game` owns the board. Threads share it through
//!    `SharedGame`, which serializes actions and pushes turn notices instead
//!    of letting movers poll.
//!
//! ## Architecture
//!
//! - **Arena Board**: Points are `PointId` indices into a flat table with
//!   index-based neighbor lists. The standard table is built once per
//!   process.
//!
//! - **Persistent Move Log**: The log is an `im` vector, so cloning a game
//!   for a snapshot is O(1) in the log length.
//!
//! - **Seeded Randomness**: The starting side and the random mover draw from
//!   `GameRng`, so any game can be replayed from its seed.
//!
//! ## Modules
//!
//! - `core`: Labels, sides, actions, RNG, configuration
//! - `board`: Topology, occupancy, mill detection
//! - `rules`: Phases, errors, and the `Game` state machine
//! - `session`: Shared games, movers, and mover threads
//!
//! ## Example
//!
//! ```
//! use rust_morris::{Coord, Game, Phase};
//!
//! let mut game = Game::with_seed(7);
//! let first = game.current_side();
//!
//! for label in ["A1", "B2", "D1", "D2", "G1"] {
//!     game.place(label.parse::<Coord>().unwrap()).unwrap();
//! }
//!
//! // A1-D1-G1 is a mill: the same side now removes a piece.
//! assert_eq!(game.phase(), Phase::Removing);
//! assert_eq!(game.current_side(), first);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Coord, COLUMNS, ROWS,
    Side, Occupancy, SideCounts, SideMap,
    GameRng,
    MorrisConfig, RemovalRule,
    Action, ActionKind, MoveRecord,
};

pub use crate::board::{Board, PointId, Topology, POINT_COUNT};

pub use crate::rules::{new_game, Game, Phase, ActionError, ConfigError, CoordParseError, TopologyError};

pub use crate::session::{
    SharedGame, TurnNotice,
    Mover, RandomMover, ChannelMover,
    spawn_mover, ExitReason, MoverReport,
};
