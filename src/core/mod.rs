//! Core engine types: labels, sides, actions, RNG, configuration.
//!
//! This module contains the vocabulary shared by the board, the rules
//! engine, and the session layer. Nothing here knows the board's shape.

pub mod coord;
pub mod side;
pub mod rng;
pub mod config;
pub mod action;

pub use coord::{Coord, COLUMNS, ROWS};
pub use side::{Occupancy, Side, SideCounts, SideMap};
pub use rng::GameRng;
pub use config::{MorrisConfig, RemovalRule};
pub use action::{Action, ActionKind, MoveRecord};
