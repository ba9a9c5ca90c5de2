//! Playing one game from several threads.
//!
//! - `SharedGame`: the game behind one mutex, with turn notices
//! - `Mover`: anything that picks actions for a side (`RandomMover`,
//!   `ChannelMover` for human input)
//! - `spawn_mover`: runs a mover on its own thread, one action per notice

pub mod shared;
pub mod mover;
pub mod driver;

pub use shared::{SharedGame, TurnNotice};
pub use mover::{ChannelMover, Mover, RandomMover};
pub use driver::{drive, spawn_mover, ExitReason, MoverReport};
