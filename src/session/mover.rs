//! Things that decide actions for one side.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::core::{Action, GameRng};
use crate::rules::Game;

/// Decides the next action for the side it plays.
pub trait Mover: Send {
    /// Pick an action for the side to act in `view`.
    ///
    /// `None` means the mover has nothing more to offer and its driver
    /// should stop.
    fn decide_next_action(&mut self, view: &Game) -> Option<Action>;

    /// Display name.
    fn name(&self) -> &str;
}

/// Picks uniformly among the legal actions.
#[derive(Clone, Debug)]
pub struct RandomMover {
    name: String,
    rng: GameRng,
}

impl RandomMover {
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: GameRng::new(seed),
        }
    }

    pub fn from_entropy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: GameRng::from_entropy(),
        }
    }
}

impl Mover for RandomMover {
    fn decide_next_action(&mut self, view: &Game) -> Option<Action> {
        let actions = view.legal_actions();
        self.rng.choose(&actions).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Forwards actions from an input source such as a UI event loop.
///
/// The view is ignored: whatever arrives on the channel is tried, and
/// a rejected action simply waits for the next input.
#[derive(Debug)]
pub struct ChannelMover {
    name: String,
    input: Receiver<Action>,
}

impl ChannelMover {
    /// Create the mover and the sender that feeds it.
    pub fn new(name: impl Into<String>) -> (Self, Sender<Action>) {
        let (tx, input) = mpsc::channel();
        (
            Self {
                name: name.into(),
                input,
            },
            tx,
        )
    }
}

impl Mover for ChannelMover {
    fn decide_next_action(&mut self, _view: &Game) -> Option<Action> {
        self.input.recv().ok()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
