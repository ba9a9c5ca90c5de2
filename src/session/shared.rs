//! One game shared between threads.
//!
//! Every action goes through a single mutex, so validation and application
//! of one action never interleave with another. Threads that want to know
//! when they own the turn subscribe to a channel instead of polling: after
//! each successful action exactly one `TurnNotice` goes to the new owner's
//! subscribers and to every observer.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Action, Coord, Side};
use crate::rules::{ActionError, Game, Phase};

/// Who acts next, as of one completed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnNotice {
    /// Side that owns the turn.
    pub owner: Side,
    /// Phase the owner has to act in.
    pub phase: Phase,
    /// Completed turns when the notice was issued.
    pub turn: u32,
    /// Actions applied so far; tells apart the two notices of a mill turn.
    pub actions: usize,
}

impl TurnNotice {
    /// Notice describing the game as it stands.
    #[must_use]
    pub fn of(game: &Game) -> Self {
        Self {
            owner: game.current_side(),
            phase: game.phase(),
            turn: game.turn(),
            actions: game.move_log().len(),
        }
    }

    /// Whether this notice announces the end of the game.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

struct Watcher {
    /// `None` for observers, who see every notice.
    side: Option<Side>,
    tx: Sender<TurnNotice>,
}

impl Watcher {
    fn wants(&self, notice: &TurnNotice) -> bool {
        match self.side {
            None => true,
            Some(side) => notice.owner == side || notice.is_over(),
        }
    }
}

struct Inner {
    game: Game,
    watchers: Vec<Watcher>,
    closed: bool,
}

impl Inner {
    fn notify(&mut self, notice: TurnNotice) {
        // Receivers that hung up are dropped on the way.
        self.watchers
            .retain(|watcher| !watcher.wants(&notice) || watcher.tx.send(notice).is_ok());
    }

    fn watch(&mut self, side: Option<Side>) -> Receiver<TurnNotice> {
        let (tx, rx) = mpsc::channel();
        if self.closed {
            return rx;
        }
        let watcher = Watcher { side, tx };
        let notice = TurnNotice::of(&self.game);
        if watcher.wants(&notice) && watcher.tx.send(notice).is_err() {
            return rx;
        }
        self.watchers.push(watcher);
        rx
    }
}

/// Cloneable handle to a game played from several threads.
#[derive(Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<Inner>>,
}

impl SharedGame {
    /// Share `game`.
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                game,
                watchers: Vec::new(),
                closed: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Nothing panics while the lock is held with a half-applied action:
        // the game validates before it writes.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// An owned copy of the game after the last completed action.
    #[must_use]
    pub fn snapshot(&self) -> Game {
        self.lock().game.clone()
    }

    /// The current turn owner and phase.
    #[must_use]
    pub fn notice(&self) -> TurnNotice {
        TurnNotice::of(&self.lock().game)
    }

    /// Notices for turns owned by `side`, plus the final one.
    ///
    /// If `side` already owns the turn the current notice is delivered
    /// straight away.
    #[must_use]
    pub fn subscribe(&self, side: Side) -> Receiver<TurnNotice> {
        self.lock().watch(Some(side))
    }

    /// Every notice, starting with the current one.
    #[must_use]
    pub fn observe(&self) -> Receiver<TurnNotice> {
        self.lock().watch(None)
    }

    /// Apply `action` on behalf of `side`.
    ///
    /// Rejected with `NotYourTurn` unless `side` owns the turn. On success
    /// returns the notice that was sent out.
    pub fn apply(&self, side: Side, action: Action) -> Result<TurnNotice, ActionError> {
        let mut inner = self.lock();
        if inner.game.is_over() {
            return Err(ActionError::GameAlreadyOver);
        }
        if inner.game.current_side() != side {
            trace!(%side, %action, "out of turn");
            return Err(ActionError::NotYourTurn(side));
        }
        inner.game.apply(action)?;

        let notice = TurnNotice::of(&inner.game);
        inner.notify(notice);
        Ok(notice)
    }

    pub fn place(&self, side: Side, at: Coord) -> Result<TurnNotice, ActionError> {
        self.apply(side, Action::Place(at))
    }

    pub fn move_piece(&self, side: Side, from: Coord, to: Coord) -> Result<TurnNotice, ActionError> {
        self.apply(side, Action::Move { from, to })
    }

    pub fn remove(&self, side: Side, at: Coord) -> Result<TurnNotice, ActionError> {
        self.apply(side, Action::Remove(at))
    }

    /// Hang up every watcher so blocked movers return. Later subscriptions
    /// receive nothing. Actions are still accepted.
    pub fn close(&self) {
        let mut inner = self.lock();
        if !inner.closed {
            debug!(watchers = inner.watchers.len(), "closing session");
        }
        inner.closed = true;
        inner.watchers.clear();
    }

    /// Whether `close` has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

impl std::fmt::Debug for SharedGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("SharedGame")
            .field("notice", &TurnNotice::of(&inner.game))
            .field("watchers", &inner.watchers.len())
            .field("closed", &inner.closed)
            .finish()
    }
}
