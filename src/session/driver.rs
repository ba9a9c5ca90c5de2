//! Running a mover on its own thread.
//!
//! The driver blocks on its side's notice channel and only consults the
//! mover when a notice says the side owns the turn. It issues at most one
//! successful action per notice: a rejection lets the mover try again
//! against the same notice, anything else waits for the next one.

use std::io;
use std::thread::{self, JoinHandle};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::Side;
use crate::rules::ActionError;

use super::mover::Mover;
use super::shared::{SharedGame, TurnNotice};

/// Why a driver returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitReason {
    /// The game ended with this winner.
    GameOver(Option<Side>),
    /// The mover returned no action; the driver closed the session.
    Stopped,
    /// The session was closed by someone else.
    Closed,
}

/// What a driver did before returning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoverReport {
    pub side: Side,
    /// Actions this driver got applied.
    pub applied: usize,
    /// Actions the game rejected.
    pub rejected: usize,
    pub reason: ExitReason,
}

/// Run `mover` for `side` on a thread named after it.
pub fn spawn_mover<M>(shared: SharedGame, side: Side, mut mover: M) -> io::Result<JoinHandle<MoverReport>>
where
    M: Mover + 'static,
{
    let name = format!("mover-{}-{}", side, mover.name());
    thread::Builder::new()
        .name(name)
        .spawn(move || drive(&shared, side, &mut mover))
}

/// Drive `mover` for `side` on the calling thread until the game ends, the
/// mover gives up, or the session closes.
pub fn drive<M: Mover + ?Sized>(shared: &SharedGame, side: Side, mover: &mut M) -> MoverReport {
    let notices = shared.subscribe(side);
    let mut report = MoverReport {
        side,
        applied: 0,
        rejected: 0,
        reason: ExitReason::Closed,
    };
    debug!(%side, mover = mover.name(), "mover started");

    for notice in notices.iter() {
        if notice.is_over() {
            report.reason = ExitReason::GameOver(shared.snapshot().winner());
            break;
        }
        match take_turn(shared, side, mover, notice, &mut report) {
            Turn::Done => {}
            Turn::Finished(reason) => {
                report.reason = reason;
                break;
            }
        }
    }

    debug!(
        %side,
        mover = mover.name(),
        applied = report.applied,
        reason = ?report.reason,
        "mover finished"
    );
    report
}

enum Turn {
    Done,
    Finished(ExitReason),
}

fn take_turn<M: Mover + ?Sized>(
    shared: &SharedGame,
    side: Side,
    mover: &mut M,
    notice: TurnNotice,
    report: &mut MoverReport,
) -> Turn {
    loop {
        let view = shared.snapshot();
        if TurnNotice::of(&view) != notice {
            trace!(%side, ?notice, "stale notice");
            return Turn::Done;
        }

        let Some(action) = mover.decide_next_action(&view) else {
            shared.close();
            return Turn::Finished(ExitReason::Stopped);
        };

        match shared.apply(side, action) {
            Ok(_) => {
                report.applied += 1;
                return Turn::Done;
            }
            Err(ActionError::GameAlreadyOver) => {
                return Turn::Finished(ExitReason::GameOver(shared.snapshot().winner()));
            }
            Err(ActionError::NotYourTurn(_)) => return Turn::Done,
            Err(err) => {
                report.rejected += 1;
                debug!(%side, %action, %err, "mover action rejected");
            }
        }
    }
}
