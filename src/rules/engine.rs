//! The rules engine and turn state machine.
//!
//! `Game` owns the board, both sides' piece counters, the phase, the side to
//! act, and the move log. The three action operations are the only way to
//! change any of them:
//!
//! - `place` (Placing): put a piece from hand on an empty point
//! - `move_piece` (Moving): slide to an adjacent empty point, or fly to any
//!   empty point once down to the flying threshold
//! - `remove` (Removing): take an opponent piece after closing a mill
//!
//! Every check runs before the first write, so a rejected call returns an
//! `ActionError` and leaves the game exactly as it was.
//!
//! ```
//! use rust_morris::core::{Coord, MorrisConfig};
//! use rust_morris::rules::{Game, Phase};
//!
//! let mut game = Game::with_config(MorrisConfig::default().with_seed(1)).unwrap();
//! let first = game.current_side();
//!
//! game.place(Coord::new('A', 1)).unwrap();
//! assert_eq!(game.current_side(), first.opponent());
//! assert_eq!(game.phase(), Phase::Placing);
//! assert_eq!(game.counts(first).in_hand, 8);
//! ```

use im::Vector;
use tracing::{debug, trace};

use crate::board::{self, Board, PointId};
use crate::core::{
    Action, ActionKind, Coord, GameRng, MorrisConfig, MoveRecord, Occupancy, Side, SideCounts,
    SideMap,
};

use super::error::{ActionError, ConfigError};
use super::phase::Phase;

/// Start a standard game with a fair coin flip for the first side.
#[must_use]
pub fn new_game() -> Game {
    Game::new()
}

/// A game of Morris in progress.
///
/// Cloning is cheap (the move log is a persistent vector), which is how
/// readers get consistent snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    config: MorrisConfig,
    seed: u64,
    board: Board,
    sides: SideMap<SideCounts>,
    phase: Phase,
    current: Side,
    winner: Option<Side>,
    turn: u32,
    log: Vector<MoveRecord>,
}

impl Game {
    /// A standard game, starting side chosen by coin flip.
    #[must_use]
    pub fn new() -> Self {
        Self::build(MorrisConfig::default(), GameRng::from_entropy())
    }

    /// A standard game with a fixed coin-flip seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::build(MorrisConfig::default().with_seed(seed), GameRng::new(seed))
    }

    /// A game under a custom ruleset.
    pub fn with_config(config: MorrisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self::build(config, rng))
    }

    fn build(config: MorrisConfig, mut rng: GameRng) -> Self {
        let current = if rng.coin_flip() { Side::White } else { Side::Black };
        let pieces = config.pieces_per_side;
        debug!(seed = rng.seed(), %current, pieces, "new game");

        Self {
            seed: rng.seed(),
            board: Board::new(),
            sides: SideMap::with_value(SideCounts::new(pieces)),
            phase: Phase::Placing,
            current,
            winner: None,
            turn: 0,
            log: Vector::new(),
            config,
        }
    }

    // === Queries ===

    /// The ruleset in force.
    #[must_use]
    pub fn config(&self) -> &MorrisConfig {
        &self.config
    }

    /// Seed that decided the starting side.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Occupancy of a label; `Occupancy::Invalid` for non-playable labels.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Occupancy {
        self.board.get(coord)
    }

    /// Whether the piece at `coord` currently stands in a mill.
    #[must_use]
    pub fn in_mill(&self, coord: Coord) -> bool {
        board::forms_mill(&self.board, coord)
    }

    /// The side whose turn it is.
    #[must_use]
    pub fn current_side(&self) -> Side {
        self.current
    }

    /// The side waiting for its turn.
    #[must_use]
    pub fn opponent_side(&self) -> Side {
        self.current.opponent()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Piece counters for a side.
    #[must_use]
    pub fn counts(&self, side: Side) -> SideCounts {
        self.sides[side]
    }

    /// Completed turns so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every applied action, oldest first.
    #[must_use]
    pub fn move_log(&self) -> &Vector<MoveRecord> {
        &self.log
    }

    /// Whether `side` may currently fly.
    #[must_use]
    pub fn can_fly(&self, side: Side) -> bool {
        self.sides[side].on_board <= self.config.flying_threshold
    }

    /// Every action the side to act may take right now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let side = self.current;
        let topology = self.board.topology();
        match self.phase {
            Phase::Placing => {
                if self.sides[side].in_hand == 0 {
                    return Vec::new();
                }
                self.board
                    .empty_points()
                    .map(|point| Action::Place(topology.coord(point)))
                    .collect()
            }
            Phase::Moving => self
                .board
                .pieces(side)
                .flat_map(|from| {
                    self.destinations(side, from).into_iter().map(move |to| Action::Move {
                        from: topology.coord(from),
                        to: topology.coord(to),
                    })
                })
                .collect(),
            Phase::Removing => {
                board::removable_pieces(&self.board, side.opponent(), self.config.removal_rule)
                    .into_iter()
                    .map(|point| Action::Remove(topology.coord(point)))
                    .collect()
            }
            Phase::GameOver => Vec::new(),
        }
    }

    fn destinations(&self, side: Side, from: PointId) -> Vec<PointId> {
        if self.can_fly(side) {
            self.board.empty_points().collect()
        } else {
            self.board
                .topology()
                .neighbors(from)
                .iter()
                .copied()
                .filter(|&to| self.board.at(to).is_none())
                .collect()
        }
    }

    fn has_moves(&self, side: Side) -> bool {
        self.board
            .pieces(side)
            .any(|from| !self.destinations(side, from).is_empty())
    }

    // === Actions ===

    /// Place a piece for the side to act.
    pub fn place(&mut self, at: Coord) -> Result<(), ActionError> {
        self.apply(Action::Place(at))
    }

    /// Move a piece for the side to act.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<(), ActionError> {
        self.apply(Action::Move { from, to })
    }

    /// Remove an opponent piece after closing a mill.
    pub fn remove(&mut self, at: Coord) -> Result<(), ActionError> {
        self.apply(Action::Remove(at))
    }

    /// Validate and apply any action for the side to act.
    pub fn apply(&mut self, action: Action) -> Result<(), ActionError> {
        let side = self.current;
        let result = match action {
            Action::Place(at) => self.try_place(at),
            Action::Move { from, to } => self.try_move(from, to),
            Action::Remove(at) => self.try_remove(at),
        };
        match &result {
            Ok(()) => debug!(
                %side,
                %action,
                phase = %self.phase,
                next = %self.current,
                "action applied"
            ),
            Err(err) => trace!(%side, %action, %err, "action rejected"),
        }
        result
    }

    fn try_place(&mut self, at: Coord) -> Result<(), ActionError> {
        self.check_phase(ActionKind::Place)?;
        let side = self.current;
        let point = self.point(at)?;
        if self.board.at(point).is_some() {
            return Err(ActionError::TargetOccupied(at));
        }
        if self.sides[side].in_hand == 0 {
            return Err(ActionError::NoPiecesInHand(side));
        }

        let counts = &mut self.sides[side];
        counts.in_hand -= 1;
        counts.on_board += 1;
        self.board.put(point, Some(side));
        self.record(Action::Place(at));
        self.after_landing(point);
        Ok(())
    }

    fn try_move(&mut self, from: Coord, to: Coord) -> Result<(), ActionError> {
        self.check_phase(ActionKind::Move)?;
        let side = self.current;
        if self.sides[side].in_hand > 0 {
            return Err(ActionError::StillPlacing(side));
        }
        let source = self.point(from)?;
        let destination = self.point(to)?;
        if self.board.at(source) != Some(side) {
            return Err(ActionError::NotOwnPiece { at: from, side });
        }
        if self.board.at(destination).is_some() {
            return Err(ActionError::TargetOccupied(to));
        }
        if !self.can_fly(side) && !self.board.topology().are_adjacent(source, destination) {
            return Err(ActionError::IllegalDestination { from, to });
        }

        self.board.put(source, None);
        self.board.put(destination, Some(side));
        self.record(Action::Move { from, to });
        self.after_landing(destination);
        Ok(())
    }

    fn try_remove(&mut self, at: Coord) -> Result<(), ActionError> {
        self.check_phase(ActionKind::Remove)?;
        let opponent = self.current.opponent();
        let point = self.point(at)?;
        match self.board.at(point) {
            None => return Err(ActionError::TargetEmpty(at)),
            Some(side) if side != opponent => {
                return Err(ActionError::NotOwnPiece { at, side: opponent });
            }
            Some(_) => {}
        }
        if board::is_protected(&self.board, point, self.config.removal_rule) {
            return Err(ActionError::ProtectedByMill(at));
        }

        self.board.put(point, None);
        self.sides[opponent].on_board -= 1;
        self.record(Action::Remove(at));
        self.end_turn();
        Ok(())
    }

    fn check_phase(&self, action: ActionKind) -> Result<(), ActionError> {
        match self.phase.accepts() {
            None => Err(ActionError::GameAlreadyOver),
            Some(accepted) if accepted == action => Ok(()),
            Some(_) => Err(ActionError::WrongPhase {
                action,
                phase: self.phase,
            }),
        }
    }

    fn point(&self, coord: Coord) -> Result<PointId, ActionError> {
        self.board
            .topology()
            .point(coord)
            .ok_or(ActionError::InvalidPoint(coord))
    }

    fn record(&mut self, action: Action) {
        self.log.push_back(MoveRecord::new(self.current, action, self.turn));
    }

    /// A piece just arrived on `point`: either open the removal sub-phase or
    /// hand the turn over.
    fn after_landing(&mut self, point: PointId) {
        if !board::in_mill(&self.board, point) {
            self.end_turn();
            return;
        }
        let opponent = self.current.opponent();
        if board::removable_pieces(&self.board, opponent, self.config.removal_rule).is_empty() {
            debug!(side = %self.current, "mill closed with nothing removable");
            self.end_turn();
        } else {
            self.phase = Phase::Removing;
        }
    }

    fn end_turn(&mut self) {
        self.turn += 1;
        self.current = self.current.opponent();
        self.phase = self.phase_for(self.current);
        if self.phase == Phase::GameOver {
            self.winner = Some(self.current.opponent());
            debug!(winner = %self.current.opponent(), turn = self.turn, "game over");
        }
    }

    fn phase_for(&self, side: Side) -> Phase {
        let counts = self.sides[side];
        if counts.total() < self.config.loss_threshold {
            Phase::GameOver
        } else if counts.in_hand > 0 {
            Phase::Placing
        } else if self.config.blocked_side_loses && !self.has_moves(side) {
            Phase::GameOver
        } else {
            Phase::Moving
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
