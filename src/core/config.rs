//! Game configuration.
//!
//! The standard ruleset is `MorrisConfig::default()`. The knobs exist for
//! rule variants that differ between published rule sets, and so tests can
//! reach late-game positions with fewer pieces.

use serde::{Deserialize, Serialize};

use crate::board::POINT_COUNT;
use crate::rules::ConfigError;

/// When a piece standing in a mill may be removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemovalRule {
    /// Mill pieces are protected while the opponent has any piece outside a
    /// mill. Once every opponent piece is in a mill, any of them may go.
    #[default]
    MillsProtectedUnlessAllInMills,
    /// Mill pieces can never be removed. If every opponent piece is in a
    /// mill, the removal is forfeited and the turn passes.
    MillsAlwaysProtected,
}

/// Ruleset parameters for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorrisConfig {
    /// Pieces each side starts with in hand.
    pub pieces_per_side: u8,

    /// A side may fly (move to any empty point) while it has at most this
    /// many pieces on the board.
    pub flying_threshold: u8,

    /// A side whose pieces in hand plus on board drop below this loses.
    pub loss_threshold: u8,

    /// Which pieces a mill lets you remove.
    pub removal_rule: RemovalRule,

    /// When set, a side that must slide but has no legal move loses.
    pub blocked_side_loses: bool,

    /// Seed for the starting-side coin flip. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for MorrisConfig {
    fn default() -> Self {
        Self {
            pieces_per_side: 9,
            flying_threshold: 3,
            loss_threshold: 3,
            removal_rule: RemovalRule::default(),
            blocked_side_loses: false,
            seed: None,
        }
    }
}

impl MorrisConfig {
    /// Set the number of pieces per side.
    #[must_use]
    pub fn with_pieces_per_side(mut self, pieces: u8) -> Self {
        self.pieces_per_side = pieces;
        self
    }

    /// Set the flying threshold.
    #[must_use]
    pub fn with_flying_threshold(mut self, threshold: u8) -> Self {
        self.flying_threshold = threshold;
        self
    }

    /// Set the loss threshold.
    #[must_use]
    pub fn with_loss_threshold(mut self, threshold: u8) -> Self {
        self.loss_threshold = threshold;
        self
    }

    /// Set the removal rule.
    #[must_use]
    pub fn with_removal_rule(mut self, rule: RemovalRule) -> Self {
        self.removal_rule = rule;
        self
    }

    /// Make a blocked side lose instead of stalling.
    #[must_use]
    pub fn with_blocked_side_loses(mut self, enabled: bool) -> Self {
        self.blocked_side_loses = enabled;
        self
    }

    /// Fix the coin-flip seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the parameters describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_pieces = (POINT_COUNT / 2) as u8;
        if self.pieces_per_side < 3 || self.pieces_per_side > max_pieces {
            return Err(ConfigError::PiecesPerSide {
                pieces: self.pieces_per_side,
                max: max_pieces,
            });
        }
        if self.loss_threshold == 0 || self.loss_threshold > self.pieces_per_side {
            return Err(ConfigError::LossThreshold {
                threshold: self.loss_threshold,
                pieces: self.pieces_per_side,
            });
        }
        if self.flying_threshold > self.pieces_per_side {
            return Err(ConfigError::FlyingThreshold {
                threshold: self.flying_threshold,
                pieces: self.pieces_per_side,
            });
        }
        Ok(())
    }
}
