//! Combat system
//!
//! Resolves a challenger-vs-champion battle: initiative, per-turn damage,
//! the round loop and the final decision.

mod battle;
mod damage;
mod initiative;
mod outcome;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub use battle::{BattleReport, BattleState, RoundRecord, TurnRecord, resolve_battle};
pub use damage::{base_damage, roll_damage, special_damage, special_triggers};
pub use initiative::{Initiative, roll_initiative};
pub use outcome::{Decision, decide_winner};

/// One of the two corners of the arena
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Challenger,
    Champion,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Side::Challenger => Side::Champion,
            Side::Champion => Side::Challenger,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::Challenger => 0,
            Side::Champion => 1,
        }
    }

    /// Marker used in battle logs
    pub const fn badge(self) -> &'static str {
        match self {
            Side::Challenger => "🔵",
            Side::Champion => "🔴",
        }
    }
}
