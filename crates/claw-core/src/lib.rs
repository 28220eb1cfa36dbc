//! claw-core: combat resolution for the Clawsseum arena
//!
//! A challenger supplied by the buyer fights a fixed champion. The battle is
//! structurally deterministic (fixed turn order, round cap, one special per
//! side) with randomized initiative and damage variance drawn from an
//! injectable `RandomSource`.
//!
//! The crate has no I/O beyond optional config loading. Payment is computed,
//! never executed.

pub mod combat;
pub mod fighter;
pub mod narration;
pub mod offering;
pub mod options;
pub mod payment;
pub mod request;

mod consts;
mod format;
mod rng;

pub use consts::*;
pub use fighter::{Fighter, Strategy};
pub use format::{short_wallet, thousands};
pub use offering::{
    ArenaBattle, BattleResult, JobResult, Offering, VipBattle, VipDeliverable, VipEntry,
    WagerBattle, WagerDeliverable, WagerEntry,
};
pub use options::{ArenaOptions, OptionsError};
pub use request::{BattleRequest, ChallengerEntry, ValidationError, Venue};
pub use rng::{GameRng, RandomSource, SequenceRng};
