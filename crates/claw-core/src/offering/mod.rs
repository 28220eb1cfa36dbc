//! Arena offerings
//!
//! Three ways into the arena, all fought by the same engine:
//!
//! - `ArenaBattle`: free entry against the standard champion
//! - `VipBattle`: gated on a declared CLAWD balance, which also buys a stat bonus
//! - `WagerBattle`: the challenger stakes CLAWD and is paid 1.9x on a win
//!
//! Each offering only supplies its deltas: the champion it fields, any stat
//! transform before the battle, and what it pays out afterwards.

mod arena;
mod vip;
mod wager;

use serde::{Deserialize, Serialize};

use crate::combat::BattleReport;
use crate::narration::Corner;
use crate::payment::TransferInstruction;
use crate::request::{BattleRequest, ValidationError};
use crate::rng::RandomSource;

pub use arena::ArenaBattle;
pub use vip::{VipBattle, VipDeliverable, VipEntry};
pub use wager::{WagerBattle, WagerDeliverable, WagerEntry};

/// Fields every deliverable carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    pub winner: String,
    pub challenger_final_hp: i32,
    pub champion_final_hp: i32,
    pub rounds: u32,
    pub battle_log: String,
}

impl BattleResult {
    pub fn new(corner: &Corner<'_>, report: &BattleReport, battle_log: String) -> Self {
        Self {
            winner: corner.winner_name(report).to_string(),
            challenger_final_hp: report.challenger_hp,
            champion_final_hp: report.champion_hp,
            rounds: report.rounds_fought,
            battle_log,
        }
    }
}

/// Output of a job run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult<D> {
    pub deliverable: D,
    /// Payout the dispatcher should send, if any
    #[serde(
        rename = "payableDetail",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub payable_detail: Option<TransferInstruction>,
}

impl<D: Serialize> JobResult<D> {
    pub fn new(deliverable: D) -> Self {
        Self {
            deliverable,
            payable_detail: None,
        }
    }

    /// The deliverable as pretty-printed JSON
    pub fn deliverable_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.deliverable)
    }
}

/// One way of entering the arena
pub trait Offering {
    /// Validated request
    type Entry;
    /// What the buyer receives
    type Deliverable: Serialize;

    /// Short identifier, used in logs
    fn name(&self) -> &'static str;

    /// Check a raw request; all rejections happen here.
    fn validate(&self, request: &BattleRequest) -> Result<Self::Entry, ValidationError>;

    /// Message shown when the job is accepted
    fn payment_message(&self, entry: &Self::Entry) -> String;

    /// Run the battle and wrap the result.
    fn execute<R: RandomSource + ?Sized>(
        &self,
        entry: &Self::Entry,
        rng: &mut R,
    ) -> JobResult<Self::Deliverable>;

    /// Validate then execute.
    fn run<R: RandomSource + ?Sized>(
        &self,
        request: &BattleRequest,
        rng: &mut R,
    ) -> Result<JobResult<Self::Deliverable>, ValidationError> {
        let entry = self.validate(request)?;
        Ok(self.execute(&entry, rng))
    }
}
