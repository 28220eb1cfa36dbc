//! Wager battle: stake CLAWD, win 1.9x back or forfeit the stake.

use serde::{Deserialize, Serialize};

use super::{BattleResult, JobResult, Offering};
use crate::combat::{BattleReport, resolve_battle};
use crate::fighter::Fighter;
use crate::format::thousands;
use crate::narration::{BattleLog, Corner, compact_turn, final_hp_line, rule};
use crate::options::ArenaOptions;
use crate::payment::{FundsRequest, payout_instruction, wager_funds_request, wager_payout};
use crate::request::{BattleRequest, ChallengerEntry, ValidationError, Venue, whole_clawd};
use crate::rng::RandomSource;

/// A validated wager request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WagerEntry {
    pub challenger: ChallengerEntry,
    pub wager_amount: u64,
    /// Winnings go here; the treasury wallet when absent
    pub buyer_wallet: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagerDeliverable {
    #[serde(flatten)]
    pub result: BattleResult,
    pub challenger_won: bool,
    pub wager_amount: u64,
    /// Payout on a win, 0 on a loss
    pub clawd_returned: u64,
}

#[derive(Debug, Clone)]
pub struct WagerBattle {
    champion: Fighter,
    min_wager: u64,
    token_address: String,
    treasury: String,
}

impl WagerBattle {
    pub fn new(options: &ArenaOptions) -> Self {
        Self {
            champion: options.champion(),
            min_wager: options.min_wager,
            token_address: options.token_address.clone(),
            treasury: options.treasury_wallet.clone(),
        }
    }

    pub fn champion(&self) -> &Fighter {
        &self.champion
    }

    /// Transfer the buyer must make before the battle runs
    pub fn funds_request(&self, entry: &WagerEntry) -> FundsRequest {
        wager_funds_request(entry.wager_amount, &self.token_address, &self.treasury)
    }
}

impl Default for WagerBattle {
    fn default() -> Self {
        Self::new(&ArenaOptions::default())
    }
}

impl Offering for WagerBattle {
    type Entry = WagerEntry;
    type Deliverable = WagerDeliverable;

    fn name(&self) -> &'static str {
        "wager_battle"
    }

    fn validate(&self, request: &BattleRequest) -> Result<WagerEntry, ValidationError> {
        let challenger = ChallengerEntry::from_request(request, Venue::Wager)?;

        let wager_amount = match request.wager_amount {
            Some(w) if w >= self.min_wager as f64 => {
                if w.fract() != 0.0 {
                    return Err(ValidationError::FractionalWager { got: w });
                }
                whole_clawd(w)
            }
            got => {
                return Err(ValidationError::WagerTooLow {
                    minimum: self.min_wager,
                    got,
                });
            }
        };

        Ok(WagerEntry {
            challenger,
            wager_amount,
            buyer_wallet: request.buyer_wallet.clone(),
        })
    }

    fn payment_message(&self, entry: &WagerEntry) -> String {
        format!(
            "⚔️💰 Wager Battle accepted! {} risks {} CLAWD. Transfer CLAWD to enter the arena!",
            entry.challenger.name,
            thousands(entry.wager_amount)
        )
    }

    fn execute<R: RandomSource + ?Sized>(
        &self,
        entry: &WagerEntry,
        rng: &mut R,
    ) -> JobResult<WagerDeliverable> {
        let mut challenger = entry.challenger.fighter();
        challenger.apply_strategy();

        let report = resolve_battle(&challenger, &self.champion, rng);
        let corner = Corner::new(&challenger, &self.champion);
        let won = report.challenger_won();
        let returned = if won { wager_payout(entry.wager_amount) } else { 0 };
        let battle_log = narrate(&corner, &report, entry.wager_amount, returned);

        let recipient = entry.buyer_wallet.as_deref().unwrap_or(&self.treasury);
        let payable = payout_instruction(won, entry.wager_amount, &self.token_address, recipient);

        log::info!(
            "{}: {} staked {} vs {}, returned {returned}",
            self.name(),
            challenger.name,
            entry.wager_amount,
            self.champion.name
        );
        JobResult {
            deliverable: WagerDeliverable {
                result: BattleResult::new(&corner, &report, battle_log),
                challenger_won: won,
                wager_amount: entry.wager_amount,
                clawd_returned: returned,
            },
            payable_detail: payable,
        }
    }
}

fn narrate(corner: &Corner<'_>, report: &BattleReport, wager: u64, returned: u64) -> String {
    let c = corner.challenger;
    let ch = corner.champion;
    let sep = rule('═', 44);
    let mut log = BattleLog::new();

    log.push("🏟️  CLAWSSEUM WAGER BATTLE");
    log.push(format!("💰 Wager: {} CLAWD", thousands(wager)));
    log.push(format!(
        "🏆 Prize Pool (if you win): {} CLAWD",
        thousands(wager_payout(wager))
    ));
    log.push(sep.as_str());
    log.push(format!(
        "🔵 {}  ATK:{} DEF:{} SPD:{} HP:{}",
        c.name, c.attack, c.defense, c.speed, c.hp
    ));
    if let Some(skill) = &c.special_skill {
        log.push(format!(
            "   ✨ Special: {skill} | Strategy: {}",
            c.strategy_shout()
        ));
    }
    log.push(format!(
        "🔴 {}    ATK:{} DEF:{} SPD:{} HP:{}",
        ch.name, ch.attack, ch.defense, ch.speed, ch.hp
    ));
    if let Some(skill) = &ch.special_skill {
        log.push(format!("   ✨ Special: {skill}"));
    }
    log.push(sep.as_str());
    log.push(format!(
        "\n⚡ {} strikes first!\n",
        corner.name(report.initiative.first)
    ));

    for round in &report.rounds {
        log.push(format!("🔸 Round {}", round.number));
        for turn in &round.turns {
            log.push(compact_turn(corner, turn));
        }
        log.blank();
    }

    log.push(sep.as_str());
    log.push(format!("🏆 WINNER: {}", corner.winner_name(report)));
    if report.challenger_won() {
        log.push(format!(
            "💰 {} wins! {} CLAWD will be returned to your wallet.",
            c.name,
            thousands(returned)
        ));
    } else {
        log.push(format!(
            "💀 {} lost! {} CLAWD goes to the Clawsseum treasury.",
            c.name,
            thousands(wager)
        ));
    }
    log.push(final_hp_line(corner, report));
    log.push("⚔️  Powered by Clawsseum × Virtuals Protocol ACP");
    log.finish()
}
