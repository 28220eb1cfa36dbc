//! VIP battle: free for big CLAWD holders, who get a stat bonus and face a
//! tougher champion.

use serde::{Deserialize, Serialize};

use super::{BattleResult, JobResult, Offering};
use crate::combat::{BattleReport, resolve_battle};
use crate::fighter::{Fighter, vip_bonus_percent};
use crate::format::{short_wallet, thousands};
use crate::narration::{BattleLog, Corner, compact_turn, final_hp_line, rule};
use crate::options::ArenaOptions;
use crate::request::{
    BattleRequest, ChallengerEntry, ValidationError, Venue, check_wallet, whole_clawd,
};
use crate::rng::RandomSource;

pub const VICTORY_TITLE: &str = "👑 Grand Molter of the Clawsseum";
pub const DEFEAT_TITLE: &str = "🩸 Bloodied but Unbroken";

/// One lore line per round, cycling
const ROUND_LORE: [&str; 6] = [
    "The arena trembles with each blow.",
    "Blood and data mix on the sands.",
    "The crowd chants: CLAWD! CLAWD! CLAWD!",
    "Neither fighter yields an inch.",
    "The air crackles with digital fury.",
    "This is what legends are forged from.",
];

/// A validated VIP request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VipEntry {
    pub challenger: ChallengerEntry,
    pub clawd_balance: u64,
    pub wallet_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VipDeliverable {
    #[serde(flatten)]
    pub result: BattleResult,
    pub challenger_won: bool,
    /// e.g. `+20%`
    pub vip_bonus_applied: String,
    pub title_earned: String,
}

#[derive(Debug, Clone)]
pub struct VipBattle {
    champion: Fighter,
    threshold: u64,
}

impl VipBattle {
    pub fn new(options: &ArenaOptions) -> Self {
        Self {
            champion: options.vip_champion(),
            threshold: options.vip_threshold,
        }
    }

    pub fn champion(&self) -> &Fighter {
        &self.champion
    }
}

impl Default for VipBattle {
    fn default() -> Self {
        Self::new(&ArenaOptions::default())
    }
}

impl Offering for VipBattle {
    type Entry = VipEntry;
    type Deliverable = VipDeliverable;

    fn name(&self) -> &'static str {
        "vip_battle"
    }

    fn validate(&self, request: &BattleRequest) -> Result<VipEntry, ValidationError> {
        let challenger = ChallengerEntry::from_request(request, Venue::Vip)?;

        let balance = whole_clawd(request.clawd_balance.unwrap_or(0.0));
        if balance < self.threshold {
            return Err(ValidationError::VipBalanceTooLow {
                required: self.threshold,
                declared: balance,
            });
        }

        let wallet_address = check_wallet(request.wallet_address.as_deref())?;
        Ok(VipEntry {
            challenger,
            clawd_balance: balance,
            wallet_address,
        })
    }

    fn payment_message(&self, entry: &VipEntry) -> String {
        format!(
            "👑 VIP ACCESS GRANTED — {} declared {} CLAWD. Welcome to the VIP Arena, legend! Battle is FREE for you.",
            entry.challenger.name,
            thousands(entry.clawd_balance)
        )
    }

    fn execute<R: RandomSource + ?Sized>(
        &self,
        entry: &VipEntry,
        rng: &mut R,
    ) -> JobResult<VipDeliverable> {
        let mut challenger = entry.challenger.fighter();
        let bonus = challenger.apply_vip_bonus(entry.clawd_balance);
        challenger.apply_strategy();
        let bonus_pct = vip_bonus_percent(bonus);

        let report = resolve_battle(&challenger, &self.champion, rng);
        let corner = Corner::new(&challenger, &self.champion);
        let battle_log = narrate(&corner, &report, entry, bonus_pct);

        let won = report.challenger_won();
        log::info!(
            "{}: {} (+{bonus_pct}%) vs {} won by {}",
            self.name(),
            challenger.name,
            self.champion.name,
            corner.winner_name(&report)
        );
        JobResult::new(VipDeliverable {
            result: BattleResult::new(&corner, &report, battle_log),
            challenger_won: won,
            vip_bonus_applied: format!("+{bonus_pct}%"),
            title_earned: if won { VICTORY_TITLE } else { DEFEAT_TITLE }.to_string(),
        })
    }
}

fn narrate(corner: &Corner<'_>, report: &BattleReport, entry: &VipEntry, bonus_pct: i32) -> String {
    let c = corner.challenger;
    let ch = corner.champion;
    let held = thousands(entry.clawd_balance);
    let sep = rule('★', 44);
    let mut log = BattleLog::new();

    log.push(sep.as_str());
    log.push("👑  CLAWSSEUM GRAND COLOSSEUM — VIP BATTLE");
    log.push("    Free Entry · Exclusive to CLAWD Legends");
    log.push(sep.as_str());
    log.blank();
    log.push(format!("🌟 Wallet: {}", short_wallet(&entry.wallet_address)));
    log.push(format!("💎 CLAWD Held: {held}"));
    log.push(format!("⚡ VIP Stat Bonus: +{bonus_pct}% ATK/DEF applied"));
    log.blank();
    log.push(format!(
        "📜 LORE: The molting has begun. {} steps into the Grand Colosseum,",
        c.name
    ));
    log.push(format!(
        "   claws sharpened by the weight of {held} CLAWD. The crowd roars."
    ));
    log.push(
        "   The Champion awaits — undefeated, unyielding, built from the scars of a thousand battles.",
    );
    log.blank();
    log.push(format!("🔵 {}", c.name));
    log.push(format!(
        "   ATK:{} DEF:{} SPD:{} HP:{}",
        c.attack, c.defense, c.speed, c.hp
    ));
    if let Some(skill) = &c.special_skill {
        log.push(format!(
            "   ✨ Special: {skill} | Strategy: {}",
            c.strategy_shout()
        ));
    }
    log.push(format!("🔴 {}", ch.name));
    log.push(format!(
        "   ATK:{} DEF:{} SPD:{} HP:{}",
        ch.attack, ch.defense, ch.speed, ch.hp
    ));
    if let Some(skill) = &ch.special_skill {
        log.push(format!("   ✨ Special: {skill}"));
    }
    log.push(sep.as_str());
    log.push(format!(
        "\n⚡ {} seizes the first strike!\n",
        corner.name(report.initiative.first)
    ));

    for round in &report.rounds {
        let lore = ROUND_LORE[(round.number as usize - 1) % ROUND_LORE.len()];
        log.push(format!("🔸 Round {} — {lore}", round.number));
        for turn in &round.turns {
            log.push(compact_turn(corner, turn));
        }
        log.blank();
    }

    log.push(sep.as_str());
    if report.challenger_won() {
        log.push(format!("🏆 VICTORY! {} HAS DETHRONED THE CHAMPION!", c.name));
        log.push(format!(
            "📜 LORE: The crowd erupts. {} raises their claw to the sky.",
            c.name
        ));
        log.push("   The bloodline of CLAWD flows through the victor. A new legend is written.");
        log.push(format!("   Title Earned: 👑 \"{}\"", title_text(VICTORY_TITLE)));
    } else {
        log.push("💀 DEFEAT. The Champion stands unbroken.");
        log.push(format!(
            "📜 LORE: {} falls, but is not forgotten. Every scar is data.",
            c.name
        ));
        log.push("   Every loss, a molt. Rise again, CLAWD holder. The arena awaits your return.");
        log.push(format!("   Title Earned: 🩸 \"{}\"", title_text(DEFEAT_TITLE)));
    }
    log.push(final_hp_line(corner, report));
    log.push(sep.as_str());
    log.push("⚔️  Clawsseum × Virtuals Protocol ACP — VIP Battle");
    log.finish()
}

/// Title without its leading emoji
fn title_text(title: &str) -> &str {
    title.split_once(' ').map_or(title, |(_, text)| text)
}
