//! Standard arena battle: free entry, standard champion.

use super::{BattleResult, JobResult, Offering};
use crate::combat::{BattleReport, Decision, Side, resolve_battle};
use crate::fighter::Fighter;
use crate::format::round_half_up;
use crate::narration::{BattleLog, Corner, final_hp_line, rule, special_suffix};
use crate::options::ArenaOptions;
use crate::request::{BattleRequest, ChallengerEntry, ValidationError, Venue, check_hp};
use crate::rng::RandomSource;

#[derive(Debug, Clone)]
pub struct ArenaBattle {
    champion: Fighter,
}

impl ArenaBattle {
    pub fn new(options: &ArenaOptions) -> Self {
        Self {
            champion: options.champion(),
        }
    }

    pub fn champion(&self) -> &Fighter {
        &self.champion
    }
}

impl Default for ArenaBattle {
    fn default() -> Self {
        Self::new(&ArenaOptions::default())
    }
}

impl Offering for ArenaBattle {
    type Entry = ChallengerEntry;
    type Deliverable = BattleResult;

    fn name(&self) -> &'static str {
        "arena_battle"
    }

    fn validate(&self, request: &BattleRequest) -> Result<ChallengerEntry, ValidationError> {
        let entry = ChallengerEntry::from_request(request, Venue::Arena)?;
        check_hp(request)?;
        Ok(entry)
    }

    fn payment_message(&self, entry: &ChallengerEntry) -> String {
        format!(
            "⚔️ Battle accepted! {} vs {} — preparing the arena...",
            entry.name, self.champion.name
        )
    }

    fn execute<R: RandomSource + ?Sized>(
        &self,
        entry: &ChallengerEntry,
        rng: &mut R,
    ) -> JobResult<BattleResult> {
        let mut challenger = entry.fighter();
        challenger.apply_strategy();

        let report = resolve_battle(&challenger, &self.champion, rng);
        let corner = Corner::new(&challenger, &self.champion);
        let battle_log = narrate(&corner, &report);

        log::info!(
            "{}: {} vs {} won by {} in {} rounds",
            self.name(),
            challenger.name,
            self.champion.name,
            corner.winner_name(&report),
            report.rounds_fought
        );
        JobResult::new(BattleResult::new(&corner, &report, battle_log))
    }
}

fn narrate(corner: &Corner<'_>, report: &BattleReport) -> String {
    let c = corner.challenger;
    let ch = corner.champion;
    let separator = rule('─', 40);
    let mut log = BattleLog::new();

    log.push("🏟️  CLAWSSEUM ARENA BATTLE");
    log.push(separator.as_str());
    log.push(format!("🔵 Challenger: {}", c.name));
    log.push(format!(
        "   ATK: {} | DEF: {} | SPD: {} | HP: {}",
        c.attack, c.defense, c.speed, c.hp
    ));
    if let Some(skill) = &c.special_skill {
        log.push(format!("   Special: {skill}"));
    }
    log.push(format!("   Strategy: {}", c.strategy_shout()));
    log.blank();
    log.push(format!("🔴 Champion:   {}", ch.name));
    log.push(format!(
        "   ATK: {} | DEF: {} | SPD: {} | HP: {}",
        ch.attack, ch.defense, ch.speed, ch.hp
    ));
    if let Some(skill) = &ch.special_skill {
        log.push(format!("   Special: {skill}"));
    }
    log.push(separator.as_str());
    log.blank();

    let init = &report.initiative;
    log.push(format!(
        "🎲 Initiative roll: {} [{:.1}] vs {} [{:.1}]",
        c.name, init.challenger, ch.name, init.champion
    ));
    log.push(format!("⚡ {} strikes first!\n", corner.name(init.first)));

    for round in &report.rounds {
        log.push(format!("🔸 Round {}", round.number));
        for turn in &round.turns {
            let defender = corner.name(turn.attacker.opponent());
            log.push(format!(
                "   {} {} attacks {} for {} dmg{} → {} HP: {}",
                turn.attacker.badge(),
                corner.name(turn.attacker),
                defender,
                turn.damage,
                special_suffix(turn),
                defender,
                turn.defender_hp
            ));
        }
        log.blank();
    }

    log.push(separator.as_str());
    log.push(result_line(corner, report));
    log.push(separator.as_str());
    log.push(final_hp_line(corner, report));
    log.push(format!("📜 Rounds fought: {}", report.rounds_fought));
    log.blank();
    log.push("⚔️  Powered by Clawsseum × Virtuals Protocol ACP");
    log.finish()
}

fn result_line(corner: &Corner<'_>, report: &BattleReport) -> String {
    match (report.decision, report.winner) {
        (Decision::Knockout, Side::Challenger) => format!(
            "🏆 WINNER: {} — The challenger defeats the Clawsseum Champion!",
            corner.challenger.name
        ),
        (Decision::Knockout, Side::Champion) => format!(
            "🏆 WINNER: {} — The Champion defends the Clawsseum throne!",
            corner.champion.name
        ),
        (
            Decision::TimeLimit {
                challenger_fraction,
                champion_fraction,
            },
            winner,
        ) => {
            let (won, lost) = match winner {
                Side::Challenger => (challenger_fraction, champion_fraction),
                Side::Champion => (champion_fraction, challenger_fraction),
            };
            format!(
                "🏆 TIME LIMIT! {} wins on remaining HP% ({}% vs {}%)!",
                corner.name(winner),
                round_half_up(won * 100.0),
                round_half_up(lost * 100.0)
            )
        }
    }
}
