//! The round loop

use serde::{Deserialize, Serialize};

use super::Side;
use super::damage::{roll_damage, special_damage, special_triggers};
use super::initiative::{Initiative, roll_initiative};
use super::outcome::{Decision, decide_winner};
use crate::consts::MAX_ROUNDS;
use crate::fighter::Fighter;
use crate::rng::RandomSource;

/// One attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub attacker: Side,
    pub damage: i32,
    /// Name of the special skill if it fired on this hit
    pub special: Option<String>,
    /// Defender HP after the hit
    pub defender_hp: i32,
}

/// All turns taken in one round (one or two)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub number: u32,
    pub turns: Vec<TurnRecord>,
}

/// Mutable state of one battle in progress
#[derive(Debug, Clone)]
pub struct BattleState {
    hp: [i32; 2],
    max_hp: [i32; 2],
    special_used: [bool; 2],
    round: u32,
    rounds: Vec<RoundRecord>,
}

impl BattleState {
    pub fn new(challenger: &Fighter, champion: &Fighter) -> Self {
        Self {
            hp: [challenger.hp, champion.hp],
            max_hp: [challenger.hp, champion.hp],
            special_used: [false; 2],
            round: 1,
            rounds: Vec::new(),
        }
    }

    /// Current HP of a side
    pub fn hp(&self, side: Side) -> i32 {
        self.hp[side.index()]
    }

    pub fn max_hp(&self, side: Side) -> i32 {
        self.max_hp[side.index()]
    }

    pub fn special_used(&self, side: Side) -> bool {
        self.special_used[side.index()]
    }

    /// Round about to be played (starts at 1)
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// True once either side is at 0 HP
    pub fn someone_down(&self) -> bool {
        self.hp.iter().any(|&hp| hp <= 0)
    }

    pub fn is_over(&self) -> bool {
        self.someone_down() || self.round > MAX_ROUNDS
    }

    /// Play one attack by `attacker` and apply it to the opponent.
    pub fn take_turn<R: RandomSource + ?Sized>(
        &mut self,
        attacker: Side,
        fighters: [&Fighter; 2],
        rng: &mut R,
    ) -> TurnRecord {
        let defender = attacker.opponent();
        let att = fighters[attacker.index()];
        let def = fighters[defender.index()];

        let mut damage = roll_damage(att.attack, def.defense, rng);
        let mut special = None;
        if special_triggers(att, self.hp(attacker), self.special_used(attacker)) {
            damage = special_damage(damage);
            self.special_used[attacker.index()] = true;
            special = att.special_skill.clone();
            log::debug!(
                "{} unleashes {} for {damage} in round {}",
                att.name,
                special.as_deref().unwrap_or_default(),
                self.round
            );
        }

        let slot = &mut self.hp[defender.index()];
        *slot = (*slot - damage).max(0);
        log::trace!("{} hits {} for {damage}, {} left", att.name, def.name, *slot);

        TurnRecord {
            attacker,
            damage,
            special,
            defender_hp: *slot,
        }
    }

    /// Play one round in the given order. A side at 0 HP ends the round early.
    pub fn play_round<R: RandomSource + ?Sized>(
        &mut self,
        order: [Side; 2],
        fighters: [&Fighter; 2],
        rng: &mut R,
    ) -> &RoundRecord {
        let mut turns = Vec::with_capacity(2);
        for side in order {
            if self.someone_down() {
                break;
            }
            turns.push(self.take_turn(side, fighters, rng));
        }
        self.rounds.push(RoundRecord {
            number: self.round,
            turns,
        });
        self.round += 1;
        &self.rounds[self.rounds.len() - 1]
    }

    /// Rounds actually played
    pub fn rounds_fought(&self) -> u32 {
        (self.round - 1).min(MAX_ROUNDS)
    }
}

/// Mechanical result of a battle, before any offering-specific wrapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub initiative: Initiative,
    pub rounds: Vec<RoundRecord>,
    pub challenger_hp: i32,
    pub champion_hp: i32,
    pub challenger_max_hp: i32,
    pub champion_max_hp: i32,
    pub rounds_fought: u32,
    pub winner: Side,
    pub decision: Decision,
}

impl BattleReport {
    pub fn challenger_won(&self) -> bool {
        self.winner == Side::Challenger
    }

    pub fn final_hp(&self, side: Side) -> i32 {
        match side {
            Side::Challenger => self.challenger_hp,
            Side::Champion => self.champion_hp,
        }
    }

    /// Every turn of the battle in order
    pub fn turns(&self) -> impl Iterator<Item = &TurnRecord> {
        self.rounds.iter().flat_map(|r| r.turns.iter())
    }

    /// How many times `side` fired its special (0 or 1)
    pub fn specials_fired(&self, side: Side) -> usize {
        self.turns()
            .filter(|t| t.attacker == side && t.special.is_some())
            .count()
    }
}

/// Run a full battle between an already prepared challenger and champion.
pub fn resolve_battle<R: RandomSource + ?Sized>(
    challenger: &Fighter,
    champion: &Fighter,
    rng: &mut R,
) -> BattleReport {
    let initiative = roll_initiative(challenger, champion, rng);
    let order = initiative.order();
    let fighters = [challenger, champion];

    let mut state = BattleState::new(challenger, champion);
    while !state.is_over() {
        state.play_round(order, fighters, rng);
    }

    let challenger_hp = state.hp(Side::Challenger);
    let champion_hp = state.hp(Side::Champion);
    let (winner, decision) = decide_winner(
        challenger_hp,
        challenger.hp,
        champion_hp,
        champion.hp,
    );
    log::debug!(
        "{} vs {}: {winner} wins after {} rounds ({challenger_hp} / {champion_hp})",
        challenger.name,
        champion.name,
        state.rounds_fought()
    );

    BattleReport {
        initiative,
        rounds_fought: state.rounds_fought(),
        rounds: state.rounds,
        challenger_hp,
        champion_hp,
        challenger_max_hp: challenger.hp,
        champion_max_hp: champion.hp,
        winner,
        decision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;

    fn tank(name: &str) -> Fighter {
        Fighter::new(name, 1, 100, 50).with_hp(500)
    }

    #[test]
    fn test_round_cap() {
        let a = tank("A");
        let b = tank("B");
        let mut rng = SequenceRng::constant(0.5);
        let report = resolve_battle(&a, &b, &mut rng);
        assert_eq!(report.rounds_fought, MAX_ROUNDS);
        assert_eq!(report.rounds.len(), MAX_ROUNDS as usize);
        assert_eq!(report.challenger_hp, 490);
        assert_eq!(report.champion_hp, 490);
        assert_eq!(report.winner, Side::Challenger);
        assert!(matches!(report.decision, Decision::TimeLimit { .. }));
        // 2 initiative + 2 per round
        assert_eq!(rng.draws(), 2 + 2 * MAX_ROUNDS as usize);
    }

    #[test]
    fn test_knockout_skips_remaining_turn() {
        let hitter = Fighter::new("Hitter", 100, 100, 100).with_hp(100);
        let victim = Fighter::new("Victim", 1, 1, 1).with_hp(10);
        let mut rng = SequenceRng::constant(0.5);
        let report = resolve_battle(&hitter, &victim, &mut rng);
        assert_eq!(report.rounds_fought, 1);
        assert_eq!(report.rounds[0].turns.len(), 1);
        assert_eq!(report.champion_hp, 0);
        assert_eq!(report.challenger_hp, 100);
        assert_eq!(report.winner, Side::Challenger);
        assert_eq!(report.decision, Decision::Knockout);
    }

    #[test]
    fn test_state_turn_floor() {
        let a = Fighter::new("A", 100, 1, 50);
        let b = Fighter::new("B", 1, 1, 50).with_hp(5);
        let mut state = BattleState::new(&a, &b);
        let mut rng = SequenceRng::constant(0.5);
        let turn = state.take_turn(Side::Challenger, [&a, &b], &mut rng);
        assert_eq!(turn.defender_hp, 0);
        assert_eq!(state.hp(Side::Champion), 0);
        assert!(state.someone_down());
        assert!(state.is_over());
    }

    #[test]
    fn test_special_fires_once() {
        // challenger starts low, so the special fires on its first hit only
        let a = Fighter::new("A", 10, 100, 50)
            .with_hp(100)
            .with_special(Some("Pinch"));
        let b = Fighter::new("B", 1, 1, 50).with_hp(500);
        let mut state = BattleState::new(&a, &b);
        state.hp[0] = 20;
        let mut rng = SequenceRng::constant(0.5);
        let first = state.take_turn(Side::Challenger, [&a, &b], &mut rng);
        let second = state.take_turn(Side::Challenger, [&a, &b], &mut rng);
        assert_eq!(first.special.as_deref(), Some("Pinch"));
        assert_eq!(first.damage, 22);
        assert_eq!(second.special, None);
        assert_eq!(second.damage, 10);
        assert!(state.special_used(Side::Challenger));
        assert!(!state.special_used(Side::Champion));
    }
}
