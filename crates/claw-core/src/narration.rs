//! Battle log building blocks
//!
//! The log is display-only. It is rendered from a `BattleReport` after the
//! battle is decided, so nothing here can influence the outcome.

use crate::combat::{BattleReport, Side, TurnRecord};
use crate::fighter::Fighter;

/// Append-only list of transcript lines
#[derive(Debug, Clone, Default)]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append an empty line
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join into the newline-separated transcript
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// A horizontal rule of `width` copies of `ch`
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

/// The two fighters of a battle, indexable by side
#[derive(Debug, Clone, Copy)]
pub struct Corner<'a> {
    pub challenger: &'a Fighter,
    pub champion: &'a Fighter,
}

impl<'a> Corner<'a> {
    pub fn new(challenger: &'a Fighter, champion: &'a Fighter) -> Self {
        Self {
            challenger,
            champion,
        }
    }

    pub fn fighter(&self, side: Side) -> &'a Fighter {
        match side {
            Side::Challenger => self.challenger,
            Side::Champion => self.champion,
        }
    }

    pub fn name(&self, side: Side) -> &'a str {
        &self.fighter(side).name
    }

    pub fn winner_name(&self, report: &BattleReport) -> &'a str {
        self.name(report.winner)
    }
}

/// ` 💥 SPECIAL: <skill>!` when the special fired, empty otherwise
pub fn special_suffix(turn: &TurnRecord) -> String {
    turn.special
        .as_deref()
        .map(|s| format!(" 💥 SPECIAL: {s}!"))
        .unwrap_or_default()
}

/// Compact turn line: `🔵 A → 12 dmg | B HP: 88`
pub fn compact_turn(corner: &Corner<'_>, turn: &TurnRecord) -> String {
    let defender = turn.attacker.opponent();
    format!(
        "   {} {} → {} dmg{} | {} HP: {}",
        turn.attacker.badge(),
        corner.name(turn.attacker),
        turn.damage,
        special_suffix(turn),
        corner.name(defender),
        turn.defender_hp
    )
}

/// `📊 Final HP — A: x | B: y`
pub fn final_hp_line(corner: &Corner<'_>, report: &BattleReport) -> String {
    format!(
        "📊 Final HP — {}: {} | {}: {}",
        corner.challenger.name, report.challenger_hp, corner.champion.name, report.champion_hp
    )
}
