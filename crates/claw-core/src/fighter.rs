//! Fighter preparation
//!
//! Builds the two combatants for a battle. All stat modifiers run here, before
//! the first initiative roll; the engine never changes a fighter afterwards.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::consts::{
    BASE_HP, STAT_MAX, STAT_MIN, STRATEGY_BOOST, STRATEGY_PENALTY, VIP_BONUS_CAP,
    VIP_BONUS_PER_STEP, VIP_BONUS_STEP,
};
use crate::format::round_half_up;

/// Fighting strategy declared by the challenger
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// +20% attack, -15% defense
    Aggressive,
    /// +20% defense, -15% attack
    Defensive,
    /// No modifier
    #[default]
    Balanced,
}

impl Strategy {
    /// Parse a strategy label, falling back to `Balanced` for anything unknown.
    ///
    /// Only the exact lowercase labels count; `"Aggressive"` fights balanced.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            None => Strategy::Balanced,
            Some(s) => Strategy::from_str(s).unwrap_or_else(|_| {
                log::warn!("unknown strategy {s:?}, fighting balanced");
                Strategy::Balanced
            }),
        }
    }
}

/// Clamp a stat into the legal range
#[inline]
pub fn clamp_stat(value: i32) -> i32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

/// Scale a stat by `factor`, rounding half up and clamping.
#[inline]
pub fn scale_stat(value: i32, factor: f64) -> i32 {
    clamp_stat(round_half_up(value as f64 * factor))
}

/// VIP stat bonus for a declared balance: +10% per 100M held, capped at +25%.
pub fn vip_bonus(balance: u64) -> f64 {
    let steps = (balance / VIP_BONUS_STEP) as f64;
    (steps * VIP_BONUS_PER_STEP).min(VIP_BONUS_CAP)
}

/// VIP bonus as a whole percentage (`0.2` -> `20`)
pub fn vip_bonus_percent(bonus: f64) -> i32 {
    round_half_up(bonus * 100.0)
}

/// A combatant for one battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    /// Baseline HP; current HP lives in the battle state
    pub hp: i32,
    pub special_skill: Option<String>,
    pub strategy: Strategy,
    /// Strategy as declared, which may not name a known strategy
    pub strategy_label: String,
}

impl Fighter {
    /// Create a fighter with clamped stats and the default HP.
    pub fn new(name: impl Into<String>, attack: i32, defense: i32, speed: i32) -> Self {
        Self {
            name: name.into(),
            attack: clamp_stat(attack),
            defense: clamp_stat(defense),
            speed: clamp_stat(speed),
            hp: BASE_HP,
            special_skill: None,
            strategy: Strategy::Balanced,
            strategy_label: Strategy::Balanced.to_string(),
        }
    }

    /// Set baseline HP; zero or negative falls back to the default.
    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = if hp > 0 { hp } else { BASE_HP };
        self
    }

    /// Set the special skill; an empty label means no skill.
    pub fn with_special(mut self, skill: Option<impl Into<String>>) -> Self {
        self.special_skill = skill.map(Into::into).filter(|s: &String| !s.is_empty());
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy_label = strategy.to_string();
        self.strategy = strategy;
        self
    }

    /// Set the strategy together with the label it was declared under.
    pub fn with_declared_strategy(mut self, strategy: Strategy, label: impl Into<String>) -> Self {
        self.strategy = strategy;
        self.strategy_label = label.into();
        self
    }

    /// Upper-case declared strategy, as shown in battle logs
    pub fn strategy_shout(&self) -> String {
        self.strategy_label.to_uppercase()
    }

    pub fn has_special(&self) -> bool {
        self.special_skill.is_some()
    }

    /// Apply the strategy modifier to attack and defense.
    pub fn apply_strategy(&mut self) {
        match self.strategy {
            Strategy::Aggressive => {
                self.attack = scale_stat(self.attack, STRATEGY_BOOST);
                self.defense = scale_stat(self.defense, STRATEGY_PENALTY);
            }
            Strategy::Defensive => {
                self.defense = scale_stat(self.defense, STRATEGY_BOOST);
                self.attack = scale_stat(self.attack, STRATEGY_PENALTY);
            }
            Strategy::Balanced => {}
        }
    }

    /// Apply the VIP balance bonus to attack and defense. Returns the bonus used.
    ///
    /// Must run before `apply_strategy`.
    pub fn apply_vip_bonus(&mut self, balance: u64) -> f64 {
        let bonus = vip_bonus(balance);
        self.attack = scale_stat(self.attack, 1.0 + bonus);
        self.defense = scale_stat(self.defense, 1.0 + bonus);
        bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_aggressive_modifier() {
        let mut f = Fighter::new("Crab", 50, 50, 50).with_strategy(Strategy::Aggressive);
        f.apply_strategy();
        assert_eq!(f.attack, 60);
        assert_eq!(f.defense, 43);
    }

    #[test]
    fn test_defensive_modifier() {
        let mut f = Fighter::new("Crab", 50, 50, 50).with_strategy(Strategy::Defensive);
        f.apply_strategy();
        assert_eq!(f.attack, 43);
        assert_eq!(f.defense, 60);
    }

    #[test]
    fn test_balanced_is_noop() {
        let mut f = Fighter::new("Crab", 37, 81, 50);
        f.apply_strategy();
        assert_eq!((f.attack, f.defense), (37, 81));
    }

    #[test]
    fn test_modifier_clamps() {
        let mut f = Fighter::new("Crab", 95, 1, 50).with_strategy(Strategy::Aggressive);
        f.apply_strategy();
        assert_eq!(f.attack, 100);
        assert_eq!(f.defense, 1);
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(Strategy::from_label(Some("aggressive")), Strategy::Aggressive);
        assert_eq!(Strategy::from_label(Some("defensive")), Strategy::Defensive);
        assert_eq!(Strategy::from_label(Some("berserk")), Strategy::Balanced);
        assert_eq!(Strategy::from_label(None), Strategy::Balanced);
        for s in Strategy::iter() {
            assert_eq!(Strategy::from_label(Some(&s.to_string())), s);
        }
    }

    #[test]
    fn test_strategy_labels_are_exact() {
        assert_eq!(Strategy::from_label(Some("DEFENSIVE")), Strategy::Balanced);
        assert_eq!(Strategy::from_label(Some("Aggressive")), Strategy::Balanced);
        assert_eq!(Strategy::from_label(Some(" aggressive")), Strategy::Balanced);

        // an unrecognized label leaves the stats alone but is still shown
        let mut f = Fighter::new("Crab", 50, 50, 50)
            .with_declared_strategy(Strategy::from_label(Some("Aggressive")), "Aggressive");
        f.apply_strategy();
        assert_eq!((f.attack, f.defense), (50, 50));
        assert_eq!(f.strategy_shout(), "AGGRESSIVE");

        let f = Fighter::new("Crab", 50, 50, 50).with_strategy(Strategy::Defensive);
        assert_eq!(f.strategy_shout(), "DEFENSIVE");
    }

    #[test]
    fn test_vip_bonus_steps() {
        assert_eq!(vip_bonus(99_999_999), 0.0);
        assert_eq!(vip_bonus(100_000_000), 0.1);
        assert_eq!(vip_bonus(250_000_000), 0.2);
        assert_eq!(vip_bonus(300_000_000), 0.25);
        assert_eq!(vip_bonus(u64::MAX), 0.25);
        assert_eq!(vip_bonus_percent(vip_bonus(250_000_000)), 20);
    }

    #[test]
    fn test_vip_bonus_before_strategy() {
        let mut f = Fighter::new("Crab", 50, 90, 50).with_strategy(Strategy::Aggressive);
        let bonus = f.apply_vip_bonus(250_000_000);
        assert_eq!(bonus, 0.2);
        assert_eq!(f.attack, 60);
        assert_eq!(f.defense, 100);
        f.apply_strategy();
        assert_eq!(f.attack, 72);
        assert_eq!(f.defense, 85);
    }

    #[test]
    fn test_hp_and_special_defaults() {
        let f = Fighter::new("Crab", 10, 10, 10).with_hp(0).with_special(Some(""));
        assert_eq!(f.hp, BASE_HP);
        assert!(!f.has_special());
        assert!(f.clone().with_special(Some("  ")).has_special());
        let f = f.with_hp(250).with_special(Some("Pinch"));
        assert_eq!(f.hp, 250);
        assert_eq!(f.special_skill.as_deref(), Some("Pinch"));
    }
}
