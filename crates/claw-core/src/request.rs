//! Incoming job requests and their validation
//!
//! Requests arrive as loosely typed JSON; every field is optional here and
//! validation turns a request into a typed entry the offerings can trust.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{HP_MAX, HP_MIN, STAT_MAX, STAT_MIN};
use crate::fighter::{Fighter, Strategy};
use crate::format::thousands;

/// Raw battle request as sent by a buyer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleRequest {
    #[serde(default)]
    pub fighter_name: Option<String>,
    #[serde(default)]
    pub attack: Option<i64>,
    #[serde(default)]
    pub defense: Option<i64>,
    #[serde(default)]
    pub speed: Option<i64>,
    #[serde(default)]
    pub hp: Option<i64>,
    #[serde(default)]
    pub special_skill: Option<String>,
    #[serde(default)]
    pub strategy: Option<String>,
    /// VIP only. Any JSON number; fractions are floored.
    #[serde(default)]
    pub clawd_balance: Option<f64>,
    /// VIP only
    #[serde(default)]
    pub wallet_address: Option<String>,
    /// Wager only. Any JSON number; validation requires a whole amount.
    #[serde(default)]
    pub wager_amount: Option<f64>,
    /// Wager only: where winnings go
    #[serde(default)]
    pub buyer_wallet: Option<String>,
}

impl BattleRequest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Which offering is validating; each words stat errors its own way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Arena,
    Vip,
    Wager,
}

impl Venue {
    fn stat_error(self, stat: &'static str, value: Option<i64>) -> ValidationError {
        match self {
            Venue::Arena => ValidationError::StatOutOfRange { stat, value },
            Venue::Vip => ValidationError::VipStatOutOfRange { stat },
            Venue::Wager => ValidationError::WagerStatOutOfRange { stat, value },
        }
    }
}

/// Reasons a request is rejected before any battle runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("fighter_name must be a non-empty string.")]
    MissingName,

    #[error("Stat \"{}\" must be a number between {} and {}. Got: {}", .stat, STAT_MIN, STAT_MAX, show(.value))]
    StatOutOfRange { stat: &'static str, value: Option<i64> },

    #[error("\"{}\" must be between {} and {}.", .stat, STAT_MIN, STAT_MAX)]
    VipStatOutOfRange { stat: &'static str },

    #[error("\"{}\" must be between {} and {}. Got: {}", .stat, STAT_MIN, STAT_MAX, show(.value))]
    WagerStatOutOfRange { stat: &'static str, value: Option<i64> },

    #[error("\"hp\" must be a number between {} and {}. Got: {}", HP_MIN, HP_MAX, .value)]
    HpOutOfRange { value: i64 },

    #[error(
        "👑 VIP Access Denied. You need {} CLAWD to enter. You declared: {} CLAWD. Buy more CLAWD at app.virtuals.io!",
        grouped(.required),
        grouped(.declared)
    )]
    VipBalanceTooLow { required: u64, declared: u64 },

    #[error("wallet_address must be a valid Base wallet address (0x...).")]
    InvalidWallet,

    #[error("Minimum wager is {} CLAWD. Got: {}", grouped(.minimum), show(.got))]
    WagerTooLow { minimum: u64, got: Option<f64> },

    #[error("wager_amount must be a whole number of CLAWD. Got: {}", .got)]
    FractionalWager { got: f64 },
}

fn grouped(n: &u64) -> String {
    thousands(*n)
}

fn show<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "undefined".to_string(), ToString::to_string)
}

/// A validated challenger, ready to become a `Fighter`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengerEntry {
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub hp: Option<i32>,
    pub special_skill: Option<String>,
    pub strategy: Strategy,
    /// Strategy as declared, shown in battle logs
    pub strategy_label: String,
}

impl ChallengerEntry {
    /// Validate the fields every offering needs: name and the three core stats.
    pub fn from_request(req: &BattleRequest, venue: Venue) -> Result<Self, ValidationError> {
        let name = req
            .fighter_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::MissingName)?;

        let attack = checked_stat("attack", req.attack, venue)?;
        let defense = checked_stat("defense", req.defense, venue)?;
        let speed = checked_stat("speed", req.speed, venue)?;

        // Zero or negative HP means "use the default", as does an HP that
        // does not fit the engine's integer type.
        let hp = req
            .hp
            .filter(|&hp| hp > 0)
            .and_then(|hp| i32::try_from(hp).ok());

        Ok(Self {
            name: name.to_string(),
            attack,
            defense,
            speed,
            hp,
            special_skill: req.special_skill.clone().filter(|s| !s.is_empty()),
            strategy: Strategy::from_label(req.strategy.as_deref()),
            strategy_label: req
                .strategy
                .clone()
                .unwrap_or_else(|| Strategy::Balanced.to_string()),
        })
    }

    /// Build the fighter, without any stat modifiers applied yet.
    pub fn fighter(&self) -> Fighter {
        let mut fighter = Fighter::new(self.name.clone(), self.attack, self.defense, self.speed)
            .with_special(self.special_skill.clone())
            .with_declared_strategy(self.strategy, self.strategy_label.clone());
        if let Some(hp) = self.hp {
            fighter = fighter.with_hp(hp);
        }
        fighter
    }
}

fn checked_stat(
    stat: &'static str,
    value: Option<i64>,
    venue: Venue,
) -> Result<i32, ValidationError> {
    match value {
        Some(v) if (STAT_MIN as i64..=STAT_MAX as i64).contains(&v) => Ok(v as i32),
        _ => Err(venue.stat_error(stat, value)),
    }
}

/// Whole CLAWD in a declared amount: fractions floored, negatives as zero.
pub fn whole_clawd(amount: f64) -> u64 {
    amount.max(0.0).floor() as u64
}

/// Arena-only rule: an explicit HP must lie in `[1, 500]`.
pub fn check_hp(req: &BattleRequest) -> Result<(), ValidationError> {
    match req.hp {
        Some(v) if !(HP_MIN as i64..=HP_MAX as i64).contains(&v) => {
            Err(ValidationError::HpOutOfRange { value: v })
        }
        _ => Ok(()),
    }
}

/// Wallet addresses must at least look like an EVM address.
pub fn check_wallet(address: Option<&str>) -> Result<String, ValidationError> {
    match address {
        Some(a) if a.starts_with("0x") => Ok(a.to_string()),
        _ => Err(ValidationError::InvalidWallet),
    }
}
