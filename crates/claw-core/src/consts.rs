//! Arena constants
//!
//! Engine constants are fixed; the economic ones are the defaults for `ArenaOptions`.

/// Stat bounds for attack, defense and speed
pub const STAT_MIN: i32 = 1;
pub const STAT_MAX: i32 = 100;

/// Challenger HP when the request does not give one
pub const BASE_HP: i32 = 100;

/// Allowed challenger HP range on the arena offering
pub const HP_MIN: i32 = 1;
pub const HP_MAX: i32 = 500;

/// Hard cap on rounds per battle
pub const MAX_ROUNDS: u32 = 10;

/// Width of the random initiative bonus added to speed
pub const INITIATIVE_SPREAD: f64 = 10.0;

/// Share of defense subtracted from attack
pub const DEFENSE_FACTOR: f64 = 0.4;

/// Maximum relative damage variance (plus or minus)
pub const DAMAGE_VARIANCE: f64 = 0.2;

/// Special skill fires at or below this HP fraction
pub const SPECIAL_HP_THRESHOLD: f64 = 0.3;
pub const SPECIAL_MULTIPLIER: f64 = 2.2;

/// Strategy modifiers
pub const STRATEGY_BOOST: f64 = 1.2;
pub const STRATEGY_PENALTY: f64 = 0.85;

/// VIP bonus: one step per this many tokens held
pub const VIP_BONUS_STEP: u64 = 100_000_000;
pub const VIP_BONUS_PER_STEP: f64 = 0.10;
pub const VIP_BONUS_CAP: f64 = 0.25;

/// Minimum balance to enter the VIP arena
pub const VIP_THRESHOLD: u64 = 100_000_000;

/// Minimum wager
pub const MIN_WAGER: u64 = 1_000;

/// Wager payout is `wager * WIN_MULTIPLIER_TENTHS / 10`, i.e. 1.9x
pub const WIN_MULTIPLIER_TENTHS: u64 = 19;

/// CLAWD token contract on Base
pub const CLAWD_TOKEN_ADDRESS: &str = "0xA5c57BC3e7Fa624Ee28211e4E542823D9e2A355E";

/// Arena treasury wallet
pub const CLAWSSEUM_WALLET: &str = "0x8725f5479322e952f63b9611FED6ef36B61E4e02";

/// Champion defaults
pub const CHAMPION_NAME: &str = "Clawsseum Champion";
pub const CHAMPION_ATTACK: i32 = 75;
pub const CHAMPION_DEFENSE: i32 = 70;
pub const CHAMPION_SPEED: i32 = 80;
pub const CHAMPION_HP: i32 = 100;
pub const VIP_CHAMPION_HP: i32 = 120;
pub const CHAMPION_SKILL: &str = "Claw Storm";
