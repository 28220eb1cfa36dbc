//! Arena options and configuration
//!
//! Champion tuning and the economic knobs of the offerings. Loaded from an
//! rc-style file:
//!
//! ```text
//! # clawsseumrc
//! OPTIONS=champion_name:Iron Claw,champion_attack:80
//! OPTIONS=min_wager:5000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    CHAMPION_ATTACK, CHAMPION_DEFENSE, CHAMPION_HP, CHAMPION_NAME, CHAMPION_SKILL,
    CHAMPION_SPEED, CLAWD_TOKEN_ADDRESS, CLAWSSEUM_WALLET, MIN_WAGER, VIP_CHAMPION_HP,
    VIP_THRESHOLD,
};
use crate::fighter::Fighter;

/// Configuration errors
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

/// Tunable arena settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaOptions {
    // Champion
    pub champion_name: String,
    pub champion_attack: i32,
    pub champion_defense: i32,
    pub champion_speed: i32,
    pub champion_hp: i32,
    pub vip_champion_hp: i32,
    pub champion_skill: Option<String>,

    // Economy
    pub vip_threshold: u64,
    pub min_wager: u64,
    pub token_address: String,
    pub treasury_wallet: String,
}

impl Default for ArenaOptions {
    fn default() -> Self {
        Self {
            champion_name: CHAMPION_NAME.to_string(),
            champion_attack: CHAMPION_ATTACK,
            champion_defense: CHAMPION_DEFENSE,
            champion_speed: CHAMPION_SPEED,
            champion_hp: CHAMPION_HP,
            vip_champion_hp: VIP_CHAMPION_HP,
            champion_skill: Some(CHAMPION_SKILL.to_string()),

            vip_threshold: VIP_THRESHOLD,
            min_wager: MIN_WAGER,
            token_address: CLAWD_TOKEN_ADDRESS.to_string(),
            treasury_wallet: CLAWSSEUM_WALLET.to_string(),
        }
    }
}

impl ArenaOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    let opt = opt.trim();
                    if !opt.is_empty() {
                        options.parse_option(opt)?;
                    }
                }
            }
        }

        Ok(options)
    }

    /// Parse a single `key:value` (or `key=value`) option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        let (key, value) = opt
            .split_once(':')
            .or_else(|| opt.split_once('='))
            .map(|(k, v)| (k.trim(), v.trim()))
            .ok_or_else(|| OptionsError::MissingValue(opt.to_string()))?;

        if value.is_empty() {
            return Err(OptionsError::MissingValue(key.to_string()));
        }

        match key {
            "champion_name" => self.champion_name = value.to_string(),
            "champion_attack" => self.champion_attack = parse_stat(key, value)?,
            "champion_defense" => self.champion_defense = parse_stat(key, value)?,
            "champion_speed" => self.champion_speed = parse_stat(key, value)?,
            "champion_hp" => self.champion_hp = parse_positive(key, value)?,
            "vip_champion_hp" => self.vip_champion_hp = parse_positive(key, value)?,
            "champion_skill" => {
                self.champion_skill = match value {
                    "none" => None,
                    skill => Some(skill.to_string()),
                }
            }
            "vip_threshold" => self.vip_threshold = parse_amount(key, value)?,
            "min_wager" => self.min_wager = parse_amount(key, value)?,
            "token_address" => self.token_address = parse_address(key, value)?,
            "treasury_wallet" => self.treasury_wallet = parse_address(key, value)?,
            _ => return Err(OptionsError::UnknownOption(key.to_string())),
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string())?;
        Ok(())
    }

    /// Render the options back into config file form
    pub fn to_config_string(&self) -> String {
        let skill = self.champion_skill.as_deref().unwrap_or("none");
        let mut out = String::from("# Clawsseum arena options\n");
        out.push_str(&format!(
            "OPTIONS=champion_name:{},champion_attack:{},champion_defense:{},champion_speed:{}\n",
            self.champion_name, self.champion_attack, self.champion_defense, self.champion_speed
        ));
        out.push_str(&format!(
            "OPTIONS=champion_hp:{},vip_champion_hp:{},champion_skill:{}\n",
            self.champion_hp, self.vip_champion_hp, skill
        ));
        out.push_str(&format!(
            "OPTIONS=vip_threshold:{},min_wager:{}\n",
            self.vip_threshold, self.min_wager
        ));
        out.push_str(&format!(
            "OPTIONS=token_address:{},treasury_wallet:{}\n",
            self.token_address, self.treasury_wallet
        ));
        out
    }

    /// The champion as fought in the standard and wager arenas
    pub fn champion(&self) -> Fighter {
        self.champion_with_hp(self.champion_hp)
    }

    /// The tougher VIP champion
    pub fn vip_champion(&self) -> Fighter {
        self.champion_with_hp(self.vip_champion_hp)
    }

    fn champion_with_hp(&self, hp: i32) -> Fighter {
        Fighter::new(
            self.champion_name.clone(),
            self.champion_attack,
            self.champion_defense,
            self.champion_speed,
        )
        .with_hp(hp)
        .with_special(self.champion_skill.clone())
    }
}

fn parse_stat(key: &str, value: &str) -> Result<i32, OptionsError> {
    value
        .parse::<i32>()
        .ok()
        .filter(|v| (1..=100).contains(v))
        .ok_or_else(|| OptionsError::InvalidValue(key.to_string(), value.to_string()))
}

fn parse_positive(key: &str, value: &str) -> Result<i32, OptionsError> {
    value
        .parse::<i32>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| OptionsError::InvalidValue(key.to_string(), value.to_string()))
}

fn parse_amount(key: &str, value: &str) -> Result<u64, OptionsError> {
    value
        .replace('_', "")
        .parse::<u64>()
        .map_err(|_| OptionsError::InvalidValue(key.to_string(), value.to_string()))
}

fn parse_address(key: &str, value: &str) -> Result<String, OptionsError> {
    if value.starts_with("0x") {
        Ok(value.to_string())
    } else {
        Err(OptionsError::InvalidValue(key.to_string(), value.to_string()))
    }
}
