//! Initiative: who strikes first for the whole battle.

use serde::{Deserialize, Serialize};

use super::Side;
use crate::consts::INITIATIVE_SPREAD;
use crate::fighter::Fighter;
use crate::rng::RandomSource;

/// Both initiative rolls and the resulting first striker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Initiative {
    pub challenger: f64,
    pub champion: f64,
    pub first: Side,
}

impl Initiative {
    /// Turn order for every round of the battle
    pub fn order(&self) -> [Side; 2] {
        [self.first, self.first.opponent()]
    }
}

/// Roll initiative once. Challenger draws first; ties go to the challenger.
pub fn roll_initiative<R: RandomSource + ?Sized>(
    challenger: &Fighter,
    champion: &Fighter,
    rng: &mut R,
) -> Initiative {
    let c = challenger.speed as f64 + rng.uniform(0.0, INITIATIVE_SPREAD);
    let ch = champion.speed as f64 + rng.uniform(0.0, INITIATIVE_SPREAD);
    let first = if c >= ch {
        Side::Challenger
    } else {
        Side::Champion
    };
    log::debug!("initiative {c:.1} vs {ch:.1}, {first} strikes first");
    Initiative {
        challenger: c,
        champion: ch,
        first,
    }
}
