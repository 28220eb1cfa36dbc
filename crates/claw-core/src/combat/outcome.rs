//! Winner determination

use serde::{Deserialize, Serialize};

use super::Side;

/// How the battle was decided
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// One side was reduced to 0 HP
    Knockout,
    /// Round cap reached; decided on remaining HP fraction
    TimeLimit {
        challenger_fraction: f64,
        champion_fraction: f64,
    },
}

/// Pick the winner from final and baseline HP.
///
/// A knockout decides outright. Otherwise the higher remaining HP fraction
/// wins and an exact tie goes to the challenger. Both sides at 0 cannot happen
/// under the turn rules; if it did, the fraction rule hands it to the challenger.
pub fn decide_winner(
    challenger_hp: i32,
    challenger_max: i32,
    champion_hp: i32,
    champion_max: i32,
) -> (Side, Decision) {
    match (challenger_hp > 0, champion_hp > 0) {
        (true, false) => (Side::Challenger, Decision::Knockout),
        (false, true) => (Side::Champion, Decision::Knockout),
        _ => {
            let challenger_fraction = fraction(challenger_hp, challenger_max);
            let champion_fraction = fraction(champion_hp, champion_max);
            let winner = if challenger_fraction >= champion_fraction {
                Side::Challenger
            } else {
                Side::Champion
            };
            (
                winner,
                Decision::TimeLimit {
                    challenger_fraction,
                    champion_fraction,
                },
            )
        }
    }
}

fn fraction(hp: i32, max: i32) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    hp.max(0) as f64 / max as f64
}
