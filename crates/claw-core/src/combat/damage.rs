//! Damage formula and the special skill gate

use crate::consts::{DAMAGE_VARIANCE, DEFENSE_FACTOR, SPECIAL_HP_THRESHOLD, SPECIAL_MULTIPLIER};
use crate::fighter::Fighter;
use crate::format::round_half_up;
use crate::rng::RandomSource;

/// Damage before variance, never below 1
pub fn base_damage(attack: i32, defense: i32) -> f64 {
    (attack as f64 - defense as f64 * DEFENSE_FACTOR).max(1.0)
}

/// Roll damage for one hit: base plus up to 20% either way, at least 1.
///
/// Consumes exactly one draw from `rng`.
pub fn roll_damage<R: RandomSource + ?Sized>(attack: i32, defense: i32, rng: &mut R) -> i32 {
    let base = base_damage(attack, defense);
    let variance = base * DAMAGE_VARIANCE * rng.symmetric();
    round_half_up(base + variance).max(1)
}

/// Whether the attacker's special fires this turn.
///
/// Needs a skill, an unused special, and current HP at or below 30% of baseline.
pub fn special_triggers(attacker: &Fighter, current_hp: i32, already_used: bool) -> bool {
    if already_used || !attacker.has_special() || attacker.hp <= 0 {
        return false;
    }
    current_hp as f64 / attacker.hp as f64 <= SPECIAL_HP_THRESHOLD
}

/// Special skill damage
pub fn special_damage(damage: i32) -> i32 {
    round_half_up(damage as f64 * SPECIAL_MULTIPLIER).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{GameRng, SequenceRng};

    #[test]
    fn test_base_damage() {
        assert_eq!(base_damage(75, 50), 55.0);
        assert_eq!(base_damage(10, 100), 1.0);
        assert_eq!(base_damage(1, 1), 1.0);
    }

    #[test]
    fn test_variance_extremes() {
        let mut mid = SequenceRng::constant(0.5);
        assert_eq!(roll_damage(75, 50, &mut mid), 55);

        let mut low = SequenceRng::constant(0.0);
        assert_eq!(roll_damage(75, 50, &mut low), 44);

        let mut high = SequenceRng::constant(0.999_999);
        assert_eq!(roll_damage(75, 50, &mut high), 66);
    }

    #[test]
    fn test_damage_at_least_one() {
        let mut rng = GameRng::new(9);
        for _ in 0..500 {
            assert!(roll_damage(1, 100, &mut rng) >= 1);
        }
    }

    #[test]
    fn test_special_gate() {
        let f = Fighter::new("Crab", 50, 50, 50).with_special(Some("Pinch"));
        assert!(!special_triggers(&f, 31, false));
        assert!(special_triggers(&f, 30, false));
        assert!(special_triggers(&f, 1, false));
        assert!(!special_triggers(&f, 10, true));

        let plain = Fighter::new("Crab", 50, 50, 50);
        assert!(!special_triggers(&plain, 10, false));
    }

    #[test]
    fn test_special_damage() {
        assert_eq!(special_damage(10), 22);
        assert_eq!(special_damage(55), 121);
        assert_eq!(special_damage(1), 2);
    }
}
