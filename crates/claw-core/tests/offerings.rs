//! End-to-end runs of the three offerings with scripted randomness.

use claw_core::combat::{Decision, Side, decide_winner, resolve_battle};
use claw_core::{
    ArenaBattle, ArenaOptions, BattleRequest, Fighter, GameRng, Offering, SequenceRng,
    ValidationError, VipBattle, WagerBattle,
};

// ============================================================================
// Helpers
// ============================================================================

fn request_json(extra: &str) -> BattleRequest {
    let json = format!(
        r#"{{"fighter_name":"Sir Pinch","attack":100,"defense":100,"speed":100{extra}}}"#
    );
    BattleRequest::from_json(&json).expect("valid request json")
}

// ============================================================================
// Engine scenarios
// ============================================================================

#[test]
fn test_time_limit_tiebreak_on_fraction() {
    let (winner, decision) = decide_winner(40, 100, 30, 100);
    assert_eq!(winner, Side::Challenger);
    assert!(matches!(decision, Decision::TimeLimit { .. }));
}

#[test]
fn test_full_battle_to_round_cap() {
    // Both sides deal 1 per hit: fighters survive all ten rounds.
    let a = Fighter::new("Shell", 1, 100, 10).with_hp(300);
    let b = Fighter::new("Rock", 1, 100, 10).with_hp(200);
    let mut rng = SequenceRng::constant(0.5);
    let report = resolve_battle(&a, &b, &mut rng);

    assert_eq!(report.rounds_fought, 10);
    assert_eq!(report.challenger_hp, 290);
    assert_eq!(report.champion_hp, 190);
    // 290/300 beats 190/200
    assert_eq!(report.winner, Side::Challenger);
}

#[test]
fn test_champion_comeback_special() {
    // Champion is first and drops to 28% after the challenger's opener, so
    // "Claw Storm" fires on its very next hit.
    let options = ArenaOptions::default();
    let champion = options.champion();
    let challenger = Fighter::new("Sir Pinch", 100, 100, 100);
    let mut rng = SequenceRng::constant(0.5);
    let report = resolve_battle(&challenger, &champion, &mut rng);

    let first_round = &report.rounds[0];
    assert_eq!(first_round.turns[0].attacker, Side::Challenger);
    assert_eq!(first_round.turns[0].damage, 72);
    assert_eq!(first_round.turns[1].special.as_deref(), Some("Claw Storm"));
    assert_eq!(first_round.turns[1].damage, 77);
    assert_eq!(report.specials_fired(Side::Champion), 1);
    assert_eq!(report.winner, Side::Challenger);
    assert_eq!(report.rounds_fought, 2);
    assert_eq!(report.challenger_hp, 23);
}

// ============================================================================
// Offerings
// ============================================================================

#[test]
fn test_arena_deliverable_fields() {
    let arena = ArenaBattle::default();
    let job = arena
        .run(&request_json(""), &mut SequenceRng::constant(0.5))
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&job.deliverable_json().unwrap()).unwrap();

    assert_eq!(json["winner"], "Sir Pinch");
    assert_eq!(json["challenger_final_hp"], 23);
    assert_eq!(json["champion_final_hp"], 0);
    assert_eq!(json["rounds"], 2);
    assert!(json["battle_log"].as_str().unwrap().contains("🏆 WINNER: Sir Pinch"));
    assert!(json.get("challenger_won").is_none());
}

#[test]
fn test_vip_deliverable_fields() {
    let vip = VipBattle::default();
    let req = request_json(
        r#","clawd_balance":250000000,"wallet_address":"0x8725f5479322e952f63b9611FED6ef36B61E4e02""#,
    );
    let job = vip.run(&req, &mut GameRng::new(7)).unwrap();
    let json = serde_json::to_value(&job.deliverable).unwrap();

    assert_eq!(json["vip_bonus_applied"], "+20%");
    let won = json["challenger_won"].as_bool().unwrap();
    let title = json["title_earned"].as_str().unwrap();
    assert_eq!(
        title,
        if won {
            "👑 Grand Molter of the Clawsseum"
        } else {
            "🩸 Bloodied but Unbroken"
        }
    );
    assert!(json["rounds"].as_u64().unwrap() <= 10);
}

#[test]
fn test_vip_rejects_small_balance() {
    let vip = VipBattle::default();
    let req = request_json(r#","clawd_balance":5000,"wallet_address":"0xabc""#);
    assert!(matches!(
        vip.run(&req, &mut GameRng::new(1)),
        Err(ValidationError::VipBalanceTooLow { declared: 5000, .. })
    ));
}

#[test]
fn test_wager_win_emits_transfer() {
    let wager = WagerBattle::default();
    let req = request_json(r#","wager_amount":5000,"buyer_wallet":"0xbuyer""#);
    let job = wager.run(&req, &mut SequenceRng::constant(0.5)).unwrap();

    assert!(job.deliverable.challenger_won);
    assert_eq!(job.deliverable.clawd_returned, 9500);

    let json = serde_json::to_value(&job).unwrap();
    assert_eq!(json["payableDetail"]["amount"], 9500);
    assert_eq!(json["payableDetail"]["recipient"], "0xbuyer");
    assert_eq!(
        json["payableDetail"]["tokenAddress"],
        "0xA5c57BC3e7Fa624Ee28211e4E542823D9e2A355E"
    );
    assert_eq!(json["deliverable"]["wager_amount"], 5000);
}

#[test]
fn test_wager_loss_has_no_transfer() {
    let wager = WagerBattle::default();
    let req = BattleRequest::from_json(
        r#"{"fighter_name":"Minnow","attack":1,"defense":1,"speed":1,"wager_amount":5000}"#,
    )
    .unwrap();
    let job = wager.run(&req, &mut SequenceRng::constant(0.5)).unwrap();

    assert!(!job.deliverable.challenger_won);
    assert_eq!(job.deliverable.clawd_returned, 0);
    let json = serde_json::to_value(&job).unwrap();
    assert!(json.get("payableDetail").is_none());
}

#[test]
fn test_configured_champion() {
    let options = ArenaOptions::parse_config(
        "OPTIONS=champion_name:Iron Claw,champion_attack:1,champion_defense:1,champion_speed:1",
    )
    .unwrap();
    let arena = ArenaBattle::new(&options);
    let job = arena
        .run(&request_json(""), &mut SequenceRng::constant(0.5))
        .unwrap();
    assert_eq!(job.deliverable.winner, "Sir Pinch");
    assert_eq!(job.deliverable.challenger_final_hp, 100);
    assert!(job.deliverable.battle_log.contains("Iron Claw"));
}

#[test]
fn test_strategy_label_is_case_sensitive() {
    let arena = ArenaBattle::default();
    let req = BattleRequest::from_json(
        r#"{"fighter_name":"Crab","attack":50,"defense":50,"speed":50,"strategy":"Aggressive"}"#,
    )
    .unwrap();
    let job = arena.run(&req, &mut SequenceRng::constant(0.5)).unwrap();
    let log = &job.deliverable.battle_log;
    assert!(log.contains("   ATK: 50 | DEF: 50 | SPD: 50 | HP: 100"));
    assert!(log.contains("   Strategy: AGGRESSIVE"));
}

#[test]
fn test_stat_reasons_per_offering() {
    let req = BattleRequest::from_json(
        r#"{"fighter_name":"Crab","attack":150,"defense":50,"speed":50,"clawd_balance":200000000,"wallet_address":"0xabc","wager_amount":5000}"#,
    )
    .unwrap();
    let mut rng = SequenceRng::constant(0.5);
    let reason = |err: ValidationError| err.to_string();

    assert_eq!(
        reason(ArenaBattle::default().run(&req, &mut rng).unwrap_err()),
        "Stat \"attack\" must be a number between 1 and 100. Got: 150"
    );
    assert_eq!(
        reason(VipBattle::default().run(&req, &mut rng).unwrap_err()),
        "\"attack\" must be between 1 and 100."
    );
    assert_eq!(
        reason(WagerBattle::default().run(&req, &mut rng).unwrap_err()),
        "\"attack\" must be between 1 and 100. Got: 150"
    );
}
