//! Payment requests and payouts
//!
//! Nothing here moves tokens. These are the instructions handed to the
//! external payment dispatcher.

use serde::{Deserialize, Serialize};

use crate::consts::WIN_MULTIPLIER_TENTHS;
use crate::format::thousands;

/// Instruction to pay `amount` of `token_address` to `recipient`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInstruction {
    pub amount: u64,
    pub token_address: String,
    pub recipient: String,
}

/// Request for the buyer to transfer funds before the job runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub amount: u64,
    pub token_address: String,
    pub recipient: String,
}

/// Winnings for a won wager: `floor(wager * 1.9)`, in exact integer arithmetic.
///
/// Saturates at `u64::MAX`.
pub fn wager_payout(wager: u64) -> u64 {
    let tenths = wager as u128 * WIN_MULTIPLIER_TENTHS as u128;
    u64::try_from(tenths / 10).unwrap_or(u64::MAX)
}

/// Payout instruction for a finished wager battle, if one is due.
pub fn payout_instruction(
    challenger_won: bool,
    wager: u64,
    token_address: &str,
    recipient: &str,
) -> Option<TransferInstruction> {
    let amount = if challenger_won { wager_payout(wager) } else { 0 };
    (amount > 0).then(|| TransferInstruction {
        amount,
        token_address: token_address.to_string(),
        recipient: recipient.to_string(),
    })
}

/// Ask the buyer to stake their wager with the arena treasury.
pub fn wager_funds_request(wager: u64, token_address: &str, treasury: &str) -> FundsRequest {
    FundsRequest {
        content: Some(format!(
            "Transfer {} CLAWD as your battle wager. WIN = get 1.9× back. LOSE = stake forfeited.",
            thousands(wager)
        )),
        amount: wager,
        token_address: token_address.to_string(),
        recipient: treasury.to_string(),
    }
}
