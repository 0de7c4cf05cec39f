//! Reward Claim Commands

use serde::Serialize;

use super::{call, to_args};
use crate::models::RewardClaim;
use crate::rewards::ClaimDecision;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShopIdArgs<'a> {
    shop_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DecideClaimArgs<'a> {
    claim_id: &'a str,
    decision: ClaimDecision,
}

pub async fn list_reward_claims(shop_id: &str) -> Result<Vec<RewardClaim>, String> {
    let result = call("list_reward_claims", to_args(&ShopIdArgs { shop_id })?).await?;
    if result.is_null() || result.is_undefined() {
        return Ok(Vec::new());
    }
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn decide_reward_claim(claim_id: &str, decision: ClaimDecision) -> Result<(), String> {
    call("decide_reward_claim", to_args(&DecideClaimArgs { claim_id, decision })?).await?;
    Ok(())
}
