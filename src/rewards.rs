//! Reward Claim Rules

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{ClaimStatus, RewardClaim};

/// Owner's answer to a pending claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimDecision {
    Approve,
    Reject,
}

impl ClaimDecision {
    pub fn resulting_status(self) -> ClaimStatus {
        match self {
            ClaimDecision::Approve => ClaimStatus::Approved,
            ClaimDecision::Reject => ClaimStatus::Rejected,
        }
    }
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 3] = [ClaimStatus::Pending, ClaimStatus::Approved, ClaimStatus::Rejected];

    pub fn label(self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

/// Check that `claim` may still be decided
pub fn check_decidable(claim: &RewardClaim) -> AppResult<()> {
    match claim.status {
        ClaimStatus::Pending => Ok(()),
        status => Err(AppError::Conflict(format!(
            "claim {} is already {}",
            claim.id,
            status.label().to_lowercase()
        ))),
    }
}

/// Record a decision locally once the store accepted it
pub fn apply_decision(claims: &mut [RewardClaim], claim_id: &str, decision: ClaimDecision) -> AppResult<()> {
    let claim = claims
        .iter_mut()
        .find(|c| c.id == claim_id)
        .ok_or_else(|| AppError::NotFound(format!("claim {}", claim_id)))?;
    check_decidable(claim)?;
    claim.status = decision.resulting_status();
    Ok(())
}

/// Mirror an accepted decision into the local list. A local mismatch is
/// logged and leaves the list untouched.
pub fn mirror_decision(claims: &mut [RewardClaim], claim_id: &str, decision: ClaimDecision) -> bool {
    match apply_decision(claims, claim_id, decision) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("[REWARDS] store accepted {:?} but local list disagrees: {}", decision, e);
            false
        }
    }
}

/// Row key for claim lists. Includes the status so a decided row re-renders.
pub fn claim_row_key(claim: &RewardClaim) -> (String, ClaimStatus) {
    (claim.id.clone(), claim.status)
}

/// Claims with `status`, newest first. Undated claims sort last.
pub fn visible_claims(claims: &[RewardClaim], status: ClaimStatus) -> Vec<RewardClaim> {
    let mut out: Vec<RewardClaim> = claims.iter().filter(|c| c.status == status).cloned().collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

pub fn count_with(claims: &[RewardClaim], status: ClaimStatus) -> usize {
    claims.iter().filter(|c| c.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(id: &str, status: ClaimStatus, created_at: Option<i64>) -> RewardClaim {
        RewardClaim {
            id: id.into(),
            customer_name: "Ana".into(),
            reward_title: "Free coffee".into(),
            points_cost: 100,
            status,
            created_at,
        }
    }

    #[test]
    fn test_only_pending_is_decidable() {
        let mut claims = vec![claim("a", ClaimStatus::Pending, Some(1)), claim("b", ClaimStatus::Approved, Some(2))];

        apply_decision(&mut claims, "a", ClaimDecision::Reject).unwrap();
        assert_eq!(claims[0].status, ClaimStatus::Rejected);

        assert!(matches!(apply_decision(&mut claims, "a", ClaimDecision::Approve), Err(AppError::Conflict(_))));
        assert!(matches!(apply_decision(&mut claims, "b", ClaimDecision::Reject), Err(AppError::Conflict(_))));
        assert!(matches!(apply_decision(&mut claims, "zz", ClaimDecision::Approve), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_visible_claims_newest_first() {
        let claims = vec![
            claim("old", ClaimStatus::Pending, Some(10)),
            claim("done", ClaimStatus::Approved, Some(50)),
            claim("undated", ClaimStatus::Pending, None),
            claim("new", ClaimStatus::Pending, Some(30)),
        ];
        let ids: Vec<String> = visible_claims(&claims, ClaimStatus::Pending).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["new", "old", "undated"]);
        assert_eq!(count_with(&claims, ClaimStatus::Approved), 1);
    }

    #[test]
    fn test_mirror_decision_reports_local_mismatch() {
        let mut claims = vec![claim("a", ClaimStatus::Approved, Some(1))];

        assert!(!mirror_decision(&mut claims, "a", ClaimDecision::Reject));
        assert!(!mirror_decision(&mut claims, "missing", ClaimDecision::Approve));
        assert_eq!(claims[0].status, ClaimStatus::Approved);

        claims.push(claim("b", ClaimStatus::Pending, Some(2)));
        assert!(mirror_decision(&mut claims, "b", ClaimDecision::Approve));
        assert_eq!(claims[1].status, ClaimStatus::Approved);
    }

    #[test]
    fn test_row_key_changes_with_status() {
        use std::collections::HashSet;

        let pending = claim("a", ClaimStatus::Pending, Some(1));
        let mut decided = pending.clone();
        decided.status = ClaimStatus::Rejected;

        let keys: HashSet<_> = [&pending, &decided, &pending].into_iter().map(claim_row_key).collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&("a".to_string(), ClaimStatus::Rejected)));
    }

    #[test]
    fn test_decision_wire_format() {
        assert_eq!(serde_json::to_string(&ClaimDecision::Approve).unwrap(), "\"approve\"");
        let parsed: RewardClaim = serde_json::from_str(r#"{"id":"c1","status":"rejected"}"#).unwrap();
        assert_eq!(parsed.status, ClaimStatus::Rejected);
        assert_eq!(parsed.points_cost, 0);
    }
}
