use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bid placed against an ask, forming the ask's prize pool.
///
/// The amount is immutable once created; whether the bump is locked, owed
/// or void follows from the parent ask's status, never from state stored
/// here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bump {
    pub id: Uuid,
    pub ask_id: Uuid,
    pub bidder_id: Uuid,
    /// Whole satoshis
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Sum a bump list into its pool total, in sats
pub fn pool_total(bumps: &[Bump]) -> i64 {
    bumps.iter().map(|b| b.amount).sum()
}
