use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Bump, Offer, Transaction, TransactionKind, User};
use crate::error::Result;

/// A settled offer the user won, together with the awarded ask's full
/// bump pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferPool {
    pub offer: Offer,
    pub bumps: Vec<Bump>,
}

/// Read access to the ledger record sets, one method per access pattern.
///
/// Backed by Postgres in production and by `MemoryLedger` in tests. All
/// methods are pure reads; mutation of settlement state belongs to the
/// external settlement collaborator.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn find_user(&self, user_id: Uuid) -> Result<Option<User>>;

    /// SETTLED transactions belonging to the user
    async fn settled_transactions(&self, user_id: Uuid) -> Result<Vec<Transaction>>;

    /// Bumps the user placed on asks that have settled (owed)
    async fn settled_bumps_for_bidder(&self, user_id: Uuid) -> Result<Vec<Bump>>;

    /// Offers the user authored on settled asks, each with the awarded
    /// ask's bump pool (to be paid out)
    async fn settled_offer_pools_for_author(&self, user_id: Uuid) -> Result<Vec<OfferPool>>;

    /// Bumps the user placed on pending-acceptance or active asks (locked)
    async fn locked_bumps_for_bidder(&self, user_id: Uuid) -> Result<Vec<Bump>>;

    /// Count of the user's non-settled INVOICE transactions created after
    /// the threshold
    async fn count_open_invoices_since(
        &self,
        user_id: Uuid,
        created_after: DateTime<Utc>,
    ) -> Result<i64>;

    /// Most recently created SETTLED transaction of the given kind
    async fn latest_settled_transaction(
        &self,
        user_id: Uuid,
        kind: TransactionKind,
    ) -> Result<Option<Transaction>>;
}
