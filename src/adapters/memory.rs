use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::domain::{
    Ask, AskKind, AskStatus, Bump, Offer, Transaction, TransactionKind, TransactionStatus, User,
};
use crate::error::Result;
use crate::ledger::store::{LedgerStore, OfferPool};

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    asks: Vec<Ask>,
    bumps: Vec<Bump>,
    offers: Vec<Offer>,
    transactions: Vec<Transaction>,
}

/// In-memory `LedgerStore` for tests and embedding.
///
/// Clones share state, so a handle can keep seeding records after the
/// store has been handed to a service.
#[derive(Clone, Default)]
pub struct MemoryLedger {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("ledger state lock poisoned")
    }

    fn ask_status(state: &Inner, ask_id: Uuid) -> Option<AskStatus> {
        state.asks.iter().find(|a| a.id == ask_id).map(|a| a.status)
    }

    // ==================== Seeding ====================

    pub fn seed_user(&self, user_name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.state().users.push(User {
            id,
            user_name: user_name.to_string(),
            created_at: Utc::now(),
        });
        id
    }

    pub fn seed_ask(&self, user_id: Uuid, ask_kind: AskKind, status: AskStatus) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        self.state().asks.push(Ask {
            id,
            user_id,
            ask_kind,
            status,
            slug: format!("ask-{id}"),
            title: format!("ask {id}"),
            deadline_at: now + Duration::days(7),
            accepted_deadline_at: None,
            created_at: now,
        });
        id
    }

    pub fn seed_bump(&self, ask_id: Uuid, bidder_id: Uuid, amount: i64) -> Uuid {
        let id = Uuid::new_v4();
        self.state().bumps.push(Bump {
            id,
            ask_id,
            bidder_id,
            amount,
            created_at: Utc::now(),
        });
        id
    }

    pub fn seed_offer(&self, ask_id: Uuid, author_id: Uuid) -> Uuid {
        let id = Uuid::new_v4();
        self.state().offers.push(Offer {
            id,
            ask_id,
            author_id,
            content: String::new(),
            created_at: Utc::now(),
        });
        id
    }

    pub fn seed_transaction(
        &self,
        user_id: Uuid,
        kind: TransactionKind,
        status: TransactionStatus,
        msats_settled: Option<i64>,
        created_at: DateTime<Utc>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.state().transactions.push(Transaction {
            id,
            user_id,
            transaction_kind: kind,
            transaction_status: status,
            msats_settled,
            created_at,
            updated_at: created_at,
        });
        id
    }

    /// Restamp a transaction's `updated_at`, as the settlement
    /// collaborator would
    pub fn set_transaction_updated_at(&self, id: Uuid, updated_at: DateTime<Utc>) {
        if let Some(tx) = self.state().transactions.iter_mut().find(|t| t.id == id) {
            tx.updated_at = updated_at;
        }
    }

    pub fn set_ask_status(&self, ask_id: Uuid, status: AskStatus) {
        if let Some(ask) = self.state().asks.iter_mut().find(|a| a.id == ask_id) {
            ask.status = status;
        }
    }
}

#[async_trait]
impl LedgerStore for MemoryLedger {
    async fn find_user(&self, user_id: Uuid) -> Result<Option<User>> {
        Ok(self.state().users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn settled_transactions(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        Ok(self
            .state()
            .transactions
            .iter()
            .filter(|t| {
                t.user_id == user_id && t.transaction_status == TransactionStatus::Settled
            })
            .cloned()
            .collect())
    }

    async fn settled_bumps_for_bidder(&self, user_id: Uuid) -> Result<Vec<Bump>> {
        let state = self.state();
        Ok(state
            .bumps
            .iter()
            .filter(|b| {
                b.bidder_id == user_id
                    && Self::ask_status(&state, b.ask_id) == Some(AskStatus::Settled)
            })
            .cloned()
            .collect())
    }

    async fn settled_offer_pools_for_author(&self, user_id: Uuid) -> Result<Vec<OfferPool>> {
        let state = self.state();
        Ok(state
            .offers
            .iter()
            .filter(|o| {
                o.author_id == user_id
                    && Self::ask_status(&state, o.ask_id) == Some(AskStatus::Settled)
            })
            .map(|offer| OfferPool {
                offer: offer.clone(),
                bumps: state
                    .bumps
                    .iter()
                    .filter(|b| b.ask_id == offer.ask_id)
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    async fn locked_bumps_for_bidder(&self, user_id: Uuid) -> Result<Vec<Bump>> {
        let state = self.state();
        Ok(state
            .bumps
            .iter()
            .filter(|b| {
                b.bidder_id == user_id
                    && Self::ask_status(&state, b.ask_id).is_some_and(|s| s.is_open())
            })
            .cloned()
            .collect())
    }

    async fn count_open_invoices_since(
        &self,
        user_id: Uuid,
        created_after: DateTime<Utc>,
    ) -> Result<i64> {
        Ok(self
            .state()
            .transactions
            .iter()
            .filter(|t| {
                t.user_id == user_id
                    && t.transaction_kind == TransactionKind::Invoice
                    && t.transaction_status != TransactionStatus::Settled
                    && t.created_at > created_after
            })
            .count() as i64)
    }

    async fn latest_settled_transaction(
        &self,
        user_id: Uuid,
        kind: TransactionKind,
    ) -> Result<Option<Transaction>> {
        Ok(self
            .state()
            .transactions
            .iter()
            .filter(|t| {
                t.user_id == user_id
                    && t.transaction_kind == kind
                    && t.transaction_status == TransactionStatus::Settled
            })
            .max_by_key(|t| t.created_at)
            .cloned())
    }
}
