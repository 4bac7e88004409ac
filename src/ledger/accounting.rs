use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::domain::{pool_total, Transaction, TransactionKind};
use crate::error::Result;
use crate::ledger::constants::{
    INVOICE_LIMIT, MSATS_UNIT_FACTOR, PAYOUT_FACTOR, TRANSACTION_FREQUENCY_SECONDS_LIMIT,
    TRANSACTION_MAX_AGE,
};
use crate::ledger::store::LedgerStore;

/// A user's funds, in sats.
///
/// `locked` is committed to bumps on not-yet-settled asks and already
/// subtracted from `available`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub available: Decimal,
    pub locked: Decimal,
}

impl Balance {
    pub const ZERO: Balance = Balance {
        available: Decimal::ZERO,
        locked: Decimal::ZERO,
    };
}

/// Aggregates the ledger record sets into balances and gates wallet
/// actions. Pure reads over the store; all arithmetic is exact decimal.
pub struct LedgerService {
    store: Arc<dyn LedgerStore>,
    clock: Arc<dyn Clock>,
}

impl LedgerService {
    pub fn new(store: Arc<dyn LedgerStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn with_system_clock(store: Arc<dyn LedgerStore>) -> Self {
        Self::new(store, Arc::new(SystemClock))
    }

    /// Compute a user's available and locked balance.
    ///
    /// Four independent record sets are read (no ordering dependency) and
    /// reduced:
    ///   available = settled transactions (invoices credit, withdrawals
    ///               debit, msats converted to sats)
    ///             + payout share of bump pools on won, settled offers
    ///             - bumps owed on settled asks
    ///             - bumps locked on open asks
    ///   locked    = bumps locked on open asks
    ///
    /// An unknown user id reduces over empty record sets and yields zero
    /// balances; acting callers must check existence themselves.
    #[instrument(skip(self))]
    pub async fn user_balance(&self, user_id: Uuid) -> Result<Balance> {
        let (transactions, settled_bumps, offer_pools, locked_bumps) = tokio::try_join!(
            self.store.settled_transactions(user_id),
            self.store.settled_bumps_for_bidder(user_id),
            self.store.settled_offer_pools_for_author(user_id),
            self.store.locked_bumps_for_bidder(user_id),
        )?;

        let transaction_sum_msats: i64 = transactions
            .iter()
            .filter_map(Transaction::signed_msats)
            .sum();
        let transaction_sum =
            Decimal::from(transaction_sum_msats) / Decimal::from(MSATS_UNIT_FACTOR);

        let settled_bumps_sum = Decimal::from(pool_total(&settled_bumps));

        let won_pools_sats: i64 = offer_pools.iter().map(|p| pool_total(&p.bumps)).sum();
        let offer_payout_sum = Decimal::from(won_pools_sats) * PAYOUT_FACTOR;

        let locked_sum = Decimal::from(pool_total(&locked_bumps));

        let balance = Balance {
            available: transaction_sum + offer_payout_sum - settled_bumps_sum - locked_sum,
            locked: locked_sum,
        };

        debug!(
            %user_id,
            available = %balance.available,
            locked = %balance.locked,
            "computed user balance"
        );

        Ok(balance)
    }

    /// True while the user's unresolved invoices within the trailing
    /// window stay strictly below the limit
    pub async fn below_invoice_limit(&self, user_id: Uuid) -> Result<bool> {
        let threshold = self.clock.now() - Duration::seconds(TRANSACTION_MAX_AGE);
        let count = self
            .store
            .count_open_invoices_since(user_id, threshold)
            .await?;
        Ok(count < INVOICE_LIMIT)
    }

    /// True if the user's latest settled transaction of the kind falls
    /// within the cooldown.
    ///
    /// The gap is taken `updated_at` minus now: a past settlement yields a
    /// non-positive gap, so any existing settlement inside the cooldown
    /// (or earlier) trips the check, while a settlement stamped in the
    /// future beyond the cooldown does not. No settled transaction of the
    /// kind means no cooldown.
    pub async fn recent_settled_transaction(
        &self,
        user_id: Uuid,
        kind: TransactionKind,
    ) -> Result<bool> {
        let latest = self.store.latest_settled_transaction(user_id, kind).await?;
        Ok(match latest {
            Some(tx) => {
                (tx.updated_at - self.clock.now()).num_seconds()
                    < TRANSACTION_FREQUENCY_SECONDS_LIMIT
            }
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryLedger;
    use crate::clock::FixedClock;
    use crate::domain::{AskKind, AskStatus, TransactionStatus};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn service(store: MemoryLedger) -> LedgerService {
        LedgerService::new(Arc::new(store), Arc::new(FixedClock(Utc::now())))
    }

    #[tokio::test]
    async fn unknown_user_reduces_to_zero_balances() {
        let ledger = service(MemoryLedger::new());
        let balance = ledger.user_balance(Uuid::new_v4()).await.unwrap();
        assert_eq!(balance, Balance::ZERO);
    }

    #[tokio::test]
    async fn settled_invoice_converts_msats_to_sats() {
        let store = MemoryLedger::new();
        let user = store.seed_user("alice");
        store.seed_transaction(
            user,
            TransactionKind::Invoice,
            TransactionStatus::Settled,
            Some(100_000),
            Utc::now(),
        );

        let balance = service(store).user_balance(user).await.unwrap();
        assert_eq!(balance.available, dec!(100));
        assert_eq!(balance.locked, Decimal::ZERO);
    }

    #[tokio::test]
    async fn pending_transactions_do_not_count() {
        let store = MemoryLedger::new();
        let user = store.seed_user("bob");
        store.seed_transaction(
            user,
            TransactionKind::Invoice,
            TransactionStatus::Pending,
            None,
            Utc::now(),
        );

        let balance = service(store).user_balance(user).await.unwrap();
        assert_eq!(balance, Balance::ZERO);
    }

    #[tokio::test]
    async fn won_offer_pays_out_pool_minus_bank_cut() {
        let store = MemoryLedger::new();
        let author = store.seed_user("carol");
        let asker = store.seed_user("dave");
        let bidder = store.seed_user("erin");
        let ask = store.seed_ask(asker, AskKind::Public, AskStatus::Settled);
        store.seed_bump(ask, bidder, 60);
        store.seed_bump(ask, bidder, 40);
        store.seed_offer(ask, author);

        let balance = service(store).user_balance(author).await.unwrap();
        assert_eq!(balance.available, dec!(90));
    }

    #[tokio::test]
    async fn bump_on_open_ask_locks_until_settlement() {
        let store = MemoryLedger::new();
        let bidder = store.seed_user("frank");
        let asker = store.seed_user("grace");
        let ask = store.seed_ask(asker, AskKind::Public, AskStatus::PendingAcceptance);
        store.seed_bump(ask, bidder, 10);

        let ledger = service(store);
        let balance = ledger.user_balance(bidder).await.unwrap();
        assert_eq!(balance.locked, dec!(10));
        assert_eq!(balance.available, dec!(-10));
    }

    #[tokio::test]
    async fn recent_settled_transaction_false_without_history() {
        let store = MemoryLedger::new();
        let user = store.seed_user("heidi");
        let ledger = service(store);
        assert!(!ledger
            .recent_settled_transaction(user, TransactionKind::Withdrawal)
            .await
            .unwrap());
    }
}
