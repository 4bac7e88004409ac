//! Balance aggregation and wallet-policy behavior over the in-memory
//! store, with a pinned clock.

use std::sync::Arc;

use askpool::domain::{AskKind, AskStatus, TransactionKind, TransactionStatus};
use askpool::ledger::constants::{
    INVOICE_LIMIT, TRANSACTION_FREQUENCY_SECONDS_LIMIT, TRANSACTION_MAX_AGE,
};
use askpool::{min_bump_for_ask, Balance, FixedClock, LedgerService, MemoryLedger};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

fn service_at(store: &MemoryLedger, now: DateTime<Utc>) -> LedgerService {
    LedgerService::new(Arc::new(store.clone()), Arc::new(FixedClock(now)))
}

#[tokio::test]
async fn user_with_no_history_has_zero_balances() {
    let store = MemoryLedger::new();
    let user = store.seed_user("alice");

    let balance = service_at(&store, Utc::now())
        .user_balance(user)
        .await
        .unwrap();

    assert_eq!(balance, Balance::ZERO);
}

#[tokio::test]
async fn settled_invoice_credits_in_whole_units() {
    let store = MemoryLedger::new();
    let user = store.seed_user("alice");
    store.seed_transaction(
        user,
        TransactionKind::Invoice,
        TransactionStatus::Settled,
        Some(100_000),
        Utc::now(),
    );

    let balance = service_at(&store, Utc::now())
        .user_balance(user)
        .await
        .unwrap();

    assert_eq!(balance.available, dec!(100));
    assert_eq!(balance.locked, Decimal::ZERO);
}

#[tokio::test]
async fn settled_withdrawal_debits_in_whole_units() {
    let store = MemoryLedger::new();
    let user = store.seed_user("alice");
    store.seed_transaction(
        user,
        TransactionKind::Withdrawal,
        TransactionStatus::Settled,
        Some(50_000),
        Utc::now(),
    );

    let balance = service_at(&store, Utc::now())
        .user_balance(user)
        .await
        .unwrap();

    assert_eq!(balance.available, dec!(-50));
}

#[tokio::test]
async fn bump_locks_while_pending_and_is_owed_once_settled() {
    let store = MemoryLedger::new();
    let bidder = store.seed_user("bidder");
    let asker = store.seed_user("asker");
    let ask = store.seed_ask(asker, AskKind::Public, AskStatus::PendingAcceptance);
    store.seed_bump(ask, bidder, 10);

    let ledger = service_at(&store, Utc::now());

    let pending = ledger.user_balance(bidder).await.unwrap();
    assert_eq!(pending.locked, dec!(10));
    assert_eq!(pending.available, dec!(-10));

    store.set_ask_status(ask, AskStatus::Active);
    let active = ledger.user_balance(bidder).await.unwrap();
    assert_eq!(active.locked, dec!(10));
    assert_eq!(active.available, dec!(-10));

    store.set_ask_status(ask, AskStatus::Settled);
    let settled = ledger.user_balance(bidder).await.unwrap();
    assert_eq!(settled.locked, Decimal::ZERO);
    assert_eq!(settled.available, dec!(-10));
}

#[tokio::test]
async fn won_offer_receives_ninety_percent_of_the_pool() {
    let store = MemoryLedger::new();
    let author = store.seed_user("author");
    let asker = store.seed_user("asker");
    let bidder = store.seed_user("bidder");
    let ask = store.seed_ask(asker, AskKind::Public, AskStatus::Settled);
    store.seed_bump(ask, bidder, 70);
    store.seed_bump(ask, bidder, 30);
    store.seed_offer(ask, author);

    let balance = service_at(&store, Utc::now())
        .user_balance(author)
        .await
        .unwrap();

    assert_eq!(balance.available, dec!(90));
    assert_eq!(balance.locked, Decimal::ZERO);
}

#[tokio::test]
async fn balance_combines_all_four_record_sets() {
    let store = MemoryLedger::new();
    let user = store.seed_user("user");
    let other = store.seed_user("other");

    // +100 sats from a settled invoice
    store.seed_transaction(
        user,
        TransactionKind::Invoice,
        TransactionStatus::Settled,
        Some(100_000),
        Utc::now(),
    );

    // -20 sats owed on a settled ask the user bumped
    let settled_ask = store.seed_ask(other, AskKind::Public, AskStatus::Settled);
    store.seed_bump(settled_ask, user, 20);

    // -10 sats locked on an open ask
    let open_ask = store.seed_ask(other, AskKind::Public, AskStatus::Active);
    store.seed_bump(open_ask, user, 10);

    // +90 sats payout from a won offer over a 100 sat pool
    let won_ask = store.seed_ask(other, AskKind::Public, AskStatus::Settled);
    store.seed_bump(won_ask, other, 100);
    store.seed_offer(won_ask, user);

    let balance = service_at(&store, Utc::now())
        .user_balance(user)
        .await
        .unwrap();

    assert_eq!(balance.available, dec!(160));
    assert_eq!(balance.locked, dec!(10));
}

#[tokio::test]
async fn balance_is_idempotent_without_intervening_writes() {
    let store = MemoryLedger::new();
    let user = store.seed_user("user");
    store.seed_transaction(
        user,
        TransactionKind::Invoice,
        TransactionStatus::Settled,
        Some(42_000),
        Utc::now(),
    );

    let ledger = service_at(&store, Utc::now());
    let first = ledger.user_balance(user).await.unwrap();
    let second = ledger.user_balance(user).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn invoice_limit_is_a_strict_ceiling() {
    let now = Utc::now();
    let store = MemoryLedger::new();
    let user = store.seed_user("user");
    let ledger = service_at(&store, now);

    // Below the ceiling
    for _ in 0..INVOICE_LIMIT - 1 {
        store.seed_transaction(
            user,
            TransactionKind::Invoice,
            TransactionStatus::Pending,
            None,
            now - Duration::seconds(10),
        );
    }
    assert!(ledger.below_invoice_limit(user).await.unwrap());

    // Exactly at the ceiling: blocked
    store.seed_transaction(
        user,
        TransactionKind::Invoice,
        TransactionStatus::Pending,
        None,
        now - Duration::seconds(10),
    );
    assert!(!ledger.below_invoice_limit(user).await.unwrap());
}

#[tokio::test]
async fn invoices_outside_the_window_do_not_count() {
    let now = Utc::now();
    let store = MemoryLedger::new();
    let user = store.seed_user("user");

    for _ in 0..INVOICE_LIMIT {
        store.seed_transaction(
            user,
            TransactionKind::Invoice,
            TransactionStatus::Pending,
            None,
            now - Duration::seconds(TRANSACTION_MAX_AGE + 1),
        );
    }

    assert!(service_at(&store, now)
        .below_invoice_limit(user)
        .await
        .unwrap());
}

#[tokio::test]
async fn settled_invoices_do_not_count_toward_the_limit() {
    let now = Utc::now();
    let store = MemoryLedger::new();
    let user = store.seed_user("user");

    for _ in 0..INVOICE_LIMIT {
        store.seed_transaction(
            user,
            TransactionKind::Invoice,
            TransactionStatus::Settled,
            Some(1_000),
            now - Duration::seconds(10),
        );
    }

    assert!(service_at(&store, now)
        .below_invoice_limit(user)
        .await
        .unwrap());
}

#[tokio::test]
async fn no_settled_history_means_no_cooldown() {
    let store = MemoryLedger::new();
    let user = store.seed_user("user");
    // A pending withdrawal is not a settled one
    store.seed_transaction(
        user,
        TransactionKind::Withdrawal,
        TransactionStatus::Pending,
        None,
        Utc::now(),
    );

    let ledger = service_at(&store, Utc::now());
    assert!(!ledger
        .recent_settled_transaction(user, TransactionKind::Withdrawal)
        .await
        .unwrap());
    assert!(!ledger
        .recent_settled_transaction(user, TransactionKind::Invoice)
        .await
        .unwrap());
}

#[tokio::test]
async fn past_settlement_trips_the_cooldown() {
    let now = Utc::now();
    let store = MemoryLedger::new();
    let user = store.seed_user("user");
    store.seed_transaction(
        user,
        TransactionKind::Withdrawal,
        TransactionStatus::Settled,
        Some(5_000),
        now - Duration::seconds(10),
    );

    // The gap is updated_at minus now: non-positive for past settlements,
    // so any past settlement falls inside the cooldown.
    assert!(service_at(&store, now)
        .recent_settled_transaction(user, TransactionKind::Withdrawal)
        .await
        .unwrap());
}

#[tokio::test]
async fn future_stamped_settlement_beyond_the_cooldown_does_not_trip() {
    let now = Utc::now();
    let store = MemoryLedger::new();
    let user = store.seed_user("user");
    let tx = store.seed_transaction(
        user,
        TransactionKind::Withdrawal,
        TransactionStatus::Settled,
        Some(5_000),
        now,
    );
    store.set_transaction_updated_at(
        tx,
        now + Duration::seconds(TRANSACTION_FREQUENCY_SECONDS_LIMIT + 30),
    );

    assert!(!service_at(&store, now)
        .recent_settled_transaction(user, TransactionKind::Withdrawal)
        .await
        .unwrap());
}

#[tokio::test]
async fn cooldown_is_per_transaction_kind() {
    let now = Utc::now();
    let store = MemoryLedger::new();
    let user = store.seed_user("user");
    store.seed_transaction(
        user,
        TransactionKind::Invoice,
        TransactionStatus::Settled,
        Some(5_000),
        now - Duration::seconds(5),
    );

    let ledger = service_at(&store, now);
    assert!(ledger
        .recent_settled_transaction(user, TransactionKind::Invoice)
        .await
        .unwrap());
    assert!(!ledger
        .recent_settled_transaction(user, TransactionKind::Withdrawal)
        .await
        .unwrap());
}

#[test]
fn minimum_bump_policy() {
    assert_eq!(min_bump_for_ask(50, AskKind::BumpPublic), dec!(55));
    assert_eq!(min_bump_for_ask(0, AskKind::Public), dec!(10));
    assert_eq!(min_bump_for_ask(1_000_000, AskKind::Public), dec!(10));
    assert_eq!(min_bump_for_ask(1_000_000, AskKind::Private), dec!(10));
}

#[tokio::test]
async fn unknown_user_id_yields_zero_balances() {
    let store = MemoryLedger::new();
    store.seed_user("someone-else");

    let balance = service_at(&store, Utc::now())
        .user_balance(Uuid::new_v4())
        .await
        .unwrap();

    assert_eq!(balance, Balance::ZERO);
}
