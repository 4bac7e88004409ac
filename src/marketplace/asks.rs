use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::adapters::{AskFilter, NewAsk, PostgresStore};
use crate::clock::Clock;
use crate::domain::{Ask, AskStatus, Bump, Offer};
use crate::error::{AskpoolError, Result};
use crate::ledger::{min_bump_for_ask, LedgerService};

/// Ask lifecycle and bidding: creation, bump/offer placement, offer
/// acceptance and the expiry sweep.
pub struct AskService {
    store: PostgresStore,
    ledger: LedgerService,
    clock: Arc<dyn Clock>,
}

impl AskService {
    pub fn new(store: PostgresStore, ledger: LedgerService, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            ledger,
            clock,
        }
    }

    #[instrument(skip(self, ask), fields(slug = %ask.slug))]
    pub async fn create_ask(&self, ask: NewAsk) -> Result<Ask> {
        if ask.title.trim().is_empty() {
            return Err(AskpoolError::Validation("ask title is empty".to_string()));
        }
        if ask.deadline_at <= self.clock.now() {
            return Err(AskpoolError::Validation(
                "ask deadline is in the past".to_string(),
            ));
        }
        self.require_user(ask.user_id).await?;

        let created = self.store.create_ask(&ask).await?;
        info!(ask_id = %created.id, "ask created");
        Ok(created)
    }

    pub async fn list(&self, filter: &AskFilter) -> Result<Vec<Ask>> {
        self.store.list_asks(filter).await
    }

    /// Place a bump against an open ask.
    ///
    /// The bid must meet the ask kind's minimum given the current pool,
    /// and the bidder's available balance must cover it.
    #[instrument(skip(self))]
    pub async fn place_bump(&self, ask_id: Uuid, bidder_id: Uuid, amount: i64) -> Result<Bump> {
        self.require_user(bidder_id).await?;
        let ask = self.require_ask(ask_id).await?;

        let pool = self.store.bump_pool_total(ask_id).await?;
        let min_required = min_bump_for_ask(pool, ask.ask_kind);
        let balance = self.ledger.user_balance(bidder_id).await?;

        validate_bump(ask.status, min_required, balance.available, amount)?;

        let bump = self.store.create_bump(ask_id, bidder_id, amount).await?;
        info!(bump_id = %bump.id, %ask_id, amount, "bump placed");
        Ok(bump)
    }

    /// Record an offer to fulfil an open ask
    #[instrument(skip(self, content))]
    pub async fn place_offer(&self, ask_id: Uuid, author_id: Uuid, content: &str) -> Result<Offer> {
        if content.trim().is_empty() {
            return Err(AskpoolError::Validation("offer content is empty".to_string()));
        }
        self.require_user(author_id).await?;
        let ask = self.require_ask(ask_id).await?;

        if !ask.is_open() {
            return Err(AskpoolError::AskNotOpen {
                status: ask.status.to_string(),
            });
        }

        self.store.create_offer(ask_id, author_id, content).await
    }

    /// Accept an offer on a pending-acceptance ask, moving it to active
    /// with a delivery deadline
    #[instrument(skip(self))]
    pub async fn accept_offer(
        &self,
        ask_id: Uuid,
        offer_id: Uuid,
        accepted_deadline_at: DateTime<Utc>,
    ) -> Result<()> {
        let ask = self.require_ask(ask_id).await?;

        if ask.status != AskStatus::PendingAcceptance {
            return Err(AskpoolError::InvalidStatusTransition {
                from: ask.status.to_string(),
                to: AskStatus::Active.to_string(),
            });
        }

        let offers = self.store.offers_for_ask(ask_id).await?;
        if !offers.iter().any(|o| o.id == offer_id) {
            return Err(AskpoolError::NotFound {
                entity: "offer",
                id: offer_id.to_string(),
            });
        }

        self.store.activate_ask(ask_id, accepted_deadline_at).await?;
        info!(%ask_id, %offer_id, "offer accepted");
        Ok(())
    }

    /// Expire open asks whose deadline has passed. Intended to be driven
    /// periodically by the enclosing layer.
    pub async fn expire_overdue(&self) -> Result<u64> {
        let expired = self.store.expire_overdue_asks(self.clock.now()).await?;
        if expired > 0 {
            info!(expired, "expired overdue asks");
        }
        Ok(expired)
    }

    async fn require_user(&self, user_id: Uuid) -> Result<()> {
        self.store
            .get_user(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AskpoolError::NotFound {
                entity: "user",
                id: user_id.to_string(),
            })
    }

    async fn require_ask(&self, ask_id: Uuid) -> Result<Ask> {
        self.store
            .get_ask(ask_id)
            .await?
            .ok_or_else(|| AskpoolError::NotFound {
                entity: "ask",
                id: ask_id.to_string(),
            })
    }
}

/// Bump admission rules, separated from storage for testability
fn validate_bump(
    status: AskStatus,
    min_required: Decimal,
    available: Decimal,
    amount: i64,
) -> Result<()> {
    if !status.is_open() {
        return Err(AskpoolError::AskNotOpen {
            status: status.to_string(),
        });
    }

    let offered = Decimal::from(amount);
    if amount <= 0 {
        return Err(AskpoolError::Validation(
            "bump amount must be positive".to_string(),
        ));
    }
    if offered < min_required {
        return Err(AskpoolError::BelowMinimumBump {
            required: min_required,
            offered,
        });
    }
    if available < offered {
        return Err(AskpoolError::InsufficientBalance {
            available,
            required: offered,
        });
    }

    Ok(())
}
