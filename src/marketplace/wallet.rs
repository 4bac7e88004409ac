use rust_decimal::Decimal;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::adapters::PostgresStore;
use crate::domain::{Transaction, TransactionKind};
use crate::error::{AskpoolError, Result};
use crate::ledger::LedgerService;

/// Invoice and withdrawal requests, gated by the ledger policies.
///
/// Both paths insert a PENDING transaction; settlement (status and
/// amount) is stamped later by the external settlement collaborator.
pub struct WalletService {
    store: PostgresStore,
    ledger: LedgerService,
}

impl WalletService {
    pub fn new(store: PostgresStore, ledger: LedgerService) -> Self {
        Self { store, ledger }
    }

    /// Request a funding invoice.
    ///
    /// Blocked while the user holds too many unresolved invoices in the
    /// trailing window, or inside the settled-invoice cooldown.
    #[instrument(skip(self))]
    pub async fn request_invoice(&self, user_id: Uuid) -> Result<Transaction> {
        self.require_user(user_id).await?;

        if !self.ledger.below_invoice_limit(user_id).await? {
            return Err(AskpoolError::RateLimited(
                "too many unresolved invoices".to_string(),
            ));
        }
        if self
            .ledger
            .recent_settled_transaction(user_id, TransactionKind::Invoice)
            .await?
        {
            return Err(AskpoolError::RateLimited(
                "an invoice settled too recently".to_string(),
            ));
        }

        let tx = self
            .store
            .create_transaction(user_id, TransactionKind::Invoice)
            .await?;
        info!(transaction_id = %tx.id, "invoice requested");
        Ok(tx)
    }

    /// Request a withdrawal of `amount_sats` from the available balance.
    ///
    /// Blocked inside the settled-withdrawal cooldown or when the
    /// available balance does not cover the amount.
    #[instrument(skip(self))]
    pub async fn request_withdrawal(&self, user_id: Uuid, amount_sats: i64) -> Result<Transaction> {
        if amount_sats <= 0 {
            return Err(AskpoolError::Validation(
                "withdrawal amount must be positive".to_string(),
            ));
        }
        self.require_user(user_id).await?;

        if self
            .ledger
            .recent_settled_transaction(user_id, TransactionKind::Withdrawal)
            .await?
        {
            return Err(AskpoolError::RateLimited(
                "a withdrawal settled too recently".to_string(),
            ));
        }

        let balance = self.ledger.user_balance(user_id).await?;
        let requested = Decimal::from(amount_sats);
        if balance.available < requested {
            return Err(AskpoolError::InsufficientBalance {
                available: balance.available,
                required: requested,
            });
        }

        let tx = self
            .store
            .create_transaction(user_id, TransactionKind::Withdrawal)
            .await?;
        info!(transaction_id = %tx.id, amount_sats, "withdrawal requested");
        Ok(tx)
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
}
