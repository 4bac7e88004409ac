use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a wallet transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Invoice,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Invoice => "INVOICE",
            TransactionKind::Withdrawal => "WITHDRAWAL",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = String;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s {
            "INVOICE" => Ok(TransactionKind::Invoice),
            "WITHDRAWAL" => Ok(TransactionKind::Withdrawal),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

/// Settlement state of a wallet transaction.
///
/// Only the external settlement collaborator moves a transaction out of
/// Pending; this crate reads the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Settled,
    Failed,
    Expired,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Settled => "SETTLED",
            TransactionStatus::Failed => "FAILED",
            TransactionStatus::Expired => "EXPIRED",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for TransactionStatus {
    type Error = String;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s {
            "PENDING" => Ok(TransactionStatus::Pending),
            "SETTLED" => Ok(TransactionStatus::Settled),
            "FAILED" => Ok(TransactionStatus::Failed),
            "EXPIRED" => Ok(TransactionStatus::Expired),
            _ => Err(format!("Unknown transaction status: {}", s)),
        }
    }
}

/// A wallet movement request and its settlement outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub transaction_kind: TransactionKind,
    pub transaction_status: TransactionStatus,
    /// Milli-satoshis, stamped by the settlement collaborator
    pub msats_settled: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Settled amount with direction applied: invoices credit, withdrawals
    /// debit. None while unsettled.
    pub fn signed_msats(&self) -> Option<i64> {
        let msats = self.msats_settled?;
        match self.transaction_kind {
            TransactionKind::Invoice => Some(msats),
            TransactionKind::Withdrawal => Some(-msats),
        }
    }
}
