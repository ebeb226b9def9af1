//! Definition of the [`Transaction`] type recorded by the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum TransactionKind {
    Credit,
    Debit,
}

/// One balance change of a wallet.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub wallet_id: String,
    pub kind: TransactionKind,

    /// Always positive; the direction is given by `kind`.
    pub amount: f64,

    /// Wallet balance right after this transaction was applied.
    pub balance_after: f64,

    /// Free-form reference such as a booking code.
    pub reference: String,

    pub created_at: DateTime<Utc>,
}
