//! Wallet balances and transaction history.
//!
//! Each wallet lives in its own [`DashMap`] entry. A credit or debit
//! holds that entry's lock for the whole check-and-update, so two
//! concurrent debits can never both spend the same balance.

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::LedgerError;
use crate::rounding::round_cents;
use crate::transaction::{Transaction, TransactionKind};

#[derive(Debug, Default)]
struct Wallet {
    balance: f64,
    history: Vec<Transaction>,
}

/// Owns every wallet balance and its transaction log.
#[derive(Debug, Default)]
pub struct LedgerService {
    wallets: DashMap<String, Wallet>,
}

/// Rounds to cents, then requires a positive result.
fn check_amount(amount: f64) -> Result<f64, LedgerError> {
    let rounded = round_cents(amount);
    if rounded.is_finite() && rounded > 0.0 {
        Ok(rounded)
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}

impl LedgerService {
    pub fn new() -> LedgerService {
        LedgerService::default()
    }

    /// Opens a wallet. A positive opening balance is recorded as a
    /// credit.
    pub fn open_wallet(&self, wallet_id: &str, opening_balance: f64) -> Result<(), LedgerError> {
        if !opening_balance.is_finite() || opening_balance < 0.0 {
            return Err(LedgerError::InvalidAmount(opening_balance));
        }
        match self.wallets.entry(wallet_id.to_string()) {
            Entry::Occupied(_) => Err(LedgerError::WalletExists(wallet_id.to_string())),
            Entry::Vacant(slot) => {
                let mut wallet = Wallet::default();
                let opening_balance = round_cents(opening_balance);
                if opening_balance > 0.0 {
                    apply(
                        wallet_id,
                        &mut wallet,
                        TransactionKind::Credit,
                        opening_balance,
                        "opening balance",
                    );
                }
                slot.insert(wallet);
                info!("Opened wallet {} with {:.2}", wallet_id, opening_balance);
                Ok(())
            }
        }
    }

    pub fn credit(
        &self,
        wallet_id: &str,
        amount: f64,
        reference: &str,
    ) -> Result<Transaction, LedgerError> {
        let amount = check_amount(amount)?;
        let mut wallet = self
            .wallets
            .get_mut(wallet_id)
            .ok_or_else(|| LedgerError::WalletNotFound(wallet_id.to_string()))?;
        let transaction = apply(
            wallet_id,
            &mut wallet,
            TransactionKind::Credit,
            amount,
            reference,
        );
        debug!("credit: {:?}", transaction);
        Ok(transaction)
    }

    /// Debits `amount` if the balance covers it.
    ///
    /// # Errors
    /// [`LedgerError::InsufficientFunds`] leaves the wallet unchanged.
    pub fn debit(
        &self,
        wallet_id: &str,
        amount: f64,
        reference: &str,
    ) -> Result<Transaction, LedgerError> {
        let amount = check_amount(amount)?;
        let mut wallet = self
            .wallets
            .get_mut(wallet_id)
            .ok_or_else(|| LedgerError::WalletNotFound(wallet_id.to_string()))?;
        if amount > wallet.balance {
            warn!(
                "Rejected debit of {:.2} from wallet {} (balance {:.2})",
                amount, wallet_id, wallet.balance
            );
            return Err(LedgerError::InsufficientFunds {
                wallet_id: wallet_id.to_string(),
                balance: wallet.balance,
                requested: amount,
            });
        }
        let transaction = apply(
            wallet_id,
            &mut wallet,
            TransactionKind::Debit,
            amount,
            reference,
        );
        debug!("debit: {:?}", transaction);
        Ok(transaction)
    }

    pub fn balance(&self, wallet_id: &str) -> Result<f64, LedgerError> {
        self.wallets
            .get(wallet_id)
            .map(|wallet| wallet.balance)
            .ok_or_else(|| LedgerError::WalletNotFound(wallet_id.to_string()))
    }

    /// Transactions of a wallet, oldest first.
    pub fn history(&self, wallet_id: &str) -> Result<Vec<Transaction>, LedgerError> {
        self.wallets
            .get(wallet_id)
            .map(|wallet| wallet.history.clone())
            .ok_or_else(|| LedgerError::WalletNotFound(wallet_id.to_string()))
    }
}

/// Applies a validated change. The caller holds the wallet lock.
fn apply(
    wallet_id: &str,
    wallet: &mut Wallet,
    kind: TransactionKind,
    amount: f64,
    reference: &str,
) -> Transaction {
    wallet.balance = match kind {
        TransactionKind::Credit => round_cents(wallet.balance + amount),
        TransactionKind::Debit => round_cents(wallet.balance - amount),
    };
    let transaction = Transaction {
        id: Uuid::new_v4(),
        wallet_id: wallet_id.to_string(),
        kind,
        amount,
        balance_after: wallet.balance,
        reference: reference.to_string(),
        created_at: Utc::now(),
    };
    wallet.history.push(transaction.clone());
    transaction
}

#[cfg(test)]
mod ledger_tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_open_and_credit() {
        let ledger = LedgerService::new();
        ledger.open_wallet("farmer_1", 100.0).unwrap();
        let tx = ledger.credit("farmer_1", 50.25, "top-up").unwrap();
        assert_eq!(tx.kind, TransactionKind::Credit);
        assert_eq!(tx.balance_after, 150.25);
        assert_eq!(ledger.balance("farmer_1").unwrap(), 150.25);
        assert_eq!(ledger.history("farmer_1").unwrap().len(), 2);
    }

    #[test]
    fn test_open_twice() {
        let ledger = LedgerService::new();
        ledger.open_wallet("farmer_1", 0.0).unwrap();
        assert_eq!(
            ledger.open_wallet("farmer_1", 10.0),
            Err(LedgerError::WalletExists("farmer_1".to_string()))
        );
        assert!(ledger.history("farmer_1").unwrap().is_empty());
    }

    #[test]
    fn test_debit_checks_balance() {
        let ledger = LedgerService::new();
        ledger.open_wallet("farmer_1", 100.0).unwrap();
        let tx = ledger.debit("farmer_1", 66.0, "CK-2024-000001").unwrap();
        assert_eq!(tx.balance_after, 34.0);

        let err = ledger.debit("farmer_1", 34.01, "CK-2024-000002").unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                wallet_id: "farmer_1".to_string(),
                balance: 34.0,
                requested: 34.01,
            }
        );
        assert_eq!(ledger.balance("farmer_1").unwrap(), 34.0);
        assert_eq!(ledger.history("farmer_1").unwrap().len(), 2);

        ledger.debit("farmer_1", 34.0, "CK-2024-000003").unwrap();
        assert_eq!(ledger.balance("farmer_1").unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_amounts() {
        let ledger = LedgerService::new();
        ledger.open_wallet("farmer_1", 10.0).unwrap();
        assert!(matches!(
            ledger.credit("farmer_1", 0.0, ""),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            ledger.debit("farmer_1", -5.0, ""),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            ledger.credit("farmer_1", f64::INFINITY, ""),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            ledger.open_wallet("farmer_2", -1.0),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_sub_cent_amounts_rejected() {
        let ledger = LedgerService::new();
        ledger.open_wallet("farmer_1", 10.0).unwrap();
        assert_eq!(
            ledger.debit("farmer_1", 0.004, "dust"),
            Err(LedgerError::InvalidAmount(0.004))
        );
        assert_eq!(
            ledger.credit("farmer_1", 0.004, "dust"),
            Err(LedgerError::InvalidAmount(0.004))
        );
        assert_eq!(ledger.balance("farmer_1").unwrap(), 10.0);
        assert_eq!(ledger.history("farmer_1").unwrap().len(), 1);

        let tx = ledger.debit("farmer_1", 0.005, "smallest").unwrap();
        assert_eq!(tx.amount, 0.01);
    }

    #[test]
    fn test_unknown_wallet() {
        let ledger = LedgerService::new();
        assert_eq!(
            ledger.balance("ghost"),
            Err(LedgerError::WalletNotFound("ghost".to_string()))
        );
        assert!(ledger.debit("ghost", 1.0, "").is_err());
    }

    #[test]
    fn test_concurrent_debits_never_overdraw() {
        let ledger = Arc::new(LedgerService::new());
        ledger.open_wallet("shared", 100.0).unwrap();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || {
                    (0..10)
                        .filter(|j| ledger.debit("shared", 1.0, &format!("{}-{}", i, j)).is_ok())
                        .count()
                })
            })
            .collect();
        let succeeded: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(succeeded, 100);
        assert_eq!(ledger.balance("shared").unwrap(), 0.0);
        // opening credit plus one debit per success
        assert_eq!(ledger.history("shared").unwrap().len(), 101);
    }
}
