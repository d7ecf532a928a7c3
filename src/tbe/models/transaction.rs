use super::Account;

use crate::Money;
use crate::Result;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
        };
    }
}

/// A single requested money movement. The amount is fixed at construction
/// and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Money,
}

impl Transaction {
    pub fn deposit(amount: Money) -> Self {
        return Self {
            kind: TransactionKind::Deposit,
            amount,
        };
    }

    pub fn withdrawal(amount: Money) -> Self {
        return Self {
            kind: TransactionKind::Withdrawal,
            amount,
        };
    }

    pub fn kind(&self) -> TransactionKind {
        return self.kind;
    }

    pub fn amount(&self) -> Money {
        return self.amount;
    }

    /// Applies this transaction to `account`.
    ///
    /// On success the account's history gains exactly one entry. On rejection
    /// the account is left untouched: no balance change, no history entry.
    pub fn register(&self, account: &mut Account) -> Result {
        match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount)?,
            TransactionKind::Withdrawal => account.withdraw(self.amount)?,
        }

        account.history_mut().record(self.kind, self.amount);

        log::debug!(
            "Recorded {} of {} on account {}",
            self.kind,
            self.amount,
            account.id()
        );

        return Ok(());
    }
}
