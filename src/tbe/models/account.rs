use super::{History, WithdrawalPolicy};

use crate::ids::{AccountId, ClientId};
use crate::{Money, Result};

use thiserror::Error;

/// Branch tag shared by every account in this system.
pub const BRANCH: &str = "0001";

/// A rejected deposit or withdrawal. These are business outcomes, not
/// failures: the account is always left exactly as it was.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OperationError {
    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("Insufficient funds: balance is {balance}, requested {requested}")]
    InsufficientFunds { balance: Money, requested: Money },

    #[error("Requested amount is above the per-withdrawal limit of {limit}")]
    OverOperationLimit { limit: Money },

    #[error("Withdrawal count limit of {limit} reached")]
    WithdrawalCountExceeded { limit: usize },
}

/// A balance-holding account owned by exactly one client.
///
/// A checking account is an `Account` carrying a withdrawal policy; there is
/// no separate type for it.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    owner: ClientId,
    balance: Money,
    history: History,
    policy: Option<WithdrawalPolicy>,
}

impl Account {
    pub fn new(id: AccountId, owner: ClientId) -> Self {
        return Self {
            id,
            owner,
            balance: Money(0),
            history: History::new(),
            policy: None,
        };
    }

    pub fn new_checking(id: AccountId, owner: ClientId) -> Self {
        let mut account = Self::new(id, owner);
        account.policy = Some(WithdrawalPolicy::default());

        return account;
    }

    pub fn id(&self) -> AccountId {
        return self.id;
    }

    pub fn branch(&self) -> &'static str {
        return BRANCH;
    }

    pub fn owner(&self) -> ClientId {
        return self.owner;
    }

    pub fn balance(&self) -> Money {
        return self.balance;
    }

    pub fn history(&self) -> &History {
        return &self.history;
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        return &mut self.history;
    }

    /// Increases the balance. The only rule is that the amount must be
    /// positive; no policy applies to deposits.
    pub fn deposit(&mut self, amount: Money) -> Result {
        if !amount.is_positive() {
            log::warn!(
                "Rejected deposit of {} on account {}: non-positive amount",
                amount,
                self.id
            );
            Err(OperationError::InvalidAmount)?
        }

        self.balance.add(&amount)?;

        log::debug!(
            "Deposited {} on account {}, balance now {}",
            amount,
            self.id,
            self.balance
        );

        return Ok(());
    }

    /// Decreases the balance. The withdrawal policy, when present, is checked
    /// before the base rules; the balance can never go negative.
    pub fn withdraw(&mut self, amount: Money) -> Result {
        if let Some(policy) = &self.policy {
            policy.check(amount, &self.history)?;
        }

        if !amount.is_positive() {
            log::warn!(
                "Rejected withdrawal of {} on account {}: non-positive amount",
                amount,
                self.id
            );
            Err(OperationError::InvalidAmount)?
        }

        if amount > self.balance {
            log::warn!(
                "Rejected withdrawal of {} on account {}: balance is {}",
                amount,
                self.id,
                self.balance
            );
            Err(OperationError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            })?
        }

        self.balance.sub(&amount)?;

        log::debug!(
            "Withdrew {} from account {}, balance now {}",
            amount,
            self.id,
            self.balance
        );

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{Transaction, TransactionKind};

    const SOME_ACCOUNT_ID: AccountId = AccountId(1);
    const SOME_CLIENT_ID: ClientId = ClientId(40);

    fn unwrap_operation_error(err: anyhow::Error) -> OperationError {
        return err.downcast::<OperationError>().unwrap();
    }

    #[test]
    fn deposit_increases_balance() {
        let mut account = Account::new(SOME_ACCOUNT_ID, SOME_CLIENT_ID);

        account.deposit(Money(20000)).unwrap();
        account.deposit(Money(50)).unwrap();

        assert_eq!(account.balance(), Money(20050));
    }

    #[test]
    fn deposit_rejects_non_positive_amounts() {
        let mut account = Account::new(SOME_ACCOUNT_ID, SOME_CLIENT_ID);

        let err = account.deposit(Money(0)).unwrap_err();
        assert_eq!(unwrap_operation_error(err), OperationError::InvalidAmount);

        let err = account.deposit(Money(-100)).unwrap_err();
        assert_eq!(unwrap_operation_error(err), OperationError::InvalidAmount);

        assert_eq!(account.balance(), Money(0));
    }

    #[test]
    fn withdraw_decreases_balance() {
        let mut account = Account::new(SOME_ACCOUNT_ID, SOME_CLIENT_ID);
        account.deposit(Money(20000)).unwrap();

        account.withdraw(Money(5000)).unwrap();

        assert_eq!(account.balance(), Money(15000));
    }

    #[test]
    fn withdraw_rejects_more_than_balance() {
        let mut account = Account::new(SOME_ACCOUNT_ID, SOME_CLIENT_ID);
        account.deposit(Money(10000)).unwrap();

        let err = account.withdraw(Money(10001)).unwrap_err();

        assert_eq!(
            unwrap_operation_error(err),
            OperationError::InsufficientFunds {
                balance: Money(10000),
                requested: Money(10001),
            }
        );
        assert_eq!(account.balance(), Money(10000));
    }

    #[test]
    fn withdraw_rejects_non_positive_amounts() {
        let mut account = Account::new(SOME_ACCOUNT_ID, SOME_CLIENT_ID);
        account.deposit(Money(10000)).unwrap();

        let err = account.withdraw(Money(-1000)).unwrap_err();

        assert_eq!(unwrap_operation_error(err), OperationError::InvalidAmount);
        assert_eq!(account.balance(), Money(10000));
    }

    #[test]
    fn balance_never_goes_negative() {
        let mut account = Account::new(SOME_ACCOUNT_ID, SOME_CLIENT_ID);

        let amounts = [
            Money(5000),
            Money(-100),
            Money(7000),
            Money(5001),
            Money(2000),
        ];

        for amount in amounts {
            let _ = account.withdraw(amount);
            assert!(account.balance() >= Money(0));
        }
    }

    #[test]
    fn checking_account_end_to_end() {
        let mut account = Account::new_checking(SOME_ACCOUNT_ID, SOME_CLIENT_ID);

        Transaction::deposit(Money(20000))
            .register(&mut account)
            .unwrap();
        assert_eq!(account.balance(), Money(20000));
        assert_eq!(account.history().len(), 1);

        Transaction::withdrawal(Money(5000))
            .register(&mut account)
            .unwrap();
        assert_eq!(account.balance(), Money(15000));
        assert_eq!(account.history().len(), 2);

        let err = Transaction::withdrawal(Money(-1000))
            .register(&mut account)
            .unwrap_err();
        assert_eq!(unwrap_operation_error(err), OperationError::InvalidAmount);
        assert_eq!(account.balance(), Money(15000));
        assert_eq!(account.history().len(), 2);
    }

    #[test]
    fn history_order_matches_application_order() {
        let mut account = Account::new(SOME_ACCOUNT_ID, SOME_CLIENT_ID);

        Transaction::deposit(Money(100))
            .register(&mut account)
            .unwrap();
        Transaction::deposit(Money(300))
            .register(&mut account)
            .unwrap();
        Transaction::withdrawal(Money(200))
            .register(&mut account)
            .unwrap();
        Transaction::deposit(Money(50))
            .register(&mut account)
            .unwrap();

        let recorded: Vec<(TransactionKind, Money)> = account
            .history()
            .entries()
            .iter()
            .map(|entry| (entry.kind, entry.amount))
            .collect();

        assert_eq!(
            recorded,
            vec![
                (TransactionKind::Deposit, Money(100)),
                (TransactionKind::Deposit, Money(300)),
                (TransactionKind::Withdrawal, Money(200)),
                (TransactionKind::Deposit, Money(50)),
            ]
        );
    }
}
