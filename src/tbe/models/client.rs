use super::{Account, Transaction};

use crate::ids::{AccountId, ClientId, TaxId};
use crate::Result;

/// A bank client. Accounts are referenced by id; the store owns them.
///
/// The birth date and address are free-form descriptive data and are not
/// validated.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: ClientId,
    pub tax_id: TaxId,
    pub full_name: String,
    pub birth_date: String,
    pub address: String,
    accounts: Vec<AccountId>,
}

impl Client {
    pub fn new(
        id: ClientId,
        tax_id: TaxId,
        full_name: String,
        birth_date: String,
        address: String,
    ) -> Self {
        return Self {
            id,
            tax_id,
            full_name,
            birth_date,
            address,
            accounts: Vec::new(),
        };
    }

    pub fn add_account(&mut self, account_id: AccountId) {
        self.accounts.push(account_id);
    }

    pub fn accounts(&self) -> &[AccountId] {
        return &self.accounts;
    }

    /// The account operations act on. A client may hold several accounts,
    /// but the teller always operates on the first one.
    pub fn first_account(&self) -> Option<AccountId> {
        return self.accounts.first().copied();
    }

    /// Sole entry point by which the outside world drives the core. The
    /// outcome is observed through the account's balance and history.
    pub fn initiate_transaction(&self, account: &mut Account, transaction: &Transaction) -> Result {
        log::debug!(
            "Client {} initiating {} of {} on account {}",
            self.id,
            transaction.kind(),
            transaction.amount(),
            account.id()
        );

        return transaction.register(account);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Money;

    const SOME_CLIENT_ID: ClientId = ClientId(1);
    const SOME_ACCOUNT_ID: AccountId = AccountId(10);
    const OTHER_ACCOUNT_ID: AccountId = AccountId(11);

    fn build_client() -> Client {
        return Client::new(
            SOME_CLIENT_ID,
            TaxId("12345678900".to_string()),
            "Maria Silva".to_string(),
            "01-02-1990".to_string(),
            "Main St 1 - Springfield/SP".to_string(),
        );
    }

    #[test]
    fn add_account_keeps_insertion_order_and_allows_duplicates() {
        let mut client = build_client();
        assert!(client.first_account().is_none());

        client.add_account(SOME_ACCOUNT_ID);
        client.add_account(OTHER_ACCOUNT_ID);
        client.add_account(SOME_ACCOUNT_ID);

        assert_eq!(
            client.accounts(),
            &[SOME_ACCOUNT_ID, OTHER_ACCOUNT_ID, SOME_ACCOUNT_ID]
        );
        assert_eq!(client.first_account(), Some(SOME_ACCOUNT_ID));
    }

    #[test]
    fn initiate_transaction_delegates_to_register() {
        let client = build_client();
        let mut account = Account::new(SOME_ACCOUNT_ID, SOME_CLIENT_ID);

        client
            .initiate_transaction(&mut account, &Transaction::deposit(Money(5000)))
            .unwrap();

        assert_eq!(account.balance(), Money(5000));
        assert_eq!(account.history().len(), 1);

        let outcome =
            client.initiate_transaction(&mut account, &Transaction::withdrawal(Money(9000)));

        assert!(outcome.is_err());
        assert_eq!(account.balance(), Money(5000));
        assert_eq!(account.history().len(), 1);
    }
}
