use crate::ids::{AccountId, ClientId, TaxId};
use crate::models::{
    Account, AccountStatement, AccountSummary, Client, StatementLine, Transaction,
};
use crate::{Money, Result};

use std::collections::HashMap;

use thiserror::Error;

pub type ClientStore = HashMap<ClientId, Client>;
pub type AccountStore = HashMap<AccountId, Account>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TellerError {
    #[error("Client not found for tax id {0}")]
    ClientNotFound(TaxId),

    #[error("A client is already registered under tax id {0}")]
    DuplicateTaxId(TaxId),

    #[error("Client with tax id {0} holds no account")]
    NoAccount(TaxId),

    #[error("Invalid internal store state: {0}")]
    InvalidStoreState(String),
}

/// Process-scoped registry of clients and accounts, and the entry point for
/// teller operations. Clients are looked up by tax id; money movements act on
/// the client's first account.
pub struct BankService {
    clients: ClientStore,
    accounts: AccountStore,
    tax_id_index: HashMap<TaxId, ClientId>,
    next_client_id: u32,
    next_account_id: u32,
}

impl BankService {
    pub fn new() -> Self {
        return Self {
            clients: ClientStore::new(),
            accounts: AccountStore::new(),
            tax_id_index: HashMap::new(),
            next_client_id: 1,
            next_account_id: 1,
        };
    }

    pub fn register_client(
        &mut self,
        tax_id: TaxId,
        full_name: String,
        birth_date: String,
        address: String,
    ) -> Result<ClientId> {
        if self.tax_id_index.contains_key(&tax_id) {
            Err(TellerError::DuplicateTaxId(tax_id.clone()))?
        }

        let client_id = ClientId(self.next_client_id);
        self.next_client_id += 1;

        let client = Client::new(client_id, tax_id.clone(), full_name, birth_date, address);

        log::debug!("Registering client {client_id} under tax id {tax_id}");

        self.clients.insert(client_id, client);
        self.tax_id_index.insert(tax_id, client_id);

        return Ok(client_id);
    }

    /// Opens a checking account for the client, assigning the next free
    /// account number and linking it both ways.
    pub fn open_checking_account(&mut self, tax_id: &TaxId) -> Result<AccountId> {
        let client_id = self.client_id_for(tax_id)?;

        let account_id = AccountId(self.next_account_id);
        self.next_account_id += 1;

        let account = Account::new_checking(account_id, client_id);

        log::debug!("Opening checking account {account_id} for client {client_id}");

        self.accounts.insert(account_id, account);

        let client = self.client_mut(client_id)?;
        client.add_account(account_id);

        return Ok(account_id);
    }

    pub fn find_client(&self, tax_id: &TaxId) -> Result<&Client> {
        let client_id = self.client_id_for(tax_id)?;

        return self.clients.get(&client_id).ok_or_else(|| {
            TellerError::InvalidStoreState(format!(
                "Tax id index points at missing client {client_id}"
            ))
            .into()
        });
    }

    pub fn deposit(&mut self, tax_id: &TaxId, amount: Money) -> Result {
        return self.transact(tax_id, Transaction::deposit(amount));
    }

    pub fn withdraw(&mut self, tax_id: &TaxId, amount: Money) -> Result {
        return self.transact(tax_id, Transaction::withdrawal(amount));
    }

    /// Ordered movement history plus closing balance for the client's first
    /// account.
    pub fn statement(&self, tax_id: &TaxId) -> Result<AccountStatement> {
        let client = self.find_client(tax_id)?;
        let account = self.first_account_of(client)?;

        let lines = account
            .history()
            .entries()
            .iter()
            .map(|entry| StatementLine {
                kind: entry.kind,
                amount: entry.amount,
                timestamp: entry.timestamp.format("%d/%m/%Y, %H:%M:%S").to_string(),
            })
            .collect();

        return Ok(AccountStatement {
            lines,
            balance: account.balance(),
        });
    }

    /// One summary row per account, ordered by account number.
    pub fn account_summaries(&self) -> Result<Vec<AccountSummary>> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.id());

        let mut summaries = Vec::with_capacity(accounts.len());

        for account in accounts {
            let owner = self.clients.get(&account.owner()).ok_or_else(|| {
                TellerError::InvalidStoreState(format!(
                    "Account {} is owned by missing client {}",
                    account.id(),
                    account.owner()
                ))
            })?;

            summaries.push(AccountSummary {
                branch: account.branch().to_string(),
                number: account.id().to_string(),
                holder: owner.full_name.clone(),
                balance: account.balance().to_string(),
            });
        }

        return Ok(summaries);
    }

    fn transact(&mut self, tax_id: &TaxId, transaction: Transaction) -> Result {
        let client_id = self.client_id_for(tax_id)?;

        let client = self.clients.get(&client_id).ok_or_else(|| {
            TellerError::InvalidStoreState(format!(
                "Tax id index points at missing client {client_id}"
            ))
        })?;

        let account_id = client
            .first_account()
            .ok_or_else(|| TellerError::NoAccount(tax_id.clone()))?;

        let account = self.accounts.get_mut(&account_id).ok_or_else(|| {
            TellerError::InvalidStoreState(format!(
                "Client {client_id} references missing account {account_id}"
            ))
        })?;

        return client.initiate_transaction(account, &transaction);
    }

    fn first_account_of(&self, client: &Client) -> Result<&Account> {
        let account_id = client
            .first_account()
            .ok_or_else(|| TellerError::NoAccount(client.tax_id.clone()))?;

        return self.accounts.get(&account_id).ok_or_else(|| {
            TellerError::InvalidStoreState(format!(
                "Client {} references missing account {account_id}",
                client.id
            ))
            .into()
        });
    }

    fn client_id_for(&self, tax_id: &TaxId) -> Result<ClientId> {
        return self
            .tax_id_index
            .get(tax_id)
            .copied()
            .ok_or_else(|| TellerError::ClientNotFound(tax_id.clone()).into());
    }

    fn client_mut(&mut self, client_id: ClientId) -> Result<&mut Client> {
        return self.clients.get_mut(&client_id).ok_or_else(|| {
            TellerError::InvalidStoreState(format!("Missing client {client_id}")).into()
        });
    }
}

impl Default for BankService {
    fn default() -> Self {
        return Self::new();
    }
}
