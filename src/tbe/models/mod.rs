mod account;
mod client;
mod history;
mod policy;
mod statement;
mod transaction;

pub use account::{Account, OperationError, BRANCH};
pub use client::Client;
pub use history::{History, HistoryEntry};
pub use policy::WithdrawalPolicy;
pub use statement::{AccountStatement, AccountSummary, StatementLine};
pub use transaction::{Transaction, TransactionKind};
