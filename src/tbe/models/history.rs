use super::TransactionKind;

use crate::Money;

use chrono::{DateTime, Local};

/// One record of a successfully applied transaction. Entries are only ever
/// created by [`History::record`] and never change after that.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: DateTime<Local>,
}

/// Append-only log of applied transactions for one account.
/// Insertion order is chronological order; entries are never reordered or
/// deleted.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, kind: TransactionKind, amount: Money) {
        self.entries.push(HistoryEntry {
            kind,
            amount,
            timestamp: Local::now(),
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn withdrawal_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == TransactionKind::Withdrawal)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
