use super::TransactionKind;

use crate::Money;

use std::fmt;

use serde::Serialize;

/// One rendered statement row: the entry's kind, amount, and formatted
/// timestamp at the time it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementLine {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: String,
}

/// Ordered view over one account's history plus its closing balance.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountStatement {
    pub lines: Vec<StatementLine>,
    pub balance: Money,
}

impl fmt::Display for AccountStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "______________STATEMENT______________")?;

        if self.lines.is_empty() {
            writeln!(f, "No movements recorded")?;
        } else {
            for line in &self.lines {
                writeln!(
                    f,
                    "{}:\t-------------\tR$ {}\t({})",
                    line.kind, line.amount, line.timestamp
                )?;
            }
        }

        writeln!(f, "Balance:\t-------------\tR$ {}", self.balance)?;
        return write!(f, "_____________________________________");
    }
}

/// Row of the account listing report.
#[derive(Serialize, Debug, PartialEq)]
pub struct AccountSummary {
    pub branch: String,
    pub number: String,
    pub holder: String,
    pub balance: String,
}
