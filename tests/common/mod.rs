// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use tally::{Category, Ledger, OperationId, OperationKind};

/// Ids of the ledger's operations in order.
pub fn ids(ledger: &Ledger) -> Vec<OperationId> {
    ledger.iter().map(|op| op.id()).collect()
}

/// Test fixture: a ledger with a mix of incomes and expenses.
/// Totals: income 1250.50, expenses 87.25, balance 1163.25
pub fn mixed_ledger() -> Result<Ledger> {
    let mut ledger = Ledger::new();
    ledger.add("1200", Category::Salary, OperationKind::Income)?;
    ledger.add("50.50", Category::Salary, OperationKind::Income)?;
    ledger.add("62", Category::Food, OperationKind::Expense)?;
    ledger.add("25.25", Category::Transport, OperationKind::Expense)?;
    Ok(ledger)
}
