use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Cents, Ledger, OperationKind};

/// Point-in-time totals derived from a ledger.
/// It is a plain value: once produced it never observes later ledger changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSnapshot {
    pub total_income: Cents,
    pub total_expenses: Cents,
    pub balance: Cents,
}

impl AggregateSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Compute income, expenses and balance from the ledger's current contents.
/// Amounts are integer cents, so the result does not depend on operation order.
pub fn summarize(ledger: &Ledger) -> AggregateSnapshot {
    let total_income = ledger.total_for(OperationKind::Income);
    let total_expenses = ledger.total_for(OperationKind::Expense);

    // Both totals lie in 0..=i64::MAX, so the difference cannot overflow.
    let snapshot = AggregateSnapshot {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    };
    debug!(
        operations = ledger.len(),
        total_income,
        total_expenses,
        balance = snapshot.balance,
        "ledger summarized"
    );
    snapshot
}
