use tracing::{info, warn};

use crate::domain::{Category, Ledger, Operation, OperationId, OperationKind};

use super::{AggregateSnapshot, AppError, summarize};

/// Owns the ledger for one user session and exposes the use cases the
/// presentation layer drives. Dropping the session drops its ledger.
#[derive(Debug, Default)]
pub struct Session {
    ledger: Ledger,
}

/// The read-only payload handed to the statistics view.
/// It carries a copy of the totals taken when the view was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsView {
    snapshot: AggregateSnapshot,
}

impl StatisticsView {
    pub fn snapshot(&self) -> AggregateSnapshot {
        self.snapshot
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an operation from raw form input.
    ///
    /// `category` is matched case-insensitively against the allowed categories
    /// before the amount is looked at.
    pub fn add_operation<'a>(
        &mut self,
        raw_amount: impl Into<Option<&'a str>>,
        category: &str,
        is_income: bool,
    ) -> Result<Operation, AppError> {
        let category = Category::from_str(category).ok_or_else(|| {
            warn!(category, "rejected operation with unknown category");
            AppError::UnknownCategory(category.to_string())
        })?;

        self.ledger
            .add(raw_amount, category, OperationKind::from_is_income(is_income))
            .map_err(|reason| {
                warn!(%reason, "rejected operation");
                AppError::from(reason)
            })
    }

    /// Delete an operation. Deleting an unknown id is not an error.
    pub fn delete_operation(&mut self, id: OperationId) -> Option<Operation> {
        self.ledger.remove(id)
    }

    pub fn operations(&self) -> &[Operation] {
        self.ledger.list_all()
    }

    /// Live totals, recomputed from the current ledger.
    pub fn totals(&self) -> AggregateSnapshot {
        summarize(&self.ledger)
    }

    /// Freeze the current totals for the statistics view.
    pub fn view_statistics(&self) -> StatisticsView {
        let snapshot = self.totals();
        info!(
            total_income = snapshot.total_income,
            total_expenses = snapshot.total_expenses,
            balance = snapshot.balance,
            "statistics snapshot handed off"
        );
        StatisticsView { snapshot }
    }
}
