use std::fmt;

use tracing::debug;

use super::{Category, Cents, Operation, OperationId, OperationKind, parse_cents};

/// Ordered, in-memory collection of operations for a single session.
/// Insertion order is preserved and is the only ordering the ledger knows about.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    operations: Vec<Operation>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `raw_amount` and append a new operation.
    ///
    /// A missing, blank or unparseable amount is rejected with
    /// [`RejectionReason::EmptyOrInvalidAmount`]; a negative one with
    /// [`RejectionReason::NegativeAmount`]. The ledger is untouched on rejection.
    /// See [`Ledger::add_cents`] for the range check.
    pub fn add<'a>(
        &mut self,
        raw_amount: impl Into<Option<&'a str>>,
        category: Category,
        kind: OperationKind,
    ) -> Result<Operation, RejectionReason> {
        let raw_amount = raw_amount
            .into()
            .ok_or(RejectionReason::EmptyOrInvalidAmount)?;
        let amount_cents =
            parse_cents(raw_amount).map_err(|_| RejectionReason::EmptyOrInvalidAmount)?;
        self.add_cents(amount_cents, category, kind)
    }

    /// Append a new operation from an already numeric amount.
    ///
    /// The total of each kind always fits in [`Cents`]; an amount that would push
    /// it past `i64::MAX` is rejected with [`RejectionReason::AmountOutOfRange`].
    pub fn add_cents(
        &mut self,
        amount_cents: Cents,
        category: Category,
        kind: OperationKind,
    ) -> Result<Operation, RejectionReason> {
        if amount_cents < 0 {
            return Err(RejectionReason::NegativeAmount);
        }
        if self.total_for(kind).checked_add(amount_cents).is_none() {
            return Err(RejectionReason::AmountOutOfRange);
        }

        let mut operation = Operation::new(amount_cents, category, kind);
        while self.contains(operation.id()) {
            operation.regenerate_id();
        }

        debug!(
            id = %operation.id(),
            amount_cents,
            category = %category,
            kind = %kind,
            "operation added"
        );
        self.operations.push(operation.clone());
        Ok(operation)
    }

    /// Remove the operation with the given id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: OperationId) -> Option<Operation> {
        let index = self.operations.iter().position(|op| op.id() == id)?;
        let removed = self.operations.remove(index);
        debug!(id = %id, "operation removed");
        Some(removed)
    }

    /// Current operations in insertion order.
    pub fn list_all(&self) -> &[Operation] {
        &self.operations
    }

    /// Sum of amounts of the given kind. Cannot overflow, see [`Ledger::add_cents`].
    pub fn total_for(&self, kind: OperationKind) -> Cents {
        self.operations
            .iter()
            .filter(|op| op.kind() == kind)
            .map(|op| op.amount_cents())
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    pub fn get(&self, id: OperationId) -> Option<&Operation> {
        self.operations.iter().find(|op| op.id() == id)
    }

    pub fn contains(&self, id: OperationId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Why an `add` was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// Amount missing, blank, or not a parseable finite number.
    EmptyOrInvalidAmount,
    NegativeAmount,
    /// Accepting the amount would overflow the running total for its kind.
    AmountOutOfRange,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::EmptyOrInvalidAmount => {
                write!(f, "amount is empty or not a valid number")
            }
            RejectionReason::NegativeAmount => {
                write!(
                    f,
                    "amount must not be negative; use the operation type for direction"
                )
            }
            RejectionReason::AmountOutOfRange => {
                write!(f, "amount would overflow the ledger total")
            }
        }
    }
}

impl std::error::Error for RejectionReason {}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn ids(ledger: &Ledger) -> Vec<OperationId> {
        ledger.iter().map(|op| op.id()).collect()
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(ledger.list_all().is_empty());
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut ledger = Ledger::new();
        let first = ledger
            .add("100", Category::Salary, OperationKind::Income)
            .unwrap();
        let second = ledger
            .add("40", Category::Food, OperationKind::Expense)
            .unwrap();

        assert_eq!(ids(&ledger), vec![first.id(), second.id()]);
        assert_eq!(first.amount_cents(), 10000);
        assert_eq!(first.category(), Category::Salary);
        assert_eq!(first.kind(), OperationKind::Income);
        assert_eq!(ledger.get(second.id()), Some(&second));
    }

    #[test]
    fn test_add_accepts_zero() {
        let mut ledger = Ledger::new();
        let op = ledger
            .add("0", Category::Transport, OperationKind::Expense)
            .unwrap();
        assert_eq!(op.amount_cents(), 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_add_rejects_empty_and_missing() {
        let mut ledger = Ledger::new();

        assert_eq!(
            ledger.add("", Category::Salary, OperationKind::Income),
            Err(RejectionReason::EmptyOrInvalidAmount)
        );
        assert_eq!(
            ledger.add(None::<&str>, Category::Salary, OperationKind::Income),
            Err(RejectionReason::EmptyOrInvalidAmount)
        );
        assert_eq!(
            ledger.add("twelve", Category::Salary, OperationKind::Income),
            Err(RejectionReason::EmptyOrInvalidAmount)
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_rejects_negative() {
        let mut ledger = Ledger::new();
        ledger
            .add("10", Category::Food, OperationKind::Expense)
            .unwrap();

        assert_eq!(
            ledger.add("-5", Category::Salary, OperationKind::Income),
            Err(RejectionReason::NegativeAmount)
        );
        assert_eq!(
            ledger.add_cents(-1, Category::Food, OperationKind::Expense),
            Err(RejectionReason::NegativeAmount)
        );
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut ledger = Ledger::new();
        let a = ledger
            .add_cents(100, Category::Food, OperationKind::Expense)
            .unwrap();
        let b = ledger
            .add_cents(200, Category::Food, OperationKind::Expense)
            .unwrap();
        let c = ledger
            .add_cents(300, Category::Food, OperationKind::Expense)
            .unwrap();

        assert_eq!(ledger.remove(b.id()), Some(b));
        assert_eq!(ids(&ledger), vec![a.id(), c.id()]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut ledger = Ledger::new();
        let a = ledger
            .add_cents(100, Category::Salary, OperationKind::Income)
            .unwrap();

        assert_eq!(ledger.remove(Uuid::new_v4()), None);
        assert_eq!(ids(&ledger), vec![a.id()]);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let mut ledger = Ledger::new();
        let a = ledger
            .add_cents(100, Category::Salary, OperationKind::Income)
            .unwrap();
        let b = ledger
            .add_cents(50, Category::Food, OperationKind::Expense)
            .unwrap();

        ledger.remove(a.id());
        let after_once = ids(&ledger);
        assert_eq!(ledger.remove(a.id()), None);

        assert_eq!(ids(&ledger), after_once);
        assert_eq!(after_once, vec![b.id()]);
    }

    #[test]
    fn test_add_rejects_amount_overflowing_kind_total() {
        let mut ledger = Ledger::new();
        ledger
            .add_cents(i64::MAX, Category::Salary, OperationKind::Income)
            .unwrap();

        assert_eq!(
            ledger.add_cents(1, Category::Salary, OperationKind::Income),
            Err(RejectionReason::AmountOutOfRange)
        );
        // Expenses keep their own total.
        ledger
            .add_cents(i64::MAX, Category::Food, OperationKind::Expense)
            .unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total_for(OperationKind::Income), i64::MAX);
        assert_eq!(ledger.total_for(OperationKind::Expense), i64::MAX);
    }
}
