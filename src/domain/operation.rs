use serde::Serialize;
use uuid::Uuid;

use super::Cents;

pub type OperationId = Uuid;

/// Direction of an operation. The stored amount is always a magnitude;
/// the sign comes from the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperationKind {
    Income,
    Expense,
}

impl OperationKind {
    pub fn from_is_income(is_income: bool) -> Self {
        if is_income {
            OperationKind::Income
        } else {
            OperationKind::Expense
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Income => "Income",
            OperationKind::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The closed set of labels an operation can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Salary,
    Food,
    Transport,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Salary, Category::Food, Category::Transport];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Food => "Food",
            Category::Transport => "Transport",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "salary" => Some(Category::Salary),
            "food" => Some(Category::Food),
            "transport" => Some(Category::Transport),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded income or expense entry.
/// Operations are immutable once created; the ledger only appends and removes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    id: OperationId,
    /// Amount in cents (never negative)
    amount_cents: Cents,
    category: Category,
    kind: OperationKind,
}

impl Operation {
    /// Build an operation with a fresh id. The amount must already be validated.
    pub(crate) fn new(amount_cents: Cents, category: Category, kind: OperationKind) -> Self {
        debug_assert!(amount_cents >= 0, "Operation amount must not be negative");
        Self {
            id: Uuid::new_v4(),
            amount_cents,
            category,
            kind,
        }
    }

    pub(crate) fn regenerate_id(&mut self) {
        self.id = Uuid::new_v4();
    }

    pub fn id(&self) -> OperationId {
        self.id
    }

    pub fn amount_cents(&self) -> Cents {
        self.amount_cents
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }
}
