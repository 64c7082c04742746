use crate::common::{entry::EntryKind, money::Money};

/// One side of a recorded transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine {
    pub account: String,
    pub kind: EntryKind,
    pub amount: Money,
}

/// Immutable audit record of a posted transaction, keyed by its reference
/// (the idempotency key). Every double-entry posting records one of these
/// with at least a debit line and a credit line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub reference: String,
    pub description: Option<String>,
    pub lines: Vec<EntryLine>,
}

impl TransactionRecord {
    pub fn new(
        reference: impl Into<String>,
        description: Option<String>,
        lines: Vec<EntryLine>,
    ) -> Self {
        Self {
            reference: reference.into(),
            description,
            lines,
        }
    }

    /// Sum of this transaction's debit lines.
    pub fn debit_total(&self) -> Money {
        self.lines
            .iter()
            .filter(|l| l.kind == EntryKind::Debit)
            .map(|l| l.amount)
            .sum()
    }

    /// Sum of this transaction's credit lines.
    pub fn credit_total(&self) -> Money {
        self.lines
            .iter()
            .filter(|l| l.kind == EntryKind::Credit)
            .map(|l| l.amount)
            .sum()
    }

    pub fn is_balanced(&self) -> bool {
        self.debit_total() == self.credit_total()
    }
}
