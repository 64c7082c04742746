use crate::common::money::Money;

/// The two mutually exclusive classifications of a posted monetary entry.
///
/// Sign convention is uniform across the whole engine: a debit increases a
/// balance, a credit decreases it. Callers representing credit-normal
/// accounts (e.g. liabilities) negate externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Debit,
    Credit,
}

impl EntryKind {
    /// Normalized lowercase name, matching the CSV `kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Debit => "debit",
            EntryKind::Credit => "credit",
        }
    }
}

/// A single entry handed to the engine for posting. Passed by value; the
/// engine accumulates its amount and does not retain the entry itself.
#[derive(Debug, Clone)]
pub struct Entry {
    pub account: String,
    pub kind: EntryKind,
    pub amount: Money,
}

impl Entry {
    pub fn new(account: impl Into<String>, kind: EntryKind, amount: Money) -> Self {
        Self {
            account: account.into(),
            kind,
            amount,
        }
    }
}
