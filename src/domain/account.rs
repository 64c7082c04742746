use crate::common::{entry::EntryKind, money::Money};

/// Per-account accumulator. Both sums only ever grow; entries are never
/// retracted, so the pair is monotonically non-decreasing over the account's
/// lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountTotals {
    /// Sum of all debit amounts posted to this account.
    pub debit_sum: Money,
    /// Sum of all credit amounts posted to this account.
    pub credit_sum: Money,
}

impl AccountTotals {
    pub fn new() -> Self {
        Self {
            debit_sum: Money::zero(),
            credit_sum: Money::zero(),
        }
    }

    /// Current balance, debit-positive: `debit_sum - credit_sum`.
    pub fn balance(&self) -> Money {
        self.debit_sum - self.credit_sum
    }

    /// Balance this account would have after one more entry, without
    /// mutating. A zero delta returns the current balance under either kind.
    pub fn project(&self, kind: EntryKind, delta: Money) -> Money {
        match kind {
            EntryKind::Debit => self.balance() + delta,
            EntryKind::Credit => self.balance() - delta,
        }
    }
}
