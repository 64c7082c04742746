use std::collections::HashMap;

use crate::common::{entry::EntryKind, money::Money};
use crate::domain::{account::AccountTotals, transaction::TransactionRecord};

/// The engine's whole mutable state: per-account accumulators plus the audit
/// trail of recorded transactions. Owned by exactly one caller; mutations go
/// through the posting handlers, queries live here and are pure.
#[derive(Debug, Default)]
pub struct Ledger {
    pub accounts: HashMap<String, AccountTotals>,
    pub txns: HashMap<String, TransactionRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            txns: HashMap::new(),
        }
    }

    pub fn accounts(&self) -> &HashMap<String, AccountTotals> {
        &self.accounts
    }

    pub fn get_or_create_account(&mut self, account: &str) -> &mut AccountTotals {
        self.accounts
            .entry(account.to_string())
            .or_insert_with(AccountTotals::new)
    }

    /// Current balance of an account, debit-positive. An account the ledger
    /// has never seen has implicit zero totals and therefore balance zero.
    pub fn balance(&self, account: &str) -> Money {
        self.accounts
            .get(account)
            .map(AccountTotals::balance)
            .unwrap_or_else(Money::zero)
    }

    /// Balance the account would have after one additional entry, without
    /// committing it. Used for previews (e.g. a payment preview before the
    /// posting is written).
    pub fn project_balance(&self, account: &str, kind: EntryKind, delta: Money) -> Money {
        match self.accounts.get(account) {
            Some(totals) => totals.project(kind, delta),
            None => AccountTotals::new().project(kind, delta),
        }
    }

    /// Ledger-wide consistency check: sum of all debit totals minus sum of
    /// all credit totals. Exactly zero for a correctly double-entry-posted
    /// ledger; a nonzero result signals an unbalanced or corrupted ledger and
    /// must be treated by callers as a hard integrity failure.
    pub fn trial_balance(&self) -> Money {
        let debits: Money = self.accounts.values().map(|t| t.debit_sum).sum();
        let credits: Money = self.accounts.values().map(|t| t.credit_sum).sum();
        debits - credits
    }
}
