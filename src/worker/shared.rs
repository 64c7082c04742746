use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    common::{entry::EntryKind, error::LedgerError, money::Money},
    domain::ledger::Ledger,
    worker::handlers::{double_entry, integrity, post},
};

/// Concurrency wrapper for a ledger shared between callers.
///
/// The bare `Ledger` has a single logical owner and is not thread-safe. This
/// handle serializes every operation behind one mutex, held for the whole of
/// each call, so `trial_balance` always observes an atomic read-set — it can
/// never see the debit half of a posting without its credit half. Every
/// operation is short and never blocks on IO, so hold times are bounded.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Ledger::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Ledger> {
        // A poisoned lock means a panic inside a handler; handlers validate
        // before mutating, so the state is still coherent and usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn post_entry(
        &self,
        account: &str,
        kind: EntryKind,
        amount: Money,
    ) -> Result<(), LedgerError> {
        post::handle(&mut self.lock(), account, kind, amount)
    }

    pub fn post_double_entry(
        &self,
        reference: &str,
        description: Option<String>,
        debit_account: &str,
        credit_account: &str,
        amount: Money,
    ) -> Result<(), LedgerError> {
        double_entry::handle(
            &mut self.lock(),
            reference,
            description,
            debit_account,
            credit_account,
            amount,
        )
    }

    pub fn balance(&self, account: &str) -> Money {
        self.lock().balance(account)
    }

    pub fn project_balance(&self, account: &str, kind: EntryKind, delta: Money) -> Money {
        self.lock().project_balance(account, kind, delta)
    }

    pub fn trial_balance(&self) -> Money {
        self.lock().trial_balance()
    }

    pub fn check_integrity(&self) -> Vec<String> {
        integrity::check(&self.lock())
    }
}
