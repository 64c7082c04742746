use crate::{
    common::{entry::Entry, error::LedgerError},
    domain::ledger::Ledger,
    worker::handlers::post,
};

/// Applies a stream of entries to a ledger, one at a time. The single
/// dispatch point for the batch pipeline; keeping it separate from the
/// handlers leaves room for per-entry policies (filtering, counters) without
/// touching posting logic.
#[derive(Debug, Default)]
pub struct Processor {
    posted: u64,
}

impl Processor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries successfully posted so far.
    pub fn posted(&self) -> u64 {
        self.posted
    }

    pub fn process(&mut self, ledger: &mut Ledger, entry: Entry) -> Result<(), LedgerError> {
        post::handle(ledger, &entry.account, entry.kind, entry.amount)?;
        self.posted += 1;
        Ok(())
    }
}
