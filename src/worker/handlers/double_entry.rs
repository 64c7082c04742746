use crate::{
    common::{entry::EntryKind, error::LedgerError, money::Money},
    domain::{
        ledger::Ledger,
        transaction::{EntryLine, TransactionRecord},
    },
};

use super::post;

/// Posts one matched debit/credit pair under a transaction reference.
///
/// The reference is an idempotency key: re-posting an already-recorded
/// reference is silently ignored so upstream callers (payments, wallet,
/// savings) can retry without double-counting. Validation happens before any
/// account is touched, so a rejected posting is all-or-nothing.
pub fn handle(
    ledger: &mut Ledger,
    reference: &str,
    description: Option<String>,
    debit_account: &str,
    credit_account: &str,
    amount: Money,
) -> Result<(), LedgerError> {
    if ledger.txns.contains_key(reference) {
        return Ok(());
    }

    if amount.is_negative() {
        return Err(LedgerError::InvalidAmount {
            account: debit_account.to_string(),
            reason: format!("negative amount {amount} in transaction {reference}"),
        });
    }

    post::handle(ledger, debit_account, EntryKind::Debit, amount)?;
    post::handle(ledger, credit_account, EntryKind::Credit, amount)?;

    ledger.txns.insert(
        reference.to_string(),
        TransactionRecord::new(
            reference,
            description,
            vec![
                EntryLine {
                    account: debit_account.to_string(),
                    kind: EntryKind::Debit,
                    amount,
                },
                EntryLine {
                    account: credit_account.to_string(),
                    kind: EntryKind::Credit,
                    amount,
                },
            ],
        ),
    );
    Ok(())
}
