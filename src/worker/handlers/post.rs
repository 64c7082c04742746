use crate::{
    common::{entry::EntryKind, error::LedgerError, money::Money},
    domain::{account::AccountTotals, ledger::Ledger},
};

/// Posts a single entry: adds `amount` to the account's debit or credit sum,
/// creating the accumulator on first sight. A zero amount is a legal no-op
/// numerically but still marks the account as seen.
pub fn handle(
    ledger: &mut Ledger,
    account: &str,
    kind: EntryKind,
    amount: Money,
) -> Result<(), LedgerError> {
    // Validate before touching any state: a rejected entry must leave the
    // ledger exactly as it was, including not creating the account.
    if amount.is_negative() {
        return Err(LedgerError::InvalidAmount {
            account: account.to_string(),
            reason: format!("negative amount {amount}"),
        });
    }

    apply_entry(ledger.get_or_create_account(account), kind, amount);
    Ok(())
}

fn apply_entry(totals: &mut AccountTotals, kind: EntryKind, amount: Money) {
    match kind {
        EntryKind::Debit => totals.debit_sum += amount,
        EntryKind::Credit => totals.credit_sum += amount,
    }
}
