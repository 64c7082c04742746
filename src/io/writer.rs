use std::{collections::HashMap, io::Write};

use crate::domain::account::AccountTotals;

#[derive(serde::Serialize)]
/// Internal CSV output row representation matching the output headers.
///
/// Headers written (in this order): `account,debit,credit,balance`.
/// Monetary fields are formatted to 4 decimal places as strings.
struct OutputRow {
    account: String,
    debit: String,
    credit: String,
    balance: String,
}

/// Writes per-account totals and derived balances to a CSV writer.
///
/// The output includes a header row: `account,debit,credit,balance`. For
/// deterministic output, accounts are sorted by identifier ascending before
/// writing. Monetary fields use exactly 4 decimal places via
/// `to_string_4dp()`.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use balance_engine::io::writer::write_balances;
/// use balance_engine::domain::account::AccountTotals;
///
/// let mut accounts = HashMap::new();
/// accounts.insert("acct-b".to_string(), AccountTotals::default());
/// accounts.insert("acct-a".to_string(), AccountTotals::default());
///
/// let mut out = Vec::new();
/// write_balances(&mut out, &accounts).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("account,debit,credit,balance\n"));
/// // and rows are sorted by account id
/// assert!(s.contains("\nacct-a,"));
/// assert!(s.contains("\nacct-b,"));
/// ```
pub fn write_balances<W: Write>(
    writer: W,
    accounts: &HashMap<String, AccountTotals>,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    // Deterministic output: sort by account id.
    let mut ids: Vec<&String> = accounts.keys().collect();
    ids.sort_unstable();

    for id in ids {
        let totals = &accounts[id];
        let row = OutputRow {
            account: id.clone(),
            debit: totals.debit_sum.to_string_4dp(),
            credit: totals.credit_sum.to_string_4dp(),
            balance: totals.balance().to_string_4dp(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
