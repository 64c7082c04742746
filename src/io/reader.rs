use crate::common::{
    entry::{Entry, EntryKind},
    money::Money,
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers.
struct CsvRow {
    account: String,
    kind: String,
    amount: Option<String>,
}

/// Reads and validates entry rows from a CSV reader.
///
/// Supported headers: `account,kind,amount`. The `kind` field is normalized
/// to lowercase and must be `debit` or `credit`; `amount` is required for
/// every row. Errors carry the account context.
///
/// # Examples
///
/// ```
/// use balance_engine::io::reader::read_entries;
/// use balance_engine::common::entry::EntryKind;
/// use csv::ReaderBuilder;
///
/// let data = "account,kind,amount\n\
/// acct-a,debit,1.25\n\
/// acct-b,credit,1.25\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let entries: Vec<_> = read_entries(&mut rdr).collect();
///
/// assert!(matches!(entries[0].as_ref().unwrap().kind, EntryKind::Debit));
/// assert!(matches!(entries[1].as_ref().unwrap().kind, EntryKind::Credit));
/// ```
pub fn read_entries<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Entry, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;

        let kind = match row.kind.trim().to_ascii_lowercase().as_str() {
            "debit" => EntryKind::Debit,
            "credit" => EntryKind::Credit,
            other => {
                return Err(format!(
                    "unknown entry kind: {other} for account {}",
                    row.account
                ));
            }
        };

        let amt_str = row
            .amount
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| format!("entry missing amount for account {}", row.account))?;
        let amount = Money::from_str(&amt_str).map_err(|e| e.to_string())?;

        Ok(Entry {
            account: row.account,
            kind,
            amount,
        })
    })
}
