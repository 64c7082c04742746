use std::io::{BufWriter, stdout};

use crate::{
    common::error::LedgerError,
    domain::ledger::Ledger,
    io::{reader, writer},
    worker::processor::Processor,
};

/// Batch pipeline: read entry rows from the CSV given as the first argument,
/// post each one, write per-account totals and balances to stdout, then
/// verify the trial balance. A nonzero trial balance is a hard integrity
/// failure for the whole batch, not a value to display.
pub fn run<I, S>(args: I) -> Result<(), LedgerError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(LedgerError::MissingArg);
    }
    let input_path = &args[1];

    let file = std::fs::File::open(input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);
    let entries = reader::read_entries(&mut reader);

    let mut ledger = Ledger::new();
    let mut processor = Processor::new();

    for entry in entries {
        let entry = entry.map_err(LedgerError::Parse)?;
        processor.process(&mut ledger, entry)?;
    }
    tracing::info!(
        posted = processor.posted(),
        accounts = ledger.accounts().len(),
        "entries posted"
    );

    // After processing all entries, write the account balances to stdout
    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    writer::write_balances(out, ledger.accounts())?;

    let trial = ledger.trial_balance();
    if !trial.is_zero() {
        return Err(LedgerError::IntegrityViolation {
            trial_balance: trial.to_string_4dp(),
        });
    }
    tracing::info!("trial balance verified: 0.0000");

    Ok(())
}
