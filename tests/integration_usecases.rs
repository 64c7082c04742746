use std::fs;
use std::io::Cursor;
use std::str::FromStr;

use balance_engine::common::entry::EntryKind;
use balance_engine::common::money::Money;
use balance_engine::domain::ledger::Ledger;
use balance_engine::worker::handlers::{double_entry, integrity};
use balance_engine::worker::processor::Processor;

/// Drives the whole pipeline in memory: parse entries, post them, render the
/// balances CSV. Returns the output alongside the final trial balance.
fn run_case(input_csv: &str) -> (String, Money) {
    let mut ledger = Ledger::new();
    let mut worker = Processor::new();

    let rdr = Cursor::new(input_csv.as_bytes());
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);

    for row in balance_engine::io::reader::read_entries(&mut csv_reader) {
        let entry = row.expect("failed to parse input row");
        worker
            .process(&mut ledger, entry)
            .expect("failed to post entry");
    }

    let mut out = Vec::<u8>::new();
    balance_engine::io::writer::write_balances(&mut out, ledger.accounts())
        .expect("failed to write output CSV");
    let rendered = String::from_utf8(out).expect("output was not valid UTF-8");

    (rendered, ledger.trial_balance())
}

fn normalize_csv(s: &str) -> String {
    // Normalize line endings + trim trailing whitespace lines.
    // Also allows tests to be stable across platforms.
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn case1_matched_debit_credit_pair() {
    let input = fs::read_to_string("tests/fixtures/case1_input.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/case1_expected.csv").unwrap();

    let (actual, trial) = run_case(&input);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
    assert_eq!(trial, Money::zero());
}

#[test]
fn case2_multi_account_balanced_batch() {
    let input = fs::read_to_string("tests/fixtures/case2_input.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/case2_expected.csv").unwrap();

    let (actual, trial) = run_case(&input);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
    assert_eq!(trial, Money::zero());
}

#[test]
fn case3_fixed_point_precision() {
    // Three 0.1 debits against one 0.3 credit cancel exactly; this is the
    // case binary floating point gets wrong.
    let input = fs::read_to_string("tests/fixtures/case3_input.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/case3_expected.csv").unwrap();

    let (actual, trial) = run_case(&input);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
    assert_eq!(trial, Money::zero());
}

#[test]
fn unbalanced_batch_yields_nonzero_trial_balance() {
    let input = "account,kind,amount\n\
acct-a,debit,10.00\n\
acct-b,credit,4.00\n";

    let (_, trial) = run_case(input);

    assert_eq!(trial, Money::from_str("6.00").unwrap());
}

#[test]
fn projection_leaves_pipeline_state_untouched() {
    let input = "account,kind,amount\n\
acct-a,debit,50.00\n\
acct-a,credit,20.00\n\
acct-b,debit,20.00\n\
acct-b,credit,50.00\n";

    let mut ledger = Ledger::new();
    let mut worker = Processor::new();
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(input.as_bytes()));
    for row in balance_engine::io::reader::read_entries(&mut csv_reader) {
        worker.process(&mut ledger, row.unwrap()).unwrap();
    }

    assert_eq!(ledger.balance("acct-a"), Money::from_str("30.00").unwrap());

    let preview = ledger.project_balance("acct-a", EntryKind::Credit, Money::from_str("10.00").unwrap());
    assert_eq!(preview, Money::from_str("20.00").unwrap());
    assert_eq!(ledger.balance("acct-a"), Money::from_str("30.00").unwrap());
    assert_eq!(ledger.trial_balance(), Money::zero());
}

#[test]
fn double_entry_postings_pass_the_integrity_audit() {
    let mut ledger = Ledger::new();

    for (i, amount) in ["12.50", "7.25", "0.0001"].iter().enumerate() {
        double_entry::handle(
            &mut ledger,
            &format!("payment-{i}"),
            Some(format!("payment batch item {i}")),
            "acct-customer",
            "acct-merchant",
            Money::from_str(amount).unwrap(),
        )
        .unwrap();
    }

    assert!(integrity::check(&ledger).is_empty());
    assert_eq!(ledger.trial_balance(), Money::zero());
    assert_eq!(
        ledger.balance("acct-customer"),
        -ledger.balance("acct-merchant")
    );
}
