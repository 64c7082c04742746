#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    #[error("missing input csv path. usage: cargo run -- <entries.csv>")]
    MissingArg,
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    /// Rejected at the posting boundary; the account state is left untouched.
    #[error("invalid amount for account {account}: {reason}")]
    InvalidAmount { account: String, reason: String },
    /// Raised by callers when the trial balance of a ledger that was expected
    /// to balance comes out nonzero. Never silently accepted.
    #[error("ledger integrity violation: trial balance is {trial_balance}, expected 0.0000")]
    IntegrityViolation { trial_balance: String },
}
