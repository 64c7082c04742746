//! Ledger balance engine: per-account accumulation of posted debit/credit
//! entries, on-demand balance derivation, non-committing projection, and a
//! ledger-wide trial-balance consistency check.
//!
//! All monetary amounts are exact fixed-point minor units; binary floating
//! point is never used.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
