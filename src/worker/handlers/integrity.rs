use crate::domain::ledger::Ledger;

/// Audits every recorded transaction and reports inconsistencies: a
/// transaction with fewer than two entry lines, or whose debit total differs
/// from its credit total. Read-only; an empty result means the audit passed.
///
/// Issues are sorted by transaction reference for deterministic output.
pub fn check(ledger: &Ledger) -> Vec<String> {
    let mut issues = Vec::new();

    let mut references: Vec<&String> = ledger.txns.keys().collect();
    references.sort_unstable();

    for reference in references {
        let txn = &ledger.txns[reference];

        if txn.lines.len() < 2 {
            issues.push(format!("txn {reference} has fewer than 2 entries"));
        }

        if !txn.is_balanced() {
            issues.push(format!(
                "txn {reference} not balanced: debit={}, credit={}",
                txn.debit_total(),
                txn.credit_total()
            ));
        }
    }

    issues
}
