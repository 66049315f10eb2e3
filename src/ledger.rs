use std::collections::BTreeMap;

use crate::models::JournalEntry;

/// Aggregate journal entries into signed per-account balances.
///
/// Debit postings add, credit postings subtract (debit-positive convention).
/// A simple entry with a missing account or a non-positive amount is skipped
/// whole; in a split entry each line is checked on its own, so valid lines
/// still post when siblings are malformed. Malformed input never errors —
/// the trainer prefers an incomplete statement over a crash, and the entry
/// forms are the place that validates. Accounts with no valid posting do not
/// appear in the result; callers that want a fixed chart union it with zeros
/// themselves.
pub fn compute_balances(entries: &[JournalEntry]) -> BTreeMap<String, f64> {
    let mut balances: BTreeMap<String, f64> = BTreeMap::new();

    for entry in entries {
        match entry {
            JournalEntry::Simple { debit, credit, amount, .. } => {
                let debit = debit.trim();
                let credit = credit.trim();
                if debit.is_empty() || credit.is_empty() || !(*amount > 0.0) {
                    continue;
                }
                *balances.entry(debit.to_string()).or_insert(0.0) += amount;
                *balances.entry(credit.to_string()).or_insert(0.0) -= amount;
            }
            JournalEntry::Split { debits, credits, .. } => {
                for line in debits {
                    let account = line.account_no.trim();
                    if !account.is_empty() && line.amount > 0.0 {
                        *balances.entry(account.to_string()).or_insert(0.0) += line.amount;
                    }
                }
                for line in credits {
                    let account = line.account_no.trim();
                    if !account.is_empty() && line.amount > 0.0 {
                        *balances.entry(account.to_string()).or_insert(0.0) -= line.amount;
                    }
                }
            }
        }
    }

    balances
}
