use std::collections::BTreeMap;

use crate::classify::{Classifier, Side};

/// The original confirms the balance sheet when totals differ by less than
/// half a cent.
const BALANCE_EPSILON: f64 = 0.005;

/// Two-column statement view derived from account balances.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub left: BTreeMap<String, f64>,
    pub right: BTreeMap<String, f64>,
    pub left_total: f64,
    pub right_total: f64,
}

impl Statement {
    /// Totals are allowed to disagree — the trainer shows the imbalance to
    /// the student instead of enforcing it.
    pub fn is_balanced(&self) -> bool {
        (self.left_total - self.right_total).abs() < BALANCE_EPSILON
    }

    /// Right minus left; the annual result on the income statement.
    pub fn surplus(&self) -> f64 {
        self.right_total - self.left_total
    }
}

/// Split balances into two display columns and total each side.
///
/// Left shows `max(balance, 0)`, right shows `max(-balance, 0)`: a balance
/// on the wrong side is clamped to zero rather than shown negative, a
/// deliberate simplification so students never see negative assets.
/// Accounts that clamp to zero (or that the classifier does not place) are
/// omitted from the column maps; totals sum the post-clamp values.
pub fn partition(balances: &BTreeMap<String, f64>, classifier: &dyn Classifier) -> Statement {
    let mut left = BTreeMap::new();
    let mut right = BTreeMap::new();
    let mut left_total = 0.0;
    let mut right_total = 0.0;

    for (account, balance) in balances {
        match classifier.classify(account) {
            Some(Side::Left) => {
                let shown = balance.max(0.0);
                left_total += shown;
                if shown != 0.0 {
                    left.insert(account.clone(), shown);
                }
            }
            Some(Side::Right) => {
                let shown = (-balance).max(0.0);
                right_total += shown;
                if shown != 0.0 {
                    right.insert(account.clone(), shown);
                }
            }
            None => {}
        }
    }

    Statement { left, right, left_total, right_total }
}
