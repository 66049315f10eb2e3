/// Which statement column an account lands in.
///
/// Left is the debit-natural side (assets on the balance sheet, expenses on
/// the income statement); Right is the credit-natural side (liabilities and
/// equity, revenue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Pluggable account classification strategy.
///
/// Classification is a naming-convention heuristic with no authoritative
/// source of truth; it is recomputed on every render. `None` means the
/// account belongs to neither column of the statement being built (e.g. a
/// revenue account on the balance sheet) and is left out.
pub trait Classifier {
    fn classify(&self, account: &str) -> Option<Side>;
}

/// Leading-digit rule over numeric account codes.
pub struct LeadingDigit {
    left_digits: &'static [char],
    right_digits: &'static [char],
    left_extra: &'static [&'static str],
    right_extra: &'static [&'static str],
}

impl LeadingDigit {
    /// Balance sheet: 1xxx assets, 2xxx liabilities and equity.
    pub fn balance_sheet() -> Self {
        LeadingDigit {
            left_digits: &['1'],
            right_digits: &['2'],
            left_extra: &[],
            right_extra: &[],
        }
    }

    /// Income statement: 4/5/6 expense, 3/7 revenue, plus the 8xxx
    /// closing accounts the chart assigns to each side.
    pub fn income_statement() -> Self {
        LeadingDigit {
            left_digits: &['4', '5', '6'],
            right_digits: &['3', '7'],
            left_extra: &["8000", "8500"],
            right_extra: &["8100", "8510"],
        }
    }
}

impl Classifier for LeadingDigit {
    fn classify(&self, account: &str) -> Option<Side> {
        let account = account.trim();
        if self.left_extra.contains(&account) {
            return Some(Side::Left);
        }
        if self.right_extra.contains(&account) {
            return Some(Side::Right);
        }
        let first = account.chars().next()?;
        if self.left_digits.contains(&first) {
            Some(Side::Left)
        } else if self.right_digits.contains(&first) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

// Lowercase substrings matched against free-text account names. Accounts
// that match nothing fall back to asset, the safe assumption for the
// exercise sheets this mirrors.
const KEYWORDS: &[(&str, Side)] = &[
    ("kasse", Side::Left),
    ("bank", Side::Left),
    ("forderung", Side::Left),
    ("warenbestand", Side::Left),
    ("waren", Side::Left),
    ("anlage", Side::Left),
    ("aufwand", Side::Left),
    ("verbindlichkeit", Side::Right),
    ("darlehen", Side::Right),
    ("eigenkapital", Side::Right),
    ("umsatz", Side::Right),
    ("erlös", Side::Right),
    ("umsatzerloese", Side::Right),
];

/// Keyword match against free-text account names, for journals that were
/// recorded with names instead of numeric codes.
pub struct KeywordTable;

impl Classifier for KeywordTable {
    fn classify(&self, account: &str) -> Option<Side> {
        let name = account.trim().to_lowercase();
        for (keyword, side) in KEYWORDS {
            if name.contains(keyword) {
                return Some(*side);
            }
        }
        Some(Side::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_sheet_digits() {
        let c = LeadingDigit::balance_sheet();
        assert_eq!(c.classify("1020"), Some(Side::Left));
        assert_eq!(c.classify("2800"), Some(Side::Right));
        assert_eq!(c.classify("3400"), None);
        assert_eq!(c.classify(""), None);
    }

    #[test]
    fn test_income_statement_digits() {
        let c = LeadingDigit::income_statement();
        assert_eq!(c.classify("4200"), Some(Side::Left));
        assert_eq!(c.classify("5000"), Some(Side::Left));
        assert_eq!(c.classify("6500"), Some(Side::Left));
        assert_eq!(c.classify("3000"), Some(Side::Right));
        assert_eq!(c.classify("7010"), Some(Side::Right));
        assert_eq!(c.classify("1020"), None);
    }

    #[test]
    fn test_income_statement_closing_accounts() {
        let c = LeadingDigit::income_statement();
        assert_eq!(c.classify("8000"), Some(Side::Left));
        assert_eq!(c.classify("8500"), Some(Side::Left));
        assert_eq!(c.classify("8100"), Some(Side::Right));
        assert_eq!(c.classify("8510"), Some(Side::Right));
        // Other 8xxx accounts stay unclassified.
        assert_eq!(c.classify("8900"), None);
    }

    #[test]
    fn test_keyword_matches() {
        let c = KeywordTable;
        assert_eq!(c.classify("Kasse"), Some(Side::Left));
        assert_eq!(c.classify("Bankguthaben"), Some(Side::Left));
        assert_eq!(c.classify("Verbindlichkeiten aus L+L"), Some(Side::Right));
        assert_eq!(c.classify("Darlehen"), Some(Side::Right));
        assert_eq!(c.classify("Umsatzerlöse"), Some(Side::Right));
    }

    #[test]
    fn test_keyword_default_is_asset() {
        assert_eq!(KeywordTable.classify("Irgendwas"), Some(Side::Left));
    }
}
