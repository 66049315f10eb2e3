use std::path::Path;

use regex::Regex;

use crate::error::{LedgerpadError, Result};
use crate::models::{Company, JournalEntry, PracticeTask};
use crate::store::Store;

/// Fresh companies start with this fixed three-year window.
pub const DEFAULT_YEARS: &[&str] = &["2024", "2025", "2026"];

/// Explicit interface over the key-value store. All company, year, session
/// and journal access goes through here; nothing else touches the keys.
///
/// Key scheme (one JSON document each):
///   user                        -> logged-in username
///   companies_<user>            -> list of companies
///   current_company_<user>      -> selected company id
///   years_<company>             -> list of fiscal years
///   journal_<company>_<year>    -> list of journal entries, newest first
///   practice_<company>_<year>   -> list of generated practice tasks
pub struct Registry {
    store: Store,
}

fn companies_key(user: &str) -> String {
    format!("companies_{user}")
}

fn current_company_key(user: &str) -> String {
    format!("current_company_{user}")
}

fn years_key(company_id: &str) -> String {
    format!("years_{company_id}")
}

fn journal_key(company_id: &str, year: &str) -> String {
    format!("journal_{company_id}_{year}")
}

fn practice_key(company_id: &str, year: &str) -> String {
    format!("practice_{company_id}_{year}")
}

impl Registry {
    pub fn open(db_path: &Path) -> Result<Self> {
        Ok(Registry { store: Store::open(db_path)? })
    }

    #[cfg(test)]
    pub fn store(&self) -> &Store {
        &self.store
    }

    // --- session ---

    pub fn current_user(&self) -> Option<String> {
        let user: String = self.store.get_json("user");
        if user.is_empty() {
            None
        } else {
            Some(user)
        }
    }

    pub fn require_user(&self) -> Result<String> {
        self.current_user().ok_or(LedgerpadError::NotLoggedIn)
    }

    pub fn set_current_user(&self, user: &str) -> Result<()> {
        self.store.set_json("user", &user)?;
        // Make sure the company list exists for this user.
        let companies: Vec<Company> = self.companies(user);
        self.store.set_json(&companies_key(user), &companies)
    }

    pub fn clear_session(&self) -> Result<()> {
        if let Some(user) = self.current_user() {
            self.store.remove(&current_company_key(&user))?;
        }
        self.store.remove("user")
    }

    // --- companies ---

    pub fn companies(&self, user: &str) -> Vec<Company> {
        self.store.get_json(&companies_key(user))
    }

    pub fn add_company(&self, user: &str, company: Company) -> Result<()> {
        let mut companies = self.companies(user);
        companies.push(company);
        self.store.set_json(&companies_key(user), &companies)
    }

    /// Delete a company and everything hanging off it: years, journals,
    /// and the selection pointer when it pointed here.
    pub fn remove_company(&self, user: &str, company_id: &str) -> Result<()> {
        let mut companies = self.companies(user);
        let before = companies.len();
        companies.retain(|c| c.id != company_id);
        if companies.len() == before {
            return Err(LedgerpadError::InvalidInput(format!(
                "no company with id {company_id}"
            )));
        }
        self.store.set_json(&companies_key(user), &companies)?;

        for year in self.years(company_id) {
            self.store.remove(&journal_key(company_id, &year))?;
            self.store.remove(&practice_key(company_id, &year))?;
        }
        self.store.remove(&years_key(company_id))?;

        let selected: String = self.store.get_json(&current_company_key(user));
        if selected == company_id {
            self.store.remove(&current_company_key(user))?;
        }
        Ok(())
    }

    pub fn select_company(&self, user: &str, company_id: &str) -> Result<Company> {
        let company = self
            .companies(user)
            .into_iter()
            .find(|c| c.id == company_id)
            .ok_or_else(|| LedgerpadError::InvalidInput(format!("no company with id {company_id}")))?;
        self.store.set_json(&current_company_key(user), &company_id)?;
        Ok(company)
    }

    pub fn selected_company(&self, user: &str) -> Option<Company> {
        let id: String = self.store.get_json(&current_company_key(user));
        if id.is_empty() {
            return None;
        }
        self.companies(user).into_iter().find(|c| c.id == id)
    }

    pub fn require_selected_company(&self, user: &str) -> Result<Company> {
        self.selected_company(user).ok_or(LedgerpadError::NoCompanySelected)
    }

    // --- years ---

    pub fn years(&self, company_id: &str) -> Vec<String> {
        let years: Vec<String> = self.store.get_json(&years_key(company_id));
        if years.is_empty() {
            DEFAULT_YEARS.iter().map(|y| y.to_string()).collect()
        } else {
            years
        }
    }

    pub fn add_year(&self, company_id: &str, year: &str) -> Result<()> {
        let year = validate_year(year)?;
        let mut years = self.years(company_id);
        if years.iter().any(|y| y == &year) {
            return Err(LedgerpadError::InvalidInput(format!("year {year} already exists")));
        }
        years.push(year);
        years.sort();
        self.store.set_json(&years_key(company_id), &years)
    }

    /// Removing a year wipes its journal with it. The last remaining year
    /// cannot be removed.
    pub fn remove_year(&self, company_id: &str, year: &str) -> Result<()> {
        let mut years = self.years(company_id);
        if !years.iter().any(|y| y == year) {
            return Err(LedgerpadError::InvalidInput(format!("year {year} does not exist")));
        }
        if years.len() <= 1 {
            return Err(LedgerpadError::InvalidInput(
                "cannot remove the last remaining year".to_string(),
            ));
        }
        years.retain(|y| y != year);
        self.store.set_json(&years_key(company_id), &years)?;
        self.store.remove(&journal_key(company_id, year))?;
        self.store.remove(&practice_key(company_id, year))
    }

    // --- journal ---

    pub fn entries(&self, company_id: &str, year: &str) -> Vec<JournalEntry> {
        self.store.get_json(&journal_key(company_id, year))
    }

    pub fn add_entry(&self, company_id: &str, year: &str, entry: JournalEntry) -> Result<()> {
        if !self.years(company_id).iter().any(|y| y == year) {
            return Err(LedgerpadError::InvalidInput(format!(
                "year {year} does not exist for this company"
            )));
        }
        let mut entries = self.entries(company_id, year);
        entries.insert(0, entry);
        self.store.set_json(&journal_key(company_id, year), &entries)
    }

    // --- practice tasks ---

    pub fn practice_tasks(&self, company_id: &str, year: &str) -> Vec<PracticeTask> {
        self.store.get_json(&practice_key(company_id, year))
    }

    pub fn save_practice_tasks(
        &self,
        company_id: &str,
        year: &str,
        tasks: &[PracticeTask],
    ) -> Result<()> {
        self.store.set_json(&practice_key(company_id, year), &tasks)
    }
}

/// Year strings are checked at the input boundary: four digits, 2000-2100.
/// Nothing past this point ever sees a malformed year.
pub fn validate_year(year: &str) -> Result<String> {
    let year = year.trim();
    let four_digits = Regex::new(r"^\d{4}$")
        .map(|re| re.is_match(year))
        .unwrap_or(false);
    let in_range = year.parse::<i32>().map(|y| (2000..=2100).contains(&y)).unwrap_or(false);
    if !four_digits || !in_range {
        return Err(LedgerpadError::InvalidInput(format!(
            "invalid year '{year}' (expected a four-digit year between 2000 and 2100)"
        )));
    }
    Ok(year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::compute_balances;
    use crate::models::TaskStatus;

    fn test_registry() -> (tempfile::TempDir, Registry) {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::open(&dir.path().join("test.db")).unwrap();
        (dir, registry)
    }

    fn sample_company() -> Company {
        Company::new("Muster AG", "AG", 100_000.0, "Handel", "Warenhandel", 12)
    }

    #[test]
    fn test_session_roundtrip() {
        let (_dir, reg) = test_registry();
        assert_eq!(reg.current_user(), None);
        reg.set_current_user("erblin.tolaj").unwrap();
        assert_eq!(reg.current_user().as_deref(), Some("erblin.tolaj"));
        reg.clear_session().unwrap();
        assert_eq!(reg.current_user(), None);
        assert!(reg.require_user().is_err());
    }

    #[test]
    fn test_company_crud() {
        let (_dir, reg) = test_registry();
        let company = sample_company();
        let id = company.id.clone();
        reg.add_company("user", company).unwrap();
        assert_eq!(reg.companies("user").len(), 1);

        reg.select_company("user", &id).unwrap();
        assert_eq!(reg.selected_company("user").unwrap().id, id);

        reg.remove_company("user", &id).unwrap();
        assert!(reg.companies("user").is_empty());
        assert!(reg.selected_company("user").is_none());
    }

    #[test]
    fn test_select_unknown_company_rejected() {
        let (_dir, reg) = test_registry();
        assert!(reg.select_company("user", "c_missing").is_err());
    }

    #[test]
    fn test_default_year_window() {
        let (_dir, reg) = test_registry();
        assert_eq!(reg.years("c_1"), vec!["2024", "2025", "2026"]);
    }

    #[test]
    fn test_add_year_sorted_no_duplicates() {
        let (_dir, reg) = test_registry();
        reg.add_year("c_1", "2023").unwrap();
        assert_eq!(reg.years("c_1"), vec!["2023", "2024", "2025", "2026"]);
        assert!(reg.add_year("c_1", "2024").is_err());
    }

    #[test]
    fn test_year_validation_at_boundary() {
        assert!(validate_year("2027").is_ok());
        assert!(validate_year(" 2027 ").is_ok());
        assert!(validate_year("27").is_err());
        assert!(validate_year("1999").is_err());
        assert!(validate_year("2101").is_err());
        assert!(validate_year("20x4").is_err());
        assert!(validate_year("").is_err());
    }

    #[test]
    fn test_remove_year_wipes_journal() {
        let (_dir, reg) = test_registry();
        reg.add_entry("c_1", "2024", JournalEntry::simple("1000", "3000", 100.0, "")).unwrap();
        assert_eq!(reg.entries("c_1", "2024").len(), 1);

        reg.remove_year("c_1", "2024").unwrap();
        assert_eq!(reg.years("c_1"), vec!["2025", "2026"]);
        assert!(reg.entries("c_1", "2024").is_empty());
        assert!(compute_balances(&reg.entries("c_1", "2024")).is_empty());
    }

    #[test]
    fn test_cannot_remove_last_year() {
        let (_dir, reg) = test_registry();
        reg.remove_year("c_1", "2024").unwrap();
        reg.remove_year("c_1", "2025").unwrap();
        assert!(reg.remove_year("c_1", "2026").is_err());
        assert_eq!(reg.years("c_1"), vec!["2026"]);
    }

    #[test]
    fn test_entries_newest_first() {
        let (_dir, reg) = test_registry();
        reg.add_entry("c_1", "2024", JournalEntry::simple("1000", "3000", 1.0, "first")).unwrap();
        reg.add_entry("c_1", "2024", JournalEntry::simple("1000", "3000", 2.0, "second")).unwrap();
        let entries = reg.entries("c_1", "2024");
        assert_eq!(entries[0].text(), "second");
        assert_eq!(entries[1].text(), "first");
    }

    #[test]
    fn test_add_entry_rejects_unknown_year() {
        let (_dir, reg) = test_registry();
        let entry = JournalEntry::simple("1000", "3000", 1.0, "");
        assert!(reg.add_entry("c_1", "2030", entry).is_err());
    }

    #[test]
    fn test_corrupted_journal_degrades_to_empty() {
        let (_dir, reg) = test_registry();
        reg.store().set("journal_c_1_2024", "{broken").unwrap();
        assert!(reg.entries("c_1", "2024").is_empty());
    }

    #[test]
    fn test_practice_tasks_roundtrip() {
        let (_dir, reg) = test_registry();
        assert!(reg.practice_tasks("c_1", "2024").is_empty());
        let tasks = vec![PracticeTask {
            id: "2024-1".to_string(),
            text: "Barverkauf über Kasse 1'200 CHF".to_string(),
            status: TaskStatus::Open,
        }];
        reg.save_practice_tasks("c_1", "2024", &tasks).unwrap();
        assert_eq!(reg.practice_tasks("c_1", "2024"), tasks);
    }

    #[test]
    fn test_remove_year_wipes_practice_tasks() {
        let (_dir, reg) = test_registry();
        let tasks = vec![PracticeTask {
            id: "2024-1".to_string(),
            text: "Bezahlung Miete via Bank 2'000 CHF".to_string(),
            status: TaskStatus::Done,
        }];
        reg.save_practice_tasks("c_1", "2024", &tasks).unwrap();
        reg.remove_year("c_1", "2024").unwrap();
        assert!(reg.practice_tasks("c_1", "2024").is_empty());
    }

    #[test]
    fn test_remove_company_wipes_years_and_journals() {
        let (_dir, reg) = test_registry();
        let company = sample_company();
        let id = company.id.clone();
        reg.add_company("user", company).unwrap();
        reg.add_entry(&id, "2024", JournalEntry::simple("1000", "3000", 10.0, "")).unwrap();
        reg.add_year(&id, "2027").unwrap();
        let tasks = vec![PracticeTask {
            id: "2024-1".to_string(),
            text: "Kauf Maschine gegen Bank 5'000 CHF".to_string(),
            status: TaskStatus::Open,
        }];
        reg.save_practice_tasks(&id, "2024", &tasks).unwrap();

        reg.remove_company("user", &id).unwrap();
        assert!(reg.entries(&id, "2024").is_empty());
        assert!(reg.practice_tasks(&id, "2024").is_empty());
        // Years fall back to the default window once the stored list is gone.
        assert_eq!(reg.years(&id), vec!["2024", "2025", "2026"]);
    }
}
