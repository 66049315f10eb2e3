use colored::Colorize;
use comfy_table::{Cell, Table};
use rand::Rng;

use crate::chart::account_label;
use crate::error::{LedgerpadError, Result};
use crate::fmt::chf;
use crate::models::{JournalEntry, PracticeTask, TaskStatus};
use crate::registry::Registry;
use crate::settings::db_path;

const TASKS_PER_YEAR: usize = 50;

/// Business facts the generator combines with a random amount.
const TASK_BASES: &[&str] = &[
    "Kauf Mobiliar gegen Bank",
    "Kauf Fahrzeug gegen Bank",
    "Kauf Maschine gegen Bank",
    "Bezug Waren auf Rechnung",
    "Bezahlung Lieferant via Bank",
    "Aufnahme Darlehen auf Bank",
    "Tilgung Darlehen über Bank",
    "Barverkauf über Kasse",
    "Einlage Eigentümer auf Bank",
    "Kauf Wertschriften gegen Bank",
    "Bezug Büromaterial gegen Bank",
    "Bezahlung Miete via Bank",
    "Erhalt Darlehen auf Bank",
    "Kauf Geschäftsfahrzeug gegen Bank",
    "Rückzahlung Hypothek über Bank",
];

pub fn generate(year: Option<String>) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let company = registry.require_selected_company(&user)?;
    let year = super::resolve_year(&registry, &company.id, year)?;

    let tasks = generate_tasks(&year);
    registry.save_practice_tasks(&company.id, &year, &tasks)?;
    println!("Generated {} practice tasks for {year}.", tasks.len());
    println!("List them with `ledgerpad practice list --year {year}`.");
    Ok(())
}

pub fn list(year: Option<String>) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let company = registry.require_selected_company(&user)?;
    let year = super::resolve_year(&registry, &company.id, year)?;

    let tasks = registry.practice_tasks(&company.id, &year);
    if tasks.is_empty() {
        println!("No practice tasks for {year} yet. Run `ledgerpad practice generate` first.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Task", "Status"]);
    for (index, task) in tasks.iter().enumerate() {
        let status = match task.status {
            TaskStatus::Open => Cell::new("offen"),
            TaskStatus::Done => Cell::new("erledigt".green()),
        };
        table.add_row(vec![Cell::new(index + 1), Cell::new(&task.text), status]);
    }

    let open = tasks.iter().filter(|t| t.status == TaskStatus::Open).count();
    println!(
        "Practice tasks {year} — '{}' ({open} of {} open)\n{table}",
        company.name.bold(),
        tasks.len()
    );
    Ok(())
}

pub fn solve(number: usize, debit: &str, credit: &str, amount: f64, year: Option<String>) -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;
    let company = registry.require_selected_company(&user)?;
    let year = super::resolve_year(&registry, &company.id, year)?;

    let mut tasks = registry.practice_tasks(&company.id, &year);
    if tasks.is_empty() {
        return Err(LedgerpadError::InvalidInput(format!(
            "no practice tasks for {year} — run `ledgerpad practice generate` first"
        )));
    }
    if number == 0 || number > tasks.len() {
        return Err(LedgerpadError::InvalidInput(format!(
            "no task {number} (there are {} tasks)",
            tasks.len()
        )));
    }

    let debit = debit.trim();
    let credit = credit.trim();
    if debit.is_empty() || credit.is_empty() {
        return Err(LedgerpadError::InvalidInput(
            "both a debit and a credit account are required".to_string(),
        ));
    }
    if !(amount > 0.0) {
        return Err(LedgerpadError::InvalidInput("amount must be positive".to_string()));
    }

    let task = &mut tasks[number - 1];
    let text = task.text.clone();
    task.status = TaskStatus::Done;

    registry.add_entry(&company.id, &year, JournalEntry::simple(debit, credit, amount, &text))?;
    registry.save_practice_tasks(&company.id, &year, &tasks)?;
    println!(
        "Task {number} done: {} an {}, {} — {text}",
        account_label(debit),
        account_label(credit),
        chf(amount)
    );
    Ok(())
}

/// Tasks are numbered per year and always start out open. Amounts land
/// between 1'000 and 9'900 CHF in 100-franc steps.
fn generate_tasks(year: &str) -> Vec<PracticeTask> {
    let mut rng = rand::thread_rng();
    (1..=TASKS_PER_YEAR)
        .map(|i| {
            let base = TASK_BASES[rng.gen_range(0..TASK_BASES.len())];
            let amount = rng.gen_range(10..100) * 100;
            PracticeTask {
                id: format!("{year}-{i}"),
                text: format!("{base} {}", chf(amount as f64)),
                status: TaskStatus::Open,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_tasks_shape() {
        let tasks = generate_tasks("2024");
        assert_eq!(tasks.len(), 50);
        assert_eq!(tasks[0].id, "2024-1");
        assert_eq!(tasks[49].id, "2024-50");
        assert!(tasks.iter().all(|t| t.status == TaskStatus::Open));
    }

    #[test]
    fn test_generated_amounts_are_round_hundreds() {
        for task in generate_tasks("2025") {
            assert!(task.text.ends_with("00 CHF"), "unexpected text: {}", task.text);
            assert!(
                TASK_BASES.iter().any(|base| task.text.starts_with(base)),
                "unknown base in: {}",
                task.text
            );
        }
    }
}
