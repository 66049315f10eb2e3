use crate::error::Result;
use crate::models::{Company, JournalEntry, SplitLine};
use crate::registry::Registry;
use crate::settings::db_path;

struct DemoBooking {
    year: &'static str,
    debit: &'static str,
    credit: &'static str,
    amount: f64,
    text: &'static str,
}

const BOOKINGS: &[DemoBooking] = &[
    DemoBooking { year: "2024", debit: "1020", credit: "2800", amount: 100_000.0, text: "Gründung: Einzahlung Aktienkapital" },
    DemoBooking { year: "2024", debit: "1000", credit: "1020", amount: 2_000.0, text: "Barbezug für die Kasse" },
    DemoBooking { year: "2024", debit: "1200", credit: "2000", amount: 18_000.0, text: "Wareneinkauf auf Rechnung" },
    DemoBooking { year: "2024", debit: "1020", credit: "3200", amount: 26_000.0, text: "Warenverkauf gegen Bank" },
    DemoBooking { year: "2024", debit: "5000", credit: "1020", amount: 7_500.0, text: "Löhne Dezember" },
    DemoBooking { year: "2025", debit: "1100", credit: "3400", amount: 12_000.0, text: "Beratungsauftrag auf Rechnung" },
    DemoBooking { year: "2025", debit: "6000", credit: "1020", amount: 3_600.0, text: "Miete Januar-März" },
];

pub fn run() -> Result<()> {
    let registry = Registry::open(&db_path())?;
    let user = registry.require_user()?;

    let company = Company::new(
        "Muster AG",
        "AG",
        100_000.0,
        "Handel",
        "Handel mit Büromaterial",
        8,
    );
    let company_id = company.id.clone();
    registry.add_company(&user, company)?;
    registry.select_company(&user, &company_id)?;

    for b in BOOKINGS {
        registry.add_entry(
            &company_id,
            b.year,
            JournalEntry::simple(b.debit, b.credit, b.amount, b.text),
        )?;
    }

    // One split booking so the journal shows both shapes.
    registry.add_entry(
        &company_id,
        "2024",
        JournalEntry::split(
            vec![SplitLine { account_no: "1530".into(), amount: 60_000.0 }],
            vec![
                SplitLine { account_no: "1020".into(), amount: 20_000.0 },
                SplitLine { account_no: "2450".into(), amount: 40_000.0 },
            ],
            "Fahrzeugkauf: 1/3 Bank, 2/3 Darlehen",
        ),
    )?;

    println!("Created demo company 'Muster AG' ({company_id}) and selected it.");
    println!("Seeded {} bookings across 2024/2025.", BOOKINGS.len() + 1);
    println!();
    println!("Try:");
    println!("  ledgerpad report balance --year 2024");
    println!("  ledgerpad report income --year 2024");
    println!("  ledgerpad book list --year 2024");
    Ok(())
}
