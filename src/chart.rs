/// Simplified Swiss SME chart of accounts used for display and for the
/// booking form's account picker. Balances are computed for any code that
/// appears in the journal; this table only supplies names.
pub const CHART: &[(&str, &str)] = &[
    // Aktiven
    ("1000", "Kasse"),
    ("1020", "Bankguthaben"),
    ("1060", "Wertschriften"),
    ("1100", "Forderungen aus Lieferungen/Leistungen"),
    ("1170", "Vorsteuer MWST"),
    ("1200", "Handelswaren"),
    ("1210", "Rohstoffe"),
    ("1300", "Aktive Rechnungsabgrenzungen"),
    ("1500", "Maschinen & Apparate"),
    ("1510", "Mobiliar & Einrichtungen"),
    ("1530", "Fahrzeuge"),
    ("1600", "Geschäftsliegenschaften"),
    ("1700", "Immaterielle Werte"),
    // Passiven
    ("2000", "Verbindlichkeiten aus Lieferungen/Leistungen"),
    ("2030", "Erhaltene Anzahlungen"),
    ("2100", "Bankverbindlichkeiten"),
    ("2200", "Geschuldete MWST"),
    ("2300", "Passive Rechnungsabgrenzungen"),
    ("2450", "Darlehen"),
    ("2600", "Rückstellungen"),
    ("2800", "Eigenkapital / Aktienkapital"),
    ("2950", "Gesetzliche Reserven"),
    ("2970", "Gewinnvortrag/-verlustvortrag"),
    // Erfolgsrechnung
    ("3000", "Produktionserlöse"),
    ("3200", "Handelserlöse"),
    ("3400", "Dienstleistungserlöse"),
    ("4200", "Handelswarenaufwand"),
    ("5000", "Lohnaufwand"),
    ("6000", "Raumaufwand"),
    ("6500", "Verwaltungsaufwand"),
];

pub fn account_name(no: &str) -> Option<&'static str> {
    CHART.iter().find(|(code, _)| *code == no).map(|(_, name)| *name)
}

/// "1020 Bankguthaben" when the code is known, otherwise just the code.
pub fn account_label(no: &str) -> String {
    match account_name(no) {
        Some(name) => format!("{no} {name}"),
        None => no.to_string(),
    }
}
