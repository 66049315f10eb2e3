use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// One debit or credit row of a split booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitLine {
    #[serde(rename = "accountNo")]
    pub account_no: String,
    #[serde(default, alias = "betrag")]
    pub amount: f64,
}

/// A recorded business transaction, normalized at the storage boundary.
///
/// Historical saves used several shapes for the same thing: `debit`/`credit`
/// vs. `soll`/`haben`, `amount` vs. `betrag`, `text` vs. `fact`, and split
/// bookings tagged `"type": "split"` with `accountNo` lines. All of them
/// deserialize into this enum via `RawEntry`; serialization always writes
/// the canonical tagged shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", from = "RawEntry")]
pub enum JournalEntry {
    Simple {
        debit: String,
        credit: String,
        amount: f64,
        text: String,
        date: String,
    },
    Split {
        debits: Vec<SplitLine>,
        credits: Vec<SplitLine>,
        text: String,
        date: String,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(alias = "soll")]
    debit: Option<String>,
    #[serde(alias = "haben")]
    credit: Option<String>,
    #[serde(alias = "betrag")]
    amount: Option<f64>,
    debits: Vec<SplitLine>,
    credits: Vec<SplitLine>,
    #[serde(alias = "fact")]
    text: String,
    date: String,
}

impl From<RawEntry> for JournalEntry {
    fn from(raw: RawEntry) -> Self {
        let is_split =
            raw.kind.as_deref() == Some("split") || !raw.debits.is_empty() || !raw.credits.is_empty();
        if is_split {
            JournalEntry::Split {
                debits: raw.debits,
                credits: raw.credits,
                text: raw.text,
                date: raw.date,
            }
        } else {
            JournalEntry::Simple {
                debit: raw.debit.unwrap_or_default(),
                credit: raw.credit.unwrap_or_default(),
                amount: raw.amount.unwrap_or(0.0),
                text: raw.text,
                date: raw.date,
            }
        }
    }
}

impl JournalEntry {
    pub fn simple(debit: &str, credit: &str, amount: f64, text: &str) -> Self {
        JournalEntry::Simple {
            debit: debit.to_string(),
            credit: credit.to_string(),
            amount,
            text: text.to_string(),
            date: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn split(debits: Vec<SplitLine>, credits: Vec<SplitLine>, text: &str) -> Self {
        JournalEntry::Split {
            debits,
            credits,
            text: text.to_string(),
            date: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            JournalEntry::Simple { text, .. } | JournalEntry::Split { text, .. } => text,
        }
    }

    pub fn date(&self) -> &str {
        match self {
            JournalEntry::Simple { date, .. } | JournalEntry::Split { date, .. } => date,
        }
    }
}

/// A generated booking exercise. Attaching a booking to it marks it done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeTask {
    pub id: String,
    #[serde(rename = "fact")]
    pub text: String,
    #[serde(default)]
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Open,
    Done,
}

/// A practice company, matching the fields of the original create form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub legal: String,
    pub capital: f64,
    pub industry: String,
    pub purpose: String,
    pub size: u32,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

// Distinguishes companies created within the same millisecond.
static COMPANY_SEQ: AtomicU64 = AtomicU64::new(0);

impl Company {
    pub fn new(name: &str, legal: &str, capital: f64, industry: &str, purpose: &str, size: u32) -> Self {
        let now = chrono::Utc::now();
        Company {
            id: format!(
                "c_{}_{:04}",
                now.timestamp_millis(),
                COMPANY_SEQ.fetch_add(1, Ordering::Relaxed) % 10_000
            ),
            name: name.to_string(),
            legal: legal.to_string(),
            capital,
            industry: industry.to_string(),
            purpose: purpose.to_string(),
            size,
            created_at: now.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_soll_haben_fields() {
        let json = r#"{"fact":"Verkauf Ware","soll":"1000","haben":"3200","betrag":500,"date":"2024-01-01"}"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        match entry {
            JournalEntry::Simple { debit, credit, amount, text, .. } => {
                assert_eq!(debit, "1000");
                assert_eq!(credit, "3200");
                assert_eq!(amount, 500.0);
                assert_eq!(text, "Verkauf Ware");
            }
            other => panic!("expected simple entry, got {other:?}"),
        }
    }

    #[test]
    fn test_legacy_split_shape() {
        let json = r#"{
            "type": "split",
            "fact": "Kauf Fahrzeug",
            "year": "2024",
            "debits": [{"accountNo":"1530","accountName":"Fahrzeuge","amount":60000}],
            "credits": [{"accountNo":"1020","accountName":"Bank","amount":20000},
                        {"accountNo":"2450","accountName":"Darlehen","amount":40000}],
            "total": 60000,
            "date": "2024-03-01"
        }"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        match entry {
            JournalEntry::Split { debits, credits, .. } => {
                assert_eq!(debits.len(), 1);
                assert_eq!(debits[0].account_no, "1530");
                assert_eq!(credits.len(), 2);
                assert_eq!(credits[1].amount, 40000.0);
            }
            other => panic!("expected split entry, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields_become_defaults() {
        let entry: JournalEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(
            entry,
            JournalEntry::Simple {
                debit: String::new(),
                credit: String::new(),
                amount: 0.0,
                text: String::new(),
                date: String::new(),
            }
        );
    }

    #[test]
    fn test_canonical_roundtrip() {
        let entry = JournalEntry::simple("1020", "3400", 500.0, "Dienstleistung");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"simple\""));
        let back: JournalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_split_roundtrip_keeps_account_no_key() {
        let entry = JournalEntry::split(
            vec![SplitLine { account_no: "1000".into(), amount: 100.0 }],
            vec![SplitLine { account_no: "3000".into(), amount: 100.0 }],
            "Barverkauf",
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"accountNo\":\"1000\""));
        let back: JournalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_company_ids_are_unique_enough() {
        let ids: std::collections::HashSet<String> = (0..100)
            .map(|_| Company::new("Muster AG", "AG", 100_000.0, "Handel", "", 10).id)
            .collect();
        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| id.starts_with("c_")));
    }

    #[test]
    fn test_practice_task_keeps_fact_key() {
        let json = r#"{"id":"2024-3","fact":"Kauf Mobiliar gegen Bank 3'400 CHF","status":"open"}"#;
        let task: PracticeTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.text, "Kauf Mobiliar gegen Bank 3'400 CHF");
        assert_eq!(task.status, TaskStatus::Open);
        let back = serde_json::to_string(&task).unwrap();
        assert!(back.contains("\"fact\":"));
    }

    #[test]
    fn test_practice_task_status_defaults_to_open() {
        let json = r#"{"id":"2024-1","fact":"Barverkauf über Kasse 1'200 CHF"}"#;
        let task: PracticeTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::Open);
    }

    #[test]
    fn test_company_legacy_created_at_key() {
        let json = r#"{"id":"c_1","name":"Test GmbH","legal":"GmbH","capital":20000,
                       "industry":"IT","purpose":"Software","size":3,
                       "createdAt":"2024-05-01T10:00:00Z"}"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.name, "Test GmbH");
        assert_eq!(company.created_at, "2024-05-01T10:00:00Z");
    }
}
