//! Transaction store: sample data, CSV import and manual entry
//!
//! The store is append-only. Imports validate the header first (a missing
//! required column rejects the whole file) and then coerce each row; rows whose
//! date or amount cannot be coerced are dropped and reported in [`CsvImport`].

use std::io::Read;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::Transaction;

/// Columns every imported CSV must carry
pub const REQUIRED_COLUMNS: [&str; 3] = ["date", "category", "amount"];

/// Category used by the manual entry form when none is given
pub const DEFAULT_MANUAL_CATEGORY: &str = "Misc";

const SAMPLE: [(i32, u32, u32, &str, f64, &str); 8] = [
    (2025, 8, 1, "Food", 250.0, "Lunch"),
    (2025, 8, 2, "Transport", 120.0, "Metro"),
    (2025, 8, 3, "Groceries", 1500.0, "Weekly groceries"),
    (2025, 8, 5, "Entertainment", 600.0, "Movie + snacks"),
    (2025, 8, 7, "Subscriptions", 299.0, "Music"),
    (2025, 8, 10, "Bills", 2200.0, "Electricity"),
    (2025, 8, 15, "Savings", -5000.0, "Monthly saving transfer"),
    (2025, 8, 20, "Investment", -2000.0, "SIP"),
];

/// Result of a CSV import
#[derive(Debug, Clone, Default)]
pub struct CsvImport {
    /// Cleaned transactions in file order
    pub transactions: Vec<Transaction>,
    /// 1-based data row numbers that were dropped during coercion
    pub dropped_rows: Vec<usize>,
}

/// Fixed seed set spanning August 2025
pub fn load_sample() -> Vec<Transaction> {
    SAMPLE
        .iter()
        .map(|&(y, m, d, category, amount, description)| {
            let date = NaiveDate::from_ymd_opt(y, m, d).expect("sample dates are valid");
            Transaction::new(date, category, amount, description)
        })
        .collect()
}

/// Parse a transaction CSV, silently dropping rows that fail coercion
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    parse_csv_detailed(reader).map(|import| import.transactions)
}

/// Parse a transaction CSV, keeping track of which rows were dropped
pub fn parse_csv_detailed<R: Read>(reader: R) -> Result<CsvImport> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = Columns::locate(&headers)?;

    let mut import = CsvImport::default();

    for (idx, result) in rdr.records().enumerate() {
        let row = idx + 1;
        let record = result?;

        match columns.coerce(&record) {
            Ok(tx) => import.transactions.push(tx),
            Err(e) => {
                debug!(row, error = %e, "Dropping CSV row");
                import.dropped_rows.push(row);
            }
        }
    }

    debug!(
        parsed = import.transactions.len(),
        dropped = import.dropped_rows.len(),
        "Parsed transaction CSV"
    );
    Ok(import)
}

/// Column positions resolved from the header row
struct Columns {
    date: usize,
    category: usize,
    amount: usize,
    description: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| -> Option<usize> {
            headers.iter().position(|h| {
                h.trim_start_matches('\u{feff}')
                    .trim()
                    .eq_ignore_ascii_case(name)
            })
        };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|&name| find(name).is_none())
            .map(|name| name.to_string())
            .collect();

        match (find("date"), find("category"), find("amount")) {
            (Some(date), Some(category), Some(amount)) => Ok(Self {
                date,
                category,
                amount,
                description: find("description"),
            }),
            _ => Err(Error::Schema { missing }),
        }
    }

    fn coerce(&self, record: &StringRecord) -> Result<Transaction> {
        let date = parse_date(record.get(self.date).unwrap_or(""))?;
        let amount = parse_amount(record.get(self.amount).unwrap_or(""))?;
        let category = record.get(self.category).unwrap_or("");
        let description = self
            .description
            .and_then(|col| record.get(col))
            .unwrap_or("");

        Ok(Transaction::new(date, category, amount, description))
    }
}

/// Return `existing` with `record` appended, preserving insertion order
pub fn append(mut existing: Vec<Transaction>, record: Transaction) -> Vec<Transaction> {
    existing.push(record);
    existing
}

/// Build a transaction from the manual entry form
///
/// Missing fields take the form defaults: today's date, the "Misc" category
/// and an empty description.
pub fn manual_entry(
    date: Option<NaiveDate>,
    category: Option<&str>,
    amount: f64,
    description: Option<&str>,
) -> Result<Transaction> {
    if !amount.is_finite() {
        return Err(Error::InvalidData(format!(
            "Amount must be a finite number, got {}",
            amount
        )));
    }

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let category = category
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_MANUAL_CATEGORY);

    Ok(Transaction::new(
        date,
        category,
        amount,
        description.unwrap_or(""),
    ))
}

/// Resolve the session's starting transactions
///
/// An upload is always parsed and its failures are returned to the caller.
/// Only when no upload was supplied does `use_sample` pick between the sample
/// set and an empty store.
pub fn load_transactions<R: Read>(
    upload: Option<R>,
    use_sample: bool,
) -> Result<Vec<Transaction>> {
    match upload {
        Some(reader) => {
            parse_csv(reader).inspect_err(|e| warn!(error = %e, "Transaction import failed"))
        }
        None if use_sample => {
            info!("No transactions supplied, using sample data");
            Ok(load_sample())
        }
        None => Ok(Vec::new()),
    }
}

/// Parse a date string in various common formats
///
/// Month-first formats are tried before day-first ones, so `01/02/2025` is
/// January 2nd.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d",  // 2025-08-15
        "%m/%d/%Y",  // 08/15/2025
        "%m/%d/%y",  // 08/15/25
        "%m-%d-%Y",  // 08-15-2025
        "%d/%m/%Y",  // 15/08/2025 (European)
        "%Y/%m/%d",  // 2025/08/15
        "%d %b %Y",  // 15 Aug 2025
        "%b %d, %Y", // Aug 15, 2025
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(datetime.date());
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Ok(datetime.date_naive());
    }

    Err(Error::InvalidData(format!("Unable to parse date: {:?}", s)))
}

/// Parse an amount string, handling currency symbols and separators
pub fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', '₹', '€', '£', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    match cleaned.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::InvalidData(format!("Unable to parse amount: {:?}", s))),
    }
}
