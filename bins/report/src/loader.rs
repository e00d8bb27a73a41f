//! CSV loading of ledger data.
//!
//! Accounts file columns: `ACCOUNT,LABEL`.
//! Journal file columns: `ACCOUNT,PERIOD,DEBIT,CREDIT`.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use chrono::NaiveDate;
use csv::{Position, ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tally_core::ledger::{Account, JournalEntry};
use tally_shared::types::AccountNumber;
use tally_shared::{AppError, AppResult};
use tracing::debug;

/// Largest accepted debit or credit (10^15). Keeps journal totals far from
/// the `Decimal` range.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

#[derive(Debug, Deserialize)]
struct AccountRecord {
    #[serde(rename = "ACCOUNT")]
    account: String,
    #[serde(rename = "LABEL")]
    label: String,
}

#[derive(Debug, Deserialize)]
struct JournalRecord {
    #[serde(rename = "ACCOUNT")]
    account: String,
    #[serde(rename = "PERIOD")]
    period: String,
    #[serde(rename = "DEBIT", default)]
    debit: String,
    #[serde(rename = "CREDIT", default)]
    credit: String,
}

/// Loads the chart of accounts from a CSV file.
pub fn load_accounts(path: impl AsRef<Path>) -> AppResult<Vec<Account>> {
    let path = path.as_ref();
    let accounts = read_accounts(open(path)?, &path.display().to_string())?;
    debug!(path = %path.display(), count = accounts.len(), "Loaded accounts");
    Ok(accounts)
}

/// Loads journal entries from a CSV file, parsing periods with `date_format`.
pub fn load_journal(path: impl AsRef<Path>, date_format: &str) -> AppResult<Vec<JournalEntry>> {
    let path = path.as_ref();
    let entries = read_journal(open(path)?, &path.display().to_string(), date_format)?;
    debug!(path = %path.display(), count = entries.len(), "Loaded journal entries");
    Ok(entries)
}

/// Reads accounts from any CSV source. `source` names it in error messages.
pub fn read_accounts<R: Read>(reader: R, source: &str) -> AppResult<Vec<Account>> {
    read_records::<_, AccountRecord>(reader, source)?
        .into_iter()
        .map(|(line, record)| {
            let account =
                parse_account(&record.account).map_err(|msg| invalid(source, line, &msg))?;
            Ok(Account::new(account, record.label))
        })
        .collect()
}

/// Reads journal entries from any CSV source. `source` names it in error messages.
pub fn read_journal<R: Read>(
    reader: R,
    source: &str,
    date_format: &str,
) -> AppResult<Vec<JournalEntry>> {
    read_records::<_, JournalRecord>(reader, source)?
        .into_iter()
        .map(|(line, record)| {
            let account =
                parse_account(&record.account).map_err(|msg| invalid(source, line, &msg))?;
            let period = NaiveDate::parse_from_str(&record.period, date_format)
                .map_err(|e| invalid(source, line, &format!("bad period '{}': {e}", record.period)))?;
            let debit = parse_amount(&record.debit).map_err(|msg| invalid(source, line, &msg))?;
            let credit = parse_amount(&record.credit).map_err(|msg| invalid(source, line, &msg))?;
            Ok(JournalEntry::new(account, period, debit, credit))
        })
        .collect()
}

/// Deserializes every data record, paired with the line it starts on.
fn read_records<R: Read, T: DeserializeOwned>(
    reader: R,
    source: &str,
) -> AppResult<Vec<(u64, T)>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| invalid(source, 1, &e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    loop {
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                let line = e.position().map_or_else(|| rdr.position().line(), Position::line);
                return Err(invalid(source, line, &e.to_string()));
            }
        }
        let line = record.position().map_or_else(|| rdr.position().line(), Position::line);
        let row: T = record
            .deserialize(Some(&headers))
            .map_err(|e| invalid(source, line, &e.to_string()))?;
        rows.push((line, row));
    }

    Ok(rows)
}

fn parse_account(raw: &str) -> Result<AccountNumber, String> {
    raw.parse().map_err(|_| format!("bad account number '{raw}'"))
}

/// Parses a non-negative amount no larger than [`MAX_AMOUNT`]. A blank cell is zero.
fn parse_amount(raw: &str) -> Result<Decimal, String> {
    if raw.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let amount: Decimal = raw
        .parse()
        .map_err(|_| format!("bad amount '{raw}'"))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(format!("negative amount '{raw}'"));
    }
    if amount > Decimal::from(MAX_AMOUNT) {
        return Err(format!("amount '{raw}' exceeds {MAX_AMOUNT}"));
    }
    Ok(amount)
}

fn open(path: &Path) -> AppResult<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
        _ => AppError::Io(e),
    })
}

fn invalid(source: &str, line: u64, message: &str) -> AppError {
    AppError::Validation(format!("{source} line {line}: {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    const ISO: &str = "%Y-%m-%d";

    #[test]
    fn test_read_accounts() {
        let data = "ACCOUNT,LABEL\n1000,Cash\n 4000 ,\"Sales, domestic\"\n";

        let accounts = read_accounts(data.as_bytes(), "accounts.csv").unwrap();

        assert_eq!(
            accounts,
            vec![Account::new(1000, "Cash"), Account::new(4000, "Sales, domestic")]
        );
    }

    #[test]
    fn test_read_accounts_bad_number() {
        let data = "ACCOUNT,LABEL\n1000,Cash\nabc,Broken\n";

        let err = read_accounts(data.as_bytes(), "accounts.csv").unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("accounts.csv line 3"));
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_line_numbers_follow_multiline_fields() {
        let data = "ACCOUNT,LABEL\n1000,\"Cash\non hand\"\nabc,Broken\n";

        let err = read_accounts(data.as_bytes(), "accounts.csv").unwrap_err();

        assert!(err.to_string().contains("accounts.csv line 4"), "error: {err}");
    }

    #[test]
    fn test_read_journal() {
        let data = "ACCOUNT,PERIOD,DEBIT,CREDIT\n\
                    1000,2024-01-31,100.50,0\n\
                    4000,2024-02-29,,75\n";

        let entries = read_journal(data.as_bytes(), "journal.csv", ISO).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].account, AccountNumber(1000));
        assert_eq!(entries[0].period, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(entries[0].debit, dec!(100.50));
        assert_eq!(entries[1].debit, Decimal::ZERO);
        assert_eq!(entries[1].credit, dec!(75));
    }

    #[test]
    fn test_read_journal_custom_date_format() {
        let data = "ACCOUNT,PERIOD,DEBIT,CREDIT\n1,31/01/2024,1,0\n";

        let entries = read_journal(data.as_bytes(), "journal.csv", "%d/%m/%Y").unwrap();

        assert_eq!(entries[0].period, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_read_journal_rejects_bad_rows() {
        let cases = [
            ("1,not-a-date,1,0", "bad period"),
            ("1,2024-01-01,ten,0", "bad amount"),
            ("1,2024-01-01,0,-5", "negative amount"),
            ("x,2024-01-01,1,0", "bad account number"),
        ];

        for (row, expected) in cases {
            let data = format!("ACCOUNT,PERIOD,DEBIT,CREDIT\n{row}\n");
            let err = read_journal(data.as_bytes(), "journal.csv", ISO).unwrap_err();
            assert_eq!(err.error_code(), "VALIDATION_ERROR", "row: {row}");
            assert!(err.to_string().contains(expected), "row: {row}, error: {err}");
            assert!(err.to_string().contains("journal.csv line 2"));
        }
    }

    #[test]
    fn test_read_journal_amount_ceiling() {
        let at_limit = format!("ACCOUNT,PERIOD,DEBIT,CREDIT\n1,2024-01-01,{MAX_AMOUNT},0\n");
        let entries = read_journal(at_limit.as_bytes(), "journal.csv", ISO).unwrap();
        assert_eq!(entries[0].debit, Decimal::from(MAX_AMOUNT));

        let data = "ACCOUNT,PERIOD,DEBIT,CREDIT\n\
                    1,2024-01-01,1,0\n\
                    1,2024-01-01,79228162514264337593543950335,0\n";
        let err = read_journal(data.as_bytes(), "journal.csv", ISO).unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("journal.csv line 3"), "error: {err}");
        assert!(err.to_string().contains("exceeds"), "error: {err}");
    }

    #[test]
    fn test_load_from_files() {
        let mut accounts_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(accounts_file, "ACCOUNT,LABEL\n1,Cash\n2,Sales").unwrap();
        let mut journal_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(journal_file, "ACCOUNT,PERIOD,DEBIT,CREDIT\n1,2024-01-31,100,0").unwrap();

        let accounts = load_accounts(accounts_file.path()).unwrap();
        let entries = load_journal(journal_file.path(), ISO).unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");

        let err = load_accounts(&missing).unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.error_code(), "NOT_FOUND");
    }
}
