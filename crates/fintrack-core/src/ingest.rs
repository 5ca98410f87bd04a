//! Boundary validation for loosely typed expense records.
//!
//! Records coming from the data-fetch layer carry dates as strings and
//! amounts as numbers or numeric strings. Everything here converts them into
//! [`ExpenseRecord`]s before they reach the engine.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use fintrack_domain::ExpenseRecord;

use crate::CoreError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Amount as delivered by the fetch layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

/// Expense record before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawExpense {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub amount: Option<RawAmount>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub category_color: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RawExpense {
    /// Converts into a typed record, generating an id when none is present.
    pub fn validate(self) -> Result<ExpenseRecord, CoreError> {
        let date = self
            .date
            .as_deref()
            .ok_or_else(|| CoreError::Validation("missing date".into()))
            .and_then(parse_record_date)?;
        let amount = self
            .amount
            .as_ref()
            .ok_or_else(|| CoreError::Validation("missing amount".into()))
            .and_then(parse_amount)?;
        let id = match self.id.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                Uuid::parse_str(raw).map_err(|_| CoreError::InvalidIdentifier(raw.to_string()))?
            }
            _ => Uuid::new_v4(),
        };

        Ok(ExpenseRecord {
            id,
            date,
            amount,
            category: self.category.unwrap_or_default(),
            category_color: self.category_color,
            notes: self.notes.filter(|notes| !notes.trim().is_empty()),
        })
    }
}

/// Parses a record date, discarding any time-of-day component.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the date in the timestamp's own
/// offset), and naive `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM:SS` forms.
pub fn parse_record_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.date_naive());
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|stamp| stamp.date())
        .ok_or_else(|| CoreError::InvalidDate(raw.to_string()))
}

/// Parses an amount, rejecting negative and non-finite values.
pub fn parse_amount(raw: &RawAmount) -> Result<f64, CoreError> {
    let value = match raw {
        RawAmount::Number(value) => *value,
        RawAmount::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| CoreError::InvalidAmount(format!("`{text}` is not a number")))?,
    };
    non_negative(value).map_err(CoreError::InvalidAmount)
}

/// Checks a profile's total budget, which may be zero but never negative.
pub fn validate_budget(value: f64) -> Result<f64, CoreError> {
    non_negative(value).map_err(CoreError::InvalidBudget)
}

fn non_negative(value: f64) -> Result<f64, String> {
    if !value.is_finite() {
        return Err(format!("{value} is not finite"));
    }
    if value < 0.0 {
        return Err(format!("{value} is negative"));
    }
    Ok(value)
}

/// A record dropped during lenient ingestion.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IngestIssue {
    pub index: usize,
    pub reason: String,
}

/// Records accepted by lenient ingestion plus the ones it skipped.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct IngestOutcome {
    pub records: Vec<ExpenseRecord>,
    pub issues: Vec<IngestIssue>,
}

/// Validates every record, failing on the first invalid one.
pub fn ingest_strict(raws: Vec<RawExpense>) -> Result<Vec<ExpenseRecord>, CoreError> {
    raws.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            raw.validate().map_err(|err| CoreError::RejectedRecord {
                index,
                source: Box::new(err),
            })
        })
        .collect()
}

/// Validates every record, skipping invalid ones with a warning.
pub fn ingest_lenient(raws: Vec<RawExpense>) -> IngestOutcome {
    let mut outcome = IngestOutcome::default();
    for (index, raw) in raws.into_iter().enumerate() {
        match raw.validate() {
            Ok(record) => outcome.records.push(record),
            Err(err) => {
                warn!(index, error = %err, "skipping invalid expense record");
                outcome.issues.push(IngestIssue {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }
    outcome
}
