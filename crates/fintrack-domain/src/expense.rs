//! Domain model for logged expenses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single expense entered by the user. Several records may share a date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExpenseRecord {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            category: String::new(),
            category_color: None,
            notes: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns `true` when the record was filed under `category`.
    pub fn belongs_to(&self, category: &str) -> bool {
        self.category == category
    }
}

impl Identifiable for ExpenseRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for ExpenseRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Dated for ExpenseRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
