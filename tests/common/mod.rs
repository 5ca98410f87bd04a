#![allow(dead_code)]

use std::{fs, path::PathBuf};

use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};
use tempfile::TempDir;

pub const PROFILE_ID: &str = "0b6f3f4e-2d1a-4c57-9a3e-5d7c1e2f8a90";

pub fn evaluation_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

pub fn day_string(days_ago: i64) -> String {
    (evaluation_day() - Duration::days(days_ago))
        .format("%Y-%m-%d")
        .to_string()
}

/// Input document with the given raw expenses and a 1000 budget.
pub fn input_document(expenses: Vec<Value>) -> Value {
    json!({
        "profile": {
            "id": PROFILE_ID,
            "email": "saver@example.com",
            "monthly_income": 3200.0,
            "total_budget": 1000.0,
            "savings_goal": 500.0,
            "current_savings": 120.0
        },
        "categories": [
            { "name": "Food", "limit": 300.0, "color": "bg-green-500" },
            { "name": "Transport", "limit": 150.0 }
        ],
        "expenses": expenses
    })
}

pub fn expense(days_ago: i64, amount: Value, category: &str) -> Value {
    json!({
        "date": day_string(days_ago),
        "amount": amount,
        "category": category
    })
}

/// Writes the document (and optionally a config) into a fresh temp dir.
pub fn write_workspace(document: &Value, config: Option<&str>) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("input.json");
    fs::write(&input, document.to_string()).expect("write input");
    let config_path = dir.path().join("config.json");
    if let Some(contents) = config {
        fs::write(&config_path, contents).expect("write config");
    }
    (dir, input, config_path)
}
