// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recorded spend. `amount` is a non-negative outflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDateTime,
    pub amount: Decimal,
    pub category: String,
}

/// A transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: NaiveDateTime,
    pub amount: Decimal,
    pub category: String,
}

/// A fixed monthly outgoing (rent, subscriptions) deducted from income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub name: String,
    pub amount: Decimal,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub income: Decimal,
    pub username: String,
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            income: Decimal::ZERO,
            username: "User".to_string(),
            currency_symbol: "£".to_string(),
        }
    }
}

/// Position of a day inside a Monday-aligned week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayLabel {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayLabel {
    pub const ALL: [DayLabel; 7] = [
        DayLabel::Mon,
        DayLabel::Tue,
        DayLabel::Wed,
        DayLabel::Thu,
        DayLabel::Fri,
        DayLabel::Sat,
        DayLabel::Sun,
    ];

    /// Zero-based offset from Monday.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayLabel::Mon => "Mon",
            DayLabel::Tue => "Tue",
            DayLabel::Wed => "Wed",
            DayLabel::Thu => "Thu",
            DayLabel::Fri => "Fri",
            DayLabel::Sat => "Sat",
            DayLabel::Sun => "Sun",
        }
    }
}

impl From<Weekday> for DayLabel {
    fn from(w: Weekday) -> Self {
        DayLabel::ALL[w.num_days_from_monday() as usize]
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub day_label: DayLabel,
    pub spent: Decimal,
    pub adjusted_budget: Decimal,
    pub remaining_today: Decimal,
    pub is_today: bool,
    pub is_settled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Monday of this week.
    pub week_start_date: NaiveDate,
    /// 1-based, chronological.
    pub week_number: u32,
    pub days: [DaySummary; 7],
    pub total_spent: Decimal,
    pub ending_carryover: Decimal,
    pub has_transactions: bool,
    pub is_visible: bool,
}

impl WeekSummary {
    pub fn day(&self, label: DayLabel) -> &DaySummary {
        &self.days[label.index()]
    }

    pub fn last_day(&self) -> &DaySummary {
        self.day(DayLabel::Sun)
    }
}
