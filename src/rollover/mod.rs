// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The rollover engine. Pure and stateless: every call rebuilds all figures
//! from the transaction snapshot it is handed.

pub mod calculator;
pub mod dates;
pub mod ledger;
pub mod visibility;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

pub use calculator::{DEFAULT_HORIZON_WEEKS, compute_rollover, to_cents};
pub use dates::{CalendarDay, day_label, is_reference_day, start_of_week, week_anchor};
pub use ledger::DailyLedger;
pub use visibility::{WeekVisibilityPolicy, visible_weeks, week_by_number};

use crate::models::{DaySummary, WeekSummary};
use crate::store::{AllowanceSource, TransactionStore};

/// Headline figures for the reference day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodaySummary {
    pub date: NaiveDate,
    pub base_daily_allowance: Decimal,
    pub adjusted_budget: Decimal,
    pub spent: Decimal,
    pub remaining_today: Decimal,
    /// `adjusted_budget - base_daily_allowance`; positive when earlier days underspent.
    pub difference: Decimal,
}

pub fn find_today(weeks: &[WeekSummary]) -> Option<&DaySummary> {
    weeks.iter().flat_map(|w| w.days.iter()).find(|d| d.is_today)
}

pub fn today_summary(weeks: &[WeekSummary], base_daily_allowance: Decimal) -> Option<TodaySummary> {
    find_today(weeks).map(|day| TodaySummary {
        date: day.date,
        base_daily_allowance,
        adjusted_budget: day.adjusted_budget,
        spent: day.spent,
        remaining_today: day.remaining_today,
        difference: day.adjusted_budget - base_daily_allowance,
    })
}

/// Snapshot `source` and run the engine over it.
pub fn rollover_from<S>(
    source: &S,
    reference: NaiveDate,
    horizon_weeks: Option<u32>,
) -> Result<Vec<WeekSummary>>
where
    S: TransactionStore + AllowanceSource + ?Sized,
{
    let transactions = source.list_transactions()?;
    let base = source.base_daily_allowance()?;
    Ok(compute_rollover(&transactions, base, reference, horizon_weeks)?)
}
