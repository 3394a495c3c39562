// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Day-by-day carryover over a multi-week horizon.
//!
//! Settled days (on or before the reference date) pass their leftover to the
//! next day one step at a time and are never revised. Once the walk crosses
//! into the future, the carryover at that moment is spread evenly over the
//! rest of that week instead of compounding. Each week hands the next one
//! `7 * base + incoming - spent`.
//!
//! Accumulation is exact; figures are rounded to cents only when a
//! [`DaySummary`] or [`WeekSummary`] is built.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::dates::{day_label, is_reference_day, shift_days, start_of_week, week_dates};
use super::ledger::DailyLedger;
use super::visibility::WeekVisibilityPolicy;
use crate::error::{RolloverError, RolloverResult};
use crate::models::{DaySummary, Transaction, WeekSummary};

pub const DEFAULT_HORIZON_WEEKS: u32 = 4;

const DAYS_PER_WEEK: usize = 7;

/// Unrounded figures for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct DayFigures {
    spent: Decimal,
    adjusted_budget: Decimal,
    remaining_today: Decimal,
    settled: bool,
}

/// Unrounded figures for one week.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WeekFigures {
    days: [DayFigures; DAYS_PER_WEEK],
    total_spent: Decimal,
    ending_carryover: Decimal,
}

/// Round half away from zero to the nearest cent.
pub fn to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes `horizon_weeks` (default 4) weekly summaries starting with the
/// week that contains `reference`, with visibility already applied.
pub fn compute_rollover(
    transactions: &[Transaction],
    base_daily_allowance: Decimal,
    reference: NaiveDate,
    horizon_weeks: Option<u32>,
) -> RolloverResult<Vec<WeekSummary>> {
    let horizon = horizon_weeks.unwrap_or(DEFAULT_HORIZON_WEEKS);
    if horizon < 1 {
        return Err(RolloverError::InvalidHorizon(horizon));
    }
    if base_daily_allowance < Decimal::ZERO {
        return Err(RolloverError::NegativeAllowance(base_daily_allowance));
    }

    let ledger = DailyLedger::from_transactions(transactions);
    let first_monday =
        start_of_week(reference).ok_or(RolloverError::DateOutOfRange(reference))?;

    let mut weeks = Vec::with_capacity(horizon as usize);
    let mut carryover = Decimal::ZERO;
    for w in 0..horizon {
        let monday = shift_days(first_monday, 7 * u64::from(w))
            .ok_or(RolloverError::DateOutOfRange(first_monday))?;
        let dates = week_dates(monday).ok_or(RolloverError::DateOutOfRange(monday))?;
        let figures = roll_week(&ledger, &dates, base_daily_allowance, carryover, reference);
        carryover = figures.ending_carryover;
        weeks.push(emit_week(w + 1, &dates, &figures, reference));
    }

    let weeks = WeekVisibilityPolicy.apply(weeks, reference);
    debug!(
        horizon,
        transactions = transactions.len(),
        active_days = ledger.len(),
        visible = weeks.iter().filter(|w| w.is_visible).count(),
        %reference,
        "computed rollover"
    );
    Ok(weeks)
}

fn roll_week(
    ledger: &DailyLedger,
    dates: &[NaiveDate; DAYS_PER_WEEK],
    base: Decimal,
    incoming: Decimal,
    reference: NaiveDate,
) -> WeekFigures {
    let mut days = [DayFigures::default(); DAYS_PER_WEEK];
    let mut carryover = incoming;
    // Per-day share of the carryover, fixed when the first future day is reached.
    let mut projected_share: Option<Decimal> = None;

    for (i, date) in dates.iter().enumerate() {
        let spent = ledger.spent_on(date);
        let settled = *date <= reference;
        let adjusted_budget = if settled {
            base + carryover
        } else {
            let share = *projected_share
                .get_or_insert_with(|| carryover / Decimal::from(DAYS_PER_WEEK - i));
            base + share
        };
        let remaining_today = adjusted_budget - spent;
        if settled {
            carryover = remaining_today;
        }
        days[i] = DayFigures {
            spent,
            adjusted_budget,
            remaining_today,
            settled,
        };
    }

    let total_spent: Decimal = days.iter().map(|d| d.spent).sum();
    let ending_carryover = base * Decimal::from(DAYS_PER_WEEK) + incoming - total_spent;
    WeekFigures {
        days,
        total_spent,
        ending_carryover,
    }
}

fn emit_week(
    week_number: u32,
    dates: &[NaiveDate; DAYS_PER_WEEK],
    figures: &WeekFigures,
    reference: NaiveDate,
) -> WeekSummary {
    let days = std::array::from_fn(|i| {
        let f = &figures.days[i];
        DaySummary {
            date: dates[i],
            day_label: day_label(&dates[i]),
            spent: f.spent,
            adjusted_budget: to_cents(f.adjusted_budget),
            remaining_today: to_cents(f.remaining_today),
            is_today: is_reference_day(&dates[i], &reference),
            is_settled: f.settled,
        }
    });
    WeekSummary {
        week_start_date: dates[0],
        week_number,
        days,
        total_spent: to_cents(figures.total_spent),
        ending_carryover: to_cents(figures.ending_carryover),
        has_transactions: figures.total_spent > Decimal::ZERO,
        is_visible: false,
    }
}
