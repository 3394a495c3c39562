// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::WeekSummary;

/// Decides which computed weeks are offered to a caller by default.
///
/// The week holding the reference date is always offered. The week after a
/// visible week opens up once that week has spending on all seven days, or
/// once the reference date is its Sunday. A week with any spending recorded
/// against it is offered regardless. Everything else stays computed but
/// hidden until asked for explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekVisibilityPolicy;

impl WeekVisibilityPolicy {
    /// One flag per week, in order.
    pub fn visibility(&self, weeks: &[WeekSummary], reference: NaiveDate) -> Vec<bool> {
        let mut flags: Vec<bool> = Vec::with_capacity(weeks.len());
        for (k, week) in weeks.iter().enumerate() {
            let visible = if k == 0 {
                true
            } else {
                let prev = &weeks[k - 1];
                week.has_transactions || (flags[k - 1] && unlocks_next(prev, reference))
            };
            flags.push(visible);
        }
        flags
    }

    pub fn apply(&self, weeks: Vec<WeekSummary>, reference: NaiveDate) -> Vec<WeekSummary> {
        let flags = self.visibility(&weeks, reference);
        weeks
            .into_iter()
            .zip(flags)
            .map(|(week, is_visible)| WeekSummary { is_visible, ..week })
            .collect()
    }
}

fn unlocks_next(week: &WeekSummary, reference: NaiveDate) -> bool {
    week.days.iter().all(|d| d.spent > Decimal::ZERO) || week.last_day().date == reference
}

pub fn visible_weeks(weeks: &[WeekSummary]) -> impl Iterator<Item = &WeekSummary> {
    weeks.iter().filter(|w| w.is_visible)
}

/// Any computed week, visible or not.
pub fn week_by_number(weeks: &[WeekSummary], week_number: u32) -> Option<&WeekSummary> {
    weeks.iter().find(|w| w.week_number == week_number)
}
