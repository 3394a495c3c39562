// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::dates::CalendarDay;
use crate::models::Transaction;

/// Per-calendar-day spending totals over a transaction snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyLedger {
    totals: BTreeMap<NaiveDate, Decimal>,
}

impl DailyLedger {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut totals = BTreeMap::new();
        for tx in transactions {
            *totals
                .entry(tx.date.calendar_day())
                .or_insert(Decimal::ZERO) += tx.amount;
        }
        Self { totals }
    }

    /// Sum of all amounts recorded on `day`, zero if none.
    pub fn spent_on<D: CalendarDay>(&self, day: &D) -> Decimal {
        self.totals
            .get(&day.calendar_day())
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Number of distinct days with at least one transaction.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
