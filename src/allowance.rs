// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Expense;

const DAYS_PER_MONTH: i64 = 30;

/// Whole-unit daily allowance: 80% of what is left of a month's income after
/// fixed expenses, spread over 30 days, never below zero.
pub fn daily_allowance(income: Decimal, total_expenses: Decimal) -> Decimal {
    let available = income - total_expenses;
    let daily = available / Decimal::from(DAYS_PER_MONTH) * Decimal::new(8, 1);
    daily.floor().max(Decimal::ZERO)
}

pub fn total_expenses(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllowanceSummary {
    pub income: Decimal,
    pub total_expenses: Decimal,
    pub leftover: Decimal,
    pub daily_allowance: Decimal,
    pub monthly_budget: Decimal,
    /// The 30-day allowance is larger than what income leaves after expenses.
    pub over_budget: bool,
}

impl AllowanceSummary {
    pub fn new(income: Decimal, expenses: &[Expense]) -> Self {
        let total = total_expenses(expenses);
        let leftover = income - total;
        let daily = daily_allowance(income, total);
        let monthly_budget = daily * Decimal::from(DAYS_PER_MONTH);
        Self {
            income,
            total_expenses: total,
            leftover,
            daily_allowance: daily,
            monthly_budget,
            over_budget: monthly_budget > leftover,
        }
    }
}
