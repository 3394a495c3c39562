// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Days, NaiveDate};
use dailyroll::models::Transaction;
use dailyroll::rollover::dates::at_noon;
use dailyroll::rollover::{WeekVisibilityPolicy, compute_rollover, visible_weeks, week_by_number};
use rust_decimal::Decimal;

// 2025-03-03 is a Monday.
fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn spend_on(day: NaiveDate, amount: i64) -> Transaction {
    Transaction {
        id: 0,
        date: at_noon(day),
        amount: Decimal::from(amount),
        category: "Quick Entry".into(),
    }
}

fn every_day_of_first_week() -> Vec<Transaction> {
    (0..7)
        .map(|i| spend_on(d("2025-03-03") + Days::new(i), 3))
        .collect()
}

fn flags(txs: &[Transaction], reference: &str) -> Vec<bool> {
    compute_rollover(txs, Decimal::from(10), d(reference), None)
        .unwrap()
        .iter()
        .map(|w| w.is_visible)
        .collect()
}

#[test]
fn sunday_with_every_day_spent_opens_next_week() {
    assert_eq!(
        flags(&every_day_of_first_week(), "2025-03-09"),
        vec![true, true, false, false]
    );
}

#[test]
fn tuesday_without_next_week_spending_hides_it() {
    let weeks = compute_rollover(&[], Decimal::from(10), d("2025-03-04"), None).unwrap();
    assert_eq!(weeks.len(), 4);
    assert!(weeks[0].is_visible);
    assert!(!weeks[1].is_visible);
    // Still computed and reachable by number.
    let second = week_by_number(&weeks, 2).unwrap();
    assert_eq!(second.week_start_date, d("2025-03-10"));
    assert_eq!(visible_weeks(&weeks).count(), 1);
}

#[test]
fn sunday_reference_alone_opens_next_week() {
    assert_eq!(flags(&[], "2025-03-09"), vec![true, true, false, false]);
}

#[test]
fn fully_spent_week_opens_next_before_sunday() {
    // Sunday's entry was logged ahead of time.
    assert_eq!(
        flags(&every_day_of_first_week(), "2025-03-07"),
        vec![true, true, false, false]
    );
}

#[test]
fn week_with_spending_is_visible_past_a_gap() {
    let txs = vec![spend_on(d("2025-03-19"), 5)];
    assert_eq!(flags(&txs, "2025-03-05"), vec![true, false, true, false]);
}

#[test]
fn week_with_spending_is_visible_next_to_current() {
    let txs = vec![spend_on(d("2025-03-11"), 5)];
    assert_eq!(flags(&txs, "2025-03-05"), vec![true, true, false, false]);
}

#[test]
fn policy_is_independent_of_arithmetic() {
    let weeks = compute_rollover(&[], Decimal::from(10), d("2025-03-09"), Some(2)).unwrap();
    let hidden: Vec<_> = weeks
        .iter()
        .cloned()
        .map(|mut w| {
            w.is_visible = false;
            w
        })
        .collect();
    let reapplied = WeekVisibilityPolicy.apply(hidden, d("2025-03-09"));
    assert_eq!(reapplied, weeks);
    assert_eq!(
        WeekVisibilityPolicy.visibility(&weeks, d("2025-03-09")),
        vec![true, true]
    );
}
