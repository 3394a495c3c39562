// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};
use dailyroll::models::{DayLabel, Transaction};
use dailyroll::rollover::dates::{at_noon, week_dates};
use dailyroll::rollover::{DailyLedger, day_label, is_reference_day, start_of_week, week_anchor};
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn weeks_start_on_monday() {
    assert_eq!(start_of_week(d("2025-03-03")), Some(d("2025-03-03")));
    assert_eq!(start_of_week(d("2025-03-05")), Some(d("2025-03-03")));
    assert_eq!(start_of_week(d("2025-03-09")), Some(d("2025-03-03")));
    // across a year boundary
    assert_eq!(start_of_week(d("2025-01-01")), Some(d("2024-12-30")));
}

#[test]
fn week_start_before_calendar_range_is_none() {
    // The earliest representable date is not a Monday.
    assert_ne!(day_label(&NaiveDate::MIN), DayLabel::Mon);
    assert_eq!(start_of_week(NaiveDate::MIN), None);
    assert_eq!(week_anchor(&NaiveDate::MIN), None);
}

#[test]
fn week_anchor_is_monday_noon() {
    let late = d("2025-03-09").and_hms_opt(23, 59, 59).unwrap();
    let anchor = week_anchor(&late).unwrap();
    assert_eq!(anchor.date(), d("2025-03-03"));
    assert_eq!(anchor.time(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    assert_eq!(at_noon(d("2025-03-03")), anchor);
}

#[test]
fn labels_follow_position_in_week() {
    let dates = week_dates(d("2025-03-03")).unwrap();
    let labels: Vec<DayLabel> = dates.iter().map(day_label).collect();
    assert_eq!(labels, DayLabel::ALL.to_vec());
    assert_eq!(dates[6], d("2025-03-09"));
    assert_eq!(DayLabel::Thu.to_string(), "Thu");
}

#[test]
fn reference_day_ignores_time_of_day() {
    let morning = d("2025-03-05").and_hms_opt(0, 0, 1).unwrap();
    let night = d("2025-03-05").and_hms_opt(23, 59, 0).unwrap();
    assert!(is_reference_day(&morning, &night));
    assert!(is_reference_day(&d("2025-03-05"), &night));
    assert!(!is_reference_day(&d("2025-03-06"), &night));

    let offset = FixedOffset::east_opt(5 * 3600).unwrap();
    let zoned = offset.with_ymd_and_hms(2025, 3, 5, 22, 0, 0).unwrap();
    assert!(is_reference_day(&zoned, &d("2025-03-05")));
}

#[test]
fn ledger_groups_by_calendar_day() {
    let at = |day: &str, h: u32, amount: i64| Transaction {
        id: 0,
        date: d(day).and_hms_opt(h, 0, 0).unwrap(),
        amount: Decimal::from(amount),
        category: "Quick Entry".into(),
    };
    let ledger = DailyLedger::from_transactions(&[
        at("2025-03-03", 1, 4),
        at("2025-03-03", 22, 6),
        at("2025-03-04", 12, 1),
    ]);
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.spent_on(&d("2025-03-03")), Decimal::from(10));
    assert_eq!(
        ledger.spent_on(&d("2025-03-04").and_hms_opt(6, 0, 0).unwrap()),
        Decimal::from(1)
    );
    assert_eq!(ledger.spent_on(&d("2025-03-05")), Decimal::ZERO);
    assert!(DailyLedger::from_transactions(&[]).is_empty());
}
