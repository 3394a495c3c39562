// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Calendar arithmetic for Monday-aligned weeks.
//!
//! Everything here works on calendar dates. Timestamps are projected onto
//! their date through [`CalendarDay`] before any comparison, so a transaction
//! logged at 23:59 and one logged at 00:01 on the same day land together.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::models::DayLabel;

/// Anything that sits on a calendar date.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// `date` at 12:00, clear of DST transitions on either side of midnight.
pub fn at_noon(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(12, 0, 0)
        .unwrap_or_else(|| date.and_time(NaiveTime::default()))
}

/// Monday of the week containing `date`, `None` when that Monday falls
/// before the first representable date.
pub fn start_of_week(date: NaiveDate) -> Option<NaiveDate> {
    let back = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(back))
}

/// Monday of the week containing `day`, pinned to noon.
pub fn week_anchor<D: CalendarDay>(day: &D) -> Option<NaiveDateTime> {
    start_of_week(day.calendar_day()).map(at_noon)
}

pub fn day_label<D: CalendarDay>(day: &D) -> DayLabel {
    DayLabel::from(day.calendar_day().weekday())
}

/// Same year, month and day; time-of-day is ignored.
pub fn is_reference_day<A: CalendarDay, B: CalendarDay>(day: &A, reference: &B) -> bool {
    day.calendar_day() == reference.calendar_day()
}

pub fn shift_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

/// The seven dates Mon..Sun starting at `monday`.
pub fn week_dates(monday: NaiveDate) -> Option<[NaiveDate; 7]> {
    let mut dates = [monday; 7];
    for (offset, slot) in dates.iter_mut().enumerate().skip(1) {
        *slot = shift_days(monday, offset as u64)?;
    }
    Some(dates)
}
