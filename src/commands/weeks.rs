// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::WeekSummary;
use crate::rollover::{rollover_from, today_summary, visible_weeks, week_by_number};
use crate::store::AllowanceSource;
use crate::utils::{fmt_money, get_settings, maybe_print_json, parse_date, pretty_table};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;

/// `--date` if given, else today's local date.
pub fn reference_date(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("date") {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub fn compute(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<WeekSummary>> {
    let reference = reference_date(sub)?;
    let horizon = sub.get_one::<u32>("weeks").copied();
    rollover_from(conn, reference, horizon)
}

/// The weeks `week` prints: visible ones by default, all with `--all`, or one
/// explicitly requested by `--week`.
pub fn select<'a>(
    weeks: &'a [WeekSummary],
    sub: &clap::ArgMatches,
) -> Result<Vec<&'a WeekSummary>> {
    if let Some(n) = sub.get_one::<u32>("week") {
        let week = week_by_number(weeks, *n)
            .with_context(|| format!("Week {} is outside the {}-week horizon", n, weeks.len()))?;
        return Ok(vec![week]);
    }
    if sub.get_flag("all") {
        return Ok(weeks.iter().collect());
    }
    Ok(visible_weeks(weeks).collect())
}

pub fn handle_week(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let weeks = compute(conn, sub)?;
    let shown = select(&weeks, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &shown)? {
        return Ok(());
    }
    let sym = get_settings(conn)?.currency_symbol;
    for week in shown {
        print_week(week, &sym);
    }
    Ok(())
}

fn print_week(week: &WeekSummary, sym: &str) {
    let hidden = if week.is_visible { "" } else { " (not yet offered)" };
    println!(
        "Week {} from {}{}: spent {}, carries {}",
        week.week_number,
        week.week_start_date,
        hidden,
        fmt_money(&week.total_spent, sym),
        fmt_money(&week.ending_carryover, sym)
    );
    let rows = week
        .days
        .iter()
        .map(|d| {
            let status = match (d.is_today, d.is_settled) {
                (true, _) => "today",
                (false, true) => "settled",
                (false, false) => "projected",
            };
            vec![
                d.day_label.to_string(),
                d.date.to_string(),
                fmt_money(&d.spent, sym),
                fmt_money(&d.adjusted_budget, sym),
                fmt_money(&d.remaining_today, sym),
                status.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Day", "Date", "Spent", "Budget", "Remaining", ""], rows)
    );
}

pub fn handle_today(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let reference = reference_date(sub)?;
    let weeks = rollover_from(conn, reference, Some(1))?;
    let base = conn.base_daily_allowance()?;
    let today = today_summary(&weeks, base)
        .with_context(|| format!("No figures computed for {}", reference))?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &today)? {
        return Ok(());
    }
    let settings = get_settings(conn)?;
    let sym = settings.currency_symbol.as_str();
    println!(
        "Hi {}, your budget for {} is {}",
        settings.username,
        today.date,
        fmt_money(&today.adjusted_budget, sym)
    );
    if !today.difference.is_zero() {
        let dir = if today.difference > Decimal::ZERO {
            "up"
        } else {
            "down"
        };
        println!(
            "That is {} {} on your base allowance",
            dir,
            fmt_money(&today.difference.abs(), sym)
        );
    }
    if today.spent > Decimal::ZERO {
        println!("Spent today: {}", fmt_money(&today.spent, sym));
    }
    Ok(())
}
