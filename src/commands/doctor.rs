// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::allowance::total_expenses;
use crate::store::ExpenseStore;
use crate::utils::{get_settings, parse_timestamp, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

/// Rows the rollover engine would refuse, plus settings that make the
/// allowance meaningless. Each entry is `(issue, detail)`.
pub fn find_issues(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    let mut stmt = conn.prepare("SELECT id, date, amount FROM transactions ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let amount: String = r.get(2)?;
        if parse_timestamp(&date).is_err() {
            rows.push(vec!["bad_date".into(), format!("#{} '{}'", id, date)]);
        }
        match amount.parse::<Decimal>() {
            Err(_) => rows.push(vec!["bad_amount".into(), format!("#{} '{}'", id, amount)]),
            Ok(a) if a < Decimal::ZERO => {
                rows.push(vec!["negative_amount".into(), format!("#{} {}", id, a)])
            }
            Ok(_) => {}
        }
    }

    let settings = get_settings(conn)?;
    if settings.income.is_zero() {
        rows.push(vec!["no_income".into(), "daily allowance is zero".into()]);
    }
    let expenses = total_expenses(&conn.list_expenses()?);
    if expenses > settings.income {
        rows.push(vec![
            "expenses_exceed_income".into(),
            format!("{} > {}", expenses, settings.income),
        ]);
    }
    Ok(rows)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = find_issues(conn)?;
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
