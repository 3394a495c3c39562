// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::allowance::AllowanceSummary;
use crate::store::ExpenseStore;
use crate::utils::{fmt_money, get_settings, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            let category = sub.get_one::<String>("category").unwrap().trim();
            let id = conn.add_expense(name, amount, category)?;
            println!("Added expense #{} '{}' ({})", id, name, amount);
        }
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            if !conn.remove_expense(id)? {
                bail!("Expense #{} not found", id);
            }
            println!("Removed expense #{}", id);
        }
        _ => {}
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let expenses = conn.list_expenses()?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &expenses)? {
        return Ok(());
    }
    let settings = get_settings(conn)?;
    let sym = settings.currency_symbol.as_str();
    let summary = AllowanceSummary::new(settings.income, &expenses);
    let rows = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.name.clone(),
                e.category.clone(),
                fmt_money(&e.amount, sym),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["ID", "Name", "Category", "Amount"], rows));
    println!(
        "Income {}  Expenses {}  Left over {}",
        fmt_money(&summary.income, sym),
        fmt_money(&summary.total_expenses, sym),
        fmt_money(&summary.leftover, sym)
    );
    Ok(())
}
