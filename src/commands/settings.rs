// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::allowance::AllowanceSummary;
use crate::store::ExpenseStore;
use crate::utils::{
    fmt_money, get_settings, maybe_print_json, parse_decimal, pretty_table, set_setting,
};
use anyhow::{Result, bail};
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(conn, sub)?,
        Some(("set", sub)) => set(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct SettingsView {
    username: String,
    currency_symbol: String,
    #[serde(flatten)]
    allowance: AllowanceSummary,
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let settings = get_settings(conn)?;
    let allowance = AllowanceSummary::new(settings.income, &conn.list_expenses()?);
    let sym = settings.currency_symbol.clone();
    let view = SettingsView {
        username: settings.username,
        currency_symbol: settings.currency_symbol,
        allowance,
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view)? {
        return Ok(());
    }
    let a = &view.allowance;
    let rows = vec![
        vec!["Name".into(), view.username.clone()],
        vec!["Monthly income".into(), fmt_money(&a.income, &sym)],
        vec!["Monthly expenses".into(), fmt_money(&a.total_expenses, &sym)],
        vec!["Left over".into(), fmt_money(&a.leftover, &sym)],
        vec!["Daily allowance".into(), fmt_money(&a.daily_allowance, &sym)],
        vec!["30-day budget".into(), fmt_money(&a.monthly_budget, &sym)],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    if a.over_budget {
        println!("Warning: your daily allowance exceeds what is left after expenses.");
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut changed = 0;
    if let Some(income) = sub.get_one::<String>("income") {
        let income = parse_decimal(income.trim())?;
        if income.is_sign_negative() && !income.is_zero() {
            bail!("Income must not be negative, got {}", income);
        }
        set_setting(conn, "income", &income.to_string())?;
        changed += 1;
    }
    if let Some(name) = sub.get_one::<String>("username") {
        set_setting(conn, "username", name.trim())?;
        changed += 1;
    }
    if let Some(sym) = sub.get_one::<String>("currency-symbol") {
        set_setting(conn, "currency_symbol", sym.trim())?;
        changed += 1;
    }
    if changed == 0 {
        bail!("Nothing to set; pass --income, --username or --currency-symbol");
    }
    let settings = get_settings(conn)?;
    let allowance = AllowanceSummary::new(settings.income, &conn.list_expenses()?);
    println!(
        "Daily allowance is now {}",
        fmt_money(&allowance.daily_allowance, &settings.currency_symbol)
    );
    Ok(())
}
