// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::NewTransaction;
use crate::rollover::dates::at_noon;
use crate::store::TransactionStore;
use crate::utils::{
    TIMESTAMP_FMT, fmt_money, get_settings, maybe_print_json, parse_date, parse_decimal,
    pretty_table,
};
use anyhow::{Result, bail};
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => remove(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Build the record `tx add` would store. An explicit day is taken at noon.
pub fn new_transaction(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount.is_sign_negative() && !amount.is_zero() {
        bail!("Amount must not be negative, got {}", amount);
    }
    let date = match sub.get_one::<String>("date") {
        Some(s) => at_noon(parse_date(s)?),
        None => chrono::Local::now().naive_local(),
    };
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "Quick Entry".to_string());
    Ok(NewTransaction {
        date,
        amount,
        category,
    })
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let tx = new_transaction(sub)?;
    let id = conn.append_transaction(&tx)?;
    let symbol = get_settings(conn)?.currency_symbol;
    println!(
        "Recorded #{} {} on {} ({})",
        id,
        fmt_money(&tx.amount, &symbol),
        tx.date.date(),
        tx.category
    );
    Ok(())
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !conn.remove_transaction(id)? {
        bail!("Transaction #{} not found", id);
    }
    println!("Removed transaction #{}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["ID", "Date", "Amount", "Category"], rows));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub amount: String,
    pub category: String,
}

/// Stored transactions, newest first, cut to `--limit` when given.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);
    let data = conn
        .list_transactions()?
        .into_iter()
        .rev()
        .take(limit)
        .map(|tx| TransactionRow {
            id: tx.id,
            date: tx.date.format(TIMESTAMP_FMT).to_string(),
            amount: tx.amount.to_string(),
            category: tx.category,
        })
        .collect();
    Ok(data)
}
