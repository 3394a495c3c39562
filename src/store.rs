// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Collaborators the engine reads its snapshot from, backed by SQLite.
//!
//! This is the ingestion boundary: rows written through here carry a valid
//! timestamp and a non-negative amount, so the engine never has to check.

use anyhow::{Context, Result, bail};
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use tracing::debug;

use crate::allowance::{daily_allowance, total_expenses};
use crate::models::{Expense, NewTransaction, Transaction};
use crate::utils::{TIMESTAMP_FMT, get_settings, parse_timestamp};

pub trait TransactionStore {
    fn list_transactions(&self) -> Result<Vec<Transaction>>;
    /// Returns the identity of the stored row.
    fn append_transaction(&self, tx: &NewTransaction) -> Result<i64>;
    /// `false` when no row had that identity.
    fn remove_transaction(&self, id: i64) -> Result<bool>;
}

pub trait ExpenseStore {
    fn list_expenses(&self) -> Result<Vec<Expense>>;
    fn add_expense(&self, name: &str, amount: Decimal, category: &str) -> Result<i64>;
    fn remove_expense(&self, id: i64) -> Result<bool>;
}

pub trait AllowanceSource {
    fn base_daily_allowance(&self) -> Result<Decimal>;
}

fn parse_amount(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}' in database", s))
}

impl TransactionStore for Connection {
    fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let mut stmt =
            self.prepare("SELECT id, date, amount, category FROM transactions ORDER BY date, id")?;
        let mut rows = stmt.query([])?;
        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            let id: i64 = r.get(0)?;
            let date: String = r.get(1)?;
            let amount: String = r.get(2)?;
            let category: String = r.get(3)?;
            data.push(Transaction {
                id,
                date: parse_timestamp(&date)
                    .with_context(|| format!("Transaction {} has a bad date", id))?,
                amount: parse_amount(&amount)?,
                category,
            });
        }
        Ok(data)
    }

    fn append_transaction(&self, tx: &NewTransaction) -> Result<i64> {
        if tx.amount < Decimal::ZERO {
            bail!("Transaction amount must not be negative, got {}", tx.amount);
        }
        self.execute(
            "INSERT INTO transactions(date, amount, category) VALUES (?1, ?2, ?3)",
            params![
                tx.date.format(TIMESTAMP_FMT).to_string(),
                tx.amount.to_string(),
                tx.category
            ],
        )?;
        let id = self.last_insert_rowid();
        debug!(id, amount = %tx.amount, date = %tx.date, "stored transaction");
        Ok(id)
    }

    fn remove_transaction(&self, id: i64) -> Result<bool> {
        let n = self.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        debug!(id, removed = n, "remove transaction");
        Ok(n > 0)
    }
}

impl ExpenseStore for Connection {
    fn list_expenses(&self) -> Result<Vec<Expense>> {
        let mut stmt = self.prepare("SELECT id, name, amount, category FROM expenses ORDER BY id")?;
        let mut rows = stmt.query([])?;
        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            let amount: String = r.get(2)?;
            data.push(Expense {
                id: r.get(0)?,
                name: r.get(1)?,
                amount: parse_amount(&amount)?,
                category: r.get(3)?,
            });
        }
        Ok(data)
    }

    fn add_expense(&self, name: &str, amount: Decimal, category: &str) -> Result<i64> {
        if amount < Decimal::ZERO {
            bail!("Expense amount must not be negative, got {}", amount);
        }
        self.execute(
            "INSERT INTO expenses(name, amount, category) VALUES (?1, ?2, ?3)",
            params![name, amount.to_string(), category],
        )?;
        let id = self.last_insert_rowid();
        debug!(id, name, amount = %amount, "stored expense");
        Ok(id)
    }

    fn remove_expense(&self, id: i64) -> Result<bool> {
        let n = self.execute("DELETE FROM expenses WHERE id=?1", params![id])?;
        Ok(n > 0)
    }
}

impl AllowanceSource for Connection {
    fn base_daily_allowance(&self) -> Result<Decimal> {
        let settings = get_settings(self)?;
        let expenses = self.list_expenses()?;
        Ok(daily_allowance(settings.income, total_expenses(&expenses)))
    }
}
