// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use dailyroll::commands::{doctor, transactions, weeks};
use dailyroll::store::TransactionStore;
use dailyroll::utils::{fmt_money, parse_timestamp, set_setting};
use dailyroll::{cli, db};
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    for i in 1..=3 {
        conn.execute(
            "INSERT INTO transactions(date, amount, category) VALUES (?1, '10', 'Quick Entry')",
            params![format!("2025-03-0{} 12:00:00", i)],
        )
        .unwrap();
    }
    set_setting(&conn, "income", "750").unwrap();
    conn
}

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args.iter().copied());
    let (_, sub) = matches.subcommand().expect("subcommand");
    sub.clone()
}

#[test]
fn list_limit_respected() {
    let conn = setup();
    let matches = cli::build_cli().get_matches_from(["dailyroll", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&conn, list_m).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].date, "2025-03-03 12:00:00");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_is_store_order_reversed() {
    let conn = setup();
    // Same timestamp as an existing row; the later id sorts first.
    conn.execute(
        "INSERT INTO transactions(date, amount, category) VALUES ('2025-03-02 12:00:00', '4.5', 'Food')",
        [],
    )
    .unwrap();
    let sub = sub_matches(&["dailyroll", "tx", "list"]);
    let (_, list_m) = sub.subcommand().unwrap();
    let rows = transactions::query_rows(&conn, list_m).unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 4, 2, 1]);

    let stored: Vec<i64> = conn
        .list_transactions()
        .unwrap()
        .iter()
        .rev()
        .map(|tx| tx.id)
        .collect();
    assert_eq!(ids, stored);
    assert_eq!(rows[1].amount, "4.5");
    assert_eq!(rows[1].category, "Food");
}

#[test]
fn list_limit_beyond_i64_returns_everything() {
    let conn = setup();
    let limit = usize::MAX.to_string();
    let sub = sub_matches(&["dailyroll", "tx", "list", "--limit", &limit]);
    let (_, list_m) = sub.subcommand().unwrap();
    let rows = transactions::query_rows(&conn, list_m).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].date, "2025-03-01 12:00:00");
}

#[test]
fn tx_add_with_date_is_taken_at_noon() {
    let matches = cli::build_cli().get_matches_from([
        "dailyroll",
        "tx",
        "add",
        "7.30",
        "--date",
        "2025-03-05",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    let (_, add_m) = tx_m.subcommand().unwrap();
    let tx = transactions::new_transaction(add_m).unwrap();
    assert_eq!(tx.date, parse_timestamp("2025-03-05 12:00:00").unwrap());
    assert_eq!(tx.amount, "7.30".parse::<Decimal>().unwrap());
    assert_eq!(tx.category, "Quick Entry");
}

#[test]
fn tx_add_rejects_negative_and_malformed_input() {
    let cases: [&[&str]; 3] = [
        &["dailyroll", "tx", "add", "--date", "2025-03-05", "--", "-3"],
        &["dailyroll", "tx", "add", "abc", "--date", "2025-03-05"],
        &["dailyroll", "tx", "add", "3", "--date", "2025-02-30"],
    ];
    for args in cases {
        let tx_m = sub_matches(args);
        let (_, add_m) = tx_m.subcommand().unwrap();
        assert!(transactions::new_transaction(add_m).is_err(), "{:?}", args);
    }
}

#[test]
fn week_selection_defaults_to_visible_weeks() {
    let conn = setup();
    let sub = sub_matches(&["dailyroll", "week", "--date", "2025-03-04"]);
    let all = weeks::compute(&conn, &sub).unwrap();
    assert_eq!(all.len(), 4);
    let shown = weeks::select(&all, &sub).unwrap();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].days[1].adjusted_budget, Decimal::from(30));

    let sub = sub_matches(&["dailyroll", "week", "--date", "2025-03-04", "--all"]);
    assert_eq!(weeks::select(&all, &sub).unwrap().len(), 4);

    let sub = sub_matches(&["dailyroll", "week", "--date", "2025-03-04", "--week", "3"]);
    let picked = weeks::select(&all, &sub).unwrap();
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].week_number, 3);
    assert!(!picked[0].is_visible);

    let sub = sub_matches(&["dailyroll", "week", "--date", "2025-03-04", "--week", "9"]);
    assert!(weeks::select(&all, &sub).is_err());
}

#[test]
fn week_horizon_flag_is_validated() {
    let conn = setup();
    let sub = sub_matches(&["dailyroll", "week", "--date", "2025-03-04", "--weeks", "2"]);
    assert_eq!(weeks::compute(&conn, &sub).unwrap().len(), 2);
    let sub = sub_matches(&["dailyroll", "week", "--date", "2025-03-04", "--weeks", "0"]);
    assert!(weeks::compute(&conn, &sub).is_err());
}

#[test]
fn doctor_reports_rows_that_break_the_contract() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(date, amount) VALUES ('yesterday', '-4')",
        [],
    )
    .unwrap();
    let issues = doctor::find_issues(&conn).unwrap();
    let kinds: Vec<&str> = issues.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(kinds, vec!["bad_date", "negative_amount"]);
}

#[test]
fn doctor_flags_missing_income() {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    let issues = doctor::find_issues(&conn).unwrap();
    assert_eq!(
        issues,
        vec![vec![
            "no_income".to_string(),
            "daily allowance is zero".to_string()
        ]]
    );
}

#[test]
fn money_is_formatted_with_symbol_and_sign() {
    assert_eq!(fmt_money(&"12.5".parse().unwrap(), "£"), "£12.50");
    assert_eq!(fmt_money(&"-3.456".parse().unwrap(), "£"), "-£3.46");
    assert_eq!(fmt_money(&Decimal::ZERO, "$"), "$0.00");
    assert_eq!(fmt_money(&"2.345".parse().unwrap(), "£"), "£2.35");
    assert_eq!(fmt_money(&"-0.005".parse().unwrap(), "£"), "-£0.01");
    // Rounds to zero, so no sign.
    assert_eq!(fmt_money(&"-0.004".parse().unwrap(), "£"), "£0.00");
}
