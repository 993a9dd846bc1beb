// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::aggregate::MonthlyPoint;
use crate::store::Store;
use crate::utils::{fmt_money, get_currency, maybe_print_json, parse_month, pretty_table};
use crate::{aggregate, repo, session};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("month", sub)) => month(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn month(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    session::require(store)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;

    let rows = aggregate::month_report(&repo::transactions(store), &month);
    if maybe_print_json(json_flag, jsonl_flag, &rows)? {
        return Ok(());
    }
    if rows.is_empty() {
        println!("No transactions for {}", month);
        return Ok(());
    }
    let ccy = get_currency(store);
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|t| {
            vec![
                t.date.to_string(),
                t.kind.as_str().to_string(),
                if t.category.is_empty() {
                    "-".to_string()
                } else {
                    t.category.clone()
                },
                fmt_money(&t.amount, &ccy),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Type", "Category", "Amount"], data)
    );
    Ok(())
}

fn monthly(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    session::require(store)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let series = aggregate::monthly_series(&repo::transactions(store));
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        render_monthly(store, &series);
    }
    Ok(())
}

pub fn render_monthly(store: &Store, series: &[MonthlyPoint]) {
    let ccy = get_currency(store);
    let rows: Vec<Vec<String>> = series
        .iter()
        .map(|p| {
            vec![
                p.month.clone(),
                fmt_money(&p.income, &ccy),
                fmt_money(&p.expense, &ccy),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
}
