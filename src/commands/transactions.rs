// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{Transaction, TxKind};
use crate::store::Store;
use crate::utils::{
    fmt_money, get_currency, maybe_print_json, parse_date, parse_decimal, parse_month,
    pretty_table,
};
use crate::{aggregate, commands, repo, session, validate};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    session::require(store)?;
    let kind_raw = sub.get_one::<String>("type").unwrap();
    let amount_raw = sub.get_one::<String>("amount").unwrap();
    let date_raw = sub.get_one::<String>("date").unwrap();
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    // Inline form message; the write is rejected entirely.
    if let Err(msg) = validate::transaction(kind_raw, amount_raw, date_raw) {
        println!("{}", msg);
        return Ok(());
    }

    let kind = match kind_raw.as_str() {
        "income" => TxKind::Income,
        _ => TxKind::Expense,
    };
    let amount = parse_decimal(amount_raw.trim())?;
    let date = parse_date(date_raw.trim())?;

    let mut records = repo::transactions(store);
    records.push(Transaction::new(kind, amount, date, category));
    repo::save_transactions(store, &records)?;

    println!(
        "Recorded {} {} on {}",
        kind.as_str(),
        fmt_money(&amount, &get_currency(store)),
        date
    );

    // Each entry refreshes the dependent views: totals and the
    // income/expense series.
    let summary = aggregate::summary(&records, &repo::investments(store));
    commands::dashboard::render(store, &summary);
    commands::reports::render_monthly(store, &aggregate::monthly_series(&records));
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    session::require(store)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let records = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &records)? {
        let ccy = get_currency(store);
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|t| {
                vec![
                    t.date.to_string(),
                    t.kind.as_str().to_string(),
                    t.category.clone(),
                    fmt_money(&t.amount, &ccy),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let mut records = repo::transactions(store);
    if let Some(month) = sub.get_one::<String>("month") {
        let month = parse_month(month)?;
        records.retain(|t| t.date.format("%Y-%m").to_string() == month);
    }
    records.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(records)
}
