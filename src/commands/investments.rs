// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::Investment;
use crate::store::Store;
use crate::utils::{
    fmt_money, get_currency, maybe_print_json, parse_date, parse_decimal, pretty_table,
};
use crate::{aggregate, commands, repo, session, validate};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("by-type", sub)) => by_type(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    session::require(store)?;
    let kind_raw = sub.get_one::<String>("type").unwrap();
    let amount_raw = sub.get_one::<String>("amount").unwrap();
    let date_raw = sub.get_one::<String>("date").unwrap();
    let returns_raw = sub.get_one::<String>("returns").unwrap();

    if let Err(msg) = validate::investment(kind_raw, amount_raw, date_raw, returns_raw) {
        println!("{}", msg);
        return Ok(());
    }

    let kind = kind_raw.trim().to_string();
    let amount = parse_decimal(amount_raw.trim())?;
    let date = parse_date(date_raw.trim())?;
    let returns = parse_decimal(returns_raw.trim())?;

    let mut records = repo::investments(store);
    records.push(Investment::new(kind.clone(), amount, date, returns));
    repo::save_investments(store, &records)?;

    println!(
        "Recorded {} {} on {} ({}% returns)",
        kind,
        fmt_money(&amount, &get_currency(store)),
        date,
        returns
    );

    let summary = aggregate::summary(&repo::transactions(store), &records);
    commands::dashboard::render(store, &summary);
    render_by_type(store, &aggregate::investment_by_kind(&records));
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    session::require(store)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut records = repo::investments(store);
    records.sort_by(|a, b| b.date.cmp(&a.date));
    if !maybe_print_json(json_flag, jsonl_flag, &records)? {
        let ccy = get_currency(store);
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|i| {
                vec![
                    i.date.to_string(),
                    i.kind.clone(),
                    fmt_money(&i.amount, &ccy),
                    format!("{}%", i.returns),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Amount", "Returns"], rows)
        );
    }
    Ok(())
}

fn by_type(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    session::require(store)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let groups = aggregate::investment_by_kind(&repo::investments(store));
    if !maybe_print_json(json_flag, jsonl_flag, &groups)? {
        render_by_type(store, &groups);
    }
    Ok(())
}

pub fn render_by_type(store: &Store, groups: &[(String, Decimal)]) {
    let ccy = get_currency(store);
    let rows: Vec<Vec<String>> = groups
        .iter()
        .map(|(kind, total)| vec![kind.clone(), fmt_money(total, &ccy)])
        .collect();
    println!("{}", pretty_table(&["Type", "Total"], rows));
}
