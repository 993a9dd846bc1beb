// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Store;
use crate::utils::{fmt_money, get_currency, maybe_print_json, pretty_table};
use crate::{aggregate, repo, session};

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    session::require(store)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let summary = aggregate::summary(&repo::transactions(store), &repo::investments(store));
    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        render(store, &summary);
    }
    Ok(())
}

pub fn render(store: &Store, summary: &aggregate::Summary) {
    let ccy = get_currency(store);
    let rows = vec![
        vec!["Total income".to_string(), fmt_money(&summary.total_income, &ccy)],
        vec!["Total expenses".to_string(), fmt_money(&summary.total_expenses, &ccy)],
        vec![
            "Total investments".to_string(),
            fmt_money(&summary.total_investments, &ccy),
        ],
        vec!["Balance".to_string(), fmt_money(&summary.balance, &ccy)],
    ];
    println!("{}", pretty_table(&["", "Amount"], rows));
}
