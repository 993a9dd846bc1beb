// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

pub fn build_cli() -> Command {
    Command::new("pennybook")
        .version(crate_version!())
        .about("Single-user personal finance tracker: transactions, investments, monthly reports")
        .subcommand(
            Command::new("login")
                .about("Start a session")
                .arg(Arg::new("username").required(true).help("Username, 3-30 characters")),
        )
        .subcommand(Command::new("logout").about("End the current session"))
        .subcommand(Command::new("whoami").about("Show the current session"))
        .subcommand(
            Command::new("dashboard")
                .about("Income, expense, investment and balance totals")
                .args(output_flags()),
        )
        .subcommand(
            Command::new("tx")
                .about("Income/expense transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(req_opt("type", "income or expense"))
                        .arg(req_opt("amount", "Amount, greater than zero").allow_negative_numbers(true))
                        .arg(req_opt("date", "Date as YYYY-MM-DD"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Free-text category label"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("Filter to YYYY-MM"))
                        .args(output_flags()),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly views")
                .subcommand(
                    Command::new("month")
                        .about("Transactions for one month, date ascending")
                        .arg(req_opt("month", "Month as YYYY-MM"))
                        .args(output_flags()),
                )
                .subcommand(
                    Command::new("monthly")
                        .about("Income/expense totals per month")
                        .args(output_flags()),
                ),
        )
        .subcommand(
            Command::new("invest")
                .about("Investment entries")
                .subcommand(
                    Command::new("add")
                        .about("Record an investment")
                        .arg(req_opt("type", "Asset class label, e.g. Stocks"))
                        .arg(req_opt("amount", "Amount, greater than zero").allow_negative_numbers(true))
                        .arg(req_opt("date", "Date as YYYY-MM-DD"))
                        .arg(
                            Arg::new("returns")
                                .long("returns")
                                .default_value("0")
                                .help("Expected returns percentage, 0-100"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List investments, newest first")
                        .args(output_flags()),
                )
                .subcommand(
                    Command::new("by-type")
                        .about("Investment totals grouped by type")
                        .args(output_flags()),
                ),
        )
        .subcommand(
            Command::new("currency")
                .about("Show or set the display currency")
                .arg(Arg::new("code").help("Currency code, e.g. USD or BRL")),
        )
}

fn req_opt(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).required(true).help(help)
}

fn output_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    ]
}
