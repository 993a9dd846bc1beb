// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pennybook::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = store::Store::open_or_init()?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::session::login(&store, sub)?,
        Some(("logout", _)) => commands::session::logout(&store)?,
        Some(("whoami", _)) => commands::session::whoami(&store)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("invest", sub)) => commands::investments::handle(&store, sub)?,
        Some(("currency", sub)) => commands::currency::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
