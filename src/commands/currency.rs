// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Store;
use crate::utils::{get_currency, set_currency};

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    match sub.get_one::<String>("code") {
        Some(code) => {
            set_currency(store, code);
            println!("Display currency set to {}", get_currency(store));
        }
        None => println!("{}", get_currency(store)),
    }
    Ok(())
}
