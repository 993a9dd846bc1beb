// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Store;
use crate::{session, validate};

pub fn login(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let username = sub.get_one::<String>("username").unwrap();
    if let Err(msg) = validate::login(username) {
        println!("{}", msg);
        return Ok(());
    }
    let s = session::login(store, username)?;
    println!("Logged in as {}", s.username);
    Ok(())
}

pub fn logout(store: &Store) -> Result<()> {
    session::logout(store);
    println!("Logged out");
    Ok(())
}

pub fn whoami(store: &Store) -> Result<()> {
    match session::current(store) {
        Some(s) => println!("{} (since {})", s.username, s.logged_at.to_rfc3339()),
        None => println!("Not logged in"),
    }
    Ok(())
}
