// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.pennybook", "Pennybook", "pennybook"));

/// Named slots in the key-value store. Each holds a UTF-8 string,
/// usually a JSON document.
pub const SLOT_SESSION: &str = "session";
pub const SLOT_TRANSACTIONS: &str = "transactions";
pub const SLOT_INVESTMENTS: &str = "investments";
pub const SLOT_CURRENCY: &str = "currency";

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("pennybook.sqlite"))
}

/// A key-value string store backed by a single SQLite table.
///
/// `load` returns `None` on any underlying failure and `save`/`clear`
/// are best-effort: a broken store degrades to "no data", it never
/// aborts the command. Callers that need stronger guarantees do their
/// own validation on read.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open_or_init() -> Result<Store> {
        let path = db_path()?;
        let conn = Connection::open(&path)
            .with_context(|| format!("Open store at {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Store { conn })
    }

    pub fn open_in_memory() -> Result<Store> {
        let conn = Connection::open_in_memory().context("Open in-memory store")?;
        init_schema(&conn)?;
        Ok(Store { conn })
    }

    pub fn open_at(path: &std::path::Path) -> Result<Store> {
        let conn = Connection::open(path)
            .with_context(|| format!("Open store at {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Store { conn })
    }

    pub fn load(&self, key: &str) -> Option<String> {
        self.conn
            .query_row(
                "SELECT value FROM slots WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()
            .ok()
            .flatten()
    }

    pub fn save(&self, key: &str, value: &str) {
        let _ = self.conn.execute(
            "INSERT INTO slots(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        );
    }

    pub fn clear(&self, key: &str) {
        let _ = self
            .conn
            .execute("DELETE FROM slots WHERE key=?1", params![key]);
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS slots(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_key_is_none() {
        let store = Store::open_in_memory().unwrap();
        assert_eq!(store.load("nope"), None);
    }

    #[test]
    fn save_overwrites_existing_value() {
        let store = Store::open_in_memory().unwrap();
        store.save("k", "one");
        store.save("k", "two");
        assert_eq!(store.load("k").as_deref(), Some("two"));
    }

    #[test]
    fn clear_removes_key() {
        let store = Store::open_in_memory().unwrap();
        store.save("k", "v");
        store.clear("k");
        assert_eq!(store.load("k"), None);
        // clearing an absent key is a no-op
        store.clear("k");
    }
}
