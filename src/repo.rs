// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Read/validate/write boundary between in-memory records and the store.
//!
//! Reads are lenient: a corrupt slot reads as empty, and individual
//! elements that fail the entity invariant are dropped so one bad
//! record never blocks the rest. Writes overwrite the whole slot.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::models::{Investment, Transaction};
use crate::store::{SLOT_INVESTMENTS, SLOT_TRANSACTIONS, Store};

pub fn transactions(store: &Store) -> Vec<Transaction> {
    read_records(store, SLOT_TRANSACTIONS, Transaction::is_valid)
}

pub fn save_transactions(store: &Store, records: &[Transaction]) -> Result<()> {
    write_records(store, SLOT_TRANSACTIONS, records)
}

pub fn investments(store: &Store) -> Vec<Investment> {
    read_records(store, SLOT_INVESTMENTS, Investment::is_valid)
}

pub fn save_investments(store: &Store, records: &[Investment]) -> Result<()> {
    write_records(store, SLOT_INVESTMENTS, records)
}

fn read_records<T>(store: &Store, slot: &str, is_valid: fn(&T) -> bool) -> Vec<T>
where
    T: serde::de::DeserializeOwned,
{
    let Some(raw) = store.load(slot) else {
        return Vec::new();
    };
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&raw) else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<T>(item).ok())
        .filter(is_valid)
        .collect()
}

fn write_records<T: Serialize>(store: &Store, slot: &str, records: &[T]) -> Result<()> {
    let raw = serde_json::to_string(records)
        .with_context(|| format!("Serialize records for slot '{}'", slot))?;
    store.save(slot, &raw);
    Ok(())
}
