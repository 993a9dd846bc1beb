// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pennybook::store::Store;
use tempfile::TempDir;

#[test]
fn values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pennybook.sqlite");
    {
        let store = Store::open_at(&path).unwrap();
        store.save("transactions", "[]");
        store.save("currency", "BRL");
    }
    let store = Store::open_at(&path).unwrap();
    assert_eq!(store.load("transactions").as_deref(), Some("[]"));
    assert_eq!(store.load("currency").as_deref(), Some("BRL"));
    assert_eq!(store.load("session"), None);
}
