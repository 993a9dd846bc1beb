// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Session lifecycle: logged out until a valid session is persisted,
//! logged out again on explicit logout. A corrupt or invalid persisted
//! session reads as logged out.

use anyhow::{Result, anyhow};
use chrono::Utc;

use crate::models::UserSession;
use crate::store::{SLOT_SESSION, Store};
use crate::validate;

pub fn current(store: &Store) -> Option<UserSession> {
    let raw = store.load(SLOT_SESSION)?;
    let session: UserSession = serde_json::from_str(&raw).ok()?;
    validate::login(&session.username).ok()?;
    Some(session)
}

pub fn login(store: &Store, username: &str) -> Result<UserSession> {
    validate::login(username).map_err(|e| anyhow!(e))?;
    let session = UserSession {
        username: username.trim().to_string(),
        logged_at: Utc::now(),
    };
    let raw = serde_json::to_string(&session)?;
    store.save(SLOT_SESSION, &raw);
    Ok(session)
}

pub fn logout(store: &Store) {
    store.clear(SLOT_SESSION);
}

/// Gate for data commands: every view sits behind a login.
pub fn require(store: &Store) -> Result<UserSession> {
    current(store).ok_or_else(|| anyhow!("Not logged in. Run 'pennybook login <USERNAME>' first."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_persists_trimmed_username() {
        let store = Store::open_in_memory().unwrap();
        let session = login(&store, "  alice  ").unwrap();
        assert_eq!(session.username, "alice");
        assert_eq!(current(&store).unwrap().username, "alice");
    }

    #[test]
    fn login_rejects_invalid_username_without_persisting() {
        let store = Store::open_in_memory().unwrap();
        assert!(login(&store, "ab").is_err());
        assert!(current(&store).is_none());
    }

    #[test]
    fn logout_clears_session() {
        let store = Store::open_in_memory().unwrap();
        login(&store, "alice").unwrap();
        logout(&store);
        assert!(current(&store).is_none());
        assert!(require(&store).is_err());
    }

    #[test]
    fn corrupt_session_slot_reads_as_logged_out() {
        let store = Store::open_in_memory().unwrap();
        store.save(SLOT_SESSION, "{not json");
        assert!(current(&store).is_none());

        store.save(SLOT_SESSION, r#"{"username":"ab","loggedAt":"2024-01-05T00:00:00Z"}"#);
        assert!(current(&store).is_none());
    }
}
