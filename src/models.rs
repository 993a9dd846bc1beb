// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: String,
}

impl Transaction {
    pub fn new(kind: TxKind, amount: Decimal, date: NaiveDate, category: String) -> Transaction {
        Transaction {
            id: generate_id("tx"),
            kind,
            amount,
            date,
            category,
        }
    }

    /// Entity invariant, re-checked on every lenient read.
    pub fn is_valid(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub returns: Decimal,
}

impl Investment {
    pub fn new(kind: String, amount: Decimal, date: NaiveDate, returns: Decimal) -> Investment {
        Investment {
            id: generate_id("inv"),
            kind,
            amount,
            date,
            returns,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.kind.trim().is_empty()
            && self.amount > Decimal::ZERO
            && self.returns >= Decimal::ZERO
            && self.returns <= Decimal::from(100)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub username: String,
    #[serde(rename = "loggedAt")]
    pub logged_at: DateTime<Utc>,
}

/// Opaque identifier, unique for the practical lifetime of the app.
/// Not cryptographic; collision probability is accepted as negligible.
pub fn generate_id(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}
