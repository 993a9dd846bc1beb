// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over record lists: dashboard totals, the monthly
//! income/expense series, the investment-by-type series, and the
//! monthly report filter. All functions are pure.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Investment, Transaction, TxKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub total_investments: Decimal,
    pub balance: Decimal,
}

pub fn summary(transactions: &[Transaction], investments: &[Investment]) -> Summary {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    for tx in transactions {
        match tx.kind {
            TxKind::Income => total_income += tx.amount,
            TxKind::Expense => total_expenses += tx.amount,
        }
    }
    let total_investments = investments.iter().map(|i| i.amount).sum();
    Summary {
        total_income,
        total_expenses,
        total_investments,
        balance: total_income - total_expenses,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub month: String, // YYYY-MM
    pub income: Decimal,
    pub expense: Decimal,
}

/// Income and expense totals grouped by year-month, ascending. The
/// fixed-width ISO prefix makes lexicographic order chronological.
/// Months with no transactions are omitted, not zero-filled.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyPoint> {
    let mut by_month: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for tx in transactions {
        let month = tx.date.format("%Y-%m").to_string();
        let entry = by_month.entry(month).or_insert((Decimal::ZERO, Decimal::ZERO));
        match tx.kind {
            TxKind::Income => entry.0 += tx.amount,
            TxKind::Expense => entry.1 += tx.amount,
        }
    }
    by_month
        .into_iter()
        .map(|(month, (income, expense))| MonthlyPoint {
            month,
            income,
            expense,
        })
        .collect()
}

/// Investment amounts summed per type label, in first-seen order.
pub fn investment_by_kind(investments: &[Investment]) -> Vec<(String, Decimal)> {
    let mut groups: Vec<(String, Decimal)> = Vec::new();
    for inv in investments {
        match groups.iter_mut().find(|(kind, _)| *kind == inv.kind) {
            Some((_, total)) => *total += inv.amount,
            None => groups.push((inv.kind.clone(), inv.amount)),
        }
    }
    groups
}

/// Transactions falling within the given `YYYY-MM`, date ascending.
/// An empty result is a valid, displayable state.
pub fn month_report(transactions: &[Transaction], month: &str) -> Vec<Transaction> {
    let mut rows: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| tx.date.format("%Y-%m").to_string() == month)
        .cloned()
        .collect();
    rows.sort_by_key(|tx| tx.date);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(kind: TxKind, amount: i64, date: &str) -> Transaction {
        Transaction::new(
            kind,
            Decimal::from(amount),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            String::new(),
        )
    }

    fn inv(kind: &str, amount: i64) -> Investment {
        Investment::new(
            kind.to_string(),
            Decimal::from(amount),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Decimal::ZERO,
        )
    }

    #[test]
    fn summary_totals_and_balance() {
        let txs = vec![
            tx(TxKind::Income, 100, "2024-01-05"),
            tx(TxKind::Expense, 40, "2024-01-20"),
            tx(TxKind::Income, 50, "2024-02-01"),
        ];
        let invs = vec![inv("Stocks", 1000), inv("Bonds", 300)];
        let s = summary(&txs, &invs);
        assert_eq!(s.total_income, Decimal::from(150));
        assert_eq!(s.total_expenses, Decimal::from(40));
        assert_eq!(s.total_investments, Decimal::from(1300));
        assert_eq!(s.balance, Decimal::from(110));
    }

    #[test]
    fn summary_is_idempotent() {
        let txs = vec![tx(TxKind::Income, 100, "2024-01-05")];
        let invs = vec![inv("Stocks", 1000)];
        assert_eq!(summary(&txs, &invs), summary(&txs, &invs));
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        let s = summary(&[], &[]);
        assert_eq!(s.total_income, Decimal::ZERO);
        assert_eq!(s.balance, Decimal::ZERO);
    }

    #[test]
    fn monthly_series_groups_and_sorts_months() {
        let txs = vec![
            tx(TxKind::Income, 100, "2024-01-05"),
            tx(TxKind::Expense, 40, "2024-01-20"),
            tx(TxKind::Income, 50, "2024-02-01"),
        ];
        let series = monthly_series(&txs);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].month, "2024-01");
        assert_eq!(series[0].income, Decimal::from(100));
        assert_eq!(series[0].expense, Decimal::from(40));
        assert_eq!(series[1].month, "2024-02");
        assert_eq!(series[1].income, Decimal::from(50));
        assert_eq!(series[1].expense, Decimal::ZERO);
    }

    #[test]
    fn monthly_series_omits_empty_months() {
        let txs = vec![
            tx(TxKind::Income, 10, "2024-01-01"),
            tx(TxKind::Income, 20, "2024-04-01"),
        ];
        let months: Vec<_> = monthly_series(&txs).into_iter().map(|p| p.month).collect();
        assert_eq!(months, vec!["2024-01", "2024-04"]);
    }

    #[test]
    fn investment_groups_keep_first_seen_order() {
        let invs = vec![inv("Stocks", 1000), inv("Bonds", 300), inv("Stocks", 500)];
        let groups = investment_by_kind(&invs);
        assert_eq!(
            groups,
            vec![
                ("Stocks".to_string(), Decimal::from(1500)),
                ("Bonds".to_string(), Decimal::from(300)),
            ]
        );
    }

    #[test]
    fn month_report_filters_and_sorts_ascending() {
        let txs = vec![
            tx(TxKind::Expense, 40, "2024-01-20"),
            tx(TxKind::Income, 50, "2024-02-01"),
            tx(TxKind::Income, 100, "2024-01-05"),
        ];
        let rows = month_report(&txs, "2024-01");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date.to_string(), "2024-01-05");
        assert_eq!(rows[1].date.to_string(), "2024-01-20");

        assert!(month_report(&txs, "2023-12").is_empty());
    }
}
