// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure form-input checks. Each function applies its rules in a fixed
//! order and reports the first failure; the `Display` impl of
//! [`ValidationError`] is the message shown inline to the user.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username must be at least 3 characters.")]
    UsernameTooShort,
    #[error("Username must be at most 30 characters.")]
    UsernameTooLong,
    #[error("Type must be 'income' or 'expense'.")]
    BadTransactionKind,
    #[error("Investment type is required.")]
    MissingInvestmentKind,
    #[error("Amount must be a number greater than zero.")]
    BadAmount,
    #[error("Date is invalid, expected YYYY-MM-DD.")]
    BadDate,
    #[error("Returns must be a number between 0 and 100.")]
    BadReturns,
}

pub fn login(username: &str) -> Result<(), ValidationError> {
    // Bounds are in characters, not UTF-8 bytes.
    let len = username.trim().chars().count();
    if len < 3 {
        return Err(ValidationError::UsernameTooShort);
    }
    if len > 30 {
        return Err(ValidationError::UsernameTooLong);
    }
    Ok(())
}

pub fn transaction(kind: &str, amount: &str, date: &str) -> Result<(), ValidationError> {
    if kind != "income" && kind != "expense" {
        return Err(ValidationError::BadTransactionKind);
    }
    check_amount(amount)?;
    check_date(date)?;
    Ok(())
}

pub fn investment(
    kind: &str,
    amount: &str,
    date: &str,
    returns: &str,
) -> Result<(), ValidationError> {
    if kind.trim().is_empty() {
        return Err(ValidationError::MissingInvestmentKind);
    }
    check_amount(amount)?;
    check_date(date)?;
    let r = returns
        .trim()
        .parse::<Decimal>()
        .map_err(|_| ValidationError::BadReturns)?;
    if r < Decimal::ZERO || r > Decimal::from(100) {
        return Err(ValidationError::BadReturns);
    }
    Ok(())
}

fn check_amount(amount: &str) -> Result<(), ValidationError> {
    let a = amount
        .trim()
        .parse::<Decimal>()
        .map_err(|_| ValidationError::BadAmount)?;
    if a <= Decimal::ZERO {
        return Err(ValidationError::BadAmount);
    }
    Ok(())
}

fn check_date(date: &str) -> Result<(), ValidationError> {
    if date.trim().is_empty() {
        return Err(ValidationError::BadDate);
    }
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| ValidationError::BadDate)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_trims_before_measuring() {
        assert!(login("  bob  ").is_ok());
        assert_eq!(login("  ab  "), Err(ValidationError::UsernameTooShort));
        assert_eq!(
            login(&"x".repeat(31)),
            Err(ValidationError::UsernameTooLong)
        );
        assert!(login(&"x".repeat(30)).is_ok());
    }

    #[test]
    fn login_measures_characters_not_bytes() {
        // Two characters, four bytes
        assert_eq!(login("éé"), Err(ValidationError::UsernameTooShort));
        assert_eq!(login("zé"), Err(ValidationError::UsernameTooShort));
        assert!(login("zéé").is_ok());
        // Eleven CJK characters, 33 bytes
        assert!(login(&"경".repeat(11)).is_ok());
        assert_eq!(
            login(&"경".repeat(31)),
            Err(ValidationError::UsernameTooLong)
        );
    }

    #[test]
    fn transaction_rules_fire_in_order() {
        assert!(transaction("income", "100", "2024-01-05").is_ok());
        assert_eq!(
            transaction("transfer", "0", "bad"),
            Err(ValidationError::BadTransactionKind)
        );
        assert_eq!(
            transaction("expense", "0", "bad"),
            Err(ValidationError::BadAmount)
        );
        assert_eq!(
            transaction("expense", "-5", "2024-01-05"),
            Err(ValidationError::BadAmount)
        );
        assert_eq!(
            transaction("expense", "5", "2024-13-01"),
            Err(ValidationError::BadDate)
        );
        assert_eq!(
            transaction("expense", "5", ""),
            Err(ValidationError::BadDate)
        );
    }

    #[test]
    fn investment_rules_fire_in_order() {
        assert!(investment("Stocks", "1000", "2024-03-01", "5.5").is_ok());
        assert_eq!(
            investment("   ", "1000", "2024-03-01", "5"),
            Err(ValidationError::MissingInvestmentKind)
        );
        assert_eq!(
            investment("Stocks", "abc", "2024-03-01", "5"),
            Err(ValidationError::BadAmount)
        );
        assert_eq!(
            investment("Stocks", "1000", "2024-03-99", "5"),
            Err(ValidationError::BadDate)
        );
        assert_eq!(
            investment("Stocks", "1000", "2024-03-01", "101"),
            Err(ValidationError::BadReturns)
        );
        assert_eq!(
            investment("Stocks", "1000", "2024-03-01", "-1"),
            Err(ValidationError::BadReturns)
        );
        assert!(investment("Stocks", "1000", "2024-03-01", "0").is_ok());
        assert!(investment("Stocks", "1000", "2024-03-01", "100").is_ok());
    }
}
