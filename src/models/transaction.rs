//! Ledger record model
//!
//! An income or expense entered by the user. Records are validated on
//! creation and on every edit; the timestamp is fixed at creation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::TransactionId;
use super::money::Money;

/// Whether a record adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    pub kind: TransactionKind,

    /// Always positive; the kind decides the direction
    pub amount: Money,

    pub description: String,

    /// Set for expenses only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ExpenseCategory>,

    /// When the record was entered
    pub timestamp: NaiveDateTime,
}

impl Transaction {
    /// Create a new income record
    pub fn income(amount: Money, description: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            id: TransactionId::new(),
            kind: TransactionKind::Income,
            amount,
            description: description.into(),
            category: None,
            timestamp,
        }
    }

    /// Create a new expense record
    pub fn expense(
        amount: Money,
        description: impl Into<String>,
        category: ExpenseCategory,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind: TransactionKind::Expense,
            amount,
            description: description.into(),
            category: Some(category),
            timestamp,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Calendar date of the record
    pub fn date(&self) -> chrono::NaiveDate {
        self.timestamp.date()
    }

    /// Signed effect on the balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > Money::MAX_AMOUNT {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.is_income() && self.category.is_some() {
            return Err(TransactionValidationError::CategoryOnIncome);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.amount, self.description)?;
        if let Some(category) = self.category {
            write!(f, " ({})", category)?;
        }
        write!(f, " ({})", self.timestamp.format("%m/%d %H:%M"))
    }
}

/// Validation errors for ledger records
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Money),
    #[error("Amount {0} exceeds the largest allowed amount")]
    AmountTooLarge(Money),
    #[error("Description is required")]
    EmptyDescription,
    #[error("Incomes cannot have a category")]
    CategoryOnIncome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_validate_ok() {
        let txn = Transaction::expense(Money::from_cents(1250), "Lunch", ExpenseCategory::Food, at(3));
        assert!(txn.validate().is_ok());
        assert_eq!(txn.signed_amount(), Money::from_cents(-1250));
    }

    #[test]
    fn test_validate_amount() {
        let txn = Transaction::income(Money::zero(), "Salary", at(1));
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );
    }

    #[test]
    fn test_validate_amount_cap() {
        let txn = Transaction::income(Money::MAX_AMOUNT, "Windfall", at(1));
        assert!(txn.validate().is_ok());

        let over = Money::MAX_AMOUNT + Money::from_cents(1);
        let txn = Transaction::income(over, "Windfall", at(1));
        assert_eq!(txn.validate(), Err(TransactionValidationError::AmountTooLarge(over)));
    }

    #[test]
    fn test_validate_description() {
        let txn = Transaction::income(Money::from_cents(100), "   ", at(1));
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyDescription));
    }

    #[test]
    fn test_income_category_rejected() {
        let mut txn = Transaction::income(Money::from_cents(100), "Gift", at(1));
        txn.category = Some(ExpenseCategory::Other);
        assert_eq!(txn.validate(), Err(TransactionValidationError::CategoryOnIncome));
    }

    #[test]
    fn test_display() {
        let txn = Transaction::expense(Money::from_cents(450), "Coffee", ExpenseCategory::Food, at(2));
        assert_eq!(txn.to_string(), "£4.50 - Coffee (Food) (01/02 09:30)");
    }
}
