//! Spending by category
//!
//! Totals expenses per category with each category's share of all spending.

use serde::Serialize;

use crate::models::{ExpenseCategory, Money, Transaction};

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category: ExpenseCategory,
    pub total: Money,
    pub count: usize,
    /// Share of total expenses, 0-100
    pub percentage: f64,
}

/// Expense totals per category
///
/// Categories appear in declaration order; those with no spending are left
/// out. Incomes are ignored.
pub fn category_breakdown(records: &[Transaction]) -> Vec<CategorySpending> {
    let total: Money = records
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    ExpenseCategory::ALL
        .iter()
        .filter_map(|&category| {
            let (sum, count) = records
                .iter()
                .filter(|t| t.is_expense() && t.category == Some(category))
                .fold((Money::zero(), 0), |(sum, count), t| (sum + t.amount, count + 1));

            (count > 0).then(|| CategorySpending {
                category,
                total: sum,
                count,
                percentage: sum.percentage_of(total),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(cents: i64, category: ExpenseCategory) -> Transaction {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Transaction::expense(Money::from_cents(cents), "Item", category, ts)
    }

    #[test]
    fn test_breakdown_order_and_percentages() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let records = vec![
            expense(2_500, ExpenseCategory::Other),
            expense(5_000, ExpenseCategory::Food),
            expense(2_500, ExpenseCategory::Food),
            Transaction::income(Money::from_cents(99_999), "Salary", ts),
        ];

        let breakdown = category_breakdown(&records);
        assert_eq!(breakdown.len(), 2);

        assert_eq!(breakdown[0].category, ExpenseCategory::Food);
        assert_eq!(breakdown[0].total, Money::from_cents(7_500));
        assert_eq!(breakdown[0].count, 2);
        assert!((breakdown[0].percentage - 75.0).abs() < 1e-9);

        assert_eq!(breakdown[1].category, ExpenseCategory::Other);
        assert!((breakdown[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_empty() {
        assert!(category_breakdown(&[]).is_empty());
    }
}
